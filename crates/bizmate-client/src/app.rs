//! # Application Context
//!
//! Wires configuration, storage, localization, the backend client and the
//! session into one object the screens share.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Application Startup                               │
//! │                                                                         │
//! │  1. Open Storage ─────────────────────────────────────────────────────► │
//! │     • configured path, or the platform data directory                   │
//! │                                                                         │
//! │  2. Build API Client ─────────────────────────────────────────────────► │
//! │     • base URL and optional timeout from [api]                          │
//! │                                                                         │
//! │  3. Localization ─────────────────────────────────────────────────────► │
//! │     • start in [locale].default_language                                │
//! │     • load the saved preference, if any                                 │
//! │                                                                         │
//! │  4. Restore Session ──────────────────────────────────────────────────► │
//! │     • token + profile from storage, or signed out                       │
//! │     • unreadable storage also means signed out                          │
//! │     • permissions are fetched by refresh_permissions()                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, RwLock};

use bizmate_core::catalog::{Category, MenuItem, DASHBOARD_CATEGORIES, DASHBOARD_MENU, REPORTS, REPORT_CATEGORIES};
use bizmate_core::permissions::visible_categories;
use bizmate_core::{InvoiceDraft, InvoiceKind, PermissionGrant};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::api::{ApiClient, Resource};
use crate::config::ClientConfig;
use crate::error::ClientResult;
use crate::localization::LocalizationService;
use crate::session::{PermissionLoader, Session, SessionStore};
use crate::storage::KeyValueStore;

/// Shared state of a running client.
pub struct App {
    config: ClientConfig,
    localization: Arc<LocalizationService>,
    api: Arc<ApiClient>,
    sessions: SessionStore,
    permissions: PermissionLoader,
    session: RwLock<Option<Session>>,
    grant: RwLock<Option<PermissionGrant>>,
}

impl App {
    /// Starts the client with the storage named in `config`.
    pub async fn start(config: ClientConfig) -> ClientResult<Self> {
        let store: Arc<dyn KeyValueStore> = Arc::new(config.storage.open()?);
        Self::with_store(config, store).await
    }

    /// Starts the client on an existing store.
    pub async fn with_store(config: ClientConfig, store: Arc<dyn KeyValueStore>) -> ClientResult<Self> {
        let api = Arc::new(ApiClient::from_config(&config)?);

        let localization = Arc::new(LocalizationService::with_language(
            Arc::clone(&store),
            config.locale.default_language,
        ));
        let language = localization.load_saved().await;

        let sessions = SessionStore::new(store);
        let session = match sessions.restore(&api).await {
            Ok(session) => session,
            Err(e) => {
                warn!(error = %e, "Failed to restore session; starting signed out");
                api.set_token(None);
                None
            }
        };

        info!(
            %language,
            signed_in = session.is_some(),
            base_url = api.base_url(),
            "Client started"
        );

        Ok(App {
            permissions: PermissionLoader::new(Arc::clone(&api)),
            config,
            localization,
            api,
            sessions,
            session: RwLock::new(session),
            grant: RwLock::new(None),
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn localization(&self) -> &Arc<LocalizationService> {
        &self.localization
    }

    pub fn api(&self) -> &Arc<ApiClient> {
        &self.api
    }

    pub fn session(&self) -> Option<Session> {
        self.session
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn grant(&self) -> Option<PermissionGrant> {
        self.grant.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// Persists `session` and loads its permissions.
    ///
    /// The session stays signed in when only the permission fetch fails;
    /// [`App::refresh_permissions`] retries it.
    pub async fn sign_in(&self, session: Session) -> ClientResult<PermissionGrant> {
        self.sessions.sign_in(&self.api, &session).await?;
        let user = session.user.clone();
        *self.session.write().unwrap_or_else(|e| e.into_inner()) = Some(session);
        *self.grant.write().unwrap_or_else(|e| e.into_inner()) = None;

        let grant = self
            .permissions
            .load(&user)
            .await
            .inspect_err(|e| warn!(user_id = user.id, error = %e, "Signed in without permissions"))?;
        *self.grant.write().unwrap_or_else(|e| e.into_inner()) = Some(grant.clone());
        Ok(grant)
    }

    /// Fetches the permissions of the current session.
    ///
    /// Returns `None` when signed out.
    pub async fn refresh_permissions(&self) -> ClientResult<Option<PermissionGrant>> {
        let Some(session) = self.session() else {
            debug!("Not signed in; no permissions to load");
            return Ok(None);
        };

        let grant = self.permissions.load(&session.user).await?;
        *self.grant.write().unwrap_or_else(|e| e.into_inner()) = Some(grant.clone());
        Ok(Some(grant))
    }

    pub async fn sign_out(&self) -> ClientResult<()> {
        self.sessions.sign_out(&self.api).await?;
        *self.session.write().unwrap_or_else(|e| e.into_inner()) = None;
        *self.grant.write().unwrap_or_else(|e| e.into_inner()) = None;
        Ok(())
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    /// Dashboard entries the current user may open. Empty until
    /// permissions are loaded.
    pub fn visible_menu(&self) -> Vec<&'static MenuItem> {
        self.grant()
            .map(|grant| grant.visible(DASHBOARD_MENU))
            .unwrap_or_default()
    }

    /// Report entries the current user may open.
    pub fn visible_reports(&self) -> Vec<&'static MenuItem> {
        self.grant()
            .map(|grant| grant.visible(REPORTS))
            .unwrap_or_default()
    }

    /// Dashboard categories that still contain a visible entry.
    pub fn visible_menu_categories(&self) -> Vec<&'static Category> {
        visible_categories(&self.visible_menu(), DASHBOARD_CATEGORIES)
    }

    /// Report categories that still contain a visible entry.
    pub fn visible_report_categories(&self) -> Vec<&'static Category> {
        visible_categories(&self.visible_reports(), REPORT_CATEGORIES)
    }

    // =========================================================================
    // Invoices
    // =========================================================================

    /// A new draft using the configured amount policy.
    pub fn new_invoice(&self, kind: InvoiceKind) -> InvoiceDraft {
        InvoiceDraft::with_policy(kind, self.config.forms.amount_policy)
    }

    /// Validates `draft` and creates it on the backend.
    pub async fn submit_invoice(&self, draft: &InvoiceDraft) -> ClientResult<Value> {
        let payload = draft.to_payload()?;
        let resource = Resource::for_invoice(draft.kind);
        info!(%resource, lines = payload.items.len(), total = payload.total_amount, "Submitting invoice");
        self.api.create(resource, &payload).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use crate::session::UserProfile;
    use crate::storage::{FileStore, MemoryStore, StorageKey};
    use crate::testing::serve_once;
    use bizmate_core::{AmountPolicy, Language, Role};

    fn offline_config() -> ClientConfig {
        let mut config = ClientConfig::default();
        config.api.base_url = "http://127.0.0.1:9".into();
        config
    }

    fn user(role: i64) -> UserProfile {
        UserProfile {
            id: 5,
            name: "Layla".into(),
            email: None,
            role_id: Role::new(role),
        }
    }

    #[tokio::test]
    async fn test_start_loads_saved_language() {
        let store = Arc::new(MemoryStore::new());
        store.set(StorageKey::Language, "ar").await.unwrap();

        let app = App::with_store(offline_config(), store).await.unwrap();
        assert_eq!(app.localization().current(), Language::Ar);
        assert!(app.session().is_none());
        assert!(app.visible_menu().is_empty());
    }

    #[tokio::test]
    async fn test_admin_sign_in_sees_everything() {
        let app = App::with_store(offline_config(), Arc::new(MemoryStore::new()))
            .await
            .unwrap();

        app.sign_in(Session::new("tok", user(1))).await.unwrap();
        assert_eq!(app.visible_menu().len(), DASHBOARD_MENU.len());
        assert_eq!(app.visible_reports().len(), REPORTS.len());
        assert_eq!(app.visible_menu_categories().len(), DASHBOARD_CATEGORIES.len());
        assert!(app.api().has_token());

        app.sign_out().await.unwrap();
        assert!(app.visible_menu().is_empty());
        assert!(!app.api().has_token());
    }

    #[tokio::test]
    async fn test_session_survives_restart() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let app = App::with_store(offline_config(), Arc::clone(&store))
            .await
            .unwrap();
        app.sign_in(Session::new("tok", user(2))).await.unwrap();

        let restarted = App::with_store(offline_config(), store).await.unwrap();
        assert_eq!(restarted.session().map(|s| s.user.id), Some(5));
        assert!(restarted.api().has_token());

        let grant = restarted.refresh_permissions().await.unwrap().unwrap();
        assert_eq!(grant.role, Role::new(2));
    }

    #[tokio::test]
    async fn test_new_invoice_uses_configured_policy() {
        let mut config = offline_config();
        config.forms.amount_policy = AmountPolicy::Reject;
        let app = App::with_store(config, Arc::new(MemoryStore::new()))
            .await
            .unwrap();

        let draft = app.new_invoice(InvoiceKind::Sales);
        assert_eq!(draft.policy(), AmountPolicy::Reject);
    }

    #[tokio::test]
    async fn test_invalid_invoice_is_rejected_before_sending() {
        let app = App::with_store(offline_config(), Arc::new(MemoryStore::new()))
            .await
            .unwrap();

        let draft = app.new_invoice(InvoiceKind::Purchase);
        let err = app.submit_invoice(&draft).await.unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
    }

    #[tokio::test]
    async fn test_failed_permission_fetch_keeps_session_for_retry() {
        let app = App::with_store(offline_config(), Arc::new(MemoryStore::new()))
            .await
            .unwrap();

        let err = app.sign_in(Session::new("tok", user(3))).await.unwrap_err();
        assert!(err.is_network());
        assert_eq!(app.session().map(|s| s.user.id), Some(5));
        assert!(app.api().has_token());
        assert!(app.grant().is_none());
        assert!(app.visible_menu().is_empty());

        // Still signed in, so a retry reaches the backend again.
        let err = app.refresh_permissions().await.unwrap_err();
        assert!(err.is_network());
    }

    #[tokio::test]
    async fn test_permission_retry_after_failed_sign_in() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let offline = App::with_store(offline_config(), Arc::clone(&store))
            .await
            .unwrap();
        offline.sign_in(Session::new("tok", user(3))).await.unwrap_err();

        let (base_url, server) = serve_once(
            200,
            r#"{"status": 200, "data": [{"module_name": "sales_invoice"}]}"#,
        )
        .await;
        let mut config = offline_config();
        config.api.base_url = base_url;
        let app = App::with_store(config, store).await.unwrap();

        let grant = app.refresh_permissions().await.unwrap().unwrap();
        assert_eq!(grant.role, Role::new(3));
        assert!(grant.allows("sales_invoice"));
        assert!(!grant.allows("items"));
        assert!(!app.visible_menu().is_empty());

        let request = server.await.unwrap();
        assert!(request.starts_with("GET /fetch_user_permissions/5 "));
        assert!(request.to_lowercase().contains("authorization: bearer tok"));
    }

    #[tokio::test]
    async fn test_corrupt_storage_starts_signed_out() {
        let dir = std::env::temp_dir().join(format!("bizmate-app-{}", uuid::Uuid::new_v4()));
        let path = dir.join("store.json");
        tokio::fs::create_dir_all(&dir).await.unwrap();
        tokio::fs::write(&path, r#"{"app_language": "ar", "auth_tok"#)
            .await
            .unwrap();

        let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(&path));
        let app = App::with_store(offline_config(), Arc::clone(&store))
            .await
            .unwrap();
        assert!(app.session().is_none());
        assert!(!app.api().has_token());
        assert_eq!(app.localization().current(), Language::En);

        // Signing in replaces the unreadable file.
        app.sign_in(Session::new("tok", user(1))).await.unwrap();
        let restarted = App::with_store(offline_config(), store).await.unwrap();
        assert_eq!(restarted.session().map(|s| s.token), Some("tok".to_string()));

        let _ = tokio::fs::remove_dir_all(&dir).await;
    }

    #[tokio::test]
    async fn test_submit_sales_invoice_posts_payload() {
        let (base_url, server) = serve_once(200, r#"{"status": 200, "data": {"id": 9}}"#).await;
        let mut config = offline_config();
        config.api.base_url = base_url;
        let app = App::with_store(config, Arc::new(MemoryStore::new()))
            .await
            .unwrap();

        let mut draft = app.new_invoice(InvoiceKind::Sales);
        draft.set_party("c1");
        let key = draft.add_line();
        draft.set_line_item(&key, "item-1", Some(50.0)).unwrap();
        draft.set_quantity(&key, "3").unwrap();

        let created = app.submit_invoice(&draft).await.unwrap();
        assert_eq!(created["id"], 9);

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /create_sales_invoice "), "{request}");
        assert!(request.contains(r#""customer_id":"c1""#));
        assert!(request.contains(r#""total_amount":150.0"#));
    }
}
