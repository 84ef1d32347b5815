//! # Session & Permissions
//!
//! ## Sign-in Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  sign in ──► SessionStore::save ──► ApiClient::set_token                │
//! │                                           │                             │
//! │                                           ▼                             │
//! │                        PermissionLoader::load (once per session)        │
//! │                                           │                             │
//! │                                           ▼                             │
//! │                        PermissionGrant held in memory                   │
//! │                                                                         │
//! │  app start ──► SessionStore::restore (token + profile, or signed out)   │
//! │  sign out  ──► SessionStore::clear ──► token removed                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use bizmate_core::{PermissionGrant, Role};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::api::ApiClient;
use crate::error::ClientResult;
use crate::storage::{KeyValueStore, StorageKey};

// =============================================================================
// Session Types
// =============================================================================

/// Profile of the signed-in user, as cached on the device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub role_id: Role,
}

impl UserProfile {
    pub fn role(&self) -> Role {
        self.role_id
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: UserProfile,
    pub signed_in_at: DateTime<Utc>,
}

impl Session {
    /// A session starting now.
    pub fn new(token: impl Into<String>, user: UserProfile) -> Self {
        Session {
            token: token.into(),
            user,
            signed_in_at: Utc::now(),
        }
    }
}

/// Stored form of the profile. `signed_in_at` is optional so profiles
/// written without it still load.
#[derive(Serialize, Deserialize)]
struct StoredProfile {
    #[serde(flatten)]
    user: UserProfile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    signed_in_at: Option<DateTime<Utc>>,
}

// =============================================================================
// Session Store
// =============================================================================

/// Persists the session token and user profile.
#[derive(Clone)]
pub struct SessionStore {
    store: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        SessionStore { store }
    }

    pub async fn save(&self, session: &Session) -> ClientResult<()> {
        let stored = StoredProfile {
            user: session.user.clone(),
            signed_in_at: Some(session.signed_in_at),
        };
        let profile = serde_json::to_string(&stored)?;

        self.store.set(StorageKey::SessionToken, &session.token).await?;
        self.store.set(StorageKey::UserProfile, &profile).await?;

        info!(user_id = session.user.id, role = session.user.role_id.id(), "Session saved");
        Ok(())
    }

    /// Loads the stored session.
    ///
    /// Returns `None` when the token or profile is missing, or when the
    /// stored profile does not parse.
    pub async fn load(&self) -> ClientResult<Option<Session>> {
        let Some(token) = self.store.get(StorageKey::SessionToken).await? else {
            return Ok(None);
        };
        let Some(profile) = self.store.get(StorageKey::UserProfile).await? else {
            debug!("Session token present without a profile; treating as signed out");
            return Ok(None);
        };

        match serde_json::from_str::<StoredProfile>(&profile) {
            Ok(stored) => Ok(Some(Session {
                token,
                user: stored.user,
                signed_in_at: stored.signed_in_at.unwrap_or_else(Utc::now),
            })),
            Err(e) => {
                warn!(error = %e, "Stored user profile is unreadable; treating as signed out");
                Ok(None)
            }
        }
    }

    /// Loads the stored session and installs its token on `api`.
    pub async fn restore(&self, api: &ApiClient) -> ClientResult<Option<Session>> {
        let session = self.load().await?;
        api.set_token(session.as_ref().map(|s| s.token.clone()));
        if let Some(session) = &session {
            debug!(user_id = session.user.id, "Session restored");
        }
        Ok(session)
    }

    /// Saves `session` and installs its token on `api`.
    pub async fn sign_in(&self, api: &ApiClient, session: &Session) -> ClientResult<()> {
        self.save(session).await?;
        api.set_token(Some(session.token.clone()));
        Ok(())
    }

    /// Removes the stored session.
    pub async fn clear(&self) -> ClientResult<()> {
        self.store.remove(StorageKey::SessionToken).await?;
        self.store.remove(StorageKey::UserProfile).await?;
        info!("Session cleared");
        Ok(())
    }

    /// Clears the stored session and drops the token from `api`.
    pub async fn sign_out(&self, api: &ApiClient) -> ClientResult<()> {
        api.set_token(None);
        self.clear().await
    }
}

// =============================================================================
// Permission Loader
// =============================================================================

/// Builds the signed-in user's [`PermissionGrant`].
pub struct PermissionLoader {
    api: Arc<ApiClient>,
}

impl PermissionLoader {
    pub fn new(api: Arc<ApiClient>) -> Self {
        PermissionLoader { api }
    }

    /// Fetches the permission rows for `user`.
    ///
    /// Only the restricted role is filtered, so other roles get an empty
    /// grant without a request.
    pub async fn load(&self, user: &UserProfile) -> ClientResult<PermissionGrant> {
        let role = user.role();
        if !role.is_restricted() {
            debug!(user_id = user.id, role = role.id(), "Role has full access");
            return Ok(PermissionGrant::empty(role));
        }

        let rows = self.api.fetch_user_permissions(user.id).await?;
        let grant = PermissionGrant::from_rows(role, rows);
        info!(
            user_id = user.id,
            modules = grant.modules.len(),
            "Permissions loaded"
        );
        Ok(grant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn profile(role: i64) -> UserProfile {
        UserProfile {
            id: 12,
            name: "Sara".into(),
            email: Some("sara@example.com".into()),
            role_id: Role::new(role),
        }
    }

    fn sessions() -> (SessionStore, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        (SessionStore::new(store.clone()), store)
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let (sessions, _) = sessions();
        assert_eq!(sessions.load().await.unwrap(), None);

        let session = Session::new("tok-1", profile(3));
        sessions.save(&session).await.unwrap();

        let loaded = sessions.load().await.unwrap().unwrap();
        assert_eq!(loaded, session);
    }

    #[tokio::test]
    async fn test_corrupt_profile_means_signed_out() {
        let (sessions, store) = sessions();
        store.set(StorageKey::SessionToken, "tok-1").await.unwrap();
        store.set(StorageKey::UserProfile, "{not json").await.unwrap();

        assert_eq!(sessions.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_profile_without_timestamp_loads() {
        let (sessions, store) = sessions();
        store.set(StorageKey::SessionToken, "tok-1").await.unwrap();
        store
            .set(
                StorageKey::UserProfile,
                r#"{"id": 4, "name": "Omar", "role_id": 1}"#,
            )
            .await
            .unwrap();

        let loaded = sessions.load().await.unwrap().unwrap();
        assert_eq!(loaded.user.id, 4);
        assert_eq!(loaded.user.email, None);
        assert!(!loaded.user.role().is_restricted());
    }

    #[tokio::test]
    async fn test_sign_in_and_out_manage_token() {
        let (sessions, store) = sessions();
        let api = ApiClient::new("https://api.example.com", None).unwrap();

        sessions
            .sign_in(&api, &Session::new("tok-2", profile(1)))
            .await
            .unwrap();
        assert!(api.has_token());

        sessions.sign_out(&api).await.unwrap();
        assert!(!api.has_token());
        assert_eq!(store.get(StorageKey::SessionToken).await.unwrap(), None);
        assert_eq!(store.get(StorageKey::UserProfile).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_restore_installs_token() {
        let (sessions, _) = sessions();
        let api = ApiClient::new("https://api.example.com", None).unwrap();
        sessions.save(&Session::new("tok-3", profile(3))).await.unwrap();

        let restored = sessions.restore(&api).await.unwrap();
        assert!(restored.is_some());
        assert!(api.has_token());
    }

    #[tokio::test]
    async fn test_unrestricted_role_skips_fetch() {
        // Unreachable backend: a request would fail.
        let api = Arc::new(ApiClient::new("http://127.0.0.1:9", None).unwrap());
        let loader = PermissionLoader::new(api);

        let grant = loader.load(&profile(1)).await.unwrap();
        assert!(grant.modules.is_empty());
        assert_eq!(grant.role, Role::new(1));
    }
}
