//! # Backend API Client
//!
//! JSON-over-HTTPS client for the business backend.
//!
//! ## Response Envelope
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  { "status": 200 | "200", "message": "...", "data": <payload> }         │
//! │                                                                         │
//! │  status == 200 (number or string)  → Ok(data)                           │
//! │  anything else                     → ClientError::Application           │
//! │  request never completed           → ClientError::Network               │
//! │  body is not JSON                  → ClientError::InvalidResponse       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Endpoints
//! ```text
//!   GET     {base}/fetch_all_{resource}
//!   POST    {base}/create_{resource}
//!   POST    {base}/update_{resource}_by_id/{id}
//!   DELETE  {base}/delete_{resource}_by_id/{id}
//!   GET     {base}/fetch_user_permissions/{user_id}
//! ```
//!
//! Requests are fire-and-await: no retries and no cancellation. A timeout
//! applies only when one is configured.

use std::fmt;
use std::sync::RwLock;
use std::time::Duration;

use bizmate_core::permissions::PermissionRow;
use bizmate_core::InvoiceKind;
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// The `status` value the backend uses for success.
pub const SUCCESS_STATUS: i64 = 200;

// =============================================================================
// Resources
// =============================================================================

/// Backend collections addressed by the CRUD endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    SalesInvoice,
    PurchaseInvoice,
    Supplier,
    Customer,
    Item,
    StaffVisit,
}

impl Resource {
    pub const ALL: [Resource; 6] = [
        Resource::SalesInvoice,
        Resource::PurchaseInvoice,
        Resource::Supplier,
        Resource::Customer,
        Resource::Item,
        Resource::StaffVisit,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Resource::SalesInvoice => "sales_invoice",
            Resource::PurchaseInvoice => "purchase_invoice",
            Resource::Supplier => "supplier",
            Resource::Customer => "customer",
            Resource::Item => "item",
            Resource::StaffVisit => "staff_visit",
        }
    }

    /// Collection an invoice of `kind` is created in.
    pub const fn for_invoice(kind: InvoiceKind) -> Resource {
        match kind {
            InvoiceKind::Sales => Resource::SalesInvoice,
            InvoiceKind::Purchase => Resource::PurchaseInvoice,
        }
    }

    pub fn fetch_all_path(&self) -> String {
        format!("fetch_all_{}", self.as_str())
    }

    pub fn create_path(&self) -> String {
        format!("create_{}", self.as_str())
    }

    pub fn update_path(&self, id: impl fmt::Display) -> String {
        format!("update_{}_by_id/{}", self.as_str(), id)
    }

    pub fn delete_path(&self, id: impl fmt::Display) -> String {
        format!("delete_{}_by_id/{}", self.as_str(), id)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Envelope
// =============================================================================

fn is_success_status(status: &Value) -> bool {
    match status {
        Value::Number(n) => {
            n.as_i64() == Some(SUCCESS_STATUS) || n.as_f64() == Some(SUCCESS_STATUS as f64)
        }
        Value::String(s) => s.trim() == "200",
        _ => false,
    }
}

fn status_text(status: Option<&Value>) -> String {
    match status {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => "missing".to_string(),
        Some(other) => other.to_string(),
    }
}

/// Applies the envelope rule to a decoded response body.
///
/// Returns the `data` field on success (`Value::Null` when absent).
pub fn interpret_envelope(mut envelope: Value) -> ClientResult<Value> {
    let status = envelope.get("status");
    if status.is_some_and(is_success_status) {
        return Ok(envelope
            .get_mut("data")
            .map(Value::take)
            .unwrap_or(Value::Null));
    }

    let message = envelope
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_string);
    Err(ClientError::Application {
        status: status_text(status),
        message,
    })
}

fn decode_data<T: DeserializeOwned>(data: Value) -> ClientResult<T> {
    serde_json::from_value(data).map_err(|e| ClientError::InvalidResponse(e.to_string()))
}

/// Decodes a list payload; a missing or `null` payload is an empty list.
fn decode_list<T: DeserializeOwned>(data: Value) -> ClientResult<Vec<T>> {
    if data.is_null() {
        return Ok(Vec::new());
    }
    decode_data(data)
}

// =============================================================================
// Client
// =============================================================================

/// HTTP client for the backend.
///
/// Safe to share behind an `Arc`; the token can be swapped at sign-in and
/// sign-out without rebuilding the client.
#[derive(Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: RwLock<Option<String>>,
}

impl ApiClient {
    /// Creates a client for `base_url`.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> ClientResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ClientError::Config(format!("failed to build HTTP client: {e}")))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        debug!(base_url = %base_url, ?timeout, "API client created");
        Ok(ApiClient {
            http,
            base_url,
            token: RwLock::new(None),
        })
    }

    /// Creates a client from the `[api]` section of the config.
    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        Self::new(&config.api.base_url, config.api.timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sets or clears the bearer token sent with every request.
    pub fn set_token(&self, token: Option<String>) {
        let mut slot = self.token.write().unwrap_or_else(|e| e.into_inner());
        *slot = token;
    }

    pub fn has_token(&self) -> bool {
        self.token
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .is_some()
    }

    /// Full URL for an endpoint path.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    // =========================================================================
    // Resource Operations
    // =========================================================================

    /// Fetches every record of `resource`.
    pub async fn fetch_all<T: DeserializeOwned>(&self, resource: Resource) -> ClientResult<Vec<T>> {
        let data = self
            .execute(Method::GET, &resource.fetch_all_path(), None::<&()>)
            .await?;
        decode_list(data)
    }

    /// Creates a record and returns the backend's `data` payload.
    pub async fn create<B, T>(&self, resource: Resource, body: &B) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let data = self
            .execute(Method::POST, &resource.create_path(), Some(body))
            .await?;
        decode_data(data)
    }

    /// Updates the record `id` with `body`.
    pub async fn update_by_id<B, T>(
        &self,
        resource: Resource,
        id: impl fmt::Display,
        body: &B,
    ) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let data = self
            .execute(Method::POST, &resource.update_path(id), Some(body))
            .await?;
        decode_data(data)
    }

    /// Deletes the record `id`, returning whatever `data` the backend sent.
    pub async fn delete_by_id(&self, resource: Resource, id: impl fmt::Display) -> ClientResult<Value> {
        self.execute(Method::DELETE, &resource.delete_path(id), None::<&()>)
            .await
    }

    /// Fetches the module permission rows for `user_id`.
    pub async fn fetch_user_permissions(&self, user_id: i64) -> ClientResult<Vec<PermissionRow>> {
        let data = self
            .execute(
                Method::GET,
                &format!("fetch_user_permissions/{user_id}"),
                None::<&()>,
            )
            .await?;
        decode_list(data)
    }

    // =========================================================================
    // Transport
    // =========================================================================

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        let token = self.token.read().unwrap_or_else(|e| e.into_inner());
        match token.as_deref() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn execute<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ClientResult<Value> {
        let mut builder = self.request(method.clone(), path);
        if let Some(body) = body {
            builder = builder.json(body);
        }

        debug!(%method, path, "API request");
        let response = builder
            .send()
            .await
            .inspect_err(|e| warn!(%method, path, error = %e, "API request failed"))?;

        let http_status = response.status();
        let bytes = response
            .bytes()
            .await
            .inspect_err(|e| warn!(%method, path, error = %e, "Failed to read API response"))?;

        let envelope: Value = match serde_json::from_slice(&bytes) {
            Ok(value) => value,
            Err(_) if !http_status.is_success() => {
                return Err(ClientError::Application {
                    status: http_status.as_u16().to_string(),
                    message: None,
                });
            }
            Err(e) => return Err(ClientError::InvalidResponse(e.to_string())),
        };

        interpret_envelope(envelope).inspect_err(|e| {
            warn!(%method, path, error = %e, "API returned failure");
        })
    }
}
