//! # Client Error Types
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Client Error Categories                            │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │    Transport    │  │   Application   │  │      Validation         │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  Network        │  │  status != 200  │  │  caught before submit   │ │
//! │  │                 │  │  + server msg   │  │                         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │     Storage     │  │  Serialization  │  │       Config            │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every error ends at the screen boundary as a one-shot alert (see
//! [`ClientError::alert_message`]). Nothing is retried automatically.

use bizmate_core::{CoreError, Language, ValidationError};
use thiserror::Error;

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    // =========================================================================
    // Backend
    // =========================================================================
    /// The request never completed (DNS, connection refused, timeout, TLS).
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a status other than 200.
    #[error("Request failed with status {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Application {
        status: String,
        message: Option<String>,
    },

    /// The response body was not the expected JSON.
    #[error("Unexpected response: {0}")]
    InvalidResponse(String),

    // =========================================================================
    // Domain
    // =========================================================================
    /// Form validation failed before submission.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Domain rule failure from bizmate-core.
    #[error(transparent)]
    Core(CoreError),

    // =========================================================================
    // Local
    // =========================================================================
    /// Key-value storage read or write failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// JSON encoding or decoding failed.
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid client configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<CoreError> for ClientError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(v) => ClientError::Validation(v),
            other => ClientError::Core(other),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::InvalidResponse(err.to_string())
        } else {
            ClientError::Network(err.to_string())
        }
    }
}

impl From<toml::de::Error> for ClientError {
    fn from(err: toml::de::Error) -> Self {
        ClientError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for ClientError {
    fn from(err: toml::ser::Error) -> Self {
        ClientError::Config(err.to_string())
    }
}

impl ClientError {
    /// Text of the alert shown to the user, in `language`.
    ///
    /// ```text
    /// Network          → "network_error" string
    /// Application      → server message, else "something_went_wrong"
    /// Validation       → validation message
    /// anything else    → "something_went_wrong"
    /// ```
    pub fn alert_message(&self, language: Language) -> String {
        match self {
            ClientError::Network(_) => language.translate("network_error").to_string(),
            ClientError::Application {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            ClientError::Validation(err) => err.to_string(),
            ClientError::Core(CoreError::InvalidAmount { .. }) => {
                language.translate("invalid_number").to_string()
            }
            _ => language.translate("something_went_wrong").to_string(),
        }
    }

    /// Returns true for transport failures.
    pub fn is_network(&self) -> bool {
        matches!(self, ClientError::Network(_))
    }
}
