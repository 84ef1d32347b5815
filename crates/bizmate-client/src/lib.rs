//! # bizmate-client: I/O Layer for Bizmate
//!
//! Everything that leaves the process: the business backend's REST API,
//! device key-value storage, and the persisted language preference.
//! Business rules live in `bizmate-core`.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 ★ bizmate-client (THIS CRATE) ★                 │   │
//! │  │                                                                 │   │
//! │  │  ┌───────────┐  ┌──────────────┐  ┌───────────┐  ┌──────────┐  │   │
//! │  │  │    App    │─►│ Localization │─►│  Storage  │  │  Config  │  │   │
//! │  │  │ (context) │  │   Service    │  │ (KV trait)│  │  (TOML)  │  │   │
//! │  │  │           │─►│   Session    │─►│           │  │          │  │   │
//! │  │  │           │─►│  ApiClient   │──┼──► HTTPS backend        │  │   │
//! │  │  └───────────┘  └──────────────┘  └───────────┘  └──────────┘  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │         bizmate-core (permissions, totals, i18n tables)         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`app`] - Startup and the shared application context
//! - [`api`] - Backend client and response envelope handling
//! - [`localization`] - Current language, persistence, change listeners
//! - [`session`] - Stored session and permission loading
//! - [`storage`] - Key-value store trait, memory and file backends
//! - [`config`] - `client.toml` and `BIZMATE_*` environment overrides
//! - [`telemetry`] - Tracing subscriber setup
//! - [`error`] - Client error types and user-facing alert text

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod localization;
pub mod session;
pub mod storage;
pub mod telemetry;

#[cfg(test)]
mod testing;

pub use api::{ApiClient, Resource};
pub use app::App;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use localization::{LocalizationService, Subscription};
pub use session::{PermissionLoader, Session, SessionStore, UserProfile};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageKey};
pub use telemetry::init_tracing;
