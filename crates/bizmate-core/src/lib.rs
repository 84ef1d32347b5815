//! # bizmate-core: Pure Business Logic for Bizmate
//!
//! This crate holds the rules every Bizmate screen shares, as pure functions
//! with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Bizmate Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Mobile Screens                               │   │
//! │  │   Dashboard ──► Invoice Form ──► Reports ──► Settings           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ bizmate-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │  ┌─────────────┐ ┌──────────┐ ┌──────────┐ ┌──────────────┐    │   │
//! │  │  │ permissions │ │ invoice  │ │   i18n   │ │   routes     │    │   │
//! │  │  │  catalog    │ │  amount  │ │ Language │ │  RouteTable  │    │   │
//! │  │  └─────────────┘ └──────────┘ └──────────┘ └──────────────┘    │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO STORAGE • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              bizmate-client (REST API, storage)                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`permissions`] - Role/module filtering of catalog entries
//! - [`catalog`] - Static dashboard menu, report and category catalogs
//! - [`routes`] - Stable route identifiers and the handler lookup table
//! - [`amount`] - Parsing and formatting of numeric form input
//! - [`invoice`] - Invoice totals and editable invoice drafts
//! - [`i18n`] - Supported languages and string tables
//! - [`validation`] - Submission checks
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use bizmate_core::invoice::{compute_totals, LineAmounts};
//!
//! let lines = [LineAmounts::new(3.0, 50.0)];
//! let totals = compute_totals(&lines, 15.0, 10.0, None);
//!
//! assert_eq!(totals.subtotal, 150.0);
//! assert_eq!(totals.total_amount, 157.5);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod amount;
pub mod catalog;
pub mod error;
pub mod i18n;
pub mod invoice;
pub mod permissions;
pub mod routes;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use amount::{AmountPolicy, ParsedAmount};
pub use error::{CoreError, CoreResult, ValidationError};
pub use i18n::Language;
pub use invoice::{InvoiceDraft, InvoiceKind, InvoiceTotals};
pub use permissions::{PermissionGrant, Role};
pub use routes::{RouteId, RouteTable};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Role identifier of restricted (staff) users.
///
/// Every other role id, including ones the backend may add later, is treated
/// as unrestricted.
pub const RESTRICTED_ROLE_ID: i64 = 3;

/// Number of decimal places used when presenting monetary values.
pub const DISPLAY_DECIMALS: usize = 2;

/// Upper bound for tax and discount percentages.
pub const MAX_PERCENTAGE: f64 = 100.0;
