//! # Error Types
//!
//! Domain-specific error types for bizmate-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  bizmate-core errors (this file)                                       │
//! │  ├── CoreError        - Domain rule failures                           │
//! │  └── ValidationError  - Form checks before submission                  │
//! │                                                                         │
//! │  bizmate-client errors (separate crate)                                │
//! │  └── ClientError      - Network, backend status, storage               │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ClientError → Alert on screen     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// Language code is neither `en` nor `ar`.
    ///
    /// ## When This Occurs
    /// - A settings screen passes a code outside the supported set
    /// - Configuration names an unknown default language
    #[error("Unsupported language: '{code}'")]
    UnsupportedLanguage { code: String },

    /// A numeric form field could not be parsed and the active policy
    /// rejects invalid input.
    #[error("{field} is not a valid number: '{input}'")]
    InvalidAmount { field: String, input: String },

    /// An invoice line key does not exist in the draft.
    #[error("Invoice line not found: {0}")]
    LineNotFound(String),

    /// A route identifier string does not name a known destination.
    #[error("Unknown route: '{0}'")]
    UnknownRoute(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before a form is submitted; the screen shows the message and
/// aborts the submission.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be greater than zero.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must be zero or greater.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: f64, max: f64 },

    /// A collection that needs at least one entry is empty.
    #[error("{field} must contain at least one entry")]
    Empty { field: String },
}

impl ValidationError {
    /// Shorthand for [`ValidationError::Required`].
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::UnsupportedLanguage {
            code: "fr".to_string(),
        };
        assert_eq!(err.to_string(), "Unsupported language: 'fr'");

        let err = CoreError::InvalidAmount {
            field: "quantity".to_string(),
            input: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "quantity is not a valid number: 'abc'");
    }

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(
            ValidationError::required("supplier_id").to_string(),
            "supplier_id is required"
        );

        let err = ValidationError::OutOfRange {
            field: "tax_percentage".to_string(),
            min: 0.0,
            max: 100.0,
        };
        assert_eq!(err.to_string(), "tax_percentage must be between 0 and 100");

        let err = ValidationError::MustBeNonNegative {
            field: "unit_price".to_string(),
        };
        assert_eq!(err.to_string(), "unit_price must not be negative");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let core_err: CoreError = ValidationError::required("items").into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
