//! # Validation Module
//!
//! Checks run before a form is submitted to the backend.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Field parsing (amount.rs)                                    │
//! │  └── Text → number, invalid input coerced or rejected                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Required fields                                                   │
//! │  └── Ranges (quantity > 0, 0 ≤ percentage ≤ 100)                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Backend                                                      │
//! │  └── status != 200 → alert with server message                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A failure here aborts the submission and is shown as an alert.

use crate::error::ValidationError;
use crate::MAX_PERCENTAGE;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates that a selectable or typed field has a value.
///
/// ## Example
/// ```rust
/// use bizmate_core::validation::validate_required;
///
/// assert!(validate_required("supplier_id", Some("17")).is_ok());
/// assert!(validate_required("supplier_id", Some("  ")).is_err());
/// assert!(validate_required("supplier_id", None).is_err());
/// ```
pub fn validate_required(field: &str, value: Option<&str>) -> ValidationResult<()> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(()),
        _ => Err(ValidationError::required(field)),
    }
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a line quantity: must be greater than zero.
pub fn validate_quantity(field: &str, qty: f64) -> ValidationResult<()> {
    if qty.is_finite() && qty > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::MustBePositive {
            field: field.to_string(),
        })
    }
}

/// Validates a price or amount: zero is allowed (free items), negatives
/// are not.
pub fn validate_non_negative(field: &str, value: f64) -> ValidationResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ValidationError::MustBeNonNegative {
            field: field.to_string(),
        })
    }
}

/// Validates a tax or discount percentage (0 to 100 inclusive).
///
/// ## Example
/// ```rust
/// use bizmate_core::validation::validate_percentage;
///
/// assert!(validate_percentage("tax_percentage", 15.0).is_ok());
/// assert!(validate_percentage("tax_percentage", 100.5).is_err());
/// ```
pub fn validate_percentage(field: &str, pct: f64) -> ValidationResult<()> {
    if pct.is_finite() && (0.0..=MAX_PERCENTAGE).contains(&pct) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0.0,
            max: MAX_PERCENTAGE,
        })
    }
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates that a list the form submits has at least one entry.
pub fn validate_not_empty(field: &str, len: usize) -> ValidationResult<()> {
    if len == 0 {
        return Err(ValidationError::Empty {
            field: field.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required() {
        assert!(validate_required("customer_id", Some("c-1")).is_ok());
        assert_eq!(
            validate_required("customer_id", Some("")),
            Err(ValidationError::required("customer_id"))
        );
        assert!(validate_required("customer_id", None).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity("quantity", 1.0).is_ok());
        assert!(validate_quantity("quantity", 0.25).is_ok());
        assert!(validate_quantity("quantity", 0.0).is_err());
        assert!(validate_quantity("quantity", -2.0).is_err());
        assert!(validate_quantity("quantity", f64::NAN).is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative("unit_price", 0.0).is_ok());
        assert!(validate_non_negative("unit_price", 10.5).is_ok());
        assert_eq!(
            validate_non_negative("unit_price", -0.01),
            Err(ValidationError::MustBeNonNegative {
                field: "unit_price".to_string()
            })
        );
    }

    #[test]
    fn test_validate_percentage() {
        assert!(validate_percentage("tax_percentage", 0.0).is_ok());
        assert!(validate_percentage("tax_percentage", 100.0).is_ok());
        assert!(validate_percentage("tax_percentage", -1.0).is_err());
        assert!(validate_percentage("tax_percentage", 101.0).is_err());
    }

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("items", 1).is_ok());
        assert!(validate_not_empty("items", 0).is_err());
    }
}
