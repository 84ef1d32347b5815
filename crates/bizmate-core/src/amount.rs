//! # Amount Module
//!
//! Parsing and presentation of the numeric fields typed into forms
//! (quantities, unit prices, percentages, discount amounts).
//!
//! ## Boundary Parsing
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Text field "12.5"  ──► parse_amount ──► ParsedAmount::Value(12.5)      │
//! │  Text field ""      ──► parse_amount ──► ParsedAmount::Empty            │
//! │  Text field "abc"   ──► parse_amount ──► ParsedAmount::Invalid("abc")   │
//! │                                │                                        │
//! │                                ▼                                        │
//! │                  resolve(field, AmountPolicy)                           │
//! │                  ├── CoerceToZero: Empty/Invalid → 0.0                  │
//! │                  └── Reject: Invalid → CoreError::InvalidAmount         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Calculations run on `f64` without intermediate rounding; only
//! [`format_amount`] and [`round2`] round, at presentation time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::DISPLAY_DECIMALS;

// =============================================================================
// Parsed Amount
// =============================================================================

/// Result of parsing a numeric form field.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedAmount {
    /// A finite decimal number.
    Value(f64),
    /// The field is blank.
    Empty,
    /// The field holds text that is not a number.
    Invalid(String),
}

impl ParsedAmount {
    /// Returns the value, treating blank and invalid input as zero.
    pub fn or_zero(&self) -> f64 {
        match self {
            ParsedAmount::Value(v) => *v,
            ParsedAmount::Empty | ParsedAmount::Invalid(_) => 0.0,
        }
    }

    /// Returns true when the input was not a number.
    pub fn is_invalid(&self) -> bool {
        matches!(self, ParsedAmount::Invalid(_))
    }

    /// Applies `policy` to decide the stored value.
    ///
    /// Blank input is always zero; only text that is not a number can be
    /// rejected.
    pub fn resolve(&self, field: &str, policy: AmountPolicy) -> CoreResult<f64> {
        match (self, policy) {
            (ParsedAmount::Invalid(input), AmountPolicy::Reject) => Err(CoreError::InvalidAmount {
                field: field.to_string(),
                input: input.clone(),
            }),
            _ => Ok(self.or_zero()),
        }
    }
}

/// Parses a numeric form field.
///
/// Accepts an optional sign, digits and at most one decimal point. Spellings
/// such as `inf` or `NaN` are invalid.
///
/// ## Example
/// ```rust
/// use bizmate_core::amount::{parse_amount, ParsedAmount};
///
/// assert_eq!(parse_amount(" 12.5 "), ParsedAmount::Value(12.5));
/// assert_eq!(parse_amount(""), ParsedAmount::Empty);
/// assert!(parse_amount("12abc").is_invalid());
/// ```
pub fn parse_amount(raw: &str) -> ParsedAmount {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return ParsedAmount::Empty;
    }

    let digits = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    let well_formed = !digits.is_empty()
        && digits.chars().any(|c| c.is_ascii_digit())
        && digits.chars().all(|c| c.is_ascii_digit() || c == '.')
        && digits.matches('.').count() <= 1;

    if !well_formed {
        return ParsedAmount::Invalid(raw.to_string());
    }

    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => ParsedAmount::Value(v),
        _ => ParsedAmount::Invalid(raw.to_string()),
    }
}

// =============================================================================
// Amount Policy
// =============================================================================

/// How invalid numeric input is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum AmountPolicy {
    /// Invalid input silently becomes zero (legacy screen behavior).
    #[default]
    CoerceToZero,
    /// Invalid input is refused and the previous value is kept.
    Reject,
}

impl fmt::Display for AmountPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountPolicy::CoerceToZero => write!(f, "coerce_to_zero"),
            AmountPolicy::Reject => write!(f, "reject"),
        }
    }
}

impl FromStr for AmountPolicy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "coerce_to_zero" | "coerce" | "zero" => Ok(AmountPolicy::CoerceToZero),
            "reject" | "strict" => Ok(AmountPolicy::Reject),
            other => Err(CoreError::InvalidAmount {
                field: "amount_policy".to_string(),
                input: other.to_string(),
            }),
        }
    }
}

// =============================================================================
// Presentation
// =============================================================================

/// Rounds to two decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Formats a value with two decimal places for display.
///
/// ## Example
/// ```rust
/// use bizmate_core::amount::format_amount;
///
/// assert_eq!(format_amount(157.5), "157.50");
/// assert_eq!(format_amount(0.0), "0.00");
/// ```
pub fn format_amount(value: f64) -> String {
    let rounded = round2(value);
    // Avoid "-0.00" for tiny negative results.
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{:.*}", DISPLAY_DECIMALS, rounded)
}
