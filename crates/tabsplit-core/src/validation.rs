//! # Validation Module
//!
//! Parsing of user-entered numbers, and the leniency policy built on it.
//!
//! ## Strict vs Lenient
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Two Layers, One Rule                               │
//! │                                                                         │
//! │  parse_amount("12.50", ..)  ──► Ok(12.50)    exact, not rounded        │
//! │  parse_amount("abc", ..)    ──► Err(NotANumber)                        │
//! │  parse_amount("", ..)       ──► Err(Required)                          │
//! │  parse_amount("-3", ..)     ──► Err(MustBeNonNegative)                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  lenient_amount(..)  ──► Lenient { value: 0, rejected: Some(err) }     │
//! │  amount_or_zero(..)  ──► 0                                             │
//! │                                                                         │
//! │  Every "blank or garbage means zero" conversion in the workspace goes  │
//! │  through the lenient helpers here. Callers that want to report the     │
//! │  coercion read `Lenient::rejected`.                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Parsed values keep every digit the user typed. Rounding to cents happens
//! once, on the reported figures.
//!
//! ## Usage
//! ```rust
//! use rust_decimal_macros::dec;
//! use tabsplit_core::validation::{amount_or_zero, percent_or_zero};
//!
//! assert_eq!(amount_or_zero("0.045", "personal items"), dec!(0.045));
//! assert_eq!(amount_or_zero("", "amount paid"), dec!(0));
//! assert_eq!(percent_or_zero("12.5", "tip").percent(), dec!(12.5));
//! assert_eq!(percent_or_zero("lots", "tip").percent(), dec!(0));
//! ```

use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::Value;

use crate::error::{ValidationError, ValidationResult};
use crate::types::Rate;

// =============================================================================
// Strict Parsers
// =============================================================================

/// Parses a non-negative dollar amount such as `"12.50"`.
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - Must not be blank
/// - Must parse as a decimal number (plain or scientific notation)
/// - Must not be negative
pub fn parse_amount(raw: &str, field: &str) -> ValidationResult<Decimal> {
    let value = parse_number(raw, field)?;

    if value.is_sign_negative() && !value.is_zero() {
        return Err(ValidationError::MustBeNonNegative {
            field: field.to_string(),
        });
    }

    Ok(value)
}

/// Parses a percentage such as `"15"` or `"12.5"`.
///
/// ## Rules
/// - Surrounding whitespace is ignored; a trailing `%` is allowed
/// - Must not be blank
///
/// Any size and either sign is accepted; a negative tip reads as a discount
/// on the shared bill.
pub fn parse_percent(raw: &str, field: &str) -> ValidationResult<Rate> {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_suffix('%').unwrap_or(trimmed);
    parse_number(trimmed, field).map(Rate::from_percent)
}

fn parse_number(raw: &str, field: &str) -> ValidationResult<Decimal> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    // JSON numbers such as 1e-7 arrive in scientific notation.
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| ValidationError::NotANumber {
            field: field.to_string(),
        })
}

// =============================================================================
// Lenient Helpers
// =============================================================================

/// A value produced by the leniency policy.
///
/// `rejected` holds the strict parse error when the raw input was replaced by
/// the default. Blank input also reports `Required` here; the default is the
/// same either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lenient<T> {
    pub value: T,
    pub rejected: Option<ValidationError>,
}

impl<T: Default> Lenient<T> {
    fn from_result(result: ValidationResult<T>) -> Self {
        match result {
            Ok(value) => Lenient {
                value,
                rejected: None,
            },
            Err(err) => Lenient {
                value: T::default(),
                rejected: Some(err),
            },
        }
    }
}

impl<T> Lenient<T> {
    /// True when the raw input was discarded in favour of the default.
    pub fn was_coerced(&self) -> bool {
        self.rejected.is_some()
    }

    /// Takes the value, recording the rejection unless the input was blank.
    pub fn collect_into(self, rejected: &mut Vec<ValidationError>) -> T {
        if let Some(err) = self.rejected {
            if !err.is_blank() {
                rejected.push(err);
            }
        }
        self.value
    }
}

/// Parses an amount, falling back to zero for blank, garbage or negative input.
pub fn lenient_amount(raw: &str, field: &str) -> Lenient<Decimal> {
    Lenient::from_result(parse_amount(raw, field))
}

/// Parses a percentage, falling back to zero for blank or garbage input.
pub fn lenient_percent(raw: &str, field: &str) -> Lenient<Rate> {
    Lenient::from_result(parse_percent(raw, field))
}

/// Shorthand for `lenient_amount(raw, field).value`.
pub fn amount_or_zero(raw: &str, field: &str) -> Decimal {
    lenient_amount(raw, field).value
}

/// Shorthand for `lenient_percent(raw, field).value`.
pub fn percent_or_zero(raw: &str, field: &str) -> Rate {
    lenient_percent(raw, field).value
}

/// Text of a JSON field as a user would have typed it.
///
/// Numbers keep the digits serde_json read; `null`, a missing field and
/// anything that is neither a string nor a number read as blank.
pub fn json_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
