//! # Error Types
//!
//! Domain-specific error types for tabsplit-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tabsplit-core errors (this file)                                      │
//! │  └── ValidationError  - Strict parsing of user-entered numbers         │
//! │                                                                         │
//! │  tabsplit-cli errors (app crate)                                       │
//! │  └── CliError         - Roster, config, I/O (what the user sees)       │
//! │                                                                         │
//! │  Flow: ValidationError → logged + coerced to 0 (lenient helpers)       │
//! │        ValidationError → CliError (strict contexts, e.g. config)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `split::compute` has no error type at all: invalid bills and empty
//! rosters are a normal "nothing to show" outcome, not a failure.

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Returned by the strict parsers in [`crate::validation`]. The lenient
/// variants of those parsers swallow these and fall back to zero.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Field is present but not a number.
    #[error("{field} is not a number")]
    NotANumber { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },
}

impl ValidationError {
    /// Returns the name of the field that failed validation.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::NotANumber { field }
            | ValidationError::MustBeNonNegative { field } => field,
        }
    }

    /// True for a blank field, which is how users leave a value out.
    pub fn is_blank(&self) -> bool {
        matches!(self, ValidationError::Required { .. })
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
