//! # tabsplit-core: Pure Bill-Splitting Logic
//!
//! This crate is the **heart** of tabsplit. It contains the splitting
//! calculation as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        tabsplit Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │             Presentation (tabsplit CLI / browser UI)            │   │
//! │  │    Roster edits ──► Calculate ──► Render report                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ snapshot of participants               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tabsplit-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   split   │  │ validation│  │   │
//! │  │   │Participant│  │   Money   │  │  compute  │  │  lenient  │  │   │
//! │  │   │SplitReport│  │from_amount│  │  Decimal  │  │  parsing  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STATE • NO FLOATS IN THE MATH • PURE FUNCTIONS   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Participant, SplitResult, SplitReport, Rate)
//! - [`money`] - Money type: reported figures in integer cents
//! - [`split`] - The splitting calculation
//! - [`validation`] - Strict parsers and the zero-default leniency policy
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use tabsplit_core::validation::{amount_or_zero, percent_or_zero};
//! use tabsplit_core::{split, BalanceStatus, Participant};
//!
//! let people = vec![Participant::new(
//!     "",
//!     amount_or_zero("", "amount paid"),
//!     amount_or_zero("20", "personal items"),
//! )];
//!
//! let report = split::compute(
//!     amount_or_zero("50", "total bill"),
//!     percent_or_zero("", "tip"),
//!     &people,
//! )
//! .unwrap();
//!
//! let r = &report.results[0];
//! assert_eq!(r.name, "Unnamed");
//! assert_eq!(r.total_owed.cents(), 7910);
//! assert_eq!(r.status, BalanceStatus::Owes);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod split;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{ValidationError, ValidationResult};
pub use money::Money;
pub use split::compute;
pub use types::*;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Sales tax applied to the shared bill and to personal items, in percent.
///
/// Fixed (Ontario HST); not configurable.
pub const TAX_PERCENT: Decimal = dec!(13);

/// [`TAX_PERCENT`] as a [`Rate`].
pub const TAX_RATE: Rate = Rate::from_percent(TAX_PERCENT);

/// Name shown for participants left blank.
pub const UNNAMED: &str = "Unnamed";
