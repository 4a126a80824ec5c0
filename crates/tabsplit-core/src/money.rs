//! # Money Module
//!
//! Provides the `Money` type for the figures a split reports.
//!
//! ## Why Two Representations?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Splitting with binary floats:                                          │
//! │    61.5 - 61.50000000000001 = -0.00000000000001  → "owes $0.00" ❌     │
//! │                                                                         │
//! │  OUR SOLUTION: Exact Decimals In, Integer Cents Out                     │
//! │                                                                         │
//! │    "0.045" ──► Decimal 0.045 ──► × 1.13 = 0.05085 ──► Money(5)          │
//! │                └─── exact, never pre-rounded ───┘    └ rounded once ┘   │
//! │                                                                         │
//! │  Inputs and intermediate values are `rust_decimal::Decimal`. Only the   │
//! │  reported figures become `Money`, i64 cents.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rust_decimal_macros::dec;
//! use tabsplit_core::money::Money;
//!
//! let owed = Money::from_amount(dec!(0.05085)).unwrap();
//! assert_eq!(owed.cents(), 5);
//! assert_eq!(owed.to_string(), "$0.05");
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::fmt;
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A reported monetary value in cents.
///
/// ## Design Decisions
/// - **i64 (signed)**: Balances go negative when a participant still owes
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Serialized as cents**: The JSON report never carries floats
/// - **Output only**: Amounts being calculated stay `Decimal`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, TS)]
#[ts(export, type = "number")]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Rounds an exact amount in dollars to the nearest cent.
    ///
    /// Halves round away from zero: `0.125` → 13¢, `-0.125` → -13¢.
    ///
    /// ## Returns
    /// `None` when the rounded amount does not fit in i64 cents.
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal_macros::dec;
    /// use tabsplit_core::money::Money;
    ///
    /// assert_eq!(Money::from_amount(dec!(61.5)).unwrap().cents(), 6150);
    /// assert_eq!(Money::from_amount(dec!(-0.125)).unwrap().cents(), -13);
    /// ```
    pub fn from_amount(amount: Decimal) -> Option<Self> {
        round_cents(amount)
            .checked_mul(Decimal::ONE_HUNDRED)?
            .to_i64()
            .map(Money)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the dollars portion (truncated toward zero).
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Formats the amount as plain `D.CC` without a currency symbol.
    ///
    /// ## Example
    /// ```rust
    /// use tabsplit_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(6150).to_plain_string(), "61.50");
    /// assert_eq!(Money::from_cents(-5).to_plain_string(), "-0.05");
    /// ```
    pub fn to_plain_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

/// Rounds an amount to two decimal places, halves away from zero.
///
/// Stays a `Decimal`, for the one place the calculation itself works from a
/// rounded figure (the balance is taken against the rounded total owed).
pub fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows money as `$D.CC`.
///
/// ## Note
/// Renderers that need a different symbol format through their own config.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
