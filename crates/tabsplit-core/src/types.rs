//! # Domain Types
//!
//! Core domain types for splitting a bill.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  WIRE (JSON)           INPUT                    OUTPUT                  │
//! │  ┌──────────────┐      ┌─────────────────┐      ┌─────────────────┐     │
//! │  │ RawRequest   │      │  SplitRequest   │      │  SplitReport    │     │
//! │  │ numbers,     │ ───► │  total_bill     │ ───► │  tip, tax       │     │
//! │  │ strings,     │      │  tip_percent    │      │  shared_total   │     │
//! │  │ null, absent │      │  participants ┐ │      │  results ─────┐ │     │
//! │  └──────┬───────┘      └───────────────┼─┘      └───────────────┼─┘     │
//! │         │ rejected fields              ▼                        ▼       │
//! │         ▼              ┌─────────────────┐      ┌─────────────────┐     │
//! │  Vec<ValidationError>  │  Participant    │ 1──1 │  SplitResult    │     │
//! │                        │  exact Decimal  │      │  Money (cents)  │     │
//! │                        └─────────────────┘      └─────────────────┘     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Format
//! Requests carry human amounts (`12.50`, `"12.50"`, blank). Reports carry
//! integer cents, the same representation as [`Money`], and rates as plain
//! percentages.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::{json_text, lenient_amount, lenient_percent};

// =============================================================================
// Rate
// =============================================================================

/// A percentage, kept exactly as entered.
///
/// `Rate::from_percent(dec!(12.5))` is a 12.5% tip. Signed, because a
/// negative tip is accepted as a discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, TS)]
#[ts(export, type = "number")]
pub struct Rate(#[serde(with = "rust_decimal::serde::float")] Decimal);

impl Rate {
    /// Creates a rate from a percentage.
    #[inline]
    pub const fn from_percent(percent: Decimal) -> Self {
        Rate(percent)
    }

    /// Returns the rate as a percentage.
    #[inline]
    pub const fn percent(&self) -> Decimal {
        self.0
    }

    /// Zero rate.
    #[inline]
    pub const fn zero() -> Self {
        Rate(Decimal::ZERO)
    }
}

/// Shows the percentage without trailing zeros: `13`, `12.5`, `-5`.
impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

// =============================================================================
// Participant
// =============================================================================

/// One person at the table, as entered.
///
/// Has no identity of its own: the calculator only cares about position.
/// Collaborators that edit a roster keep their own stable ids.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "RawParticipant")]
pub struct Participant {
    /// Display name; may be blank.
    pub name: String,

    /// What this person actually paid toward the bill.
    pub amount_paid: Decimal,

    /// Pre-tax cost of items only this person consumed.
    pub personal_items: Decimal,
}

impl Participant {
    /// Creates a participant from already-parsed amounts.
    pub fn new(name: impl Into<String>, amount_paid: Decimal, personal_items: Decimal) -> Self {
        Participant {
            name: name.into(),
            amount_paid,
            personal_items,
        }
    }

    /// Name to show in results: the entered name, or `"Unnamed"` when empty.
    ///
    /// A name of only spaces is kept as typed.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            crate::UNNAMED
        } else {
            &self.name
        }
    }
}

// =============================================================================
// Balance Status
// =============================================================================

/// Where a participant stands once the bill is split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum BalanceStatus {
    /// Paid exactly what they owe.
    #[serde(rename = "settled")]
    Settled,
    /// Paid more than they owe.
    #[serde(rename = "gets back")]
    GetsBack,
    /// Paid less than they owe.
    #[serde(rename = "owes")]
    Owes,
}

impl BalanceStatus {
    /// Derives the status from the sign of a balance.
    ///
    /// Balances are whole cents, so "settled" is an exact comparison.
    pub const fn from_balance(balance: Money) -> Self {
        if balance.is_zero() {
            BalanceStatus::Settled
        } else if balance.is_positive() {
            BalanceStatus::GetsBack
        } else {
            BalanceStatus::Owes
        }
    }

    /// Human-readable label.
    pub const fn label(&self) -> &'static str {
        match self {
            BalanceStatus::Settled => "settled",
            BalanceStatus::GetsBack => "gets back",
            BalanceStatus::Owes => "owes",
        }
    }
}

impl fmt::Display for BalanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Split Result
// =============================================================================

/// One participant's line in a split, in cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SplitResult {
    /// Entered name, or `"Unnamed"`.
    pub name: String,
    /// Amount paid, rounded to the cent.
    pub paid: Money,
    /// Equal share of the bill with tax and tip.
    pub shared_owed: Money,
    /// Personal items with tax.
    pub personal_owed: Money,
    /// Shared share plus personal items, rounded once from the exact sum.
    pub total_owed: Money,
    /// Exact amount paid less the rounded `total_owed`, rounded to the cent.
    pub balance: Money,
    pub status: BalanceStatus,
}

// =============================================================================
// Split Report
// =============================================================================

/// Everything a presentation layer needs to show a finished split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SplitReport {
    /// Tip rate applied to the shared bill.
    pub tip: Rate,
    /// Tax rate applied to the shared bill and personal items.
    pub tax: Rate,
    /// Bill with tax and tip, before splitting.
    pub shared_total: Money,
    /// One entry per participant, in input order.
    pub results: Vec<SplitResult>,
}

// =============================================================================
// Split Request
// =============================================================================

/// A complete calculate call with every amount parsed.
///
/// Deserializes from the [`RawRequest`] wire shape; fields that do not parse
/// become zero. Use [`RawRequest::into_request`] to also learn which fields
/// were replaced.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "RawRequest")]
pub struct SplitRequest {
    pub total_bill: Decimal,
    pub tip_percent: Rate,
    pub participants: Vec<Participant>,
}

impl SplitRequest {
    /// Runs the calculator on this request.
    pub fn compute(&self) -> Option<SplitReport> {
        crate::split::compute(self.total_bill, self.tip_percent, &self.participants)
    }
}

// =============================================================================
// Wire Types
// =============================================================================

/// A calculate request exactly as it arrives over JSON.
///
/// ```json
/// {
///   "totalBill": 100,
///   "tipPercent": "10",
///   "participants": [
///     { "name": "Alice", "amountPaid": 70, "personalItems": "" },
///     { "name": "Bob", "amountPaid": "30" }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, rename = "SplitRequest")]
#[serde(rename_all = "camelCase")]
pub struct RawRequest {
    #[serde(default)]
    #[ts(optional, type = "number | string | null")]
    pub total_bill: Option<Value>,

    #[serde(default)]
    #[ts(optional, type = "number | string | null")]
    pub tip_percent: Option<Value>,

    #[serde(default)]
    pub participants: Vec<RawParticipant>,
}

/// One participant exactly as it arrives over JSON.
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, rename = "Participant")]
#[serde(rename_all = "camelCase")]
pub struct RawParticipant {
    #[serde(default)]
    #[ts(optional, type = "string | number | null")]
    pub name: Option<Value>,

    #[serde(default)]
    #[ts(optional, type = "number | string | null")]
    pub amount_paid: Option<Value>,

    #[serde(default)]
    #[ts(optional, type = "number | string | null")]
    pub personal_items: Option<Value>,
}

impl RawRequest {
    /// Parses every field leniently.
    ///
    /// ## Returns
    /// The request, plus one error for each field that held something other
    /// than a usable number. Blank, `null` and missing fields are not errors.
    /// Rejected fields are named by their JSON path, e.g.
    /// `participants[1].amountPaid`.
    pub fn into_request(self) -> (SplitRequest, Vec<ValidationError>) {
        let mut rejected = Vec::new();

        let total_bill =
            lenient_amount(&json_text(self.total_bill.as_ref()), "totalBill").collect_into(&mut rejected);
        let tip_percent =
            lenient_percent(&json_text(self.tip_percent.as_ref()), "tipPercent").collect_into(&mut rejected);

        let participants = self
            .participants
            .into_iter()
            .enumerate()
            .map(|(i, raw)| raw.into_participant(&format!("participants[{}].", i), &mut rejected))
            .collect();

        let request = SplitRequest {
            total_bill,
            tip_percent,
            participants,
        };
        (request, rejected)
    }
}

impl RawParticipant {
    fn into_participant(self, path: &str, rejected: &mut Vec<ValidationError>) -> Participant {
        let amount_paid = lenient_amount(
            &json_text(self.amount_paid.as_ref()),
            &format!("{}amountPaid", path),
        )
        .collect_into(rejected);
        let personal_items = lenient_amount(
            &json_text(self.personal_items.as_ref()),
            &format!("{}personalItems", path),
        )
        .collect_into(rejected);

        Participant {
            name: json_text(self.name.as_ref()),
            amount_paid,
            personal_items,
        }
    }
}

impl From<RawRequest> for SplitRequest {
    fn from(raw: RawRequest) -> Self {
        raw.into_request().0
    }
}

impl From<RawParticipant> for Participant {
    fn from(raw: RawParticipant) -> Self {
        raw.into_participant("", &mut Vec::new())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_rate_display() {
        assert_eq!(Rate::from_percent(dec!(13)).to_string(), "13");
        assert_eq!(Rate::from_percent(dec!(12.50)).to_string(), "12.5");
        assert_eq!(Rate::from_percent(dec!(12.345)).to_string(), "12.345");
        assert_eq!(Rate::from_percent(dec!(0.05)).to_string(), "0.05");
        assert_eq!(Rate::from_percent(dec!(-5)).to_string(), "-5");
        assert_eq!(Rate::zero().to_string(), "0");
    }

    #[test]
    fn test_rate_serializes_as_percent_number() {
        let json = serde_json::to_value(Rate::from_percent(dec!(12.5))).unwrap();
        assert_eq!(json.as_f64(), Some(12.5));
        assert_eq!(Rate::inline(), "number");
    }

    #[test]
    fn test_display_name_falls_back() {
        let p = Participant::new("", Decimal::ZERO, Decimal::ZERO);
        assert_eq!(p.display_name(), "Unnamed");

        let p = Participant::new("Alice", Decimal::ZERO, Decimal::ZERO);
        assert_eq!(p.display_name(), "Alice");
    }

    #[test]
    fn test_display_name_keeps_whitespace_names() {
        let p = Participant::new("   ", Decimal::ZERO, Decimal::ZERO);
        assert_eq!(p.display_name(), "   ");
    }

    #[test]
    fn test_balance_status_from_balance() {
        assert_eq!(
            BalanceStatus::from_balance(Money::zero()),
            BalanceStatus::Settled
        );
        assert_eq!(
            BalanceStatus::from_balance(Money::from_cents(1)),
            BalanceStatus::GetsBack
        );
        assert_eq!(
            BalanceStatus::from_balance(Money::from_cents(-1)),
            BalanceStatus::Owes
        );
    }

    #[test]
    fn test_balance_status_serializes_as_label() {
        let json = serde_json::to_string(&BalanceStatus::GetsBack).unwrap();
        assert_eq!(json, "\"gets back\"");
        assert_eq!(BalanceStatus::Owes.to_string(), "owes");
    }

    #[test]
    fn test_request_deserializes_leniently() {
        let request: SplitRequest = serde_json::from_str(
            r#"{
                "totalBill": "100",
                "tipPercent": null,
                "participants": [
                    { "name": "Alice", "amountPaid": 70, "personalItems": "" },
                    { "amountPaid": "thirty" },
                    { "name": 42, "personalItems": 0.045 }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(request.total_bill, dec!(100));
        assert_eq!(request.tip_percent, Rate::zero());
        assert_eq!(request.participants.len(), 3);
        assert_eq!(request.participants[0].amount_paid, dec!(70));
        assert_eq!(request.participants[1].name, "");
        assert_eq!(request.participants[1].amount_paid, Decimal::ZERO);
        assert_eq!(request.participants[2].name, "42");
        assert_eq!(request.participants[2].personal_items, dec!(0.045));
    }

    #[test]
    fn test_into_request_reports_rejected_fields() {
        let raw: RawRequest = serde_json::from_str(
            r#"{
                "totalBill": "one hundred",
                "tipPercent": "",
                "participants": [
                    { "name": "Alice", "amountPaid": null },
                    { "amountPaid": -5, "personalItems": true }
                ]
            }"#,
        )
        .unwrap();

        let (request, rejected) = raw.into_request();
        let fields: Vec<&str> = rejected.iter().map(|e| e.field()).collect();

        assert_eq!(request.total_bill, Decimal::ZERO);
        assert_eq!(request.participants[1].amount_paid, Decimal::ZERO);
        assert_eq!(fields, vec!["totalBill", "participants[1].amountPaid"]);
        assert!(matches!(
            rejected[1],
            ValidationError::MustBeNonNegative { .. }
        ));
    }

    #[test]
    fn test_clean_request_has_no_rejections() {
        let raw: RawRequest = serde_json::from_str(
            r#"{ "totalBill": 100, "tipPercent": "15%", "participants": [{ "name": "A" }] }"#,
        )
        .unwrap();

        let (request, rejected) = raw.into_request();
        assert!(rejected.is_empty());
        assert_eq!(request.tip_percent.percent(), dec!(15));
    }
}
