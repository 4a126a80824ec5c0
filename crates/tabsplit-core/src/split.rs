//! # Split Calculator
//!
//! Turns a bill, a tip and a list of participants into per-person balances.
//!
//! ## Calculation Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  bill = $100.00, tip = 10%, tax = 13%, n = 2                            │
//! │                                                                         │
//! │  1. shared multiplier   = 1 + (13 + 10)/100         = 1.23              │
//! │  2. shared total        = 100.00 × 1.23             = 123.00            │
//! │  3. shared per person   = 123.00 / 2                = 61.50             │
//! │  4. personal multiplier = 1 + 13/100                = 1.13              │
//! │  5. per participant:                                                    │
//! │       personal with tax = personal × 1.13                               │
//! │       total owed        = round2(shared per person + personal w/ tax)   │
//! │       balance           = round2(paid − total owed)                     │
//! │                                                                         │
//! │  Alice paid 70.00 → owes 61.50 → balance +8.50  gets back              │
//! │  Bob   paid 30.00 → owes 61.50 → balance −31.50 owes                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Exactness
//! Steps 1-5 run on exact decimals, with the inputs exactly as entered.
//! Each reported figure is rounded once, half away from zero, by
//! [`Money::from_amount`]. The balance is the one figure taken from a rounded
//! value: it starts from the rounded `total_owed`, so a participant who pays
//! exactly the displayed total is settled.
//!
//! The displayed shared and personal figures are rounded independently, so
//! their sum may differ from `total_owed` by one cent.

use rust_decimal::Decimal;

use crate::money::{round_cents, Money};
use crate::types::{BalanceStatus, Participant, Rate, SplitReport, SplitResult};
use crate::TAX_RATE;

/// Splits a bill among participants.
///
/// ## Returns
/// - `None` when `total_bill` is zero or negative, or `participants` is empty.
///   This is "nothing to show", not an error.
/// - `None` when a figure is too large to represent. No input panics.
/// - `Some(report)` with exactly one result per participant, in input order.
///
/// ## Leniency
/// Negative `amount_paid` or `personal_items` are treated as zero.
///
/// ## Example
/// ```rust
/// use rust_decimal_macros::dec;
/// use tabsplit_core::{split, Participant, Rate};
///
/// let people = vec![
///     Participant::new("Alice", dec!(70), dec!(0)),
///     Participant::new("Bob", dec!(30), dec!(0)),
/// ];
///
/// let report = split::compute(dec!(100), Rate::from_percent(dec!(10)), &people).unwrap();
/// assert_eq!(report.shared_total.cents(), 12300);
/// assert_eq!(report.results[0].balance.cents(), 850);
/// assert_eq!(report.results[1].balance.cents(), -3150);
///
/// assert!(split::compute(dec!(0), Rate::zero(), &people).is_none());
/// ```
pub fn compute(total_bill: Decimal, tip: Rate, participants: &[Participant]) -> Option<SplitReport> {
    if total_bill <= Decimal::ZERO || participants.is_empty() {
        return None;
    }

    let count = Decimal::from(participants.len());

    let shared_multiplier = Decimal::ONE.checked_add(
        TAX_RATE
            .percent()
            .checked_add(tip.percent())?
            .checked_div(Decimal::ONE_HUNDRED)?,
    )?;
    let shared_total = total_bill.checked_mul(shared_multiplier)?;
    let shared_per_person = shared_total.checked_div(count)?;

    let personal_multiplier =
        Decimal::ONE.checked_add(TAX_RATE.percent().checked_div(Decimal::ONE_HUNDRED)?)?;

    let shared = Shares {
        per_person: shared_per_person,
        per_person_owed: Money::from_amount(shared_per_person)?,
        personal_multiplier,
    };

    let results = participants
        .iter()
        .map(|participant| shared.settle(participant))
        .collect::<Option<Vec<_>>>()?;

    Some(SplitReport {
        tip,
        tax: TAX_RATE,
        shared_total: Money::from_amount(shared_total)?,
        results,
    })
}

/// The figures every participant has in common.
struct Shares {
    per_person: Decimal,
    per_person_owed: Money,
    personal_multiplier: Decimal,
}

impl Shares {
    fn settle(&self, participant: &Participant) -> Option<SplitResult> {
        let paid = participant.amount_paid.max(Decimal::ZERO);
        let personal = participant.personal_items.max(Decimal::ZERO);

        let personal_with_tax = personal.checked_mul(self.personal_multiplier)?;
        let total_owed = round_cents(self.per_person.checked_add(personal_with_tax)?);
        let balance = Money::from_amount(paid.checked_sub(total_owed)?)?;

        Some(SplitResult {
            name: participant.display_name().to_string(),
            paid: Money::from_amount(paid)?,
            shared_owed: self.per_person_owed,
            personal_owed: Money::from_amount(personal_with_tax)?,
            total_owed: Money::from_amount(total_owed)?,
            balance,
            status: BalanceStatus::from_balance(balance),
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
