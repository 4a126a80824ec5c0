// Property-based tests for the split calculation.
// CI: 256 cases (default). Soak: PROPTEST_CASES=10000 cargo test --release

use proptest::prelude::*;
use rust_decimal::Decimal;
use tabsplit_core::{split, BalanceStatus, Money, Participant, Rate, TAX_RATE};

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

fn config_256() -> ProptestConfig {
    ProptestConfig {
        cases: std::env::var("PROPTEST_CASES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(256),
        failure_persistence: None,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Generators
// ---------------------------------------------------------------------------

/// Amounts up to $100k, sometimes with sub-cent digits, occasionally
/// negative to exercise the clamp.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    prop_oneof![
        6 => (0i64..10_000_000).prop_map(|c| Decimal::new(c, 2)),
        2 => (0i64..1_000_000_000).prop_map(|m| Decimal::new(m, 4)),
        1 => Just(Decimal::ZERO),
        1 => (-10_000i64..0).prop_map(|c| Decimal::new(c, 2)),
    ]
}

fn arb_name() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => "[A-Za-z]{1,12}",
        1 => Just(String::new()),
    ]
}

fn arb_participant() -> impl Strategy<Value = Participant> {
    (arb_name(), arb_amount(), arb_amount())
        .prop_map(|(name, paid, personal)| Participant::new(name, paid, personal))
}

fn arb_participants() -> impl Strategy<Value = Vec<Participant>> {
    prop::collection::vec(arb_participant(), 1..20)
}

fn arb_bill() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000).prop_map(|c| Decimal::new(c, 2))
}

/// Tips between 0% and 50%, to at most three decimal places.
fn arb_tip() -> impl Strategy<Value = Rate> {
    prop_oneof![
        3 => (0i64..5_000).prop_map(|p| Rate::from_percent(Decimal::new(p, 2))),
        1 => (0i64..50_000).prop_map(|p| Rate::from_percent(Decimal::new(p, 3))),
    ]
}

fn cents_to_decimal(money: Money) -> Decimal {
    Decimal::new(money.cents(), 2)
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(config_256())]

    /// One result per participant, same order, blank names become "Unnamed".
    #[test]
    fn order_and_count_preserved(
        bill in arb_bill(),
        tip in arb_tip(),
        people in arb_participants(),
    ) {
        let report = split::compute(bill, tip, &people).expect("valid input");

        prop_assert_eq!(report.results.len(), people.len());
        for (person, result) in people.iter().zip(&report.results) {
            prop_assert_eq!(result.name.as_str(), person.display_name());
        }
    }

    /// Non-positive bills and empty rosters never produce a report.
    #[test]
    fn guard_clause(
        bill_cents in -10_000_000i64..=0,
        tip in arb_tip(),
        people in arb_participants(),
    ) {
        prop_assert!(split::compute(Decimal::new(bill_cents, 2), tip, &people).is_none());
        prop_assert!(split::compute(Decimal::new(-bill_cents + 1, 2), tip, &[]).is_none());
    }

    /// Displayed shared + personal equals total within a cent, and the
    /// balance is the exact amount paid less the displayed total.
    #[test]
    fn split_consistency(
        bill in arb_bill(),
        tip in arb_tip(),
        people in arb_participants(),
    ) {
        let report = split::compute(bill, tip, &people).expect("valid input");

        for (person, r) in people.iter().zip(&report.results) {
            let drift = (r.shared_owed.cents() + r.personal_owed.cents() - r.total_owed.cents()).abs();
            prop_assert!(drift <= 1, "drift {} for {:?}", drift, r);

            let paid = person.amount_paid.max(Decimal::ZERO);
            let expected = Money::from_amount(paid - cents_to_decimal(r.total_owed));
            prop_assert_eq!(Some(r.balance), expected);
        }
    }

    /// Shared shares add back up to the shared total, give or take a cent each.
    #[test]
    fn conservation(
        bill in arb_bill(),
        tip in arb_tip(),
        people in arb_participants(),
    ) {
        let report = split::compute(bill, tip, &people).expect("valid input");

        let multiplier =
            Decimal::ONE + (TAX_RATE.percent() + tip.percent()) / Decimal::ONE_HUNDRED;
        prop_assert_eq!(Some(report.shared_total), Money::from_amount(bill * multiplier));

        let shared_sum: i64 = report.results.iter().map(|r| r.shared_owed.cents()).sum();
        let slack = people.len() as i64;
        prop_assert!((shared_sum - report.shared_total.cents()).abs() <= slack);
    }

    /// Status agrees with the sign of the balance.
    #[test]
    fn status_matches_balance(
        bill in arb_bill(),
        tip in arb_tip(),
        people in arb_participants(),
    ) {
        let report = split::compute(bill, tip, &people).expect("valid input");

        for r in &report.results {
            let expected = if r.balance.is_zero() {
                BalanceStatus::Settled
            } else if r.balance.is_positive() {
                BalanceStatus::GetsBack
            } else {
                BalanceStatus::Owes
            };
            prop_assert_eq!(r.status, expected);
        }
    }

    /// Paying exactly the total owed always settles.
    #[test]
    fn paying_total_settles(
        bill in arb_bill(),
        tip in arb_tip(),
        people in arb_participants(),
    ) {
        let first = split::compute(bill, tip, &people).expect("valid input");

        let settled: Vec<Participant> = people
            .iter()
            .zip(&first.results)
            .map(|(p, r)| {
                Participant::new(p.name.clone(), cents_to_decimal(r.total_owed), p.personal_items)
            })
            .collect();
        let second = split::compute(bill, tip, &settled).expect("valid input");

        for r in &second.results {
            prop_assert_eq!(r.status, BalanceStatus::Settled);
        }
    }
}
