// End-to-end scenarios: raw user input in, report out.

use tabsplit_core::validation::{amount_or_zero, percent_or_zero};
use tabsplit_core::{BalanceStatus, Participant, RawRequest, SplitRequest};

fn participant(name: &str, paid: &str, personal: &str) -> Participant {
    Participant::new(
        name,
        amount_or_zero(paid, "amount paid"),
        amount_or_zero(personal, "personal items"),
    )
}

fn request(bill: &str, tip: &str, participants: Vec<Participant>) -> SplitRequest {
    SplitRequest {
        total_bill: amount_or_zero(bill, "total bill"),
        tip_percent: percent_or_zero(tip, "tip"),
        participants,
    }
}

#[test]
fn scenario_a_two_people_with_tip() {
    let report = request(
        "100",
        "10",
        vec![participant("Alice", "70", "0"), participant("Bob", "30", "0")],
    )
    .compute()
    .expect("report");

    assert_eq!(report.shared_total.to_plain_string(), "123.00");

    let alice = &report.results[0];
    assert_eq!(alice.shared_owed.to_plain_string(), "61.50");
    assert_eq!(alice.total_owed.to_plain_string(), "61.50");
    assert_eq!(alice.balance.to_plain_string(), "8.50");
    assert_eq!(alice.status, BalanceStatus::GetsBack);

    let bob = &report.results[1];
    assert_eq!(bob.total_owed.to_plain_string(), "61.50");
    assert_eq!(bob.balance.to_plain_string(), "-31.50");
    assert_eq!(bob.status, BalanceStatus::Owes);
}

#[test]
fn scenario_b_unnamed_with_personal_items() {
    let report = request("50", "0", vec![participant("", "0", "20")])
        .compute()
        .expect("report");

    let r = &report.results[0];
    assert_eq!(r.name, "Unnamed");
    assert_eq!(r.shared_owed.to_plain_string(), "56.50");
    assert_eq!(r.personal_owed.to_plain_string(), "22.60");
    assert_eq!(r.total_owed.to_plain_string(), "79.10");
    assert_eq!(r.balance.to_plain_string(), "-79.10");
    assert_eq!(r.status, BalanceStatus::Owes);
}

#[test]
fn scenario_c_zero_bill_is_no_result() {
    let report = request("0", "15", vec![participant("Alice", "10", "0")]).compute();
    assert!(report.is_none());
}

#[test]
fn scenario_d_no_participants_is_no_result() {
    let report = request("100", "5", Vec::new()).compute();
    assert!(report.is_none());
}

#[test]
fn blank_fields_behave_like_zero() {
    let report = request("40", "", vec![participant("Cy", "", "abc")])
        .compute()
        .expect("report");

    let r = &report.results[0];
    assert_eq!(r.paid.cents(), 0);
    assert_eq!(r.personal_owed.cents(), 0);
    assert_eq!(r.total_owed.to_plain_string(), "45.20");
}

#[test]
fn json_request_round_trip_to_report() {
    let request: SplitRequest = serde_json::from_str(
        r#"{
            "totalBill": 100,
            "tipPercent": 10,
            "participants": [
                { "name": "Alice", "amountPaid": 70 },
                { "name": "Bob", "amountPaid": "30", "personalItems": null }
            ]
        }"#,
    )
    .expect("valid json");

    let report = request.compute().expect("report");
    let json = serde_json::to_value(&report).expect("serializable");

    assert_eq!(json["sharedTotal"], 12300);
    assert_eq!(json["tax"].as_f64(), Some(13.0));
    assert_eq!(json["tip"].as_f64(), Some(10.0));
    assert_eq!(json["results"][0]["status"], "gets back");
    assert_eq!(json["results"][1]["balance"], -3150);
}

#[test]
fn sub_cent_input_is_rounded_only_in_the_report() {
    let report = request("1", "0", vec![participant("Ada", "", "0.045")])
        .compute()
        .expect("report");

    let r = &report.results[0];
    assert_eq!(r.personal_owed.to_plain_string(), "0.05");
    assert_eq!(r.total_owed.to_plain_string(), "1.18");
}

#[test]
fn large_tip_is_not_capped() {
    let report = request("10", "1500", vec![participant("Ada", "0", "0")])
        .compute()
        .expect("report");

    assert_eq!(report.tip.to_string(), "1500");
    assert_eq!(report.shared_total.to_plain_string(), "161.30");
}

#[test]
fn json_request_names_rejected_fields() {
    let raw: RawRequest = serde_json::from_str(
        r#"{
            "totalBill": 100,
            "tipPercent": "ten",
            "participants": [
                { "name": "Alice", "amountPaid": 70 },
                { "name": "Bob", "amountPaid": "30", "personalItems": "n/a" }
            ]
        }"#,
    )
    .expect("valid json");

    let (request, rejected) = raw.into_request();
    let fields: Vec<&str> = rejected.iter().map(|e| e.field()).collect();
    assert_eq!(fields, vec!["tipPercent", "participants[1].personalItems"]);

    let report = request.compute().expect("report");
    assert_eq!(report.tip.to_string(), "0");
    assert_eq!(report.shared_total.to_plain_string(), "113.00");
}
