//! # Calculate Command
//!
//! One-shot split from flags and/or a JSON request file.
//!
//! ## Input Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  --input request.json   ──► SplitRequest (base)                        │
//! │                                  │                                      │
//! │  --bill 100             ──► overrides totalBill                        │
//! │  --tip 10               ──► overrides tipPercent (else config default)  │
//! │  --person Alice:70:0    ──► appended to participants                   │
//! │                                  │                                      │
//! │                                  ▼                                      │
//! │                          tabsplit_core::compute                         │
//! │                                  │                                      │
//! │                   ┌──────────────┴──────────────┐                       │
//! │                   ▼                             ▼                       │
//! │            report on stdout          NothingToCalculate (exit 3)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::Args;
use tabsplit_core::validation::{lenient_amount, lenient_percent};
use tabsplit_core::{Participant, RawRequest, SplitRequest};
use tracing::{debug, info};

use super::note_coercion;
use crate::error::{CliError, CliResult};
use crate::render;
use crate::state::{AppConfig, OutputFormat};

/// Arguments for `tabsplit calculate`.
#[derive(Debug, Clone, Default, Args)]
pub struct CalculateArgs {
    /// Total bill before tax and tip (e.g. 100 or 84.50)
    #[arg(short, long)]
    pub bill: Option<String>,

    /// Tip percent applied to the shared bill (default from TABSPLIT_DEFAULT_TIP)
    #[arg(short, long)]
    pub tip: Option<String>,

    /// Participant as NAME[:PAID[:PERSONAL]]; repeat for each person
    #[arg(short, long = "person", value_name = "NAME:PAID:PERSONAL")]
    pub people: Vec<String>,

    /// JSON request file ({"totalBill", "tipPercent", "participants"}); '-' reads stdin
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Runs the calculate command, writing the report to `out`.
///
/// ## Errors
/// - `NothingToCalculate` when the bill is not positive or nobody is listed
/// - `Io` / `Json` when the request file cannot be read or parsed
pub fn run<W: Write>(args: &CalculateArgs, config: &AppConfig, out: &mut W) -> CliResult<()> {
    let config = AppConfig {
        format: args.format.unwrap_or(config.format),
        ..config.clone()
    };

    let request = build_request(args, &config)?;
    info!(
        participants = request.participants.len(),
        bill = %request.total_bill,
        tip = %request.tip_percent,
        "calculating split"
    );

    let report = request.compute().ok_or(CliError::NothingToCalculate)?;
    write!(out, "{}", render::render(&report, &config)?)?;
    if config.format == OutputFormat::Json {
        writeln!(out)?;
    }
    Ok(())
}

/// Merges the request file (if any) with flags into one request.
pub fn build_request(args: &CalculateArgs, config: &AppConfig) -> CliResult<SplitRequest> {
    let mut request = match &args.input {
        Some(path) => read_request(path)?,
        None => SplitRequest {
            tip_percent: config.default_tip,
            ..SplitRequest::default()
        },
    };

    if let Some(raw) = &args.bill {
        let parsed = lenient_amount(raw, "total bill");
        note_coercion(&parsed, raw);
        request.total_bill = parsed.value;
    }

    if let Some(raw) = &args.tip {
        let parsed = lenient_percent(raw, "tip");
        note_coercion(&parsed, raw);
        request.tip_percent = parsed.value;
    }

    for person in &args.people {
        request.participants.push(parse_person(person)?);
    }

    Ok(request)
}

/// Parses `NAME[:PAID[:PERSONAL]]`.
///
/// Missing or unparseable amounts become zero; more than three fields is an
/// error because the user almost certainly mistyped.
pub fn parse_person(raw: &str) -> CliResult<Participant> {
    let fields: Vec<&str> = raw.split(':').collect();
    if fields.len() > 3 {
        return Err(CliError::InvalidParticipant(raw.to_string()));
    }

    let name = fields[0].trim();
    let paid_raw = fields.get(1).copied().unwrap_or("");
    let personal_raw = fields.get(2).copied().unwrap_or("");

    let paid = lenient_amount(paid_raw, "amount paid");
    note_coercion(&paid, paid_raw);
    let personal = lenient_amount(personal_raw, "personal items");
    note_coercion(&personal, personal_raw);

    Ok(Participant::new(name, paid.value, personal.value))
}

fn read_request(path: &Path) -> CliResult<SplitRequest> {
    let text = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(path)?
    };

    debug!(?path, bytes = text.len(), "read request");
    let raw: RawRequest = serde_json::from_str(&text)?;

    let (request, rejected) = raw.into_request();
    for err in &rejected {
        debug!(field = err.field(), %err, "request field replaced with zero");
    }
    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use tabsplit_core::Rate;

    fn args(bill: &str, tip: Option<&str>, people: &[&str]) -> CalculateArgs {
        CalculateArgs {
            bill: Some(bill.to_string()),
            tip: tip.map(str::to_string),
            people: people.iter().map(|p| p.to_string()).collect(),
            ..CalculateArgs::default()
        }
    }

    fn run_to_string(args: &CalculateArgs, config: &AppConfig) -> CliResult<String> {
        let mut out = Vec::new();
        run(args, config, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_person() {
        let p = parse_person("Alice:70:5.5").unwrap();
        assert_eq!(p.name, "Alice");
        assert_eq!(p.amount_paid, dec!(70));
        assert_eq!(p.personal_items, dec!(5.5));

        let p = parse_person("Bob").unwrap();
        assert_eq!(p.amount_paid, Decimal::ZERO);
        assert_eq!(p.personal_items, Decimal::ZERO);

        let p = parse_person(":abc:20").unwrap();
        assert_eq!(p.name, "");
        assert_eq!(p.amount_paid, Decimal::ZERO);
        assert_eq!(p.personal_items, dec!(20));

        assert!(matches!(
            parse_person("a:1:2:3"),
            Err(CliError::InvalidParticipant(_))
        ));
    }

    #[test]
    fn test_scenario_a_table() {
        let text = run_to_string(
            &args("100", Some("10"), &["Alice:70:0", "Bob:30:0"]),
            &AppConfig::default(),
        )
        .unwrap();

        assert!(text.contains("Total with Tax + Tip: $123.00"));
        assert!(text.contains("gets back $8.50"));
        assert!(text.contains("owes $31.50"));
    }

    #[test]
    fn test_default_tip_from_config() {
        let config = AppConfig {
            default_tip: Rate::from_percent(dec!(10)),
            ..AppConfig::default()
        };
        let request = build_request(&args("100", None, &["A"]), &config).unwrap();
        assert_eq!(request.tip_percent.percent(), dec!(10));

        let request = build_request(&args("100", Some("0"), &["A"]), &config).unwrap();
        assert_eq!(request.tip_percent, Rate::zero());
    }

    #[test]
    fn test_large_tip_flag_is_kept() {
        let request = build_request(&args("10", Some("1500"), &["A"]), &AppConfig::default()).unwrap();
        assert_eq!(request.tip_percent.percent(), dec!(1500));

        let text = run_to_string(&args("10", Some("1500"), &["A:0"]), &AppConfig::default()).unwrap();
        assert!(text.contains("Results (with 1500% tip and 13% tax):"));
        assert!(text.contains("Total with Tax + Tip: $161.30"));
    }

    #[test]
    fn test_sub_cent_person_flag() {
        let text = run_to_string(&args("1", Some("0"), &["A:0:0.045"]), &AppConfig::default()).unwrap();
        assert!(text.contains("owes $1.18"));
    }

    #[test]
    fn test_nothing_to_calculate() {
        let err = run_to_string(&args("0", Some("15"), &["A:10"]), &AppConfig::default())
            .unwrap_err();
        assert!(matches!(err, CliError::NothingToCalculate));

        let err = run_to_string(&args("100", Some("5"), &[]), &AppConfig::default()).unwrap_err();
        assert!(matches!(err, CliError::NothingToCalculate));

        let err = run_to_string(&args("abc", None, &["A"]), &AppConfig::default()).unwrap_err();
        assert!(matches!(err, CliError::NothingToCalculate));
    }

    #[test]
    fn test_json_format_flag() {
        let mut a = args("50", Some("0"), &[":0:20"]);
        a.format = Some(OutputFormat::Json);

        let text = run_to_string(&a, &AppConfig::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["results"][0]["name"], "Unnamed");
        assert_eq!(value["results"][0]["totalOwed"], 7910);
        assert_eq!(value["results"][0]["status"], "owes");
    }

    #[test]
    fn test_input_file_merged_with_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("request.json");
        fs::write(
            &path,
            r#"{"totalBill": 80, "tipPercent": 15, "participants": [{"name": "Alice", "amountPaid": 50}]}"#,
        )
        .unwrap();

        let a = CalculateArgs {
            bill: Some("100".to_string()),
            people: vec!["Bob:30".to_string()],
            input: Some(path),
            ..CalculateArgs::default()
        };
        let request = build_request(&a, &AppConfig::default()).unwrap();

        assert_eq!(request.total_bill, dec!(100));
        assert_eq!(request.tip_percent.percent(), dec!(15));
        assert_eq!(request.participants.len(), 2);
        assert_eq!(request.participants[1].name, "Bob");
    }

    #[test]
    fn test_unusable_fields_in_input_file_become_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("request.json");
        fs::write(
            &path,
            r#"{"totalBill": "80", "tipPercent": "lots", "participants": [{"name": "Alice", "amountPaid": [1]}]}"#,
        )
        .unwrap();

        let a = CalculateArgs {
            input: Some(path),
            ..CalculateArgs::default()
        };
        let request = build_request(&a, &AppConfig::default()).unwrap();

        assert_eq!(request.total_bill, dec!(80));
        assert_eq!(request.tip_percent, Rate::zero());
        assert_eq!(request.participants[0].amount_paid, Decimal::ZERO);
    }

    #[test]
    fn test_bad_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();

        let a = CalculateArgs {
            input: Some(path),
            ..CalculateArgs::default()
        };
        assert!(matches!(
            build_request(&a, &AppConfig::default()),
            Err(CliError::Json(_))
        ));

        let a = CalculateArgs {
            input: Some(dir.path().join("missing.json")),
            ..CalculateArgs::default()
        };
        assert!(matches!(
            build_request(&a, &AppConfig::default()),
            Err(CliError::Io(_))
        ));
    }
}
