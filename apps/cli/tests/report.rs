use std::fs;
use std::path::PathBuf;

use awardflow_cli::config::Config;
use awardflow_cli::run;
use awardflow_core::{AllocationSettings, QuantityPolicy};
use rust_decimal_macros::dec;
use tempfile::tempdir;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/sample-award.json")
}

fn config(edits_path: Option<PathBuf>) -> Config {
    Config {
        session_path: fixture_path(),
        edits_path,
        settings: AllocationSettings::default(),
        rerank: false,
        log_format: "text".to_string(),
    }
}

fn write_edits(dir: &tempfile::TempDir, json: &str) -> PathBuf {
    let path = dir.path().join("edits.json");
    fs::write(&path, json).unwrap();
    path
}

#[test]
fn report_for_fixture_without_edits() {
    let report = run(&config(None)).unwrap();

    assert_eq!(report.award_id, "AWD-2024-0117");
    assert_eq!(report.edits.applied, 0);
    assert_eq!(report.edits.version, 0);

    let summary = &report.summary;
    assert_eq!(summary.total_award_value, dec!(18440));
    assert_eq!(summary.savings, dec!(1560));
    assert_eq!(summary.savings_percent, dec!(7.8));
    assert_eq!(summary.coverage, 75);
    assert_eq!(summary.awarded_suppliers, 3);
    assert_eq!(summary.total_suppliers, 4);
    assert_eq!(summary.non_l1_awards, 2);

    assert_eq!(report.supplier_totals["s4"], dec!(0));
    assert_eq!(report.grand_totals["s1"], dec!(8650));
    assert_eq!(report.grand_totals["s4"], dec!(0));

    let under: Vec<(&str, u64)> = report
        .issues
        .iter()
        .map(|i| (i.item_id.as_str(), i.issue.units))
        .collect();
    assert_eq!(under, vec![("i3", 20), ("i4", 30)]);

    let coverage: Vec<(&str, u32)> = report
        .review
        .suppliers
        .iter()
        .map(|s| (s.id.as_str(), s.coverage))
        .collect();
    assert_eq!(coverage, vec![("s1", 46), ("s2", 49), ("s3", 6)]);

    assert!(report.submission.ready);
    assert_eq!(report.submission.warnings.len(), 2);
}

#[test]
fn failing_edits_are_skipped() {
    let dir = tempdir().unwrap();
    let edits = write_edits(
        &dir,
        r#"[
            {"itemId": "i3", "supplierId": "s3", "value": "100"},
            {"itemId": "i4", "supplierId": "s3", "value": "30"},
            {"itemId": "i1", "supplierId": "s4", "value": "1"},
            {"itemId": "missing", "supplierId": "s1", "value": "5"},
            {"itemId": "i1", "supplierId": "s2", "value": "abc"}
        ]"#,
    );

    let report = run(&config(Some(edits))).unwrap();
    assert_eq!(report.edits.applied, 3);
    assert_eq!(report.edits.skipped, 2);
    assert_eq!(report.edits.version, 3);

    assert_eq!(report.supplier_totals["s3"], dec!(1840));
    assert_eq!(report.supplier_totals["s2"], dec!(4000));
    assert_eq!(report.issues.len(), 1);
    assert_eq!(report.issues[0].item_id, "i1");
    assert_eq!(report.issues[0].issue.units, 4);
    assert_eq!(report.summary.coverage, 100);
}

#[test]
fn reject_policy_skips_non_numeric_edits() {
    let dir = tempdir().unwrap();
    let edits = write_edits(
        &dir,
        r#"[{"itemId": "i1", "supplierId": "s2", "value": "abc"}]"#,
    );
    let mut config = config(Some(edits));
    config.settings = AllocationSettings {
        quantity_policy: QuantityPolicy::Reject,
        ..Default::default()
    };

    let report = run(&config).unwrap();
    assert_eq!(report.edits.skipped, 1);
    assert_eq!(report.supplier_totals["s2"], dec!(9000));
}

#[test]
fn full_allocation_requirement_blocks_submission() {
    let mut config = config(None);
    config.settings.require_full_allocation = true;

    let report = run(&config).unwrap();
    assert!(!report.submission.ready);
    assert_eq!(report.submission.blocking.len(), 2);
    assert!(report.submission.warnings.is_empty());
}

#[test]
fn rerank_orders_review_by_landed_cost() {
    let mut config = config(None);
    config.rerank = true;

    let report = run(&config).unwrap();
    assert_eq!(report.edits.version, 1);
    let order: Vec<&str> = report.review.suppliers.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(order, vec!["s3", "s2", "s1"]);
}

#[test]
fn missing_session_file_is_an_error() {
    let dir = tempdir().unwrap();
    let mut config = config(None);
    config.session_path = dir.path().join("nope.json");
    assert!(run(&config).is_err());
}

#[test]
fn invalid_session_data_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("award.json");
    fs::write(
        &path,
        r#"{"suppliers": [
            {"id": "s1", "name": "A", "code": "A", "vendorId": "V1", "rank": 1},
            {"id": "s2", "name": "B", "code": "B", "vendorId": "V2", "rank": 1}
        ]}"#,
    )
    .unwrap();
    let mut config = config(None);
    config.session_path = path;

    let err = run(&config).unwrap_err();
    assert!(err.to_string().contains("share rank 1"));
}

#[test]
fn report_serializes_camel_case() {
    let report = run(&config(None)).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert!(json["summary"]["totalAwardValue"].is_number());
    assert!(json["grandTotals"]["s2"].is_number());
    assert_eq!(json["issues"][0]["type"], "under-allocation");
    assert_eq!(json["issues"][0]["itemId"], "i3");
    assert_eq!(json["review"]["suppliers"][0]["tier"], "L1");
    assert!(json["review"]["suppliers"][0]["rating"].is_number());
}

#[test]
fn positional_args_override_paths() {
    let config = config(None).with_args(vec!["a.json".to_string(), "b.json".to_string()]);
    assert_eq!(config.session_path, PathBuf::from("a.json"));
    assert_eq!(config.edits_path, Some(PathBuf::from("b.json")));

    let unchanged = self::config(None).with_args(Vec::new());
    assert_eq!(unchanged.session_path, fixture_path());
}

#[test]
fn config_reads_environment() {
    std::env::set_var("AWARD_SESSION_PATH", "/tmp/session.json");
    std::env::set_var("AWARD_QUANTITY_POLICY", "reject");
    std::env::set_var("AWARD_VENDORS_PER_PAGE", "5");
    std::env::set_var("AWARD_REQUIRE_FULL_ALLOCATION", "true");

    let config = Config::from_env().unwrap();
    assert_eq!(config.session_path, PathBuf::from("/tmp/session.json"));
    assert_eq!(config.settings.quantity_policy, QuantityPolicy::Reject);
    assert_eq!(config.settings.vendors_per_page, 5);
    assert!(config.settings.require_full_allocation);

    std::env::set_var("AWARD_VENDORS_PER_PAGE", "0");
    assert!(Config::from_env().is_err());

    for key in [
        "AWARD_SESSION_PATH",
        "AWARD_QUANTITY_POLICY",
        "AWARD_VENDORS_PER_PAGE",
        "AWARD_REQUIRE_FULL_ALLOCATION",
    ] {
        std::env::remove_var(key);
    }
}
