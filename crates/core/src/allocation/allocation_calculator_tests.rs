//! Unit tests for the allocation calculator and service.

use super::*;
use crate::awards::{AdditionalCost, AwardData, ItemAllocation, LineItem};
use crate::constants::{MAX_MONEY_AMOUNT, MAX_QUANTITY};
use crate::errors::{Error, ValidationError};
use crate::settings::{AllocationSettings, QuantityPolicy};
use crate::suppliers::Supplier;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;

// ============================================================================
// Fixtures
// ============================================================================

fn supplier(id: &str, rank: u32) -> Supplier {
    Supplier {
        id: id.to_string(),
        name: format!("Supplier {}", id),
        code: id.to_uppercase(),
        vendor_id: format!("VND-{}", id),
        is_l1: rank == 1,
        technical_score: dec!(70),
        evaluation_score: dec!(70),
        commercial_score: dec!(70),
        rank,
        total_landed_cost: Decimal::ZERO,
        logo_color: String::new(),
    }
}

fn alloc(supplier_id: &str, unit_price: Decimal, qty: u64, is_l1: bool) -> ItemAllocation {
    ItemAllocation {
        supplier_id: supplier_id.to_string(),
        unit_price,
        award_qty: qty,
        is_l1_price: is_l1,
    }
}

fn item(id: &str, available: u64, allocations: Vec<ItemAllocation>) -> LineItem {
    let mut line = LineItem {
        id: id.to_string(),
        row_number: 0,
        name: format!("Item {}", id),
        description: String::new(),
        available_qty: available,
        unit: "ea".to_string(),
        total_award: 0,
        allocations,
    };
    line.refresh_total_award();
    line
}

fn cost(id: &str, entries: &[(&str, Decimal)]) -> AdditionalCost {
    AdditionalCost {
        id: id.to_string(),
        name: id.to_string(),
        costs: entries
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect::<HashMap<_, _>>(),
    }
}

fn sample_items() -> Vec<LineItem> {
    vec![
        item(
            "i1",
            100,
            vec![
                alloc("s1", dec!(10), 70, true),
                alloc("s2", dec!(12), 30, false),
            ],
        ),
        item("i2", 50, vec![alloc("s1", dec!(4.5), 50, true)]),
        item(
            "i3",
            20,
            vec![alloc("s1", dec!(100), 0, false), alloc("s2", dec!(90), 0, true)],
        ),
    ]
}

fn sample_suppliers() -> Vec<Supplier> {
    vec![supplier("s1", 1), supplier("s2", 2), supplier("s3", 3)]
}

// ============================================================================
// Supplier and grand totals
// ============================================================================

#[test]
fn test_supplier_totals_sum_price_times_qty() {
    let totals = compute_supplier_totals(&sample_items(), &sample_suppliers());
    // s1: 10*70 + 4.5*50 + 100*0
    assert_eq!(totals["s1"], dec!(925));
    // s2: 12*30 + 90*0
    assert_eq!(totals["s2"], dec!(360));
}

#[test]
fn test_unallocated_supplier_total_is_zero() {
    let totals = compute_supplier_totals(&sample_items(), &sample_suppliers());
    assert_eq!(totals.len(), 3);
    assert_eq!(totals["s3"], Decimal::ZERO);
}

#[test]
fn test_unknown_supplier_allocations_are_ignored() {
    let items = vec![item(
        "i1",
        10,
        vec![alloc("s1", dec!(2), 5, true), alloc("ghost", dec!(1000), 5, false)],
    )];
    let totals = compute_supplier_totals(&items, &[supplier("s1", 1)]);
    assert_eq!(totals.len(), 1);
    assert_eq!(totals["s1"], dec!(10));
    assert!(!totals.contains_key("ghost"));
}

#[test]
fn test_grand_total_adds_each_cost_once() {
    let totals = compute_supplier_totals(&sample_items(), &sample_suppliers());
    let costs = vec![
        cost("freight", &[("s1", dec!(150)), ("s2", dec!(80))]),
        cost("setup", &[("s1", dec!(25))]),
    ];
    assert_eq!(compute_grand_total("s1", &totals, &costs), dec!(1100));
    assert_eq!(compute_grand_total("s2", &totals, &costs), dec!(440));
    assert_eq!(compute_grand_total("s3", &totals, &costs), Decimal::ZERO);
}

#[test]
fn test_grand_total_for_supplier_without_totals_entry() {
    let costs = vec![cost("freight", &[("s9", dec!(12))])];
    assert_eq!(compute_grand_total("s9", &HashMap::new(), &costs), dec!(12));
}

#[test]
fn test_grand_totals_cover_every_supplier() {
    let totals = compute_supplier_totals(&sample_items(), &sample_suppliers());
    let grand = compute_grand_totals(&totals, &[cost("freight", &[("s3", dec!(5))])]);
    assert_eq!(grand.len(), 3);
    assert_eq!(grand["s1"], dec!(925));
    assert_eq!(grand["s3"], dec!(5));
}

// ============================================================================
// Edits
// ============================================================================

#[test]
fn test_apply_edit_replaces_quantity_and_refreshes_total() {
    let items = sample_items();
    let updated = apply_allocation_edit(&items, "i1", "s2", 45).unwrap();
    let line = &updated[0];
    assert_eq!(line.allocation_for("s2").unwrap().award_qty, 45);
    assert_eq!(line.total_award, 115);
    // input untouched
    assert_eq!(items[0].allocation_for("s2").unwrap().award_qty, 30);
}

#[test]
fn test_apply_edit_is_idempotent() {
    let once = apply_allocation_edit(&sample_items(), "i2", "s1", 12).unwrap();
    let twice = apply_allocation_edit(&once, "i2", "s1", 12).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_apply_edit_unknown_item() {
    let err = apply_allocation_edit(&sample_items(), "nope", "s1", 1).unwrap_err();
    assert!(matches!(
        err,
        Error::Allocation(AllocationError::UnknownItem(ref id)) if id == "nope"
    ));
}

#[test]
fn test_apply_edit_missing_allocation_is_rejected() {
    let err = apply_allocation_edit(&sample_items(), "i2", "s2", 10).unwrap_err();
    assert!(matches!(
        err,
        Error::Allocation(AllocationError::AllocationNotFound { ref item_id, ref supplier_id })
            if item_id == "i2" && supplier_id == "s2"
    ));
}

#[test]
fn test_in_place_edit_returns_previous_quantity() {
    let mut items = sample_items();
    let previous = apply_allocation_edit_in_place(&mut items, "i1", "s1", 10).unwrap();
    assert_eq!(previous, 70);
    assert_eq!(items[0].total_award, 40);
}

#[test]
fn test_upsert_creates_allocation_with_price() {
    let updated =
        upsert_allocation(&sample_items(), "i2", alloc("s2", dec!(4.25), 10, false)).unwrap();
    let line = &updated[1];
    assert_eq!(line.allocations.len(), 2);
    assert_eq!(line.allocation_for("s2").unwrap().unit_price, dec!(4.25));
    assert_eq!(line.total_award, 60);
}

#[test]
fn test_upsert_replaces_existing_allocation() {
    let updated =
        upsert_allocation(&sample_items(), "i1", alloc("s2", dec!(11), 5, true)).unwrap();
    let line = &updated[0];
    assert_eq!(line.allocations.len(), 2);
    let replaced = line.allocation_for("s2").unwrap();
    assert_eq!(replaced.unit_price, dec!(11));
    assert!(replaced.is_l1_price);
    assert_eq!(line.total_award, 75);
}

#[test]
fn test_upsert_unknown_item() {
    assert!(upsert_allocation(&sample_items(), "x", alloc("s1", dec!(1), 1, false)).is_err());
}

#[test]
fn test_edits_above_quantity_limit_leave_items_untouched() {
    let mut items = sample_items();
    let err = apply_allocation_edit_in_place(&mut items, "i1", "s1", u64::MAX).unwrap_err();
    assert!(matches!(
        err,
        Error::Allocation(AllocationError::InvalidQuantity(ref v)) if v == "18446744073709551615"
    ));
    assert_eq!(items, sample_items());

    assert!(apply_allocation_edit(&items, "i1", "s1", MAX_QUANTITY).is_ok());
    let oversized = alloc("s2", dec!(1), MAX_QUANTITY + 1, false);
    assert!(upsert_allocation(&items, "i2", oversized).is_err());
}

#[test]
fn test_upsert_rejects_price_out_of_range() {
    let too_high = MAX_MONEY_AMOUNT + dec!(1);
    for price in [dec!(-0.01), too_high] {
        assert!(matches!(
            upsert_allocation(&sample_items(), "i2", alloc("s2", price, 1, false)),
            Err(Error::Validation(ValidationError::InvalidInput(_)))
        ));
    }
}

// ============================================================================
// Issues
// ============================================================================

#[test]
fn test_over_allocation_scenario() {
    let items = vec![item(
        "i1",
        100,
        vec![alloc("s1", dec!(1), 60, true), alloc("s2", dec!(1), 60, false)],
    )];
    let issues = detect_issues(&items);
    assert_eq!(issues["i1"], AllocationIssue::over(20));
    assert!(issues["i1"].is_over_allocation());
}

#[test]
fn test_under_allocation_and_balanced_items() {
    let issues = detect_issues(&sample_items());
    assert!(!issues.contains_key("i1"));
    assert!(!issues.contains_key("i2"));
    assert_eq!(issues["i3"], AllocationIssue::under(20));
}

#[test]
fn test_balancing_an_item_clears_its_issue() {
    let items = apply_allocation_edit(&sample_items(), "i3", "s2", 20).unwrap();
    assert!(detect_issues(&items).is_empty());
}

#[test]
fn test_issues_use_derived_totals_not_cached_field() {
    let mut items = sample_items();
    // stale cached value must not mask the real mismatch
    items[0].allocations[0].award_qty = 90;
    assert_eq!(issue_for(&items[0]), Some(AllocationIssue::over(20)));
}

#[test]
fn test_collect_item_issues_in_item_order() {
    let items = vec![
        item("b", 5, vec![]),
        item("a", 5, vec![alloc("s1", dec!(1), 6, true)]),
    ];
    let issues = collect_item_issues(&items);
    let ids: Vec<&str> = issues.iter().map(|i| i.item_id.as_str()).collect();
    assert_eq!(ids, vec!["b", "a"]);
    assert_eq!(issues[1].issue, AllocationIssue::over(1));
}

#[test]
fn test_item_issue_serialization() {
    let issue = ItemIssue {
        item_id: "i1".to_string(),
        issue: AllocationIssue::over(20),
    };
    assert_eq!(
        serde_json::to_value(&issue).unwrap(),
        serde_json::json!({"itemId": "i1", "type": "over-allocation", "units": 20})
    );
}

// ============================================================================
// Summary
// ============================================================================

#[test]
fn test_summary_counts() {
    let summary = compute_summary(&sample_items(), &sample_suppliers(), dec!(1500));
    assert_eq!(summary.total_award_value, dec!(1285));
    assert_eq!(summary.items_covered, 2);
    assert_eq!(summary.total_items, 3);
    assert_eq!(summary.coverage, 67);
    assert_eq!(summary.item_coverage_percent, 67);
    assert_eq!(summary.awarded_suppliers, 2);
    assert_eq!(summary.total_suppliers, 3);
    assert_eq!(summary.non_l1_awards, 1);
    assert_eq!(summary.savings, dec!(215));
    assert_eq!(summary.savings_percent, dec!(14.3));
    assert!(!summary.is_cost_overrun());
}

#[test]
fn test_summary_savings_sample() {
    let items = vec![item("i1", 1, vec![alloc("s1", dec!(5230000), 1, true)])];
    let summary = compute_summary(&items, &[supplier("s1", 1)], dec!(5540000));
    assert_eq!(summary.savings, dec!(310000));
    assert_eq!(summary.savings_percent, dec!(5.6));
    assert_eq!(summary.coverage, 100);
}

#[test]
fn test_summary_cost_overrun_is_negative() {
    let items = vec![item("i1", 10, vec![alloc("s1", dec!(12), 10, true)])];
    let summary = compute_summary(&items, &[supplier("s1", 1)], dec!(100));
    assert_eq!(summary.savings, dec!(-20));
    assert_eq!(summary.savings_percent, dec!(-20.0));
    assert!(summary.is_cost_overrun());
}

#[test]
fn test_summary_empty_inputs() {
    let summary = compute_summary(&[], &[], Decimal::ZERO);
    assert_eq!(summary.coverage, 0);
    assert_eq!(summary.item_coverage_percent, 0);
    assert_eq!(summary.savings_percent, Decimal::ZERO);
    assert_eq!(summary.total_award_value, Decimal::ZERO);
}

#[test]
fn test_unallocated_supplier_not_counted_as_awarded() {
    let items = vec![item("i1", 10, vec![alloc("s2", dec!(3), 0, false)])];
    let suppliers = vec![supplier("s1", 1), supplier("s2", 2)];
    let summary = compute_summary(&items, &suppliers, dec!(100));
    assert_eq!(summary.awarded_suppliers, 0);
    let totals = compute_supplier_totals(&items, &suppliers);
    assert_eq!(totals["s1"], Decimal::ZERO);
    assert_eq!(totals["s2"], Decimal::ZERO);
}

#[test]
fn test_meets_coverage_target() {
    let summary = compute_summary(&sample_items(), &sample_suppliers(), dec!(1500));
    assert!(summary.meets_coverage_target(60));
    assert!(!summary.meets_coverage_target(80));
}

#[test]
fn test_summary_serializes_camel_case() {
    let summary = compute_summary(&sample_items(), &sample_suppliers(), dec!(1500));
    let value = serde_json::to_value(&summary).unwrap();
    assert!(value.get("nonL1Awards").is_some());
    assert!(value.get("itemCoveragePercent").is_some());
    assert!(value.get("totalAwardValue").is_some());
}

// ============================================================================
// Service
// ============================================================================

#[test]
fn test_service_rejects_unknown_supplier() {
    let service = AllocationService::new(AllocationSettings::default()).unwrap();
    let mut items = sample_items();
    let err = service
        .set_quantity(&mut items, &sample_suppliers(), "i1", "ghost", 5)
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Allocation(AllocationError::UnknownSupplier(_))
    ));
    assert_eq!(items, sample_items());
}

#[test]
fn test_service_sets_quantity_in_place() {
    let service = AllocationService::new(AllocationSettings::default()).unwrap();
    let mut items = sample_items();
    let qty = service.parse_quantity("abc").unwrap();
    let previous = service
        .set_quantity(&mut items, &sample_suppliers(), "i1", "s2", qty)
        .unwrap();
    assert_eq!(previous, 30);
    assert_eq!(items[0].allocation_for("s2").unwrap().award_qty, 0);
    assert_eq!(items[0].total_award, 70);
}

#[test]
fn test_service_reject_policy() {
    let settings = AllocationSettings {
        quantity_policy: QuantityPolicy::Reject,
        ..Default::default()
    };
    let service = AllocationService::new(settings).unwrap();
    for raw in ["-1", "1000000000000"] {
        assert!(matches!(
            service.parse_quantity(raw),
            Err(Error::Allocation(AllocationError::InvalidQuantity(_)))
        ));
    }
    assert_eq!(service.parse_quantity(" 12 ").unwrap(), 12);
}

#[test]
fn test_service_refuses_quantity_above_limit() {
    let service = AllocationService::new(AllocationSettings::default()).unwrap();
    let mut items = sample_items();
    let err = service
        .set_quantity(&mut items, &sample_suppliers(), "i1", "s2", u64::MAX)
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Allocation(AllocationError::InvalidQuantity(_))
    ));
    assert_eq!(items, sample_items());
}

#[test]
fn test_service_rejects_invalid_settings() {
    let settings = AllocationSettings {
        vendors_per_page: 0,
        ..Default::default()
    };
    assert!(AllocationService::new(settings).is_err());
}

#[test]
fn test_service_overview() {
    let service = AllocationService::new(AllocationSettings::default()).unwrap();
    let data = AwardData {
        suppliers: sample_suppliers(),
        items: sample_items(),
        additional_costs: vec![cost("freight", &[("s2", dec!(40))])],
        baseline: dec!(1500),
        ..Default::default()
    };
    let overview = service.overview(&data);
    assert_eq!(overview.supplier_totals["s2"], dec!(360));
    assert_eq!(overview.grand_totals["s2"], dec!(400));
    assert_eq!(overview.issues.len(), 1);
    assert_eq!(overview.summary.total_award_value, dec!(1285));
}
