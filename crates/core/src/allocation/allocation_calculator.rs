//! Pure aggregation and edit functions over line items and suppliers.
//!
//! Every function takes the current collections and returns new values; no
//! state is kept between calls, so callers own sequencing.

use std::collections::{HashMap, HashSet};

use log::{debug, warn};
use rust_decimal::Decimal;

use crate::awards::{AdditionalCost, ItemAllocation, LineItem};
use crate::constants::{MAX_MONEY_AMOUNT, SAVINGS_PERCENT_PRECISION};
use crate::errors::{Result, ValidationError};
use crate::suppliers::Supplier;
use crate::utils::decimal_utils::{percent_of, whole_percent};

use super::quantity::ensure_quantity_in_range;
use super::{AllocationError, AllocationIssue, AwardSummary, ItemIssue};

/// supplier_id -> monetary total
pub type SupplierTotals = HashMap<String, Decimal>;

/// Sums `unit_price * award_qty` per supplier across all line items.
///
/// Every supplier in `suppliers` gets an entry, zero when never allocated.
/// Allocations naming a supplier outside `suppliers` are skipped.
pub fn compute_supplier_totals(items: &[LineItem], suppliers: &[Supplier]) -> SupplierTotals {
    let mut totals: SupplierTotals = suppliers
        .iter()
        .map(|s| (s.id.clone(), Decimal::ZERO))
        .collect();

    for item in items {
        for allocation in &item.allocations {
            match totals.get_mut(&allocation.supplier_id) {
                Some(total) => *total += allocation.award_value(),
                None => warn!(
                    "Ignoring allocation on item {} for unknown supplier {}",
                    item.id, allocation.supplier_id
                ),
            }
        }
    }

    totals
}

/// Supplier total plus every additional cost charged to that supplier.
pub fn compute_grand_total(
    supplier_id: &str,
    supplier_totals: &SupplierTotals,
    additional_costs: &[AdditionalCost],
) -> Decimal {
    let allocated = supplier_totals
        .get(supplier_id)
        .copied()
        .unwrap_or(Decimal::ZERO);
    let extra: Decimal = additional_costs
        .iter()
        .map(|c| c.cost_for(supplier_id))
        .sum();
    allocated + extra
}

/// Grand totals for every supplier present in `supplier_totals`.
pub fn compute_grand_totals(
    supplier_totals: &SupplierTotals,
    additional_costs: &[AdditionalCost],
) -> SupplierTotals {
    supplier_totals
        .keys()
        .map(|id| {
            (
                id.clone(),
                compute_grand_total(id, supplier_totals, additional_costs),
            )
        })
        .collect()
}

/// Replaces the award quantity of an existing allocation in place.
///
/// Returns the previous quantity. Fails with `InvalidQuantity` above
/// [`MAX_QUANTITY`](crate::constants::MAX_QUANTITY), with `UnknownItem` when
/// no item has `item_id` and with `AllocationNotFound` when the item has no
/// allocation for `supplier_id`; nothing is modified on failure.
pub fn apply_allocation_edit_in_place(
    items: &mut [LineItem],
    item_id: &str,
    supplier_id: &str,
    new_qty: u64,
) -> Result<u64> {
    ensure_quantity_in_range(new_qty)?;
    let item = items
        .iter_mut()
        .find(|i| i.id == item_id)
        .ok_or_else(|| AllocationError::UnknownItem(item_id.to_string()))?;

    let allocation = item.allocation_for_mut(supplier_id).ok_or_else(|| {
        AllocationError::AllocationNotFound {
            item_id: item_id.to_string(),
            supplier_id: supplier_id.to_string(),
        }
    })?;

    let previous = allocation.award_qty;
    allocation.award_qty = new_qty;
    item.refresh_total_award();

    debug!(
        "Allocation {}/{} changed from {} to {}",
        item_id, supplier_id, previous, new_qty
    );
    Ok(previous)
}

/// Returns a copy of `items` with one allocation's award quantity replaced.
pub fn apply_allocation_edit(
    items: &[LineItem],
    item_id: &str,
    supplier_id: &str,
    new_qty: u64,
) -> Result<Vec<LineItem>> {
    let mut updated = items.to_vec();
    apply_allocation_edit_in_place(&mut updated, item_id, supplier_id, new_qty)?;
    Ok(updated)
}

/// Creates or replaces a full allocation (price, quantity and L1 flag).
///
/// Quantities above `MAX_QUANTITY` and prices outside `0..=MAX_MONEY_AMOUNT`
/// are refused.
pub fn upsert_allocation(
    items: &[LineItem],
    item_id: &str,
    allocation: ItemAllocation,
) -> Result<Vec<LineItem>> {
    ensure_quantity_in_range(allocation.award_qty)?;
    if allocation.unit_price < Decimal::ZERO || allocation.unit_price > MAX_MONEY_AMOUNT {
        return Err(ValidationError::InvalidInput(format!(
            "unit price {} of supplier '{}' on item '{}' is out of range",
            allocation.unit_price, allocation.supplier_id, item_id
        ))
        .into());
    }
    let mut updated = items.to_vec();
    let item = updated
        .iter_mut()
        .find(|i| i.id == item_id)
        .ok_or_else(|| AllocationError::UnknownItem(item_id.to_string()))?;

    match item.allocation_for_mut(&allocation.supplier_id) {
        Some(existing) => *existing = allocation,
        None => item.allocations.push(allocation),
    }
    item.refresh_total_award();
    Ok(updated)
}

/// Compares an item's awarded quantity with its available quantity.
pub fn issue_for(item: &LineItem) -> Option<AllocationIssue> {
    let awarded = item.awarded_qty();
    if awarded > item.available_qty {
        Some(AllocationIssue::over(awarded - item.available_qty))
    } else if awarded < item.available_qty {
        Some(AllocationIssue::under(item.available_qty - awarded))
    } else {
        None
    }
}

/// item_id -> issue, for items whose award does not match availability.
/// Items without an entry have no issue.
pub fn detect_issues(items: &[LineItem]) -> HashMap<String, AllocationIssue> {
    items
        .iter()
        .filter_map(|item| issue_for(item).map(|issue| (item.id.clone(), issue)))
        .collect()
}

/// Same as [`detect_issues`] but in item order.
pub fn collect_item_issues(items: &[LineItem]) -> Vec<ItemIssue> {
    items
        .iter()
        .filter_map(|item| {
            issue_for(item).map(|issue| ItemIssue {
                item_id: item.id.clone(),
                issue,
            })
        })
        .collect()
}

/// Projects award value, coverage, savings and supplier counts.
pub fn compute_summary(
    items: &[LineItem],
    suppliers: &[Supplier],
    baseline: Decimal,
) -> AwardSummary {
    let total_award_value: Decimal = items.iter().map(LineItem::award_value).sum();
    let total_items = items.len();

    let items_covered = items.iter().filter(|i| i.awarded_qty() > 0).count();
    let fully_allocated = items
        .iter()
        .filter(|i| i.awarded_qty() >= i.available_qty)
        .count();

    let awarded_ids: HashSet<&str> = items
        .iter()
        .flat_map(|i| i.allocations.iter())
        .filter(|a| a.is_awarded())
        .map(|a| a.supplier_id.as_str())
        .collect();
    let awarded_suppliers = suppliers
        .iter()
        .filter(|s| awarded_ids.contains(s.id.as_str()))
        .count();

    let non_l1_awards = items
        .iter()
        .flat_map(|i| {
            i.allocations
                .iter()
                .filter(|a| a.is_awarded() && !a.is_l1_price)
                .map(move |a| (i.id.as_str(), a.supplier_id.as_str()))
        })
        .collect::<HashSet<_>>()
        .len();

    let savings = baseline - total_award_value;

    AwardSummary {
        total_award_value,
        coverage: whole_percent(items_covered, total_items),
        savings,
        savings_percent: percent_of(savings, baseline, SAVINGS_PERCENT_PRECISION),
        baseline,
        items_covered,
        total_items,
        item_coverage_percent: whole_percent(fully_allocated, total_items),
        awarded_suppliers,
        total_suppliers: suppliers.len(),
        non_l1_awards,
    }
}
