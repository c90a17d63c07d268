//! Landed cost ranking of suppliers and L1 price marking.

use std::cmp::Reverse;
use std::collections::HashMap;

use log::{debug, warn};
use rust_decimal::Decimal;

use crate::awards::{AdditionalCost, LineItem};
use crate::constants::L1_RANK;
use crate::utils::decimal_utils::line_amount;

use super::{LandedCost, Supplier};

/// Cost of awarding each supplier the full available quantity of every item it
/// quoted, plus its additional costs.
pub fn compute_total_landed_costs(
    items: &[LineItem],
    suppliers: &[Supplier],
    additional_costs: &[AdditionalCost],
) -> HashMap<String, LandedCost> {
    let mut landed: HashMap<String, LandedCost> = suppliers
        .iter()
        .map(|s| {
            let extra: Decimal = additional_costs.iter().map(|c| c.cost_for(&s.id)).sum();
            (
                s.id.clone(),
                LandedCost {
                    supplier_id: s.id.clone(),
                    total: extra,
                    quoted_items: 0,
                },
            )
        })
        .collect();

    for item in items {
        for allocation in &item.allocations {
            match landed.get_mut(&allocation.supplier_id) {
                Some(entry) => {
                    entry.total += line_amount(allocation.unit_price, item.available_qty);
                    entry.quoted_items += 1;
                }
                None => warn!(
                    "Ignoring quote on item {} from unknown supplier {}",
                    item.id, allocation.supplier_id
                ),
            }
        }
    }

    landed
}

/// Returns suppliers with `total_landed_cost`, `rank` and `is_l1` refreshed.
///
/// Suppliers quoting more items rank ahead of those quoting fewer; within the
/// same count the lower landed cost wins and the supplier id breaks ties, so
/// ranks are always unique and start at 1. Output keeps the input order.
pub fn rank_suppliers(
    suppliers: &[Supplier],
    landed_costs: &HashMap<String, LandedCost>,
) -> Vec<Supplier> {
    let cost_of = |s: &Supplier| {
        landed_costs
            .get(&s.id)
            .map(|l| (l.quoted_items, l.total))
            .unwrap_or((0, Decimal::ZERO))
    };

    let mut order: Vec<&Supplier> = suppliers.iter().collect();
    order.sort_by_key(|s| {
        let (quoted, total) = cost_of(s);
        (Reverse(quoted), total, s.id.clone())
    });

    let ranks: HashMap<&str, u32> = order
        .iter()
        .enumerate()
        .map(|(idx, s)| (s.id.as_str(), idx as u32 + 1))
        .collect();

    suppliers
        .iter()
        .map(|s| {
            let rank = ranks.get(s.id.as_str()).copied().unwrap_or(u32::MAX);
            let (_, total) = cost_of(s);
            debug!("Supplier {} ranked {} with landed cost {}", s.id, rank, total);
            Supplier {
                rank,
                total_landed_cost: total,
                is_l1: rank == L1_RANK,
                ..s.clone()
            }
        })
        .collect()
}

/// Flags, per item, the allocations quoting the lowest unit price.
pub fn mark_l1_prices(items: &[LineItem]) -> Vec<LineItem> {
    items
        .iter()
        .map(|item| {
            let mut item = item.clone();
            if let Some(lowest) = item.allocations.iter().map(|a| a.unit_price).min() {
                for allocation in &mut item.allocations {
                    allocation.is_l1_price = allocation.unit_price == lowest;
                }
            }
            item
        })
        .collect()
}
