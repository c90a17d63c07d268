//! Service applying allocation settings on top of the pure calculator.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::awards::{AwardData, LineItem};
use crate::errors::Result;
use crate::settings::AllocationSettings;
use crate::suppliers::Supplier;

use super::allocation_calculator::{
    apply_allocation_edit_in_place, collect_item_issues, compute_grand_totals, compute_summary,
    compute_supplier_totals, SupplierTotals,
};
use super::quantity::parse_award_quantity;
use super::{AllocationError, AwardSummary, ItemIssue};

/// Every derived figure the allocation screen displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationOverview {
    pub supplier_totals: SupplierTotals,
    pub grand_totals: SupplierTotals,
    pub issues: Vec<ItemIssue>,
    pub summary: AwardSummary,
}

/// Trait for allocation service.
pub trait AllocationServiceTrait: Send + Sync {
    fn settings(&self) -> &AllocationSettings;

    /// Turns raw cell text into a quantity under the configured policy.
    fn parse_quantity(&self, raw_qty: &str) -> Result<u64>;

    /// Sets one award quantity in place and returns the previous one.
    /// Unknown suppliers are rejected before anything changes.
    fn set_quantity(
        &self,
        items: &mut [LineItem],
        suppliers: &[Supplier],
        item_id: &str,
        supplier_id: &str,
        qty: u64,
    ) -> Result<u64>;

    /// Recomputes totals, issues and the summary from scratch.
    fn overview(&self, data: &AwardData) -> AllocationOverview;
}

/// Service for policy-aware allocation edits and aggregation.
pub struct AllocationService {
    settings: AllocationSettings,
}

impl AllocationService {
    pub fn new(settings: AllocationSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self { settings })
    }
}

impl AllocationServiceTrait for AllocationService {
    fn settings(&self) -> &AllocationSettings {
        &self.settings
    }

    fn parse_quantity(&self, raw_qty: &str) -> Result<u64> {
        parse_award_quantity(raw_qty, self.settings.quantity_policy)
    }

    fn set_quantity(
        &self,
        items: &mut [LineItem],
        suppliers: &[Supplier],
        item_id: &str,
        supplier_id: &str,
        qty: u64,
    ) -> Result<u64> {
        if !suppliers.iter().any(|s| s.id == supplier_id) {
            return Err(AllocationError::UnknownSupplier(supplier_id.to_string()).into());
        }
        apply_allocation_edit_in_place(items, item_id, supplier_id, qty)
    }

    fn overview(&self, data: &AwardData) -> AllocationOverview {
        debug!(
            "Computing allocation overview for {} items and {} suppliers",
            data.items.len(),
            data.suppliers.len()
        );

        let supplier_totals = compute_supplier_totals(&data.items, &data.suppliers);
        let grand_totals = compute_grand_totals(&supplier_totals, &data.additional_costs);

        AllocationOverview {
            issues: collect_item_issues(&data.items),
            summary: compute_summary(&data.items, &data.suppliers, data.baseline),
            supplier_totals,
            grand_totals,
        }
    }
}
