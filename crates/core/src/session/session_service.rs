use chrono::{DateTime, Utc};
use log::{debug, info};
use uuid::Uuid;

use crate::allocation::{
    apply_allocation_edit_in_place, collect_item_issues, compute_grand_totals, compute_summary,
    compute_supplier_totals, AllocationOverview, AllocationService, AllocationServiceTrait,
    AwardSummary, ItemIssue, SupplierTotals,
};
use crate::awards::{validate_award_data, AwardData};
use crate::errors::{Error, Result};
use crate::settings::AllocationSettings;
use crate::suppliers::{compute_total_landed_costs, mark_l1_prices, rank_suppliers};
use crate::views::{
    build_allocation_grid, build_review, build_supplier_splits, AllocationGrid, ReviewAllocation,
    SupplierAwardSplit,
};
use crate::wizard::{submission_check, SubmissionCheck};

use super::session_model::{EditRecord, SessionInfo};
use super::session_traits::AwardDataProviderTrait;

/// One allocation round held in memory.
///
/// Every successful mutation bumps `version`. Callers pass the version they
/// last observed to [`AwardSession::edit_quantity`] so that an edit based on
/// stale state is refused instead of silently overwriting newer changes.
pub struct AwardSession {
    id: String,
    data: AwardData,
    service: AllocationService,
    version: u64,
    undo_stack: Vec<EditRecord>,
    redo_stack: Vec<EditRecord>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl AwardSession {
    pub fn new(mut data: AwardData, settings: AllocationSettings) -> Result<Self> {
        validate_award_data(&data)?;
        let service = AllocationService::new(settings)?;

        for item in &mut data.items {
            item.refresh_total_award();
        }

        let now = Utc::now();
        let session = Self {
            id: Uuid::now_v7().to_string(),
            data,
            service,
            version: 0,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            created_at: now,
            updated_at: now,
        };
        info!(
            "Opened award session {} with {} suppliers and {} items",
            session.id,
            session.data.suppliers.len(),
            session.data.items.len()
        );
        Ok(session)
    }

    /// Builds a session from whatever `provider` loads.
    pub fn load(
        provider: &dyn AwardDataProviderTrait,
        settings: AllocationSettings,
    ) -> Result<Self> {
        let data = provider.load_award_data()?;
        Self::new(data, settings)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn data(&self) -> &AwardData {
        &self.data
    }

    pub fn into_data(self) -> AwardData {
        self.data
    }

    pub fn settings(&self) -> &AllocationSettings {
        self.service.settings()
    }

    pub fn info(&self) -> SessionInfo {
        SessionInfo {
            id: self.id.clone(),
            award_id: self.data.id.clone(),
            version: self.version,
            created_at: self.created_at,
            updated_at: self.updated_at,
            undo_depth: self.undo_stack.len(),
            redo_depth: self.redo_stack.len(),
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Applies a raw cell edit. Returns the new version.
    pub fn edit_quantity(
        &mut self,
        expected_version: u64,
        item_id: &str,
        supplier_id: &str,
        raw: &str,
    ) -> Result<u64> {
        self.ensure_version(expected_version)?;
        let qty = self.service.parse_quantity(raw)?;
        self.apply(item_id, supplier_id, qty)
    }

    /// Numeric variant of [`AwardSession::edit_quantity`].
    pub fn set_quantity(
        &mut self,
        expected_version: u64,
        item_id: &str,
        supplier_id: &str,
        qty: u64,
    ) -> Result<u64> {
        self.ensure_version(expected_version)?;
        self.apply(item_id, supplier_id, qty)
    }

    /// Recomputes landed costs, supplier ranks and L1 price flags from the
    /// current quotes. Award quantities are untouched.
    pub fn refresh_ranking(&mut self, expected_version: u64) -> Result<u64> {
        self.ensure_version(expected_version)?;
        let landed = compute_total_landed_costs(
            &self.data.items,
            &self.data.suppliers,
            &self.data.additional_costs,
        );
        self.data.suppliers = rank_suppliers(&self.data.suppliers, &landed);
        self.data.items = mark_l1_prices(&self.data.items);
        self.touch();
        Ok(self.version)
    }

    /// Reverts the most recent edit. `Ok(false)` when there is none.
    pub fn undo(&mut self) -> Result<bool> {
        let Some(record) = self.undo_stack.last().cloned() else {
            return Ok(false);
        };
        apply_allocation_edit_in_place(
            &mut self.data.items,
            &record.item_id,
            &record.supplier_id,
            record.previous_qty,
        )?;
        self.undo_stack.pop();
        self.redo_stack.push(record);
        self.touch();
        Ok(true)
    }

    /// Re-applies the most recently undone edit. `Ok(false)` when there is
    /// none.
    pub fn redo(&mut self) -> Result<bool> {
        let Some(record) = self.redo_stack.last().cloned() else {
            return Ok(false);
        };
        apply_allocation_edit_in_place(
            &mut self.data.items,
            &record.item_id,
            &record.supplier_id,
            record.new_qty,
        )?;
        self.redo_stack.pop();
        self.undo_stack.push(record);
        self.touch();
        Ok(true)
    }

    pub fn supplier_totals(&self) -> SupplierTotals {
        compute_supplier_totals(&self.data.items, &self.data.suppliers)
    }

    pub fn grand_totals(&self) -> SupplierTotals {
        compute_grand_totals(&self.supplier_totals(), &self.data.additional_costs)
    }

    pub fn issues(&self) -> Vec<ItemIssue> {
        collect_item_issues(&self.data.items)
    }

    pub fn summary(&self) -> AwardSummary {
        compute_summary(&self.data.items, &self.data.suppliers, self.data.baseline)
    }

    pub fn overview(&self) -> AllocationOverview {
        self.service.overview(&self.data)
    }

    /// One page of the allocation grid, `vendors_per_page` suppliers wide.
    pub fn grid(&self, page: usize, query: Option<&str>) -> AllocationGrid {
        build_allocation_grid(&self.data, page, self.settings().vendors_per_page, query)
    }

    pub fn review(&self) -> ReviewAllocation {
        build_review(&self.data)
    }

    pub fn splits(&self) -> Vec<SupplierAwardSplit> {
        build_supplier_splits(&self.data)
    }

    pub fn submission_check(&self) -> SubmissionCheck {
        submission_check(&self.data.items, self.settings())
    }

    fn ensure_version(&self, expected: u64) -> Result<()> {
        if expected != self.version {
            return Err(Error::VersionConflict {
                expected,
                actual: self.version,
            });
        }
        Ok(())
    }

    fn apply(&mut self, item_id: &str, supplier_id: &str, qty: u64) -> Result<u64> {
        let previous = self.service.set_quantity(
            &mut self.data.items,
            &self.data.suppliers,
            item_id,
            supplier_id,
            qty,
        )?;

        self.undo_stack.push(EditRecord {
            item_id: item_id.to_string(),
            supplier_id: supplier_id.to_string(),
            previous_qty: previous,
            new_qty: qty,
            applied_at: Utc::now(),
        });
        self.redo_stack.clear();
        self.touch();
        debug!("Session {} now at version {}", self.id, self.version);
        Ok(self.version)
    }

    fn touch(&mut self) {
        self.version += 1;
        self.updated_at = Utc::now();
    }
}
