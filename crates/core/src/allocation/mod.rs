//! Allocation module - aggregation, issue detection and edits over line items.

mod allocation_calculator;
mod allocation_errors;
mod allocation_model;
mod allocation_service;
mod quantity;

#[cfg(test)]
mod allocation_calculator_tests;

pub use allocation_calculator::{
    apply_allocation_edit, apply_allocation_edit_in_place, collect_item_issues,
    compute_grand_total, compute_grand_totals, compute_summary, compute_supplier_totals,
    detect_issues, issue_for, upsert_allocation, SupplierTotals,
};
pub use allocation_errors::AllocationError;
pub use allocation_model::{AllocationIssue, AwardSummary, IssueType, ItemIssue};
pub use allocation_service::{AllocationOverview, AllocationService, AllocationServiceTrait};
pub use quantity::{ensure_quantity_in_range, normalize_quantity, parse_award_quantity};
