use awardflow_core::allocation::{AwardSummary, ItemIssue, SupplierTotals};
use awardflow_core::views::ReviewAllocation;
use awardflow_core::wizard::SubmissionCheck;
use serde::{Deserialize, Serialize};

/// Edit replay outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditOutcome {
    pub applied: usize,
    pub skipped: usize,
    pub version: u64,
}

/// Everything printed after an allocation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationReport {
    pub award_id: String,
    pub edits: EditOutcome,
    pub summary: AwardSummary,
    pub supplier_totals: SupplierTotals,
    pub grand_totals: SupplierTotals,
    pub issues: Vec<ItemIssue>,
    pub review: ReviewAllocation,
    pub submission: SubmissionCheck,
}
