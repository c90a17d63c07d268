//! Derived allocation models: issues and award summary.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Direction of a mismatch between awarded and available quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueType {
    OverAllocation,
    UnderAllocation,
}

impl IssueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueType::OverAllocation => "over-allocation",
            IssueType::UnderAllocation => "under-allocation",
        }
    }
}

impl std::fmt::Display for IssueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Mismatch between a line item's total award and its available quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationIssue {
    #[serde(rename = "type")]
    pub issue_type: IssueType,
    /// Units by which the total award deviates from the available quantity
    pub units: u64,
}

impl AllocationIssue {
    pub fn over(units: u64) -> Self {
        Self {
            issue_type: IssueType::OverAllocation,
            units,
        }
    }

    pub fn under(units: u64) -> Self {
        Self {
            issue_type: IssueType::UnderAllocation,
            units,
        }
    }

    pub fn is_over_allocation(&self) -> bool {
        self.issue_type == IssueType::OverAllocation
    }
}

/// An issue tagged with the line item it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemIssue {
    pub item_id: String,
    #[serde(flatten)]
    pub issue: AllocationIssue,
}

/// Headline figures for an allocation round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwardSummary {
    pub total_award_value: Decimal,
    /// Percentage (0-100) of items with any award
    pub coverage: u32,
    /// `baseline - total_award_value`; negative on a cost overrun
    pub savings: Decimal,
    /// Savings relative to baseline, one decimal place, signed
    pub savings_percent: Decimal,
    pub baseline: Decimal,
    pub items_covered: usize,
    pub total_items: usize,
    /// Percentage (0-100) of items whose available quantity is fully awarded
    pub item_coverage_percent: u32,
    pub awarded_suppliers: usize,
    pub total_suppliers: usize,
    /// Awarded (item, supplier) pairs that did not use the L1 price
    pub non_l1_awards: usize,
}

impl AwardSummary {
    pub fn is_cost_overrun(&self) -> bool {
        self.savings < Decimal::ZERO
    }

    pub fn meets_coverage_target(&self, target_percent: u32) -> bool {
        self.coverage >= target_percent
    }
}
