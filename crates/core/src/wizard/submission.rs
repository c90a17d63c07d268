//! Readiness of an allocation round for submission.

use serde::{Deserialize, Serialize};

use crate::allocation::{collect_item_issues, ItemIssue};
use crate::awards::LineItem;
use crate::settings::AllocationSettings;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionCheck {
    pub ready: bool,
    pub blocking: Vec<ItemIssue>,
    pub warnings: Vec<ItemIssue>,
}

/// Over-allocations always block. Under-allocations block only when
/// `require_full_allocation` is set and are warnings otherwise.
pub fn submission_check(items: &[LineItem], settings: &AllocationSettings) -> SubmissionCheck {
    let (blocking, warnings): (Vec<ItemIssue>, Vec<ItemIssue>) = collect_item_issues(items)
        .into_iter()
        .partition(|i| i.issue.is_over_allocation() || settings.require_full_allocation);

    SubmissionCheck {
        ready: blocking.is_empty(),
        blocking,
        warnings,
    }
}
