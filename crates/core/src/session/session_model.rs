use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A raw cell edit as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationEditRequest {
    pub item_id: String,
    pub supplier_id: String,
    /// Cell text, parsed according to the session's quantity policy
    pub value: String,
}

/// One applied quantity change, kept for undo and redo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditRecord {
    pub item_id: String,
    pub supplier_id: String,
    pub previous_qty: u64,
    pub new_qty: u64,
    pub applied_at: DateTime<Utc>,
}

/// Identity and history counters of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    pub id: String,
    pub award_id: String,
    pub version: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub undo_depth: usize,
    pub redo_depth: usize,
}
