//! Allocation error types.

use thiserror::Error;

/// Errors raised by allocation edits and quantity validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AllocationError {
    #[error("Invalid award quantity '{0}': expected a non-negative integer")]
    InvalidQuantity(String),

    #[error("Unknown supplier '{0}'")]
    UnknownSupplier(String),

    #[error("Unknown line item '{0}'")]
    UnknownItem(String),

    #[error("No allocation for supplier '{supplier_id}' on item '{item_id}'")]
    AllocationNotFound {
        item_id: String,
        supplier_id: String,
    },
}
