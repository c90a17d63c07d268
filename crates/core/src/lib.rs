//! Awardflow Core - Domain entities, calculations, and services.
//!
//! This crate contains the award allocation logic: splitting purchase-order
//! line items across ranked suppliers, deriving totals, issues and savings,
//! and tracking an editable allocation session. It performs no I/O; award
//! data reaches it through the `AwardDataProviderTrait` seam.

pub mod allocation;
pub mod awards;
pub mod constants;
pub mod errors;
pub mod session;
pub mod settings;
pub mod suppliers;
pub mod utils;
pub mod views;
pub mod wizard;

// Re-export the types most callers need
pub use awards::AwardData;
pub use session::{AwardDataProviderTrait, AwardSession};
pub use settings::{AllocationSettings, QuantityPolicy};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
