//! Settings module - allocation session configuration.

mod settings_model;

pub use settings_model::{AllocationSettings, QuantityPolicy};
