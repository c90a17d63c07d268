//! Suppliers module - supplier models, landed cost ranking and L1 marking.

mod ranking;
mod suppliers_model;

pub use ranking::{compute_total_landed_costs, mark_l1_prices, rank_suppliers};
pub use suppliers_model::{LandedCost, Supplier, SupplierTier};
