//! Awards module - line items, allocations, additional costs and commercial terms.

mod awards_model;
mod awards_validation;


pub use awards_model::{
    AdditionalCost, AwardData, AwardSource, AwardSourceType, CommercialTerm, ItemAllocation,
    LineItem,
};
pub use awards_validation::validate_award_data;
