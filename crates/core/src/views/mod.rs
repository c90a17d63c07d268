//! Views module - read-only projections for the allocation grid, the award
//! details screen and the review screen.

mod grid;
mod pagination;
mod review;


pub use grid::{
    build_allocation_grid, filter_items, AllocationCell, AllocationGrid, CostLine, GridRow,
    SupplierColumn, TermCell, TermRow,
};
pub use pagination::PageInfo;
pub use review::{
    build_review, build_supplier_splits, ReviewAllocation, ReviewSupplier, SplitLineItem,
    SupplierAwardSplit,
};
