//! Review and award-details projections, built per awarded supplier.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::awards::AwardData;
use crate::suppliers::{Supplier, SupplierTier};
use crate::utils::decimal_utils::{line_amount, whole_share};

/// One awarded supplier on the review screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSupplier {
    pub id: String,
    pub name: String,
    pub code: String,
    pub vendor_id: String,
    pub tier: SupplierTier,
    /// Items with a non-zero award for this supplier
    pub items: usize,
    /// Share (0-100) of the total award value
    pub coverage: u32,
    pub total: Decimal,
    /// Out of 5, derived from the supplier's scores
    pub rating: Decimal,
    pub logo_color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewAllocation {
    pub total_items: usize,
    pub total_award: Decimal,
    pub suppliers: Vec<ReviewSupplier>,
}

/// A line of a supplier's award split.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitLineItem {
    pub item_id: String,
    pub row_number: u32,
    pub name: String,
    pub description: String,
    pub qty: u64,
    pub unit: String,
    pub unit_price: Decimal,
    pub amount: Decimal,
}

/// The portion of the award going to one supplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierAwardSplit {
    pub supplier_id: String,
    pub supplier_name: String,
    pub supplier_code: String,
    pub logo_color: String,
    pub award_value: Decimal,
    pub item_count: usize,
    pub items: Vec<SplitLineItem>,
}

fn split_lines(data: &AwardData, supplier: &Supplier) -> Vec<SplitLineItem> {
    data.items
        .iter()
        .filter_map(|item| {
            let allocation = item.allocation_for(&supplier.id)?;
            if !allocation.is_awarded() {
                return None;
            }
            Some(SplitLineItem {
                item_id: item.id.clone(),
                row_number: item.row_number,
                name: item.name.clone(),
                description: item.description.clone(),
                qty: allocation.award_qty,
                unit: item.unit.clone(),
                unit_price: allocation.unit_price,
                amount: line_amount(allocation.unit_price, allocation.award_qty),
            })
        })
        .collect()
}

/// One split per supplier with a non-zero award, in rank order.
pub fn build_supplier_splits(data: &AwardData) -> Vec<SupplierAwardSplit> {
    data.suppliers_by_rank()
        .into_iter()
        .filter_map(|supplier| {
            let items = split_lines(data, supplier);
            let award_value: Decimal = items.iter().map(|l| l.amount).sum();
            if award_value <= Decimal::ZERO {
                return None;
            }
            Some(SupplierAwardSplit {
                supplier_id: supplier.id.clone(),
                supplier_name: supplier.name.clone(),
                supplier_code: supplier.code.clone(),
                logo_color: supplier.logo_color.clone(),
                award_value,
                item_count: items.len(),
                items,
            })
        })
        .collect()
}

pub fn build_review(data: &AwardData) -> ReviewAllocation {
    let splits = build_supplier_splits(data);
    let total_award: Decimal = splits.iter().map(|s| s.award_value).sum();

    let suppliers = splits
        .iter()
        .filter_map(|split| {
            let supplier = data.supplier(&split.supplier_id)?;
            Some(ReviewSupplier {
                id: supplier.id.clone(),
                name: supplier.name.clone(),
                code: supplier.code.clone(),
                vendor_id: supplier.vendor_id.clone(),
                tier: supplier.tier(),
                items: split.item_count,
                coverage: whole_share(split.award_value, total_award),
                total: split.award_value,
                rating: supplier.rating(),
                logo_color: supplier.logo_color.clone(),
            })
        })
        .collect();

    ReviewAllocation {
        total_items: data.items.len(),
        total_award,
        suppliers,
    }
}
