//! Allocation grid projection: one page of supplier columns against every
//! (optionally filtered) line item.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::allocation::{
    compute_grand_total, compute_supplier_totals, issue_for, AllocationIssue,
};
use crate::awards::{AwardData, LineItem};
use crate::suppliers::{Supplier, SupplierTier};

use super::PageInfo;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostLine {
    pub cost_id: String,
    pub name: String,
    pub amount: Decimal,
}

/// Header and footer figures for one supplier column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierColumn {
    pub supplier_id: String,
    pub name: String,
    pub code: String,
    pub tier: SupplierTier,
    pub total_landed_cost: Decimal,
    pub sub_total: Decimal,
    pub additional_costs: Vec<CostLine>,
    pub grand_total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationCell {
    pub supplier_id: String,
    pub unit_price: Decimal,
    pub award_qty: u64,
    pub is_l1_price: bool,
    pub has_allocation: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridRow {
    pub item_id: String,
    pub row_number: u32,
    pub name: String,
    pub description: String,
    pub available_qty: u64,
    pub unit: String,
    pub total_award: u64,
    pub issue: Option<AllocationIssue>,
    pub cells: Vec<AllocationCell>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermCell {
    pub supplier_id: String,
    pub value: Option<String>,
    /// Set for the rank 1 supplier
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermRow {
    pub term_id: String,
    pub name: String,
    pub cells: Vec<TermCell>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationGrid {
    pub page: PageInfo,
    pub columns: Vec<SupplierColumn>,
    pub rows: Vec<GridRow>,
    pub commercial_terms: Vec<TermRow>,
    /// Items with an allocation issue, across all items
    pub issue_count: usize,
    pub item_count: usize,
}

/// Items whose name or description contains `query`, ignoring case.
pub fn filter_items<'a>(items: &'a [LineItem], query: &str) -> Vec<&'a LineItem> {
    items.iter().filter(|i| i.matches_query(query)).collect()
}

pub fn build_allocation_grid(
    data: &AwardData,
    page: usize,
    per_page: usize,
    query: Option<&str>,
) -> AllocationGrid {
    let page = PageInfo::new(page, per_page, data.suppliers.len());
    let paged: &[Supplier] = page.slice(&data.suppliers);
    let totals = compute_supplier_totals(&data.items, &data.suppliers);

    let columns = paged
        .iter()
        .map(|supplier| {
            let sub_total = totals.get(&supplier.id).copied().unwrap_or(Decimal::ZERO);
            SupplierColumn {
                supplier_id: supplier.id.clone(),
                name: supplier.name.clone(),
                code: supplier.code.clone(),
                tier: supplier.tier(),
                total_landed_cost: supplier.total_landed_cost,
                sub_total,
                additional_costs: data
                    .additional_costs
                    .iter()
                    .map(|c| CostLine {
                        cost_id: c.id.clone(),
                        name: c.name.clone(),
                        amount: c.cost_for(&supplier.id),
                    })
                    .collect(),
                grand_total: compute_grand_total(&supplier.id, &totals, &data.additional_costs),
            }
        })
        .collect();

    let visible = match query {
        Some(q) => filter_items(&data.items, q),
        None => data.items.iter().collect(),
    };

    let rows = visible
        .into_iter()
        .map(|item| GridRow {
            item_id: item.id.clone(),
            row_number: item.row_number,
            name: item.name.clone(),
            description: item.description.clone(),
            available_qty: item.available_qty,
            unit: item.unit.clone(),
            total_award: item.awarded_qty(),
            issue: issue_for(item),
            cells: paged.iter().map(|s| cell_for(item, s)).collect(),
        })
        .collect();

    let commercial_terms = data
        .commercial_terms
        .iter()
        .map(|term| TermRow {
            term_id: term.id.clone(),
            name: term.name.clone(),
            cells: paged
                .iter()
                .map(|s| TermCell {
                    supplier_id: s.id.clone(),
                    value: term.value_for(&s.id).map(str::to_string),
                    highlighted: s.is_rank_one(),
                })
                .collect(),
        })
        .collect();

    AllocationGrid {
        page,
        columns,
        rows,
        commercial_terms,
        issue_count: data.items.iter().filter(|i| issue_for(i).is_some()).count(),
        item_count: data.items.len(),
    }
}

fn cell_for(item: &LineItem, supplier: &Supplier) -> AllocationCell {
    match item.allocation_for(&supplier.id) {
        Some(a) => AllocationCell {
            supplier_id: supplier.id.clone(),
            unit_price: a.unit_price,
            award_qty: a.award_qty,
            is_l1_price: a.is_l1_price,
            has_allocation: true,
        },
        None => AllocationCell {
            supplier_id: supplier.id.clone(),
            unit_price: Decimal::ZERO,
            award_qty: 0,
            is_l1_price: false,
            has_allocation: false,
        },
    }
}
