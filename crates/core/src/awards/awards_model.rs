//! Award domain models: line items, allocations, costs and terms.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::suppliers::Supplier;
use crate::utils::decimal_utils::line_amount;

/// One supplier's price and awarded quantity for a line item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ItemAllocation {
    pub supplier_id: String,
    pub unit_price: Decimal,
    #[serde(default)]
    pub award_qty: u64,
    #[serde(default)]
    pub is_l1_price: bool,
}

impl ItemAllocation {
    pub fn new(supplier_id: impl Into<String>, unit_price: Decimal, award_qty: u64) -> Self {
        Self {
            supplier_id: supplier_id.into(),
            unit_price,
            award_qty,
            is_l1_price: false,
        }
    }

    /// `unit_price * award_qty`
    pub fn award_value(&self) -> Decimal {
        line_amount(self.unit_price, self.award_qty)
    }

    pub fn is_awarded(&self) -> bool {
        self.award_qty > 0
    }
}

/// A purchase-order line item to be split across suppliers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: String,
    #[serde(default)]
    pub row_number: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub available_qty: u64,
    #[serde(default)]
    pub unit: String,
    /// Sum of `award_qty` over allocations. Kept in sync by
    /// [`LineItem::refresh_total_award`]; use [`LineItem::awarded_qty`] for
    /// an always-derived value.
    #[serde(default)]
    pub total_award: u64,
    #[serde(default)]
    pub allocations: Vec<ItemAllocation>,
}

impl LineItem {
    /// Saturates at `u64::MAX`; validated data stays far below it.
    pub fn awarded_qty(&self) -> u64 {
        self.allocations
            .iter()
            .fold(0u64, |acc, a| acc.saturating_add(a.award_qty))
    }

    pub fn award_value(&self) -> Decimal {
        self.allocations.iter().map(ItemAllocation::award_value).sum()
    }

    pub fn refresh_total_award(&mut self) {
        self.total_award = self.awarded_qty();
    }

    pub fn allocation_for(&self, supplier_id: &str) -> Option<&ItemAllocation> {
        self.allocations.iter().find(|a| a.supplier_id == supplier_id)
    }

    pub fn allocation_for_mut(&mut self, supplier_id: &str) -> Option<&mut ItemAllocation> {
        self.allocations
            .iter_mut()
            .find(|a| a.supplier_id == supplier_id)
    }

    /// Case-insensitive match on name or description.
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
    }
}

/// A non-item cost charged once per supplier (freight, setup fees, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalCost {
    pub id: String,
    pub name: String,
    /// supplier_id -> cost
    #[serde(default)]
    pub costs: HashMap<String, Decimal>,
}

impl AdditionalCost {
    pub fn cost_for(&self, supplier_id: &str) -> Decimal {
        self.costs.get(supplier_id).copied().unwrap_or(Decimal::ZERO)
    }
}

/// A free-text commercial term quoted by each supplier. Never part of totals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommercialTerm {
    pub id: String,
    pub name: String,
    /// supplier_id -> display value
    #[serde(default)]
    pub values: HashMap<String, String>,
}

impl CommercialTerm {
    pub fn value_for(&self, supplier_id: &str) -> Option<&str> {
        self.values.get(supplier_id).map(String::as_str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum AwardSourceType {
    #[default]
    Standard,
    Lot,
    RateContract,
}

/// The sourcing event an award originates from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AwardSource {
    pub id: String,
    pub code: String,
    #[serde(rename = "type", default)]
    pub source_type: AwardSourceType,
    pub name: String,
}

/// Everything the data provider supplies for one allocation round.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AwardData {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub source: Option<AwardSource>,
    #[serde(default)]
    pub suppliers: Vec<Supplier>,
    #[serde(default)]
    pub items: Vec<LineItem>,
    #[serde(default)]
    pub additional_costs: Vec<AdditionalCost>,
    #[serde(default)]
    pub commercial_terms: Vec<CommercialTerm>,
    /// Baseline spend that savings are measured against
    #[serde(default)]
    pub baseline: Decimal,
}

impl AwardData {
    pub fn supplier(&self, supplier_id: &str) -> Option<&Supplier> {
        self.suppliers.iter().find(|s| s.id == supplier_id)
    }

    pub fn item(&self, item_id: &str) -> Option<&LineItem> {
        self.items.iter().find(|i| i.id == item_id)
    }

    /// Suppliers ordered by rank, then id.
    pub fn suppliers_by_rank(&self) -> Vec<&Supplier> {
        let mut suppliers: Vec<&Supplier> = self.suppliers.iter().collect();
        suppliers.sort_by(|a, b| a.rank.cmp(&b.rank).then_with(|| a.id.cmp(&b.id)));
        suppliers
    }
}
