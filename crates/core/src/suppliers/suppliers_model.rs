//! Supplier domain models.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::constants::L1_RANK;

/// A supplier taking part in an allocation round.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: String,
    pub name: String,
    pub code: String,
    /// External vendor reference (e.g. "VND-V1")
    pub vendor_id: String,
    #[serde(default)]
    pub is_l1: bool,
    #[serde(default)]
    pub technical_score: Decimal,
    #[serde(default)]
    pub evaluation_score: Decimal,
    #[serde(default)]
    pub commercial_score: Decimal,
    /// 1 = best
    pub rank: u32,
    /// Cost of awarding every quoted item in full, plus additional costs
    #[serde(default)]
    pub total_landed_cost: Decimal,
    /// Color for visualization (hex code)
    #[serde(default)]
    pub logo_color: String,
}

impl Supplier {
    pub fn tier(&self) -> SupplierTier {
        SupplierTier::from_rank(self.rank)
    }

    pub fn is_rank_one(&self) -> bool {
        self.rank == L1_RANK
    }

    /// Star rating out of 5: the mean of the three 0-100 scores divided by
    /// 20, one decimal place.
    pub fn rating(&self) -> Decimal {
        let mean = (self.technical_score + self.evaluation_score + self.commercial_score) / dec!(3);
        (mean / dec!(20)).round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
    }
}

/// Price tier shown next to a supplier in the review screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SupplierTier {
    L1,
    L2,
    L3,
}

impl SupplierTier {
    pub fn from_rank(rank: u32) -> Self {
        match rank {
            L1_RANK => SupplierTier::L1,
            2 => SupplierTier::L2,
            _ => SupplierTier::L3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SupplierTier::L1 => "L1",
            SupplierTier::L2 => "L2",
            SupplierTier::L3 => "L3",
        }
    }
}

impl std::fmt::Display for SupplierTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Landed cost figures for one supplier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LandedCost {
    pub supplier_id: String,
    pub total: Decimal,
    /// Number of items the supplier quoted a price for
    pub quoted_items: usize,
}
