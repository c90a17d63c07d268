//! Structural checks on award data received from the data provider.

use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::{MAX_MONEY_AMOUNT, MAX_QUANTITY};
use crate::errors::{Result, ValidationError};

use super::AwardData;

/// Validates ids, ranks, scores and monetary amounts of an award round.
///
/// Quantities above [`MAX_QUANTITY`] and amounts above [`MAX_MONEY_AMOUNT`]
/// are refused so that every aggregate fits a `Decimal`.
///
/// Unknown supplier ids inside allocations, costs and terms are not errors:
/// read-only aggregation ignores them.
pub fn validate_award_data(data: &AwardData) -> Result<()> {
    ensure_unique("supplier", data.suppliers.iter().map(|s| s.id.as_str()))?;
    ensure_unique("item", data.items.iter().map(|i| i.id.as_str()))?;
    ensure_unique(
        "additional cost",
        data.additional_costs.iter().map(|c| c.id.as_str()),
    )?;
    ensure_unique(
        "commercial term",
        data.commercial_terms.iter().map(|t| t.id.as_str()),
    )?;

    let mut rank_owner: HashMap<u32, &str> = HashMap::new();
    for supplier in &data.suppliers {
        if supplier.rank == 0 {
            return Err(ValidationError::InvalidInput(format!(
                "supplier '{}' has rank 0, ranks start at 1",
                supplier.id
            ))
            .into());
        }
        if let Some(first) = rank_owner.insert(supplier.rank, supplier.id.as_str()) {
            return Err(ValidationError::DuplicateRank {
                rank: supplier.rank,
                first: first.to_string(),
                second: supplier.id.clone(),
            }
            .into());
        }
        for (label, score) in [
            ("technical", supplier.technical_score),
            ("evaluation", supplier.evaluation_score),
            ("commercial", supplier.commercial_score),
        ] {
            if score < Decimal::ZERO || score > dec!(100) {
                return Err(ValidationError::ScoreOutOfRange(format!(
                    "{} score of supplier '{}'",
                    label, supplier.id
                ))
                .into());
            }
        }
    }

    for item in &data.items {
        ensure_quantity("available quantity", &item.id, item.available_qty)?;
        let mut seen = HashSet::new();
        for allocation in &item.allocations {
            if !seen.insert(allocation.supplier_id.as_str()) {
                return Err(ValidationError::DuplicateId {
                    kind: "allocation supplier",
                    id: format!("{}/{}", item.id, allocation.supplier_id),
                }
                .into());
            }
            if allocation.unit_price < Decimal::ZERO {
                return Err(ValidationError::NegativeAmount(format!(
                    "unit price of supplier '{}' on item '{}'",
                    allocation.supplier_id, item.id
                ))
                .into());
            }
            ensure_amount(
                &format!(
                    "unit price of supplier '{}' on item '{}'",
                    allocation.supplier_id, item.id
                ),
                allocation.unit_price,
            )?;
            ensure_quantity(
                "award quantity",
                &format!("{}/{}", item.id, allocation.supplier_id),
                allocation.award_qty,
            )?;
        }
    }

    for cost in &data.additional_costs {
        if let Some((supplier_id, _)) = cost.costs.iter().find(|(_, v)| **v < Decimal::ZERO) {
            return Err(ValidationError::NegativeAmount(format!(
                "additional cost '{}' of supplier '{}'",
                cost.id, supplier_id
            ))
            .into());
        }
        for (supplier_id, amount) in &cost.costs {
            ensure_amount(
                &format!("additional cost '{}' of supplier '{}'", cost.id, supplier_id),
                *amount,
            )?;
        }
    }

    if data.baseline < Decimal::ZERO {
        return Err(ValidationError::NegativeAmount("baseline".to_string()).into());
    }
    ensure_amount("baseline", data.baseline)?;

    Ok(())
}

fn ensure_quantity(label: &str, id: &str, qty: u64) -> Result<()> {
    if qty > MAX_QUANTITY {
        return Err(ValidationError::InvalidInput(format!(
            "{} of '{}' is {}, the limit is {}",
            label, id, qty, MAX_QUANTITY
        ))
        .into());
    }
    Ok(())
}

fn ensure_amount(label: &str, amount: Decimal) -> Result<()> {
    if amount > MAX_MONEY_AMOUNT {
        return Err(ValidationError::InvalidInput(format!(
            "{} is {}, the limit is {}",
            label, amount, MAX_MONEY_AMOUNT
        ))
        .into());
    }
    Ok(())
}

fn ensure_unique<'a>(kind: &'static str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ValidationError::DuplicateId {
                kind,
                id: id.to_string(),
            }
            .into());
        }
    }
    Ok(())
}
