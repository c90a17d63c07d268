//! Conversion of raw award-quantity input into validated quantities.

use log::debug;

use crate::constants::MAX_QUANTITY;
use crate::errors::Result;
use crate::settings::QuantityPolicy;

use super::AllocationError;

/// Parses the text of an award cell into a quantity.
///
/// Empty input is 0 under both policies. Under [`QuantityPolicy::Coerce`] the
/// leading integer is taken (`"12 pcs"` is 12) and anything unparseable,
/// negative or above [`MAX_QUANTITY`] becomes 0. Under
/// [`QuantityPolicy::Reject`] the trimmed input must be an integer in
/// `0..=MAX_QUANTITY`.
pub fn parse_award_quantity(raw: &str, policy: QuantityPolicy) -> Result<u64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }

    match policy {
        QuantityPolicy::Reject => trimmed
            .parse::<u64>()
            .ok()
            .filter(|qty| *qty <= MAX_QUANTITY)
            .ok_or_else(|| AllocationError::InvalidQuantity(raw.to_string()).into()),
        QuantityPolicy::Coerce => {
            let qty = leading_integer(trimmed)
                .and_then(|v| u64::try_from(v).ok())
                .filter(|qty| *qty <= MAX_QUANTITY)
                .unwrap_or(0);
            if qty.to_string() != trimmed {
                debug!("Coerced award quantity '{}' to {}", raw, qty);
            }
            Ok(qty)
        }
    }
}

/// Applies the quantity policy to numeric input.
pub fn normalize_quantity(value: i64, policy: QuantityPolicy) -> Result<u64> {
    if let Some(qty) = u64::try_from(value).ok().filter(|q| *q <= MAX_QUANTITY) {
        return Ok(qty);
    }
    match policy {
        QuantityPolicy::Coerce => {
            debug!("Coerced award quantity {} to 0", value);
            Ok(0)
        }
        QuantityPolicy::Reject => Err(AllocationError::InvalidQuantity(value.to_string()).into()),
    }
}

/// Fails with `InvalidQuantity` when `qty` exceeds [`MAX_QUANTITY`].
pub fn ensure_quantity_in_range(qty: u64) -> Result<u64> {
    if qty > MAX_QUANTITY {
        return Err(AllocationError::InvalidQuantity(qty.to_string()).into());
    }
    Ok(qty)
}

/// Optional sign followed by at least one digit; trailing text is ignored.
fn leading_integer(s: &str) -> Option<i64> {
    let (negative, digits) = match s.as_bytes().first()? {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude: i64 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
