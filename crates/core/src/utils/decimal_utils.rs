use num_traits::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// `100 * part / whole` rounded half away from zero to `dp` places.
/// Returns zero when `whole` is zero and saturates when the ratio does not
/// fit a `Decimal`.
pub fn percent_of(part: Decimal, whole: Decimal, dp: u32) -> Decimal {
    if whole.is_zero() {
        return Decimal::ZERO;
    }
    match part
        .checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(dec!(100)))
    {
        Some(pct) => pct.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero),
        None if part.is_sign_negative() != whole.is_sign_negative() => Decimal::MIN,
        None => Decimal::MAX,
    }
}

/// Whole-number percentage of two counts, e.g. covered items over total items.
pub fn whole_percent(part: usize, whole: usize) -> u32 {
    percent_of(Decimal::from(part), Decimal::from(whole), 0)
        .to_u32()
        .unwrap_or(0)
}

/// Whole-number share of a monetary total.
pub fn whole_share(part: Decimal, whole: Decimal) -> u32 {
    percent_of(part, whole, 0).to_u32().unwrap_or(0)
}

/// Monetary value of `qty` units at `unit_price`, saturating at the
/// `Decimal` range.
pub fn line_amount(unit_price: Decimal, qty: u64) -> Decimal {
    unit_price.saturating_mul(Decimal::from(qty))
}
