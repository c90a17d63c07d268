use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Supplier columns shown per allocation grid page
pub const DEFAULT_VENDORS_PER_PAGE: usize = 3;

/// Coverage at or above this percentage is considered healthy
pub const DEFAULT_COVERAGE_TARGET_PERCENT: u32 = 80;

/// Decimal places kept for savings percentages
pub const SAVINGS_PERCENT_PRECISION: u32 = 1;

/// Rank that marks the lowest landed cost supplier
pub const L1_RANK: u32 = 1;

/// Largest quantity accepted for `availableQty` and `awardQty`
pub const MAX_QUANTITY: u64 = 1_000_000_000;

/// Largest unit price, additional cost or baseline accepted
pub const MAX_MONEY_AMOUNT: Decimal = dec!(1_000_000_000_000);
