use crate::enums::Rounding;
use crate::error::ArithmeticError;
use crate::math::big_int::{ONE, U256, U512, checked_add, checked_sub, mul_div, sqrt};

/// Fixed-point denominator of the pair fee. `fee / PRECISION` is the fee rate.
pub const PRECISION: U256 = U256([1_000_000_000_000_000_000, 0, 0, 0]);

/// Applies the fee to an input amount.
///
/// formula: floor(amount_in * (PRECISION - fee) / PRECISION)
pub fn amount_in_after_fee(amount_in: U256, fee: U256) -> Result<U256, ArithmeticError> {
    let fee_complement = checked_sub(PRECISION, fee)?;
    mul_div(amount_in, fee_complement, PRECISION, Rounding::Down)
}

/// Calculates the output amount for a given input against the (virtual) reserves.
///
/// formula: dy = y * dx' / (x + dx') with dx' the fee-adjusted input, floored.
pub fn calculate_out_amount(
    amount_in: U256,
    reserve_in: U256,
    reserve_out: U256,
    fee: U256,
) -> Result<U256, ArithmeticError> {
    let amount_in_with_fee = amount_in_after_fee(amount_in, fee)?;
    let denominator = checked_add(reserve_in, amount_in_with_fee)?;
    mul_div(amount_in_with_fee, reserve_out, denominator, Rounding::Down)
}

/// Calculates the input amount required to take `amount_out` out of the (virtual) reserves.
///
/// The pre-fee input is `floor(x * dy / (y - dy)) + 1` and the fee is then grossed up
/// with a ceiling division, so the pool is never under-paid.
pub fn calculate_in_amount(
    amount_out: U256,
    reserve_in: U256,
    reserve_out: U256,
    fee: U256,
) -> Result<U256, ArithmeticError> {
    let denominator = checked_sub(reserve_out, amount_out)?;
    let amount_in_with_fee = checked_add(
        mul_div(reserve_in, amount_out, denominator, Rounding::Down)?,
        ONE,
    )?;
    let fee_complement = checked_sub(PRECISION, fee)?;
    mul_div(amount_in_with_fee, PRECISION, fee_complement, Rounding::Up)
}

/// Calculates the constant product K without overflow.
pub fn calculate_k(reserve0: U256, reserve1: U256) -> U512 {
    reserve0.full_mul(reserve1)
}

/// Square root of K, floored, as the pair contract tracks it.
pub fn calculate_root_k(reserve0: U256, reserve1: U256) -> U256 {
    sqrt(calculate_k(reserve0, reserve1))
}
