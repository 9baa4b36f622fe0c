//! Liquidity share formulas for the pair contract.
//!
//! All divisions truncate, matching the contract bit for bit.

use crate::enums::Rounding;
use crate::error::ArithmeticError;
use crate::math::big_int::{FIVE, U256, checked_add, checked_mul, checked_sub, mul_div, sqrt};

/// Liquidity permanently locked by the first deposit.
pub const MINIMUM_LIQUIDITY: U256 = U256([1000, 0, 0, 0]);

/// Liquidity minted by the first deposit into an empty pool.
///
/// formula: floor(sqrt(amount0 * amount1)) - MINIMUM_LIQUIDITY
///
/// Returns zero when the root does not exceed the locked minimum; the caller
/// treats a non-positive result as an insufficient input.
pub fn initial_liquidity(amount0: U256, amount1: U256) -> U256 {
    sqrt(amount0.full_mul(amount1)).saturating_sub(MINIMUM_LIQUIDITY)
}

/// Liquidity minted for a deposit into a pool with outstanding supply.
///
/// formula: min(amount0 * supply / reserve0, amount1 * supply / reserve1)
pub fn proportional_liquidity(
    amount0: U256,
    amount1: U256,
    total_supply: U256,
    reserve0: U256,
    reserve1: U256,
) -> Result<U256, ArithmeticError> {
    let liquidity0 = mul_div(amount0, total_supply, reserve0, Rounding::Down)?;
    let liquidity1 = mul_div(amount1, total_supply, reserve1, Rounding::Down)?;
    Ok(liquidity0.min(liquidity1))
}

/// Liquidity the protocol fee would mint on the next mint or burn.
///
/// formula: supply * (rootK - rootKLast) / (rootK * 5 + rootKLast), zero when
/// K has not grown.
pub fn protocol_fee_liquidity(
    total_supply: U256,
    root_k: U256,
    root_k_last: U256,
) -> Result<U256, ArithmeticError> {
    if root_k <= root_k_last {
        return Ok(U256::zero());
    }
    let growth = checked_sub(root_k, root_k_last)?;
    let denominator = checked_add(checked_mul(root_k, FIVE)?, root_k_last)?;
    mul_div(total_supply, growth, denominator, Rounding::Down)
}

/// Share of `reserve` redeemable by `liquidity` out of `total_supply`.
pub fn liquidity_value(
    liquidity: U256,
    reserve: U256,
    total_supply: U256,
) -> Result<U256, ArithmeticError> {
    mul_div(liquidity, reserve, total_supply, Rounding::Down)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_liquidity() {
        let minted = initial_liquidity(U256::from(10_000u64), U256::from(10_000u64));
        assert_eq!(minted, U256::from(9_000u64));
    }

    #[test]
    fn test_initial_liquidity_below_minimum() {
        let minted = initial_liquidity(U256::from(1_000u64), U256::from(1_000u64));
        assert!(minted.is_zero());
    }

    #[test]
    fn test_initial_liquidity_wide_deposit() {
        let deposit = U256::one() << 130;
        let minted = initial_liquidity(deposit, deposit);
        assert_eq!(minted, deposit - MINIMUM_LIQUIDITY);
    }

    #[test]
    fn test_proportional_liquidity_takes_minimum() {
        let minted = proportional_liquidity(
            U256::from(50_000u64),
            U256::from(20_000u64),
            U256::from(1_000u64),
            U256::from(100_000u64),
            U256::from(100_000u64),
        )
        .unwrap();
        assert_eq!(minted, U256::from(200u64));
    }

    #[test]
    fn test_protocol_fee_liquidity() {
        // supply 500, rootK 1000, rootKLast 500: 500 * 500 / 5500 = 45
        let minted =
            protocol_fee_liquidity(U256::from(500u64), U256::from(1000u64), U256::from(500u64))
                .unwrap();
        assert_eq!(minted, U256::from(45u64));

        let none =
            protocol_fee_liquidity(U256::from(500u64), U256::from(500u64), U256::from(1000u64))
                .unwrap();
        assert!(none.is_zero());
    }

    #[test]
    fn test_liquidity_value_zero_supply() {
        assert_eq!(
            liquidity_value(U256::one(), U256::one(), U256::zero()),
            Err(ArithmeticError::DivisionByZero)
        );
    }
}
