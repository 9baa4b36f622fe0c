//! Checked 256-bit integer helpers.
//!
//! Raw token amounts routinely exceed 64 bits, so every formula in the crate
//! runs on [`U256`]. Products that feed a division are widened to [`U512`]
//! first so `a * b / d` never overflows before the truncating divide.

use crate::enums::Rounding;
use crate::error::ArithmeticError;
pub use primitive_types::{U256, U512};

pub const ZERO: U256 = U256([0, 0, 0, 0]);
pub const ONE: U256 = U256([1, 0, 0, 0]);
pub const TWO: U256 = U256([2, 0, 0, 0]);
pub const THREE: U256 = U256([3, 0, 0, 0]);
pub const FIVE: U256 = U256([5, 0, 0, 0]);
pub const TEN: U256 = U256([10, 0, 0, 0]);

pub fn checked_add(a: U256, b: U256) -> Result<U256, ArithmeticError> {
    a.checked_add(b).ok_or(ArithmeticError::Overflow)
}

pub fn checked_sub(a: U256, b: U256) -> Result<U256, ArithmeticError> {
    a.checked_sub(b).ok_or(ArithmeticError::Underflow)
}

pub fn checked_mul(a: U256, b: U256) -> Result<U256, ArithmeticError> {
    a.checked_mul(b).ok_or(ArithmeticError::Overflow)
}

/// Divides with an explicit rounding direction.
pub fn div_rounding(
    numerator: U256,
    denominator: U256,
    rounding: Rounding,
) -> Result<U256, ArithmeticError> {
    if denominator.is_zero() {
        return Err(ArithmeticError::DivisionByZero);
    }
    let (quotient, remainder) = numerator.div_mod(denominator);
    match rounding {
        Rounding::Down => Ok(quotient),
        Rounding::Up if remainder.is_zero() => Ok(quotient),
        Rounding::Up => checked_add(quotient, ONE),
    }
}

/// Computes `a * b / denominator` with a 512-bit intermediate product.
///
/// `Rounding::Up` uses the `(n + d - 1) / d` ceiling idiom.
pub fn mul_div(
    a: U256,
    b: U256,
    denominator: U256,
    rounding: Rounding,
) -> Result<U256, ArithmeticError> {
    if denominator.is_zero() {
        return Err(ArithmeticError::DivisionByZero);
    }
    let product = a.full_mul(b);
    let denominator = U512::from(denominator);
    let numerator = match rounding {
        Rounding::Down => product,
        Rounding::Up => product + denominator - U512::one(),
    };
    narrow(numerator / denominator)
}

/// Narrows a 512-bit value back to 256 bits.
pub fn narrow(value: U512) -> Result<U256, ArithmeticError> {
    U256::try_from(value).map_err(|_| ArithmeticError::Overflow)
}

/// `10^exponent`, failing once the power no longer fits in 256 bits.
pub fn pow10(exponent: u8) -> Result<U256, ArithmeticError> {
    let mut value = ONE;
    for _ in 0..exponent {
        value = checked_mul(value, TEN)?;
    }
    Ok(value)
}

/// Floor square root, mirroring the Babylonian loop used by the pair contract.
///
/// Runs in 512 bits so a full product of two reserves can be rooted directly.
/// The root of any 512-bit value fits in 256 bits.
pub fn sqrt(y: impl Into<U512>) -> U256 {
    let y = y.into();
    let two = U512::from(2u8);
    let root = if y > U512::from(3u8) {
        let mut z = y;
        let mut x = y / two + U512::one();
        while x < z {
            z = x;
            x = (y / x + x) / two;
        }
        z
    } else if !y.is_zero() {
        U512::one()
    } else {
        U512::zero()
    };
    let U512(limbs) = root;
    U256([limbs[0], limbs[1], limbs[2], limbs[3]])
}

/// Greatest common divisor by Euclid's algorithm. `gcd(0, 0)` is zero.
pub fn gcd(mut a: U512, mut b: U512) -> U512 {
    while !b.is_zero() {
        let remainder = a % b;
        a = b;
        b = remainder;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqrt_matches_floor_root() {
        assert_eq!(sqrt(ZERO), ZERO);
        assert_eq!(sqrt(ONE), ONE);
        assert_eq!(sqrt(THREE), ONE);
        assert_eq!(sqrt(U256::from(4u64)), TWO);
        assert_eq!(sqrt(U256::from(99u64)), U256::from(9u64));
        assert_eq!(sqrt(U256::from(100_000_000u64)), U256::from(10_000u64));
        assert_eq!(sqrt(U256::MAX), U256::from(u128::MAX));
    }

    #[test]
    fn test_sqrt_of_wide_product() {
        let x = U256::one() << 200;
        assert_eq!(sqrt(x.full_mul(x)), x);
        assert_eq!(sqrt(U512::MAX), U256::MAX);
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(U512::from(120u64), U512::from(52u64)), U512::from(4u64));
        assert_eq!(gcd(U512::from(7u64), U512::zero()), U512::from(7u64));
        assert!(gcd(U512::zero(), U512::zero()).is_zero());
    }

    #[test]
    fn test_mul_div_rounding() {
        let a = U256::from(10u64);
        let b = U256::from(10u64);
        let d = U256::from(3u64);
        assert_eq!(mul_div(a, b, d, Rounding::Down).unwrap(), U256::from(33u64));
        assert_eq!(mul_div(a, b, d, Rounding::Up).unwrap(), U256::from(34u64));
        assert_eq!(
            mul_div(a, b, U256::from(10u64), Rounding::Up).unwrap(),
            U256::from(10u64)
        );
    }

    #[test]
    fn test_mul_div_wide_intermediate() {
        // MAX * 2 overflows 256 bits but the quotient does not.
        let result = mul_div(U256::MAX, TWO, U256::from(4u64), Rounding::Down).unwrap();
        assert_eq!(result, U256::MAX / TWO);
    }

    #[test]
    fn test_mul_div_errors() {
        assert_eq!(
            mul_div(ONE, ONE, ZERO, Rounding::Down),
            Err(ArithmeticError::DivisionByZero)
        );
        assert_eq!(
            mul_div(U256::MAX, U256::MAX, ONE, Rounding::Down),
            Err(ArithmeticError::Overflow)
        );
    }

    #[test]
    fn test_checked_ops() {
        assert_eq!(checked_sub(ONE, TWO), Err(ArithmeticError::Underflow));
        assert_eq!(checked_add(U256::MAX, ONE), Err(ArithmeticError::Overflow));
        assert_eq!(checked_mul(THREE, FIVE).unwrap(), U256::from(15u64));
    }

    #[test]
    fn test_div_rounding() {
        assert_eq!(
            div_rounding(U256::from(7u64), TWO, Rounding::Down).unwrap(),
            THREE
        );
        assert_eq!(
            div_rounding(U256::from(7u64), TWO, Rounding::Up).unwrap(),
            U256::from(4u64)
        );
        assert_eq!(
            div_rounding(ONE, ZERO, Rounding::Up),
            Err(ArithmeticError::DivisionByZero)
        );
    }

    #[test]
    fn test_pow10() {
        assert_eq!(pow10(0).unwrap(), ONE);
        assert_eq!(pow10(18).unwrap(), U256::from(1_000_000_000_000_000_000u64));
        assert!(pow10(77).is_ok());
        assert_eq!(pow10(78), Err(ArithmeticError::Overflow));
    }
}
