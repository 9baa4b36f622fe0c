use crate::enums::Rounding;
use crate::error::{ArithmeticError, SdkError};
use crate::math::big_int::{ONE, U256, U512, checked_sub, div_rounding, gcd, narrow};
use rust_decimal::Decimal;
use serde::Serialize;
use std::cmp::Ordering;
use std::str::FromStr;

/// A non-negative ratio of two 256-bit integers.
///
/// Constructors keep the fields as given. Arithmetic cross-multiplies in 512
/// bits and returns the result in lowest terms. Comparisons also
/// cross-multiply, so `1/2` and `2/4` compare equal even though the fields
/// differ.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Fraction {
    numerator: U256,
    denominator: U256,
}

impl Fraction {
    pub fn new(numerator: U256, denominator: U256) -> Result<Self, SdkError> {
        if denominator.is_zero() {
            return Err(ArithmeticError::DivisionByZero.into());
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Builds a fraction whose denominator is known to be non-zero.
    pub(crate) fn with_nonzero_denominator(numerator: U256, denominator: U256) -> Self {
        debug_assert!(!denominator.is_zero());
        Self {
            numerator,
            denominator,
        }
    }

    pub fn from_integer(value: U256) -> Self {
        Self {
            numerator: value,
            denominator: ONE,
        }
    }

    pub fn numerator(&self) -> U256 {
        self.numerator
    }

    pub fn denominator(&self) -> U256 {
        self.denominator
    }

    /// Floor of the ratio.
    pub fn quotient(&self) -> U256 {
        self.numerator / self.denominator
    }

    /// Remainder after floor division, over the same denominator.
    pub fn remainder(&self) -> Self {
        Self {
            numerator: self.numerator % self.denominator,
            denominator: self.denominator,
        }
    }

    /// Integer value rounded in the given direction.
    pub fn round(&self, rounding: Rounding) -> Result<U256, SdkError> {
        Ok(div_rounding(self.numerator, self.denominator, rounding)?)
    }

    pub fn invert(&self) -> Result<Self, SdkError> {
        Self::new(self.denominator, self.numerator)
    }

    pub fn add(&self, other: &Self) -> Result<Self, SdkError> {
        if self.denominator == other.denominator {
            return Self::reduced(
                U512::from(self.numerator) + U512::from(other.numerator),
                U512::from(self.denominator),
            );
        }
        let numerator = self
            .numerator
            .full_mul(other.denominator)
            .checked_add(other.numerator.full_mul(self.denominator))
            .ok_or(ArithmeticError::Overflow)?;
        Self::reduced(numerator, self.denominator.full_mul(other.denominator))
    }

    /// Fails with [`ArithmeticError::Underflow`] when `other` is larger.
    pub fn subtract(&self, other: &Self) -> Result<Self, SdkError> {
        if self.denominator == other.denominator {
            return Self::reduced(
                U512::from(checked_sub(self.numerator, other.numerator)?),
                U512::from(self.denominator),
            );
        }
        let numerator = self
            .numerator
            .full_mul(other.denominator)
            .checked_sub(other.numerator.full_mul(self.denominator))
            .ok_or(ArithmeticError::Underflow)?;
        Self::reduced(numerator, self.denominator.full_mul(other.denominator))
    }

    pub fn multiply(&self, other: &Self) -> Result<Self, SdkError> {
        Self::reduced(
            self.numerator.full_mul(other.numerator),
            self.denominator.full_mul(other.denominator),
        )
    }

    pub fn divide(&self, other: &Self) -> Result<Self, SdkError> {
        Self::reduced(
            self.numerator.full_mul(other.denominator),
            self.denominator.full_mul(other.numerator),
        )
    }

    /// Lowest terms of a 512-bit ratio, failing only when a reduced side
    /// still needs more than 256 bits.
    fn reduced(numerator: U512, denominator: U512) -> Result<Self, SdkError> {
        if denominator.is_zero() {
            return Err(ArithmeticError::DivisionByZero.into());
        }
        let divisor = gcd(numerator, denominator);
        Ok(Self {
            numerator: narrow(numerator / divisor)?,
            denominator: narrow(denominator / divisor)?,
        })
    }

    pub fn less_than(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Less
    }

    pub fn greater_than(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Greater
    }

    pub fn equal_to(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }

    /// Converts to a [`Decimal`], rounding towards zero past 28 fractional digits.
    pub fn to_decimal(&self) -> Result<Decimal, SdkError> {
        let numerator = u256_to_decimal(self.numerator)?;
        let denominator = u256_to_decimal(self.denominator)?;
        numerator
            .checked_div(denominator)
            .ok_or(SdkError::Arithmetic(ArithmeticError::Overflow))
    }
}

/// Exact conversion, failing above the 96-bit decimal mantissa.
pub(crate) fn u256_to_decimal(value: U256) -> Result<Decimal, SdkError> {
    Decimal::from_str(&value.to_string()).map_err(|_| ArithmeticError::Overflow.into())
}

impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        self.equal_to(other)
    }
}

impl Eq for Fraction {}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        let left = self.numerator.full_mul(other.denominator);
        let right = other.numerator.full_mul(self.denominator);
        left.cmp(&right)
    }
}

impl From<U256> for Fraction {
    fn from(value: U256) -> Self {
        Self::from_integer(value)
    }
}
