use crate::entities::currency::BaseCurrency;
use crate::enums::Rounding;
use crate::error::SdkError;
use crate::math::big_int::{U256, mul_div};
use crate::value_objects::amount::CurrencyAmount;
use crate::value_objects::fraction::Fraction;
use crate::value_objects::price::Price;
use rust_decimal::Decimal;
use serde::Serialize;

const BPS_DENOMINATOR: u64 = 10_000;

/// A ratio expressed as a fraction of one (`1/2` is 50%).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Percent(pub Fraction);

impl Percent {
    pub fn new(numerator: U256, denominator: U256) -> Result<Self, SdkError> {
        Ok(Self(Fraction::new(numerator, denominator)?))
    }

    pub fn zero() -> Self {
        Self(Fraction::from_integer(U256::zero()))
    }

    pub fn from_bps(bps: u32) -> Self {
        Self(Fraction::with_nonzero_denominator(
            U256::from(bps),
            U256::from(BPS_DENOMINATOR),
        ))
    }

    /// Basis points, truncated.
    pub fn to_bps(&self) -> Result<U256, SdkError> {
        Ok(mul_div(
            self.0.numerator(),
            U256::from(BPS_DENOMINATOR),
            self.0.denominator(),
            Rounding::Down,
        )?)
    }

    /// Percent value as a decimal fraction (`0.003` for 0.3%).
    pub fn to_decimal(&self) -> Result<Decimal, SdkError> {
        self.0.to_decimal()
    }

    pub fn as_fraction(&self) -> &Fraction {
        &self.0
    }
}

/// Relative shortfall of a trade's output against the mid-price quote.
///
/// formula: (exact_quote - output) / exact_quote, where exact_quote is
/// `mid_price * input`. An output that meets or beats the quote has no impact.
pub fn compute_price_impact<C: BaseCurrency>(
    mid_price: &Price<C>,
    input_amount: &CurrencyAmount<C>,
    output_amount: &CurrencyAmount<C>,
) -> Result<Percent, SdkError> {
    if !input_amount.currency().equals(mid_price.base_currency())
        || !output_amount.currency().equals(mid_price.quote_currency())
    {
        return Err(SdkError::CurrencyMismatch);
    }
    let exact_quote = mid_price
        .raw()
        .multiply(&Fraction::from_integer(input_amount.raw()))?;
    let output = Fraction::from_integer(output_amount.raw());
    if output >= exact_quote {
        return Ok(Percent::zero());
    }
    let slippage = exact_quote.subtract(&output)?.divide(&exact_quote)?;
    Ok(Percent(slippage))
}
