use crate::entities::currency::BaseCurrency;
use crate::enums::Rounding;
use crate::error::SdkError;
use crate::math::big_int::{U256, mul_div, pow10};
use crate::value_objects::amount::CurrencyAmount;
use crate::value_objects::fraction::Fraction;
use rust_decimal::Decimal;
use serde::Serialize;

/// Exchange rate between two currencies, in raw units.
///
/// The ratio is `quote / base`: one raw unit of `base_currency` is worth
/// `numerator / denominator` raw units of `quote_currency`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Price<C> {
    base_currency: C,
    quote_currency: C,
    fraction: Fraction,
}

impl<C: BaseCurrency> Price<C> {
    /// `denominator` is the base amount, `numerator` the quote amount.
    pub fn new(
        base_currency: C,
        quote_currency: C,
        denominator: U256,
        numerator: U256,
    ) -> Result<Self, SdkError> {
        Ok(Self {
            base_currency,
            quote_currency,
            fraction: Fraction::new(numerator, denominator)?,
        })
    }

    pub fn base_currency(&self) -> &C {
        &self.base_currency
    }

    pub fn quote_currency(&self) -> &C {
        &self.quote_currency
    }

    /// Ratio of raw amounts, ignoring decimals.
    pub fn raw(&self) -> Fraction {
        self.fraction
    }

    /// Ratio of whole units: `raw * 10^base_decimals / 10^quote_decimals`.
    pub fn adjusted(&self) -> Result<Fraction, SdkError> {
        let base_decimals = self.base_currency.decimals();
        let quote_decimals = self.quote_currency.decimals();
        let scalar = Fraction::new(
            pow10(base_decimals).map_err(|_| SdkError::InvalidDecimals(base_decimals))?,
            pow10(quote_decimals).map_err(|_| SdkError::InvalidDecimals(quote_decimals))?,
        )?;
        self.fraction.multiply(&scalar)
    }

    pub fn invert(&self) -> Result<Self, SdkError> {
        Ok(Self {
            base_currency: self.quote_currency.clone(),
            quote_currency: self.base_currency.clone(),
            fraction: self.fraction.invert()?,
        })
    }

    /// Chains `self` (A→B) with `other` (B→C) into A→C.
    pub fn multiply(&self, other: &Self) -> Result<Self, SdkError> {
        if !self.quote_currency.equals(&other.base_currency) {
            return Err(SdkError::CurrencyMismatch);
        }
        Ok(Self {
            base_currency: self.base_currency.clone(),
            quote_currency: other.quote_currency.clone(),
            fraction: self.fraction.multiply(&other.fraction)?,
        })
    }

    /// Converts a base amount into the quote currency, rounding down.
    pub fn quote(&self, amount: &CurrencyAmount<C>) -> Result<CurrencyAmount<C>, SdkError> {
        if !amount.currency().equals(&self.base_currency) {
            return Err(SdkError::CurrencyMismatch);
        }
        let quoted = mul_div(
            amount.raw(),
            self.fraction.numerator(),
            self.fraction.denominator(),
            Rounding::Down,
        )?;
        Ok(CurrencyAmount::new(self.quote_currency.clone(), quoted))
    }

    /// Decimal-adjusted price.
    pub fn to_decimal(&self) -> Result<Decimal, SdkError> {
        self.adjusted()?.to_decimal()
    }
}
