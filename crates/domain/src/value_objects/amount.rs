use crate::entities::currency::{BaseCurrency, Currency};
use crate::entities::token::Token;
use crate::error::SdkError;
use crate::math::big_int::{U256, checked_add, checked_sub, pow10};
use crate::value_objects::fraction::{Fraction, u256_to_decimal};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Largest scale a [`Decimal`] can carry.
const MAX_DECIMAL_SCALE: u8 = 28;

/// A raw integer amount tagged with its currency.
///
/// `raw` is in the currency's smallest unit; decimals are only applied when
/// converting with [`CurrencyAmount::as_fraction`] or [`CurrencyAmount::to_decimal`].
/// Every operation returns a new value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencyAmount<C> {
    currency: C,
    raw: U256,
}

/// Amount of an ERC20 token.
pub type TokenAmount = CurrencyAmount<Token>;

impl<C: BaseCurrency> CurrencyAmount<C> {
    pub fn new(currency: C, raw: impl Into<U256>) -> Self {
        Self {
            currency,
            raw: raw.into(),
        }
    }

    pub fn zero(currency: C) -> Self {
        Self::new(currency, U256::zero())
    }

    pub fn currency(&self) -> &C {
        &self.currency
    }

    pub fn raw(&self) -> U256 {
        self.raw
    }

    pub fn is_zero(&self) -> bool {
        self.raw.is_zero()
    }

    fn ensure_same_currency(&self, other: &Self) -> Result<(), SdkError> {
        if self.currency.equals(&other.currency) {
            Ok(())
        } else {
            Err(SdkError::CurrencyMismatch)
        }
    }

    pub fn add(&self, other: &Self) -> Result<Self, SdkError> {
        self.ensure_same_currency(other)?;
        Ok(Self::new(
            self.currency.clone(),
            checked_add(self.raw, other.raw)?,
        ))
    }

    /// Fails with an underflow rather than going negative.
    pub fn subtract(&self, other: &Self) -> Result<Self, SdkError> {
        self.ensure_same_currency(other)?;
        Ok(Self::new(
            self.currency.clone(),
            checked_sub(self.raw, other.raw)?,
        ))
    }

    /// Orders two amounts of the same currency.
    pub fn checked_cmp(&self, other: &Self) -> Result<Ordering, SdkError> {
        self.ensure_same_currency(other)?;
        Ok(self.raw.cmp(&other.raw))
    }

    /// The amount in whole units: `raw / 10^decimals`.
    pub fn as_fraction(&self) -> Result<Fraction, SdkError> {
        let decimals = self.currency.decimals();
        let scale = pow10(decimals).map_err(|_| SdkError::InvalidDecimals(decimals))?;
        Fraction::new(self.raw, scale)
    }

    /// The amount in whole units as a [`Decimal`].
    pub fn to_decimal(&self) -> Result<Decimal, SdkError> {
        let decimals = self.currency.decimals();
        if decimals > MAX_DECIMAL_SCALE {
            return self.as_fraction()?.to_decimal();
        }
        let mut value = u256_to_decimal(self.raw)?;
        value
            .set_scale(u32::from(decimals))
            .map_err(|_| SdkError::InvalidDecimals(decimals))?;
        Ok(value)
    }
}

impl CurrencyAmount<Currency> {
    /// Amount of the native currency, in wei.
    pub fn ether(raw: impl Into<U256>) -> Self {
        Self::new(Currency::Ether, raw)
    }
}

impl From<TokenAmount> for CurrencyAmount<Currency> {
    fn from(amount: TokenAmount) -> Self {
        Self::new(Currency::Token(amount.currency), amount.raw)
    }
}
