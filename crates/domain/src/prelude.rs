//! Prelude module for convenient imports.
//!
//! # Example
//!
//! ```rust
//! use dmm_sdk_domain::prelude::*;
//! ```

// Entities
pub use crate::entities::{BaseCurrency, Currency, Pair, SwapOutcome, Token};

// Errors
pub use crate::error::{ArithmeticError, SdkError};

// Enums
pub use crate::enums::Rounding;

// Math
pub use crate::math::{MINIMUM_LIQUIDITY, PRECISION, U256, U512};

// Value objects
pub use crate::value_objects::{
    Address, ChainId, CurrencyAmount, Fraction, Percent, Price, TokenAmount,
    compute_price_impact,
};
