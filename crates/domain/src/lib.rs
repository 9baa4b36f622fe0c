//! Pure math core of the dynamic market maker SDK.
//!
//! This crate holds everything needed to quote swaps and liquidity against a
//! pair snapshot:
//! - Tokens, addresses and chain ids
//! - Exact fractions, percents, currency amounts and prices
//! - Pairs with real and virtual reserves and a dynamic fee
//! - Swap and liquidity formulas with contract-exact truncation
//!
//! Nothing here performs I/O. Live pair state comes from the protocols crate.

/// Prelude module for convenient imports.
pub mod prelude;

/// Tokens, currencies and pairs.
pub mod entities;
/// Shared enumerations.
pub mod enums;
/// Error types.
pub mod error;
/// Integer formulas.
pub mod math;
/// Addresses, amounts, fractions and prices.
pub mod value_objects;

pub use error::{ArithmeticError, SdkError};
