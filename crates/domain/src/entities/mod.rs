pub mod currency;
pub mod pair;
pub mod token;

#[cfg(test)]
mod proptest_properties;

pub use currency::{BaseCurrency, Currency};
pub use pair::{Pair, SwapOutcome};
pub use token::Token;
