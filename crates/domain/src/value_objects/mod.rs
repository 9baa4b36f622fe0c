pub mod address;
pub mod amount;
pub mod chain_id;
pub mod fraction;
pub mod percentage;
pub mod price;

pub use address::Address;
pub use amount::{CurrencyAmount, TokenAmount};
pub use chain_id::ChainId;
pub use fraction::Fraction;
pub use percentage::{Percent, compute_price_impact};
pub use price::Price;
