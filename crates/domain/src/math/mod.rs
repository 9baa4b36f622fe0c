/// Checked 256-bit helpers and the contract square root.
pub mod big_int;
/// Swap formulas over fee-adjusted virtual reserves.
pub mod constant_product;
/// Liquidity minting, burning and protocol fee formulas.
pub mod liquidity;

pub use big_int::{U256, U512};
pub use constant_product::PRECISION;
pub use liquidity::MINIMUM_LIQUIDITY;
