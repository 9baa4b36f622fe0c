//! Error taxonomy for the pair and amount math.
//!
//! Every failure is a rejection of an invalid operation. Nothing here is
//! retried or defaulted by the library; callers decide how to reformulate.

use crate::value_objects::address::Address;
use crate::value_objects::chain_id::ChainId;
use primitive_types::U256;

/// Integer arithmetic failures that indicate caller misuse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ArithmeticError {
    /// A result does not fit in 256 bits.
    #[error("arithmetic overflow")]
    Overflow,
    /// A subtraction would go below zero.
    #[error("arithmetic underflow")]
    Underflow,
    /// A divisor was zero.
    #[error("division by zero")]
    DivisionByZero,
}

/// Errors returned by token, amount, price and pair operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SdkError {
    /// Tokens or pairs live on different chains.
    #[error("chain id mismatch: {left} != {right}")]
    ChainMismatch {
        /// Chain of the receiver.
        left: ChainId,
        /// Chain of the argument.
        right: ChainId,
    },
    /// Two tokens that must be distinct share an address.
    #[error("tokens share the same address {0}")]
    IdenticalAddresses(Address),
    /// Arithmetic between amounts or prices of different currencies.
    #[error("currency mismatch")]
    CurrencyMismatch,
    /// A token or amount does not belong where it was passed.
    #[error("token mismatch: {0}")]
    TokenMismatch(&'static str),
    /// The token is neither token0 nor token1 of the pair.
    #[error("token not in pair")]
    TokenNotInPair,
    /// Reserves are empty or cannot cover the requested trade.
    #[error("insufficient reserves")]
    InsufficientReserves,
    /// The input is too small to produce any output or liquidity.
    #[error("insufficient input amount")]
    InsufficientInputAmount,
    /// Burned liquidity exceeds the total supply.
    #[error("liquidity exceeds total supply")]
    InsufficientLiquidity,
    /// Fee-on liquidity valuation was requested without `kLast`.
    #[error("kLast is required when the protocol fee is on")]
    MissingKLast,
    /// The fee numerator is not below the fee precision.
    #[error("invalid fee {fee}: must be below the fee precision")]
    InvalidFee {
        /// Rejected fee numerator.
        fee: U256,
    },
    /// An address string could not be parsed.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
    /// A decimals value cannot be scaled into 256 bits.
    #[error("invalid decimals: {0}")]
    InvalidDecimals(u8),
    /// Checked integer arithmetic failed.
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}

/// Result alias used across the domain crate.
pub type Result<T> = std::result::Result<T, SdkError>;
