//! On-chain data the fetcher depends on.
//!
//! The transport (JSON-RPC client, multicall, retries) lives behind this
//! trait and is supplied by the caller.

use anyhow::Result;
use async_trait::async_trait;
use dmm_sdk_domain::math::U256;
use dmm_sdk_domain::value_objects::{Address, ChainId};
use serde::{Deserialize, Serialize};

/// Live state of one pool, in the contract's token0/token1 order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolReserves {
    pub reserve0: U256,
    pub reserve1: U256,
    pub virtual_reserve0: U256,
    pub virtual_reserve1: U256,
    /// Fee numerator over the fee precision.
    pub fee: U256,
}

/// Read-only access to token and pool contracts.
///
/// Errors are returned as-is to the fetcher's caller.
#[async_trait]
pub trait ChainDataProvider: Send + Sync {
    /// ERC20 `decimals()` of `address`.
    async fn decimals(&self, chain_id: ChainId, address: Address) -> Result<u8>;

    /// Reserves, virtual reserves and fee of the pool at `pair_address`.
    async fn reserves(&self, pair_address: Address) -> Result<PoolReserves>;

    /// Every pool the factory holds for the (sorted) token pair.
    async fn pool_addresses(
        &self,
        factory: Address,
        token0: Address,
        token1: Address,
    ) -> Result<Vec<Address>>;
}
