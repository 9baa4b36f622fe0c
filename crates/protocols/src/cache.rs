//! Memoization of token decimals and pool addresses.
//!
//! Entries are never invalidated. Two concurrent misses on the same key may
//! both reach the provider; the lookups are idempotent so the last write wins.

use async_trait::async_trait;
use dmm_sdk_domain::entities::Token;
use dmm_sdk_domain::error::SdkError;
use dmm_sdk_domain::value_objects::{Address, ChainId};
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::config::KnownDecimals;

/// Key of a token's decimals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenKey {
    pub chain_id: ChainId,
    pub address: Address,
}

/// Key of the pools a factory holds for a token pair.
///
/// Token addresses are stored sorted, so both argument orders build the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PairKey {
    pub chain_id: ChainId,
    pub factory: Address,
    pub token0: Address,
    pub token1: Address,
}

impl PairKey {
    pub fn new(chain_id: ChainId, factory: Address, token_a: Address, token_b: Address) -> Self {
        let (token0, token1) = if token_a <= token_b {
            (token_a, token_b)
        } else {
            (token_b, token_a)
        };
        Self {
            chain_id,
            factory,
            token0,
            token1,
        }
    }

    /// Key for two tokens on the same chain.
    pub fn for_tokens(factory: Address, token_a: &Token, token_b: &Token) -> Result<Self, SdkError> {
        if token_a.chain_id != token_b.chain_id {
            return Err(SdkError::ChainMismatch {
                left: token_a.chain_id,
                right: token_b.chain_id,
            });
        }
        Ok(Self::new(
            token_a.chain_id,
            factory,
            token_a.address,
            token_b.address,
        ))
    }
}

/// Storage for fetched metadata.
#[async_trait]
pub trait MetadataCache: Send + Sync {
    async fn decimals(&self, key: TokenKey) -> Option<u8>;
    async fn store_decimals(&self, key: TokenKey, decimals: u8);
    async fn pool_addresses(&self, key: &PairKey) -> Option<Vec<Address>>;
    async fn store_pool_addresses(&self, key: PairKey, addresses: Vec<Address>);
}

/// Process-local cache backed by two maps.
#[derive(Debug, Default)]
pub struct InMemoryCache {
    decimals: RwLock<HashMap<TokenKey, u8>>,
    pools: RwLock<HashMap<PairKey, Vec<Address>>>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache pre-filled with decimals that cannot be read on-chain.
    pub fn seeded(known: &[KnownDecimals]) -> Self {
        let decimals = known
            .iter()
            .map(|entry| {
                (
                    TokenKey {
                        chain_id: entry.chain_id,
                        address: entry.address,
                    },
                    entry.decimals,
                )
            })
            .collect();
        Self {
            decimals: RwLock::new(decimals),
            pools: RwLock::default(),
        }
    }

    pub async fn decimals_len(&self) -> usize {
        self.decimals.read().await.len()
    }

    pub async fn pools_len(&self) -> usize {
        self.pools.read().await.len()
    }
}

#[async_trait]
impl MetadataCache for InMemoryCache {
    async fn decimals(&self, key: TokenKey) -> Option<u8> {
        self.decimals.read().await.get(&key).copied()
    }

    async fn store_decimals(&self, key: TokenKey, decimals: u8) {
        self.decimals.write().await.insert(key, decimals);
    }

    async fn pool_addresses(&self, key: &PairKey) -> Option<Vec<Address>> {
        self.pools.read().await.get(key).cloned()
    }

    async fn store_pool_addresses(&self, key: PairKey, addresses: Vec<Address>) {
        self.pools.write().await.insert(key, addresses);
    }
}
