//! Boundary between the pair math and live chain data.
//!
//! This crate provides:
//! - The [`provider::ChainDataProvider`] trait the caller implements over its RPC stack
//! - Decimals and pool address caching
//! - Configuration from the environment
//! - The [`fetcher::Fetcher`] that turns chain data into tokens and pairs

/// Prelude module for convenient imports.
pub mod prelude;

/// Metadata caches.
pub mod cache;
/// Fetcher configuration.
pub mod config;
/// Token and pair fetching.
pub mod fetcher;
/// On-chain data provider trait.
pub mod provider;

use anyhow::Result;
use async_trait::async_trait;
use cache::MetadataCache;
use dmm_sdk_domain::entities::{Pair, Token};
use dmm_sdk_domain::value_objects::Address;
use fetcher::Fetcher;
use provider::ChainDataProvider;

/// Anything that can produce the pools for a token pair.
#[async_trait]
pub trait PoolFetcher {
    async fn fetch_pools(&self, token_a: &Token, token_b: &Token, factory: Address)
    -> Result<Vec<Pair>>;
}

#[async_trait]
impl<P: ChainDataProvider, C: MetadataCache> PoolFetcher for Fetcher<P, C> {
    async fn fetch_pools(
        &self,
        token_a: &Token,
        token_b: &Token,
        factory: Address,
    ) -> Result<Vec<Pair>> {
        self.fetch_pair_data(token_a, token_b, factory).await
    }
}
