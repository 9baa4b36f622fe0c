//! Builds tokens and pairs from live chain data.

use crate::cache::{InMemoryCache, MetadataCache, PairKey, TokenKey};
use crate::config::FetcherConfig;
use crate::provider::ChainDataProvider;
use anyhow::{Result, anyhow};
use dmm_sdk_domain::entities::{Pair, Token};
use dmm_sdk_domain::error::SdkError;
use dmm_sdk_domain::value_objects::{Address, ChainId, TokenAmount};
use futures::future::try_join_all;
use tracing::{debug, info};

/// Resolves token metadata and pool state through an injected provider.
///
/// Decimals and pool addresses are memoized in `C`; reserves are always read
/// fresh.
pub struct Fetcher<P, C = InMemoryCache> {
    provider: P,
    cache: C,
    config: FetcherConfig,
}

impl<P: ChainDataProvider> Fetcher<P> {
    /// Creates a fetcher with an in-memory cache seeded from `config`.
    pub fn new(provider: P, config: FetcherConfig) -> Self {
        let cache = InMemoryCache::seeded(&config.known_decimals);
        Self {
            provider,
            cache,
            config,
        }
    }
}

impl<P: ChainDataProvider, C: MetadataCache> Fetcher<P, C> {
    /// Creates a fetcher over a caller-supplied cache, seeding it from `config`.
    pub async fn with_cache(provider: P, cache: C, config: FetcherConfig) -> Self {
        for known in &config.known_decimals {
            let key = TokenKey {
                chain_id: known.chain_id,
                address: known.address,
            };
            cache.store_decimals(key, known.decimals).await;
        }
        Self {
            provider,
            cache,
            config,
        }
    }

    pub fn config(&self) -> &FetcherConfig {
        &self.config
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// Builds a token, reading its decimals from the cache or the chain.
    pub async fn fetch_token_data(
        &self,
        chain_id: ChainId,
        address: Address,
        symbol: Option<String>,
        name: Option<String>,
    ) -> Result<Token> {
        let key = TokenKey { chain_id, address };
        let decimals = match self.cache.decimals(key).await {
            Some(decimals) => {
                debug!(chain_id = %chain_id, address = %address, decimals, "decimals cache hit");
                decimals
            }
            None => {
                debug!(chain_id = %chain_id, address = %address, "decimals cache miss");
                let decimals = self.provider.decimals(chain_id, address).await?;
                self.cache.store_decimals(key, decimals).await;
                decimals
            }
        };
        Ok(Token::new(chain_id, address, decimals, symbol, name))
    }

    /// Builds every pair the factory holds for `token_a` and `token_b`.
    ///
    /// Reserves of all pools are read concurrently. An empty result means the
    /// factory has no pool for the pair yet.
    pub async fn fetch_pair_data(
        &self,
        token_a: &Token,
        token_b: &Token,
        factory: Address,
    ) -> Result<Vec<Pair>> {
        let key = PairKey::for_tokens(factory, token_a, token_b)?;
        let (token0, token1) = if token_a.sorts_before(token_b)? {
            (token_a, token_b)
        } else {
            (token_b, token_a)
        };

        let addresses = self.pool_addresses(key).await?;
        let states = try_join_all(
            addresses
                .iter()
                .map(|address| self.provider.reserves(*address)),
        )
        .await?;

        let pairs = addresses
            .iter()
            .zip(states)
            .map(|(address, state)| {
                Pair::new(
                    *address,
                    TokenAmount::new(token0.clone(), state.reserve0),
                    TokenAmount::new(token1.clone(), state.reserve1),
                    TokenAmount::new(token0.clone(), state.virtual_reserve0),
                    TokenAmount::new(token1.clone(), state.virtual_reserve1),
                    state.fee,
                )
            })
            .collect::<Result<Vec<_>, SdkError>>()?;

        info!(
            chain_id = %key.chain_id,
            factory = %factory,
            token0 = %key.token0,
            token1 = %key.token1,
            pairs = pairs.len(),
            "fetched pair data"
        );
        Ok(pairs)
    }

    /// [`Fetcher::fetch_pair_data`] against the configured factory.
    pub async fn fetch_default_pair_data(
        &self,
        token_a: &Token,
        token_b: &Token,
    ) -> Result<Vec<Pair>> {
        let factory = self
            .config
            .factory_address
            .ok_or_else(|| anyhow!("no default factory address configured"))?;
        self.fetch_pair_data(token_a, token_b, factory).await
    }

    async fn pool_addresses(&self, key: PairKey) -> Result<Vec<Address>> {
        if let Some(addresses) = self.cache.pool_addresses(&key).await {
            debug!(
                chain_id = %key.chain_id,
                factory = %key.factory,
                pools = addresses.len(),
                "pool address cache hit"
            );
            return Ok(addresses);
        }
        debug!(chain_id = %key.chain_id, factory = %key.factory, "pool address cache miss");
        let addresses = self
            .provider
            .pool_addresses(key.factory, key.token0, key.token1)
            .await?;
        // A pool may be created later, so misses are not remembered.
        if !addresses.is_empty() {
            self.cache.store_pool_addresses(key, addresses.clone()).await;
        }
        Ok(addresses)
    }
}
