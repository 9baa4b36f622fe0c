//! Prelude module for convenient imports.
//!
//! # Example
//!
//! ```rust
//! use dmm_sdk_protocols::prelude::*;
//! ```

pub use crate::PoolFetcher;

// Cache
pub use crate::cache::{InMemoryCache, MetadataCache, PairKey, TokenKey};

// Configuration
pub use crate::config::{FetcherConfig, KnownDecimals};

// Fetcher
pub use crate::fetcher::Fetcher;

// Provider
pub use crate::provider::{ChainDataProvider, PoolReserves};
