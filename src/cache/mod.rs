//! Two-tier NFT metadata cache: in-memory LRU accelerator over a per-mint
//! JSON file mirror, plus a TTL-bounded price snapshot cache.

pub mod disk;
pub mod manager;

use thiserror::Error;

pub use manager::NftCacheManager;

/// Internal cache failure taxonomy. Disk failures are logged inside the
/// manager and surface to callers as a miss, never as an error.
#[derive(Error, Debug)]
pub enum CacheError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
