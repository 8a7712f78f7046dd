// NFT metadata record and price snapshot types shared by the cache engine
// and the HTTP layer. Field names match the on-disk JSON mirror format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Descriptive metadata for one NFT, keyed by its mint address.
///
/// The mint address uniquely identifies the record across both cache tiers
/// and names its mirrored file on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NftMetadata {
    pub mint: String,
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub seller_fee_basis_points: u16,
    pub creators: Vec<Creator>,
    pub collection: Option<CollectionInfo>,
    pub attributes: Vec<Attribute>,
    pub last_updated: DateTime<Utc>,
    #[serde(default)]
    pub floor_price: f64,
    #[serde(default)]
    pub last_sale_price: f64,
}

/// One entry of an NFT's creator list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creator {
    pub address: String,
    pub verified: bool,
    pub share: u8,
}

/// Collection membership descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionInfo {
    pub key: String,
    pub name: Option<String>,
    pub verified: bool,
}

/// A single trait attribute from the off-chain metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub trait_type: String,
    pub value: String,
}

/// Point-in-time price observation for one mint.
///
/// Lives only in the TTL tier; never written to disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSnapshot {
    pub floor_price: f64,
    pub last_sale_price: f64,
    pub updated_at: DateTime<Utc>,
}

/// Observability counters exposed by the cache.
///
/// Read without the cache lock, so values may race with concurrent mutators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheStats {
    pub metadata_entries: u64,
    pub price_entries: u64,
    pub memory_usage_mb: u64,
    pub cache_hits: u64,
    pub cache_misses: u64,
}
