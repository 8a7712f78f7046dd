pub mod api;
pub mod cache;
pub mod config;
pub mod models;
pub mod state;
pub mod validation;

#[cfg(test)]
pub mod tests;

// Re-export specific items for convenience
pub use cache::{CacheError, NftCacheManager};
pub use models::{Attribute, CacheStats, CollectionInfo, Creator, NftMetadata, PriceSnapshot};
pub use validation::{validate_mint_address, validate_price, ValidationError};
pub use api::error::ApiError;
pub use api::response::ApiResponse;
pub use api::route::create_router;
