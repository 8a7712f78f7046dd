pub mod api_tests;

use crate::models::{Attribute, CollectionInfo, Creator, NftMetadata};
use chrono::DateTime;

/// Build a deterministic NFT record for a mint so equality checks do not
/// depend on wall-clock time.
pub fn test_record(mint: &str) -> NftMetadata {
    NftMetadata {
        mint: mint.to_string(),
        name: format!("Test NFT {}", mint),
        symbol: "TEST".to_string(),
        uri: format!("https://arweave.net/{}", mint),
        seller_fee_basis_points: 500,
        creators: vec![Creator {
            address: "9ii1FEiWSgDzXAbwj2oTmJXzkfCw78mnHwPQv9WQ5iTn".to_string(),
            verified: true,
            share: 100,
        }],
        collection: Some(CollectionInfo {
            key: "AhAkbf3cGD6HkFod2rBEE8mie8ks9p7vuss6WGkUFAM9".to_string(),
            name: Some("Test Collection".to_string()),
            verified: true,
        }),
        attributes: vec![Attribute {
            trait_type: "Background".to_string(),
            value: "Blue".to_string(),
        }],
        last_updated: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        floor_price: 1.25,
        last_sale_price: 1.5,
    }
}
