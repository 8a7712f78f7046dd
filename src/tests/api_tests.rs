//! End-to-end tests for the HTTP surface, run against a server bound to an
//! ephemeral port.

#[cfg(test)]
mod tests {
    use crate::{
        api::create_router,
        cache::NftCacheManager,
        config::Config,
        models::NftMetadata,
        state::AppState,
        tests::test_record,
    };
    use std::{sync::Arc, time::Duration};
    use tempfile::TempDir;

    /// Boot the router on 127.0.0.1:0 and return its base URL. The temp dir
    /// is returned so the backing directory outlives the test.
    async fn spawn_test_server() -> (String, TempDir) {
        let dir = TempDir::new().expect("Failed to create temp dir");

        let config = Config {
            cache_dir: dir.path().to_string_lossy().into_owned(),
            max_memory_percent: 75.0,
            price_cache_ttl: Duration::from_secs(300),
            price_cache_capacity: 1000,
            server_host: "127.0.0.1".to_string(),
            server_port: 0,
        };

        let cache = NftCacheManager::with_capacity(
            dir.path(),
            100,
            config.price_cache_capacity,
            config.price_cache_ttl,
        )
        .expect("Failed to create cache");

        let app_state = Arc::new(AppState {
            config,
            cache: Arc::new(cache),
        });

        let app = create_router(app_state);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{}", addr), dir)
    }

    #[tokio::test]
    async fn test_cache_and_fetch_nft() {
        let (base_url, _dir) = spawn_test_server().await;
        let client = reqwest::Client::new();
        let record = test_record("mint_api_a");

        let response = client
            .post(format!("{}/nfts", base_url))
            .json(&record)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let response = client
            .get(format!("{}/nfts/mint_api_a", base_url))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = response.json().await.unwrap();
        let fetched: NftMetadata = serde_json::from_value(body["data"].clone()).unwrap();
        assert_eq!(fetched, record);
    }

    #[tokio::test]
    async fn test_unknown_mint_returns_not_found() {
        let (base_url, _dir) = spawn_test_server().await;
        let client = reqwest::Client::new();

        let response = client
            .get(format!("{}/nfts/not_cached", base_url))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_price_endpoints() {
        let (base_url, _dir) = spawn_test_server().await;
        let client = reqwest::Client::new();

        let response = client
            .post(format!("{}/nfts/mint_api_b/price", base_url))
            .json(&serde_json::json!({ "floor_price": 2.5, "last_sale_price": 3.0 }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let response = client
            .get(format!("{}/nfts/mint_api_b/price", base_url))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["data"]["floor_price"], 2.5);
        assert_eq!(body["data"]["last_sale_price"], 3.0);

        // No snapshot recorded for this mint
        let response = client
            .get(format!("{}/nfts/mint_api_c/price", base_url))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_validation_rejections() {
        let (base_url, _dir) = spawn_test_server().await;
        let client = reqwest::Client::new();

        // Record without a mint address
        let mut record = test_record("placeholder");
        record.mint = String::new();
        let response = client
            .post(format!("{}/nfts", base_url))
            .json(&record)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);

        // Negative price
        let response = client
            .post(format!("{}/nfts/mint_api_d/price", base_url))
            .json(&serde_json::json!({ "floor_price": -1.0, "last_sale_price": 1.0 }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_stats_and_clear() {
        let (base_url, _dir) = spawn_test_server().await;
        let client = reqwest::Client::new();
        let record = test_record("mint_api_e");

        client
            .post(format!("{}/nfts", base_url))
            .json(&record)
            .send()
            .await
            .unwrap();

        let body: serde_json::Value = client
            .get(format!("{}/cache/stats", base_url))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body["data"]["metadata_entries"], 1);

        let response = client
            .post(format!("{}/cache/clear", base_url))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = client
            .get(format!("{}/cache/stats", base_url))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body["data"]["metadata_entries"], 0);

        // Clearing only drops the acceleration layer; the mirror repopulates it.
        let response = client
            .get(format!("{}/nfts/mint_api_e", base_url))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::OK);
    }
}
