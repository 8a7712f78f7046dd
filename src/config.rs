// Service configuration loaded from environment variables:
// - backing directory for the disk mirror
// - memory fraction used to size the metadata tier
// - price cache TTL and capacity
// - HTTP listen address

use dotenv::dotenv;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub cache_dir: String,
    pub max_memory_percent: f64,
    pub price_cache_ttl: Duration,
    pub price_cache_capacity: u64,
    pub server_host: String,
    pub server_port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let cache_dir = env::var("CACHE_DIR").unwrap_or_else(|_| "cache".to_string());
        let max_memory_percent = env::var("MAX_MEMORY_PERCENT")
            .unwrap_or_else(|_| "75".to_string())
            .parse()
            .unwrap_or(75.0);
        let price_cache_ttl = env::var("PRICE_CACHE_TTL")
            .unwrap_or_else(|_| "300".to_string())
            .parse()
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(300));
        let price_cache_capacity = env::var("PRICE_CACHE_CAPACITY")
            .unwrap_or_else(|_| "100000".to_string())
            .parse()
            .unwrap_or(100_000);
        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080);

        Self {
            cache_dir,
            max_memory_percent,
            price_cache_ttl,
            price_cache_capacity,
            server_host,
            server_port,
        }
    }
}
