//! Thread-safe NFT metadata cache manager.
//!
//! Two tiers behind one exclusive lock: a bounded LRU map of metadata records
//! mirrored write-through to per-mint JSON files, and a TTL cache of price
//! snapshots that never touches disk. Hit/miss counters and the memory gauge
//! live in atomics so stats reads do not take the lock.

use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::Utc;
use lru::LruCache;
use moka::sync::Cache;
use sysinfo::{Pid, System};
use tracing::{error, info, warn};

use crate::cache::{disk, CacheError};
use crate::config::Config;
use crate::models::{CacheStats, NftMetadata, PriceSnapshot};

/// Default capacity of the price snapshot tier.
pub const PRICE_CACHE_CAPACITY: u64 = 100_000;

/// Default time-to-live for price snapshots.
pub const PRICE_CACHE_TTL: Duration = Duration::from_secs(300);

// Heuristic per-record size used to turn a memory budget into an entry
// count. Not a measured bound.
const APPROX_RECORD_SIZE_BYTES: u64 = 1024;

/// Thread-safe two-tier cache for NFT metadata and price snapshots.
pub struct NftCacheManager {
    cache_dir: PathBuf,
    inner: Mutex<CacheInner>,
    /// Handle onto the same price store as `inner.prices`, kept outside the
    /// lock so `get_cache_stats` can count entries without acquiring it.
    price_view: Cache<String, PriceSnapshot>,
    pid: Pid,
    metadata_entries: AtomicU64,
    cache_hits: AtomicU64,
    cache_misses: AtomicU64,
    memory_usage_mb: AtomicU64,
}

struct CacheInner {
    metadata: LruCache<String, NftMetadata>,
    prices: Cache<String, PriceSnapshot>,
    system: System,
}

impl NftCacheManager {
    /// Create a cache backed by `cache_dir`, sizing the metadata tier from
    /// currently available system memory.
    pub fn new(
        cache_dir: impl AsRef<Path>,
        max_memory_percent: f64,
    ) -> Result<Self, CacheError> {
        let capacity = Self::memory_derived_capacity(max_memory_percent);
        Self::with_capacity(cache_dir, capacity, PRICE_CACHE_CAPACITY, PRICE_CACHE_TTL)
    }

    /// Create a cache from the service configuration.
    pub fn from_config(config: &Config) -> Result<Self, CacheError> {
        let capacity = Self::memory_derived_capacity(config.max_memory_percent);
        Self::with_capacity(
            &config.cache_dir,
            capacity,
            config.price_cache_capacity,
            config.price_cache_ttl,
        )
    }

    /// Create a cache with explicit tier bounds.
    pub fn with_capacity(
        cache_dir: impl AsRef<Path>,
        metadata_capacity: usize,
        price_capacity: u64,
        price_ttl: Duration,
    ) -> Result<Self, CacheError> {
        let cache_dir = cache_dir.as_ref().to_path_buf();
        // Idempotent: a no-op if the directory already exists, so concurrent
        // construction never races on creation.
        fs::create_dir_all(&cache_dir)?;

        let capacity =
            NonZeroUsize::new(metadata_capacity).unwrap_or(NonZeroUsize::MIN);
        let prices = Cache::builder()
            .max_capacity(price_capacity)
            .time_to_live(price_ttl)
            .build();

        info!(
            "Initialized NFT cache at {:?} with max size: {} entries",
            cache_dir, capacity
        );

        Ok(Self {
            cache_dir,
            price_view: prices.clone(),
            inner: Mutex::new(CacheInner {
                metadata: LruCache::new(capacity),
                prices,
                system: System::new(),
            }),
            pid: Pid::from_u32(std::process::id()),
            metadata_entries: AtomicU64::new(0),
            cache_hits: AtomicU64::new(0),
            cache_misses: AtomicU64::new(0),
            memory_usage_mb: AtomicU64::new(0),
        })
    }

    /// Entry budget for the metadata tier: a fraction of available system
    /// memory divided by the approximate per-record size.
    fn memory_derived_capacity(max_memory_percent: f64) -> usize {
        let mut system = System::new();
        system.refresh_memory();
        let budget =
            (system.available_memory() as f64 * max_memory_percent / 100.0) as u64;
        (budget / APPROX_RECORD_SIZE_BYTES).max(1) as usize
    }

    /// Look up a record, falling back to the disk mirror on a memory miss.
    ///
    /// A memory hit promotes the entry to most-recently-used. Disk failures
    /// (missing, unreadable or malformed file) are logged and reported as a
    /// miss, never raised.
    pub fn get_record(&self, mint: &str) -> Option<NftMetadata> {
        let mut inner = self.lock_inner();

        if let Some(record) = inner.metadata.get(mint) {
            self.cache_hits.fetch_add(1, Ordering::Relaxed);
            return Some(record.clone());
        }

        self.cache_misses.fetch_add(1, Ordering::Relaxed);
        match disk::read_record(&self.cache_dir, mint) {
            Ok(Some(record)) => {
                inner.metadata.put(mint.to_string(), record.clone());
                self.metadata_entries
                    .store(inner.metadata.len() as u64, Ordering::Relaxed);
                Some(record)
            }
            Ok(None) => None,
            Err(e) => {
                error!("Error loading NFT {} from disk cache: {}", mint, e);
                None
            }
        }
    }

    /// Insert or overwrite a record in both tiers (write-through).
    ///
    /// The memory copy is updated even when the mirror write fails; the
    /// failure is logged and the tiers disagree until the next successful
    /// write of the same mint.
    pub fn cache_record(&self, record: NftMetadata) {
        if record.mint.is_empty() {
            warn!("Ignoring NFT record with empty mint address");
            return;
        }

        let mut inner = self.lock_inner();

        let mint = record.mint.clone();
        inner.metadata.put(mint.clone(), record.clone());
        self.metadata_entries
            .store(inner.metadata.len() as u64, Ordering::Relaxed);

        if let Err(e) = disk::write_record(&self.cache_dir, &record) {
            error!("Error saving NFT {} to disk cache: {}", mint, e);
        }

        // Refresh the resident memory gauge while we still hold the lock.
        inner.system.refresh_process(self.pid);
        if let Some(process) = inner.system.process(self.pid) {
            self.memory_usage_mb
                .store(process.memory() / (1024 * 1024), Ordering::Relaxed);
        }
    }

    /// Record a price observation for a mint. Overwrites any existing
    /// snapshot and restarts its TTL window.
    pub fn update_price(&self, mint: &str, floor_price: f64, last_sale_price: f64) {
        let inner = self.lock_inner();
        inner.prices.insert(
            mint.to_string(),
            PriceSnapshot {
                floor_price,
                last_sale_price,
                updated_at: Utc::now(),
            },
        );
    }

    /// Current price snapshot for a mint, or `None` once the TTL elapsed.
    pub fn get_price(&self, mint: &str) -> Option<PriceSnapshot> {
        let inner = self.lock_inner();
        inner.prices.get(mint)
    }

    /// Empty both in-memory tiers. Mirrored files are untouched, so records
    /// repopulate from disk on the next lookup.
    pub fn clear_cache(&self) {
        let mut inner = self.lock_inner();
        inner.metadata.clear();
        inner.prices.invalidate_all();
        self.metadata_entries.store(0, Ordering::Relaxed);
        info!("Cache cleared");
    }

    /// Snapshot of the cache counters. Taken without the cache lock, so the
    /// numbers are approximate under concurrent mutation.
    pub fn get_cache_stats(&self) -> CacheStats {
        self.price_view.run_pending_tasks();
        CacheStats {
            metadata_entries: self.metadata_entries.load(Ordering::Relaxed),
            price_entries: self.price_view.entry_count(),
            memory_usage_mb: self.memory_usage_mb.load(Ordering::Relaxed),
            cache_hits: self.cache_hits.load(Ordering::Relaxed),
            cache_misses: self.cache_misses.load(Ordering::Relaxed),
        }
    }

    fn lock_inner(&self) -> MutexGuard<'_, CacheInner> {
        // Recover the guard if a panicking thread poisoned the lock; all
        // mutation happens within single-method scopes.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
