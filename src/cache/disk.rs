//! On-disk mirror of cached NFT records: one `<mint>.json` file per record
//! in the backing directory. Disk is the durable tier; memory accelerates it.

use std::fs;
use std::path::{Path, PathBuf};

use crate::cache::CacheError;
use crate::models::NftMetadata;

/// Path of the mirrored file for a mint address.
pub fn record_path(cache_dir: &Path, mint: &str) -> PathBuf {
    cache_dir.join(format!("{}.json", mint))
}

/// Read a record back from its mirrored file.
///
/// Returns `Ok(None)` when no file exists for the mint. A file that cannot
/// be read or parsed is an error; the caller decides how to treat it.
pub fn read_record(cache_dir: &Path, mint: &str) -> Result<Option<NftMetadata>, CacheError> {
    let path = record_path(cache_dir, mint);
    if !path.exists() {
        return Ok(None);
    }

    let data = fs::read_to_string(&path)?;
    let record: NftMetadata = serde_json::from_str(&data)?;
    Ok(Some(record))
}

/// Write a record to its mirrored file, replacing any prior content.
pub fn write_record(cache_dir: &Path, record: &NftMetadata) -> Result<(), CacheError> {
    let path = record_path(cache_dir, &record.mint);
    let data = serde_json::to_string(record)?;
    fs::write(path, data)?;
    Ok(())
}
