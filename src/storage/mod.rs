//! # Blob Storage Module
//!
//! The pipeline talks to object storage through the narrow [`BlobStore`]
//! capability: put, list, get, copy and delete over a flat key space where
//! `/` only acts as a prefix delimiter. Two implementations ship with the
//! crate:
//!
//! - [`FsBlobStore`] - buckets are directories on the local disk
//! - [`MemoryBlobStore`] - an in-process map for tests and dry runs
//!
//! ## Namespace Layout
//!
//! ```text
//! spotify-data-engineering-project/
//!   discover_weekly/raw_data/to_process/spotify_raw_data<ts>.json
//!   discover_weekly/raw_data/processed/spotify_raw_data<ts>.json
//!   discover_weekly/transformed_data/song_data/songs_transformed_<ts>.csv
//!   discover_weekly/transformed_data/album_data/album_transformed_<ts>.csv
//!   discover_weekly/transformed_data/artist_data/artist_transformed_<ts>.csv
//! ```
//!
//! ## Archival
//!
//! The store has no rename, so [`archive`] emulates a move with copy then
//! delete. The copy is read back and its SHA-256 digest compared with the
//! source before the source is removed; a mismatch keeps the source.

mod layout;
mod local;
mod memory;

use async_trait::async_trait;
use sha2::{Digest, Sha256};

pub use local::FsBlobStore;
pub use layout::{
    ALBUM_PREFIX, ARTIST_PREFIX, BUCKET, Entity, OutputStamp, PROCESSED_PREFIX, RAW_EXTENSION,
    SONG_PREFIX, TO_PROCESS_PREFIX, is_raw_document, output_key, processed_key, raw_document_key,
};
pub use memory::MemoryBlobStore;

use crate::{EtlError, Res, info, utils};

/// Key-value blob storage over `(bucket, key)` pairs.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Writes or overwrites `key`.
    async fn put(&self, bucket: &str, key: &str, body: Vec<u8>) -> Res<()>;

    /// Every key starting with `prefix`, sorted. An empty prefix listing is
    /// an empty vector, never an error.
    async fn list(&self, bucket: &str, prefix: &str) -> Res<Vec<String>>;

    /// Full body of `key`, or [`EtlError::NotFound`].
    async fn get(&self, bucket: &str, key: &str) -> Res<Vec<u8>>;

    async fn copy(&self, src_bucket: &str, src_key: &str, dest_bucket: &str, dest_key: &str)
    -> Res<()>;

    /// Removing a key that does not exist succeeds.
    async fn delete(&self, bucket: &str, key: &str) -> Res<()>;
}

/// Moves a consumed raw document from `to_process/` to `processed/`.
///
/// Returns the key of the archived copy.
pub async fn archive<S: BlobStore + ?Sized>(store: &S, bucket: &str, key: &str) -> Res<String> {
    let dest = processed_key(key);
    let original = store.get(bucket, key).await?;

    store.copy(bucket, key, bucket, &dest).await?;

    let copied = store.get(bucket, &dest).await?;
    if Sha256::digest(&original) != Sha256::digest(&copied) {
        return Err(EtlError::ArchiveMismatch(key.to_string()));
    }

    store.delete(bucket, key).await?;
    info!("Archived {} as {}", utils::base_name(key), dest);
    Ok(dest)
}
