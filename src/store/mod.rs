//! Storage backends for blob content.
//!
//! The gateway only ever needs three commands from a store: `GET`, `SET`, and
//! `SET .. NX`. Every operation checks a single connection out of a bounded
//! pool for its duration; failing to obtain one is reported separately from a
//! failure of the command itself.

pub mod redis_store;
#[cfg(test)]
pub mod memory;

use async_trait::async_trait;

pub use self::redis_store::RedisStore;

/// Failure of a store operation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No pooled connection could be obtained.
    #[error("no store connection available: {0}")]
    Unavailable(String),

    /// The store rejected or failed the command.
    #[error("store command failed: {0}")]
    Backend(#[source] anyhow::Error),
}

/// A key-value store holding opaque byte blobs.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Fetch the value stored under `key`, or `None` if the key is absent.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Store `value` under `key`, replacing any existing value.
    async fn set(&self, key: &str, value: &[u8]) -> Result<(), StoreError>;

    /// Store `value` under `key` only if the key does not exist yet.
    ///
    /// Returns `false` when the key was already present and nothing was written.
    async fn set_if_absent(&self, key: &str, value: &[u8]) -> Result<bool, StoreError>;

    /// Round-trip a no-op command to verify the store is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}
