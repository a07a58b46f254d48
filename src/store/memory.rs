use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::{Semaphore, SemaphorePermit};

use super::{BlobStore, StoreError};

/// In-memory blob store with a bounded number of simultaneous "connections".
///
/// Each operation holds one semaphore permit for its duration, the same way a
/// pooled store holds one connection.
pub struct MemoryStore {
    data: Mutex<HashMap<String, Vec<u8>>>,
    permits: Semaphore,
    acquire_timeout: Duration,
}

impl MemoryStore {
    /// Create an empty store with `capacity` connections.
    pub fn with_capacity(capacity: usize, acquire_timeout: Duration) -> Self {
        Self {
            data: Mutex::new(HashMap::new()),
            permits: Semaphore::new(capacity),
            acquire_timeout,
        }
    }

    /// Take every free connection, leaving the store exhausted until the
    /// returned permit is dropped.
    pub async fn exhaust(&self) -> SemaphorePermit<'_> {
        let free = self.permits.available_permits() as u32;
        self.permits
            .acquire_many(free)
            .await
            .expect("semaphore closed")
    }

    pub fn value(&self, key: &str) -> Option<Vec<u8>> {
        self.data.lock().unwrap().get(key).cloned()
    }

    async fn connection(&self) -> Result<SemaphorePermit<'_>, StoreError> {
        match tokio::time::timeout(self.acquire_timeout, self.permits.acquire()).await {
            Ok(Ok(permit)) => Ok(permit),
            Ok(Err(e)) => Err(StoreError::Unavailable(e.to_string())),
            Err(_) => Err(StoreError::Unavailable(format!(
                "timed out after {:?} waiting for a connection",
                self.acquire_timeout
            ))),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::with_capacity(super::redis_store::POOL_SIZE, Duration::from_secs(1))
    }
}

#[async_trait]
impl BlobStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let _conn = self.connection().await?;
        Ok(self.data.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        let _conn = self.connection().await?;
        self.data.lock().unwrap().insert(key.to_string(), value.to_vec());
        Ok(())
    }

    async fn set_if_absent(&self, key: &str, value: &[u8]) -> Result<bool, StoreError> {
        let _conn = self.connection().await?;
        let mut data = self.data.lock().unwrap();
        if data.contains_key(key) {
            return Ok(false);
        }
        data.insert(key.to_string(), value.to_vec());
        Ok(true)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        let _conn = self.connection().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_if_absent_keeps_first_value() {
        let store = MemoryStore::default();

        assert!(store.set_if_absent("k", b"one").await.unwrap());
        assert!(!store.set_if_absent("k", b"two").await.unwrap());
        assert_eq!(store.get("k").await.unwrap(), Some(b"one".to_vec()));
    }

    #[tokio::test]
    async fn test_connection_is_released_after_each_operation() {
        let store = MemoryStore::with_capacity(1, Duration::from_millis(50));

        for i in 0..5u8 {
            store.set("k", &[i]).await.unwrap();
        }
        assert_eq!(store.get("k").await.unwrap(), Some(vec![4]));
        assert_eq!(store.permits.available_permits(), 1);
    }

    #[tokio::test]
    async fn test_exhausted_store_is_unavailable() {
        let store = MemoryStore::with_capacity(2, Duration::from_millis(20));
        let held = store.exhaust().await;

        assert!(matches!(store.ping().await, Err(StoreError::Unavailable(_))));

        drop(held);
        assert!(store.ping().await.is_ok());
    }
}
