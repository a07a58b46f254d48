use std::fmt::{self, Debug, Formatter};
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use deadpool_redis::redis::{self, AsyncCommands};
use deadpool_redis::{Config as PoolSettings, Connection, Pool, PoolConfig, Runtime, Timeouts};

use super::{BlobStore, StoreError};

/// Number of pooled Redis connections.
pub const POOL_SIZE: usize = 10;

/// Longest a request waits for a free connection.
pub const POOL_WAIT_TIMEOUT: Duration = Duration::from_secs(5);

/// Longest spent dialing a fresh connection.
pub const POOL_CREATE_TIMEOUT: Duration = Duration::from_secs(5);

/// A `BlobStore` backed by a Redis server.
///
/// Cloning is cheap; clones share the same connection pool.
#[derive(Clone)]
pub struct RedisStore {
    pool: Pool,
}

impl Debug for RedisStore {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedisStore").finish_non_exhaustive()
    }
}

impl RedisStore {
    /// Build the connection pool for `url` without dialing the server.
    pub fn new(url: &str) -> Result<Self> {
        let mut pool_config = PoolConfig::new(POOL_SIZE);
        pool_config.timeouts = Timeouts {
            wait: Some(POOL_WAIT_TIMEOUT),
            create: Some(POOL_CREATE_TIMEOUT),
            recycle: Some(POOL_CREATE_TIMEOUT),
        };

        let mut settings = PoolSettings::from_url(url);
        settings.pool = Some(pool_config);

        let pool = settings
            .create_pool(Some(Runtime::Tokio1))
            .with_context(|| format!("Failed to create Redis connection pool for {}", url))?;

        Ok(Self { pool })
    }

    /// Build the pool and verify that the server answers.
    pub async fn connect(url: &str) -> Result<Self> {
        let store = Self::new(url)?;

        store
            .ping()
            .await
            .with_context(|| format!("Failed to reach Redis at {}", url))?;

        tracing::info!("Connected to Redis at {} (pool size {})", url, store.capacity());
        Ok(store)
    }

    /// Maximum number of connections the pool will hold.
    pub fn capacity(&self) -> usize {
        self.pool.status().max_size
    }

    /// Check a connection out of the pool. It returns to the pool when dropped.
    async fn connection(&self) -> Result<Connection, StoreError> {
        self.pool
            .get()
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }
}

fn backend(err: redis::RedisError) -> StoreError {
    StoreError::Backend(err.into())
}

#[async_trait]
impl BlobStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let mut conn = self.connection().await?;
        let content: Option<Vec<u8>> = conn.get(key).await.map_err(backend)?;
        Ok(content)
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        let mut conn = self.connection().await?;
        let _: () = conn.set(key, value).await.map_err(backend)?;
        Ok(())
    }

    async fn set_if_absent(&self, key: &str, value: &[u8]) -> Result<bool, StoreError> {
        let mut conn = self.connection().await?;

        // SET .. NX replies OK on success and nil when the key already exists
        let reply: Option<String> = redis::cmd("SET")
            .arg(key)
            .arg(value)
            .arg("NX")
            .query_async(&mut conn)
            .await
            .map_err(backend)?;

        Ok(reply.is_some())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        let mut conn = self.connection().await?;
        let _: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(backend)?;
        Ok(())
    }
}
