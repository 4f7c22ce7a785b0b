//! Redis connection pool using deadpool-redis.
//!
//! Provides a managed pool of Redis connections for efficient resource usage.

use async_trait::async_trait;
use deadpool_redis::{Config, Pool, Runtime};
use redis::AsyncCommands;
use std::sync::Arc;
use std::time::Duration;

use super::ConnectionSource;
use crate::error::{NestError, NestResult};

/// Redis pool configuration
#[derive(Debug, Clone)]
pub struct RedisPoolConfig {
    /// Redis connection URL (e.g., `redis://localhost:6379`)
    pub url: String,
    /// Maximum number of connections in the pool
    pub max_connections: usize,
    /// How long `get` waits for a free connection before failing
    pub wait_timeout: Option<Duration>,
}

impl Default for RedisPoolConfig {
    fn default() -> Self {
        Self {
            url: "redis://127.0.0.1:6379".to_string(),
            max_connections: 16,
            wait_timeout: None,
        }
    }
}

impl From<&nest_common::RedisConfig> for RedisPoolConfig {
    fn from(config: &nest_common::RedisConfig) -> Self {
        Self {
            url: config.url.clone(),
            max_connections: config.max_connections as usize,
            wait_timeout: config.wait_timeout(),
        }
    }
}

/// Managed Redis connection pool
#[derive(Clone)]
pub struct RedisPool {
    pool: Pool,
}

impl std::fmt::Debug for RedisPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisPool")
            .field("status", &self.pool.status())
            .finish()
    }
}

impl RedisPool {
    /// Create a new Redis pool with the given configuration
    pub fn new(config: RedisPoolConfig) -> NestResult<Self> {
        let cfg = Config::from_url(&config.url);
        let pool = cfg
            .builder()
            .map_err(|e| NestError::CreatePool(e.to_string()))?
            .max_size(config.max_connections)
            .wait_timeout(config.wait_timeout)
            .runtime(Runtime::Tokio1)
            .build()
            .map_err(|e| NestError::CreatePool(e.to_string()))?;

        tracing::info!(
            url = %redact_url(&config.url),
            max_connections = config.max_connections,
            wait_timeout_ms = config.wait_timeout.map(|t| t.as_millis() as u64),
            "Redis pool created"
        );

        Ok(Self { pool })
    }

    /// Create a new Redis pool from nest-common config
    pub fn from_config(config: &nest_common::RedisConfig) -> NestResult<Self> {
        Self::new(RedisPoolConfig::from(config))
    }

    /// Get a connection from the pool
    pub async fn get(&self) -> NestResult<deadpool_redis::Connection> {
        self.pool.get().await.map_err(NestError::GetConnection)
    }

    /// Get the current pool status
    #[must_use]
    pub fn status(&self) -> deadpool_redis::Status {
        self.pool.status()
    }

    /// Check if the pool is healthy by pinging Redis
    pub async fn health_check(&self) -> NestResult<()> {
        let mut conn = self.get().await?;
        redis::cmd("PING")
            .query_async::<String>(&mut conn)
            .await?;
        Ok(())
    }

    /// Scan keys matching a pattern using cursor-based iteration.
    ///
    /// Unlike `KEYS`, this does not block Redis on large key spaces.
    pub async fn scan_keys(&self, pattern: &str, count: usize) -> NestResult<Vec<String>> {
        let mut conn = self.get().await?;
        let mut cursor: u64 = 0;
        let mut all_keys = Vec::new();

        loop {
            let (next_cursor, keys): (u64, Vec<String>) = redis::cmd("SCAN")
                .arg(cursor)
                .arg("MATCH")
                .arg(pattern)
                .arg("COUNT")
                .arg(count)
                .query_async(&mut conn)
                .await?;

            all_keys.extend(keys);
            cursor = next_cursor;

            if cursor == 0 {
                break;
            }
        }

        Ok(all_keys)
    }

    /// Delete every key in `keys`, returning how many existed
    pub async fn delete_keys(&self, keys: &[String]) -> NestResult<u64> {
        if keys.is_empty() {
            return Ok(0);
        }
        let mut conn = self.get().await?;
        let deleted: u64 = conn.del(keys).await?;
        tracing::debug!(requested = keys.len(), deleted, "Deleted keys");
        Ok(deleted)
    }
}

#[async_trait]
impl ConnectionSource for RedisPool {
    type Connection = deadpool_redis::Connection;

    async fn acquire(&self) -> NestResult<Self::Connection> {
        self.get().await
    }
}

/// Shared Redis pool wrapped in Arc for easy cloning
pub type SharedRedisPool = Arc<RedisPool>;

/// Create a shared Redis pool
pub fn create_shared_pool(config: RedisPoolConfig) -> NestResult<SharedRedisPool> {
    Ok(Arc::new(RedisPool::new(config)?))
}

/// Strip credentials from a connection URL for logging
fn redact_url(url: &str) -> &str {
    url.rsplit('@').next().unwrap_or(url)
}
