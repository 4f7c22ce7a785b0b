//! Error types for Redis access

/// Error type for pool and command operations
#[derive(Debug, thiserror::Error)]
pub enum NestError {
    #[error("No Redis pool configured")]
    PoolNotConfigured,

    #[error("Failed to create Redis pool: {0}")]
    CreatePool(String),

    #[error("Failed to get connection from pool: {0}")]
    GetConnection(#[from] deadpool_redis::PoolError),

    #[error("Redis command error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl NestError {
    /// Whether the error was raised locally because no pool was set
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::PoolNotConfigured | Self::CreatePool(_))
    }
}

/// Result type for pool and command operations
pub type NestResult<T> = Result<T, NestError>;
