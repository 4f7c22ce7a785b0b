//! Redis connection pool module.
//!
//! Provides connection pooling for Redis using deadpool-redis, and the
//! [`ConnectionSource`] seam that [`crate::Nest`] acquires connections through.

mod redis_pool;
mod source;

pub use redis_pool::{create_shared_pool, RedisPool, RedisPoolConfig, SharedRedisPool};
pub use source::ConnectionSource;
