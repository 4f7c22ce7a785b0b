//! # nest-cache
//!
//! Redis access through namespaced keys.
//!
//! ## Features
//!
//! - **Connection Pool**: Managed Redis connection pool with deadpool
//! - **Nest**: Key builder that forwards string, hash, set, list and sorted-set
//!   commands to a pooled connection, one command per call
//!
//! ## Example
//!
//! ```ignore
//! use nest_cache::{Nest, RedisPool, RedisPoolConfig};
//!
//! let pool = RedisPool::new(RedisPoolConfig::default())?;
//!
//! // "User:5:email"
//! Nest::of::<User>(pool.clone()).cat(5).cat("email").set("a@b.c").await?;
//!
//! // "User:5:followers"
//! let mut user = Nest::of::<User>(pool).cat(5).fork();
//! user.cat("followers").sadd(42).await?;
//! ```

pub mod error;
pub mod nest;
pub mod pool;


pub use error::{NestError, NestResult};
pub use nest::Nest;
pub use pool::{create_shared_pool, ConnectionSource, RedisPool, RedisPoolConfig, SharedRedisPool};

// Re-export key building so callers need only this crate
pub use nest_core::{simple_type_name, Key, KeyBuilder, KeyState, DELIMITER};
