//! Namespaced command forwarding.
//!
//! A [`Nest`] pairs a [`KeyBuilder`] with a pool handle. Every command method
//! acquires one connection, finishes the pending key, sends exactly one
//! command and hands the reply back unchanged. The connection is dropped,
//! and so returned to the pool, on every path out of the method.
//!
//! Commands are grouped by Redis data type:
//! - `strings`: SET, GET, INCR, EXPIRE, DEL, EXISTS and MULTI/EXEC
//! - `hashes`: HMSET, HGETALL, HGET, HDEL, HLEN, HKEYS
//! - `sets`: SADD, SREM, SMEMBERS
//! - `lists`: RPUSH, LSET, LINDEX, LLEN, LREM, LRANGE
//! - `sorted_sets`: ZADD, ZRANGE, ZCARD

mod hashes;
mod lists;
mod sets;
mod sorted_sets;
mod strings;

use nest_core::{Key, KeyBuilder};
use std::fmt;

use crate::error::{NestError, NestResult};
use crate::pool::{ConnectionSource, RedisPool};

/// Key builder bound to a Redis pool
#[derive(Debug, Clone)]
pub struct Nest<P = RedisPool> {
    keys: KeyBuilder,
    pool: Option<P>,
}

impl<P> Nest<P> {
    /// Create a nest that only builds keys
    ///
    /// Every command fails with [`NestError::PoolNotConfigured`] until a pool
    /// is set with [`Nest::set_pool`].
    #[must_use]
    pub fn unconfigured(keys: KeyBuilder) -> Self {
        Self { keys, pool: None }
    }

    /// Create a nest from a builder and a pool handle
    #[must_use]
    pub fn with_pool(keys: KeyBuilder, pool: P) -> Self {
        Self {
            keys,
            pool: Some(pool),
        }
    }

    /// Keys prefixed with the simple name of `T`
    #[must_use]
    pub fn of<T: ?Sized>(pool: P) -> Self {
        Self::with_pool(KeyBuilder::of::<T>(), pool)
    }

    /// Keys prefixed with the simple type name of `model`
    #[must_use]
    pub fn for_model<T: ?Sized>(model: &T, pool: P) -> Self {
        Self::with_pool(KeyBuilder::for_model(model), pool)
    }

    /// Keys prefixed with a literal string
    #[must_use]
    pub fn literal(prefix: impl Into<String>, pool: P) -> Self {
        Self::with_pool(KeyBuilder::new(prefix), pool)
    }

    /// Keys with an empty prefix
    #[must_use]
    pub fn root(pool: P) -> Self {
        Self::with_pool(KeyBuilder::root(), pool)
    }

    /// Set or replace the pool handle
    pub fn set_pool(&mut self, pool: P) {
        self.pool = Some(pool);
    }

    /// Whether commands can be forwarded
    pub fn has_pool(&self) -> bool {
        self.pool.is_some()
    }

    /// The underlying key builder
    pub fn keys(&self) -> &KeyBuilder {
        &self.keys
    }

    /// Append one segment to the pending key
    pub fn cat(&mut self, segment: impl fmt::Display) -> &mut Self {
        self.keys.cat(segment);
        self
    }

    /// Finish the pending key; see [`KeyBuilder::key`]
    pub fn key(&mut self) -> Key {
        self.keys.key()
    }

    fn pool(&self) -> NestResult<&P> {
        self.pool.as_ref().ok_or(NestError::PoolNotConfigured)
    }
}

impl<P: Clone> Nest<P> {
    /// Finish the pending key and start a nest below it, sharing the pool
    #[must_use]
    pub fn fork(&mut self) -> Self {
        Self {
            keys: self.keys.fork(),
            pool: self.pool.clone(),
        }
    }
}

impl<P: ConnectionSource> Nest<P> {
    /// Acquire a connection, then finish the pending key.
    ///
    /// The key is only consumed once a connection is in hand, so a missing
    /// pool or a failed acquire leaves the pending segments in place.
    async fn checkout(&mut self, command: &'static str) -> NestResult<(P::Connection, Key)> {
        let conn = self.pool()?.acquire().await?;
        let key = self.keys.key();
        tracing::trace!(command, key = %key, "Forwarding command");
        Ok((conn, key))
    }
}

impl RedisPool {
    /// Create a nest over this pool
    #[must_use]
    pub fn nest(&self, keys: KeyBuilder) -> Nest {
        Nest::with_pool(keys, self.clone())
    }
}
