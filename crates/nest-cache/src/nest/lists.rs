//! List commands

use redis::{AsyncCommands, ToRedisArgs};

use super::Nest;
use crate::error::NestResult;
use crate::pool::ConnectionSource;

impl<P: ConnectionSource> Nest<P> {
    /// RPUSH one value, returning the new length
    pub async fn rpush<V>(&mut self, value: V) -> NestResult<i64>
    where
        V: ToRedisArgs + Send + Sync,
    {
        let (mut conn, key) = self.checkout("RPUSH").await?;
        let len: i64 = conn.rpush(key.as_str(), value).await?;
        Ok(len)
    }

    /// LSET the element at `index`, returning the status reply
    pub async fn lset<V>(&mut self, index: isize, value: V) -> NestResult<String>
    where
        V: ToRedisArgs + Send + Sync,
    {
        let (mut conn, key) = self.checkout("LSET").await?;
        let reply: String = conn.lset(key.as_str(), index, value).await?;
        Ok(reply)
    }

    /// LINDEX; negative indexes count from the tail
    pub async fn lindex(&mut self, index: isize) -> NestResult<Option<String>> {
        let (mut conn, key) = self.checkout("LINDEX").await?;
        let value: Option<String> = conn.lindex(key.as_str(), index).await?;
        Ok(value)
    }

    /// LLEN
    pub async fn llen(&mut self) -> NestResult<i64> {
        let (mut conn, key) = self.checkout("LLEN").await?;
        let len: i64 = conn.llen(key.as_str()).await?;
        Ok(len)
    }

    /// LREM up to `count` occurrences of `value`, returning how many were removed
    ///
    /// Positive counts scan from the head, negative from the tail, zero removes all.
    pub async fn lrem<V>(&mut self, count: isize, value: V) -> NestResult<i64>
    where
        V: ToRedisArgs + Send + Sync,
    {
        let (mut conn, key) = self.checkout("LREM").await?;
        let removed: i64 = conn.lrem(key.as_str(), count, value).await?;
        Ok(removed)
    }

    /// LRANGE between `start` and `stop`, both inclusive
    pub async fn lrange(&mut self, start: isize, stop: isize) -> NestResult<Vec<String>> {
        let (mut conn, key) = self.checkout("LRANGE").await?;
        let values: Vec<String> = conn.lrange(key.as_str(), start, stop).await?;
        Ok(values)
    }
}
