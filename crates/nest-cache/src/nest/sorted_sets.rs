//! Sorted-set commands

use redis::{AsyncCommands, ToRedisArgs};

use super::Nest;
use crate::error::NestResult;
use crate::pool::ConnectionSource;

impl<P: ConnectionSource> Nest<P> {
    /// ZADD one member with `score`, returning how many were added
    pub async fn zadd<M>(&mut self, score: f64, member: M) -> NestResult<i64>
    where
        M: ToRedisArgs + Send + Sync,
    {
        let (mut conn, key) = self.checkout("ZADD").await?;
        let added: i64 = conn.zadd(key.as_str(), member, score).await?;
        Ok(added)
    }

    /// ZRANGE by rank, lowest score first
    pub async fn zrange(&mut self, start: isize, stop: isize) -> NestResult<Vec<String>> {
        let (mut conn, key) = self.checkout("ZRANGE").await?;
        let members: Vec<String> = conn.zrange(key.as_str(), start, stop).await?;
        Ok(members)
    }

    /// ZCARD
    pub async fn zcard(&mut self) -> NestResult<i64> {
        let (mut conn, key) = self.checkout("ZCARD").await?;
        let len: i64 = conn.zcard(key.as_str()).await?;
        Ok(len)
    }
}
