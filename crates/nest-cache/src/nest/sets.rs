//! Set commands

use redis::{AsyncCommands, ToRedisArgs};
use std::collections::HashSet;

use super::Nest;
use crate::error::NestResult;
use crate::pool::ConnectionSource;

impl<P: ConnectionSource> Nest<P> {
    /// SADD one member, returning how many were added
    pub async fn sadd<M>(&mut self, member: M) -> NestResult<i64>
    where
        M: ToRedisArgs + Send + Sync,
    {
        let (mut conn, key) = self.checkout("SADD").await?;
        let added: i64 = conn.sadd(key.as_str(), member).await?;
        Ok(added)
    }

    /// SREM one member, returning how many were removed
    pub async fn srem<M>(&mut self, member: M) -> NestResult<i64>
    where
        M: ToRedisArgs + Send + Sync,
    {
        let (mut conn, key) = self.checkout("SREM").await?;
        let removed: i64 = conn.srem(key.as_str(), member).await?;
        Ok(removed)
    }

    /// SMEMBERS
    pub async fn smembers(&mut self) -> NestResult<HashSet<String>> {
        let (mut conn, key) = self.checkout("SMEMBERS").await?;
        let members: HashSet<String> = conn.smembers(key.as_str()).await?;
        Ok(members)
    }
}
