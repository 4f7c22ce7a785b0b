//! Hash commands

use redis::{AsyncCommands, ToRedisArgs};
use std::collections::{HashMap, HashSet};

use super::Nest;
use crate::error::NestResult;
use crate::pool::ConnectionSource;

impl<P: ConnectionSource> Nest<P> {
    /// HMSET every field of `hash`, returning the status reply
    pub async fn hmset(&mut self, hash: &HashMap<String, String>) -> NestResult<String> {
        let items: Vec<(&str, &str)> = hash
            .iter()
            .map(|(field, value)| (field.as_str(), value.as_str()))
            .collect();

        let (mut conn, key) = self.checkout("HMSET").await?;
        let reply: String = conn.hset_multiple(key.as_str(), &items).await?;
        Ok(reply)
    }

    /// HGETALL
    pub async fn hgetall(&mut self) -> NestResult<HashMap<String, String>> {
        let (mut conn, key) = self.checkout("HGETALL").await?;
        let hash: HashMap<String, String> = conn.hgetall(key.as_str()).await?;
        Ok(hash)
    }

    /// HGET one field
    pub async fn hget<F>(&mut self, field: F) -> NestResult<Option<String>>
    where
        F: ToRedisArgs + Send + Sync,
    {
        let (mut conn, key) = self.checkout("HGET").await?;
        let value: Option<String> = conn.hget(key.as_str(), field).await?;
        Ok(value)
    }

    /// HDEL one field, returning how many fields were removed
    pub async fn hdel<F>(&mut self, field: F) -> NestResult<i64>
    where
        F: ToRedisArgs + Send + Sync,
    {
        let (mut conn, key) = self.checkout("HDEL").await?;
        let removed: i64 = conn.hdel(key.as_str(), field).await?;
        Ok(removed)
    }

    /// HLEN
    pub async fn hlen(&mut self) -> NestResult<i64> {
        let (mut conn, key) = self.checkout("HLEN").await?;
        let len: i64 = conn.hlen(key.as_str()).await?;
        Ok(len)
    }

    /// HKEYS
    pub async fn hkeys(&mut self) -> NestResult<HashSet<String>> {
        let (mut conn, key) = self.checkout("HKEYS").await?;
        let fields: HashSet<String> = conn.hkeys(key.as_str()).await?;
        Ok(fields)
    }
}
