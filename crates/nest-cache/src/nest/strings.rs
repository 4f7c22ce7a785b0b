//! Key-level and string commands, plus MULTI/EXEC passthrough

use redis::{AsyncCommands, Pipeline, ToRedisArgs, Value};
use serde::{de::DeserializeOwned, Serialize};

use super::Nest;
use crate::error::NestResult;
use crate::pool::ConnectionSource;

impl<P: ConnectionSource> Nest<P> {
    /// SET the key to `value`, returning the status reply
    pub async fn set<V>(&mut self, value: V) -> NestResult<String>
    where
        V: ToRedisArgs + Send + Sync,
    {
        let (mut conn, key) = self.checkout("SET").await?;
        let reply: String = conn.set(key.as_str(), value).await?;
        Ok(reply)
    }

    /// GET the value, `None` when the key does not exist
    pub async fn get(&mut self) -> NestResult<Option<String>> {
        let (mut conn, key) = self.checkout("GET").await?;
        let value: Option<String> = conn.get(key.as_str()).await?;
        Ok(value)
    }

    /// INCR the value, returning the new count
    pub async fn incr(&mut self) -> NestResult<i64> {
        let (mut conn, key) = self.checkout("INCR").await?;
        let value: i64 = redis::cmd("INCR")
            .arg(key.as_str())
            .query_async(&mut conn)
            .await?;
        Ok(value)
    }

    /// EXPIRE the key after `seconds`; false if it does not exist
    pub async fn expire(&mut self, seconds: i64) -> NestResult<bool> {
        let (mut conn, key) = self.checkout("EXPIRE").await?;
        let set: bool = conn.expire(key.as_str(), seconds).await?;
        Ok(set)
    }

    /// DEL the key, returning how many keys were removed
    pub async fn del(&mut self) -> NestResult<i64> {
        let (mut conn, key) = self.checkout("DEL").await?;
        let removed: i64 = conn.del(key.as_str()).await?;
        Ok(removed)
    }

    /// EXISTS
    pub async fn exists(&mut self) -> NestResult<bool> {
        let (mut conn, key) = self.checkout("EXISTS").await?;
        let exists: bool = conn.exists(key.as_str()).await?;
        Ok(exists)
    }

    /// SET the JSON encoding of `value`
    pub async fn set_json<V>(&mut self, value: &V) -> NestResult<String>
    where
        V: Serialize + ?Sized,
    {
        let serialized = serde_json::to_string(value)?;
        self.set(serialized).await
    }

    /// GET and decode a JSON value
    pub async fn get_json<V: DeserializeOwned>(&mut self) -> NestResult<Option<V>> {
        match self.get().await? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Run the commands added by `block` inside MULTI/EXEC.
    ///
    /// The pipeline is sent as built; the pending key is not used.
    pub async fn multi<F>(&self, block: F) -> NestResult<Vec<Value>>
    where
        F: FnOnce(&mut Pipeline),
    {
        let pool = self.pool()?;

        let mut pipe = redis::pipe();
        pipe.atomic();
        block(&mut pipe);

        let mut conn = pool.acquire().await?;
        tracing::trace!(command = "MULTI", "Forwarding transaction");
        let replies: Vec<Value> = pipe.query_async(&mut conn).await?;
        Ok(replies)
    }
}
