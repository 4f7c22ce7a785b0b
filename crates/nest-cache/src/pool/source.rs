//! Connection acquisition seam

use async_trait::async_trait;
use redis::aio::ConnectionLike;
use std::sync::Arc;

use crate::error::NestResult;

/// Something that hands out Redis connections.
///
/// A connection goes back to its source when dropped, so every caller
/// releases it on every path, including early returns on error.
#[async_trait]
pub trait ConnectionSource: Send + Sync {
    /// Connection type handed out
    type Connection: ConnectionLike + Send;

    /// Acquire one connection
    async fn acquire(&self) -> NestResult<Self::Connection>;
}

#[async_trait]
impl<P> ConnectionSource for Arc<P>
where
    P: ConnectionSource + ?Sized,
{
    type Connection = P::Connection;

    async fn acquire(&self) -> NestResult<Self::Connection> {
        (**self).acquire().await
    }
}
