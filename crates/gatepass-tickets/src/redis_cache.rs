//! Redis-based ticket cache implementation.

use crate::cache::TicketCache;
use async_trait::async_trait;
use deadpool_redis::{redis::AsyncCommands, Pool};
use gatepass_core::{GatepassError, GatepassResult};
use shaku::Component;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Redis-based ticket cache.
///
/// The pool handle is supplied by the composition root. Resolving the
/// component without one yields `StoreUnavailable` on first use; ticket
/// writes are never silently dropped.
#[derive(Component)]
#[shaku(interface = TicketCache)]
pub struct RedisTicketCache {
    /// Redis connection pool.
    pool: Option<Arc<Pool>>,
}

impl RedisTicketCache {
    /// Create a new Redis ticket cache.
    #[must_use]
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool: Some(pool) }
    }

    /// Get a connection from the pool.
    async fn get_conn(&self) -> GatepassResult<deadpool_redis::Connection> {
        match &self.pool {
            Some(pool) => pool.get().await.map_err(|e| {
                GatepassError::StoreUnavailable(format!("Failed to get Redis connection: {}", e))
            }),
            None => Err(GatepassError::StoreUnavailable(
                "Ticket cache pool is not initialized".to_string(),
            )),
        }
    }
}

#[async_trait]
impl TicketCache for RedisTicketCache {
    async fn get_raw(&self, key: &str) -> GatepassResult<Option<String>> {
        let mut conn = self.get_conn().await?;
        let value: Option<String> = conn.get(key).await.map_err(|e| {
            GatepassError::StoreUnavailable(format!("Failed to get key '{}': {}", key, e))
        })?;

        match &value {
            Some(_) => debug!("Cache hit for key '{}'", key),
            None => debug!("Cache miss for key '{}'", key),
        }

        Ok(value)
    }

    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> GatepassResult<()> {
        let mut conn = self.get_conn().await?;
        // Redis rejects SETEX with a zero TTL
        let ttl_secs = ttl.as_secs().max(1);

        conn.set_ex::<_, _, ()>(key, value, ttl_secs)
            .await
            .map_err(|e| {
                GatepassError::StoreUnavailable(format!("Failed to set key '{}': {}", key, e))
            })?;

        debug!("Cached key '{}' with TTL {}s", key, ttl_secs);
        Ok(())
    }
}
