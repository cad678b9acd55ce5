//! Shared Redis client pool construction.

use deadpool_redis::{Config, Pool, Runtime};
use gatepass_config::CacheConfig;
use gatepass_core::{GatepassError, GatepassResult};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{debug, info};

/// Create a Redis connection pool for the ticket cache.
///
/// Construction only validates settings and sizes the pool; connections are
/// established lazily on first use, so this never touches the network.
pub fn create_pool(config: &CacheConfig) -> GatepassResult<Pool> {
    info!(
        "Creating Redis connection pool (size: {})",
        config.pool_size
    );

    let cfg = Config::from_url(&config.url);

    let pool = cfg
        .builder()
        .map_err(|e| GatepassError::Configuration(format!("Invalid Redis config: {}", e)))?
        .max_size(config.pool_size)
        .create_timeout(Some(config.connect_timeout()))
        .wait_timeout(Some(config.wait_timeout()))
        .runtime(Runtime::Tokio1)
        .build()
        .map_err(|e| GatepassError::Configuration(format!("Failed to create pool: {}", e)))?;

    Ok(pool)
}

/// Lazily initialized, process-lifetime handle to the shared client pool.
///
/// The pool is constructed at most once, on first access; concurrent first
/// callers all observe the identity-same `Arc<Pool>`. The handle is never
/// torn down by the provider.
pub struct CacheClientProvider {
    config: CacheConfig,
    pool: OnceCell<Arc<Pool>>,
}

impl CacheClientProvider {
    /// Creates a provider. No pool is constructed until first access.
    #[must_use]
    pub fn new(config: CacheConfig) -> Self {
        Self {
            config,
            pool: OnceCell::new(),
        }
    }

    /// Returns the shared client pool, constructing it on first access.
    pub async fn instance(&self) -> GatepassResult<Arc<Pool>> {
        let pool = self
            .pool
            .get_or_try_init(|| async {
                debug!("Constructing shared Redis pool on first access");
                create_pool(&self.config).map(Arc::new)
            })
            .await?;

        Ok(Arc::clone(pool))
    }
}
