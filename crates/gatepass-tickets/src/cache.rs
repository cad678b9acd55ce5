//! Ticket cache backend trait.

use async_trait::async_trait;
use gatepass_core::GatepassResult;
use shaku::Interface;
use std::time::Duration;

/// Backend interface for raw ticket storage.
///
/// This trait abstracts over the distributed cache client, allowing the
/// store and manager layers to be exercised against in-memory backends in
/// tests. Values are opaque strings stored verbatim.
#[async_trait]
pub trait TicketCache: Interface + Send + Sync {
    /// Get a raw value from the cache.
    ///
    /// Returns `None` if the key doesn't exist or has expired.
    async fn get_raw(&self, key: &str) -> GatepassResult<Option<String>>;

    /// Set a raw value in the cache with a TTL.
    ///
    /// An existing value under the same key is overwritten.
    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> GatepassResult<()>;
}
