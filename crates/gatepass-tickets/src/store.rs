//! Namespace-scoped expiring ticket store.

use crate::cache::TicketCache;
use crate::keys::derive_key;
use gatepass_core::{require_non_blank, GatepassResult};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Stores ticket mappings under derived keys with a bounded TTL.
///
/// One store instance serves one ticket class; the namespace keeps classes
/// invisible to each other even when identifiers collide. All per-entry
/// state lives in the backend, so the store itself is freely shareable.
pub struct ExpiringTicketStore {
    cache: Arc<dyn TicketCache>,
    namespace: &'static str,
}

impl ExpiringTicketStore {
    /// Creates a store scoped to the given namespace.
    #[must_use]
    pub fn new(cache: Arc<dyn TicketCache>, namespace: &'static str) -> Self {
        Self { cache, namespace }
    }

    /// Returns the namespace this store is scoped to.
    #[must_use]
    pub const fn namespace(&self) -> &'static str {
        self.namespace
    }

    /// Stores a ticket value under the derived key with the given TTL.
    ///
    /// Overwrites any existing mapping for the identifier. Blank identifiers
    /// and values are rejected before any backend call.
    pub async fn put(&self, identifier: &str, value: &str, ttl: Duration) -> GatepassResult<()> {
        let key = derive_key(self.namespace, identifier)?;
        require_non_blank("Ticket value", value)?;

        self.cache.set_raw(&key, value, ttl).await?;

        debug!(
            "Stored ticket mapping in namespace '{}' with TTL {}s",
            self.namespace,
            ttl.as_secs()
        );
        Ok(())
    }

    /// Retrieves the value stored for the identifier.
    ///
    /// A missing or expired mapping is `Ok(None)`, never an error.
    pub async fn get(&self, identifier: &str) -> GatepassResult<Option<String>> {
        let key = derive_key(self.namespace, identifier)?;
        self.cache.get_raw(&key).await
    }

    /// Removes expired mappings.
    ///
    /// The cache engine evicts expired entries itself, so there is nothing
    /// to sweep locally.
    pub fn remove_expired(&self) {
        debug!(
            "remove_expired is a no-op for namespace '{}'; the cache engine evicts entries",
            self.namespace
        );
    }
}
