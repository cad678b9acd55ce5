//! Dependency injection module using Shaku.
//!
//! This module defines the Shaku module wiring the ticket stack together:
//! - `TicketModule`: Redis-backed cache plus both ticket managers
//!
//! The composition root owns the cache client; nothing here reaches for
//! process-global state.

use crate::cache::TicketCache;
use crate::client::CacheClientProvider;
use crate::manager::{
    ProxyTicketManager, ProxyTicketManagerComponent, ServiceTicketManager,
    ServiceTicketManagerComponent,
};
use crate::redis_cache::{RedisTicketCache, RedisTicketCacheParameters};
use gatepass_core::{module, GatepassResult, HasComponent};
use std::sync::Arc;

// ============================================================================
// Shaku Module Definition
// ============================================================================

// Ticket module backed by a shared Redis cache client.
// Contains all components for the ticket stack:
// - Redis-backed ticket cache
// - Proxy ticket manager (PGT IOU mappings)
// - Service ticket manager (service ticket mappings)
module! {
    pub TicketModule {
        components = [
            RedisTicketCache,
            ProxyTicketManagerComponent,
            ServiceTicketManagerComponent,
        ],
        providers = [],
    }
}

// ============================================================================
// Module Builder
// ============================================================================

/// Builds the ticket module on top of a shared cache client.
///
/// The provider creates its pool on first use, so this performs no I/O
/// against the cache backend.
pub async fn build_ticket_module(
    provider: &CacheClientProvider,
) -> GatepassResult<Arc<TicketModule>> {
    let pool = provider.instance().await?;

    let module = TicketModule::builder()
        .with_component_parameters::<RedisTicketCache>(RedisTicketCacheParameters {
            pool: Some(pool),
        })
        .build();

    Ok(Arc::new(module))
}

// ============================================================================
// Module Resolution Helpers
// ============================================================================

/// Trait for resolving ticket managers from the module.
pub trait TicketManagerResolver {
    /// Resolves the proxy ticket manager from the module.
    fn proxy_ticket_manager(&self) -> Arc<dyn ProxyTicketManager>;

    /// Resolves the service ticket manager from the module.
    fn service_ticket_manager(&self) -> Arc<dyn ServiceTicketManager>;
}

impl TicketManagerResolver for TicketModule {
    fn proxy_ticket_manager(&self) -> Arc<dyn ProxyTicketManager> {
        self.resolve()
    }

    fn service_ticket_manager(&self) -> Arc<dyn ServiceTicketManager> {
        self.resolve()
    }
}

/// Trait for resolving the underlying ticket cache.
pub trait CacheResolver {
    /// Resolves the ticket cache from the module.
    fn ticket_cache(&self) -> Arc<dyn TicketCache>;
}

impl CacheResolver for TicketModule {
    fn ticket_cache(&self) -> Arc<dyn TicketCache> {
        self.resolve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gatepass_config::CacheConfig;

    // =========================================================================
    // Compile-Time Trait Verification Tests
    // =========================================================================

    #[test]
    fn test_module_types_exist() {
        // Compile-time verification that module types are defined correctly
        fn _assert_ticket_manager_resolver<T: TicketManagerResolver>() {}
        fn _assert_cache_resolver<T: CacheResolver>() {}

        _assert_ticket_manager_resolver::<TicketModule>();
        _assert_cache_resolver::<TicketModule>();
    }

    #[test]
    fn test_has_component_trait_bounds() {
        // Verify HasComponent implementations are correct
        fn _assert_has_cache<T: HasComponent<dyn TicketCache>>() {}
        fn _assert_has_proxy_manager<T: HasComponent<dyn ProxyTicketManager>>() {}
        fn _assert_has_service_manager<T: HasComponent<dyn ServiceTicketManager>>() {}

        _assert_has_cache::<TicketModule>();
        _assert_has_proxy_manager::<TicketModule>();
        _assert_has_service_manager::<TicketModule>();
    }

    #[test]
    fn test_resolver_traits_are_object_safe() {
        fn _take_manager_resolver(_resolver: &dyn TicketManagerResolver) {}
        fn _take_cache_resolver(_resolver: &dyn CacheResolver) {}
    }

    // =========================================================================
    // Module Construction Tests
    // =========================================================================

    #[tokio::test]
    async fn test_build_ticket_module_without_server() {
        // Pool creation is lazy, so building the module needs no live backend
        let provider = CacheClientProvider::new(CacheConfig::default());
        let module = build_ticket_module(&provider)
            .await
            .expect("Failed to build ticket module");

        let proxy = module.proxy_ticket_manager();
        let service = module.service_ticket_manager();

        proxy.initialize();
        service.initialize();
        proxy.remove_expired_mappings();
        service.remove_expired_mappings();
    }

    #[tokio::test]
    async fn test_build_shares_provider_pool() {
        let provider = CacheClientProvider::new(CacheConfig::default());
        let _module = build_ticket_module(&provider)
            .await
            .expect("Failed to build ticket module");

        let first = provider.instance().await.expect("Failed to get pool");
        let second = provider.instance().await.expect("Failed to get pool");
        assert!(Arc::ptr_eq(&first, &second));
    }
}
