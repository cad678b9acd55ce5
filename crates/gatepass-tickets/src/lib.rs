//! Gatepass Tickets - Distributed Ticket Cache
//!
//! A Redis-backed ticket cache for authentication clients with:
//! - Deterministic SHA-512 key derivation with per-class namespaces
//! - Namespaced expiring ticket stores over one shared cache backend
//! - Proxy and service ticket managers with a fixed mapping TTL
//! - Lazy, shared cache client creation (no eager connections)
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │               Gatepass Tickets Architecture               │
//! ├───────────────────────────────────────────────────────────┤
//! │                                                           │
//! │  ┌──────────────────────┐   ┌──────────────────────┐     │
//! │  │ ProxyTicketManager   │   │ ServiceTicketManager │     │
//! │  │ (PGTIOU:: namespace) │   │ (ST:: namespace)     │     │
//! │  └──────────┬───────────┘   └──────────┬───────────┘     │
//! │             └────────────┬─────────────┘                 │
//! │                          ▼                               │
//! │             ┌─────────────────────────┐                  │
//! │             │   ExpiringTicketStore   │                  │
//! │             │  (validate, derive key) │                  │
//! │             └────────────┬────────────┘                  │
//! │                          ▼                               │
//! │             ┌─────────────────────────┐                  │
//! │             │       TicketCache       │                  │
//! │             │   (RedisTicketCache)    │                  │
//! │             └────────────┬────────────┘                  │
//! │                          ▼                               │
//! │             ┌─────────────────────────┐                  │
//! │             │   Shared Redis client   │                  │
//! │             │  (CacheClientProvider)  │                  │
//! │             └─────────────────────────┘                  │
//! │                                                           │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use gatepass_config::CacheConfig;
//! use gatepass_tickets::{build_ticket_module, CacheClientProvider, TicketManagerResolver};
//!
//! // Compose the ticket stack at application start-up
//! let provider = CacheClientProvider::new(CacheConfig::default());
//! let module = build_ticket_module(&provider).await?;
//!
//! // Store and retrieve a proxy-granting-ticket IOU mapping
//! let manager = module.proxy_ticket_manager();
//! manager.insert("PGTIOU-84-abc", "PGT-84-xyz").await?;
//! let ticket = manager.lookup("PGTIOU-84-abc").await?;
//! ```

pub mod cache;
pub mod client;
pub mod di;
pub mod keys;
pub mod manager;
pub mod redis_cache;
pub mod store;

pub use cache::TicketCache;
pub use client::{create_pool, CacheClientProvider};
pub use di::{build_ticket_module, CacheResolver, TicketManagerResolver, TicketModule};
pub use keys::{derive_key, DERIVED_KEY_LEN, PROXY_TICKET_NAMESPACE, SERVICE_TICKET_NAMESPACE};
pub use manager::{
    ProxyTicketManager, ProxyTicketManagerComponent, ServiceTicketManager,
    ServiceTicketManagerComponent, TicketManager, DEFAULT_TICKET_TTL,
};
pub use redis_cache::{RedisTicketCache, RedisTicketCacheParameters};
pub use store::ExpiringTicketStore;

/// Re-export commonly used traits
pub mod prelude {
    pub use crate::cache::TicketCache;
    pub use crate::di::{CacheResolver, TicketManagerResolver};
    pub use crate::manager::{ProxyTicketManager, ServiceTicketManager, TicketManager};
}
