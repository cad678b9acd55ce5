//! Proxy and service ticket managers.

use crate::cache::TicketCache;
use crate::keys::{PROXY_TICKET_NAMESPACE, SERVICE_TICKET_NAMESPACE};
use crate::store::ExpiringTicketStore;
use async_trait::async_trait;
use gatepass_core::GatepassResult;
use shaku::{Component, Interface};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// TTL applied to every stored ticket mapping.
pub const DEFAULT_TICKET_TTL: Duration = Duration::from_secs(180);

/// Ticket manager contract shared by all ticket classes.
///
/// Managers are stateless; every operation is an independent request against
/// the shared cache backend.
#[async_trait]
pub trait TicketManager: Interface + Send + Sync {
    /// Start-up hook.
    ///
    /// Must not establish connections; the client connects on first use.
    fn initialize(&self);

    /// Stores a ticket mapping, overwriting any existing one.
    async fn insert(&self, identifier: &str, value: &str) -> GatepassResult<()>;

    /// Looks up the value mapped to the identifier.
    ///
    /// Returns `None` for unknown or expired identifiers.
    async fn lookup(&self, identifier: &str) -> GatepassResult<Option<String>>;

    /// Cleanup hook for expired mappings.
    ///
    /// The cache engine expires entries itself, so this does nothing.
    fn remove_expired_mappings(&self);
}

/// Ticket manager binding for proxy-granting-ticket IOU mappings.
pub trait ProxyTicketManager: TicketManager {}

/// Ticket manager binding for service ticket mappings.
pub trait ServiceTicketManager: TicketManager {}

/// Proxy ticket manager backed by the shared ticket cache.
#[derive(Component)]
#[shaku(interface = ProxyTicketManager)]
pub struct ProxyTicketManagerComponent {
    #[shaku(inject)]
    cache: Arc<dyn TicketCache>,
    /// TTL applied to stored mappings.
    #[shaku(default = DEFAULT_TICKET_TTL)]
    ticket_ttl: Duration,
}

impl ProxyTicketManagerComponent {
    /// Create a proxy ticket manager with the default TTL.
    #[must_use]
    pub fn new(cache: Arc<dyn TicketCache>) -> Self {
        Self {
            cache,
            ticket_ttl: DEFAULT_TICKET_TTL,
        }
    }

    /// Create a proxy ticket manager with a custom TTL.
    #[must_use]
    pub fn with_ttl(cache: Arc<dyn TicketCache>, ticket_ttl: Duration) -> Self {
        Self { cache, ticket_ttl }
    }

    fn store(&self) -> ExpiringTicketStore {
        ExpiringTicketStore::new(Arc::clone(&self.cache), PROXY_TICKET_NAMESPACE)
    }
}

#[async_trait]
impl TicketManager for ProxyTicketManagerComponent {
    fn initialize(&self) {
        debug!("Proxy ticket manager initialized");
    }

    async fn insert(&self, identifier: &str, value: &str) -> GatepassResult<()> {
        self.store().put(identifier, value, self.ticket_ttl).await
    }

    async fn lookup(&self, identifier: &str) -> GatepassResult<Option<String>> {
        self.store().get(identifier).await
    }

    fn remove_expired_mappings(&self) {
        self.store().remove_expired();
    }
}

impl ProxyTicketManager for ProxyTicketManagerComponent {}

/// Service ticket manager backed by the shared ticket cache.
#[derive(Component)]
#[shaku(interface = ServiceTicketManager)]
pub struct ServiceTicketManagerComponent {
    #[shaku(inject)]
    cache: Arc<dyn TicketCache>,
    /// TTL applied to stored mappings.
    #[shaku(default = DEFAULT_TICKET_TTL)]
    ticket_ttl: Duration,
}

impl ServiceTicketManagerComponent {
    /// Create a service ticket manager with the default TTL.
    #[must_use]
    pub fn new(cache: Arc<dyn TicketCache>) -> Self {
        Self {
            cache,
            ticket_ttl: DEFAULT_TICKET_TTL,
        }
    }

    /// Create a service ticket manager with a custom TTL.
    #[must_use]
    pub fn with_ttl(cache: Arc<dyn TicketCache>, ticket_ttl: Duration) -> Self {
        Self { cache, ticket_ttl }
    }

    fn store(&self) -> ExpiringTicketStore {
        ExpiringTicketStore::new(Arc::clone(&self.cache), SERVICE_TICKET_NAMESPACE)
    }
}

#[async_trait]
impl TicketManager for ServiceTicketManagerComponent {
    fn initialize(&self) {
        debug!("Service ticket manager initialized");
    }

    async fn insert(&self, identifier: &str, value: &str) -> GatepassResult<()> {
        self.store().put(identifier, value, self.ticket_ttl).await
    }

    async fn lookup(&self, identifier: &str) -> GatepassResult<Option<String>> {
        self.store().get(identifier).await
    }

    fn remove_expired_mappings(&self) {
        self.store().remove_expired();
    }
}

impl ServiceTicketManager for ServiceTicketManagerComponent {}
