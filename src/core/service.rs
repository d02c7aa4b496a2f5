//! Collaborator traits and the type-keyed client registry
//!
//! The resolver never talks to a store or a wire protocol directly. It goes
//! through two seams: [`EntityRepository`] for the local side and
//! [`RelationClient`] for every remote service. Implementations own
//! serialization, connection lifecycle and timeouts; whatever they raise is
//! propagated to the resolver's caller untouched.

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

/// Local lookup for one entity type
///
/// The repository answers "give me the entity with this id" against whatever
/// store the owning service uses. `include_all` is forwarded so a repository
/// that performs its own local expansion can honor it.
#[async_trait]
pub trait EntityRepository: Send + Sync {
    /// Fetch an entity by id, or `None` if the id is unknown
    async fn get_by_id(&self, id: &Uuid, include_all: bool) -> Result<Option<Value>>;
}

/// Remote fetch capability for one entity type
///
/// One client is registered per entity type; the registration binds the
/// concrete fetch method for that specific type, so dispatch needs no
/// runtime type lookup beyond the registry itself.
///
/// The filter argument is the `field eq value` contract produced by
/// [`crate::core::filter::build`]; implementations must parse exactly that
/// shape.
#[async_trait]
pub trait RelationClient: Send + Sync {
    /// Fetch all entities matching the filter
    async fn fetch_data(&self, filter: &str, include_all: bool) -> Result<Vec<Value>>;
}

/// Registry mapping an entity type to the client serving that type
///
/// Populated during wiring, read many times per request afterwards. The first
/// registration for a type wins; later registrations for the same type are
/// ignored, not overwritten.
#[derive(Default, Clone)]
pub struct ServiceRegistry {
    clients: HashMap<String, Arc<dyn RelationClient>>,
}

impl ServiceRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            clients: HashMap::new(),
        }
    }

    /// Register a client for an entity type
    ///
    /// No-op if a client is already registered for this type.
    pub fn register(&mut self, entity_type: impl Into<String>, client: Arc<dyn RelationClient>) {
        let entity_type = entity_type.into();
        if self.clients.contains_key(&entity_type) {
            tracing::debug!(%entity_type, "client already registered, keeping first");
            return;
        }
        self.clients.insert(entity_type, client);
    }

    /// Look up the client for an entity type
    pub fn lookup(&self, entity_type: &str) -> Option<Arc<dyn RelationClient>> {
        self.clients.get(entity_type).cloned()
    }

    /// Check whether a client is registered for an entity type
    pub fn is_registered(&self, entity_type: &str) -> bool {
        self.clients.contains_key(entity_type)
    }

    /// Get all entity types with a registered client
    pub fn entity_types(&self) -> Vec<&str> {
        self.clients.keys().map(|s| s.as_str()).collect()
    }
}
