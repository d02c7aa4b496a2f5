//! Builder for wiring a relational resolver
//!
//! Registration and serving are two distinct phases. The builder owns the
//! mutable registries during wiring — exclusive ownership makes concurrent
//! registration impossible — and [`build`](ResolverBuilder::build) freezes
//! them into a [`RelationalResolver`] that is shared across tasks and read
//! without locking.

use super::RelationalResolver;
use crate::config::RelationsConfig;
use crate::core::constraint::{Constraint, ConstraintRegistry};
use crate::core::module::Module;
use crate::core::service::{EntityRepository, RelationClient, ServiceRegistry};
use anyhow::Result;
use std::collections::HashMap;
use std::sync::Arc;

/// Builder for creating a [`RelationalResolver`]
///
/// # Example
///
/// ```ignore
/// let resolver = ResolverBuilder::new()
///     .register_repository("order", orders_repo)
///     .register_service_for_type("customer", customers_client)
///     .register_constraint("order", "customer", "id")
///     .build();
/// ```
#[derive(Default)]
pub struct ResolverBuilder {
    services: ServiceRegistry,
    constraints: ConstraintRegistry,
    repositories: HashMap<String, Arc<dyn EntityRepository>>,
}

impl ResolverBuilder {
    /// Create a new ResolverBuilder
    pub fn new() -> Self {
        Self {
            services: ServiceRegistry::new(),
            constraints: ConstraintRegistry::new(),
            repositories: HashMap::new(),
        }
    }

    /// Register the remote client serving an entity type
    ///
    /// The client bound here is the fetch capability used for every relation
    /// targeting this type. First registration wins; duplicates are ignored.
    pub fn register_service_for_type(
        mut self,
        entity_type: impl Into<String>,
        client: Arc<dyn RelationClient>,
    ) -> Self {
        self.services.register(entity_type, client);
        self
    }

    /// Register a relation with conventional related type and local key
    ///
    /// Shorthand for [`register_constraint_with`] using
    /// [`Constraint::new`]: the related type is the singular of `property`,
    /// the scalar lookup key is `{property}_{foreign_key}`.
    ///
    /// [`register_constraint_with`]: ResolverBuilder::register_constraint_with
    pub fn register_constraint(
        self,
        owner_type: impl Into<String>,
        property: impl Into<String>,
        foreign_key: impl Into<String>,
    ) -> Self {
        self.register_constraint_with(owner_type, Constraint::new(property, foreign_key))
    }

    /// Register an explicitly configured relation
    ///
    /// No-op if the owner type already has a constraint for the same
    /// property, even when the foreign key differs.
    pub fn register_constraint_with(
        mut self,
        owner_type: impl Into<String>,
        constraint: Constraint,
    ) -> Self {
        self.constraints.register(owner_type, constraint);
        self
    }

    /// Register the local repository for an entity type
    ///
    /// Root lookups for a type without a repository resolve to `None`.
    /// First registration wins; duplicates are ignored.
    pub fn register_repository(
        mut self,
        entity_type: impl Into<String>,
        repository: Arc<dyn EntityRepository>,
    ) -> Self {
        let entity_type = entity_type.into();
        if self.repositories.contains_key(&entity_type) {
            tracing::debug!(%entity_type, "repository already registered, keeping first");
            return self;
        }
        self.repositories.insert(entity_type, repository);
        self
    }

    /// Register everything a service module contributes
    pub fn register_module(mut self, module: &dyn Module) -> Result<Self> {
        tracing::debug!(module = module.name(), version = module.version(), "registering module");
        module.register(&mut self)?;
        Ok(self)
    }

    /// Register all constraints declared in a relations configuration
    pub fn apply_config(mut self, config: &RelationsConfig) -> Self {
        for (owner_type, constraint) in config.constraints() {
            self.constraints.register(owner_type, constraint);
        }
        self
    }

    /// Direct access for [`Module`] implementations
    ///
    /// These take `&mut self` so a module can register against the builder
    /// it was handed by [`register_module`](ResolverBuilder::register_module).
    pub fn add_service_for_type(
        &mut self,
        entity_type: impl Into<String>,
        client: Arc<dyn RelationClient>,
    ) {
        self.services.register(entity_type, client);
    }

    /// See [`add_service_for_type`](ResolverBuilder::add_service_for_type).
    pub fn add_constraint(&mut self, owner_type: impl Into<String>, constraint: Constraint) {
        self.constraints.register(owner_type, constraint);
    }

    /// See [`add_service_for_type`](ResolverBuilder::add_service_for_type).
    pub fn add_repository(
        &mut self,
        entity_type: impl Into<String>,
        repository: Arc<dyn EntityRepository>,
    ) {
        let entity_type = entity_type.into();
        self.repositories.entry(entity_type).or_insert(repository);
    }

    /// Freeze the registries and produce the resolver
    pub fn build(self) -> RelationalResolver {
        RelationalResolver::new(self.services, self.constraints, self.repositories)
    }
}
