//! Module system for service wiring
//!
//! Registries are populated when a service module initializes. A [`Module`]
//! bundles everything one service contributes to the resolver — its local
//! repositories, the clients it exposes for its entity types, and the
//! relation constraints its entities participate in — behind a single
//! registration call.

use crate::resolver::ResolverBuilder;
use anyhow::Result;

/// Trait for a microservice module
pub trait Module: Send + Sync {
    /// Unique module name
    fn name(&self) -> &str;

    /// Module version
    fn version(&self) -> &str {
        "1.0.0"
    }

    /// List of entity types managed by this module
    fn entity_types(&self) -> Vec<&str>;

    /// Register this module's repositories, clients and constraints
    ///
    /// Called once per module during the build phase. Registrations follow
    /// the registry semantics: first registration wins, duplicates are
    /// ignored.
    fn register(&self, builder: &mut ResolverBuilder) -> Result<()>;
}
