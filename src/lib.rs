//! # Stitch
//!
//! A constraint-based relational resolver for distributed data layers.
//!
//! Each service in such a layer owns one entity type and its local store;
//! entities reference each other via foreign keys, but no service holds the
//! full object graph. Stitch loads a root entity from the local repository,
//! walks its declared relations, and fills in the missing side of each one by
//! issuing `field eq value` filter queries against the client of the service
//! that owns the related type.
//!
//! ## Features
//!
//! - **Explicit Relation Descriptors**: Relations are declared per entity
//!   type at wiring time — no runtime reflection
//! - **Type-Keyed Client Table**: One remote client per entity type, bound at
//!   registration
//! - **Has-One and Has-Many**: Scalar references are set from the first match;
//!   collection references are appended to in place
//! - **One-Hop Resolution**: Related entities are inserted as-is, never
//!   expanded recursively
//! - **Two-Phase Lifecycle**: An exclusive build phase, then a frozen
//!   resolver shared freely across tasks without locking
//! - **Configuration-Based**: Declare relations in YAML or imperatively
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stitch::prelude::*;
//!
//! let resolver = ResolverBuilder::new()
//!     .register_repository("order", orders_repo)
//!     .register_service_for_type("customer", customers_client)
//!     .register_constraint("order", "customer", "id")
//!     .build();
//!
//! // Loads the order locally, then fetches the customer whose `id` matches
//! // the order's `customer_id` and stitches it into the `customer` field.
//! let order = resolver.get_by_id("order", &order_id, true).await?;
//! ```

pub mod config;
pub mod core;
pub mod resolver;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Types & Traits ===
    pub use crate::core::{
        constraint::{Constraint, ConstraintRegistry},
        entity::entity_id,
        error::{ConfigError, EntityError, StitchError},
        filter::{self, FilterExpr},
        module::Module,
        service::{EntityRepository, RelationClient, ServiceRegistry},
    };

    // === Config ===
    pub use crate::config::{EntityRelations, RelationConfig, RelationsConfig};

    // === Resolver ===
    pub use crate::resolver::{RelationalResolver, ResolverBuilder};

    // === Storage ===
    pub use crate::storage::{InMemoryClient, InMemoryRepository};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use serde_json::{Value, json};
    pub use uuid::Uuid;
}
