//! Relation descriptors and the constraint registry
//!
//! A [`Constraint`] declares that one field of an owner entity type is a
//! relation: it names the related entity type, the field on the related side
//! that remote filters match on, and (for scalar relations) the owner field
//! the lookup key is read from. Descriptors are declared once at wiring time
//! and consumed by the resolver on every request — there is no runtime type
//! inspection.

use crate::core::inflect;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Declares that `property` on an owner entity type is a relation
///
/// Resolution matches `foreign_key` on the RELATED type against a key value
/// taken from the owner side: the owner's id for collection relations, the
/// owner's local key field for scalar relations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Constraint {
    /// The field on the owner entity holding the relation
    pub property: String,

    /// The entity type that fills the field
    ///
    /// CRITICAL: entity types are strings, not an enum, to keep the core
    /// decoupled from concrete entity types.
    pub related_type: String,

    /// The field on the related type that remote filters match on
    pub foreign_key: String,

    /// The owner field read as the lookup key for scalar relations
    ///
    /// Defaults to `"{property}_{foreign_key}"` when absent, so an `order`
    /// with a `customer` relation keyed by the customer's `id` reads its own
    /// `customer_id` field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_key: Option<String>,
}

impl Constraint {
    /// Create a constraint with the conventional related type
    ///
    /// The related type is inferred by singularizing the property name
    /// (`orders` → `order`; already-singular names pass through).
    pub fn new(property: impl Into<String>, foreign_key: impl Into<String>) -> Self {
        let property = property.into();
        let related_type = inflect::singular(&property);
        Self {
            property,
            related_type,
            foreign_key: foreign_key.into(),
            local_key: None,
        }
    }

    /// Override the related entity type
    pub fn with_related_type(mut self, related_type: impl Into<String>) -> Self {
        self.related_type = related_type.into();
        self
    }

    /// Override the owner field read as the scalar lookup key
    pub fn with_local_key(mut self, local_key: impl Into<String>) -> Self {
        self.local_key = Some(local_key.into());
        self
    }

    /// The owner field read as the scalar lookup key
    pub fn local_key(&self) -> String {
        self.local_key
            .clone()
            .unwrap_or_else(|| format!("{}_{}", self.property, self.foreign_key))
    }
}

/// Registry mapping an owner entity type to its declared relations
///
/// At most one constraint per `(owner_type, property)`: re-registration is a
/// no-op even when the foreign key differs, comparing by property name only.
/// Iteration order equals registration order, which makes field resolution
/// deterministic.
#[derive(Default, Clone)]
pub struct ConstraintRegistry {
    constraints: IndexMap<String, Vec<Constraint>>,
}

impl ConstraintRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            constraints: IndexMap::new(),
        }
    }

    /// Register a constraint for an owner entity type
    ///
    /// No-op if the owner type already has a constraint for the same
    /// property.
    pub fn register(&mut self, owner_type: impl Into<String>, constraint: Constraint) {
        let owner_type = owner_type.into();
        let entries = self.constraints.entry(owner_type.clone()).or_default();
        if entries.iter().any(|c| c.property == constraint.property) {
            tracing::debug!(
                %owner_type,
                property = %constraint.property,
                "constraint already registered, keeping first"
            );
            return;
        }
        entries.push(constraint);
    }

    /// Get the declared relations of an owner type
    ///
    /// Empty slice if the type was never registered; callers treat "no
    /// constraints" and "no client" identically as "cannot resolve".
    pub fn constraints_for(&self, owner_type: &str) -> &[Constraint] {
        self.constraints
            .get(owner_type)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Find the constraint for a specific owner property
    pub fn find(&self, owner_type: &str, property: &str) -> Option<&Constraint> {
        self.constraints_for(owner_type)
            .iter()
            .find(|c| c.property == property)
    }

    /// Get all owner types with declared relations
    pub fn owner_types(&self) -> Vec<&str> {
        self.constraints.keys().map(|s| s.as_str()).collect()
    }
}
