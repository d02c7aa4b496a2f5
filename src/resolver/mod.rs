//! Relational resolution across service boundaries
//!
//! The resolver loads a root entity from its local repository, walks the
//! relations declared for its type, and fills each one in from the remote
//! client that owns the related type. Resolution is best-effort: anything
//! that cannot be resolved (no constraint, no client, no lookup key) is left
//! exactly as loaded. Remote faults are the one exception — they abort the
//! whole call and the partially mutated entity is discarded.

mod builder;

pub use builder::ResolverBuilder;

use crate::core::constraint::ConstraintRegistry;
use crate::core::error::EntityError;
use crate::core::filter;
use crate::core::service::{EntityRepository, ServiceRegistry};
use anyhow::Result;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

/// Runtime shape of a relation field, decided per request
///
/// Classification looks at the field's current value, not at any declared
/// shape: a populated array is a collection reference, an empty array has no
/// element to relate to and stays untouched, everything else (absent, null,
/// object, scalar) is treated as a scalar reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldClass {
    Collection,
    EmptyCollection,
    Scalar,
}

fn classify(value: Option<&Value>) -> FieldClass {
    match value {
        Some(Value::Array(items)) if items.is_empty() => FieldClass::EmptyCollection,
        Some(Value::Array(_)) => FieldClass::Collection,
        _ => FieldClass::Scalar,
    }
}

/// Resolver stitching related entities into locally loaded roots
///
/// Built once at wiring time by [`ResolverBuilder`]; the frozen registries
/// are shared behind `Arc`s, so cloning is cheap and every clone serves
/// requests concurrently without locking.
#[derive(Clone)]
pub struct RelationalResolver {
    services: Arc<ServiceRegistry>,
    constraints: Arc<ConstraintRegistry>,
    repositories: Arc<HashMap<String, Arc<dyn EntityRepository>>>,
}

impl RelationalResolver {
    pub(crate) fn new(
        services: ServiceRegistry,
        constraints: ConstraintRegistry,
        repositories: HashMap<String, Arc<dyn EntityRepository>>,
    ) -> Self {
        Self {
            services: Arc::new(services),
            constraints: Arc::new(constraints),
            repositories: Arc::new(repositories),
        }
    }

    /// The frozen client registry
    pub fn services(&self) -> &ServiceRegistry {
        &self.services
    }

    /// The frozen constraint registry
    pub fn constraints(&self) -> &ConstraintRegistry {
        &self.constraints
    }

    /// Check whether a local repository is registered for an entity type
    pub fn has_repository(&self, entity_type: &str) -> bool {
        self.repositories.contains_key(entity_type)
    }

    /// Get an entity by id, optionally stitching in its relational data
    ///
    /// Looks the entity up in the local repository for `entity_type`; with
    /// `include_all` set, every declared relation of the type is then
    /// resolved against the registered remote clients and the populated
    /// entity is returned.
    ///
    /// Returns `Ok(None)` when no repository is registered for the type or
    /// the repository has no entry for the id. Remote fetch faults propagate
    /// as errors; no partially resolved entity is ever returned.
    pub async fn get_by_id(
        &self,
        entity_type: &str,
        id: &Uuid,
        include_all: bool,
    ) -> Result<Option<Value>> {
        let Some(repository) = self.repositories.get(entity_type) else {
            tracing::debug!(%entity_type, %id, "no repository registered");
            return Ok(None);
        };

        let Some(mut entity) = repository.get_by_id(id, include_all).await? else {
            tracing::debug!(%entity_type, %id, "not found locally");
            return Ok(None);
        };

        if include_all {
            self.resolve_relations(entity_type, id, &mut entity).await?;
        }

        Ok(Some(entity))
    }

    /// Resolve every declared relation of the root entity, in declaration
    /// order, one remote fetch at a time
    async fn resolve_relations(
        &self,
        entity_type: &str,
        id: &Uuid,
        entity: &mut Value,
    ) -> Result<()> {
        let constraints = self.constraints.constraints_for(entity_type);
        if constraints.is_empty() {
            return Ok(());
        }

        if !entity.is_object() {
            return Err(EntityError::NotAnObject {
                entity_type: entity_type.to_string(),
                id: *id,
            }
            .into());
        }

        for constraint in constraints {
            let Some(client) = self.services.lookup(&constraint.related_type) else {
                tracing::debug!(
                    %entity_type,
                    property = %constraint.property,
                    related_type = %constraint.related_type,
                    "no client registered, field left untouched"
                );
                continue;
            };

            match classify(entity.get(&constraint.property)) {
                FieldClass::Collection => {
                    // Collections are filled by entities referencing this
                    // root back, so the root's own id is the key.
                    let filter = filter::build(&constraint.foreign_key, &id.to_string());
                    tracing::debug!(
                        %entity_type,
                        property = %constraint.property,
                        %filter,
                        "resolving collection relation"
                    );
                    let fetched = client.fetch_data(&filter, true).await?;
                    if let Some(Value::Array(items)) = entity.get_mut(&constraint.property) {
                        items.extend(fetched);
                    }
                }

                FieldClass::EmptyCollection => {}

                FieldClass::Scalar => {
                    let local_key = constraint.local_key();
                    let Some(key) = entity.get(&local_key).and_then(filter::literal) else {
                        tracing::debug!(
                            %entity_type,
                            property = %constraint.property,
                            %local_key,
                            "no scalar lookup key, field left untouched"
                        );
                        continue;
                    };
                    let filter = filter::build(&constraint.foreign_key, &key);
                    tracing::debug!(
                        %entity_type,
                        property = %constraint.property,
                        %filter,
                        "resolving scalar relation"
                    );
                    let fetched = client.fetch_data(&filter, true).await?;
                    // First match wins; a miss clears the field explicitly.
                    let related = fetched.into_iter().next().unwrap_or(Value::Null);
                    if let Some(fields) = entity.as_object_mut() {
                        fields.insert(constraint.property.clone(), related);
                    }
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classify_populated_array() {
        let entity = json!({ "orders": [{ "id": "x" }] });
        assert_eq!(classify(entity.get("orders")), FieldClass::Collection);
    }

    #[test]
    fn test_classify_empty_array() {
        let entity = json!({ "orders": [] });
        assert_eq!(classify(entity.get("orders")), FieldClass::EmptyCollection);
    }

    #[test]
    fn test_classify_scalar_shapes() {
        let entity = json!({ "a": null, "b": "x", "c": { "id": "y" } });
        assert_eq!(classify(entity.get("a")), FieldClass::Scalar);
        assert_eq!(classify(entity.get("b")), FieldClass::Scalar);
        assert_eq!(classify(entity.get("c")), FieldClass::Scalar);
        assert_eq!(classify(entity.get("missing")), FieldClass::Scalar);
    }
}
