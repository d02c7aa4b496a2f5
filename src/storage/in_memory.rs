//! In-memory implementations of the collaborator traits for testing and
//! development
//!
//! One service owns one store. [`InMemoryRepository`] is its local face,
//! [`InMemoryClient`] its remote face — [`InMemoryRepository::client`] hands
//! out a client sharing the same data, which is how a single in-process
//! "service" plays both roles in tests and demos. `InMemoryClient` is also
//! the reference consumer of the `field eq value` filter contract.

use crate::core::entity::entity_id;
use crate::core::error::EntityError;
use crate::core::filter;
use crate::core::service::{EntityRepository, RelationClient};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

type SharedStore = Arc<RwLock<HashMap<Uuid, Value>>>;

fn insert_entity(entity_type: &str, store: &SharedStore, entity: Value) -> Result<Uuid> {
    let id = entity_id(&entity).ok_or_else(|| EntityError::MissingId {
        entity_type: entity_type.to_string(),
    })?;
    let mut data = store
        .write()
        .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;
    data.insert(id, entity);
    Ok(id)
}

/// In-memory entity repository
///
/// Uses RwLock for thread-safe access.
#[derive(Clone)]
pub struct InMemoryRepository {
    entity_type: String,
    data: SharedStore,
}

impl InMemoryRepository {
    /// Create a new empty repository for one entity type
    pub fn new(entity_type: impl Into<String>) -> Self {
        Self {
            entity_type: entity_type.into(),
            data: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// The entity type this repository stores
    pub fn entity_type(&self) -> &str {
        &self.entity_type
    }

    /// Insert an entity, keyed by its `id` field
    pub fn insert(&self, entity: Value) -> Result<Uuid> {
        insert_entity(&self.entity_type, &self.data, entity)
    }

    /// Get an entity by id
    pub fn get(&self, id: &Uuid) -> Result<Option<Value>> {
        let data = self
            .data
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;
        Ok(data.get(id).cloned())
    }

    /// Get all stored entities
    pub fn list(&self) -> Result<Vec<Value>> {
        let data = self
            .data
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;
        Ok(data.values().cloned().collect())
    }

    /// The remote face of this store
    pub fn client(&self) -> InMemoryClient {
        InMemoryClient {
            entity_type: self.entity_type.clone(),
            data: self.data.clone(),
        }
    }
}

#[async_trait]
impl EntityRepository for InMemoryRepository {
    async fn get_by_id(&self, id: &Uuid, _include_all: bool) -> Result<Option<Value>> {
        self.get(id)
    }
}

/// In-memory relation client
///
/// Parses the `field eq value` filter and returns every stored entity whose
/// field matches.
#[derive(Clone)]
pub struct InMemoryClient {
    entity_type: String,
    data: SharedStore,
}

impl InMemoryClient {
    /// Create a standalone client with its own empty store
    pub fn new(entity_type: impl Into<String>) -> Self {
        Self {
            entity_type: entity_type.into(),
            data: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// The entity type this client serves
    pub fn entity_type(&self) -> &str {
        &self.entity_type
    }

    /// Insert an entity, keyed by its `id` field
    pub fn insert(&self, entity: Value) -> Result<Uuid> {
        insert_entity(&self.entity_type, &self.data, entity)
    }
}

#[async_trait]
impl RelationClient for InMemoryClient {
    async fn fetch_data(&self, filter: &str, _include_all: bool) -> Result<Vec<Value>> {
        let expr = filter::parse(filter)
            .ok_or_else(|| anyhow!("Unsupported filter expression: '{}'", filter))?;

        let data = self
            .data
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(data.values().filter(|e| expr.matches(e)).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn customer(name: &str) -> (Uuid, Value) {
        let id = Uuid::new_v4();
        (id, json!({ "id": id.to_string(), "name": name }))
    }

    #[tokio::test]
    async fn test_repository_insert_and_get() {
        let repo = InMemoryRepository::new("customer");
        assert_eq!(repo.entity_type(), "customer");

        let (id, entity) = customer("Acme");
        assert_eq!(repo.insert(entity.clone()).unwrap(), id);
        assert_eq!(repo.get_by_id(&id, true).await.unwrap(), Some(entity));
        assert_eq!(repo.get_by_id(&Uuid::new_v4(), true).await.unwrap(), None);
        assert_eq!(repo.list().unwrap().len(), 1);
    }

    #[test]
    fn test_insert_rejects_entity_without_id() {
        let repo = InMemoryRepository::new("customer");
        let err = repo.insert(json!({ "name": "Acme" })).unwrap_err();
        assert!(err.to_string().contains("id"));
    }

    #[tokio::test]
    async fn test_client_filters_by_field() {
        let client = InMemoryClient::new("order");
        assert_eq!(client.entity_type(), "order");

        let buyer = Uuid::new_v4();

        for amount in [10, 20] {
            let id = Uuid::new_v4();
            client
                .insert(json!({
                    "id": id.to_string(),
                    "customer_id": buyer.to_string(),
                    "amount": amount,
                }))
                .unwrap();
        }
        let (_, other) = customer("other");
        client.insert(other).unwrap();

        let filter = filter::build("customer_id", &buyer.to_string());
        let matched = client.fetch_data(&filter, true).await.unwrap();
        assert_eq!(matched.len(), 2);

        let none = client
            .fetch_data(&filter::build("customer_id", "unknown"), true)
            .await
            .unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_client_rejects_malformed_filter() {
        let client = InMemoryClient::new("order");
        assert!(client.fetch_data("amount gt 10", true).await.is_err());
    }

    #[tokio::test]
    async fn test_repository_client_shares_store() {
        let repo = InMemoryRepository::new("customer");
        let client = repo.client();

        let (id, entity) = customer("Acme");
        repo.insert(entity).unwrap();

        let matched = client
            .fetch_data(&filter::build("id", &id.to_string()), true)
            .await
            .unwrap();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0]["name"], "Acme");
    }
}
