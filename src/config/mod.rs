//! Configuration loading for declarative relation wiring
//!
//! Relations can be declared in YAML instead of imperative registration
//! calls, one block per owner entity type:
//!
//! ```yaml
//! entities:
//!   - type: order
//!     relations:
//!       - property: customer
//!         foreign_key: id
//!   - type: customer
//!     relations:
//!       - property: orders
//!         foreign_key: customer_id
//! ```
//!
//! `related_type` and `local_key` are optional and fall back to the same
//! conventions as [`Constraint::new`]. Clients and repositories are live
//! objects and stay imperative.

use crate::core::constraint::Constraint;
use crate::core::error::{ConfigError, StitchError};
use serde::{Deserialize, Serialize};

/// A declared relation of one owner entity type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelationConfig {
    /// The field on the owner entity holding the relation
    pub property: String,

    /// The field on the related type that remote filters match on
    pub foreign_key: String,

    /// The related entity type; defaults to the singular of `property`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_type: Option<String>,

    /// The owner field read as the scalar lookup key; defaults to
    /// `{property}_{foreign_key}`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_key: Option<String>,
}

impl RelationConfig {
    /// Convert the declaration into a registrable constraint
    pub fn to_constraint(&self) -> Constraint {
        let mut constraint = Constraint::new(&self.property, &self.foreign_key);
        if let Some(related_type) = &self.related_type {
            constraint = constraint.with_related_type(related_type);
        }
        if let Some(local_key) = &self.local_key {
            constraint = constraint.with_local_key(local_key);
        }
        constraint
    }
}

/// The declared relations of one owner entity type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityRelations {
    /// The owner entity type (singular, e.g. "order")
    #[serde(rename = "type")]
    pub entity_type: String,

    /// Relations declared on this type
    #[serde(default)]
    pub relations: Vec<RelationConfig>,
}

/// Complete relations configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelationsConfig {
    /// One block per owner entity type
    pub entities: Vec<EntityRelations>,
}

impl RelationsConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self, StitchError> {
        let content = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&content).map_err(|e| {
            StitchError::Config(ConfigError::ParseError {
                file: Some(path.to_string()),
                message: e.to_string(),
            })
        })
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, StitchError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Iterate all declared `(owner_type, constraint)` pairs
    pub fn constraints(&self) -> impl Iterator<Item = (&str, Constraint)> {
        self.entities.iter().flat_map(|entity| {
            entity
                .relations
                .iter()
                .map(move |r| (entity.entity_type.as_str(), r.to_constraint()))
        })
    }

    /// Create a default configuration for testing
    pub fn default_config() -> Self {
        Self {
            entities: vec![
                EntityRelations {
                    entity_type: "order".to_string(),
                    relations: vec![RelationConfig {
                        property: "customer".to_string(),
                        foreign_key: "id".to_string(),
                        related_type: None,
                        local_key: None,
                    }],
                },
                EntityRelations {
                    entity_type: "customer".to_string(),
                    relations: vec![RelationConfig {
                        property: "orders".to_string(),
                        foreign_key: "customer_id".to_string(),
                        related_type: None,
                        local_key: None,
                    }],
                },
            ],
        }
    }
}
