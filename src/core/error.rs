//! Typed error handling for the stitch core
//!
//! Most conditions inside field resolution are deliberately NOT errors: a
//! missing repository, an unknown constraint or an unregistered client all
//! degrade to "cannot resolve" and leave data untouched. What remains are
//! faults this core can originate itself — malformed entities and broken
//! configuration. Collaborator faults (remote fetch, local lookup) propagate
//! through the `anyhow::Result` seams untyped, exactly as the collaborators
//! raised them.

use std::fmt;
use uuid::Uuid;

/// The main error type for the stitch core
#[derive(Debug)]
pub enum StitchError {
    /// Entity-shape errors
    Entity(EntityError),

    /// Configuration errors
    Config(ConfigError),
}

impl fmt::Display for StitchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StitchError::Entity(e) => write!(f, "{}", e),
            StitchError::Config(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for StitchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StitchError::Entity(e) => Some(e),
            StitchError::Config(e) => Some(e),
        }
    }
}

// =============================================================================
// Entity Errors
// =============================================================================

/// Errors related to the shape of dynamic entities
#[derive(Debug)]
pub enum EntityError {
    /// A record that must be a JSON object is not one
    NotAnObject { entity_type: String, id: Uuid },

    /// An entity is missing its `id` field
    MissingId { entity_type: String },
}

impl fmt::Display for EntityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityError::NotAnObject { entity_type, id } => {
                write!(f, "{} with id '{}' is not a JSON object", entity_type, id)
            }
            EntityError::MissingId { entity_type } => {
                write!(f, "{} entity has no usable 'id' field", entity_type)
            }
        }
    }
}

impl std::error::Error for EntityError {}

impl From<EntityError> for StitchError {
    fn from(err: EntityError) -> Self {
        StitchError::Entity(err)
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to the relations configuration
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to parse a configuration document
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// IO error while reading configuration
    IoError { message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError { file, message } => {
                if let Some(file) = file {
                    write!(f, "Failed to parse config file '{}': {}", file, message)
                } else {
                    write!(f, "Failed to parse config: {}", message)
                }
            }
            ConfigError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for StitchError {
    fn from(err: ConfigError) -> Self {
        StitchError::Config(err)
    }
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<serde_yaml::Error> for StitchError {
    fn from(err: serde_yaml::Error) -> Self {
        StitchError::Config(ConfigError::ParseError {
            file: None,
            message: err.to_string(),
        })
    }
}

impl From<std::io::Error> for StitchError {
    fn from(err: std::io::Error) -> Self {
        StitchError::Config(ConfigError::IoError {
            message: err.to_string(),
        })
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_error_display() {
        let err = EntityError::NotAnObject {
            entity_type: "order".to_string(),
            id: Uuid::nil(),
        };
        assert!(err.to_string().contains("order"));
        assert!(err.to_string().contains("not a JSON object"));
    }

    #[test]
    fn test_missing_id_display() {
        let err = EntityError::MissingId {
            entity_type: "customer".to_string(),
        };
        assert!(err.to_string().contains("customer"));
        assert!(err.to_string().contains("id"));
    }

    #[test]
    fn test_config_error_with_file() {
        let err = ConfigError::ParseError {
            file: Some("relations.yaml".to_string()),
            message: "bad indent".to_string(),
        };
        assert!(err.to_string().contains("relations.yaml"));
        assert!(err.to_string().contains("bad indent"));
    }

    #[test]
    fn test_stitch_error_conversion() {
        let err: StitchError = EntityError::MissingId {
            entity_type: "order".to_string(),
        }
        .into();
        assert!(matches!(err, StitchError::Entity(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_from_yaml_error() {
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>("a: [unclosed").unwrap_err();
        let err: StitchError = yaml_err.into();
        assert!(matches!(
            err,
            StitchError::Config(ConfigError::ParseError { .. })
        ));
    }
}
