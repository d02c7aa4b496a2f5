//! Core module containing the relation model, collaborator traits and filter contract

pub mod constraint;
pub mod entity;
pub mod error;
pub mod filter;
pub mod inflect;
pub mod module;
pub mod service;

pub use constraint::{Constraint, ConstraintRegistry};
pub use error::{ConfigError, EntityError, StitchError};
pub use filter::FilterExpr;
pub use module::Module;
pub use service::{EntityRepository, RelationClient, ServiceRegistry};
