//! Storage implementations backing the collaborator traits

pub mod in_memory;

pub use in_memory::{InMemoryClient, InMemoryRepository};
