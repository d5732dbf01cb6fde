//! Error types for the schema

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Unknown component type: {0}")]
    UnknownType(String),
}
