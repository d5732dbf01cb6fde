//! Error types for template persistence

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GatewayError {
    #[error("Template not found: {0}")]
    NotFound(String),

    #[error("Template {0} is a default template and cannot be deleted")]
    ProtectedTemplate(String),

    #[error("Version conflict: expected {expected}, found {actual}")]
    Conflict { expected: u64, actual: u64 },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Decode error: {0}")]
    Decode(String),
}

impl GatewayError {
    /// Failures of the channel rather than verdicts of the store. Callers may
    /// fall back to cached state for these.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GatewayError::Transport(_) | GatewayError::Decode(_))
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;
