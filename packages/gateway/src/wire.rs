//! JSON envelopes of the template REST surface.

use crate::errors::GatewayError;
use pagekit_schema::Template;
use serde::{Deserialize, Serialize};

/// `GET /templates`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateListResponse {
    pub success: bool,
    #[serde(default)]
    pub templates: Vec<Template>,
}

/// Single-template responses (`GET`, `POST`, `PUT`, apply)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateResponse {
    pub success: bool,
    pub template: Template,
}

/// `DELETE /templates/:id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AckResponse {
    pub success: bool,
}

/// Machine-readable error category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    NotFound,
    ProtectedTemplate,
    Conflict,
    InvalidRequest,
    Internal,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::NotFound => "not_found",
            ErrorCode::ProtectedTemplate => "protected_template",
            ErrorCode::Conflict => "conflict",
            ErrorCode::InvalidRequest => "invalid_request",
            ErrorCode::Internal => "internal",
        }
    }
}

/// Body of every non-2xx response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub code: ErrorCode,
    /// Stored version, present on conflicts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_version: Option<u64>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            code,
            current_version: None,
        }
    }
}

impl From<&GatewayError> for ErrorResponse {
    fn from(err: &GatewayError) -> Self {
        let code = match err {
            GatewayError::NotFound(_) => ErrorCode::NotFound,
            GatewayError::ProtectedTemplate(_) => ErrorCode::ProtectedTemplate,
            GatewayError::Conflict { .. } => ErrorCode::Conflict,
            GatewayError::InvalidRequest(_) => ErrorCode::InvalidRequest,
            GatewayError::Transport(_) | GatewayError::Decode(_) => ErrorCode::Internal,
        };
        let mut response = ErrorResponse::new(code, err.to_string());
        if let GatewayError::Conflict { actual, .. } = err {
            response.current_version = Some(*actual);
        }
        response
    }
}

/// Query string of `PUT /templates/:id`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_version: Option<u64>,
}
