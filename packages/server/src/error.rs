//! HTTP error mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use pagekit_gateway::wire::{ErrorCode, ErrorResponse};
use pagekit_gateway::GatewayError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] GatewayError),

    #[error("{0}")]
    BadRequest(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Store(err) => match err {
                GatewayError::NotFound(_) => StatusCode::NOT_FOUND,
                GatewayError::ProtectedTemplate(_) | GatewayError::InvalidRequest(_) => {
                    StatusCode::BAD_REQUEST
                }
                GatewayError::Conflict { .. } => StatusCode::CONFLICT,
                GatewayError::Transport(_) | GatewayError::Decode(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn envelope(&self) -> ErrorResponse {
        match self {
            ApiError::Store(err) => ErrorResponse::from(err),
            ApiError::BadRequest(message) => {
                ErrorResponse::new(ErrorCode::InvalidRequest, message.clone())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(self.envelope())).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (GatewayError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (GatewayError::ProtectedTemplate("x".into()), StatusCode::BAD_REQUEST),
            (
                GatewayError::Conflict {
                    expected: 1,
                    actual: 2,
                },
                StatusCode::CONFLICT,
            ),
            (GatewayError::Transport("disk".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status(), status);
        }
        assert_eq!(
            ApiError::BadRequest("bad".into()).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_bad_request_envelope_code() {
        let envelope = ApiError::BadRequest("name is required".into()).envelope();
        assert_eq!(envelope.code, ErrorCode::InvalidRequest);
        assert!(!envelope.success);
    }
}
