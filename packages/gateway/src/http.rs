//! reqwest-backed transport for the template REST surface.

use crate::errors::{GatewayError, Result};
use crate::transport::TemplateTransport;
use crate::wire::{ErrorCode, ErrorResponse, TemplateListResponse, TemplateResponse, UpdateQuery};
use async_trait::async_trait;
use pagekit_schema::Template;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::Transport(format!("http client: {}", e)))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Attach `Authorization: Bearer <token>` to every request
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn template_url(&self, id: &str, suffix: &str) -> String {
        let mut url = self.url("/templates/");
        url.push_str(&encode_segment(id));
        url.push_str(suffix);
        url
    }

    async fn send(&self, request: RequestBuilder, id: &str) -> Result<Response> {
        let request = match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };
        let response = request
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let envelope = response.json::<ErrorResponse>().await.ok();
        Err(error_from_status(status, envelope, id))
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        response
            .json::<T>()
            .await
            .map_err(|e| GatewayError::Decode(e.to_string()))
    }
}

/// Map a non-2xx status (and its envelope, when parseable) to an error
fn error_from_status(status: StatusCode, envelope: Option<ErrorResponse>, id: &str) -> GatewayError {
    let code = envelope.as_ref().map(|e| e.code);
    let message = envelope
        .as_ref()
        .map(|e| e.error.clone())
        .unwrap_or_else(|| status.to_string());

    match (status, code) {
        (StatusCode::NOT_FOUND, _) => GatewayError::NotFound(id.to_string()),
        (StatusCode::BAD_REQUEST, Some(ErrorCode::InvalidRequest)) => {
            GatewayError::InvalidRequest(message)
        }
        (StatusCode::BAD_REQUEST, _) => GatewayError::ProtectedTemplate(id.to_string()),
        (StatusCode::CONFLICT, _) => GatewayError::Conflict {
            expected: 0,
            actual: envelope.and_then(|e| e.current_version).unwrap_or(0),
        },
        _ => GatewayError::Transport(format!("HTTP {}: {}", status.as_u16(), message)),
    }
}

/// Percent-encode characters outside the unreserved URL set
fn encode_segment(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            other => out.push_str(&format!("%{:02X}", other)),
        }
    }
    out
}

#[async_trait]
impl TemplateTransport for HttpTransport {
    async fn list(&self) -> Result<Vec<Template>> {
        debug!(base = %self.base_url, "GET /templates");
        let response = self.send(self.client.get(self.url("/templates")), "").await?;
        let body: TemplateListResponse = Self::decode(response).await?;
        Ok(body.templates)
    }

    async fn get(&self, id: &str) -> Result<Template> {
        debug!(id, "GET /templates/:id");
        let response = self.send(self.client.get(self.template_url(id, "")), id).await?;
        let body: TemplateResponse = Self::decode(response).await?;
        Ok(body.template)
    }

    async fn create(&self, template: &Template) -> Result<Template> {
        debug!(name = %template.name, "POST /templates");
        let request = self.client.post(self.url("/templates")).json(template);
        let response = self.send(request, "").await?;
        let body: TemplateResponse = Self::decode(response).await?;
        Ok(body.template)
    }

    async fn update(
        &self,
        id: &str,
        template: &Template,
        expected_version: Option<u64>,
    ) -> Result<Template> {
        debug!(id, ?expected_version, "PUT /templates/:id");
        let request = self
            .client
            .put(self.template_url(id, ""))
            .query(&UpdateQuery { expected_version })
            .json(template);

        let response = match self.send(request, id).await {
            Err(GatewayError::Conflict { actual, .. }) => {
                return Err(GatewayError::Conflict {
                    expected: expected_version.unwrap_or_default(),
                    actual,
                })
            }
            other => other?,
        };
        let body: TemplateResponse = Self::decode(response).await?;
        Ok(body.template)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        debug!(id, "DELETE /templates/:id");
        self.send(self.client.delete(self.template_url(id, "")), id)
            .await?;
        Ok(())
    }

    async fn apply(&self, id: &str) -> Result<Template> {
        debug!(id, "POST /templates/:id/apply");
        let response = self
            .send(self.client.post(self.template_url(id, "/apply")), id)
            .await?;
        let body: TemplateResponse = Self::decode(response).await?;
        Ok(body.template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            error_from_status(StatusCode::NOT_FOUND, None, "a"),
            GatewayError::NotFound("a".to_string())
        );
        assert_eq!(
            error_from_status(StatusCode::BAD_REQUEST, None, "a"),
            GatewayError::ProtectedTemplate("a".to_string())
        );
        assert!(matches!(
            error_from_status(StatusCode::INTERNAL_SERVER_ERROR, None, "a"),
            GatewayError::Transport(_)
        ));
    }

    #[test]
    fn test_invalid_request_envelope() {
        let envelope = ErrorResponse::new(ErrorCode::InvalidRequest, "name is required");
        assert_eq!(
            error_from_status(StatusCode::BAD_REQUEST, Some(envelope), ""),
            GatewayError::InvalidRequest("name is required".to_string())
        );
    }

    #[test]
    fn test_conflict_reads_current_version() {
        let mut envelope = ErrorResponse::new(ErrorCode::Conflict, "stale");
        envelope.current_version = Some(4);
        assert_eq!(
            error_from_status(StatusCode::CONFLICT, Some(envelope), "a"),
            GatewayError::Conflict {
                expected: 0,
                actual: 4
            }
        );
    }

    #[test]
    fn test_encode_segment() {
        assert_eq!(encode_segment("tpl-abc_1.2~"), "tpl-abc_1.2~");
        assert_eq!(encode_segment("a b/c"), "a%20b%2Fc");
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let transport = HttpTransport::new("http://localhost:8080/").unwrap();
        assert_eq!(transport.base_url(), "http://localhost:8080");
        assert_eq!(
            transport.template_url("x", "/apply"),
            "http://localhost:8080/templates/x/apply"
        );
    }
}
