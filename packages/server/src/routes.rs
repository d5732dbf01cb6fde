//! REST handlers for the template store

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use pagekit_gateway::wire::{AckResponse, TemplateListResponse, TemplateResponse, UpdateQuery};
use pagekit_schema::{list_available, validate_template, ComponentSpec, Surface, Template, ValidationLevel};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub templates: usize,
}

#[derive(Debug, Default, Deserialize)]
pub struct RegistryQuery {
    pub surface: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RegistryResponse {
    pub success: bool,
    pub surface: Surface,
    pub components: Vec<ComponentSpec>,
}

/// Reject bodies an editor could not have produced
fn check_template(template: &Template) -> ApiResult<()> {
    if template.name.trim().is_empty() {
        return Err(ApiError::BadRequest("Template name is required".to_string()));
    }
    if let Some(issue) = validate_template(template)
        .into_iter()
        .find(|i| i.level == ValidationLevel::Error)
    {
        return Err(ApiError::BadRequest(issue.message));
    }
    Ok(())
}

fn body(payload: Result<Json<Template>, JsonRejection>) -> ApiResult<Template> {
    let Json(template) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    check_template(&template)?;
    Ok(template)
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let templates = state.repo.lock().await.len();
    Json(HealthResponse {
        status: "ok",
        templates,
    })
}

pub async fn registry(
    query: Result<Query<RegistryQuery>, QueryRejection>,
) -> ApiResult<Json<RegistryResponse>> {
    let Query(query) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let surface = match query.surface.as_deref() {
        Some(raw) => raw.parse::<Surface>().map_err(ApiError::BadRequest)?,
        None => Surface::default(),
    };
    Ok(Json(RegistryResponse {
        success: true,
        surface,
        components: list_available(surface),
    }))
}

pub async fn list_templates(State(state): State<AppState>) -> Json<TemplateListResponse> {
    let templates = state.repo.lock().await.list();
    Json(TemplateListResponse {
        success: true,
        templates,
    })
}

pub async fn get_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<TemplateResponse>> {
    let template = state.repo.lock().await.get(&id)?;
    Ok(Json(TemplateResponse {
        success: true,
        template,
    }))
}

pub async fn create_template(
    State(state): State<AppState>,
    payload: Result<Json<Template>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<TemplateResponse>)> {
    let template = body(payload)?;
    let template = state.commit(|repo| Ok(repo.create(template))).await?;
    Ok((
        StatusCode::CREATED,
        Json(TemplateResponse {
            success: true,
            template,
        }),
    ))
}

pub async fn update_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
    query: Result<Query<UpdateQuery>, QueryRejection>,
    payload: Result<Json<Template>, JsonRejection>,
) -> ApiResult<Json<TemplateResponse>> {
    let Query(query) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let template = body(payload)?;
    debug!(id = %id, expected_version = ?query.expected_version, "update template");

    let template = state
        .commit(|repo| repo.update(&id, template, query.expected_version))
        .await?;
    Ok(Json(TemplateResponse {
        success: true,
        template,
    }))
}

pub async fn delete_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<AckResponse>> {
    state.commit(|repo| repo.delete(&id)).await?;
    Ok(Json(AckResponse { success: true }))
}

pub async fn apply_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<TemplateResponse>> {
    let template = state.commit(|repo| repo.apply(&id)).await?;
    Ok(Json(TemplateResponse {
        success: true,
        template,
    }))
}
