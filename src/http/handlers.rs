//! Route handlers for the health check and the project resource.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{Method, StatusCode, Uri},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::http::response::ApiError;
use crate::http::server::AppState;
use crate::projects::{validate_new_project, validate_patch, Project, ProjectError};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub message: String,
}

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        message: "It's working!".to_string(),
    })
}

/// `GET /projects`. Pagination and filtering are not supported; the whole
/// collection is returned in insertion order.
pub async fn list_projects(State(state): State<AppState>) -> Json<Vec<Project>> {
    let projects = state.store.list();
    tracing::debug!(count = projects.len(), "Listing projects");
    Json(projects)
}

/// `POST /projects`
pub async fn create_project(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Project>), ApiError> {
    let Json(body) = body?;
    let new_project = validate_new_project(&body).inspect_err(|e| {
        tracing::warn!(reason = %e, "Rejected project payload");
    })?;

    let project = state.store.create(new_project);
    Ok((StatusCode::CREATED, Json(project)))
}

/// `GET /projects/{project_id}`
pub async fn get_project(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> Result<Json<Project>, ApiError> {
    Ok(Json(state.store.get(&project_id)?))
}

/// `PUT /projects/{project_id}`
///
/// An unknown id is reported before any problem with the patch body. A
/// request without a body (and without a content type) is an empty patch.
pub async fn update_project(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    body: Result<Option<Json<Value>>, JsonRejection>,
) -> Result<Json<Project>, ApiError> {
    if !state.store.contains(&project_id) {
        return Err(ProjectError::NotFound(project_id).into());
    }

    let body = body?.map(|Json(body)| body).unwrap_or(Value::Null);
    let patch = validate_patch(&body).inspect_err(|e| {
        tracing::warn!(project_id = %project_id, reason = %e, "Rejected project patch");
    })?;

    Ok(Json(state.store.update(&project_id, patch)?))
}

/// `DELETE /projects/{project_id}`
pub async fn delete_project(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.store.delete(&project_id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Fallback for requests no route matched.
pub async fn route_not_found(method: Method, uri: Uri) -> ApiError {
    tracing::warn!(method = %method, path = %uri.path(), "No route matched");
    ApiError::RouteNotFound {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}
