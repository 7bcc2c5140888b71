//! Error responses.
//!
//! # Responsibilities
//! - Map project errors to HTTP status codes
//! - Render every error as `{"message": ...}`
//!
//! # Design Decisions
//! - Validation and malformed bodies → 400 Bad Request, oversized bodies → 413
//! - Unknown project id or route → 404 Not Found
//! - No error is fatal to the process

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::projects::{ProjectError, ValidationError};

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

/// Errors surfaced at the handler boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Project(#[from] ProjectError),

    /// Body was not valid JSON, not JSON at all, or too large.
    #[error("Corpo da requisição inválido: {message}")]
    InvalidBody { status: StatusCode, message: String },

    /// No route for this method and path.
    #[error("Rota {method}:{path} não encontrada")]
    RouteNotFound { method: String, path: String },
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Project(ProjectError::Validation(_)) => StatusCode::BAD_REQUEST,
            ApiError::Project(ProjectError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::InvalidBody { status, .. } => *status,
            ApiError::RouteNotFound { .. } => StatusCode::NOT_FOUND,
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Project(err.into())
    }
}

/// Oversized bodies keep their 413; every other rejection is a 400.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let status = match rejection.status() {
            StatusCode::PAYLOAD_TOO_LARGE => StatusCode::PAYLOAD_TOO_LARGE,
            _ => StatusCode::BAD_REQUEST,
        };
        ApiError::InvalidBody {
            status,
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(status = %status, error = %self, "Request rejected");
        let body = ErrorBody {
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
