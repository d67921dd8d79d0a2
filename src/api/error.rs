use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;

use super::ApiResponse;
use crate::services::RepositoryError;

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),

    /// `expose` decides whether `message` reaches the client or only the log.
    DatabaseError { message: String, expose: bool },

    ValidationError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::DatabaseError { message, .. } => write!(f, "Database error: {}", message),
            ApiError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::DatabaseError { message, expose } => {
                tracing::error!("Database error: {}", message);
                let body = if expose {
                    message
                } else {
                    "A database error occurred".to_string()
                };
                (StatusCode::INTERNAL_SERVER_ERROR, body)
            }
            ApiError::ValidationError(msg) => {
                tracing::warn!("Rejected request: {}", msg);
                (StatusCode::BAD_REQUEST, msg)
            }
        };

        let body = ApiResponse::error(error_message);
        (status, Json(body)).into_response()
    }
}

impl ApiError {
    pub fn not_found(resource: &str, id: impl fmt::Display) -> Self {
        ApiError::NotFound(format!("{} {} not found", resource, id))
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        ApiError::ValidationError(msg.into())
    }

    /// Maps a repository failure. Query and mapping failures become 500s
    /// whose text is shown only when `expose` is set.
    pub fn repository(err: RepositoryError, expose: bool) -> Self {
        match err {
            RepositoryError::MovieNotFound(id) => Self::not_found("Movie", id),
            RepositoryError::Query(_) | RepositoryError::Mapping(_) => ApiError::DatabaseError {
                message: err.to_string(),
                expose,
            },
        }
    }
}
