//! JSON error responses for the `/api` surface

use axum::{
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Error body returned by every `/api` route
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// HTTP status code
    pub status: u16,

    /// Error code for programmatic handling
    pub error: String,

    /// Human-readable error message
    pub message: String,

    pub timestamp: String,
}

impl ErrorResponse {
    pub fn new(status: u16, error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            error: error.into(),
            message: message.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("not found: {0}")]
    NotFound(String),
}

impl ServerError {
    pub fn to_error_response(&self) -> ErrorResponse {
        match self {
            ServerError::NotFound(msg) => ErrorResponse::new(404, "NOT_FOUND", msg),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let body = self.to_error_response();
        let status =
            StatusCode::from_u16(body.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(body)).into_response()
    }
}

/// Unknown `/api` paths get a JSON 404 instead of the app shell
pub async fn api_not_found(uri: Uri) -> ServerError {
    debug!(path = %uri.path(), "unknown API route");
    ServerError::NotFound(format!("No API route for {}", uri.path()))
}
