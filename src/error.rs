use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Response type for unhealthy status
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UnhealthyResponse {
    pub status: String,
    pub error: String,
}

/// Error type for the todo endpoints
///
/// Every variant becomes a plain-text response. Store failures are logged in
/// full but only the generic reason phrase reaches the caller; body parse
/// failures echo the parser's message so the caller can fix the payload.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Store transport or decoding failure
    #[error(transparent)]
    Store(#[from] anyhow::Error),
    /// Create request body is not valid JSON for a todo
    #[error("{0}")]
    MalformedBody(#[from] serde_json::Error),
    /// No route matches the method and path
    #[error("no route for request")]
    MethodNotAllowed,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Store(_) | ApiError::MalformedBody(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

/// The standard reason phrase for `status`, e.g. "Method Not Allowed".
pub fn reason_phrase(status: StatusCode) -> &'static str {
    status.canonical_reason().unwrap_or_default()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match self {
            ApiError::Store(err) => {
                tracing::error!("Store operation failed: {:#}", err);
                reason_phrase(status).to_string()
            }
            ApiError::MalformedBody(err) => {
                tracing::warn!("Rejected malformed todo body: {}", err);
                err.to_string()
            }
            ApiError::MethodNotAllowed => reason_phrase(status).to_string(),
        };

        (status, body).into_response()
    }
}
