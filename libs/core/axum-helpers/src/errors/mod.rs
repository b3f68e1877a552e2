pub mod handlers;
pub mod responses;

use axum::{
    Json,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Error envelope returned for every failed request.
///
/// # JSON Example
///
/// ```json
/// {
///   "timestamp": "2024-05-01T10:15:30.123Z",
///   "status": 400,
///   "error": "Invalid type parameter",
///   "path": "/products?type=bogus"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponseBody {
    /// ISO-8601 UTC instant at which the response was generated
    pub timestamp: String,
    /// HTTP status code, repeated in the body
    pub status: u16,
    /// Human-readable error message
    pub error: String,
    /// Request path as received, including the query string
    pub path: String,
}

impl ErrorResponseBody {
    /// Build a body stamped with the current time.
    pub fn new(status: StatusCode, error: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            status: status.as_u16(),
            error: error.into(),
            path: path.into(),
        }
    }
}

/// Path and query of `uri` exactly as the client sent them.
pub fn request_path(uri: &Uri) -> String {
    uri.path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string())
}

/// HTTP error bound to the request path it occurred on.
///
/// Domain errors convert into this at the handler boundary, where the path is
/// known. Rendering produces an [`ErrorResponseBody`].
#[derive(Debug, Clone, Error)]
#[error("{status}: {message} ({path})")]
pub struct ApiError {
    status: StatusCode,
    message: String,
    path: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            path: path.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message, path)
    }

    pub fn not_found(path: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, reason(StatusCode::NOT_FOUND), path)
    }

    pub fn internal(path: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            reason(StatusCode::INTERNAL_SERVER_ERROR),
            path,
        )
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Canonical reason phrase, e.g. "Bad Request" for 400.
pub(crate) fn reason(status: StatusCode) -> &'static str {
    status.canonical_reason().unwrap_or("Unknown Error")
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = self.status.as_u16(), path = %self.path, "{}", self.message);
        } else {
            tracing::info!(status = self.status.as_u16(), path = %self.path, "{}", self.message);
        }

        let body = ErrorResponseBody::new(self.status, self.message, self.path);
        (self.status, Json(body)).into_response()
    }
}
