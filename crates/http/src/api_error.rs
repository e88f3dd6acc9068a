//! Typed API error for HTTP handlers.
//!
//! Converts service errors into HTTP responses with a JSON body and status
//! code. Handlers return `Result<T, ApiError>`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use roster_core::ErrorCode;
use roster_service::ServiceError;

/// API error with HTTP status code and human-readable message.
///
/// Converts to JSON response: `{"error": "message"}`.
///
/// `Internal` variant logs the real error server-side and returns
/// a static message to the client.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request: invalid pagination, sort, filter or body.
    BadRequest(String),
    /// 404 Not Found: unknown resource.
    NotFound(String),
    /// 415 Unsupported Media Type: protobuf endpoint called with another body type.
    UnsupportedMediaType(String),
    /// 500 Internal Server Error. Details logged, not exposed.
    Internal(anyhow::Error),
    /// 503 Service Unavailable: storage is busy or out of connections.
    ServiceUnavailable(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::UnsupportedMediaType(msg) => (StatusCode::UNSUPPORTED_MEDIA_TYPE, msg),
            Self::Internal(err) => {
                tracing::error!(error = ?err, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_owned())
            },
            Self::ServiceUnavailable(msg) => {
                tracing::warn!(error = %msg, "storage unavailable");
                (StatusCode::SERVICE_UNAVAILABLE, "storage temporarily unavailable".to_owned())
            },
        };
        let body = serde_json::json!({"error": message});
        (status, Json(body)).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err.code() {
            ErrorCode::InvalidArgument => Self::BadRequest(err.to_string()),
            ErrorCode::NotFound => Self::NotFound(err.to_string()),
            ErrorCode::Unavailable => Self::ServiceUnavailable(err.to_string()),
            _ => Self::Internal(err.into()),
        }
    }
}
