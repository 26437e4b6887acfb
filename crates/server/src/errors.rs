use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::StatusEnvelope;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::{error, warn};

/// Error answered with a `{status_code, status_message}` envelope.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }

    pub fn method_not_allowed() -> Self {
        Self::new(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed: use POST")
    }

    pub fn invalid_json() -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Invalid JSON format")
    }

    pub fn invalid_params(reason: impl std::fmt::Display) -> Self {
        Self::new(StatusCode::BAD_REQUEST, format!("Wrong or missed parameters: {reason}"))
    }

    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "Not found")
    }

    /// Map a service failure. Validation problems are the caller's fault;
    /// a missing advertisement is 500 unless `strict_not_found` is set;
    /// everything else is 500 carrying the underlying message.
    pub fn from_service(e: ServiceError, strict_not_found: bool) -> Self {
        match &e {
            ServiceError::Validation(reason) => Self::invalid_params(reason),
            ServiceError::NotFound(_) if strict_not_found => {
                warn!(error = %e, "advertisement not found");
                Self::new(StatusCode::NOT_FOUND, e.to_string())
            }
            _ => {
                error!(error = %e, "request failed");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = StatusEnvelope::new(self.status.as_u16(), self.message);
        (self.status, Json(body)).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("cannot bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("schema creation failed: {0}")]
    Schema(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}
