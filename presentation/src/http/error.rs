//! API error responses

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use quiz_application::{AccessError, CatalogError};
use serde::Serialize;
use tracing::error;

/// Message sent in place of internal error detail
pub const GENERIC_INTERNAL_MESSAGE: &str = "An unexpected error occurred. Please try again later.";

/// JSON error body: `{ "error", "message" }`, plus `timestamp` and `path`
/// on 500 responses
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Failure outcome of an API request
#[derive(Debug)]
pub enum ApiError {
    Unauthorized(AccessError),
    NotFound(String),
    Internal { message: String, path: String },
}

impl ApiError {
    /// Map a catalog failure; storage detail is only kept when `expose` is set.
    pub fn from_catalog(e: CatalogError, path: &str, expose: bool) -> Self {
        match e {
            CatalogError::NotFound(_) => ApiError::NotFound(e.to_string()),
            CatalogError::Storage(detail) => {
                error!(path, "Unhandled storage failure: {}", detail);
                ApiError::Internal {
                    message: if expose {
                        detail
                    } else {
                        GENERIC_INTERNAL_MESSAGE.to_string()
                    },
                    path: path.to_string(),
                }
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(self) -> ErrorBody {
        match self {
            ApiError::Unauthorized(e) => ErrorBody {
                error: "Unauthorized",
                message: e.to_string(),
                timestamp: None,
                path: None,
            },
            ApiError::NotFound(message) => ErrorBody {
                error: "Not Found",
                message,
                timestamp: None,
                path: None,
            },
            ApiError::Internal { message, path } => ErrorBody {
                error: "Internal Server Error",
                message,
                timestamp: Some(
                    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
                ),
                path: Some(path),
            },
        }
    }
}

impl From<AccessError> for ApiError {
    fn from(e: AccessError) -> Self {
        ApiError::Unauthorized(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(self.body())).into_response()
    }
}
