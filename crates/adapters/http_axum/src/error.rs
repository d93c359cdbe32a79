//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use campus_domain::error::CampusError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    #[serde(rename = "type")]
    kind: &'static str,
    message: String,
}

/// Maps [`CampusError`] and authorization failures to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Error raised by the application layer.
    Domain(CampusError),
    /// Caller is anonymous or lacks the required role.
    Forbidden,
}

impl From<CampusError> for ApiError {
    fn from(err: CampusError) -> Self {
        Self::Domain(err)
    }
}

impl From<campus_domain::error::ValidationError> for ApiError {
    fn from(err: campus_domain::error::ValidationError) -> Self {
        Self::Domain(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, kind, message) = match self {
            Self::Forbidden => (
                StatusCode::FORBIDDEN,
                "AccessDenied",
                "Access is denied".to_string(),
            ),
            Self::Domain(CampusError::NotFound(err)) => {
                (StatusCode::NOT_FOUND, "EntityNotFoundException", err.to_string())
            }
            Self::Domain(CampusError::Validation(err)) => {
                (StatusCode::BAD_REQUEST, "InvalidRecord", err.to_string())
            }
            Self::Domain(CampusError::Storage(err)) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "InternalError",
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { kind, message })).into_response()
    }
}
