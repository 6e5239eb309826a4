use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use mentis_core::error::CoreError;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    /// Patient payload rejected at the boundary.
    Validation(CoreError),
    BadRequest(String),
    Internal(String),
}

/// JSON error payload. `field` names the offending patient field when the
/// patient payload failed validation.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Validation(e) => {
                let field = match &e {
                    CoreError::MissingField(field) | CoreError::InvalidField { field, .. } => {
                        Some(field.clone())
                    }
                    CoreError::Serialization(_) => None,
                };
                let body = ErrorBody {
                    error: e.to_string(),
                    field,
                };
                (StatusCode::BAD_REQUEST, body)
            }
            ApiError::BadRequest(error) => (StatusCode::BAD_REQUEST, ErrorBody { error, field: None }),
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                let body = ErrorBody {
                    error: "internal server error".to_string(),
                    field: None,
                };
                (StatusCode::INTERNAL_SERVER_ERROR, body)
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(e: CoreError) -> Self {
        ApiError::Validation(e)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}
