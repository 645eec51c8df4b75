use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Failure rendered as `{"detail": ...}`.
#[derive(Debug)]
pub enum ApiError {
    Domain(domain::Error),
    /// Request body or query string that could not be decoded
    BadRequest(String),
}

impl From<domain::Error> for ApiError {
    fn from(err: domain::Error) -> Self {
        Self::Domain(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        use domain::Error;

        let (status, detail) = match self {
            ApiError::BadRequest(detail) => (StatusCode::BAD_REQUEST, detail),
            ApiError::Domain(Error::Store { message }) => {
                tracing::error!("Store failure: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApiError::Domain(err) => {
                let status = match &err {
                    Error::NotFound { .. } => StatusCode::NOT_FOUND,
                    Error::Uniqueness { .. } => StatusCode::CONFLICT,
                    Error::Forbidden => StatusCode::FORBIDDEN,
                    Error::InvalidStateTransition { .. } => StatusCode::CONFLICT,
                    Error::Validation { .. } => StatusCode::BAD_REQUEST,
                    Error::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
                };
                (status, err.to_string())
            }
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
