use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::api::rest::dto::ErrorBody;
use crate::domain::error::DomainError;

/// Transport-level failures. Malformed input and domain validation stay
/// distinct kinds even though both surface as 400.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid request")]
    InvalidRequest(#[source] JsonRejection),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidRequest(rejection)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest(_) | ApiError::Domain(DomainError::EmailRequired) => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::InvalidRequest(rejection) => tracing::warn!(
                status = status.as_u16(),
                detail = %rejection.body_text(),
                "rejected malformed request body"
            ),
            ApiError::Domain(e) => tracing::warn!(
                status = status.as_u16(),
                error = %e,
                "request failed validation"
            ),
        }

        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
