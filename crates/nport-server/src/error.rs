//! Mapping of lookup failures onto HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use nport_data::NportError;
use serde::Serialize;
use thiserror::Error;

/// Errors a handler can return.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The filing lookup failed
    #[error(transparent)]
    Lookup(#[from] NportError),
}

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Lookup(
                NportError::UpstreamUnavailable(_)
                | NportError::MalformedResult(_)
                | NportError::MissingCredential(_)
                | NportError::InvalidConfig(_),
            ) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(ErrorBody {
            detail: self.to_string(),
        });
        (status, body).into_response()
    }
}

/// Result type for handlers.
pub type ApiResult<T> = Result<T, ApiError>;
