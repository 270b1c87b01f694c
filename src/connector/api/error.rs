use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::{error, warn};

use crate::domain::DomainError;

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

/// A [`DomainError`] on its way out as an HTTP response.
///
/// The status code comes from the error kind alone; the message is echoed in
/// the `error` field of the JSON body.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    source: DomainError,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        self.source.message()
    }
}

impl From<DomainError> for ApiError {
    fn from(source: DomainError) -> Self {
        let status = match source {
            DomainError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            DomainError::Upstream(_) | DomainError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self { status, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self.source {
            DomainError::InvalidInput(_) => warn!("Rejected request: {}", self.source),
            DomainError::Upstream(_) => warn!("Upstream failure: {}", self.source),
            DomainError::Internal(_) => error!("Request failed: {}", self.source),
        }

        let body = ErrorBody {
            error: self.message(),
        };
        (self.status, Json(body)).into_response()
    }
}
