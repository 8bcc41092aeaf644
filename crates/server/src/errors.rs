use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::MessageBody;
use service::errors::ServiceError;
use tracing::error;

use crate::observability::REQUEST_ERRORS_TOTAL;

/// Generic body for failures whose detail stays server-side.
pub const INTERNAL_MESSAGE: &str = "Internal server error";

/// Error returned by asset handlers, rendered as `{ "message": ... }`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        let status = match &e {
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Forbidden(_) => StatusCode::FORBIDDEN,
            ServiceError::Storage(detail) => {
                error!(error = %detail, "asset storage failure");
                return Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE);
            }
        };
        Self::new(status, e.message())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        REQUEST_ERRORS_TOTAL.with_label_values(&[self.status.as_str()]).inc();
        (self.status, Json(MessageBody::new(self.message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_statuses() {
        let cases = [
            (ServiceError::Validation("Missing required fields".into()), StatusCode::BAD_REQUEST, "Missing required fields"),
            (ServiceError::not_found("Asset"), StatusCode::NOT_FOUND, "Asset not found"),
            (ServiceError::Forbidden("nope".into()), StatusCode::FORBIDDEN, "nope"),
            (ServiceError::Storage("disk on fire".into()), StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE),
        ];
        for (err, status, message) in cases {
            let api = ApiError::from(err);
            assert_eq!(api.status, status);
            assert_eq!(api.message, message);
        }
    }
}
