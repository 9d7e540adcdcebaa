//! Mapping of facade errors to HTTP responses.
//!
//! # Design Decisions
//! - One JSON error body shape for every failure
//! - Upstream status codes never reach the caller; only the error kind does

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::employee::{EmployeeError, ErrorKind};

/// JSON body returned for every failed operation.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorKind,
    pub message: String,
}

/// HTTP status for an outward error kind.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::ValidationRejected => StatusCode::BAD_REQUEST,
        ErrorKind::UpstreamUnavailable => StatusCode::BAD_GATEWAY,
        ErrorKind::DeleteFailed => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for EmployeeError {
    fn into_response(self) -> Response {
        let kind = self.kind();
        let body = ErrorBody {
            error: kind,
            message: self.message().to_string(),
        };
        (status_for(kind), Json(body)).into_response()
    }
}
