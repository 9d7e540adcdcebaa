//! Outward error contract and the mapping from upstream failures.

use serde::Serialize;
use thiserror::Error;

use crate::upstream::types::UpstreamError;

/// Stable, transport-independent error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    NotFound,
    UpstreamUnavailable,
    DeleteFailed,
    ValidationRejected,
}

/// Errors returned by every facade operation. Messages are safe to show to
/// callers: upstream status codes and payloads stay in the logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmployeeError {
    /// The requested single record is absent.
    #[error("{0}")]
    NotFound(String),

    /// Transport failure, unexpected upstream status or undecodable payload.
    #[error("{0}")]
    UpstreamUnavailable(String),

    /// The upstream answered but reported that nothing was deleted.
    #[error("{0}")]
    DeleteFailed(String),

    /// The upstream refused the request as invalid.
    #[error("{0}")]
    ValidationRejected(String),
}

impl EmployeeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::UpstreamUnavailable(_) => ErrorKind::UpstreamUnavailable,
            Self::DeleteFailed(_) => ErrorKind::DeleteFailed,
            Self::ValidationRejected(_) => ErrorKind::ValidationRejected,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::NotFound(m)
            | Self::UpstreamUnavailable(m)
            | Self::DeleteFailed(m)
            | Self::ValidationRejected(m) => m,
        }
    }
}

impl From<UpstreamError> for EmployeeError {
    fn from(error: UpstreamError) -> Self {
        match error {
            UpstreamError::NotFound => Self::NotFound("Employee not found".to_string()),
            UpstreamError::Rejected { .. } => {
                Self::ValidationRejected("Employee data rejected by the employee service".to_string())
            }
            UpstreamError::Transient(_)
            | UpstreamError::Malformed(_)
            | UpstreamError::Config(_) => {
                Self::UpstreamUnavailable("Employee service is unavailable".to_string())
            }
        }
    }
}

/// Result type for facade operations.
pub type EmployeeResult<T> = Result<T, EmployeeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_failures_map_to_outward_kinds() {
        let cases = [
            (UpstreamError::NotFound, ErrorKind::NotFound),
            (UpstreamError::Transient("status 503".into()), ErrorKind::UpstreamUnavailable),
            (UpstreamError::Malformed("eof".into()), ErrorKind::UpstreamUnavailable),
            (UpstreamError::Config("bad url".into()), ErrorKind::UpstreamUnavailable),
            (
                UpstreamError::Rejected { status: 400, message: "age".into() },
                ErrorKind::ValidationRejected,
            ),
        ];
        for (upstream, kind) in cases {
            assert_eq!(EmployeeError::from(upstream).kind(), kind);
        }
    }

    #[test]
    fn test_messages_do_not_leak_upstream_details() {
        let err = EmployeeError::from(UpstreamError::Transient(
            "status 503: {\"secret\":\"stack trace\"}".into(),
        ));
        assert!(!err.message().contains("503"));
        assert!(!err.to_string().contains("secret"));

        let err = EmployeeError::from(UpstreamError::Rejected {
            status: 422,
            message: "{\"field\":\"salary\"}".into(),
        });
        assert!(!err.message().contains("422"));
        assert!(!err.message().contains("salary"));
    }

    #[test]
    fn test_kind_serialization() {
        assert_eq!(
            serde_json::to_string(&ErrorKind::UpstreamUnavailable).unwrap(),
            "\"UPSTREAM_UNAVAILABLE\""
        );
        assert_eq!(serde_json::to_string(&ErrorKind::DeleteFailed).unwrap(), "\"DELETE_FAILED\"");
    }
}
