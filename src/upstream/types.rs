//! Upstream wire types and error definitions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Employee record as the upstream backend serializes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEmployee {
    pub id: String,
    pub employee_name: String,
    pub employee_salary: u64,
    pub employee_age: u32,
    #[serde(default)]
    pub employee_title: String,
    #[serde(default)]
    pub employee_email: String,
}

impl RawEmployee {
    /// Reject records the canonical model cannot represent.
    pub fn check(&self) -> UpstreamResult<()> {
        if self.id.trim().is_empty() {
            return Err(UpstreamError::Malformed("record without id".to_string()));
        }
        if self.employee_name.trim().is_empty() {
            return Err(UpstreamError::Malformed(format!(
                "record {} without employee_name",
                self.id
            )));
        }
        Ok(())
    }
}

/// Create payload in the shape the upstream backend accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCreateRequest {
    pub name: String,
    pub salary: u64,
    pub age: u32,
    pub title: String,
    pub email: String,
}

/// Delete payload; the upstream deletes by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDeleteRequest {
    pub name: String,
}

/// Response envelope wrapping every upstream payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
    #[serde(default)]
    pub status: Option<String>,
}

/// Failures surfaced by the upstream client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpstreamError {
    /// The requested record does not exist upstream (404 or null data).
    #[error("upstream record not found")]
    NotFound,

    /// Transport failure, timeout, rate limiting or a 5xx response.
    #[error("upstream unavailable: {0}")]
    Transient(String),

    /// The response body did not have the expected shape.
    #[error("malformed upstream response: {0}")]
    Malformed(String),

    /// The upstream refused the request as invalid.
    #[error("upstream rejected request with status {status}: {message}")]
    Rejected { status: u16, message: String },

    /// The client could not be constructed from configuration.
    #[error("upstream client configuration error: {0}")]
    Config(String),
}

/// Result type for upstream operations.
pub type UpstreamResult<T> = Result<T, UpstreamError>;
