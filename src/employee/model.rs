//! Canonical employee representation exposed by the facade.

use serde::{Deserialize, Serialize};

/// Employee as surfaced to callers, independent of the upstream wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Upstream-assigned identifier.
    pub id: String,
    pub name: String,
    pub salary: u64,
    pub age: u32,
    pub title: String,
    pub email: String,
}

/// Inbound request to create an employee. Every field is required; range
/// checks are left to the upstream backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEmployeeRequest {
    pub name: String,
    pub salary: u64,
    pub age: u32,
    pub title: String,
    pub email: String,
}
