//! Upstream Client Adapter subsystem.
//!
//! # Data Flow
//! ```text
//! EmployeeService
//!     → client.rs (EmployeeUpstream trait, reqwest implementation)
//!     → HTTP call to the employee-data backend
//!     → types.rs (envelope decode, record checks, UpstreamError)
//! ```
//!
//! # Design Decisions
//! - Pure I/O boundary: no business logic, no retries
//! - Failures are returned as tagged `UpstreamError` values, never panics
//! - Records missing identity never leave this module

pub mod client;
pub mod types;

pub use client::{EmployeeUpstream, HttpEmployeeClient};
pub use types::{RawCreateRequest, RawEmployee, UpstreamError, UpstreamResult};
