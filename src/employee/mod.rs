//! Employee domain: canonical model, translation, aggregation, errors.
//!
//! # Data Flow
//! ```text
//! http handler
//!     → service.rs (one operation = fresh upstream fetch)
//!     → translate.rs (wire record → Employee)
//!     → aggregate.rs (search / highest salary / top earners)
//!     → error.rs (UpstreamError → EmployeeError)
//!     → canonical result back to the handler
//! ```

pub mod aggregate;
pub mod error;
pub mod model;
pub mod service;
pub mod translate;

pub use error::{EmployeeError, EmployeeResult, ErrorKind};
pub use model::{CreateEmployeeRequest, Employee};
pub use service::EmployeeService;
