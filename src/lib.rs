//! Employee facade library.

pub mod config;
pub mod employee;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod upstream;

pub use config::FacadeConfig;
pub use employee::{Employee, EmployeeError, EmployeeService};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
