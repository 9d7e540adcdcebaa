//! HTTP protocol handling subsystem (the routing layer).
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID)
//!     → handlers.rs (path → service operation)
//!     → response.rs (EmployeeError → status + JSON body)
//!     → Send to client
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::{MakeRequestUuid, X_REQUEST_ID};
pub use server::{AppState, HttpServer, EMPLOYEE_PATH};
