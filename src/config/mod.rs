//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML), optional
//!     → loader.rs (parse & deserialize, env overrides)
//!     → validation.rs (semantic checks)
//!     → FacadeConfig (validated, immutable)
//!     → passed by value into the upstream client and server
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, resolve_config, ConfigError};
pub use schema::FacadeConfig;
pub use schema::LogFormat;
pub use schema::ObservabilityConfig;
pub use schema::ServerConfig;
pub use schema::UpstreamConfig;
