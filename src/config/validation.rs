//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate addresses and the upstream URL
//! - Validate value ranges (timeouts > 0, limits > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: FacadeConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::FacadeConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field}: invalid socket address '{value}'")]
    InvalidAddress { field: &'static str, value: String },

    #[error("upstream.base_url: {0}")]
    InvalidUpstreamUrl(String),

    #[error("{0} must be greater than zero")]
    Zero(&'static str),

    #[error("observability.log_level: unknown level '{0}'")]
    UnknownLogLevel(String),
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Check a parsed configuration for semantic errors.
pub fn validate_config(config: &FacadeConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.server.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "server.bind_address",
            value: config.server.bind_address.clone(),
        });
    }
    if config.server.request_timeout_secs == 0 {
        errors.push(ValidationError::Zero("server.request_timeout_secs"));
    }
    if config.server.max_body_bytes == 0 {
        errors.push(ValidationError::Zero("server.max_body_bytes"));
    }

    match Url::parse(&config.upstream.base_url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => errors.push(ValidationError::InvalidUpstreamUrl(format!(
            "unsupported scheme '{}'",
            url.scheme()
        ))),
        Err(e) => errors.push(ValidationError::InvalidUpstreamUrl(e.to_string())),
    }
    if config.upstream.timeout_secs == 0 {
        errors.push(ValidationError::Zero("upstream.timeout_secs"));
    }
    if config.upstream.connect_timeout_secs == 0 {
        errors.push(ValidationError::Zero("upstream.connect_timeout_secs"));
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }
    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::InvalidAddress {
            field: "observability.metrics_address",
            value: config.observability.metrics_address.clone(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
