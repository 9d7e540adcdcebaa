//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the facade.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the employee facade.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct FacadeConfig {
    /// Inbound server settings (bind address, limits).
    pub server: ServerConfig,

    /// Upstream employee-data backend settings.
    pub upstream: UpstreamConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Inbound HTTP server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Total time allowed for one inbound request, upstream calls included.
    pub request_timeout_secs: u64,

    /// Maximum accepted request body size in bytes.
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            request_timeout_secs: 30,
            max_body_bytes: 64 * 1024,
        }
    }
}

/// Upstream employee API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Collection URL of the upstream employee resource.
    pub base_url: String,

    /// Per-call timeout in seconds (connect + response).
    pub timeout_secs: u64,

    /// Connection establishment timeout in seconds.
    pub connect_timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8112/api/v1/employee".to_string(),
            timeout_secs: 10,
            connect_timeout_secs: 3,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable output for development.
    #[default]
    Pretty,
    /// One JSON object per line for log aggregation.
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config: FacadeConfig = toml::from_str("").unwrap();
        assert_eq!(config.server.bind_address, "0.0.0.0:8080");
        assert_eq!(config.upstream.timeout_secs, 10);
        assert_eq!(config.observability.log_format, LogFormat::Pretty);
        assert!(!config.observability.metrics_enabled);
    }

    #[test]
    fn test_partial_section_override() {
        let raw = r#"
            [upstream]
            base_url = "http://backend:9000/api/v1/employee"

            [observability]
            log_format = "json"
        "#;
        let config: FacadeConfig = toml::from_str(raw).unwrap();
        assert_eq!(config.upstream.base_url, "http://backend:9000/api/v1/employee");
        assert_eq!(config.upstream.connect_timeout_secs, 3);
        assert_eq!(config.observability.log_format, LogFormat::Json);
        assert_eq!(config.observability.log_level, "info");
    }
}
