//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the global tracing subscriber
//! - Select pretty or JSON output from configuration
//!
//! `RUST_LOG` takes precedence over `observability.log_level`.

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, ObservabilityConfig};

/// Directive used when `RUST_LOG` is not set.
pub fn default_directive(level: &str) -> String {
    let level = level.to_ascii_lowercase();
    format!("employee_facade={level},tower_http={level}")
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(config: &ObservabilityConfig) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(&config.log_level)));
    let registry = tracing_subscriber::registry().with(filter);

    match config.log_format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(true))
            .try_init(),
        LogFormat::Pretty => registry.with(fmt::layer()).try_init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_covers_crate_and_http_layer() {
        assert_eq!(
            default_directive("DEBUG"),
            "employee_facade=debug,tower_http=debug"
        );
    }
}
