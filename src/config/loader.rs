//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::FacadeConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable that replaces `upstream.base_url`.
pub const UPSTREAM_URL_ENV: &str = "EMPLOYEE_FACADE_UPSTREAM_URL";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<FacadeConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: FacadeConfig = toml::from_str(&content)?;
    finalize(config)
}

/// Resolve the effective configuration: the file at `path` when given,
/// defaults otherwise, then environment overrides and validation.
pub fn resolve_config(path: Option<&Path>) -> Result<FacadeConfig, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => finalize(FacadeConfig::default()),
    }
}

fn finalize(mut config: FacadeConfig) -> Result<FacadeConfig, ConfigError> {
    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Apply environment overrides using the given variable lookup.
pub fn apply_env_overrides<F>(config: &mut FacadeConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup(UPSTREAM_URL_ENV).filter(|v| !v.trim().is_empty()) {
        config.upstream.base_url = url.trim().to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn scratch_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_valid_file() {
        let file = scratch_file(
            r#"
                [server]
                bind_address = "127.0.0.1:9999"

                [upstream]
                timeout_secs = 2
            "#,
        );
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.server.bind_address, "127.0.0.1:9999");
        assert_eq!(config.upstream.timeout_secs, 2);
    }

    #[test]
    fn test_invalid_file_reports_validation_errors() {
        let file = scratch_file(
            r#"
                [server]
                request_timeout_secs = 0
            "#,
        );
        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(ref errors) if errors.len() == 1));
        assert!(err.to_string().contains("server.request_timeout_secs"));
    }

    #[test]
    fn test_malformed_toml() {
        let file = scratch_file("[server\nbind_address = ");
        assert!(matches!(load_config(file.path()), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_env_override_replaces_upstream_url() {
        let mut config = FacadeConfig::default();
        apply_env_overrides(&mut config, |key| {
            (key == UPSTREAM_URL_ENV).then(|| " http://other:1/api/v1/employee ".to_string())
        });
        assert_eq!(config.upstream.base_url, "http://other:1/api/v1/employee");

        let mut untouched = FacadeConfig::default();
        apply_env_overrides(&mut untouched, |_| Some(String::new()));
        assert_eq!(untouched.upstream.base_url, FacadeConfig::default().upstream.base_url);
    }
}
