use crate::config::TelemetryConfig;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("ADMISSION_LOG_LEVEL '{value}' is not a valid log filter: {source}")]
    InvalidLevel { value: String, source: ParseError },
    #[error("a log subscriber is already installed for this process")]
    AlreadyInstalled,
}

/// Filter for a run: `RUST_LOG` directives when present and valid, otherwise the
/// configured level. Only the configured level is allowed to fail.
pub fn log_filter(rust_log: Option<&str>, configured: &str) -> Result<EnvFilter, TelemetryError> {
    if let Some(directives) = rust_log.map(str::trim).filter(|value| !value.is_empty()) {
        if let Ok(filter) = EnvFilter::try_new(directives) {
            return Ok(filter);
        }
    }

    EnvFilter::try_new(configured.trim()).map_err(|source| TelemetryError::InvalidLevel {
        value: configured.to_string(),
        source,
    })
}

/// Installs the global subscriber on stderr; stdout carries the department
/// listing and JSON summaries.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = log_filter(rust_log.as_deref(), &config.log_level)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .with_ansi(false)
        .try_init()
        .map_err(|_| TelemetryError::AlreadyInstalled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_level_used_without_rust_log() {
        let filter = log_filter(None, "debug").expect("valid level");
        assert_eq!(filter.to_string(), "debug");

        let filter = log_filter(Some("   "), "info").expect("blank RUST_LOG ignored");
        assert_eq!(filter.to_string(), "info");
    }

    #[test]
    fn rust_log_takes_precedence() {
        let filter = log_filter(Some("department_admission=trace"), "warn").expect("valid");
        assert_eq!(filter.to_string(), "department_admission=trace");
    }

    #[test]
    fn malformed_rust_log_falls_back_to_configured_level() {
        let filter = log_filter(Some("department_admission=loud"), "error").expect("fallback");
        assert_eq!(filter.to_string(), "error");
    }

    #[test]
    fn malformed_configured_level_is_reported() {
        let err = log_filter(None, "department_admission=loud").expect_err("invalid level");
        match &err {
            TelemetryError::InvalidLevel { value, .. } => {
                assert_eq!(value, "department_admission=loud")
            }
            other => panic!("expected invalid level, got {other:?}"),
        }
        assert!(err.to_string().starts_with("ADMISSION_LOG_LEVEL"));
    }
}
