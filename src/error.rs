use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::admission::{Department, IntakeError};
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Intake(IntakeError),
    Serialize(serde_json::Error),
    Publish { failed: Vec<Department> },
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Intake(err) => write!(f, "intake error: {}", err),
            AppError::Serialize(err) => write!(f, "summary error: {}", err),
            AppError::Publish { failed } => {
                let names: Vec<&str> = failed.iter().map(|department| department.name()).collect();
                write!(f, "failed to write results for: {}", names.join(", "))
            }
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Intake(err) => Some(err),
            AppError::Serialize(err) => Some(err),
            AppError::Publish { .. } => None,
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<IntakeError> for AppError {
    fn from(value: IntakeError) -> Self {
        Self::Intake(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publish_error_lists_departments() {
        let err = AppError::Publish {
            failed: vec![Department::Biotech, Department::Physics],
        };
        assert_eq!(err.to_string(), "failed to write results for: Biotech, Physics");
    }

    #[test]
    fn intake_errors_keep_their_source() {
        let err = AppError::from(IntakeError::MissingCapacity);
        assert!(err.to_string().starts_with("intake error"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
