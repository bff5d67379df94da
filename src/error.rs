//! Error types for resview
//!
//! The mappers in [`crate::models::view`] are total and never fail. These
//! errors only cover the surrounding shell: configuration, reading input
//! documents and writing output.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for resview operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Operation failed: {0}")]
    Other(String),
}

/// Errors raised while reading a document of raw records
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Input is empty. Pass a JSON array or object with --input, or pipe one on stdin.")]
    Empty,

    #[error("Expected a JSON array, object or null, found {0}")]
    UnexpectedShape(String),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {}. Run `resview config init` to create one.", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_not_found_mentions_path() {
        let err = ConfigError::NotFound(PathBuf::from("/tmp/missing.yaml"));
        let msg = err.to_string();
        assert!(msg.contains("/tmp/missing.yaml"));
        assert!(msg.contains("resview config init"));
    }

    #[test]
    fn test_config_error_parse() {
        let err = ConfigError::ParseError("unexpected key".to_string());
        assert!(err.to_string().contains("unexpected key"));
    }

    #[test]
    fn test_config_error_invalid() {
        let err = ConfigError::Invalid("bad base_url".to_string());
        assert!(err.to_string().contains("bad base_url"));
    }

    #[test]
    fn test_config_error_save() {
        let err = ConfigError::SaveError("disk full".to_string());
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn test_input_error_unexpected_shape() {
        let err = InputError::UnexpectedShape("a string".to_string());
        assert!(err.to_string().contains("a string"));
    }

    #[test]
    fn test_error_from_config_error() {
        let err: Error = ConfigError::Invalid("x".to_string()).into();

        match err {
            Error::Config(ConfigError::Invalid(_)) => (),
            _ => panic!("Expected Error::Config(ConfigError::Invalid)"),
        }
    }

    #[test]
    fn test_error_from_input_error() {
        let err: Error = InputError::Empty.into();

        match err {
            Error::Input(InputError::Empty) => (),
            _ => panic!("Expected Error::Input(InputError::Empty)"),
        }
    }

    #[test]
    fn test_error_other() {
        let err = Error::Other("Custom error".to_string());
        assert!(err.to_string().contains("Custom error"));
    }

    #[test]
    fn test_config_error_from_yaml_error() {
        let yaml_str = "invalid: [yaml: content";
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>(yaml_str).unwrap_err();
        let config_err: ConfigError = yaml_err.into();

        match config_err {
            ConfigError::ParseError(_) => (),
            _ => panic!("Expected ConfigError::ParseError"),
        }
    }
}
