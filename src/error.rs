//! Error types for NutriSense
//!
//! This module defines all error types used throughout the application,
//! using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for NutriSense operations
///
/// This enum encompasses all possible errors that can occur during
/// body-metrics computation, configuration loading, provider interactions,
/// and image handling.
#[derive(Error, Debug)]
pub enum NutriSenseError {
    /// Invalid user input (non-numeric, non-positive, or missing required field)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Upstream AI provider errors (network, auth, model failure)
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Image MIME type not supported (only JPEG and PNG are accepted)
    #[error("Unsupported media type: {0}")]
    UnsupportedMedia(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for NutriSense operations
///
/// This is a convenience alias that uses `anyhow::Error` as the error type,
/// allowing for rich error context and easy error propagation.
pub type Result<T> = anyhow::Result<T>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_error_display() {
        let error = NutriSenseError::InvalidInput("weight must be positive".to_string());
        assert_eq!(error.to_string(), "Invalid input: weight must be positive");
    }

    #[test]
    fn test_upstream_error_display() {
        let error = NutriSenseError::Upstream("API timeout".to_string());
        assert_eq!(error.to_string(), "Upstream error: API timeout");
    }

    #[test]
    fn test_unsupported_media_error_display() {
        let error = NutriSenseError::UnsupportedMedia("image/gif".to_string());
        assert_eq!(error.to_string(), "Unsupported media type: image/gif");
    }

    #[test]
    fn test_config_error_display() {
        let error = NutriSenseError::Config("invalid format".to_string());
        assert_eq!(error.to_string(), "Configuration error: invalid format");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error: NutriSenseError = io_error.into();
        assert!(matches!(error, NutriSenseError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_str = "{invalid json}";
        let json_error = serde_json::from_str::<serde_json::Value>(json_str).unwrap_err();
        let error: NutriSenseError = json_error.into();
        assert!(matches!(error, NutriSenseError::Serialization(_)));
    }

    #[test]
    fn test_yaml_error_conversion() {
        let yaml_str = "invalid: : yaml";
        let yaml_error = serde_yaml::from_str::<serde_yaml::Value>(yaml_str).unwrap_err();
        let error: NutriSenseError = yaml_error.into();
        assert!(matches!(error, NutriSenseError::Yaml(_)));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<NutriSenseError>();
    }
}
