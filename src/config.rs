//! Configuration management for NutriSense
//!
//! This module handles loading, parsing, validating, and managing
//! configuration from files, environment variables, and CLI overrides.

use crate::error::{NutriSenseError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for NutriSense
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Provider configuration (Gemini)
    #[serde(default)]
    pub provider: ProviderConfig,
}

/// Provider configuration
///
/// Specifies which AI provider to use and its settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Type of provider to use
    #[serde(rename = "type", default = "default_provider_type")]
    pub provider_type: String,

    /// Google Gemini configuration
    #[serde(default)]
    pub gemini: GeminiConfig,
}

fn default_provider_type() -> String {
    "gemini".to_string()
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            provider_type: default_provider_type(),
            gemini: GeminiConfig::default(),
        }
    }
}

/// Google Gemini provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// Model for text-only generation
    #[serde(default = "default_text_model")]
    pub text_model: String,

    /// Model for image-and-text generation
    #[serde(default = "default_vision_model")]
    pub vision_model: String,

    /// Optional API base URL (useful for tests and local mocks)
    ///
    /// When set, this base is used to build generateContent endpoints,
    /// which allows tests to point the provider at a mock server.
    #[serde(default)]
    pub api_base: Option<String>,
}

fn default_text_model() -> String {
    "gemini-pro".to_string()
}

fn default_vision_model() -> String {
    "gemini-pro-vision".to_string()
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            text_model: default_text_model(),
            vision_model: default_vision_model(),
            api_base: None,
        }
    }
}

impl Config {
    /// Load configuration from file with environment and CLI overrides
    ///
    /// # Arguments
    ///
    /// * `path` - Path to configuration file
    /// * `cli` - CLI arguments for overrides
    ///
    /// # Returns
    ///
    /// Returns the loaded and merged configuration
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read or parsed
    pub fn load(path: &str, cli: &crate::cli::Cli) -> Result<Self> {
        let mut config = if Path::new(path).exists() {
            Self::from_file(path)?
        } else {
            tracing::warn!("Config file not found at {}, using defaults", path);
            Self::default()
        };

        config.apply_env_vars();
        config.apply_cli_overrides(cli);

        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| NutriSenseError::Config(format!("Failed to read config file: {}", e)))?;
        serde_yaml::from_str(&contents)
            .map_err(|e| NutriSenseError::Config(format!("Failed to parse config: {}", e)).into())
    }

    fn apply_env_vars(&mut self) {
        if let Ok(provider_type) = std::env::var("NUTRISENSE_PROVIDER") {
            self.provider.provider_type = provider_type;
        }

        if let Ok(text_model) = std::env::var("NUTRISENSE_TEXT_MODEL") {
            self.provider.gemini.text_model = text_model;
        }

        if let Ok(vision_model) = std::env::var("NUTRISENSE_VISION_MODEL") {
            self.provider.gemini.vision_model = vision_model;
        }

        if let Ok(api_base) = std::env::var("NUTRISENSE_GEMINI_API_BASE") {
            self.provider.gemini.api_base = Some(api_base);
        }
    }

    fn apply_cli_overrides(&mut self, cli: &crate::cli::Cli) {
        if cli.verbose {
            tracing::debug!("Verbose mode enabled");
        }
        if let Some(provider) = &cli.provider {
            self.provider.provider_type = provider.clone();
        }
    }

    /// Validate the configuration
    ///
    /// Ensures all configuration values are within acceptable ranges
    /// and that required fields are properly set. The API key is
    /// deliberately not checked here; its absence surfaces on the first
    /// gateway call.
    ///
    /// # Errors
    ///
    /// Returns error if any validation check fails
    pub fn validate(&self) -> Result<()> {
        if self.provider.provider_type.is_empty() {
            return Err(NutriSenseError::Config("Provider type cannot be empty".to_string()).into());
        }

        let valid_providers = ["gemini"];
        if !valid_providers.contains(&self.provider.provider_type.as_str()) {
            return Err(NutriSenseError::Config(format!(
                "Invalid provider type: {}. Must be one of: {}",
                self.provider.provider_type,
                valid_providers.join(", ")
            ))
            .into());
        }

        if self.provider.gemini.text_model.is_empty() {
            return Err(NutriSenseError::Config("text_model cannot be empty".to_string()).into());
        }

        if self.provider.gemini.vision_model.is_empty() {
            return Err(NutriSenseError::Config("vision_model cannot be empty".to_string()).into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.provider.provider_type, "gemini");
        assert_eq!(config.provider.gemini.text_model, "gemini-pro");
        assert_eq!(config.provider.gemini.vision_model, "gemini-pro-vision");
        assert!(config.provider.gemini.api_base.is_none());
    }

    #[test]
    fn test_config_validation_success() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_empty_provider() {
        let mut config = Config::default();
        config.provider.provider_type = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_invalid_provider() {
        let mut config = Config::default();
        config.provider.provider_type = "invalid".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_empty_models() {
        let mut config = Config::default();
        config.provider.gemini.text_model = String::new();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.provider.gemini.vision_model = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_yaml() {
        let yaml = r#"
provider:
  type: gemini
  gemini:
    text_model: gemini-1.5-pro
    vision_model: gemini-1.5-flash
    api_base: http://localhost:8080/v1beta
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.provider.provider_type, "gemini");
        assert_eq!(config.provider.gemini.text_model, "gemini-1.5-pro");
        assert_eq!(config.provider.gemini.vision_model, "gemini-1.5-flash");
        assert_eq!(
            config.provider.gemini.api_base,
            Some("http://localhost:8080/v1beta".to_string())
        );
    }

    #[test]
    fn test_config_from_partial_yaml_uses_defaults() {
        let yaml = r#"
provider:
  type: gemini
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.provider.gemini.text_model, "gemini-pro");
        assert_eq!(config.provider.gemini.vision_model, "gemini-pro-vision");
    }

    #[test]
    fn test_load_nonexistent_file_uses_defaults() {
        let cli = crate::cli::Cli {
            config: None,
            verbose: false,
            provider: None,
            command: crate::cli::Commands::Menu,
        };

        let config = Config::load("nonexistent.yaml", &cli).unwrap();
        assert_eq!(config.provider.provider_type, "gemini");
    }

    #[test]
    fn test_cli_provider_override() {
        let cli = crate::cli::Cli {
            config: None,
            verbose: false,
            provider: Some("gemini".to_string()),
            command: crate::cli::Commands::Menu,
        };

        let mut config = Config::default();
        config.provider.provider_type = String::new();
        config.apply_cli_overrides(&cli);
        assert_eq!(config.provider.provider_type, "gemini");
    }
}
