//! Provider module for NutriSense
//!
//! This module contains the AI gateway abstraction and the Google Gemini
//! implementation.

pub mod base;
pub mod gemini;

pub use base::Provider;
pub use gemini::GeminiProvider;

use crate::config::ProviderConfig;
use crate::error::Result;

/// Create a provider instance based on configuration
///
/// # Arguments
///
/// * `provider_type` - Type of provider (currently only "gemini")
/// * `config` - Provider configuration
///
/// # Returns
///
/// Returns a boxed provider instance
///
/// # Errors
///
/// Returns error if provider type is invalid or initialization fails
pub fn create_provider(provider_type: &str, config: &ProviderConfig) -> Result<Box<dyn Provider>> {
    match provider_type {
        "gemini" => Ok(Box::new(GeminiProvider::new(config.gemini.clone())?)),
        _ => Err(crate::error::NutriSenseError::Upstream(format!(
            "Unknown provider type: {}",
            provider_type
        ))
        .into()),
    }
}
