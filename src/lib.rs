//! NutriSense - AI nutrition assistant library
//!
//! This library provides the core functionality for the NutriSense
//! nutrition assistant, including the body-metrics engine, prompt
//! template builders, the generative AI gateway, and the feature flows.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `metrics`: BMI and daily calorie computations (fully offline)
//! - `prompts`: Prompt template builders for every feature mode
//! - `providers`: AI gateway abstraction and the Gemini implementation
//! - `session`: Session-scoped state shared between flows
//! - `flows`: One orchestration module per feature mode
//! - `config`: Configuration management and validation
//! - `error`: Error types and result aliases
//! - `cli`: Command-line interface definition
//!
//! # Example
//!
//! ```no_run
//! use nutrisense::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config.yaml", &Default::default())?;
//!     config.validate()?;
//!
//!     // Flow usage would go here
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod flows;
pub mod image_input;
pub mod metrics;
pub mod prompts;
pub mod providers;
pub mod session;

// Re-export commonly used types
pub use config::Config;
pub use error::{NutriSenseError, Result};
pub use image_input::ImageInput;
pub use metrics::{BmiCategory, BmiResult, BodyMetrics};
pub use providers::Provider;
pub use session::Session;

#[cfg(test)]
pub mod test_utils;
