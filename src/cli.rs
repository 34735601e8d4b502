//! Command-line interface definition for NutriSense
//!
//! This module defines the CLI structure using clap's derive API,
//! providing one subcommand per feature mode plus an interactive menu.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// NutriSense - AI nutrition assistant CLI
///
/// Compute BMI and calorie needs locally, and generate diet charts,
/// food analyses, recipes, and lifestyle recommendations through a
/// generative AI provider.
#[derive(Parser, Debug, Clone)]
#[command(name = "nutrisense")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/config.yaml")]
    pub config: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Override the provider from config (gemini)
    #[arg(short, long)]
    pub provider: Option<String>,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for NutriSense
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Calculate BMI and daily calorie needs
    Bmi {
        /// Weight in kilograms
        #[arg(short, long)]
        weight: String,

        /// Height in centimeters
        #[arg(long)]
        height: String,

        /// Age in years
        #[arg(short, long)]
        age: String,
    },

    /// Generate a week-long diet chart
    DietChart {
        /// Daily calorie intake; defaults to the target computed by a
        /// previous `bmi` run in interactive mode
        #[arg(short, long)]
        calories: Option<f64>,
    },

    /// Analyze a food image and itemize calories
    CalorieAdvisor {
        /// Path to a food image (jpg, jpeg, png)
        #[arg(short, long)]
        image: PathBuf,
    },

    /// Generate a recipe from a dish name or image
    Recipe {
        /// Dish name
        #[arg(short, long)]
        dish: Option<String>,

        /// Path to a dish image (jpg, jpeg, png)
        #[arg(short, long)]
        image: Option<PathBuf>,
    },

    /// Get traditional Indian lifestyle recommendations
    Lifestyle {
        /// Health concern to address
        #[arg(long)]
        concern: String,
    },

    /// Start the interactive menu
    Menu,
}

impl Cli {
    /// Parse command line arguments
    ///
    /// # Returns
    ///
    /// Returns the parsed CLI structure
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            config: Some("config/config.yaml".to_string()),
            verbose: false,
            provider: None,
            command: Commands::Menu,
        }
    }
}
