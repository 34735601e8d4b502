//! NutriSense - AI nutrition assistant CLI
//!
#![doc = "NutriSense - AI nutrition assistant CLI"]
#![doc = "Main entry point for the NutriSense application."]

use anyhow::Result;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use nutrisense::cli::{Cli, Commands};
use nutrisense::commands;
use nutrisense::config::Config;
use nutrisense::session::Session;

#[tokio::main]
async fn main() -> Result<()> {
    // Load GOOGLE_API_KEY and friends from a .env file when present
    dotenvy::dotenv().ok();

    // Parse command line arguments
    let cli = Cli::parse_args();

    // Initialize tracing; --verbose raises the default filter to debug
    init_tracing(cli.verbose);

    // Load configuration
    let config_path = cli.config.as_deref().unwrap_or("config/config.yaml");
    let config = Config::load(config_path, &cli)?;

    // Validate configuration
    config.validate()?;

    // Execute command
    match cli.command {
        Commands::Bmi {
            weight,
            height,
            age,
        } => {
            tracing::info!("Starting BMI calculation");
            let mut session = Session::new();
            commands::run_bmi(&mut session, &weight, &height, &age)?;
            Ok(())
        }
        Commands::DietChart { calories } => {
            tracing::info!("Starting diet chart generation");
            // One-shot invocations have no prior BMI run, so the calorie
            // value must come from the flag
            let session = Session::new();
            commands::run_diet_chart(&config, &session, calories).await?;
            Ok(())
        }
        Commands::CalorieAdvisor { image } => {
            tracing::info!("Starting calorie advisor for {}", image.display());
            commands::run_calorie_advisor(&config, &image).await?;
            Ok(())
        }
        Commands::Recipe { dish, image } => {
            tracing::info!("Starting recipe generation");
            commands::run_recipe(&config, dish.as_deref(), image.as_deref()).await?;
            Ok(())
        }
        Commands::Lifestyle { concern } => {
            tracing::info!("Starting lifestyle recommendation");
            commands::run_lifestyle(&config, &concern).await?;
            Ok(())
        }
        Commands::Menu => {
            tracing::info!("Starting interactive menu");
            commands::menu::run_menu(config).await?;
            Ok(())
        }
    }
}

/// Initialize tracing subscriber with environment filter
///
/// `RUST_LOG` wins when set; otherwise the default level is info, or
/// debug when the verbose flag is given.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "nutrisense=debug"
    } else {
        "nutrisense=info"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
