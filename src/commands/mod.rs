/*!
Command handlers for the CLI

This module provides command handlers invoked by the CLI entrypoint.

It exposes one handler per feature mode:

- `run_bmi`             — BMI calculator (fully offline)
- `run_diet_chart`      — Week-long diet chart generation
- `run_calorie_advisor` — Two-stage food image analysis
- `run_recipe`          — Recipe generation from a dish name or image
- `run_lifestyle`       — Traditional lifestyle recommendations
- `menu`                — Interactive menu looping over all five modes

These handlers are intentionally small and use the library components:
flows, the metrics engine, and the AI gateway. Invalid user input is
reported as a terminal warning rather than a hard failure; upstream and
configuration errors propagate to the entrypoint.
*/

use crate::config::Config;
use crate::error::{NutriSenseError, Result};
use crate::flows;
use crate::image_input::ImageInput;
use crate::providers::create_provider;
use crate::session::Session;
use colored::Colorize;
use std::path::Path;

// Interactive menu mode
pub mod menu;

/// Print a yellow warning when the error is invalid user input
///
/// Returns true when the error was consumed as a warning.
fn warn_on_invalid_input(err: &anyhow::Error) -> bool {
    if let Some(NutriSenseError::InvalidInput(msg)) = err.downcast_ref::<NutriSenseError>() {
        println!("{}", format!("Warning: {}", msg).yellow());
        true
    } else {
        false
    }
}

/// Run the BMI calculator
///
/// Computes BMI, weight status, and the daily calorie target entirely
/// locally; no gateway call is made.
pub fn run_bmi(session: &mut Session, weight: &str, height: &str, age: &str) -> Result<()> {
    let report = match flows::parse_body_metrics(weight, height, age)
        .and_then(|body| flows::run_bmi_flow(session, body))
    {
        Ok(report) => report,
        Err(e) if warn_on_invalid_input(&e) => return Ok(()),
        Err(e) => return Err(e),
    };

    println!(
        "Your BMI is {} and you are {}",
        format!("{:.2}", report.result.bmi).bold(),
        report.result.category.to_string().cyan()
    );

    if let Some(target) = report.calorie_target {
        println!(
            "Your daily calorie requirement is {} calories",
            format!("{:.1}", target).bold()
        );
    } else if report.needs_professional_advice() {
        println!(
            "{}",
            "You are underweight. Please consult a healthcare professional for advice.".yellow()
        );
    }

    Ok(())
}

/// Generate a week-long diet chart
pub async fn run_diet_chart(
    config: &Config,
    session: &Session,
    calories: Option<f64>,
) -> Result<()> {
    let provider = create_provider(&config.provider.provider_type, &config.provider)?;

    match flows::run_diet_chart_flow(provider.as_ref(), session, calories).await {
        Ok(chart) => {
            println!("{}", "Diet Chart".green().bold());
            println!("{}", chart);
            Ok(())
        }
        Err(e) if warn_on_invalid_input(&e) => Ok(()),
        Err(e) => Err(e),
    }
}

/// Analyze a food image and report dietary suitability
pub async fn run_calorie_advisor(config: &Config, image_path: &Path) -> Result<()> {
    let provider = create_provider(&config.provider.provider_type, &config.provider)?;

    let image = match ImageInput::from_path(image_path) {
        Ok(image) => image,
        Err(e) if warn_on_invalid_input(&e) => return Ok(()),
        Err(e) => return Err(e),
    };

    let report = flows::run_calorie_advisor_flow(provider.as_ref(), &image).await?;

    println!("{}", "Calorie Analysis".green().bold());
    println!("{}", report.analysis);
    println!();
    println!("{}", "Dietary Guidance".green().bold());
    println!("{}", report.follow_up);

    Ok(())
}

/// Generate a recipe from a dish name, an image, or both
pub async fn run_recipe(
    config: &Config,
    dish: Option<&str>,
    image_path: Option<&Path>,
) -> Result<()> {
    let provider = create_provider(&config.provider.provider_type, &config.provider)?;

    let image = match image_path.map(ImageInput::from_path).transpose() {
        Ok(image) => image,
        Err(e) if warn_on_invalid_input(&e) => return Ok(()),
        Err(e) => return Err(e),
    };

    match flows::run_recipe_flow(provider.as_ref(), dish, image).await {
        Ok(recipe) => {
            println!("{}", "Recipe".green().bold());
            println!("{}", recipe);
            Ok(())
        }
        Err(e) if warn_on_invalid_input(&e) => Ok(()),
        Err(e) => Err(e),
    }
}

/// Get traditional Indian lifestyle recommendations for a health concern
pub async fn run_lifestyle(config: &Config, concern: &str) -> Result<()> {
    let provider = create_provider(&config.provider.provider_type, &config.provider)?;

    match flows::run_lifestyle_flow(provider.as_ref(), concern).await {
        Ok(advice) => {
            println!("{}", "Lifestyle Recommendation".green().bold());
            println!("{}", advice);
            Ok(())
        }
        Err(e) if warn_on_invalid_input(&e) => Ok(()),
        Err(e) => Err(e),
    }
}
