//! Diet chart generator flow
//!
//! Produces a week-long diet chart for a daily calorie intake. The
//! calorie value comes from the user when supplied, otherwise from the
//! target stored by the BMI flow earlier in the session.

use crate::error::{NutriSenseError, Result};
use crate::prompts::build_diet_chart_prompt;
use crate::providers::Provider;
use crate::session::Session;

/// Run the diet-chart flow
///
/// # Arguments
///
/// * `provider` - AI gateway
/// * `session` - Session holding the calorie target from the BMI flow
/// * `calories_override` - Explicit calorie intake entered by the user,
///   taking precedence over the stored session value
///
/// # Errors
///
/// Returns `InvalidInput` when no calorie value is available from either
/// source, and `Upstream` when the gateway call fails
pub async fn run_diet_chart_flow(
    provider: &dyn Provider,
    session: &Session,
    calories_override: Option<f64>,
) -> Result<String> {
    let daily_calories = calories_override
        .or_else(|| session.calorie_target())
        .ok_or_else(|| {
            NutriSenseError::InvalidInput(
                "please enter your daily calorie intake to generate the diet chart".to_string(),
            )
        })?;

    if daily_calories <= 0.0 {
        return Err(NutriSenseError::InvalidInput(format!(
            "daily calorie intake must be positive, got {}",
            daily_calories
        ))
        .into());
    }

    tracing::info!("Generating diet chart for {:.2} daily calories", daily_calories);
    let prompt = build_diet_chart_prompt(daily_calories);
    super::send_prompt(provider, &daily_calories.to_string(), &prompt).await
}
