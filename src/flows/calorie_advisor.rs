//! Calorie advisor flow
//!
//! An explicit two-step pipeline: the vision model itemizes the food in
//! an uploaded image with calorie counts, then a text follow-up call uses
//! that analysis as context to describe dietary suitability. The two
//! steps are sequential with no parallelism; each is independently
//! testable with a stub gateway.

use crate::error::Result;
use crate::image_input::ImageInput;
use crate::prompts::{build_calorie_analysis_prompt, build_follow_up_prompt};
use crate::providers::Provider;

/// Output of the two-stage calorie advisor pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct CalorieAdvisorReport {
    /// Itemized food and calorie analysis from the vision model
    pub analysis: String,
    /// Dietary suitability follow-up generated from the analysis
    pub follow_up: String,
}

/// Step 1: analyze a food image and itemize calories
///
/// # Errors
///
/// Returns `Upstream` when the vision call fails
pub async fn analyze_food_image(provider: &dyn Provider, image: &ImageInput) -> Result<String> {
    let prompt = build_calorie_analysis_prompt(image.clone());
    super::send_prompt(provider, "", &prompt).await
}

/// Step 2: ask who should eat or avoid the analyzed items
///
/// Takes step 1's output as the context for a text-only call.
///
/// # Errors
///
/// Returns `Upstream` when the text call fails
pub async fn dietary_follow_up(provider: &dyn Provider, analysis: &str) -> Result<String> {
    let prompt = build_follow_up_prompt();
    super::send_prompt(provider, analysis, &prompt).await
}

/// Run the full calorie-advisor pipeline
///
/// The two gateway calls are chained sequentially; a failure in the
/// first step aborts the flow before the second call is made.
///
/// # Errors
///
/// Returns `Upstream` when either gateway call fails
pub async fn run_calorie_advisor_flow(
    provider: &dyn Provider,
    image: &ImageInput,
) -> Result<CalorieAdvisorReport> {
    let analysis = analyze_food_image(provider, image).await?;
    tracing::debug!("Food analysis complete ({} chars)", analysis.len());
    let follow_up = dietary_follow_up(provider, &analysis).await?;

    Ok(CalorieAdvisorReport {
        analysis,
        follow_up,
    })
}
