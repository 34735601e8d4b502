//! User-facing flows for NutriSense
//!
//! One module per feature mode: BMI calculator, diet chart generator,
//! calorie advisor, recipe generator, and lifestyle recommendation.
//! Flows orchestrate the metrics engine, prompt builders, session state,
//! and the AI gateway; they perform no terminal I/O themselves so they
//! can be tested with a stub gateway.

pub mod bmi;
pub mod calorie_advisor;
pub mod diet_chart;
pub mod lifestyle;
pub mod recipe;

pub use bmi::{parse_body_metrics, run_bmi_flow, BmiReport};
pub use calorie_advisor::{
    analyze_food_image, dietary_follow_up, run_calorie_advisor_flow, CalorieAdvisorReport,
};
pub use diet_chart::run_diet_chart_flow;
pub use lifestyle::run_lifestyle_flow;
pub use recipe::run_recipe_flow;

use crate::error::Result;
use crate::prompts::Prompt;
use crate::providers::Provider;

/// Send a built prompt through the gateway
///
/// Routes to the vision call when the prompt carries an image part,
/// the text call otherwise.
pub(crate) async fn send_prompt(
    provider: &dyn Provider,
    context: &str,
    prompt: &Prompt,
) -> Result<String> {
    match &prompt.image {
        Some(image) => {
            provider
                .generate_from_image_and_text(context, image, &prompt.instruction)
                .await
        }
        None => provider.generate_from_text(context, &prompt.instruction).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{sample_jpeg, StubProvider};

    #[tokio::test]
    async fn test_send_prompt_routes_image_prompts_to_vision() {
        let provider = StubProvider::with_responses(vec!["seen"]);
        let prompt = Prompt::with_image("describe", sample_jpeg());

        send_prompt(&provider, "ctx", &prompt).await.unwrap();

        let calls = provider.calls();
        assert_eq!(calls[0].image_mime, Some("image/jpeg".to_string()));
        assert_eq!(calls[0].prompt, "describe");
    }

    #[tokio::test]
    async fn test_send_prompt_routes_text_prompts_to_text() {
        let provider = StubProvider::with_responses(vec!["ok"]);
        let prompt = Prompt::text("summarize");

        send_prompt(&provider, "ctx", &prompt).await.unwrap();

        let calls = provider.calls();
        assert!(calls[0].image_mime.is_none());
        assert_eq!(calls[0].context, "ctx");
    }
}
