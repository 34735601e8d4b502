//! Diet chart prompt template
//!
//! Builds the instruction for generating a week-long vegetarian Indian
//! diet chart sized to a daily calorie intake.

use super::Prompt;

/// Build the diet-chart instruction for a daily calorie intake
///
/// The calorie value is interpolated verbatim into a fixed template;
/// the returned prompt is text-only.
///
/// # Arguments
///
/// * `daily_calories` - Daily calorie intake the chart should target
///
/// # Examples
///
/// ```
/// use nutrisense::prompts::build_diet_chart_prompt;
///
/// let prompt = build_diet_chart_prompt(1978.5);
/// assert!(prompt.instruction.contains("1978.5"));
/// ```
pub fn build_diet_chart_prompt(daily_calories: f64) -> Prompt {
    Prompt::text(format!(
        r#"You are an expert Indian dietician who is aware of the importance of Indian millets, Indian super foods, and different Indian delicacies. Your task is to generate a balanced, pure vegetarian Indian diet chart with complete nutritional value, including millets and ancient Indian super foods, for a week (7 days), based on the daily calorie intake provided by the user.
Daily Calorie Intake: {}"#,
        daily_calories
    ))
}
