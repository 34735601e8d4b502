//! Calorie advisor prompt templates
//!
//! Two templates back the two-stage calorie-advisor pipeline: an image
//! analysis instruction for the vision model, then a follow-up instruction
//! sent with the analysis text as context.

use super::Prompt;
use crate::image_input::ImageInput;

/// Build the food-image analysis instruction
///
/// Asks the vision model to itemize food in the image with per-item
/// calories and a nutrient breakdown. The uploaded image travels with
/// the prompt as an inline part.
pub fn build_calorie_analysis_prompt(image: ImageInput) -> Prompt {
    Prompt::with_image(
        r#"You are a nutrition expert. Please provide details of the food items in the image to calculate the total calories. Also tell about carbohydrates, fats, fiber, cholesterol, proteins, vitamins, minerals, etc. - basically describe the amount of each nutrient the image contains.
Please format the output as follows:
1. Item 1 - No. of calories
2. Item 2 - No. of calories
----
----"#,
        image,
    )
}

/// Build the dietary follow-up instruction
///
/// Text-only; the caller sends the first stage's analysis text as
/// context alongside this instruction.
pub fn build_follow_up_prompt() -> Prompt {
    Prompt::text(
        "Can you provide more details about these food items and who should eat and who should avoid them, like for which diseases they would benefit and for which diseases doctors recommend avoiding them?",
    )
}
