//! Recipe prompt templates
//!
//! Text and vision variants: the text variant interpolates the dish name
//! or description; the vision variant describes the dish in an attached
//! image, with any dish text passed separately as context by the caller.

use super::Prompt;
use crate::image_input::ImageInput;

/// Build the recipe instruction for a dish name or description
///
/// # Arguments
///
/// * `dish` - Dish name or free-text description, interpolated verbatim
///
/// # Examples
///
/// ```
/// use nutrisense::prompts::build_recipe_text_prompt;
///
/// let prompt = build_recipe_text_prompt("masala dosa");
/// assert!(prompt.instruction.contains("masala dosa"));
/// ```
pub fn build_recipe_text_prompt(dish: &str) -> Prompt {
    Prompt::text(format!(
        r#"You are a professional chef. Please provide a recipe for '{}'.
Include ingredients, cooking instructions, and estimated cooking time."#,
        dish
    ))
}

/// Build the recipe instruction for a dish image
pub fn build_recipe_image_prompt(image: ImageInput) -> Prompt {
    Prompt::with_image(
        r#"You are a professional chef. Please provide a recipe for the dish in the image.
Include ingredients, cooking instructions, and estimated cooking time."#,
        image,
    )
}
