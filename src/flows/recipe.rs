//! AI recipe generator flow
//!
//! Generates a recipe from a dish name, a dish photo, or both. When an
//! image is present the vision model is used and any dish name becomes
//! extra context; otherwise a text-only call is made.

use crate::error::{NutriSenseError, Result};
use crate::image_input::ImageInput;
use crate::prompts::{build_recipe_image_prompt, build_recipe_text_prompt};
use crate::providers::Provider;

/// Run the recipe flow
///
/// # Arguments
///
/// * `provider` - AI gateway
/// * `dish` - Dish name entered by the user, if any
/// * `image` - Dish photo uploaded by the user, if any
///
/// # Errors
///
/// Returns `InvalidInput` when neither a dish name nor an image is
/// supplied, and `Upstream` when the gateway call fails
pub async fn run_recipe_flow(
    provider: &dyn Provider,
    dish: Option<&str>,
    image: Option<ImageInput>,
) -> Result<String> {
    let dish = dish.map(str::trim).filter(|d| !d.is_empty());

    match (dish, image) {
        (_, Some(image)) => {
            tracing::info!("Generating recipe from image ({})", image.mime_type);
            let prompt = build_recipe_image_prompt(image);
            super::send_prompt(provider, dish.unwrap_or(""), &prompt).await
        }
        (Some(dish), None) => {
            tracing::info!("Generating recipe for '{}'", dish);
            let prompt = build_recipe_text_prompt(dish);
            super::send_prompt(provider, dish, &prompt).await
        }
        (None, None) => Err(NutriSenseError::InvalidInput(
            "please enter a dish name or upload an image to generate a recipe".to_string(),
        )
        .into()),
    }
}
