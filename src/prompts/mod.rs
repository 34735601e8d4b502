//! Prompt templates for the AI-backed flows
//!
//! Each flow has a fixed instruction template with user parameters
//! interpolated verbatim (no escaping, no templating engine). Builders
//! only produce the text and optional image part; they never call the
//! gateway.

pub mod calorie_advisor;
pub mod diet_chart;
pub mod lifestyle;
pub mod recipe;

use crate::image_input::ImageInput;

pub use calorie_advisor::{build_calorie_analysis_prompt, build_follow_up_prompt};
pub use diet_chart::build_diet_chart_prompt;
pub use lifestyle::build_lifestyle_prompt;
pub use recipe::{build_recipe_image_prompt, build_recipe_text_prompt};

/// Instruction text plus optional image bytes, built per request and
/// discarded after the gateway call
#[derive(Debug, Clone)]
pub struct Prompt {
    /// Instruction template with user parameters already interpolated
    pub instruction: String,
    /// Optional image part for vision-backed requests
    pub image: Option<ImageInput>,
}

impl Prompt {
    /// Create a text-only prompt
    pub fn text(instruction: impl Into<String>) -> Self {
        Self {
            instruction: instruction.into(),
            image: None,
        }
    }

    /// Create a prompt carrying an image part
    pub fn with_image(instruction: impl Into<String>, image: ImageInput) -> Self {
        Self {
            instruction: instruction.into(),
            image: Some(image),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_prompt_has_no_image() {
        let prompt = Prompt::text("hello");
        assert_eq!(prompt.instruction, "hello");
        assert!(prompt.image.is_none());
    }

    #[test]
    fn test_with_image_attaches_part() {
        let image = ImageInput::new(vec![1, 2, 3], "image/png").unwrap();
        let prompt = Prompt::with_image("analyze", image);
        assert!(prompt.image.is_some());
        assert_eq!(prompt.image.unwrap().mime_type, "image/png");
    }
}
