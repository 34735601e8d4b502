//! Lifestyle recommendation prompt template

use super::Prompt;

/// Build the lifestyle-recommendation instruction for a health concern
///
/// The concern text is interpolated verbatim into a fixed template;
/// the returned prompt is text-only.
///
/// # Examples
///
/// ```
/// use nutrisense::prompts::build_lifestyle_prompt;
///
/// let prompt = build_lifestyle_prompt("migraine");
/// assert!(prompt.instruction.contains("migraine"));
/// ```
pub fn build_lifestyle_prompt(concern: &str) -> Prompt {
    Prompt::text(format!(
        r#"You are an Indian wellness expert who stays up to date on the newest nutrition research and advancements by reading Indian ancient and scientific publications on a regular basis, attending continuing education courses and seminars, and engaging in professional development programmes. Please provide lifestyle recommendations for someone with {}.
Include activities such as pranayama, yogic kriyas, mudras, eating habits, and sleeping schedule. You can also mention Nani/Dadi maa home remedies for that concern or disease.
Also tell the importance of slow cooking in earthen pots as they help retain the nutrients in the food, ensuring that the food is healthy and nutritious. Also share facts like drinking water from copper utensils and other well-known ancient Indian lifestyle facts to keep a healthy body and mind. Only mention these if they are related to the concern given by the user."#,
        concern
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifestyle_prompt_interpolates_concern() {
        let prompt = build_lifestyle_prompt("type 2 diabetes");
        assert!(prompt.instruction.contains("type 2 diabetes"));
    }

    #[test]
    fn test_lifestyle_prompt_covers_wellness_activities() {
        let prompt = build_lifestyle_prompt("insomnia");
        assert!(prompt.instruction.contains("pranayama"));
        assert!(prompt.instruction.contains("mudras"));
        assert!(prompt.instruction.contains("sleeping schedule"));
    }

    #[test]
    fn test_lifestyle_prompt_is_text_only() {
        let prompt = build_lifestyle_prompt("anemia");
        assert!(prompt.image.is_none());
    }
}
