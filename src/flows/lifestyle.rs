//! Lifestyle recommendation flow
//!
//! Generates traditional Indian wellness guidance for a health concern
//! described in free text.

use crate::error::{NutriSenseError, Result};
use crate::prompts::build_lifestyle_prompt;
use crate::providers::Provider;

/// Run the lifestyle-recommendation flow
///
/// # Errors
///
/// Returns `InvalidInput` when the concern is empty and `Upstream` when
/// the gateway call fails
pub async fn run_lifestyle_flow(provider: &dyn Provider, concern: &str) -> Result<String> {
    let concern = concern.trim();
    if concern.is_empty() {
        return Err(NutriSenseError::InvalidInput(
            "please describe a health concern to get lifestyle recommendations".to_string(),
        )
        .into());
    }

    tracing::info!("Generating lifestyle recommendation for '{}'", concern);
    let prompt = build_lifestyle_prompt(concern);
    super::send_prompt(provider, concern, &prompt).await
}
