//! Google Gemini provider implementation
//!
//! Connects to the Generative Language REST API
//! (`models/{model}:generateContent`). Text requests go to the configured
//! text model, vision requests to the vision model with the image sent as
//! an inline base64 part. No retries and no timeout handling: a call runs
//! to completion or fails outright.
//!
//! The API key is read from the `GOOGLE_API_KEY` environment variable when
//! the provider is constructed. Absence is not validated locally; an empty
//! key surfaces as an upstream auth failure on the first call.

use crate::config::GeminiConfig;
use crate::error::{NutriSenseError, Result};
use crate::image_input::ImageInput;
use crate::providers::Provider;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Environment variable holding the Gemini API key
pub const GEMINI_API_KEY_ENV: &str = "GOOGLE_API_KEY";

/// Default base URL for the Generative Language API
const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Request structure for the generateContent endpoint
#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
}

/// A single content entry holding ordered parts
#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

/// Part of a content entry: plain text or inline image data
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum GeminiPart {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inline_data")]
        inline_data: InlineData,
    },
}

/// Base64-encoded image bytes with their MIME type
#[derive(Debug, Serialize, Deserialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

/// Response structure from the generateContent endpoint
#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<Candidate>>,
    error: Option<GeminiApiError>,
}

/// Response candidate
#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<GeminiContent>,
}

/// API error body from Gemini
#[derive(Debug, Deserialize)]
struct GeminiApiError {
    message: String,
}

/// Google Gemini AI gateway
pub struct GeminiProvider {
    client: Client,
    config: GeminiConfig,
    api_key: String,
}

impl GeminiProvider {
    /// Create a new Gemini provider instance
    ///
    /// Reads `GOOGLE_API_KEY` from the environment. A missing key is not
    /// an error here; the first API call will fail upstream instead.
    ///
    /// # Arguments
    ///
    /// * `config` - Gemini configuration (model names, optional API base)
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent("nutrisense/0.2.0")
            .build()
            .map_err(|e| NutriSenseError::Upstream(format!("Failed to create HTTP client: {}", e)))?;

        let api_key = std::env::var(GEMINI_API_KEY_ENV).unwrap_or_default();
        if api_key.is_empty() {
            tracing::warn!(
                "{} is not set; Gemini calls will fail with an auth error",
                GEMINI_API_KEY_ENV
            );
        }

        tracing::info!(
            "Initialized Gemini provider: text_model={}, vision_model={}",
            config.text_model,
            config.vision_model
        );

        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    /// Get the configured text model name
    pub fn text_model(&self) -> &str {
        &self.config.text_model
    }

    /// Get the configured vision model name
    pub fn vision_model(&self) -> &str {
        &self.config.vision_model
    }

    /// Build the generateContent URL for a model
    fn build_url(&self, model: &str) -> String {
        let base = self
            .config
            .api_base
            .as_deref()
            .unwrap_or(DEFAULT_API_BASE);
        format!("{}/models/{}:generateContent?key={}", base, model, self.api_key)
    }

    /// Assemble ordered request parts from context, optional image, and prompt
    ///
    /// Empty context is omitted; part order matches the original request
    /// shape: context, image, prompt.
    fn build_parts(context: &str, image: Option<&ImageInput>, prompt: &str) -> Vec<GeminiPart> {
        let mut parts = Vec::new();
        if !context.is_empty() {
            parts.push(GeminiPart::Text {
                text: context.to_string(),
            });
        }
        if let Some(image) = image {
            parts.push(GeminiPart::InlineData {
                inline_data: InlineData {
                    mime_type: image.mime_type.clone(),
                    data: image.to_base64(),
                },
            });
        }
        parts.push(GeminiPart::Text {
            text: prompt.to_string(),
        });
        parts
    }

    /// Send a generateContent request and extract the generated text
    async fn generate(&self, model: &str, parts: Vec<GeminiPart>) -> Result<String> {
        let url = self.build_url(model);
        let request = GeminiRequest {
            contents: vec![GeminiContent { parts }],
        };

        tracing::debug!("Sending generateContent request to model {}", model);

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| NutriSenseError::Upstream(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| NutriSenseError::Upstream(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            tracing::error!("Gemini API error {}: {}", status, body);
            let message = serde_json::from_str::<GeminiResponse>(&body)
                .ok()
                .and_then(|r| r.error)
                .map_or_else(|| body.clone(), |e| e.message);
            return Err(
                NutriSenseError::Upstream(format!("Gemini API error ({}): {}", status, message))
                    .into(),
            );
        }

        let parsed: GeminiResponse = serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}", e);
            NutriSenseError::Upstream(format!("Failed to parse Gemini response: {}", e))
        })?;

        if let Some(error) = parsed.error {
            return Err(NutriSenseError::Upstream(format!(
                "Gemini API error: {}",
                error.message
            ))
            .into());
        }

        extract_text(&parsed)
    }
}

/// Extract the first candidate's text from a parsed response
///
/// Returned text is passed through verbatim, empty strings included.
fn extract_text(response: &GeminiResponse) -> Result<String> {
    let part = response
        .candidates
        .as_ref()
        .and_then(|c| c.first())
        .and_then(|c| c.content.as_ref())
        .and_then(|c| c.parts.first())
        .ok_or_else(|| NutriSenseError::Upstream("No content in Gemini response".to_string()))?;

    match part {
        GeminiPart::Text { text } => Ok(text.clone()),
        GeminiPart::InlineData { .. } => Err(NutriSenseError::Upstream(
            "Unexpected inline data in model output".to_string(),
        )
        .into()),
    }
}

#[async_trait]
impl Provider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate_from_text(&self, context: &str, prompt: &str) -> Result<String> {
        let parts = Self::build_parts(context, None, prompt);
        self.generate(&self.config.text_model, parts).await
    }

    async fn generate_from_image_and_text(
        &self,
        context: &str,
        image: &ImageInput,
        prompt: &str,
    ) -> Result<String> {
        let parts = Self::build_parts(context, Some(image), prompt);
        self.generate(&self.config.vision_model, parts).await
    }
}
