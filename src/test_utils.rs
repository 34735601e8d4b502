//! Shared test helpers
//!
//! Provides a stub AI gateway that returns canned responses and records
//! every call, so flows can be exercised without network access.

use crate::error::{NutriSenseError, Result};
use crate::image_input::ImageInput;
use crate::providers::Provider;
use async_trait::async_trait;
use std::sync::Mutex;

/// A recorded gateway call
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    /// Context text passed to the gateway
    pub context: String,
    /// Instruction prompt passed to the gateway
    pub prompt: String,
    /// MIME type of the attached image, if any
    pub image_mime: Option<String>,
}

/// Stub gateway returning queued responses in order
pub struct StubProvider {
    responses: Mutex<Vec<String>>,
    calls: Mutex<Vec<RecordedCall>>,
    fail: bool,
}

impl StubProvider {
    /// Create a stub that yields the given responses, one per call
    pub fn with_responses(responses: Vec<&str>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().map(String::from).collect()),
            calls: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    /// Create a stub whose every call fails with an upstream error
    pub fn failing() -> Self {
        Self {
            responses: Mutex::new(Vec::new()),
            calls: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// Calls recorded so far, in order
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record_and_respond(
        &self,
        context: &str,
        prompt: &str,
        image_mime: Option<String>,
    ) -> Result<String> {
        self.calls.lock().unwrap().push(RecordedCall {
            context: context.to_string(),
            prompt: prompt.to_string(),
            image_mime,
        });

        if self.fail {
            return Err(NutriSenseError::Upstream("stub failure".to_string()).into());
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Ok("stub response".to_string())
        } else {
            Ok(responses.remove(0))
        }
    }
}

#[async_trait]
impl Provider for StubProvider {
    fn name(&self) -> &str {
        "stub"
    }

    async fn generate_from_text(&self, context: &str, prompt: &str) -> Result<String> {
        self.record_and_respond(context, prompt, None)
    }

    async fn generate_from_image_and_text(
        &self,
        context: &str,
        image: &ImageInput,
        prompt: &str,
    ) -> Result<String> {
        self.record_and_respond(context, prompt, Some(image.mime_type.clone()))
    }
}

/// Build a small JPEG image input for tests
pub fn sample_jpeg() -> ImageInput {
    ImageInput::new(vec![0xFF, 0xD8, 0xFF, 0xE0], "image/jpeg").unwrap()
}
