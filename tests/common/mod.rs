use async_trait::async_trait;
use nutrisense::error::{NutriSenseError, Result};
use nutrisense::image_input::ImageInput;
use nutrisense::providers::Provider;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tempfile::TempDir;

/// A gateway stub for integration tests: queued responses, recorded calls
#[allow(dead_code)]
pub struct ScriptedProvider {
    responses: Mutex<Vec<String>>,
    pub prompts: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl ScriptedProvider {
    pub fn new(responses: Vec<&str>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().map(String::from).collect()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn recorded_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    fn next_response(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Err(NutriSenseError::Upstream("no scripted response left".to_string()).into())
        } else {
            Ok(responses.remove(0))
        }
    }
}

#[async_trait]
impl Provider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn generate_from_text(&self, _context: &str, prompt: &str) -> Result<String> {
        self.next_response(prompt)
    }

    async fn generate_from_image_and_text(
        &self,
        _context: &str,
        _image: &ImageInput,
        prompt: &str,
    ) -> Result<String> {
        self.next_response(prompt)
    }
}

#[allow(dead_code)]
pub fn temp_config_file(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("failed to create tempdir");
    let config_path = temp_dir.path().join("config.yaml");
    fs::write(&config_path, contents).expect("failed to write config file");
    (temp_dir, config_path)
}

/// Minimal JPEG header bytes, enough for format detection
#[allow(dead_code)]
pub const JPEG_BYTES: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46];

#[allow(dead_code)]
pub fn sample_image() -> ImageInput {
    ImageInput::new(JPEG_BYTES.to_vec(), "image/jpeg").expect("valid jpeg input")
}
