//! Image input handling for vision-backed flows
//!
//! Loads raw image bytes from disk and pairs them with a MIME type for the
//! AI gateway. Bytes pass through untouched: no resizing, no re-encoding.
//! Only JPEG and PNG are accepted.

use crate::error::{NutriSenseError, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use image::ImageFormat;
use std::path::Path;

/// MIME types the gateway accepts
pub const SUPPORTED_MIME_TYPES: &[&str] = &["image/jpeg", "image/png"];

/// Raw image bytes plus MIME type, ready to send to the AI gateway
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInput {
    /// Raw file bytes, passed through unmodified
    pub data: Vec<u8>,
    /// MIME type string ("image/jpeg" or "image/png")
    pub mime_type: String,
}

impl ImageInput {
    /// Create an image input from raw bytes and an explicit MIME type
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedMedia` if the MIME type is not JPEG or PNG,
    /// or `InvalidInput` if the byte buffer is empty
    pub fn new(data: Vec<u8>, mime_type: impl Into<String>) -> Result<Self> {
        let mime_type = mime_type.into();
        if !SUPPORTED_MIME_TYPES.contains(&mime_type.as_str()) {
            return Err(NutriSenseError::UnsupportedMedia(mime_type).into());
        }
        if data.is_empty() {
            return Err(NutriSenseError::InvalidInput("image file is empty".to_string()).into());
        }
        Ok(Self { data, mime_type })
    }

    /// Load an image from disk, detecting its format from the file content
    ///
    /// # Arguments
    ///
    /// * `path` - Path to a JPEG or PNG file
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the file is missing or empty, and
    /// `UnsupportedMedia` if the content is not JPEG or PNG
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use nutrisense::image_input::ImageInput;
    ///
    /// let input = ImageInput::from_path("food.jpg").unwrap();
    /// assert_eq!(input.mime_type, "image/jpeg");
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|e| {
            NutriSenseError::InvalidInput(format!(
                "cannot read image file {}: {}",
                path.display(),
                e
            ))
        })?;
        if data.is_empty() {
            return Err(NutriSenseError::InvalidInput(format!(
                "image file {} is empty",
                path.display()
            ))
            .into());
        }

        let mime_type = detect_mime_type(&data)?;
        tracing::debug!(
            "Loaded image {} ({} bytes, {})",
            path.display(),
            data.len(),
            mime_type
        );
        Ok(Self { data, mime_type })
    }

    /// Encode the raw bytes as base64 for inline transmission
    pub fn to_base64(&self) -> String {
        BASE64.encode(&self.data)
    }
}

/// Detect the MIME type from the image's magic bytes
///
/// # Errors
///
/// Returns `UnsupportedMedia` for anything other than JPEG or PNG
fn detect_mime_type(data: &[u8]) -> Result<String> {
    let format = image::guess_format(data).map_err(|_| {
        NutriSenseError::UnsupportedMedia("unrecognized image format".to_string())
    })?;
    match format {
        ImageFormat::Jpeg => Ok("image/jpeg".to_string()),
        ImageFormat::Png => Ok("image/png".to_string()),
        other => Err(NutriSenseError::UnsupportedMedia(format!("{:?}", other)).into()),
    }
}
