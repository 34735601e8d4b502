//! Base provider trait for AI gateways
//!
//! Defines the contract the flows consume: a text generation call and a
//! vision generation call. Any text returned by the gateway, including
//! empty or malformed text, is passed back verbatim; callers perform no
//! retries and no response validation.

use crate::error::Result;
use crate::image_input::ImageInput;
use async_trait::async_trait;

/// AI gateway trait implemented by concrete providers
///
/// # Examples
///
/// ```no_run
/// use nutrisense::providers::Provider;
/// use nutrisense::image_input::ImageInput;
/// use nutrisense::error::Result;
/// use async_trait::async_trait;
///
/// struct MyProvider;
///
/// #[async_trait]
/// impl Provider for MyProvider {
///     fn name(&self) -> &str {
///         "my-provider"
///     }
///
///     async fn generate_from_text(&self, _context: &str, prompt: &str) -> Result<String> {
///         Ok(format!("echo: {}", prompt))
///     }
///
///     async fn generate_from_image_and_text(
///         &self,
///         _context: &str,
///         _image: &ImageInput,
///         prompt: &str,
///     ) -> Result<String> {
///         Ok(format!("echo: {}", prompt))
///     }
/// }
/// ```
#[async_trait]
pub trait Provider: Send + Sync {
    /// Short identifier for the provider
    fn name(&self) -> &str;

    /// Generate text from a context string and an instruction prompt
    ///
    /// # Arguments
    ///
    /// * `context` - Leading context text (may be empty, in which case it
    ///   is omitted from the request)
    /// * `prompt` - Instruction text
    ///
    /// # Errors
    ///
    /// Returns `Upstream` on network, auth, or model failure; the caller
    /// surfaces the error to the user and does not retry
    async fn generate_from_text(&self, context: &str, prompt: &str) -> Result<String>;

    /// Generate text from a context string, an image, and an instruction
    ///
    /// # Arguments
    ///
    /// * `context` - Leading context text (may be empty)
    /// * `image` - Raw image bytes plus MIME type (JPEG or PNG only;
    ///   enforced when the image is loaded)
    /// * `prompt` - Instruction text
    ///
    /// # Errors
    ///
    /// Returns `Upstream` on network, auth, or model failure
    async fn generate_from_image_and_text(
        &self,
        context: &str,
        image: &ImageInput,
        prompt: &str,
    ) -> Result<String>;
}
