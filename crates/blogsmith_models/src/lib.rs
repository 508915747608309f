//! Generative AI vendor gateways for blogsmith.
//!
//! Each gateway owns exactly one outbound HTTP call to a third-party API and
//! hands back the vendor envelope as raw JSON; the decoders in each module
//! turn an envelope into domain types without ever discarding the payload on
//! failure.

pub mod gemini;
pub mod images;

use async_trait::async_trait;
use blogsmith_error::BlogsmithResult;
use serde_json::Value;

pub use gemini::{GeminiClient, GeminiConfig, GeminiConfigBuilder};
pub use images::{ImageConfig, ImageConfigBuilder, OpenAiImageClient};

/// Gateway to a text generation API.
///
/// Implementations issue one synchronous request per invocation and return
/// the vendor envelope verbatim. No retry, no streaming.
#[async_trait]
pub trait TextGateway: Send + Sync {
    /// Sends the prompt and returns the raw vendor envelope.
    async fn generate(&self, prompt: &str) -> BlogsmithResult<Value>;
}

/// Gateway to an image generation API.
#[async_trait]
pub trait ImageGateway: Send + Sync {
    /// Sends the prompt and returns the raw vendor payload.
    async fn generate(&self, prompt: &str) -> BlogsmithResult<Value>;
}
