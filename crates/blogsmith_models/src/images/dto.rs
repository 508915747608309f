//! Data transfer objects for the OpenAI-style images API.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Request body for `/v1/images/generations`.
#[derive(Debug, Clone, Serialize, Builder, Getters)]
#[builder(setter(into))]
pub struct ImageGenerationRequest {
    /// Model identifier
    model: String,
    /// Image prompt
    prompt: String,
    /// Number of images to generate
    #[builder(default = "1")]
    n: u8,
    /// Resolution, e.g. "1792x1024"
    size: String,
    /// "url" to receive a hosted link rather than inline bytes
    #[builder(default = "String::from(\"url\")")]
    response_format: String,
}

impl ImageGenerationRequest {
    /// Creates a new builder for ImageGenerationRequest.
    pub fn builder() -> ImageGenerationRequestBuilder {
        ImageGenerationRequestBuilder::default()
    }
}

/// A single generated image entry.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageDatum {
    /// URL of the hosted image
    pub url: String,
}

/// Response payload for `/v1/images/generations`.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageGenerationResponse {
    /// Generated images; empty when the vendor produced nothing
    #[serde(default)]
    pub data: Vec<ImageDatum>,
}
