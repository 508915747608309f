//! Client for the OpenAI-style image generation API.

use crate::ImageGateway;
use crate::images::ImageGenerationRequest;
use async_trait::async_trait;
use blogsmith_error::{BlogsmithResult, ImageError, ImageErrorKind};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, instrument};

/// Connection settings for the image gateway.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct ImageConfig {
    /// API key for the images API
    api_key: String,
    /// Model identifier, e.g. "dall-e-3"
    model: String,
    /// Base URL of the API
    #[builder(default = "default_base_url()")]
    base_url: String,
    /// Requested resolution
    #[builder(default = "String::from(\"1792x1024\")")]
    size: String,
    /// Outbound request timeout in seconds
    #[builder(default = "60")]
    timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.openai.com".to_string()
}

impl ImageConfig {
    /// Returns a builder for constructing an ImageConfig.
    pub fn builder() -> ImageConfigBuilder {
        ImageConfigBuilder::default()
    }
}

/// Client for the image generation API.
///
/// Requests exactly one URL-form image per invocation.
#[derive(Debug, Clone)]
pub struct OpenAiImageClient {
    client: reqwest::Client,
    config: ImageConfig,
}

impl OpenAiImageClient {
    /// Creates a new image client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: ImageConfig) -> Result<Self, ImageError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(*config.timeout_secs()))
            .build()
            .map_err(|e| ImageError::new(ImageErrorKind::ClientCreation(e.to_string())))?;

        debug!(model = %config.model(), url = %config.base_url(), "Created image client");

        Ok(Self { client, config })
    }

    /// Sends the prompt and returns the raw vendor payload.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails in transport or the API answers
    /// with a non-success status.
    #[instrument(skip(self, prompt), fields(model = %self.config.model()))]
    pub async fn generate_image(&self, prompt: &str) -> Result<Value, ImageError> {
        let request = ImageGenerationRequest::builder()
            .model(self.config.model())
            .prompt(prompt)
            .size(self.config.size())
            .build()
            .expect("Valid ImageGenerationRequest");

        let url = format!("{}/v1/images/generations", self.config.base_url());
        debug!(prompt_chars = prompt.len(), "Sending image request");

        let response = self
            .client
            .post(&url)
            .header(
                "Authorization",
                format!("Bearer {}", self.config.api_key()),
            )
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                ImageError::new(ImageErrorKind::Http(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(status = %status, error = %error_text, "Image API error");
            return Err(ImageError::new(ImageErrorKind::Api {
                status: status.as_u16(),
                message: error_text,
            }));
        }

        let raw: Value = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to read response body");
            ImageError::new(ImageErrorKind::Http(format!(
                "failed to read response body: {}",
                e
            )))
        })?;

        debug!("Received image payload");
        Ok(raw)
    }
}

#[async_trait]
impl ImageGateway for OpenAiImageClient {
    async fn generate(&self, prompt: &str) -> BlogsmithResult<Value> {
        Ok(self.generate_image(prompt).await?)
    }
}
