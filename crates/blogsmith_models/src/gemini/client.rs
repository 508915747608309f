//! Client for the Gemini generateContent API.

use crate::TextGateway;
use crate::gemini::GenerateContentRequest;
use async_trait::async_trait;
use blogsmith_error::{BlogsmithResult, GeminiError, GeminiErrorKind};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, instrument};

/// Connection settings for the Gemini gateway.
///
/// Injected at construction time; nothing reads the process environment at
/// call time.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct GeminiConfig {
    /// API key for the generative language API
    api_key: String,
    /// Model identifier, e.g. "gemini-2.0-flash"
    model: String,
    /// Base URL of the API
    #[builder(default = "default_base_url()")]
    base_url: String,
    /// Outbound request timeout in seconds
    #[builder(default = "60")]
    timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

impl GeminiConfig {
    /// Returns a builder for constructing a GeminiConfig.
    pub fn builder() -> GeminiConfigBuilder {
        GeminiConfigBuilder::default()
    }
}

/// Client for the Gemini text generation API.
///
/// One outbound POST per invocation, one synchronous response. Failures are
/// terminal for the request; nothing is retried.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Creates a new Gemini client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: GeminiConfig) -> Result<Self, GeminiError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(*config.timeout_secs()))
            .build()
            .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())))?;

        debug!(model = %config.model(), url = %config.base_url(), "Created Gemini client");

        Ok(Self { client, config })
    }

    /// Sends the prompt and returns the raw vendor envelope.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails in transport or the API answers
    /// with a non-success status. Decoding the envelope is a separate step.
    #[instrument(skip(self, prompt), fields(model = %self.config.model()))]
    pub async fn generate_content(&self, prompt: &str) -> Result<Value, GeminiError> {
        let request = GenerateContentRequest::from_prompt(prompt);
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url(),
            self.config.model(),
        );

        debug!(prompt_chars = prompt.len(), "Sending generation request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", self.config.api_key())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                GeminiError::new(GeminiErrorKind::Http(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(status = %status, error = %error_text, "Gemini API error");
            return Err(GeminiError::new(GeminiErrorKind::Api {
                status: status.as_u16(),
                message: error_text,
            }));
        }

        let raw: Value = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to read response body");
            GeminiError::new(GeminiErrorKind::Http(format!(
                "failed to read response body: {}",
                e
            )))
        })?;

        debug!("Received generation envelope");
        Ok(raw)
    }
}

#[async_trait]
impl TextGateway for GeminiClient {
    async fn generate(&self, prompt: &str) -> BlogsmithResult<Value> {
        Ok(self.generate_content(prompt).await?)
    }
}
