//! Configuration for the content generation server.

use blogsmith_error::ConfigError;
use blogsmith_models::{GeminiConfig, ImageConfig};
use derive_getters::Getters;
use serde::Deserialize;
use std::path::Path;
use typed_builder::TypedBuilder;

fn default_bind_addr() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_text_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_image_model() -> String {
    "dall-e-3".to_string()
}

fn default_image_size() -> String {
    "1792x1024".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

/// Configuration for the content generation server.
///
/// Loaded from a TOML file, then overlaid with environment variables (env
/// wins). API keys usually arrive only through the environment, so the file
/// may omit them.
#[derive(Debug, Clone, Deserialize, Getters, TypedBuilder)]
pub struct ServerConfig {
    /// Address the HTTP server binds to
    #[serde(default = "default_bind_addr")]
    #[builder(default = default_bind_addr(), setter(into))]
    bind_addr: String,
    /// Text generation gateway settings
    #[serde(default)]
    #[builder(default)]
    text: TextSettings,
    /// Image generation gateway settings
    #[serde(default)]
    #[builder(default)]
    image: ImageSettings,
}

/// Settings for the text generation gateway.
#[derive(Debug, Clone, Deserialize, Getters, TypedBuilder)]
pub struct TextSettings {
    /// API key; usually supplied via GEMINI_API_KEY
    #[serde(default)]
    #[builder(default, setter(strip_option, into))]
    api_key: Option<String>,
    /// Model identifier
    #[serde(default = "default_text_model")]
    #[builder(default = default_text_model(), setter(into))]
    model: String,
    /// Base URL override, e.g. for a local proxy
    #[serde(default)]
    #[builder(default, setter(strip_option, into))]
    base_url: Option<String>,
    /// Outbound request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    #[builder(default = default_timeout_secs())]
    timeout_secs: u64,
}

impl Default for TextSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_text_model(),
            base_url: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Settings for the image generation gateway.
#[derive(Debug, Clone, Deserialize, Getters, TypedBuilder)]
pub struct ImageSettings {
    /// API key; usually supplied via OPENAI_API_KEY
    #[serde(default)]
    #[builder(default, setter(strip_option, into))]
    api_key: Option<String>,
    /// Model identifier
    #[serde(default = "default_image_model")]
    #[builder(default = default_image_model(), setter(into))]
    model: String,
    /// Base URL override
    #[serde(default)]
    #[builder(default, setter(strip_option, into))]
    base_url: Option<String>,
    /// Requested resolution
    #[serde(default = "default_image_size")]
    #[builder(default = default_image_size(), setter(into))]
    size: String,
    /// Outbound request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    #[builder(default = default_timeout_secs())]
    timeout_secs: u64,
}

impl Default for ImageSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_image_model(),
            base_url: None,
            size: default_image_size(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[tracing::instrument(skip(path))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Load configuration: file when given, defaults otherwise, environment
    /// variables overlaid on top.
    ///
    /// Recognized variables: `BLOGSMITH_BIND_ADDR`, `GEMINI_API_KEY`,
    /// `BLOGSMITH_TEXT_MODEL`, `BLOGSMITH_TEXT_BASE_URL`, `OPENAI_API_KEY`,
    /// `BLOGSMITH_IMAGE_MODEL`, `BLOGSMITH_IMAGE_BASE_URL`,
    /// `BLOGSMITH_IMAGE_SIZE`.
    ///
    /// # Errors
    ///
    /// Returns an error if a given file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::builder().build(),
        };
        config.apply_env();
        Ok(config)
    }

    fn apply_env(&mut self) {
        if let Ok(addr) = std::env::var("BLOGSMITH_BIND_ADDR") {
            self.bind_addr = addr;
        }
        if let Ok(key) = std::env::var("GEMINI_API_KEY") {
            self.text.api_key = Some(key);
        }
        if let Ok(model) = std::env::var("BLOGSMITH_TEXT_MODEL") {
            self.text.model = model;
        }
        if let Ok(url) = std::env::var("BLOGSMITH_TEXT_BASE_URL") {
            self.text.base_url = Some(url);
        }
        if let Ok(key) = std::env::var("OPENAI_API_KEY") {
            self.image.api_key = Some(key);
        }
        if let Ok(model) = std::env::var("BLOGSMITH_IMAGE_MODEL") {
            self.image.model = model;
        }
        if let Ok(url) = std::env::var("BLOGSMITH_IMAGE_BASE_URL") {
            self.image.base_url = Some(url);
        }
        if let Ok(size) = std::env::var("BLOGSMITH_IMAGE_SIZE") {
            self.image.size = size;
        }
    }

    /// Resolves the text gateway configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if no text API key was configured.
    pub fn text_config(&self) -> Result<GeminiConfig, ConfigError> {
        let api_key = self
            .text
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| ConfigError::new("GEMINI_API_KEY not set"))?;

        let mut builder = GeminiConfig::builder();
        builder
            .api_key(api_key)
            .model(self.text.model())
            .timeout_secs(*self.text.timeout_secs());
        if let Some(url) = self.text.base_url() {
            builder.base_url(url);
        }
        builder
            .build()
            .map_err(|e| ConfigError::new(format!("Invalid text gateway config: {}", e)))
    }

    /// Resolves the image gateway configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if no image API key was configured.
    pub fn image_config(&self) -> Result<ImageConfig, ConfigError> {
        let api_key = self
            .image
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| ConfigError::new("OPENAI_API_KEY not set"))?;

        let mut builder = ImageConfig::builder();
        builder
            .api_key(api_key)
            .model(self.image.model())
            .size(self.image.size())
            .timeout_secs(*self.image.timeout_secs());
        if let Some(url) = self.image.base_url() {
            builder.base_url(url);
        }
        builder
            .build()
            .map_err(|e| ConfigError::new(format!("Invalid image gateway config: {}", e)))
    }
}
