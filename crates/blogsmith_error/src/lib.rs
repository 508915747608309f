//! Error types for the blogsmith content generation service.
//!
//! This crate provides the foundation error types used throughout the
//! blogsmith workspace.

mod config;
mod gemini;
mod images;

pub use config::ConfigError;
pub use gemini::{GeminiError, GeminiErrorKind};
pub use images::{ImageError, ImageErrorKind};

/// Aggregate error type for the blogsmith workspace.
///
/// # Examples
///
/// ```
/// use blogsmith_error::{BlogsmithError, ConfigError};
///
/// let err: BlogsmithError = ConfigError::new("missing api key").into();
/// assert!(format!("{}", err).contains("missing api key"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::From)]
pub enum BlogsmithError {
    /// Configuration failure
    #[display("{}", _0)]
    Config(ConfigError),

    /// Text generation gateway failure
    #[display("{}", _0)]
    Gemini(GeminiError),

    /// Image generation gateway failure
    #[display("{}", _0)]
    Image(ImageError),
}

impl std::error::Error for BlogsmithError {}

/// Result alias for blogsmith operations.
pub type BlogsmithResult<T> = Result<T, BlogsmithError>;
