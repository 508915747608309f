//! Unified entry point for the blogsmith content generation service.
//!
//! Re-exports the workspace crates so downstream code can depend on this
//! facade alone.

pub mod cli;

pub use blogsmith_core::{
    GeneratedPost, PostRequest, Section, Thumbnail, ThumbnailRequest, prompt,
};
pub use blogsmith_error::{BlogsmithError, BlogsmithResult};
pub use blogsmith_models::{
    GeminiClient, GeminiConfig, ImageConfig, ImageGateway, OpenAiImageClient, TextGateway,
};
pub use blogsmith_server::{ApiError, ContentService, ServerConfig, create_router};
