//! Thumbnail request and result types.

use serde::{Deserialize, Serialize};

/// A request to draft a thumbnail image for a post.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct ThumbnailRequest {
    /// Post title the image illustrates
    #[serde(default)]
    #[builder(default)]
    title: String,
    /// Comma-separated keyword list
    #[serde(default)]
    #[builder(default)]
    keywords: String,
}

impl ThumbnailRequest {
    /// Returns a builder for constructing a ThumbnailRequest.
    pub fn builder() -> ThumbnailRequestBuilder {
        ThumbnailRequestBuilder::default()
    }
}

/// A generated thumbnail, referenced by URL rather than inline bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Thumbnail {
    /// URL of the generated image
    #[serde(rename = "imageUrl")]
    image_url: String,
}

impl Thumbnail {
    /// Creates a thumbnail from a vendor-hosted image URL.
    pub fn new(image_url: impl Into<String>) -> Self {
        Self {
            image_url: image_url.into(),
        }
    }
}
