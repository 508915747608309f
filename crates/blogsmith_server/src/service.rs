//! Content generation business logic.
//!
//! Written once and exposed through whichever transport adapter the platform
//! needs; the axum layer in [`crate::api`] is the only one here.

use crate::ApiError;
use blogsmith_core::{GeneratedPost, PostRequest, Thumbnail, ThumbnailRequest, prompt};
use blogsmith_models::{ImageGateway, TextGateway, gemini, images};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Topic used for the scheduled daily draft.
const DAILY_TOPIC: &str = "Jak sztuczna inteligencja zmienia marketing małych firm";
const DAILY_KEYWORDS: &str = "AI, marketing, automatyzacja, małe firmy";

/// Orchestrates prompt building, gateway calls and decoding.
///
/// Generic over the gateways so tests inject doubles; the production wiring
/// hands in the real vendor clients.
pub struct ContentService<T, I> {
    text: T,
    image: I,
}

impl<T, I> ContentService<T, I>
where
    T: TextGateway,
    I: ImageGateway,
{
    /// Creates a service around the given gateways.
    pub fn new(text: T, image: I) -> Self {
        Self { text, image }
    }

    /// Drafts a blog post for the given request.
    ///
    /// # Errors
    ///
    /// Returns an error when the gateway call fails or the envelope cannot
    /// be decoded into a post.
    #[instrument(skip_all, fields(topic = %request.topic()))]
    pub async fn draft_post(&self, request: &PostRequest) -> Result<GeneratedPost, ApiError> {
        let prompt = prompt::post_prompt(request);
        debug!(prompt_chars = prompt.len(), "Built generation prompt");

        let raw = self.text.generate(&prompt).await?;
        let post = gemini::decode_post(&raw)?;

        info!(
            title = %post.title(),
            sections = post.sections().len(),
            "Drafted post"
        );
        Ok(post)
    }

    /// Drafts a thumbnail for the given title and keywords.
    ///
    /// # Errors
    ///
    /// Returns an error when the gateway call fails or the payload carries
    /// no image.
    #[instrument(skip_all, fields(title = %request.title()))]
    pub async fn draft_thumbnail(&self, request: &ThumbnailRequest) -> Result<Thumbnail, ApiError> {
        let prompt = prompt::thumbnail_prompt(request);
        let raw = self.image.generate(&prompt).await?;
        let url = images::decode_image_url(&raw)?;

        info!(%url, "Drafted thumbnail");
        Ok(Thumbnail::new(url))
    }

    /// Drafts the scheduled daily post with a fixed editorial brief.
    ///
    /// # Errors
    ///
    /// Same failure surface as [`Self::draft_post`].
    #[instrument(skip_all)]
    pub async fn daily_post(&self) -> Result<GeneratedPost, ApiError> {
        let request = daily_request();
        info!(topic = %request.topic(), "Drafting scheduled daily post");

        let post = self.draft_post(&request).await?;
        // TODO: persist the draft once the CMS storage backend lands
        Ok(post)
    }
}

fn daily_request() -> PostRequest {
    PostRequest::builder()
        .topic(DAILY_TOPIC)
        .keywords(DAILY_KEYWORDS)
        .style("ekspercki")
        .length("średni")
        .audience("właściciele małych firm")
        .cta(true)
        .meta(true)
        .summary(true)
        .build()
        .expect("Valid PostRequest")
}

/// Fixed suggestion payload returned by the non-AI-backed helper endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestions {
    /// Comma-separated suggestion text
    pub suggestions: String,
}

/// Placeholder audience suggestions; deliberately not AI-backed.
pub fn audience_suggestions() -> Suggestions {
    Suggestions {
        suggestions: "małe firmy, sklepy internetowe, lokalne usługi, freelancerzy".to_string(),
    }
}

/// Placeholder keyword suggestions; deliberately not AI-backed.
pub fn keyword_suggestions() -> Suggestions {
    Suggestions {
        suggestions: "marketing internetowy, pozycjonowanie, content marketing, social media"
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn daily_request_carries_the_editorial_brief() {
        let request = daily_request();
        assert_eq!(request.topic(), DAILY_TOPIC);
        assert!(*request.cta());
        assert!(*request.meta());
        assert!(!*request.links());
        assert_eq!(request.language(), "polski");
    }

    #[test]
    fn suggestion_stubs_are_fixed() {
        assert_eq!(audience_suggestions(), audience_suggestions());
        assert!(keyword_suggestions().suggestions.contains("marketing"));
    }
}
