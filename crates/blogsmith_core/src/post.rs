//! Request and post types for blog content generation.

use serde::{Deserialize, Serialize};

fn default_language() -> String {
    "polski".to_string()
}

/// A request to draft a blog post.
///
/// Every field has a serde default: a request body may omit any of them and
/// the missing pieces arrive empty (or false) rather than failing
/// deserialization. The prompt builder interpolates whatever is present.
///
/// # Examples
///
/// ```
/// use blogsmith_core::PostRequest;
///
/// let request = PostRequest::builder()
///     .topic("Marketing automation")
///     .keywords("crm, e-mail")
///     .style("ekspercki")
///     .length("krótki")
///     .audience("firmy")
///     .cta(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.language(), "polski");
/// assert!(*request.cta());
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct PostRequest {
    /// Topic of the article
    #[serde(default)]
    #[builder(default)]
    topic: String,
    /// Comma-separated keyword list
    #[serde(default)]
    #[builder(default)]
    keywords: String,
    /// Writing style, e.g. "ekspercki"
    #[serde(default)]
    #[builder(default)]
    style: String,
    /// Target length, e.g. "krótki"
    #[serde(default)]
    #[builder(default)]
    length: String,
    /// Intended audience
    #[serde(default)]
    #[builder(default)]
    audience: String,
    /// Append a call-to-action section
    #[serde(default)]
    #[builder(default)]
    cta: bool,
    /// Append a meta description
    #[serde(default)]
    #[builder(default)]
    meta: bool,
    /// Append an FAQ section
    #[serde(default)]
    #[builder(default)]
    questions: bool,
    /// Append a closing summary
    #[serde(default)]
    #[builder(default)]
    summary: bool,
    /// Append a linked table of contents
    #[serde(default)]
    #[builder(default)]
    links: bool,
    /// Language the article is written in
    #[serde(default = "default_language")]
    #[builder(default = "default_language()")]
    language: String,
}

impl PostRequest {
    /// Returns a builder for constructing a PostRequest.
    pub fn builder() -> PostRequestBuilder {
        PostRequestBuilder::default()
    }
}

/// A single section of a generated post.
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
pub struct Section {
    /// Section heading
    heading: String,
    /// Section body text
    content: String,
}

impl Section {
    /// Creates a new section with the given heading and content.
    pub fn new(heading: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            content: content.into(),
        }
    }
}

/// A drafted blog post, decoded from the model's text output.
///
/// Only the title is mandatory; a model asked to skip the optional sections
/// simply omits those fields. Nothing here is persisted; the post lives for
/// one request/response cycle.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct GeneratedPost {
    /// Post title
    title: String,
    /// Meta description for the page head
    #[serde(default)]
    #[builder(default)]
    meta: Option<String>,
    /// Lead paragraph
    #[serde(default)]
    #[builder(default)]
    lead: String,
    /// Ordered body sections
    #[serde(default)]
    #[builder(default)]
    sections: Vec<Section>,
    /// Closing summary
    #[serde(default)]
    #[builder(default)]
    summary: Option<String>,
    /// Call-to-action text
    #[serde(default)]
    #[builder(default)]
    cta: Option<String>,
    /// Tag set
    #[serde(default)]
    #[builder(default)]
    tags: Vec<String>,
}

impl GeneratedPost {
    /// Returns a builder for constructing a GeneratedPost.
    pub fn builder() -> GeneratedPostBuilder {
        GeneratedPostBuilder::default()
    }
}
