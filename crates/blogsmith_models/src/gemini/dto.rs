//! Data transfer objects for the Gemini generateContent API.

use serde::{Deserialize, Serialize};

/// A content part in the Gemini wire format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    /// Text payload of this part
    #[serde(default)]
    pub text: Option<String>,
}

/// A content block: ordered parts plus an optional role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// Ordered content parts
    #[serde(default)]
    pub parts: Vec<Part>,
    /// Role of the author ("user" or "model")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    /// Conversation contents; a single user turn for this service
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// Wraps a prompt as the sole part of a single-message request.
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(prompt.into()),
                }],
                role: Some("user".to_string()),
            }],
        }
    }
}

/// One generation candidate in the response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    /// Generated content, absent when the model declined
    #[serde(default)]
    pub content: Option<Content>,
}

/// Response envelope for `models/{model}:generateContent`.
///
/// Only the fields the decoder descends through are modeled; the raw
/// envelope is kept separately for diagnostics.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    /// Generation candidates, first one wins
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}
