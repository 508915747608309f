//! Decoder for the Gemini response envelope.

use crate::gemini::GenerateContentResponse;
use blogsmith_core::GeneratedPost;
use blogsmith_error::{GeminiError, GeminiErrorKind};
use serde_json::Value;
use tracing::debug;

/// Extracts the first candidate's text from the envelope and parses it as a
/// [`GeneratedPost`].
///
/// The model is asked for bare JSON but routinely wraps it in markdown code
/// fences; those are stripped before parsing. Any missing path or parse
/// failure yields [`GeminiErrorKind::Decode`] carrying the complete envelope,
/// so the caller can surface what the vendor actually returned.
///
/// # Errors
///
/// Returns an error when the candidate text is absent or is not a valid
/// post object.
pub fn decode_post(raw: &Value) -> Result<GeneratedPost, GeminiError> {
    let envelope: GenerateContentResponse = serde_json::from_value(raw.clone()).map_err(|e| {
        GeminiError::new(GeminiErrorKind::Decode {
            reason: format!("unrecognized envelope: {}", e),
            raw: raw.clone(),
        })
    })?;

    let text = envelope
        .candidates
        .first()
        .and_then(|candidate| candidate.content.as_ref())
        .and_then(|content| content.parts.first())
        .and_then(|part| part.text.as_deref())
        .ok_or_else(|| {
            GeminiError::new(GeminiErrorKind::Decode {
                reason: "no candidate text in envelope".to_string(),
                raw: raw.clone(),
            })
        })?;

    let cleaned = strip_fences(text);
    debug!(chars = cleaned.len(), "Parsing candidate text as post");

    serde_json::from_str(cleaned).map_err(|e| {
        GeminiError::new(GeminiErrorKind::Decode {
            reason: format!("candidate text is not a valid post: {}", e),
            raw: raw.clone(),
        })
    })
}

/// Strips a surrounding markdown code fence, with or without a language tag.
fn strip_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
