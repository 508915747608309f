//! Request-level error taxonomy and response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use blogsmith_error::{BlogsmithError, GeminiError, GeminiErrorKind, ImageError, ImageErrorKind};
use serde_json::{Value, json};
use tracing::error;

/// Terminal request failures.
///
/// Every failure ends the request; nothing is retried or queued. The 500
/// variants that stem from a vendor payload carry it under `raw` so the
/// operator can inspect what the vendor actually returned.
#[derive(Debug, Clone)]
pub enum ApiError {
    /// Request used a method other than POST
    MethodNotAllowed,
    /// The model's output could not be decoded into a post
    Parse {
        /// The full vendor envelope
        raw: Value,
    },
    /// The image vendor returned no image
    ImageEmpty {
        /// The full vendor payload
        raw: Value,
    },
    /// Transport or API failure surfaced via its message
    Upstream {
        /// Failure description
        message: String,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                Json(json!({ "error": "Method not allowed" })),
            ),
            ApiError::Parse { raw } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "AI response parse error", "raw": raw })),
            ),
            ApiError::ImageEmpty { raw } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Image generation failed", "raw": raw })),
            ),
            ApiError::Upstream { message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": message })),
            ),
        }
        .into_response()
    }
}

impl From<GeminiError> for ApiError {
    fn from(err: GeminiError) -> Self {
        match err.kind {
            GeminiErrorKind::Decode { reason, raw } => {
                error!(%reason, "Failed to decode generation envelope");
                ApiError::Parse { raw }
            }
            other => {
                error!(error = %other, "Text gateway failure");
                ApiError::Upstream {
                    message: other.to_string(),
                }
            }
        }
    }
}

impl From<ImageError> for ApiError {
    fn from(err: ImageError) -> Self {
        match err.kind {
            ImageErrorKind::Empty { raw } => {
                error!("Image vendor returned no image");
                ApiError::ImageEmpty { raw }
            }
            other => {
                error!(error = %other, "Image gateway failure");
                ApiError::Upstream {
                    message: other.to_string(),
                }
            }
        }
    }
}

impl From<BlogsmithError> for ApiError {
    fn from(err: BlogsmithError) -> Self {
        match err {
            BlogsmithError::Gemini(e) => e.into(),
            BlogsmithError::Image(e) => e.into(),
            other => ApiError::Upstream {
                message: other.to_string(),
            },
        }
    }
}
