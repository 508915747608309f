//! Text generation gateway error types.

/// Error conditions raised by the text generation gateway.
#[derive(Debug, Clone, PartialEq)]
pub enum GeminiErrorKind {
    /// Failed to build the HTTP client
    ClientCreation(String),
    /// Request never produced a response
    Http(String),
    /// API answered with a non-success status
    Api {
        /// HTTP status code
        status: u16,
        /// Error body returned by the vendor
        message: String,
    },
    /// The vendor envelope did not contain a usable post.
    ///
    /// Carries the complete envelope so the caller can return it to the
    /// operator instead of discarding the evidence.
    Decode {
        /// What went wrong while descending the envelope
        reason: String,
        /// The full vendor response body
        raw: serde_json::Value,
    },
}

impl std::fmt::Display for GeminiErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeminiErrorKind::ClientCreation(msg) => {
                write!(f, "Failed to create Gemini client: {}", msg)
            }
            GeminiErrorKind::Http(msg) => write!(f, "Gemini request failed: {}", msg),
            GeminiErrorKind::Api { status, message } => {
                write!(f, "Gemini API error (status {}): {}", status, message)
            }
            GeminiErrorKind::Decode { reason, .. } => {
                write!(f, "AI response parse error: {}", reason)
            }
        }
    }
}

/// Gemini gateway error with source location tracking.
///
/// # Examples
///
/// ```
/// use blogsmith_error::{GeminiError, GeminiErrorKind};
///
/// let err = GeminiError::new(GeminiErrorKind::Http("connection refused".into()));
/// assert!(format!("{}", err).contains("connection refused"));
/// ```
#[derive(Debug, Clone)]
pub struct GeminiError {
    /// The kind of error that occurred
    pub kind: GeminiErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GeminiError {
    /// Create a new GeminiError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GeminiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for GeminiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Gemini Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for GeminiError {}
