//! Image generation gateway error types.

/// Error conditions raised by the image generation gateway.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageErrorKind {
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
    /// The vendor payload carried no image.
    ///
    /// Covers both an empty `data` array and a payload the decoder could
    /// not read; the full payload rides along for operator inspection.
    Empty {
        /// The full vendor response body
        raw: serde_json::Value,
    },
}

impl std::fmt::Display for ImageErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageErrorKind::ClientCreation(msg) => {
                write!(f, "Failed to create image client: {}", msg)
            }
            ImageErrorKind::Http(msg) => write!(f, "Image request failed: {}", msg),
            ImageErrorKind::Api { status, message } => {
                write!(f, "Image API error (status {}): {}", status, message)
            }
            ImageErrorKind::Empty { .. } => write!(f, "Image generation failed"),
        }
    }
}

/// Image gateway error with source location tracking.
#[derive(Debug, Clone)]
pub struct ImageError {
    /// The kind of error that occurred
    pub kind: ImageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ImageError {
    /// Create a new ImageError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ImageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for ImageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Image Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for ImageError {}
