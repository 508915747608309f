//! Decoder for the image generation payload.

use crate::images::ImageGenerationResponse;
use blogsmith_error::{ImageError, ImageErrorKind};
use serde_json::Value;

/// Extracts the first image URL from the vendor payload.
///
/// An empty or absent `data` array, or a payload the decoder cannot read,
/// yields [`ImageErrorKind::Empty`] carrying the complete payload.
///
/// # Errors
///
/// Returns an error when the payload carries no usable image.
pub fn decode_image_url(raw: &Value) -> Result<String, ImageError> {
    let payload: ImageGenerationResponse = serde_json::from_value(raw.clone()).map_err(|_| {
        ImageError::new(ImageErrorKind::Empty { raw: raw.clone() })
    })?;

    payload
        .data
        .into_iter()
        .next()
        .map(|datum| datum.url)
        .ok_or_else(|| ImageError::new(ImageErrorKind::Empty { raw: raw.clone() }))
}
