//! Image generation gateway.
//!
//! A client for the OpenAI-style images endpoint plus the decoder that pulls
//! the single requested URL out of the vendor payload.

mod client;
mod decode;
mod dto;

pub use client::{ImageConfig, ImageConfigBuilder, OpenAiImageClient};
pub use decode::decode_image_url;
pub use dto::{ImageDatum, ImageGenerationRequest, ImageGenerationResponse};
