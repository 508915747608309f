//! Gemini text generation gateway.
//!
//! A thin client for the `generateContent` endpoint plus the decoder that
//! turns the candidate/content/part envelope into a [`GeneratedPost`].
//!
//! [`GeneratedPost`]: blogsmith_core::GeneratedPost

mod client;
mod decode;
mod dto;

pub use client::{GeminiClient, GeminiConfig, GeminiConfigBuilder};
pub use decode::decode_post;
pub use dto::{Candidate, Content, GenerateContentRequest, GenerateContentResponse, Part};
