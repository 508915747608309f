//! Core data types for the blogsmith content generation service.
//!
//! This crate provides the request and post types shared by the gateways and
//! the HTTP layer, plus the pure prompt assembly functions.

mod post;
pub mod prompt;
mod thumbnail;

pub use post::{GeneratedPost, GeneratedPostBuilder, PostRequest, PostRequestBuilder, Section};
pub use thumbnail::{Thumbnail, ThumbnailRequest, ThumbnailRequestBuilder};
