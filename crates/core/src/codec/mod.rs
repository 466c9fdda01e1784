//! Codec module for decoding, resizing and encoding images.
//!
//! This module provides the `ImageCodec` trait and the production
//! implementation backed by the `image` crate (PNG decode, resampling) and
//! libwebp (lossy WEBP encode).
//!
//! # Example
//!
//! ```ignore
//! use pngpress_core::codec::{Dimensions, ImageCodec, ResizeFilter, WebpCodec};
//!
//! let codec = WebpCodec::new();
//!
//! let image = codec.decode(Path::new("photo.png"))?;
//! let resized = codec.resize(&image, Dimensions::new(800, 450), ResizeFilter::Lanczos3);
//! let bytes = codec.encode_webp(&resized, 75)?;
//! std::fs::write("photo.webp", bytes)?;
//! ```

mod error;
mod image_codec;
mod traits;
mod types;

pub use error::CodecError;
pub use image_codec::WebpCodec;
pub use traits::ImageCodec;
pub use types::{Dimensions, ResizeFilter};
