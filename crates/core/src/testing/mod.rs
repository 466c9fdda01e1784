//! Testing utilities and mock implementations.
//!
//! Mocks for the codec and notifier seams, plus fixtures that write real PNG
//! files for end-to-end tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use pngpress_core::testing::{fixtures, MockCodec, RecordingNotifier};
//!
//! let codec = Arc::new(MockCodec::new());
//! let notifier = RecordingNotifier::new();
//!
//! fixtures::write_png(dir.path(), "photo.png", 1600, 900);
//! ```

mod mock_codec;
mod mock_notifier;

pub use mock_codec::{MockCodec, RecordedEncode, RecordedResize};
pub use mock_notifier::RecordingNotifier;

/// Test fixtures and helper functions.
pub mod fixtures {
    use image::{ImageBuffer, ImageFormat, Rgb, Rgba};
    use std::path::{Path, PathBuf};

    /// Write an RGB gradient PNG and return its path.
    ///
    /// The file is always PNG-encoded, whatever the extension of `name`.
    pub fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.join(name);
        let buffer = ImageBuffer::from_fn(width, height, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
        });
        buffer
            .save_with_format(&path, ImageFormat::Png)
            .expect("Failed to write PNG fixture");
        path
    }

    /// Write a semi-transparent RGBA PNG and return its path.
    pub fn write_rgba_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.join(name);
        let buffer = ImageBuffer::from_pixel(width, height, Rgba([20u8, 40, 60, 128]));
        buffer
            .save_with_format(&path, ImageFormat::Png)
            .expect("Failed to write PNG fixture");
        path
    }

    /// Write bytes that are not an image under a PNG name.
    pub fn write_corrupt_png(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, b"\x89PNG\r\n\x1a\nthis is not really a png")
            .expect("Failed to write corrupt fixture");
        path
    }

    /// Pixel dimensions of a WEBP file.
    pub fn webp_dimensions(path: &Path) -> (u32, u32) {
        let bytes = std::fs::read(path).expect("Failed to read WEBP output");
        let image = image::load_from_memory_with_format(&bytes, ImageFormat::WebP)
            .expect("Output is not a valid WEBP");
        (image.width(), image.height())
    }
}
