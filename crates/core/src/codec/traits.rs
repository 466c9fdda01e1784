//! Trait definitions for the codec module.

use image::DynamicImage;
use std::path::Path;

use super::error::CodecError;
use super::types::{Dimensions, ResizeFilter};

/// An image codec that can decode inputs and produce WEBP output.
///
/// All methods are blocking and CPU-bound; callers on an async runtime are
/// expected to run them on the blocking pool.
pub trait ImageCodec: Send + Sync {
    /// Returns the name of this codec implementation.
    fn name(&self) -> &str;

    /// Decodes the image at `path`. The format is detected from content.
    fn decode(&self, path: &Path) -> Result<DynamicImage, CodecError>;

    /// Resamples `image` to exactly `target` with `filter`.
    fn resize(&self, image: &DynamicImage, target: Dimensions, filter: ResizeFilter)
        -> DynamicImage;

    /// Encodes `image` as lossy WEBP at `quality` (0-100).
    fn encode_webp(&self, image: &DynamicImage, quality: u8) -> Result<Vec<u8>, CodecError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct SolidCodec;

    impl ImageCodec for SolidCodec {
        fn name(&self) -> &str {
            "solid"
        }

        fn decode(&self, _path: &Path) -> Result<DynamicImage, CodecError> {
            Ok(DynamicImage::new_rgb8(4, 2))
        }

        fn resize(
            &self,
            _image: &DynamicImage,
            target: Dimensions,
            _filter: ResizeFilter,
        ) -> DynamicImage {
            DynamicImage::new_rgb8(target.width, target.height)
        }

        fn encode_webp(&self, image: &DynamicImage, quality: u8) -> Result<Vec<u8>, CodecError> {
            Ok(format!("{}x{}@{}", image.width(), image.height(), quality).into_bytes())
        }
    }

    #[test]
    fn test_codec_is_object_safe() {
        let codec: Box<dyn ImageCodec> = Box::new(SolidCodec);
        let image = codec.decode(Path::new("/test/a.png")).unwrap();
        let resized = codec.resize(&image, Dimensions::new(2, 1), ResizeFilter::Nearest);
        let bytes = codec.encode_webp(&resized, 75).unwrap();

        assert_eq!(codec.name(), "solid");
        assert_eq!(bytes, b"2x1@75");
    }
}
