//! `image` + libwebp based codec implementation.

use image::{DynamicImage, ImageReader};
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, instrument};

use super::error::CodecError;
use super::traits::ImageCodec;
use super::types::{Dimensions, ResizeFilter};

/// Largest width or height libwebp accepts.
const WEBP_MAX_DIMENSION: u32 = 16383;

/// Production codec: decodes with the `image` crate and encodes lossy WEBP
/// through libwebp.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebpCodec;

impl WebpCodec {
    pub fn new() -> Self {
        Self
    }
}

impl ImageCodec for WebpCodec {
    fn name(&self) -> &str {
        "webp"
    }

    #[instrument(skip(self))]
    fn decode(&self, path: &Path) -> Result<DynamicImage, CodecError> {
        let read_error = |source: std::io::Error| CodecError::Read {
            path: path.to_path_buf(),
            source,
        };

        let mut reader = ImageReader::open(path)
            .map_err(read_error)?
            .with_guessed_format()
            .map_err(read_error)?;

        // Very large scans are legitimate inputs here.
        reader.no_limits();

        let image = reader.decode().map_err(|e| match e {
            image::ImageError::IoError(source) if source.kind() != ErrorKind::UnexpectedEof => {
                read_error(source)
            }
            other => CodecError::decode_failed(other.to_string()),
        })?;

        debug!(
            "Decoded {}x{} {:?}",
            image.width(),
            image.height(),
            image.color()
        );
        Ok(image)
    }

    fn resize(
        &self,
        image: &DynamicImage,
        target: Dimensions,
        filter: ResizeFilter,
    ) -> DynamicImage {
        image.resize_exact(target.width, target.height, filter.into())
    }

    #[instrument(skip(self, image), fields(width = image.width(), height = image.height()))]
    fn encode_webp(&self, image: &DynamicImage, quality: u8) -> Result<Vec<u8>, CodecError> {
        if quality > 100 {
            return Err(CodecError::encode_failed(format!(
                "quality {} is outside 0-100",
                quality
            )));
        }

        let (width, height) = (image.width(), image.height());
        if width == 0 || height == 0 {
            return Err(CodecError::unsupported(format!(
                "empty image {}x{}",
                width, height
            )));
        }
        if width > WEBP_MAX_DIMENSION || height > WEBP_MAX_DIMENSION {
            return Err(CodecError::unsupported(format!(
                "{}x{} exceeds the WebP limit of {} pixels per side",
                width, height, WEBP_MAX_DIMENSION
            )));
        }

        // libwebp only takes 8-bit RGB/RGBA; everything else is widened or
        // narrowed first.
        let memory = if image.color().has_alpha() {
            let rgba = image.to_rgba8();
            webp::Encoder::from_rgba(rgba.as_raw(), width, height)
                .encode_simple(false, f32::from(quality))
        } else {
            let rgb = image.to_rgb8();
            webp::Encoder::from_rgb(rgb.as_raw(), width, height)
                .encode_simple(false, f32::from(quality))
        }
        .map_err(|e| CodecError::encode_failed(format!("{:?}", e)))?;

        let bytes = memory.to_vec();
        if bytes.is_empty() {
            return Err(CodecError::encode_failed("encoder produced empty output"));
        }

        debug!("Encoded WebP: {} bytes", bytes.len());
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, ImageFormat, Luma, Rgb, Rgba};
    use tempfile::TempDir;

    fn write_rgb_png(dir: &Path, name: &str, width: u32, height: u32) -> std::path::PathBuf {
        let path = dir.join(name);
        let buffer = ImageBuffer::from_fn(width, height, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, 128u8])
        });
        buffer.save_with_format(&path, ImageFormat::Png).unwrap();
        path
    }

    fn is_webp(bytes: &[u8]) -> bool {
        bytes.len() > 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP"
    }

    #[test]
    fn test_decode_png() {
        let temp = TempDir::new().unwrap();
        let path = write_rgb_png(temp.path(), "photo.png", 40, 30);

        let codec = WebpCodec::new();
        let image = codec.decode(&path).unwrap();

        assert_eq!((image.width(), image.height()), (40, 30));
    }

    #[test]
    fn test_decode_ignores_extension() {
        let temp = TempDir::new().unwrap();
        let path = write_rgb_png(temp.path(), "mislabeled.dat", 8, 8);

        let image = WebpCodec::new().decode(&path).unwrap();
        assert_eq!(image.width(), 8);
    }

    #[test]
    fn test_decode_corrupt_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        let result = WebpCodec::new().decode(&path);
        assert!(matches!(result, Err(CodecError::DecodeFailed { .. })));
    }

    #[test]
    fn test_decode_truncated_png() {
        let temp = TempDir::new().unwrap();
        let path = write_rgb_png(temp.path(), "truncated.png", 64, 64);
        let bytes = std::fs::read(&path).unwrap();
        std::fs::write(&path, &bytes[..bytes.len() / 2]).unwrap();

        let result = WebpCodec::new().decode(&path);
        assert!(result.is_err());
        assert!(result.unwrap_err().is_input_error());
    }

    #[test]
    fn test_decode_missing_file() {
        let result = WebpCodec::new().decode(Path::new("/nonexistent/file.png"));
        assert!(matches!(result, Err(CodecError::Read { .. })));
    }

    #[test]
    fn test_resize_exact() {
        let codec = WebpCodec::new();
        let image = DynamicImage::new_rgb8(100, 50);

        let resized = codec.resize(&image, Dimensions::new(80, 40), ResizeFilter::Triangle);
        assert_eq!((resized.width(), resized.height()), (80, 40));
    }

    #[test]
    fn test_encode_rgb() {
        let image = DynamicImage::ImageRgb8(ImageBuffer::from_pixel(32, 16, Rgb([10, 200, 30])));

        let bytes = WebpCodec::new().encode_webp(&image, 75).unwrap();
        assert!(is_webp(&bytes));

        let decoded = image::load_from_memory_with_format(&bytes, ImageFormat::WebP).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (32, 16));
    }

    #[test]
    fn test_encode_rgba() {
        let image =
            DynamicImage::ImageRgba8(ImageBuffer::from_pixel(16, 16, Rgba([255, 0, 0, 128])));

        let bytes = WebpCodec::new().encode_webp(&image, 75).unwrap();
        assert!(is_webp(&bytes));
    }

    #[test]
    fn test_encode_grayscale_and_16_bit() {
        let codec = WebpCodec::new();

        let gray = DynamicImage::ImageLuma8(ImageBuffer::from_pixel(8, 8, Luma([90u8])));
        assert!(is_webp(&codec.encode_webp(&gray, 75).unwrap()));

        let deep = DynamicImage::ImageRgb16(ImageBuffer::from_pixel(8, 8, Rgb([1000u16, 2, 3])));
        assert!(is_webp(&codec.encode_webp(&deep, 75).unwrap()));
    }

    #[test]
    fn test_encode_rejects_bad_quality() {
        let image = DynamicImage::new_rgb8(4, 4);
        let result = WebpCodec::new().encode_webp(&image, 101);
        assert!(matches!(result, Err(CodecError::EncodeFailed { .. })));
    }

    #[test]
    fn test_encode_rejects_empty_and_oversized() {
        let codec = WebpCodec::new();

        let empty = DynamicImage::new_rgb8(0, 10);
        assert!(matches!(
            codec.encode_webp(&empty, 75),
            Err(CodecError::Unsupported { .. })
        ));

        let wide = DynamicImage::new_luma8(WEBP_MAX_DIMENSION + 1, 1);
        assert!(matches!(
            codec.encode_webp(&wide, 75),
            Err(CodecError::Unsupported { .. })
        ));
    }

    #[test]
    fn test_lower_quality_is_smaller() {
        let buffer = ImageBuffer::from_fn(128, 128, |x, y| {
            Rgb([((x * 7) % 256) as u8, ((y * 13) % 256) as u8, ((x ^ y) % 256) as u8])
        });
        let image = DynamicImage::ImageRgb8(buffer);
        let codec = WebpCodec::new();

        let high = codec.encode_webp(&image, 95).unwrap();
        let low = codec.encode_webp(&image, 10).unwrap();
        assert!(low.len() < high.len());
    }
}
