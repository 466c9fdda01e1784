//! Mock codec for testing.

use image::DynamicImage;
use std::collections::{HashMap, HashSet, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use crate::codec::{CodecError, Dimensions, ImageCodec, ResizeFilter};

/// A recorded encode call for test assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedEncode {
    /// Dimensions of the image handed to the encoder.
    pub dimensions: Dimensions,
    /// Requested quality.
    pub quality: u8,
}

/// A recorded resize call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordedResize {
    pub target: Dimensions,
    pub filter: ResizeFilter,
}

/// Mock implementation of the ImageCodec trait.
///
/// Never touches pixel data on disk: decoding returns a blank image whose
/// size is configured per file name, and encoding returns a short text
/// payload describing the image.
///
/// # Example
///
/// ```rust,ignore
/// use pngpress_core::testing::MockCodec;
///
/// let codec = Arc::new(MockCodec::new());
/// codec.set_dimensions("photo.png", Dimensions::new(1600, 900));
/// codec.fail_decode("broken.png");
///
/// let converter = BatchConverter::new(config, codec.clone());
/// converter.run().await?;
///
/// assert_eq!(codec.encode_calls()[0].dimensions, Dimensions::new(800, 450));
/// ```
#[derive(Debug)]
pub struct MockCodec {
    /// Decoded size by file name.
    dimensions: Mutex<HashMap<String, Dimensions>>,
    /// Size for files without an explicit entry.
    default_dimensions: Mutex<Dimensions>,
    /// File names whose decode fails.
    decode_failures: Mutex<HashSet<String>>,
    /// File names whose decode panics.
    decode_panics: Mutex<HashSet<String>>,
    /// Errors returned by the next encode calls, in order.
    encode_errors: Mutex<VecDeque<CodecError>>,
    /// Paths passed to decode.
    decoded: Mutex<Vec<PathBuf>>,
    /// Resize calls.
    resized: Mutex<Vec<RecordedResize>>,
    /// Encode calls.
    encoded: Mutex<Vec<RecordedEncode>>,
}

impl Default for MockCodec {
    fn default() -> Self {
        Self::new()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}

impl MockCodec {
    /// Create a new mock codec decoding every file as 100x100.
    pub fn new() -> Self {
        Self {
            dimensions: Mutex::new(HashMap::new()),
            default_dimensions: Mutex::new(Dimensions::new(100, 100)),
            decode_failures: Mutex::new(HashSet::new()),
            decode_panics: Mutex::new(HashSet::new()),
            encode_errors: Mutex::new(VecDeque::new()),
            decoded: Mutex::new(Vec::new()),
            resized: Mutex::new(Vec::new()),
            encoded: Mutex::new(Vec::new()),
        }
    }

    /// Set the decoded size for a file name.
    pub fn set_dimensions(&self, name: &str, dimensions: Dimensions) {
        lock(&self.dimensions).insert(name.to_string(), dimensions);
    }

    /// Set the decoded size for files without an explicit entry.
    pub fn set_default_dimensions(&self, dimensions: Dimensions) {
        *lock(&self.default_dimensions) = dimensions;
    }

    /// Make decoding of `name` fail.
    pub fn fail_decode(&self, name: &str) {
        lock(&self.decode_failures).insert(name.to_string());
    }

    /// Make decoding of `name` panic.
    pub fn panic_on_decode(&self, name: &str) {
        lock(&self.decode_panics).insert(name.to_string());
    }

    /// Queue an error for the next encode call.
    pub fn push_encode_error(&self, error: CodecError) {
        lock(&self.encode_errors).push_back(error);
    }

    /// File names passed to decode, in call order.
    pub fn decoded_names(&self) -> Vec<String> {
        lock(&self.decoded).iter().map(|p| file_name(p)).collect()
    }

    /// Resize calls, in call order.
    pub fn resize_calls(&self) -> Vec<RecordedResize> {
        lock(&self.resized).clone()
    }

    /// Encode calls, in call order.
    pub fn encode_calls(&self) -> Vec<RecordedEncode> {
        lock(&self.encoded).clone()
    }

    /// The payload `encode_webp` produces for an image.
    pub fn payload(dimensions: Dimensions, quality: u8) -> Vec<u8> {
        format!("mock-webp {} q{}", dimensions, quality).into_bytes()
    }
}

impl ImageCodec for MockCodec {
    fn name(&self) -> &str {
        "mock"
    }

    fn decode(&self, path: &Path) -> Result<DynamicImage, CodecError> {
        lock(&self.decoded).push(path.to_path_buf());
        let name = file_name(path);

        if lock(&self.decode_panics).contains(&name) {
            panic!("mock decoder panic for {}", name);
        }
        if lock(&self.decode_failures).contains(&name) {
            return Err(CodecError::decode_failed(format!("mock failure for {}", name)));
        }

        let dimensions = lock(&self.dimensions)
            .get(&name)
            .copied()
            .unwrap_or_else(|| *lock(&self.default_dimensions));
        Ok(DynamicImage::new_luma8(dimensions.width, dimensions.height))
    }

    fn resize(
        &self,
        _image: &DynamicImage,
        target: Dimensions,
        filter: ResizeFilter,
    ) -> DynamicImage {
        lock(&self.resized).push(RecordedResize { target, filter });
        DynamicImage::new_luma8(target.width, target.height)
    }

    fn encode_webp(&self, image: &DynamicImage, quality: u8) -> Result<Vec<u8>, CodecError> {
        let dimensions = Dimensions::new(image.width(), image.height());
        lock(&self.encoded).push(RecordedEncode {
            dimensions,
            quality,
        });

        if let Some(error) = lock(&self.encode_errors).pop_front() {
            return Err(error);
        }
        Ok(Self::payload(dimensions, quality))
    }
}
