//! Error types for the codec module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while decoding or encoding a single image.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The input file could not be opened or read.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input could not be decoded as an image.
    #[error("Failed to decode image: {reason}")]
    DecodeFailed { reason: String },

    /// The encoder rejected the image.
    #[error("Failed to encode WebP: {reason}")]
    EncodeFailed { reason: String },

    /// The image cannot be represented in the output format.
    #[error("Unsupported image: {reason}")]
    Unsupported { reason: String },
}

impl CodecError {
    /// Creates a new decode failed error.
    pub fn decode_failed(reason: impl Into<String>) -> Self {
        Self::DecodeFailed {
            reason: reason.into(),
        }
    }

    /// Creates a new encode failed error.
    pub fn encode_failed(reason: impl Into<String>) -> Self {
        Self::EncodeFailed {
            reason: reason.into(),
        }
    }

    /// Creates a new unsupported image error.
    pub fn unsupported(reason: impl Into<String>) -> Self {
        Self::Unsupported {
            reason: reason.into(),
        }
    }

    /// Whether this error happened before any pixels were decoded.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::Read { .. } | Self::DecodeFailed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CodecError::decode_failed("bad signature");
        assert_eq!(err.to_string(), "Failed to decode image: bad signature");

        let err = CodecError::encode_failed("dimension too large");
        assert_eq!(err.to_string(), "Failed to encode WebP: dimension too large");
    }

    #[test]
    fn test_is_input_error() {
        assert!(CodecError::decode_failed("x").is_input_error());
        assert!(CodecError::Read {
            path: PathBuf::from("a.png"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        }
        .is_input_error());
        assert!(!CodecError::encode_failed("x").is_input_error());
        assert!(!CodecError::unsupported("x").is_input_error());
    }
}
