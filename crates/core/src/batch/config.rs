//! Configuration for the batch module.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::codec::ResizeFilter;

/// Name of the output directory created under the input directory.
pub const DEFAULT_OUTPUT_SUBDIR: &str = "Compressed";

/// Configuration for a batch conversion run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Directory scanned for PNG files.
    #[serde(default = "default_input_dir")]
    pub input_dir: PathBuf,

    /// Directory receiving WEBP files and logs.
    /// Defaults to `Compressed` inside the input directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,

    /// Longest side, in pixels, of any written image.
    #[serde(default = "default_max_dimension")]
    pub max_dimension: u32,

    /// WEBP encode quality (0-100).
    #[serde(default = "default_quality")]
    pub quality: u8,

    /// Resampling filter used when downscaling.
    #[serde(default)]
    pub resize_filter: ResizeFilter,

    /// File name of the duplicate log inside the output directory.
    #[serde(default = "default_duplicate_log_name")]
    pub duplicate_log_name: String,

    /// File name of the failure log inside the output directory.
    #[serde(default = "default_failure_log_name")]
    pub failure_log_name: String,
}

fn default_input_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_max_dimension() -> u32 {
    800
}

fn default_quality() -> u8 {
    75
}

fn default_duplicate_log_name() -> String {
    "duplicate_names.txt".to_string()
}

fn default_failure_log_name() -> String {
    "Missed PNGs.txt".to_string()
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            input_dir: default_input_dir(),
            output_dir: None,
            max_dimension: default_max_dimension(),
            quality: default_quality(),
            resize_filter: ResizeFilter::default(),
            duplicate_log_name: default_duplicate_log_name(),
            failure_log_name: default_failure_log_name(),
        }
    }
}

impl BatchConfig {
    /// Creates a config for the given input directory with default settings.
    pub fn for_dir(input_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            ..Default::default()
        }
    }

    /// Sets an explicit output directory.
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(output_dir.into());
        self
    }

    /// Sets the maximum dimension.
    pub fn with_max_dimension(mut self, max_dimension: u32) -> Self {
        self.max_dimension = max_dimension;
        self
    }

    /// Sets the encode quality.
    pub fn with_quality(mut self, quality: u8) -> Self {
        self.quality = quality;
        self
    }

    /// Sets the resampling filter.
    pub fn with_resize_filter(mut self, filter: ResizeFilter) -> Self {
        self.resize_filter = filter;
        self
    }

    /// The directory outputs are written to.
    pub fn resolved_output_dir(&self) -> PathBuf {
        match &self.output_dir {
            Some(dir) => dir.clone(),
            None => self.input_dir.join(DEFAULT_OUTPUT_SUBDIR),
        }
    }

    /// Full path of the duplicate log.
    pub fn duplicate_log_path(&self) -> PathBuf {
        self.resolved_output_dir().join(&self.duplicate_log_name)
    }

    /// Full path of the failure log.
    pub fn failure_log_path(&self) -> PathBuf {
        self.resolved_output_dir().join(&self.failure_log_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BatchConfig::default();
        assert_eq!(config.input_dir, PathBuf::from("."));
        assert_eq!(config.max_dimension, 800);
        assert_eq!(config.quality, 75);
        assert_eq!(config.resize_filter, ResizeFilter::Lanczos3);
        assert_eq!(config.resolved_output_dir(), PathBuf::from("./Compressed"));
        assert_eq!(
            config.duplicate_log_path(),
            PathBuf::from("./Compressed/duplicate_names.txt")
        );
        assert_eq!(
            config.failure_log_path(),
            PathBuf::from("./Compressed/Missed PNGs.txt")
        );
    }

    #[test]
    fn test_config_builder() {
        let config = BatchConfig::for_dir("/images")
            .with_output_dir("/out")
            .with_max_dimension(1024)
            .with_quality(90)
            .with_resize_filter(ResizeFilter::Triangle);

        assert_eq!(config.input_dir, PathBuf::from("/images"));
        assert_eq!(config.resolved_output_dir(), PathBuf::from("/out"));
        assert_eq!(config.max_dimension, 1024);
        assert_eq!(config.quality, 90);
        assert_eq!(config.resize_filter, ResizeFilter::Triangle);
    }

    #[test]
    fn test_config_serialization() {
        let config = BatchConfig::for_dir("/images").with_quality(60);
        let json = serde_json::to_string(&config).unwrap();
        let parsed: BatchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_config_partial_deserialization() {
        let parsed: BatchConfig = serde_json::from_str(r#"{"quality": 50}"#).unwrap();
        assert_eq!(parsed.quality, 50);
        assert_eq!(parsed.max_dimension, 800);
        assert!(parsed.output_dir.is_none());
    }
}
