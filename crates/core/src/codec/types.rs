//! Types for the codec module.

use image::imageops::FilterType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pixel dimensions of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// The larger of width and height.
    pub fn longest(&self) -> u32 {
        self.width.max(self.height)
    }

    /// Whether either side is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Computes the dimensions after capping the longest side at `max_dimension`.
    ///
    /// Returns `None` when the image already fits and no resize is needed.
    /// Otherwise the longest side becomes exactly `max_dimension` and the
    /// other side is scaled proportionally with integer truncation, so the
    /// result can be off by one pixel from the true aspect ratio. The
    /// truncated side may be zero for extremely thin images.
    pub fn fit_within(&self, max_dimension: u32) -> Option<Dimensions> {
        if self.longest() <= max_dimension {
            return None;
        }

        let max = u64::from(max_dimension);
        let width = u64::from(self.width);
        let height = u64::from(self.height);

        // Both quotients are bounded by max_dimension, so they fit in u32.
        let scaled = if self.width >= self.height {
            Dimensions::new(max_dimension, (max * height / width) as u32)
        } else {
            Dimensions::new((max * width / height) as u32, max_dimension)
        };
        Some(scaled)
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Resampling filter used when downscaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeFilter {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    #[default]
    Lanczos3,
}

impl ResizeFilter {
    /// Returns the filter name as used in configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nearest => "nearest",
            Self::Triangle => "triangle",
            Self::CatmullRom => "catmull_rom",
            Self::Gaussian => "gaussian",
            Self::Lanczos3 => "lanczos3",
        }
    }
}

impl From<ResizeFilter> for FilterType {
    fn from(filter: ResizeFilter) -> Self {
        match filter {
            ResizeFilter::Nearest => FilterType::Nearest,
            ResizeFilter::Triangle => FilterType::Triangle,
            ResizeFilter::CatmullRom => FilterType::CatmullRom,
            ResizeFilter::Gaussian => FilterType::Gaussian,
            ResizeFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_within_small_image_unchanged() {
        assert_eq!(Dimensions::new(200, 200).fit_within(800), None);
        assert_eq!(Dimensions::new(800, 600).fit_within(800), None);
        assert_eq!(Dimensions::new(1, 800).fit_within(800), None);
    }

    #[test]
    fn test_fit_within_landscape() {
        let scaled = Dimensions::new(1600, 900).fit_within(800).unwrap();
        assert_eq!(scaled, Dimensions::new(800, 450));
    }

    #[test]
    fn test_fit_within_portrait() {
        let scaled = Dimensions::new(900, 1800).fit_within(800).unwrap();
        assert_eq!(scaled, Dimensions::new(400, 800));
    }

    #[test]
    fn test_fit_within_square_uses_width_branch() {
        let scaled = Dimensions::new(1000, 1000).fit_within(800).unwrap();
        assert_eq!(scaled, Dimensions::new(800, 800));
    }

    #[test]
    fn test_fit_within_truncates() {
        // 800 * 999 / 1001 = 798.40...
        let scaled = Dimensions::new(1001, 999).fit_within(800).unwrap();
        assert_eq!(scaled, Dimensions::new(800, 798));

        // 800 * 1000 / 3001 = 266.57...
        let scaled = Dimensions::new(1000, 3001).fit_within(800).unwrap();
        assert_eq!(scaled, Dimensions::new(266, 800));
    }

    #[test]
    fn test_fit_within_large_values_do_not_overflow() {
        let scaled = Dimensions::new(u32::MAX, u32::MAX / 2)
            .fit_within(800)
            .unwrap();
        assert_eq!(scaled.width, 800);
        assert_eq!(scaled.height, 399);
    }

    #[test]
    fn test_fit_within_thin_image_collapses() {
        let scaled = Dimensions::new(100_000, 50).fit_within(800).unwrap();
        assert_eq!(scaled, Dimensions::new(800, 0));
        assert!(scaled.is_empty());
    }

    #[test]
    fn test_dimensions_display() {
        assert_eq!(Dimensions::new(800, 450).to_string(), "800x450");
    }

    #[test]
    fn test_resize_filter_serde() {
        let filter: ResizeFilter = serde_json::from_str("\"catmull_rom\"").unwrap();
        assert_eq!(filter, ResizeFilter::CatmullRom);
        assert_eq!(ResizeFilter::default(), ResizeFilter::Lanczos3);
        assert_eq!(ResizeFilter::default().as_str(), "lanczos3");
    }
}
