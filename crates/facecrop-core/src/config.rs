//! Per-request crop configuration.
//!
//! The web page sends this as a plain object; every field is optional and
//! falls back to its default.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::detect::{DetectorParams, FaceSelection};
use crate::encode::DEFAULT_JPEG_QUALITY;
use crate::plan::SizingPolicy;

/// Out-of-range configuration values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Invalid scale factor {0}: must be finite and greater than 1.0")]
    ScaleFactor(f32),

    #[error("Invalid window step: must be at least 1 pixel")]
    WindowStep,

    #[error("Invalid detection max edge: must be at least 1 pixel")]
    DetectionMaxEdge,

    #[error("Invalid output size: must be at least 1 pixel")]
    OutputSize,
}

/// Settings for one upload-to-download run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CropConfig {
    /// How large the square is.
    pub sizing: SizingPolicy,
    /// Which face to crop when several are found.
    pub selection: FaceSelection,
    /// Detector sensitivity.
    pub detector: DetectorParams,
    /// Run detection on a copy shrunk to this longest edge. Boxes are mapped
    /// back to full resolution before planning.
    pub detection_max_edge: Option<u32>,
    /// Resize the square crop to `n` x `n` pixels.
    pub output_size: Option<u32>,
    /// JPEG quality for the download (1-100).
    pub jpeg_quality: u8,
}

impl Default for CropConfig {
    fn default() -> Self {
        Self {
            sizing: SizingPolicy::default(),
            selection: FaceSelection::default(),
            detector: DetectorParams::default(),
            detection_max_edge: None,
            output_size: None,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl CropConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check every field that has a valid range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let scale = self.detector.scale_factor;
        if !scale.is_finite() || scale <= 1.0 {
            return Err(ConfigError::ScaleFactor(scale));
        }
        if self.detector.window_step == 0 {
            return Err(ConfigError::WindowStep);
        }
        if self.detection_max_edge == Some(0) {
            return Err(ConfigError::DetectionMaxEdge);
        }
        if self.output_size == Some(0) {
            return Err(ConfigError::OutputSize);
        }
        Ok(())
    }
}
