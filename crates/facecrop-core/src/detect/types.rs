//! Detector contract and detection results.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::luminance::GrayFrame;
use crate::plan::BoundingBox;

/// Errors raised while preparing a detector.
#[derive(Debug, Error)]
pub enum DetectError {
    /// The model data could not be read or parsed.
    #[error("Failed to load face model: {0}")]
    ModelLoad(String),
}

/// One face reported by a detector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DetectedFace {
    /// Face rectangle in image pixel coordinates.
    pub bounds: BoundingBox,
    /// Backend-specific confidence; higher is more certain.
    pub score: f64,
}

/// Sensitivity settings handed to the detector on every call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorParams {
    /// Ratio between successive scan scales, cascade style (> 1.0).
    /// Smaller values scan more scales: slower, finds more faces.
    pub scale_factor: f32,
    /// Smallest face edge, in pixels, worth reporting.
    pub min_face_size: u32,
    /// Minimum classifier score for a window to count as a face.
    pub score_threshold: f64,
    /// Sliding window step in pixels, both axes.
    pub window_step: u32,
}

impl Default for DetectorParams {
    fn default() -> Self {
        Self {
            scale_factor: 1.1,
            min_face_size: 20,
            score_threshold: 2.0,
            window_step: 4,
        }
    }
}

/// Pluggable face detection backend.
///
/// Implementations return faces in their own scan order. Rectangles are
/// expected to be clipped to the frame.
pub trait FaceDetector: Send + Sync {
    /// Detect faces in an 8-bit grayscale frame.
    fn detect(&self, frame: &GrayFrame, params: &DetectorParams) -> Vec<DetectedFace>;
}
