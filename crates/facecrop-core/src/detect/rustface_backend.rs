use std::io::Cursor;
use std::path::Path;

use super::{DetectError, DetectedFace, DetectorParams, FaceDetector};
use crate::luminance::GrayFrame;
use crate::plan::BoundingBox;

/// rustface refuses minimum face sizes below this.
const MIN_SUPPORTED_FACE_SIZE: u32 = 20;

/// Face detector backed by the `rustface` crate (SeetaFace engine).
///
/// The model is not bundled: load `seeta_fd_frontal_v1.0.bin` from disk with
/// [`RustfaceDetector::from_path`] or pass its bytes to
/// [`RustfaceDetector::from_bytes`] (the browser fetches it alongside the
/// WASM module).
pub struct RustfaceDetector {
    model: rustface::Model,
}

impl RustfaceDetector {
    /// Parse a SeetaFace model from memory.
    pub fn from_bytes(model_data: &[u8]) -> Result<Self, DetectError> {
        let model = rustface::read_model(Cursor::new(model_data))
            .map_err(|e| DetectError::ModelLoad(e.to_string()))?;
        Ok(Self { model })
    }

    /// Read and parse a SeetaFace model file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DetectError> {
        let path = path.as_ref();
        let model_data = std::fs::read(path)
            .map_err(|e| DetectError::ModelLoad(format!("{}: {}", path.display(), e)))?;
        Self::from_bytes(&model_data)
    }
}

impl FaceDetector for RustfaceDetector {
    fn detect(&self, frame: &GrayFrame, params: &DetectorParams) -> Vec<DetectedFace> {
        let mut detector = rustface::create_detector_with_model(self.model.clone());
        detector.set_min_face_size(params.min_face_size.max(MIN_SUPPORTED_FACE_SIZE));
        detector.set_score_thresh(params.score_threshold);
        detector.set_pyramid_scale_factor(pyramid_scale_factor(params.scale_factor));
        detector.set_slide_window_step(params.window_step, params.window_step);

        let image = rustface::ImageData::new(&frame.pixels, frame.width, frame.height);
        let faces = detector.detect(&image);
        let extent = frame.extent();

        faces
            .iter()
            .filter_map(|face| {
                let bbox = face.bbox();
                let bounds = BoundingBox::clip_to(
                    bbox.x() as i64,
                    bbox.y() as i64,
                    bbox.width() as i64,
                    bbox.height() as i64,
                    extent,
                )?;
                Some(DetectedFace {
                    bounds,
                    score: face.score(),
                })
            })
            .collect()
    }
}

/// Convert a cascade-style scale step (> 1, e.g. 1.1) into rustface's
/// pyramid shrink factor (< 1).
fn pyramid_scale_factor(scale_factor: f32) -> f32 {
    (1.0 / scale_factor).clamp(0.01, 0.99)
}
