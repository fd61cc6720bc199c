//! WASM bindings for the full upload-to-download flow.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! const model = new Uint8Array(await (await fetch('/seeta_fd_frontal_v1.0.bin')).arrayBuffer());
//! const cropper = new JsFaceCropper(model, { sizing: 'fit_frame', selection: 'largest_area' });
//!
//! const result = cropper.crop(new Uint8Array(await file.arrayBuffer()));
//! if (!result.found) {
//!   showMessage('No face detected');
//! }
//! preview(result.image);
//! offerDownload(result.jpeg(), download_file_name(), download_mime_type());
//! ```

use crate::types::{to_js_error, JsDecodedImage};
use facecrop_core::config::CropConfig;
use facecrop_core::decode::DecodedImage;
use facecrop_core::detect::{DetectedFace, RustfaceDetector};
use facecrop_core::encode;
use facecrop_core::pipeline::{self, CropOutcome, FaceCrop};
use facecrop_core::plan::SquareRegion;
use wasm_bindgen::prelude::*;

/// Face cropper holding a loaded SeetaFace model and the crop settings.
#[wasm_bindgen]
pub struct JsFaceCropper {
    detector: RustfaceDetector,
    config: CropConfig,
}

#[wasm_bindgen]
impl JsFaceCropper {
    /// Load the model and settings.
    ///
    /// # Arguments
    ///
    /// * `model` - Bytes of `seeta_fd_frontal_v1.0.bin`
    /// * `config` - Optional settings object; missing fields use defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the model cannot be parsed or the settings are invalid.
    #[wasm_bindgen(constructor)]
    pub fn new(model: &[u8], config: JsValue) -> Result<JsFaceCropper, JsValue> {
        let detector = RustfaceDetector::from_bytes(model).map_err(to_js_error)?;
        let config = config_from_js(config)?;
        log::info!("face cropper ready ({:?}, {:?})", config.sizing, config.selection);
        Ok(JsFaceCropper { detector, config })
    }

    /// Replace the crop settings.
    pub fn set_config(&mut self, config: JsValue) -> Result<(), JsValue> {
        self.config = config_from_js(config)?;
        Ok(())
    }

    /// Current settings as a plain object.
    pub fn config(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.config).map_err(to_js_error)
    }

    /// Decode an upload and crop the selected face.
    ///
    /// When no face is found the result carries the original image and
    /// `found` is false.
    pub fn crop(&self, bytes: &[u8]) -> Result<JsCropResult, JsValue> {
        pipeline::crop_face(bytes, &self.detector, &self.config)
            .map(|outcome| JsCropResult::from_outcome(outcome, self.config.jpeg_quality))
            .map_err(to_js_error)
    }

    /// Crop the selected face of an already decoded image.
    ///
    /// # Errors
    ///
    /// Returns an error if the pixel buffer does not match the dimensions.
    pub fn crop_image(&self, image: &JsDecodedImage) -> Result<JsCropResult, JsValue> {
        pipeline::crop_decoded(image.to_decoded(), &self.detector, &self.config)
            .map(|outcome| JsCropResult::from_outcome(outcome, self.config.jpeg_quality))
            .map_err(to_js_error)
    }

    /// Crop every detected face, in detector order.
    pub fn crop_all(&self, bytes: &[u8]) -> Result<Vec<JsCropResult>, JsValue> {
        let quality = self.config.jpeg_quality;
        let crops = pipeline::crop_all_faces(bytes, &self.detector, &self.config).map_err(to_js_error)?;
        let face_count = crops.len();
        Ok(crops
            .into_iter()
            .map(|crop| JsCropResult::from_crop(crop, face_count, quality))
            .collect())
    }
}

/// Result of a crop: either the face square or the untouched original.
#[wasm_bindgen]
pub struct JsCropResult {
    face: Option<DetectedFace>,
    region: Option<SquareRegion>,
    face_count: usize,
    image: DecodedImage,
    quality: u8,
}

#[wasm_bindgen]
impl JsCropResult {
    /// Whether a face was found and cropped.
    #[wasm_bindgen(getter)]
    pub fn found(&self) -> bool {
        self.region.is_some()
    }

    /// Number of faces the detector reported.
    #[wasm_bindgen(getter)]
    pub fn face_count(&self) -> usize {
        self.face_count
    }

    /// Crop window `{ left, top, right, bottom }`, or `null` without a face.
    #[wasm_bindgen(getter)]
    pub fn region(&self) -> Result<JsValue, JsValue> {
        to_value_or_null(self.region.as_ref())
    }

    /// Face box and score `{ bounds: { x, y, w, h }, score }`, or `null`.
    #[wasm_bindgen(getter)]
    pub fn face(&self) -> Result<JsValue, JsValue> {
        to_value_or_null(self.face.as_ref())
    }

    /// The image to preview: the crop, or the original without a face.
    #[wasm_bindgen(getter)]
    pub fn image(&self) -> JsDecodedImage {
        JsDecodedImage::from_decoded(self.image.clone())
    }

    /// Encode the image for download with the configured quality.
    pub fn jpeg(&self) -> Result<Vec<u8>, JsValue> {
        encode::encode_image(&self.image, self.quality).map_err(to_js_error)
    }
}

impl JsCropResult {
    pub(crate) fn from_outcome(outcome: CropOutcome, quality: u8) -> Self {
        match outcome {
            CropOutcome::Cropped { crop, face_count } => Self::from_crop(crop, face_count, quality),
            CropOutcome::NoFace {
                original,
                face_count,
            } => Self {
                face: None,
                region: None,
                face_count,
                image: original,
                quality,
            },
        }
    }

    fn from_crop(crop: FaceCrop, face_count: usize, quality: u8) -> Self {
        Self {
            face: Some(crop.face),
            region: Some(crop.region),
            face_count,
            image: crop.image,
            quality,
        }
    }
}

// serde_wasm_bindgen maps `None` to `undefined`
fn to_value_or_null<T: serde::Serialize>(value: Option<&T>) -> Result<JsValue, JsValue> {
    match value {
        Some(value) => serde_wasm_bindgen::to_value(value).map_err(to_js_error),
        None => Ok(JsValue::NULL),
    }
}

/// Read settings from JS; `undefined` or `null` means defaults.
fn config_from_js(value: JsValue) -> Result<CropConfig, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(CropConfig::default());
    }
    let config: CropConfig = serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsValue::from_str(&format!("Invalid crop config: {}", e)))?;
    config.validate().map_err(to_js_error)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use facecrop_core::plan::BoundingBox;

    fn square(side: u32) -> DecodedImage {
        DecodedImage::new(side, side, vec![100u8; (side * side * 3) as usize])
    }

    #[test]
    fn test_result_from_cropped_outcome() {
        let outcome = CropOutcome::Cropped {
            crop: FaceCrop {
                face: DetectedFace {
                    bounds: BoundingBox::new(10, 10, 20, 20),
                    score: 4.5,
                },
                region: SquareRegion {
                    left: 10,
                    top: 10,
                    right: 30,
                    bottom: 30,
                },
                image: square(20),
            },
            face_count: 3,
        };

        let result = JsCropResult::from_outcome(outcome, 85);
        assert!(result.found());
        assert_eq!(result.face_count(), 3);
        assert_eq!(result.image().width(), 20);
        assert_eq!(&result.jpeg().unwrap()[0..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_result_from_no_face_outcome() {
        let outcome = CropOutcome::NoFace {
            original: square(48),
            face_count: 0,
        };

        let result = JsCropResult::from_outcome(outcome, 90);
        assert!(!result.found());
        assert_eq!(result.face_count(), 0);
        assert_eq!(result.image().width(), 48);
        assert_eq!(result.image().height(), 48);
    }

    #[test]
    fn test_unmatched_selection_reports_face_count() {
        let outcome = CropOutcome::NoFace {
            original: square(16),
            face_count: 2,
        };

        let result = JsCropResult::from_outcome(outcome, 90);
        assert!(!result.found());
        assert_eq!(result.face_count(), 2);
    }
}

/// WASM-specific tests that require JsValue.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use facecrop_core::detect::FaceSelection;
    use facecrop_core::plan::SizingPolicy;
    use serde::Serialize;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_config_defaults_for_undefined() {
        let config = config_from_js(JsValue::UNDEFINED).unwrap();
        assert_eq!(config, CropConfig::default());
    }

    #[derive(Serialize)]
    struct OutputSizeOnly {
        output_size: u32,
    }

    #[derive(Serialize)]
    struct IndexSelection {
        index: usize,
    }

    #[derive(Serialize)]
    struct SizingAndSelection {
        sizing: &'static str,
        selection: IndexSelection,
    }

    #[wasm_bindgen_test]
    fn test_config_partial_object() {
        let value = serde_wasm_bindgen::to_value(&OutputSizeOnly { output_size: 256 }).unwrap();

        let config = config_from_js(value).unwrap();
        let mut expected = CropConfig::default();
        expected.output_size = Some(256);
        assert_eq!(config, expected);
    }

    #[wasm_bindgen_test]
    fn test_config_sizing_and_index_selection() {
        let value = serde_wasm_bindgen::to_value(&SizingAndSelection {
            sizing: "fit_frame",
            selection: IndexSelection { index: 1 },
        })
        .unwrap();

        let config = config_from_js(value).unwrap();
        assert_eq!(config.sizing, SizingPolicy::FitFrame);
        assert_eq!(config.selection, FaceSelection::Index(1));
        assert_eq!(config.detector, CropConfig::default().detector);
        assert_eq!(config.jpeg_quality, 90);
    }

    #[wasm_bindgen_test]
    fn test_config_invalid_values_rejected() {
        let mut config = CropConfig::default();
        config.detector.scale_factor = 0.5;
        let value = serde_wasm_bindgen::to_value(&config).unwrap();
        assert!(config_from_js(value).is_err());
    }

    #[wasm_bindgen_test]
    fn test_invalid_model_rejected() {
        assert!(JsFaceCropper::new(&[], JsValue::UNDEFINED).is_err());
    }

    #[wasm_bindgen_test]
    fn test_no_face_region_is_null() {
        let result = JsCropResult::from_outcome(
            CropOutcome::NoFace {
                original: DecodedImage::new(1, 1, vec![0, 0, 0]),
                face_count: 0,
            },
            90,
        );
        assert!(result.region().unwrap().is_null());
    }
}
