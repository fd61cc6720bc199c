//! Upload-to-download flow: decode, detect, select, plan, crop.
//!
//! A photo without a detectable face is a normal outcome, reported as
//! [`CropOutcome::NoFace`] carrying the untouched original so the caller
//! can show it instead.

use std::borrow::Cow;

use thiserror::Error;

use crate::config::{ConfigError, CropConfig};
use crate::decode::{decode_upload, resize, resize_to_fit, DecodeError, DecodedImage, FilterType};
use crate::detect::{DetectedFace, FaceDetector};
use crate::encode::{Download, EncodeError};
use crate::luminance::to_gray_frame;
use crate::plan::{plan_square_crop, BoundingBox, PlanError, SquareRegion};
use crate::transform::apply_region;

/// Errors that abort a crop run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Plan(#[from] PlanError),
}

/// One face and the square cut around it.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceCrop {
    /// The face the square was planned around, in source coordinates.
    pub face: DetectedFace,
    /// Crop window in source coordinates.
    pub region: SquareRegion,
    /// The cropped (and possibly resized) pixels.
    pub image: DecodedImage,
}

/// Result of [`crop_face`].
#[derive(Debug, Clone, PartialEq)]
pub enum CropOutcome {
    /// A face was found and cropped.
    Cropped {
        crop: FaceCrop,
        /// How many faces the detector reported in total.
        face_count: usize,
    },
    /// No usable face; the original image is returned unchanged.
    NoFace {
        original: DecodedImage,
        /// Faces the detector reported that the selection did not match.
        face_count: usize,
    },
}

impl CropOutcome {
    /// The image to show and offer for download.
    pub fn image(&self) -> &DecodedImage {
        match self {
            CropOutcome::Cropped { crop, .. } => &crop.image,
            CropOutcome::NoFace { original, .. } => original,
        }
    }

    pub fn is_cropped(&self) -> bool {
        matches!(self, CropOutcome::Cropped { .. })
    }

    /// Encode [`CropOutcome::image`] for download.
    pub fn download(&self, quality: u8) -> Result<Download, EncodeError> {
        Download::jpeg(self.image(), quality)
    }
}

/// Decode an upload and crop a square around the selected face.
pub fn crop_face(
    bytes: &[u8],
    detector: &dyn FaceDetector,
    config: &CropConfig,
) -> Result<CropOutcome, PipelineError> {
    config.validate()?;
    let image = decode_upload(bytes)?;
    crop_checked(image, detector, config)
}

/// Crop a square around the selected face of an already decoded image.
///
/// The image comes from the caller, so its pixel buffer is checked against
/// its dimensions before anything reads it.
pub fn crop_decoded(
    image: DecodedImage,
    detector: &dyn FaceDetector,
    config: &CropConfig,
) -> Result<CropOutcome, PipelineError> {
    config.validate()?;
    image.check_buffer()?;
    crop_checked(image, detector, config)
}

/// Config validated and image decoded or checked.
fn crop_checked(
    image: DecodedImage,
    detector: &dyn FaceDetector,
    config: &CropConfig,
) -> Result<CropOutcome, PipelineError> {
    let faces = detect_faces(&image, detector, config)?;
    let face_count = faces.len();

    let Some(face) = config.selection.select(&faces, image.extent()).copied() else {
        if face_count > 0 {
            log::warn!(
                "{:?} matched none of {} detected faces",
                config.selection,
                face_count
            );
        } else {
            log::debug!("no face detected in {}x{} image", image.width, image.height);
        }
        return Ok(CropOutcome::NoFace {
            original: image,
            face_count,
        });
    };

    let crop = crop_around(&image, face, config)?;
    Ok(CropOutcome::Cropped { crop, face_count })
}

/// Decode an upload and crop a square around every detected face, in
/// detector order. Returns an empty list when nothing is found.
pub fn crop_all_faces(
    bytes: &[u8],
    detector: &dyn FaceDetector,
    config: &CropConfig,
) -> Result<Vec<FaceCrop>, PipelineError> {
    config.validate()?;
    let image = decode_upload(bytes)?;

    detect_faces(&image, detector, config)?
        .into_iter()
        .map(|face| crop_around(&image, face, config))
        .collect()
}

fn crop_around(
    image: &DecodedImage,
    face: DetectedFace,
    config: &CropConfig,
) -> Result<FaceCrop, PipelineError> {
    let region = plan_square_crop(image.extent(), face.bounds, config.sizing)?;
    let mut cropped = apply_region(image, &region);

    if let Some(size) = config.output_size {
        cropped = resize(&cropped, size, size, FilterType::Lanczos3)?;
    }

    log::debug!(
        "cropped face {:?} to {:?} ({}x{} output)",
        face.bounds,
        region,
        cropped.width,
        cropped.height
    );

    Ok(FaceCrop {
        face,
        region,
        image: cropped,
    })
}

/// Run the detector, optionally on a shrunken copy, and return faces in
/// full-resolution coordinates clipped to the image.
fn detect_faces(
    image: &DecodedImage,
    detector: &dyn FaceDetector,
    config: &CropConfig,
) -> Result<Vec<DetectedFace>, PipelineError> {
    let extent = image.extent();

    let working = match config.detection_max_edge {
        Some(max_edge) => resize_to_fit(image, max_edge, FilterType::Bilinear).map(Cow::Owned)?,
        None => Cow::Borrowed(image),
    };
    let scale = image.width.max(image.height) as f64 / working.width.max(working.height) as f64;

    let frame = to_gray_frame(&working);
    let raw = detector.detect(&frame, &config.detector);
    log::debug!(
        "detector reported {} face(s) on {}x{} frame",
        raw.len(),
        frame.width,
        frame.height
    );

    let faces = raw
        .into_iter()
        .filter_map(|face| {
            let b = face.bounds;
            let bounds = if working.width == image.width && working.height == image.height {
                BoundingBox::clip_to(b.x as i64, b.y as i64, b.w as i64, b.h as i64, extent)
            } else {
                b.scaled(scale, extent)
            };
            if bounds.is_none() {
                log::warn!("discarding face {:?} outside {:?}", b, extent);
            }
            bounds.map(|bounds| DetectedFace { bounds, ..face })
        })
        .collect();

    Ok(faces)
}
