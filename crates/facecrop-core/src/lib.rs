//! Facecrop Core - square face crops from uploaded photos
//!
//! This crate provides the core functionality for facecrop: decoding an
//! uploaded photo, finding faces in it, planning a square crop window around
//! one of them, cutting the window out and encoding it for download.
//!
//! The planning step ([`plan::plan_square_crop`]) is a pure function and can
//! be used on its own with boxes from any detector.

pub mod config;
pub mod decode;
pub mod detect;
pub mod encode;
pub mod luminance;
pub mod pipeline;
pub mod plan;
pub mod transform;

pub use config::{ConfigError, CropConfig};
pub use decode::{decode_upload, DecodedImage};
pub use detect::{DetectedFace, DetectorParams, FaceDetector, FaceSelection};
#[cfg(feature = "rustface")]
pub use detect::RustfaceDetector;
pub use encode::Download;
pub use pipeline::{crop_all_faces, crop_decoded, crop_face, CropOutcome, FaceCrop, PipelineError};
pub use plan::{plan_square_crop, BoundingBox, ImageExtent, PlanError, SizingPolicy, SquareRegion};
