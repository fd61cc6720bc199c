//! Face detection behind a pluggable backend.
//!
//! Detection itself is delegated to a pretrained model. This module defines
//! the contract a backend fulfils ([`FaceDetector`]), the sensitivity knobs
//! passed to it ([`DetectorParams`]), and the policy that picks the one face
//! the crop planner works on ([`FaceSelection`]).
//!
//! # Backends
//!
//! - [`RustfaceDetector`] - SeetaFace frontal cascade via the `rustface`
//!   crate (cargo feature `rustface`, enabled by default)
//!
//! Any other detector can be used by implementing [`FaceDetector`].

#[cfg(feature = "rustface")]
mod rustface_backend;
mod select;
mod types;

#[cfg(feature = "rustface")]
pub use rustface_backend::RustfaceDetector;
pub use select::FaceSelection;
pub use types::{DetectError, DetectedFace, DetectorParams, FaceDetector};
