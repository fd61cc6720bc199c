//! Upload decoding for facecrop.
//!
//! This module provides functionality for:
//! - Recognising the accepted upload formats (JPEG and PNG)
//! - Decoding uploads to RGB with EXIF orientation applied
//! - Resizing decoded images for detection and output
//!
//! # Architecture
//!
//! Decoding is designed to be driven from the browser via WASM bindings.
//! All operations are synchronous and single-threaded.
//!
//! # Examples
//!
//! ```ignore
//! use facecrop_core::decode::{decode_upload, DecodedImage};
//!
//! let bytes = std::fs::read("portrait.jpg").unwrap();
//! let image = decode_upload(&bytes).unwrap();
//! println!("Decoded {}x{} image", image.width, image.height);
//! ```

mod resize;
mod types;
mod upload;

pub use resize::{resize, resize_to_fit};
pub use types::{DecodeError, DecodedImage, FilterType, Orientation, UploadFormat};
pub use upload::{decode_upload, get_orientation, sniff_format};
