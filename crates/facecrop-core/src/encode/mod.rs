//! Encoding the cropped face for download.
//!
//! This module provides functionality for:
//! - Encoding RGB images to JPEG with configurable quality
//! - Packaging the result under the fixed download name and MIME type
//!
//! # Examples
//!
//! ```ignore
//! use facecrop_core::encode::Download;
//!
//! let download = Download::jpeg(&cropped, 90)?;
//! println!("{} ({} bytes)", download.file_name, download.bytes.len());
//! ```

mod download;
mod jpeg;

pub use download::{Download, DOWNLOAD_FILE_NAME, DOWNLOAD_MIME_TYPE};
pub use jpeg::{encode_image, encode_jpeg, EncodeError, DEFAULT_JPEG_QUALITY};
