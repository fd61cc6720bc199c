//! Facecrop WASM - WebAssembly bindings for facecrop
//!
//! This crate exposes the facecrop-core upload, detect, crop and download
//! flow to a browser page.
//!
//! # Module Structure
//!
//! - `cropper` - Face detection and cropping with a loaded model
//! - `plan` - Square crop planning for boxes from any detector
//! - `types` - WASM-compatible wrapper types for image data
//! - `decode` - Upload decoding bindings (JPEG, PNG, resize)
//! - `encode` - JPEG encoding and download naming
//! - `logging` - Console backend for the `log` facade
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsFaceCropper, download_file_name } from '@facecrop/wasm';
//!
//! await init();
//!
//! const cropper = new JsFaceCropper(model, { sizing: 'fit_face' });
//! const result = cropper.crop(new Uint8Array(await file.arrayBuffer()));
//! console.log(`found=${result.found} ${result.image.width}x${result.image.height}`);
//! ```

use wasm_bindgen::prelude::*;

mod cropper;
mod decode;
mod encode;
mod logging;
mod plan;
mod types;

// Re-export public types
pub use cropper::{JsCropResult, JsFaceCropper};
pub use decode::{accepted_extensions, decode_upload, is_supported_upload, resize, resize_to_fit};
pub use encode::{download_file_name, download_mime_type, encode_jpeg, encode_jpeg_from_image};
pub use plan::{apply_region, plan_square_crop};
pub use types::JsDecodedImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    logging::init(log::LevelFilter::Info);
}

/// Change the console log level (`"off"`, `"error"`, `"warn"`, `"info"`, `"debug"`, `"trace"`).
///
/// # Errors
///
/// Returns an error for an unknown level name.
#[wasm_bindgen]
pub fn set_log_level(level: &str) -> Result<(), JsValue> {
    let filter = logging::level_from_str(level)
        .ok_or_else(|| JsValue::from_str(&format!("Unknown log level: {}", level)))?;
    logging::init(filter);
    Ok(())
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
