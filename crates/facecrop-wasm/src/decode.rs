//! Upload decoding WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { decode_upload, is_supported_upload } from '@facecrop/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! if (!is_supported_upload(bytes)) {
//!   showError(`Please upload one of: ${accepted_extensions().join(', ')}`);
//! } else {
//!   const image = decode_upload(bytes);
//!   console.log(`Decoded ${image.width}x${image.height}`);
//! }
//! ```

use crate::types::{filter_from_u8, to_js_error, JsDecodedImage};
use facecrop_core::decode::{self, UploadFormat};
use wasm_bindgen::prelude::*;

/// Decode an uploaded JPEG or PNG to RGB, applying EXIF orientation.
///
/// # Errors
///
/// Returns an error if the bytes are not JPEG/PNG or are corrupted.
#[wasm_bindgen]
pub fn decode_upload(bytes: &[u8]) -> Result<JsDecodedImage, JsValue> {
    decode::decode_upload(bytes)
        .map(JsDecodedImage::from_decoded)
        .map_err(to_js_error)
}

/// Check whether the bytes are an accepted upload format (JPEG or PNG).
///
/// Only the magic bytes are examined; the file name is ignored.
#[wasm_bindgen]
pub fn is_supported_upload(bytes: &[u8]) -> bool {
    decode::sniff_format(bytes).is_some()
}

/// File extensions for the upload picker's `accept` attribute.
#[wasm_bindgen]
pub fn accepted_extensions() -> Vec<String> {
    UploadFormat::EXTENSIONS
        .iter()
        .map(|ext| ext.to_string())
        .collect()
}

/// Resize an image to exact dimensions.
///
/// `filter`: 0=Nearest, 1=Bilinear (default), 2=Lanczos3.
///
/// # Errors
///
/// Returns an error if width or height is zero.
#[wasm_bindgen]
pub fn resize(
    image: &JsDecodedImage,
    width: u32,
    height: u32,
    filter: u8,
) -> Result<JsDecodedImage, JsValue> {
    decode::resize(&image.to_decoded(), width, height, filter_from_u8(filter))
        .map(JsDecodedImage::from_decoded)
        .map_err(to_js_error)
}

/// Shrink an image so its longest edge is at most `max_edge`, keeping aspect ratio.
///
/// Smaller images are returned unchanged.
///
/// ```typescript
/// const preview = resize_to_fit(upload, 1024, 1);
/// ```
#[wasm_bindgen]
pub fn resize_to_fit(
    image: &JsDecodedImage,
    max_edge: u32,
    filter: u8,
) -> Result<JsDecodedImage, JsValue> {
    decode::resize_to_fit(&image.to_decoded(), max_edge, filter_from_u8(filter))
        .map(JsDecodedImage::from_decoded)
        .map_err(to_js_error)
}
