//! Download encoding WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! const jpeg = encode_jpeg_from_image(cropped, 90);
//! const blob = new Blob([jpeg], { type: download_mime_type() });
//! const link = Object.assign(document.createElement('a'), {
//!   href: URL.createObjectURL(blob),
//!   download: download_file_name(),
//! });
//! link.click();
//! ```

use crate::types::{to_js_error, JsDecodedImage};
use facecrop_core::encode;
use wasm_bindgen::prelude::*;

/// Encode RGB pixel data to JPEG bytes.
///
/// # Errors
///
/// Returns an error if:
/// - The pixel data length doesn't match width * height * 3
/// - Width or height is zero
/// - Encoding fails internally
#[wasm_bindgen]
pub fn encode_jpeg(pixels: &[u8], width: u32, height: u32, quality: u8) -> Result<Vec<u8>, JsValue> {
    encode::encode_jpeg(pixels, width, height, quality).map_err(to_js_error)
}

/// Encode a JsDecodedImage to JPEG bytes.
#[wasm_bindgen]
pub fn encode_jpeg_from_image(image: &JsDecodedImage, quality: u8) -> Result<Vec<u8>, JsValue> {
    encode::encode_image(&image.to_decoded(), quality).map_err(to_js_error)
}

/// Name to save the cropped face under.
#[wasm_bindgen]
pub fn download_file_name() -> String {
    encode::DOWNLOAD_FILE_NAME.to_string()
}

/// MIME type of the download.
#[wasm_bindgen]
pub fn download_mime_type() -> String {
    encode::DOWNLOAD_MIME_TYPE.to_string()
}


/// WASM-specific tests that require JsValue.
///
/// Run with `wasm-pack test`.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_encode_jpeg_basic() {
        let pixels = vec![128u8; 100 * 100 * 3];
        let jpeg = encode_jpeg(&pixels, 100, 100, 90).unwrap();
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
    }

    #[wasm_bindgen_test]
    fn test_encode_jpeg_invalid_dimensions() {
        assert!(encode_jpeg(&[128u8; 100], 0, 100, 90).is_err());
    }

    #[wasm_bindgen_test]
    fn test_encode_jpeg_from_image() {
        let img = JsDecodedImage::new(50, 50, vec![128u8; 50 * 50 * 3]);
        let jpeg = encode_jpeg_from_image(&img, 90).unwrap();
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
    }
}
