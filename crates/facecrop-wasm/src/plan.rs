//! WASM bindings for crop planning and region extraction.
//!
//! These let the page run the planner against boxes from its own detector
//! and cut the region itself.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! const region = plan_square_crop(image.width, image.height, x, y, w, h, 'fit_face');
//! const face = apply_region(image, region.left, region.top, region.right, region.bottom);
//! ```

use crate::types::{sizing_policy_from_str, to_js_error, JsDecodedImage};
use facecrop_core::plan::{self, BoundingBox, ImageExtent, SquareRegion};
use facecrop_core::transform;
use wasm_bindgen::prelude::*;

/// Plan a square crop window around a face box.
///
/// # Arguments
///
/// * `width`, `height` - Source image dimensions
/// * `x`, `y`, `w`, `h` - Face box in source pixels
/// * `policy` - `"fit_face"` or `"fit_frame"`
///
/// # Returns
///
/// An object `{ left, top, right, bottom }`.
///
/// # Errors
///
/// Returns an error for an unknown policy or a zero-sized image or box.
#[wasm_bindgen]
pub fn plan_square_crop(
    width: u32,
    height: u32,
    x: u32,
    y: u32,
    w: u32,
    h: u32,
    policy: &str,
) -> Result<JsValue, JsValue> {
    let policy = sizing_policy_from_str(policy)
        .ok_or_else(|| JsValue::from_str(&format!("Unknown sizing policy: {}", policy)))?;

    let region = plan::plan_square_crop(
        ImageExtent::new(width, height),
        BoundingBox::new(x, y, w, h),
        policy,
    )
    .map_err(to_js_error)?;

    serde_wasm_bindgen::to_value(&region).map_err(to_js_error)
}

/// Cut a region out of an image.
///
/// Coordinates outside the image are clamped to it.
///
/// # Errors
///
/// Returns an error if the pixel buffer does not match the dimensions.
#[wasm_bindgen]
pub fn apply_region(
    image: &JsDecodedImage,
    left: u32,
    top: u32,
    right: u32,
    bottom: u32,
) -> Result<JsDecodedImage, JsValue> {
    let decoded = image.to_decoded();
    decoded.check_buffer().map_err(to_js_error)?;

    let region = SquareRegion {
        left,
        top,
        right,
        bottom,
    };
    Ok(JsDecodedImage::from_decoded(transform::apply_region(
        &decoded, &region,
    )))
}
