//! Cutting a square region out of a decoded image.

use crate::decode::DecodedImage;
use crate::plan::SquareRegion;

/// Copy the pixels inside `region` into a new image.
///
/// Regions produced by the planner always fit the image. Other regions are
/// clamped to the image bounds, and the output is at least 1x1. Rows a short
/// pixel buffer cannot supply come out black; use
/// [`DecodedImage::check_buffer`] to reject such images first.
///
/// # Example
///
/// ```
/// use facecrop_core::decode::DecodedImage;
/// use facecrop_core::plan::SquareRegion;
/// use facecrop_core::transform::apply_region;
///
/// let image = DecodedImage::new(100, 100, vec![128u8; 100 * 100 * 3]);
/// let region = SquareRegion { left: 25, top: 25, right: 75, bottom: 75 };
/// let cropped = apply_region(&image, &region);
/// assert_eq!((cropped.width, cropped.height), (50, 50));
/// ```
pub fn apply_region(image: &DecodedImage, region: &SquareRegion) -> DecodedImage {
    if region.left == 0
        && region.top == 0
        && region.right >= image.width
        && region.bottom >= image.height
    {
        return image.clone();
    }

    let left = region.left.min(image.width.saturating_sub(1));
    let top = region.top.min(image.height.saturating_sub(1));
    let right = region.right.min(image.width).max(left + 1);
    let bottom = region.bottom.min(image.height).max(top + 1);

    let out_width = right - left;
    let out_height = bottom - top;

    let src_stride = image.width as usize * 3;
    let row_bytes = out_width as usize * 3;
    let mut output = Vec::with_capacity(row_bytes * out_height as usize);

    for y in top..bottom {
        let start = y as usize * src_stride + left as usize * 3;
        match image.pixels.get(start..start + row_bytes) {
            Some(row) => output.extend_from_slice(row),
            None => output.resize(output.len() + row_bytes, 0),
        }
    }

    DecodedImage {
        width: out_width,
        height: out_height,
        pixels: output,
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
