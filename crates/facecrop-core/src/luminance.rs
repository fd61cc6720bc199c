//! Grayscale conversion for face detection.
//!
//! Cascade face detectors are trained on luma computed with the ITU-R BT.601
//! weights, so the same weights are used here rather than BT.709.

use crate::decode::DecodedImage;
use crate::plan::ImageExtent;

/// ITU-R BT.601 coefficient for red channel in luma calculation.
pub const LUMA_R: f32 = 0.299;

/// ITU-R BT.601 coefficient for green channel in luma calculation.
pub const LUMA_G: f32 = 0.587;

/// ITU-R BT.601 coefficient for blue channel in luma calculation.
pub const LUMA_B: f32 = 0.114;

/// An 8-bit single channel image, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayFrame {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl GrayFrame {
    pub fn extent(&self) -> ImageExtent {
        ImageExtent::new(self.width, self.height)
    }
}

/// Calculate luma from u8 RGB values (0 to 255).
#[inline]
pub fn calculate_luma_u8(r: u8, g: u8, b: u8) -> u8 {
    let luma = LUMA_R * r as f32 + LUMA_G * g as f32 + LUMA_B * b as f32;
    luma.clamp(0.0, 255.0).round() as u8
}

/// Convert an RGB image into the grayscale frame a detector consumes.
pub fn to_gray_frame(image: &DecodedImage) -> GrayFrame {
    let pixels = image
        .pixels
        .chunks_exact(3)
        .map(|px| calculate_luma_u8(px[0], px[1], px[2]))
        .collect();

    GrayFrame {
        width: image.width,
        height: image.height,
        pixels,
    }
}
