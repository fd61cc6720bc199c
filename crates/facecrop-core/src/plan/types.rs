//! Value types shared by the crop planner and its callers.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Caller-contract violations reported by the planner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// The image has a zero width or height.
    #[error("Invalid image extent: width ({width}) and height ({height}) must be non-zero")]
    InvalidExtent { width: u32, height: u32 },

    /// The face box has a zero width or height.
    #[error("Invalid face box: w ({w}) and h ({h}) must be non-zero")]
    InvalidBox { w: u32, h: u32 },
}

/// Rule deciding the side length of the square crop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizingPolicy {
    /// Side = max(box.w, box.h): a tight square around the face.
    #[default]
    FitFace,
    /// Side = min(width, height): the largest square the photo can hold.
    FitFrame,
}

/// Pixel dimensions of a source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageExtent {
    pub width: u32,
    pub height: u32,
}

impl ImageExtent {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Length of the shorter edge.
    #[inline]
    pub fn short_edge(&self) -> u32 {
        self.width.min(self.height)
    }

    /// Centre of the image in fractional pixels.
    pub fn center(&self) -> (f64, f64) {
        (self.width as f64 / 2.0, self.height as f64 / 2.0)
    }
}

/// Axis-aligned face rectangle in image pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl BoundingBox {
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Area in pixels.
    pub fn area(&self) -> u64 {
        self.w as u64 * self.h as u64
    }

    /// Centre of the box in fractional pixels (not truncated).
    pub fn center(&self) -> (f64, f64) {
        (
            self.x as f64 + self.w as f64 / 2.0,
            self.y as f64 + self.h as f64 / 2.0,
        )
    }

    /// Intersect a rectangle given in signed coordinates with the image.
    ///
    /// Detectors may report rectangles that start left of or above the
    /// image, or run past its far edges. Returns `None` when nothing of the
    /// rectangle remains inside the image.
    pub fn clip_to(x: i64, y: i64, w: i64, h: i64, extent: ImageExtent) -> Option<Self> {
        let left = x.max(0);
        let top = y.max(0);
        let right = (x + w).min(extent.width as i64);
        let bottom = (y + h).min(extent.height as i64);

        if right <= left || bottom <= top {
            return None;
        }

        Some(Self {
            x: left as u32,
            y: top as u32,
            w: (right - left) as u32,
            h: (bottom - top) as u32,
        })
    }

    /// Scale the box by a uniform factor, e.g. to map detections on a
    /// downscaled copy back to full resolution. The result is clipped to
    /// `extent`.
    pub fn scaled(&self, factor: f64, extent: ImageExtent) -> Option<Self> {
        let x = (self.x as f64 * factor).floor() as i64;
        let y = (self.y as f64 * factor).floor() as i64;
        let w = (self.w as f64 * factor).round().max(1.0) as i64;
        let h = (self.h as f64 * factor).round().max(1.0) as i64;
        Self::clip_to(x, y, w, h, extent)
    }
}

/// Square crop window, half-open on the right and bottom edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquareRegion {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl SquareRegion {
    /// Side length in pixels.
    #[inline]
    pub fn side(&self) -> u32 {
        self.right - self.left
    }

    /// Whether the region lies entirely inside an image of this extent.
    pub fn fits_within(&self, extent: ImageExtent) -> bool {
        self.right <= extent.width && self.bottom <= extent.height
    }

    /// Whether the face box is fully covered by this region.
    pub fn contains_box(&self, bounds: &BoundingBox) -> bool {
        bounds.x >= self.left
            && bounds.y >= self.top
            && bounds.x + bounds.w <= self.right
            && bounds.y + bounds.h <= self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_center_is_fractional() {
        let b = BoundingBox::new(10, 20, 5, 7);
        assert_eq!(b.center(), (12.5, 23.5));
    }

    #[test]
    fn test_box_area() {
        assert_eq!(BoundingBox::new(0, 0, 200, 300).area(), 60_000);
    }

    #[test]
    fn test_clip_inside_is_unchanged() {
        let extent = ImageExtent::new(100, 100);
        let clipped = BoundingBox::clip_to(10, 10, 20, 30, extent);
        assert_eq!(clipped, Some(BoundingBox::new(10, 10, 20, 30)));
    }

    #[test]
    fn test_clip_negative_origin() {
        let extent = ImageExtent::new(100, 100);
        let clipped = BoundingBox::clip_to(-5, -10, 20, 30, extent);
        assert_eq!(clipped, Some(BoundingBox::new(0, 0, 15, 20)));
    }

    #[test]
    fn test_clip_past_far_edge() {
        let extent = ImageExtent::new(100, 80);
        let clipped = BoundingBox::clip_to(90, 70, 20, 20, extent);
        assert_eq!(clipped, Some(BoundingBox::new(90, 70, 10, 10)));
    }

    #[test]
    fn test_clip_fully_outside() {
        let extent = ImageExtent::new(100, 100);
        assert_eq!(BoundingBox::clip_to(150, 10, 20, 20, extent), None);
        assert_eq!(BoundingBox::clip_to(-30, 10, 20, 20, extent), None);
    }

    #[test]
    fn test_scaled_maps_back_to_full_resolution() {
        let extent = ImageExtent::new(2000, 1000);
        let small = BoundingBox::new(50, 25, 100, 100);
        assert_eq!(
            small.scaled(4.0, extent),
            Some(BoundingBox::new(200, 100, 400, 400))
        );
    }

    #[test]
    fn test_scaled_is_clipped() {
        let extent = ImageExtent::new(300, 300);
        let small = BoundingBox::new(90, 90, 20, 20);
        assert_eq!(
            small.scaled(3.0, extent),
            Some(BoundingBox::new(270, 270, 30, 30))
        );
    }

    #[test]
    fn test_region_helpers() {
        let region = SquareRegion {
            left: 10,
            top: 20,
            right: 60,
            bottom: 70,
        };
        assert_eq!(region.side(), 50);
        assert!(region.fits_within(ImageExtent::new(60, 70)));
        assert!(!region.fits_within(ImageExtent::new(59, 70)));
        assert!(region.contains_box(&BoundingBox::new(10, 20, 50, 50)));
        assert!(!region.contains_box(&BoundingBox::new(9, 20, 10, 10)));
    }

    #[test]
    fn test_sizing_policy_default() {
        assert_eq!(SizingPolicy::default(), SizingPolicy::FitFace);
    }

    #[test]
    fn test_plan_error_display() {
        let err = PlanError::InvalidExtent {
            width: 0,
            height: 10,
        };
        assert_eq!(
            err.to_string(),
            "Invalid image extent: width (0) and height (10) must be non-zero"
        );

        let err = PlanError::InvalidBox { w: 3, h: 0 };
        assert_eq!(err.to_string(), "Invalid face box: w (3) and h (0) must be non-zero");
    }
}
