//! The square crop planner.
//!
//! # Algorithm
//!
//! 1. Pick the side length from the [`SizingPolicy`], capped at the short
//!    edge of the image so the square always fits.
//! 2. Centre the square on the face box centre (fractional, no rounding).
//! 3. Clamp each axis independently by translating the square back inside
//!    the image. The side length is never changed by the clamp.
//! 4. Truncate the coordinates to integers.

use super::{BoundingBox, ImageExtent, PlanError, SizingPolicy, SquareRegion};

/// Plan a square crop window around a face.
///
/// # Arguments
///
/// * `extent` - Dimensions of the source image
/// * `bounds` - The face to centre on. Must lie inside the image; this is
///   not checked.
/// * `policy` - How to size the square
///
/// # Returns
///
/// A [`SquareRegion`] fully contained in the image.
///
/// # Errors
///
/// * [`PlanError::InvalidExtent`] if the image has a zero dimension
/// * [`PlanError::InvalidBox`] if the face box has a zero dimension
///
/// # Example
///
/// ```
/// use facecrop_core::plan::{plan_square_crop, BoundingBox, ImageExtent, SizingPolicy};
///
/// let region = plan_square_crop(
///     ImageExtent::new(600, 400),
///     BoundingBox::new(550, 380, 40, 30),
///     SizingPolicy::FitFrame,
/// )
/// .unwrap();
/// assert_eq!((region.left, region.top, region.right, region.bottom), (200, 0, 600, 400));
/// ```
pub fn plan_square_crop(
    extent: ImageExtent,
    bounds: BoundingBox,
    policy: SizingPolicy,
) -> Result<SquareRegion, PlanError> {
    if extent.width == 0 || extent.height == 0 {
        return Err(PlanError::InvalidExtent {
            width: extent.width,
            height: extent.height,
        });
    }
    if bounds.w == 0 || bounds.h == 0 {
        return Err(PlanError::InvalidBox {
            w: bounds.w,
            h: bounds.h,
        });
    }

    let side = side_length(extent, bounds, policy) as f64;
    let (center_x, center_y) = bounds.center();

    let (left, right) = clamp_axis(center_x, side, extent.width as f64);
    let (top, bottom) = clamp_axis(center_y, side, extent.height as f64);

    // Start and end share the same fractional part, so truncating both
    // keeps the region square.
    Ok(SquareRegion {
        left: left as u32,
        top: top as u32,
        right: right as u32,
        bottom: bottom as u32,
    })
}

/// Side length chosen by the policy, capped so the square fits the image.
fn side_length(extent: ImageExtent, bounds: BoundingBox, policy: SizingPolicy) -> u32 {
    let requested = match policy {
        SizingPolicy::FitFace => bounds.w.max(bounds.h),
        SizingPolicy::FitFrame => extent.short_edge(),
    };
    requested.min(extent.short_edge())
}

/// Centre a span of `side` on `center` and translate it into `0..=limit`.
///
/// Requires `side <= limit`.
#[inline]
fn clamp_axis(center: f64, side: f64, limit: f64) -> (f64, f64) {
    let start = center - side / 2.0;
    let end = start + side;

    if start < 0.0 {
        (0.0, side)
    } else if end > limit {
        (limit - side, limit)
    } else {
        (start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corners(region: SquareRegion) -> (u32, u32, u32, u32) {
        (region.left, region.top, region.right, region.bottom)
    }

    #[test]
    fn test_fit_face_inside_image() {
        let region = plan_square_crop(
            ImageExtent::new(1000, 800),
            BoundingBox::new(100, 100, 200, 200),
            SizingPolicy::FitFace,
        )
        .unwrap();
        assert_eq!(corners(region), (100, 100, 300, 300));
    }

    #[test]
    fn test_fit_face_at_origin() {
        let region = plan_square_crop(
            ImageExtent::new(1000, 800),
            BoundingBox::new(0, 0, 100, 100),
            SizingPolicy::FitFace,
        )
        .unwrap();
        assert_eq!(corners(region), (0, 0, 100, 100));
    }

    #[test]
    fn test_fit_frame_clamps_far_edges() {
        let region = plan_square_crop(
            ImageExtent::new(600, 400),
            BoundingBox::new(550, 380, 40, 30),
            SizingPolicy::FitFrame,
        )
        .unwrap();
        assert_eq!(corners(region), (200, 0, 600, 400));
    }

    #[test]
    fn test_fit_face_uses_longer_box_edge() {
        let region = plan_square_crop(
            ImageExtent::new(1000, 1000),
            BoundingBox::new(400, 400, 100, 160),
            SizingPolicy::FitFace,
        )
        .unwrap();
        // centre (450, 480), side 160
        assert_eq!(corners(region), (370, 400, 530, 560));
    }

    #[test]
    fn test_fractional_centre_is_not_truncated_early() {
        // centre x = 10 + 5/2 = 12.5, side 5 -> left 10.0
        // Truncating the centre first would give left 9.
        let region = plan_square_crop(
            ImageExtent::new(100, 100),
            BoundingBox::new(10, 10, 5, 5),
            SizingPolicy::FitFace,
        )
        .unwrap();
        assert_eq!(corners(region), (10, 10, 15, 15));
    }

    #[test]
    fn test_half_pixel_start_stays_square() {
        // centre x = 20.5 with side 4 -> start 18.5, end 22.5
        let region = plan_square_crop(
            ImageExtent::new(100, 100),
            BoundingBox::new(19, 19, 3, 4),
            SizingPolicy::FitFace,
        )
        .unwrap();
        assert_eq!(region.right - region.left, region.bottom - region.top);
        assert_eq!(region.side(), 4);
    }

    #[test]
    fn test_clamp_left_and_top() {
        let region = plan_square_crop(
            ImageExtent::new(500, 500),
            BoundingBox::new(0, 10, 40, 40),
            SizingPolicy::FitFrame,
        )
        .unwrap();
        assert_eq!(corners(region), (0, 0, 500, 500));
    }

    #[test]
    fn test_face_wider_than_frame_is_capped() {
        // A face box as wide as the image in a landscape photo: the square
        // cannot be 300 tall, so the side is capped at the short edge.
        let region = plan_square_crop(
            ImageExtent::new(300, 200),
            BoundingBox::new(0, 0, 300, 200),
            SizingPolicy::FitFace,
        )
        .unwrap();
        assert_eq!(region.side(), 200);
        assert_eq!(corners(region), (50, 0, 250, 200));
    }

    #[test]
    fn test_fit_frame_ignores_box_size() {
        let extent = ImageExtent::new(640, 480);
        for bounds in [
            BoundingBox::new(0, 0, 1, 1),
            BoundingBox::new(100, 100, 50, 80),
            BoundingBox::new(600, 400, 40, 80),
        ] {
            let region = plan_square_crop(extent, bounds, SizingPolicy::FitFrame).unwrap();
            assert_eq!(region.side(), 480);
        }
    }

    #[test]
    fn test_single_pixel_image() {
        let region = plan_square_crop(
            ImageExtent::new(1, 1),
            BoundingBox::new(0, 0, 1, 1),
            SizingPolicy::FitFace,
        )
        .unwrap();
        assert_eq!(corners(region), (0, 0, 1, 1));
    }

    #[test]
    fn test_zero_width_extent_rejected() {
        let result = plan_square_crop(
            ImageExtent::new(0, 100),
            BoundingBox::new(0, 0, 10, 10),
            SizingPolicy::FitFace,
        );
        assert_eq!(
            result,
            Err(PlanError::InvalidExtent {
                width: 0,
                height: 100
            })
        );
    }

    #[test]
    fn test_zero_height_extent_rejected() {
        let result = plan_square_crop(
            ImageExtent::new(100, 0),
            BoundingBox::new(0, 0, 10, 10),
            SizingPolicy::FitFrame,
        );
        assert!(matches!(result, Err(PlanError::InvalidExtent { .. })));
    }

    #[test]
    fn test_zero_box_width_rejected() {
        let result = plan_square_crop(
            ImageExtent::new(100, 100),
            BoundingBox::new(10, 10, 0, 10),
            SizingPolicy::FitFace,
        );
        assert_eq!(result, Err(PlanError::InvalidBox { w: 0, h: 10 }));
    }

    #[test]
    fn test_extent_checked_before_box() {
        let result = plan_square_crop(
            ImageExtent::new(0, 0),
            BoundingBox::new(0, 0, 0, 0),
            SizingPolicy::FitFace,
        );
        assert!(matches!(result, Err(PlanError::InvalidExtent { .. })));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
