//! Square crop planning around a detected face.
//!
//! Given the pixel dimensions of a photo and one face bounding box, the
//! planner computes a square crop window that is guaranteed to lie inside
//! the photo. Two sizing policies decide the side length:
//!
//! - [`SizingPolicy::FitFace`] - the smallest square that holds the face box
//! - [`SizingPolicy::FitFrame`] - the largest square that fits the photo
//!
//! # Coordinate System
//!
//! - Coordinates are in source pixels, origin at the top-left corner
//! - Regions are half-open: `left..right`, `top..bottom`
//!
//! # Example
//!
//! ```ignore
//! use facecrop_core::plan::{plan_square_crop, BoundingBox, ImageExtent, SizingPolicy};
//!
//! let extent = ImageExtent::new(1000, 800);
//! let face = BoundingBox::new(100, 100, 200, 200);
//! let region = plan_square_crop(extent, face, SizingPolicy::FitFace)?;
//! assert_eq!((region.left, region.top, region.right, region.bottom), (100, 100, 300, 300));
//! ```

mod square;
mod types;

pub use square::plan_square_crop;
pub use types::{BoundingBox, ImageExtent, PlanError, SizingPolicy, SquareRegion};
