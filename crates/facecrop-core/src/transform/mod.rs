//! Pixel operations applied to a planned crop.
//!
//! # Coordinate System
//!
//! - Regions are in source pixels, half-open on the right and bottom
//! - Origin is top-left corner

mod crop;

pub use crop::apply_region;
