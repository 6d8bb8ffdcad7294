//! Geometry-changing transforms.
//!
//! Unlike the colour adjustments, these allocate a new grid instead of
//! rewriting the input, because the output geometry differs.
//!
//! # Coordinate System
//!
//! - `x` is the column, `y` is the row
//! - Origin is top-left corner

mod rotation;

pub use rotation::rotate_90;
