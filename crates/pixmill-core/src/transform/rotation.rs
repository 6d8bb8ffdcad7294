//! Quarter-turn rotation.
//!
//! # Mapping
//!
//! For a `W × H` source the output is `H × W`, and
//!
//! ```text
//! out(new_x = y, new_y = W - x - 1) = in(x, y)
//! ```
//!
//! The loop runs over output pixels and uses the inverse of that mapping
//! (`x = W - 1 - new_y`, `y = new_x`) so every output pixel is written once.
//! Four applications return the original image.

use tracing::{debug, instrument};

use crate::grid::PixelGrid;
use crate::pixel::Pixel;

/// Rotate a grid by a quarter turn, returning a new grid with swapped
/// dimensions. The input is left untouched.
#[instrument(skip_all, fields(width = image.width(), height = image.height()))]
pub fn rotate_90(image: &PixelGrid) -> PixelGrid {
    let (src_w, src_h) = image.dimensions();
    if image.is_empty() {
        return PixelGrid::filled(src_h, src_w, Pixel::BLACK);
    }

    let src_w_usize = src_w as usize;
    let rotated = PixelGrid::from_fn(src_h, src_w, |new_x, new_y| {
        let src_x = src_w_usize - 1 - new_y as usize;
        let src_y = new_x as usize;
        image.pixel_at_index(src_y * src_w_usize + src_x)
    });

    debug!(
        new_width = rotated.width(),
        new_height = rotated.height(),
        "Rotation applied"
    );
    rotated
}
