//! Two-tone black/white stylization around the median luminance.
//!
//! # Algorithm
//!
//! 1. Compute the luminance of every pixel (see [`crate::luminance`])
//! 2. Find the upper-middle median of those samples
//! 3. Paint pixels at or above the median white, the rest black
//!
//! The classification pass compares against the samples gathered in step 1,
//! never against the partially rewritten grid, so the result does not depend
//! on iteration order.

use tracing::{debug, instrument};

use crate::error::TransformError;
use crate::grid::PixelGrid;
use crate::luminance::calculate_luminance;
use crate::median::{median, upper_middle};
use crate::pixel::Pixel;

/// Replace every pixel with black or white depending on its luminance.
///
/// Pixels whose luminance is `>= median` become `(ceiling, ceiling, ceiling)`,
/// the others become `(0, 0, 0)`. An empty grid is returned unchanged.
#[instrument(skip_all, fields(width = grid.width(), height = grid.height(), ceiling = ceiling))]
pub fn bw_stylize(grid: &mut PixelGrid, ceiling: u8) {
    if grid.is_empty() {
        return;
    }

    // Non-empty from here on, so the median always exists.
    let samples = grid.collect(calculate_luminance);
    let mut scratch = samples.clone();
    let threshold = upper_middle(&mut scratch);

    let white = Pixel::gray(ceiling);
    grid.update_indexed(|idx, _| {
        if samples[idx] >= threshold {
            white
        } else {
            Pixel::BLACK
        }
    });

    debug!(threshold, "Black/white stylize applied");
}

/// Median luminance of the grid, the threshold used by [`bw_stylize`].
///
/// # Errors
/// `EmptyInput` for a grid with no pixels.
pub fn luminance_median(grid: &PixelGrid) -> Result<f64, TransformError> {
    let mut samples = grid.collect(calculate_luminance);
    median(&mut samples)
}
