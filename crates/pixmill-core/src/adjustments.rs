//! Per-pixel colour adjustments
//!
//! Every function here rewrites a `PixelGrid` in place, one pixel at a time,
//! with no dependency between pixels:
//!
//! - Grayscale (channel average)
//! - Invert (ceiling minus channel)
//! - Sepia (fixed 3×3 colour matrix)
//! - Hue / saturation / lightness set (via HSL round trip)
//!
//! Parameters are validated before the first pixel is written, so a rejected
//! call leaves the grid exactly as it was.

use tracing::{debug, instrument};

use crate::color::{hsl_to_rgb, rgb_to_hsl, HUE_MAX};
use crate::error::{check_range, TransformError};
use crate::grid::PixelGrid;
use crate::pixel::Pixel;

/// Sepia colour matrix, rows are the output red, green and blue.
pub const SEPIA_MATRIX: [[f64; 3]; 3] = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
];

/// Convert to grayscale by averaging the three channels.
///
/// Each channel becomes `(r + g + b) / 3` using integer division, which makes
/// the transform a fixed point: applying it twice changes nothing.
#[instrument(skip_all, fields(width = grid.width(), height = grid.height()))]
pub fn grayscale(grid: &mut PixelGrid) {
    grid.update(grayscale_pixel);
    debug!("Grayscale applied");
}

/// Invert every channel against `ceiling`: `channel = ceiling - channel`.
///
/// Channels above the ceiling saturate at 0. With the default ceiling of 255
/// the transform is its own inverse.
#[instrument(skip_all, fields(width = grid.width(), height = grid.height(), ceiling = ceiling))]
pub fn invert(grid: &mut PixelGrid, ceiling: u8) {
    grid.update(|p| invert_pixel(p, ceiling));
    debug!("Invert applied");
}

/// Apply the sepia colour matrix.
///
/// All three outputs are computed from the pixel's original channels, then
/// truncated and clamped to `0..=255`.
#[instrument(skip_all, fields(width = grid.width(), height = grid.height()))]
pub fn sepia(grid: &mut PixelGrid) {
    grid.update(sepia_pixel);
    debug!("Sepia applied");
}

/// Set every pixel's hue to `hue` degrees.
///
/// # Errors
/// `OutOfRangeParameter` unless `0 <= hue < 360`.
#[instrument(skip_all, fields(width = grid.width(), height = grid.height(), hue = hue))]
pub fn set_hue(grid: &mut PixelGrid, hue: f64) -> Result<(), TransformError> {
    check_hue(hue)?;
    grid.update(|p| {
        let mut hsl = rgb_to_hsl(p);
        hsl.hue = hue;
        hsl_to_rgb(hsl)
    });
    debug!("Hue set");
    Ok(())
}

/// Set every pixel's saturation to `saturation`.
///
/// # Errors
/// `OutOfRangeParameter` unless `0 <= saturation <= 1`.
#[instrument(skip_all, fields(width = grid.width(), height = grid.height(), saturation = saturation))]
pub fn set_saturation(grid: &mut PixelGrid, saturation: f64) -> Result<(), TransformError> {
    check_saturation(saturation)?;
    grid.update(|p| {
        let mut hsl = rgb_to_hsl(p);
        hsl.saturation = saturation;
        hsl_to_rgb(hsl)
    });
    debug!("Saturation set");
    Ok(())
}

/// Set every pixel's lightness to `lightness`.
///
/// # Errors
/// `OutOfRangeParameter` unless `0 <= lightness <= 1`.
#[instrument(skip_all, fields(width = grid.width(), height = grid.height(), lightness = lightness))]
pub fn set_lightness(grid: &mut PixelGrid, lightness: f64) -> Result<(), TransformError> {
    check_lightness(lightness)?;
    grid.update(|p| {
        let mut hsl = rgb_to_hsl(p);
        hsl.lightness = lightness;
        hsl_to_rgb(hsl)
    });
    debug!("Lightness set");
    Ok(())
}

pub(crate) fn check_hue(hue: f64) -> Result<(), TransformError> {
    check_range("hue", hue, 0.0, HUE_MAX, true)
}

pub(crate) fn check_saturation(saturation: f64) -> Result<(), TransformError> {
    check_range("saturation", saturation, 0.0, 1.0, false)
}

pub(crate) fn check_lightness(lightness: f64) -> Result<(), TransformError> {
    check_range("lightness", lightness, 0.0, 1.0, false)
}

#[inline]
fn grayscale_pixel(p: Pixel) -> Pixel {
    let avg = (p.red as u32 + p.green as u32 + p.blue as u32) / 3;
    Pixel::gray(avg as u8)
}

#[inline]
fn invert_pixel(p: Pixel, ceiling: u8) -> Pixel {
    p.map_channels(|c| ceiling.saturating_sub(c))
}

#[inline]
fn sepia_pixel(p: Pixel) -> Pixel {
    let rgb = [p.red as f64, p.green as f64, p.blue as f64];
    let row = |m: [f64; 3]| m[0] * rgb[0] + m[1] * rgb[1] + m[2] * rgb[2];
    Pixel::from_truncated_f64(
        row(SEPIA_MATRIX[0]),
        row(SEPIA_MATRIX[1]),
        row(SEPIA_MATRIX[2]),
    )
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for generating small random grids.
    fn grid_strategy() -> impl Strategy<Value = PixelGrid> {
        (1u32..=12, 1u32..=12).prop_flat_map(|(w, h)| {
            prop::collection::vec(any::<u8>(), (w * h * 3) as usize)
                .prop_map(move |pixels| PixelGrid::new(w, h, pixels).unwrap())
        })
    }

    proptest! {
        /// Property: invert with the full ceiling is its own inverse.
        #[test]
        fn prop_invert_involution(grid in grid_strategy()) {
            let mut work = grid.clone();
            invert(&mut work, 255);
            invert(&mut work, 255);
            prop_assert_eq!(work, grid);
        }

        /// Property: grayscale is idempotent.
        #[test]
        fn prop_grayscale_idempotent(grid in grid_strategy()) {
            let mut once = grid;
            grayscale(&mut once);
            let mut twice = once.clone();
            grayscale(&mut twice);
            prop_assert_eq!(once, twice);
        }

        /// Property: a hue outside [0, 360) is rejected and the grid is untouched.
        #[test]
        fn prop_set_hue_rejects_outside_circle(hue in prop_oneof![-1000.0f64..0.0, 360.0f64..1000.0]) {
            let mut grid = PixelGrid::filled(2, 2, Pixel::new(10, 200, 30));
            let before = grid.clone();
            prop_assert!(set_hue(&mut grid, hue).is_err());
            prop_assert_eq!(grid, before);
        }
    }
}
