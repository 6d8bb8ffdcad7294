//! Composite "warm + vignette + grain" filter.
//!
//! # Stages
//!
//! 1. Warm: `r = r * warm_red_gain`, `b = b / warm_blue_divisor`, green
//!    unchanged (truncated, clamped)
//! 2. Vignette: blend with the halo texture,
//!    `out = (1 - vignette_weight) * img + vignette_weight * halo`
//! 3. Grain: blend with the grain texture,
//!    `out = (1 - grain_weight) * img + grain_weight * grain`
//!
//! Blends are rounded to the nearest integer and clamped. Both textures are
//! supplied by the caller, decoded once and reused across calls; the filter
//! never loads anything itself.

use tracing::{debug, instrument};

use crate::error::TransformError;
use crate::grid::PixelGrid;
use crate::pixel::Pixel;
use crate::TransformConfig;

/// The halo and grain textures blended in by [`apply_filter`].
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOverlays {
    halo: PixelGrid,
    grain: PixelGrid,
}

impl FilterOverlays {
    /// Pair a halo texture with a grain texture.
    ///
    /// # Errors
    /// `DimensionMismatch` if the two textures differ in size.
    pub fn new(halo: PixelGrid, grain: PixelGrid) -> Result<Self, TransformError> {
        if halo.dimensions() != grain.dimensions() {
            return Err(TransformError::mismatch(halo.dimensions(), grain.dimensions()));
        }
        Ok(Self { halo, grain })
    }

    pub fn halo(&self) -> &PixelGrid {
        &self.halo
    }

    pub fn grain(&self) -> &PixelGrid {
        &self.grain
    }

    /// `(width, height)` shared by both textures.
    pub fn dimensions(&self) -> (u32, u32) {
        self.halo.dimensions()
    }

    /// Fail unless the textures match `(width, height)`.
    pub fn check_fits(&self, dimensions: (u32, u32)) -> Result<(), TransformError> {
        if self.dimensions() != dimensions {
            return Err(TransformError::mismatch(dimensions, self.dimensions()));
        }
        Ok(())
    }
}

/// Apply the composite filter in place.
///
/// # Errors
/// - `OutOfRangeParameter` if `config` fails validation
/// - `DimensionMismatch` if the overlays don't match the grid
///
/// Both checks run before any pixel is written.
#[instrument(skip_all, fields(width = grid.width(), height = grid.height()))]
pub fn apply_filter(
    grid: &mut PixelGrid,
    overlays: &FilterOverlays,
    config: &TransformConfig,
) -> Result<(), TransformError> {
    config.validate()?;
    overlays.check_fits(grid.dimensions())?;

    let gain = config.warm_red_gain;
    let divisor = config.warm_blue_divisor;
    let vignette = config.vignette_weight;
    let grain_weight = config.grain_weight;

    grid.update_indexed(|idx, p| {
        let warm = Pixel::from_truncated_f64(
            p.red as f64 * gain,
            p.green as f64,
            p.blue as f64 / divisor,
        );
        let vignetted = blend(warm, overlays.halo.pixel_at_index(idx), vignette);
        blend(vignetted, overlays.grain.pixel_at_index(idx), grain_weight)
    });

    debug!(
        warm_red_gain = gain,
        warm_blue_divisor = divisor,
        vignette_weight = vignette,
        grain_weight,
        "Filter applied"
    );
    Ok(())
}

/// `(1 - weight) * base + weight * overlay`, per channel.
#[inline]
fn blend(base: Pixel, overlay: Pixel, weight: f64) -> Pixel {
    let mix = |a: u8, b: u8| {
        let v = (1.0 - weight) * a as f64 + weight * b as f64;
        v.round().clamp(0.0, 255.0) as u8
    };
    Pixel::new(
        mix(base.red, overlay.red),
        mix(base.green, overlay.green),
        mix(base.blue, overlay.blue),
    )
}
