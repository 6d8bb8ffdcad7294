//! Pixmill Core - Pixel transformation library
//!
//! This crate provides the in-memory transformation engine for Pixmill:
//! RGB ↔ HSL conversion, per-pixel adjustments, median-threshold black/white
//! stylization, quarter-turn rotation and the composite warm/vignette/grain
//! filter. Decoding and encoding image files is left to the caller; the only
//! boundary offered is a lossless conversion to and from `image::RgbImage`.

pub mod adjustments;
pub mod color;
pub mod error;
pub mod filter;
pub mod grid;
pub mod luminance;
pub mod median;
pub mod pipeline;
pub mod pixel;
pub mod stylize;
pub mod transform;

pub use adjustments::{grayscale, invert, sepia, set_hue, set_lightness, set_saturation};
pub use color::{hsl_to_rgb, rgb_to_hsl, Hsl};
pub use error::TransformError;
pub use filter::{apply_filter, FilterOverlays};
pub use grid::PixelGrid;
pub use median::median;
pub use pipeline::{Operation, Pipeline};
pub use pixel::Pixel;
pub use stylize::{bw_stylize, luminance_median};
pub use transform::rotate_90;

use error::check_range;

/// Default channel ceiling used by invert and as the black/white "white" level.
pub const DEFAULT_CHANNEL_CEILING: u8 = 255;

/// Tunable constants for the transforms.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    /// Ceiling `C` for invert (`C - channel`) and the white level of
    /// black/white stylize (0 to 255)
    pub channel_ceiling: u8,
    /// Filter warm stage: red multiplier (> 0)
    pub warm_red_gain: f64,
    /// Filter warm stage: blue divisor (> 0)
    pub warm_blue_divisor: f64,
    /// Filter vignette stage: halo overlay weight (0.0 to 1.0)
    pub vignette_weight: f64,
    /// Filter grain stage: grain overlay weight (0.0 to 1.0)
    pub grain_weight: f64,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            channel_ceiling: DEFAULT_CHANNEL_CEILING,
            warm_red_gain: 1.2,
            warm_blue_divisor: 1.5,
            vignette_weight: 0.35,
            grain_weight: 0.05,
        }
    }
}

impl TransformConfig {
    /// Create a new TransformConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if all values are at their defaults
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Reject gains, divisors and weights outside their legal domain.
    pub fn validate(&self) -> Result<(), TransformError> {
        check_range("warm_red_gain", self.warm_red_gain, f64::MIN_POSITIVE, f64::MAX, false)?;
        check_range(
            "warm_blue_divisor",
            self.warm_blue_divisor,
            f64::MIN_POSITIVE,
            f64::MAX,
            false,
        )?;
        check_range("vignette_weight", self.vignette_weight, 0.0, 1.0, false)?;
        check_range("grain_weight", self.grain_weight, 0.0, 1.0, false)?;
        Ok(())
    }
}
