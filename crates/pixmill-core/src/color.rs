//! RGB ↔ HSL conversion.
//!
//! Hue is expressed in degrees `[0, 360)`, saturation and lightness in
//! `[0, 1]`. The forward conversion is the conventional max/min formulation;
//! the inverse uses the chroma / hue-sector decomposition and rounds each
//! channel to the nearest integer, so a pixel converted to HSL and back lands
//! within ±1 of where it started.
//!
//! # Formulas
//!
//! ```text
//! L = (max + min) / 2
//! S = (max - min) / (1 - |2L - 1|)          (0 when max == min)
//! C = (1 - |2L - 1|) * S
//! X = C * (1 - |(H / 60) mod 2 - 1|)
//! m = L - C / 2
//! ```

use serde::{Deserialize, Serialize};

use crate::pixel::Pixel;

/// Exclusive upper bound of the hue circle, in degrees.
pub const HUE_MAX: f64 = 360.0;

/// A colour in hue / saturation / lightness form.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue in degrees (0 to 360, exclusive)
    pub hue: f64,
    /// Saturation (0.0 to 1.0)
    pub saturation: f64,
    /// Lightness (0.0 to 1.0)
    pub lightness: f64,
}

impl Hsl {
    pub fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }
}

/// Convert an RGB pixel to HSL.
pub fn rgb_to_hsl(pixel: Pixel) -> Hsl {
    let max_c = pixel.red.max(pixel.green).max(pixel.blue);
    let min_c = pixel.red.min(pixel.green).min(pixel.blue);

    let max = max_c as f64 / 255.0;
    let min = min_c as f64 / 255.0;
    let lightness = (max + min) / 2.0;

    // Achromatic: hue and saturation are both zero
    if max_c == min_c {
        return Hsl::new(0.0, 0.0, lightness);
    }

    let r = pixel.red as f64 / 255.0;
    let g = pixel.green as f64 / 255.0;
    let b = pixel.blue as f64 / 255.0;

    let delta = max - min;
    let saturation = delta / (1.0 - (2.0 * lightness - 1.0).abs());

    // Channel comparisons are done on the integer values so ties resolve exactly
    let sector = if max_c == pixel.red {
        ((g - b) / delta).rem_euclid(6.0)
    } else if max_c == pixel.green {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    let mut hue = sector * 60.0;
    if hue >= HUE_MAX {
        hue -= HUE_MAX;
    }

    Hsl::new(hue, saturation.min(1.0), lightness)
}

/// Convert HSL back to an RGB pixel, rounding each channel.
///
/// Hue outside `[0, 360)` wraps around the circle; saturation and lightness
/// are clamped to `[0, 1]`.
pub fn hsl_to_rgb(hsl: Hsl) -> Pixel {
    let hue = hsl.hue.rem_euclid(HUE_MAX);
    let saturation = hsl.saturation.clamp(0.0, 1.0);
    let lightness = hsl.lightness.clamp(0.0, 1.0);

    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let h_prime = hue / 60.0;
    let x = chroma * (1.0 - (h_prime.rem_euclid(2.0) - 1.0).abs());
    let m = lightness - chroma / 2.0;

    let (r, g, b) = match h_prime as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    Pixel::new(to_channel(r + m), to_channel(g + m), to_channel(b + m))
}

#[inline]
fn to_channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}
