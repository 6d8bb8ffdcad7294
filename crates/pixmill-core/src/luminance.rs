//! Perceptual luminance used by the black/white stylize transform.
//!
//! The weights are the ITU-R BT.601 luma coefficients applied to squared
//! channels, so saturated colours weigh more than a plain weighted sum would
//! give them:
//!
//! ```text
//! luminance = sqrt(0.299 r² + 0.587 g² + 0.114 b²)
//! ```

use crate::pixel::Pixel;

/// BT.601 coefficient for the red channel.
pub const LUMINANCE_R: f64 = 0.299;

/// BT.601 coefficient for the green channel.
pub const LUMINANCE_G: f64 = 0.587;

/// BT.601 coefficient for the blue channel.
pub const LUMINANCE_B: f64 = 0.114;

/// Calculate luminance from a pixel's 8-bit channels.
///
/// # Returns
/// Luminance value (0.0 to ~255.0)
#[inline]
pub fn calculate_luminance(pixel: Pixel) -> f64 {
    let r = pixel.red as f64;
    let g = pixel.green as f64;
    let b = pixel.blue as f64;
    (LUMINANCE_R * r * r + LUMINANCE_G * g * g + LUMINANCE_B * b * b).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coefficients_sum_to_one() {
        let sum = LUMINANCE_R + LUMINANCE_G + LUMINANCE_B;
        assert!((sum - 1.0).abs() < 1e-9, "Coefficients should sum to 1.0");
    }

    #[test]
    fn test_luminance_pure_black() {
        assert_eq!(calculate_luminance(Pixel::BLACK), 0.0);
    }

    #[test]
    fn test_luminance_gray_preserves_value() {
        // For gray (r=g=b), luminance should equal that gray value
        for v in [0u8, 50, 100, 128, 255] {
            let lum = calculate_luminance(Pixel::gray(v));
            assert!(
                (lum - v as f64).abs() < 1e-9,
                "Gray {} should produce luminance {}, got {}",
                v,
                v,
                lum
            );
        }
    }

    #[test]
    fn test_luminance_pure_channels() {
        // sqrt(0.587) * 255 ≈ 195.37
        let green = calculate_luminance(Pixel::new(0, 255, 0));
        assert!((green - 195.37).abs() < 0.01, "green was {}", green);

        // sqrt(0.299) * 255 ≈ 139.44
        let red = calculate_luminance(Pixel::new(255, 0, 0));
        assert!((red - 139.44).abs() < 0.01, "red was {}", red);

        // sqrt(0.114) * 255 ≈ 86.10
        let blue = calculate_luminance(Pixel::new(0, 0, 255));
        assert!((blue - 86.10).abs() < 0.01, "blue was {}", blue);
    }

    #[test]
    fn test_green_brighter_than_red_brighter_than_blue() {
        let r = calculate_luminance(Pixel::new(200, 0, 0));
        let g = calculate_luminance(Pixel::new(0, 200, 0));
        let b = calculate_luminance(Pixel::new(0, 0, 200));
        assert!(g > r && r > b);
    }
}
