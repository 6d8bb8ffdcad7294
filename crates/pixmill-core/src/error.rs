//! Error type shared by every transform.

use thiserror::Error;

/// Errors that can occur while validating or applying a transform.
///
/// Every variant is reported before the target grid is touched, so a failed
/// call always leaves its input exactly as it was.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransformError {
    /// An overlay (or other paired image) does not share the working geometry.
    #[error(
        "Dimension mismatch: expected {expected_width}x{expected_height}, got {actual_width}x{actual_height}"
    )]
    DimensionMismatch {
        expected_width: u32,
        expected_height: u32,
        actual_width: u32,
        actual_height: u32,
    },

    /// A numeric parameter lies outside its legal domain.
    #[error("Parameter `{name}` out of range: {value} (expected {min} to {max})")]
    OutOfRangeParameter {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Pixel access outside the grid extent.
    #[error("Pixel ({x}, {y}) out of bounds for {width}x{height} grid")]
    IndexOutOfBounds { x: u32, y: u32, width: u32, height: u32 },

    /// An order statistic was requested over zero samples.
    #[error("Cannot compute a median of an empty sequence")]
    EmptyInput,

    /// Raw pixel buffer length doesn't match the declared dimensions.
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// The declared dimensions need more bytes than the address space holds.
    #[error("Grid of {width}x{height} pixels exceeds addressable memory")]
    GridTooLarge { width: u32, height: u32 },

    /// A pipeline contains a filter step but no overlays were supplied.
    #[error("Filter requested without halo and grain overlays")]
    MissingOverlays,
}

impl TransformError {
    /// Build a `DimensionMismatch` from two `(width, height)` pairs.
    pub(crate) fn mismatch(expected: (u32, u32), actual: (u32, u32)) -> Self {
        TransformError::DimensionMismatch {
            expected_width: expected.0,
            expected_height: expected.1,
            actual_width: actual.0,
            actual_height: actual.1,
        }
    }
}

/// Check that `value` lies in `[min, max]`, or in `[min, max)` when
/// `max_exclusive` is set. NaN is always rejected.
pub(crate) fn check_range(
    name: &'static str,
    value: f64,
    min: f64,
    max: f64,
    max_exclusive: bool,
) -> Result<(), TransformError> {
    let below_max = if max_exclusive { value < max } else { value <= max };
    if value >= min && below_max {
        Ok(())
    } else {
        tracing::warn!(parameter = name, value, min, max, "Rejected out-of-range parameter");
        Err(TransformError::OutOfRangeParameter {
            name,
            value,
            min,
            max,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_range_inclusive() {
        assert!(check_range("saturation", 0.0, 0.0, 1.0, false).is_ok());
        assert!(check_range("saturation", 1.0, 0.0, 1.0, false).is_ok());
        assert!(check_range("saturation", 1.0001, 0.0, 1.0, false).is_err());
        assert!(check_range("saturation", -0.0001, 0.0, 1.0, false).is_err());
    }

    #[test]
    fn test_check_range_exclusive_upper() {
        assert!(check_range("hue", 359.99, 0.0, 360.0, true).is_ok());
        assert!(check_range("hue", 360.0, 0.0, 360.0, true).is_err());
    }

    #[test]
    fn test_check_range_rejects_nan() {
        let err = check_range("lightness", f64::NAN, 0.0, 1.0, false).unwrap_err();
        assert!(matches!(
            err,
            TransformError::OutOfRangeParameter { name: "lightness", .. }
        ));
    }

    #[test]
    fn test_error_display() {
        let err = TransformError::mismatch((4, 3), (3, 4));
        assert_eq!(err.to_string(), "Dimension mismatch: expected 4x3, got 3x4");

        let err = TransformError::IndexOutOfBounds {
            x: 5,
            y: 0,
            width: 5,
            height: 5,
        };
        assert_eq!(err.to_string(), "Pixel (5, 0) out of bounds for 5x5 grid");

        let err = TransformError::OutOfRangeParameter {
            name: "hue",
            value: 361.0,
            min: 0.0,
            max: 360.0,
        };
        assert_eq!(
            err.to_string(),
            "Parameter `hue` out of range: 361 (expected 0 to 360)"
        );

        let err = TransformError::GridTooLarge {
            width: 70000,
            height: 70000,
        };
        assert_eq!(
            err.to_string(),
            "Grid of 70000x70000 pixels exceeds addressable memory"
        );
    }
}
