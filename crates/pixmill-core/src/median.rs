//! Upper-middle median by partition-based selection.
//!
//! The median is the element that would sit at index `n / 2` of the ascending
//! sort. For an even count that is the upper of the two central values, never
//! their average; the black/white threshold depends on this exact choice.
//!
//! Selection runs in expected linear time via `select_nth_unstable_by`, so it
//! scales to multi-megapixel sample sets where a full sort would not be needed.

use crate::error::TransformError;

/// Return the upper-middle median of `values`.
///
/// The slice is reordered in place. Values are ordered with
/// [`f64::total_cmp`], so the result is deterministic even if a NaN sneaks in.
///
/// # Errors
/// `EmptyInput` when `values` is empty.
pub fn median(values: &mut [f64]) -> Result<f64, TransformError> {
    if values.is_empty() {
        return Err(TransformError::EmptyInput);
    }
    Ok(upper_middle(values))
}

/// Upper-middle median of a slice the caller has already checked is non-empty.
///
/// # Panics
/// If `values` is empty.
pub(crate) fn upper_middle(values: &mut [f64]) -> f64 {
    let mid = values.len() / 2;
    let (_, nth, _) = values.select_nth_unstable_by(mid, f64::total_cmp);
    *nth
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_fails() {
        let mut values: Vec<f64> = vec![];
        assert_eq!(median(&mut values), Err(TransformError::EmptyInput));
    }

    #[test]
    fn test_single_value() {
        assert_eq!(median(&mut [42.0]).unwrap(), 42.0);
    }

    #[test]
    fn test_odd_count() {
        assert_eq!(median(&mut [5.0, 1.0, 3.0]).unwrap(), 3.0);
    }

    #[test]
    fn test_even_count_takes_upper_middle() {
        // Sorted: 0, 50, 100, 255 -> index 2
        assert_eq!(median(&mut [0.0, 255.0, 100.0, 50.0]).unwrap(), 100.0);
        assert_eq!(median(&mut [2.0, 1.0]).unwrap(), 2.0);
    }

    #[test]
    fn test_duplicates() {
        assert_eq!(median(&mut [7.0, 7.0, 7.0, 1.0]).unwrap(), 7.0);
        assert_eq!(median(&mut [1.0, 1.0, 9.0, 9.0]).unwrap(), 9.0);
    }

    #[test]
    fn test_upper_middle_on_non_empty() {
        assert_eq!(upper_middle(&mut [3.0, 9.0, 1.0, 4.0]), 4.0);
        assert_eq!(upper_middle(&mut [-2.5]), -2.5);
    }

    #[test]
    fn test_large_descending_input() {
        let mut values: Vec<f64> = (0..100_001).rev().map(|v| v as f64).collect();
        assert_eq!(median(&mut values).unwrap(), 50_000.0);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: selection agrees with the element at n/2 of a full sort.
        #[test]
        fn prop_matches_sorted_index(values in prop::collection::vec(0.0f64..1000.0, 1..200)) {
            let mut sorted = values.clone();
            sorted.sort_by(f64::total_cmp);
            let expected = sorted[sorted.len() / 2];

            let mut scratch = values;
            prop_assert_eq!(median(&mut scratch).unwrap(), expected);
        }
    }
}
