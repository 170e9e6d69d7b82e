//! Aggregate statistics over raw numeric slices.
//!
//! The tuple operations are thin wrappers over these; they also work
//! directly on any slice of [`Element`]s.

use num_traits::{ToPrimitive, Zero};

use crate::element::Element;

/// Returns the smallest value in `vals`, or `None` if empty.
pub fn min<T: Element>(vals: &[T]) -> Option<T> {
    vals.iter().copied().min_by(|a, b| a.total_cmp(b))
}

/// Returns the largest value in `vals`, or `None` if empty.
pub fn max<T: Element>(vals: &[T]) -> Option<T> {
    vals.iter().copied().max_by(|a, b| a.total_cmp(b))
}

/// Returns the median of `vals` under the element's total ordering,
/// or `None` if empty.
///
/// For an even number of values this selects the lower-middle element of the
/// sorted sequence, index `(len - 1) / 2`; no averaging of the two middle
/// values takes place.
pub fn median<T: Element>(vals: &[T]) -> Option<T> {
    if vals.is_empty() {
        return None;
    }
    let mut sorted = vals.to_vec();
    sorted.sort_unstable_by(|a, b| a.total_cmp(b));
    Some(sorted[(sorted.len() - 1) / 2])
}

/// Sums `vals` into the element's widening accumulator.
///
/// Total: the empty slice sums to zero.
pub fn sum<T: Element>(vals: &[T]) -> T::Accum {
    vals.iter()
        .fold(T::Accum::zero(), |acc, &v| acc + v.widen())
}

/// Returns the arithmetic mean of `vals` as `f64`, or `None` if empty.
pub fn mean<T: Element>(vals: &[T]) -> Option<f64> {
    if vals.is_empty() {
        return None;
    }
    sum(vals).to_f64().map(|s| s / vals.len() as f64)
}

#[cfg(test)]
mod test {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn extrema() {
        assert_eq!(min(&[3, 1, 2]), Some(1));
        assert_eq!(max(&[3, 1, 2]), Some(3));
        assert_eq!(min::<i32>(&[]), None);
        assert_eq!(max::<i32>(&[]), None);
    }

    #[test]
    fn extrema_with_nan() {
        // NaN sorts last under totalOrder, so it wins max but never min.
        assert_eq!(min(&[f64::NAN, 2.0, 1.0]), Some(1.0));
        assert!(max(&[f64::NAN, 2.0, 1.0]).unwrap().is_nan());
    }

    #[test]
    fn median_odd_length() {
        assert_eq!(median(&[3, 1, 2]), Some(2));
        assert_eq!(median(&[5]), Some(5));
    }

    #[test]
    fn median_even_length_takes_lower_middle() {
        assert_eq!(median(&[4, 1, 3, 2]), Some(2));
        assert_eq!(median(&[10, 20]), Some(10));
    }

    #[test]
    fn median_empty() {
        assert_eq!(median::<i32>(&[]), None);
    }

    #[test]
    fn sum_widens() {
        assert_eq!(sum(&[200u8, 100, 56]), 356u64);
        assert_eq!(sum(&[i32::MAX, i32::MAX]), 2 * i32::MAX as i64);
        assert_eq!(sum::<i32>(&[]), 0);
    }

    #[test]
    fn mean_of_slice() {
        assert_relative_eq!(mean(&[3, 1, 2]).unwrap(), 2.0);
        assert_relative_eq!(mean(&[1.5f64, 2.5]).unwrap(), 2.0);
        assert_eq!(mean::<i32>(&[]), None);
    }
}
