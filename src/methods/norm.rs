//! Vector helpers shared by the integrators.

use crate::Float;

/// Largest component of |a - b| / scale.
///
/// Unlike `Float::max`, a NaN component makes the whole result NaN so that a
/// diverged step can never look accurate.
pub(crate) fn max_abs_diff(a: &[Float], b: &[Float], scale: Float) -> Float {
    a.iter().zip(b).fold(0.0, |acc: Float, (ai, bi)| {
        let e = ((ai - bi) / scale).abs();
        if e.is_nan() || e > acc { e } else { acc }
    })
}

/// Whether every component is finite.
pub(crate) fn all_finite(v: &[Float]) -> bool {
    v.iter().all(|x| x.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_largest_scaled_component() {
        let a = [1.0, 2.0, 3.0];
        let b = [1.5, 2.0, 1.0];
        assert_eq!(max_abs_diff(&a, &b, 0.5), 4.0);
    }

    #[test]
    fn identical_vectors_give_zero() {
        let a = [0.25, -3.0];
        assert_eq!(max_abs_diff(&a, &a, 0.1), 0.0);
    }

    #[test]
    fn nan_propagates_regardless_of_position() {
        let b = [0.0, 0.0, 0.0];
        assert!(max_abs_diff(&[Float::NAN, 5.0, 1.0], &b, 1.0).is_nan());
        assert!(max_abs_diff(&[5.0, Float::NAN, 1.0], &b, 1.0).is_nan());
        assert!(max_abs_diff(&[5.0, 1.0, Float::NAN], &b, 1.0).is_nan());
    }

    #[test]
    fn infinity_dominates() {
        let r = max_abs_diff(&[Float::INFINITY, 1.0], &[0.0, 0.0], 1.0);
        assert_eq!(r, Float::INFINITY);
    }

    #[test]
    fn finiteness_check() {
        assert!(all_finite(&[1.0, -2.0]));
        assert!(!all_finite(&[1.0, Float::INFINITY]));
        assert!(!all_finite(&[Float::NAN]));
    }
}
