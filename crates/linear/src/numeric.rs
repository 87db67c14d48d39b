//! Numeric checks on solved and stored vectors.
//!
//! The triangular solves themselves are nalgebra's unchecked upper-triangular
//! solvers: they divide by the diagonal without any pivot guard, so a zero or
//! vanishing pivot shows up as `inf`/`NaN` in the result. [`all_finite`] is
//! how callers turn that into an error.

use nalgebra::DVector;

/// True if no component is `inf` or `NaN`.
pub fn all_finite(v: &DVector<f64>) -> bool {
    v.iter().all(|x| x.is_finite())
}

/// Check whether `a` is a scalar multiple of `b` within `tol`.
///
/// Components must be small (`< tol`) in both vectors or large in both.
/// The scale factor is fixed by the first component that is not exactly
/// zero in both; every later component must satisfy `|aᵢ - bᵢ·scale| <= tol`.
/// Vectors of different length, and vectors with no usable component
/// (for instance two zero vectors), are not dependent.
pub fn linear_dependent(a: &DVector<f64>, b: &DVector<f64>, tol: f64) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut scale = None;
    for (&ai, &bi) in a.iter().zip(b.iter()) {
        let (big_a, big_b) = (ai.abs() > tol, bi.abs() > tol);
        let (small_a, small_b) = (ai.abs() < tol, bi.abs() < tol);
        if (big_a && small_b) || (small_a && big_b) {
            return false;
        }
        if ai == 0.0 && bi == 0.0 {
            continue;
        }
        match scale {
            None => scale = Some(ai / bi),
            Some(k) => {
                if (ai - bi * k).abs() > tol {
                    return false;
                }
            }
        }
    }
    scale.is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{dmatrix, dvector};

    #[test]
    fn test_zero_pivot_is_not_finite() {
        let r = dmatrix![1.0, 0.0; 0.0, 0.0];
        let b = dvector![1.0, 1.0];
        assert!(!all_finite(&r.solve_upper_triangular_unchecked(&b)));
        assert!(!all_finite(&r.tr_solve_upper_triangular_unchecked(&b)));

        // 0/0 is NaN, also caught
        let b = dvector![1.0, 0.0];
        assert!(!all_finite(&r.solve_upper_triangular_unchecked(&b)));
        assert!(all_finite(&dvector![1.0, -2.5]));
        assert!(all_finite(&DVector::<f64>::zeros(0)));
    }

    #[test]
    fn test_linear_dependent_scaled_and_negated() {
        let a = dvector![1.0, 2.0, 0.0, -3.0];
        assert!(linear_dependent(&a, &(&a * 2.5), 1e-9));
        assert!(linear_dependent(&a, &-&a, 1e-9));
        assert!(linear_dependent(&a, &a, 1e-9));
    }

    #[test]
    fn test_linear_dependent_rejections() {
        let a = dvector![1.0, 2.0, 3.0];
        // Not proportional
        assert!(!linear_dependent(&a, &dvector![1.0, 2.0, 4.0], 1e-9));
        // Zero pattern differs
        assert!(!linear_dependent(&a, &dvector![1.0, 0.0, 3.0], 1e-9));
        // Length differs
        assert!(!linear_dependent(&a, &dvector![1.0, 2.0], 1e-9));
        // No scale factor can be established
        assert!(!linear_dependent(&dvector![0.0, 0.0], &dvector![0.0, 0.0], 1e-9));
    }
}
