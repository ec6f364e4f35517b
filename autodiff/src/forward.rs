//! The forward-mode differentiator.
//!
//! Differentiating `f` at `x` takes a single evaluation: seed a dual
//! number `x + 1·ε`, run `f` on it, and read the tangent of the result.
//!
//! `f` is written generically over its scalar and handed over already
//! instantiated at `Dual<S>`:
//!
//! ```
//! use autodiff::{derivative, RingOps};
//!
//! fn f<S: RingOps>(x: S) -> S {
//!     x.clone() * x.clone() * x
//! }
//!
//! assert_eq!(f(2.0), 8.0);
//! assert_eq!(derivative(f, 2.0), 12.0);  // 3x²
//! ```
//!
//! Nothing here validates or catches anything. Whatever `f` or the
//! scalar's own arithmetic does (NaN, infinity, a panic on integer
//! division by zero) reaches the caller unchanged.

use dual_algebra::Dual;
use num_traits::One;

/// `f′(x)`, seeding the tangent with a caller-supplied unit.
///
/// Use this when `S` has no context-free `one()`.
///
/// # Example
///
/// ```
/// use autodiff::derivative_with_seed;
///
/// let d = derivative_with_seed(|x| x * x, 3_i64, 1);
/// assert_eq!(d, 6);
/// ```
pub fn derivative_with_seed<S, F>(f: F, x: S, one: S) -> S
where
    F: FnOnce(Dual<S>) -> Dual<S>,
{
    f(Dual::seed(x, one)).tangent
}

/// `f′(x)` for a scalar with a multiplicative identity.
///
/// # Example
///
/// ```
/// use autodiff::{derivative, Dual};
///
/// // f(x) = x² + 2x, f′(2) = 6
/// let d = derivative(|x: Dual<f64>| x * x + 2.0 * x, 2.0);
/// assert_eq!(d, 6.0);
/// ```
pub fn derivative<S, F>(f: F, x: S) -> S
where
    S: One,
    F: FnOnce(Dual<S>) -> Dual<S>,
{
    derivative_with_seed(f, x, S::one())
}

/// `(f(x), f′(x))` from one evaluation, with a caller-supplied unit.
pub fn value_and_derivative_with_seed<S, F>(f: F, x: S, one: S) -> (S, S)
where
    F: FnOnce(Dual<S>) -> Dual<S>,
{
    let result = f(Dual::seed(x, one));
    (result.primal, result.tangent)
}

/// `(f(x), f′(x))` from one evaluation.
///
/// # Example
///
/// ```
/// use autodiff::{value_and_derivative, Dual, Transcendental};
///
/// let (value, slope) = value_and_derivative(|x: Dual<f64>| x.sin(), 0.0);
/// assert_eq!(value, 0.0);
/// assert_eq!(slope, 1.0);
/// ```
pub fn value_and_derivative<S, F>(f: F, x: S) -> (S, S)
where
    S: One,
    F: FnOnce(Dual<S>) -> Dual<S>,
{
    value_and_derivative_with_seed(f, x, S::one())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dual_algebra::{FieldOps, RingOps, Transcendental};

    fn cube<S: RingOps>(x: S) -> S {
        x.clone() * x.clone() * x
    }

    fn identity<S>(x: S) -> S {
        x
    }

    fn square_plus_twice<S: RingOps>(x: S) -> S {
        x.clone() * x.clone() + x.clone() + x
    }

    #[test]
    fn power_rule_examples() {
        assert_eq!(derivative(cube, 2.0), 12.0);
        assert_eq!(derivative(identity, 2.0), 1.0);
        assert_eq!(derivative(square_plus_twice, 2.0), 6.0);
    }

    #[test]
    fn constant_function_has_zero_derivative() {
        assert_eq!(derivative(|_| Dual::constant(7.0), 2.0), 0.0);
    }

    #[test]
    fn works_over_integers() {
        assert_eq!(derivative(cube, 3_i32), 27);
        assert_eq!(derivative_with_seed(square_plus_twice, 5_i64, 1), 12);
    }

    #[test]
    fn seed_scales_the_result() {
        // A seed of 2 computes 2·f′(x).
        assert_eq!(derivative_with_seed(cube, 2.0, 2.0), 24.0);
    }

    #[test]
    fn value_and_derivative_share_one_pass() {
        assert_eq!(value_and_derivative(cube, 2.0), (8.0, 12.0));
        assert_eq!(value_and_derivative_with_seed(cube, 2, 1), (8, 12));
    }

    #[test]
    fn differentiates_through_division_and_transcendentals() {
        fn f<S: FieldOps + Transcendental>(x: S) -> S {
            x.clone().exp() / x
        }
        // d/dx eˣ/x = eˣ(x - 1)/x², which vanishes at x=1
        let d: f64 = derivative(f, 1.0);
        assert!(d.abs() < 1e-15);
    }

    #[test]
    fn float_division_by_zero_passes_through() {
        let d = derivative(|x: Dual<f64>| Dual::constant(1.0) / x, 0.0);
        assert!(!d.is_finite());

        let d = derivative(|x: Dual<f64>| x.recip(), 0.0);
        assert_eq!(d, f64::NEG_INFINITY);
    }

    #[test]
    #[should_panic(expected = "divide by zero")]
    fn integer_division_by_zero_panics_through() {
        derivative(|x: Dual<i32>| Dual::constant(1) / x, 0);
    }

    #[test]
    fn abs_kink_reports_right_derivative() {
        assert_eq!(derivative(|x: Dual<f64>| x.abs(), 0.0), 1.0);
        assert_eq!(derivative(|x: Dual<f64>| x.abs(), -1.0), -1.0);
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let f = |x: Dual<f64>| (x * x + 0.1).sqrt().ln() * x.sin();
        let first = derivative(f, 0.7);
        let second = derivative(f, 0.7);
        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn nested_duals_give_second_derivatives() {
        // Not a supported feature, only a check that nesting composes.
        let inner = |x: Dual<f64>| derivative(cube, x);
        assert_eq!(derivative(inner, 2.0), 12.0); // 6x
    }
}
