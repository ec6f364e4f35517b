#![deny(missing_docs)]
//! # dual-algebra — dual numbers over any ring-like scalar
//!
//! This crate provides the algebra behind forward-mode automatic
//! differentiation:
//!
//! - [`Dual`]: a primal value paired with a tangent, with arithmetic
//!   that applies the chain rule one operation at a time
//! - [`RingOps`]: the capability set a scalar needs (`+`, `*`, `Clone`)
//! - [`FieldOps`]: `RingOps` plus subtraction, negation, and division
//! - [`Transcendental`]: `exp`, `ln`, `sin`, `cos`, `sqrt`
//!
//! ## Quick start
//!
//! Write the function once, generic over the scalar:
//!
//! ```rust
//! use dual_algebra::{Dual, RingOps};
//!
//! fn cube_plus<S: RingOps>(x: S) -> S {
//!     x.clone() * x.clone() * x.clone() + x
//! }
//!
//! // Plain evaluation
//! assert_eq!(cube_plus(2.0), 10.0);
//!
//! // Same code, now carrying a derivative: d/dx(x³ + x) = 3x² + 1
//! let y = cube_plus(Dual::variable(2.0));
//! assert_eq!(y.primal, 10.0);
//! assert_eq!(y.tangent, 13.0);
//! ```
//!
//! ## Extending to new scalars
//!
//! Nothing in [`Dual`] names a concrete numeric type. A scalar that
//! implements `Add`, `Mul`, and `Clone` is a [`RingOps`] automatically
//! and can sit inside a `Dual`, whatever else it tracks on the side.
//! Implement [`Transcendental`] as well to unlock the elementary
//! functions on `Dual<YourScalar>`.

use std::ops::{Add, Div, Mul, Neg, Sub};

pub mod dual;

pub use dual::Dual;

/// The scalar capability set `{+, *}`.
///
/// Laws (not enforced by type system):
///
/// - **Additive associativity and commutativity**:
///   `(a + b) + c == a + (b + c)`, `a + b == b + a`
/// - **Multiplicative associativity and commutativity**:
///   `(a * b) * c == a * (b * c)`, `a * b == b * a`
/// - **Distributivity**: `a * (b + c) == a * b + a * c`
///
/// Floating-point types satisfy these only up to rounding.
///
/// Blanket-implemented: any `Clone` type with `Add` and `Mul` returning
/// `Self` qualifies, including [`Dual`] over such a type.
///
/// # Example
///
/// ```rust
/// use dual_algebra::{Dual, RingOps};
///
/// fn square<S: RingOps>(x: S) -> S {
///     x.clone() * x
/// }
///
/// assert_eq!(square(3_i64), 9);
/// assert_eq!(square(Dual::variable(3.0)).tangent, 6.0);
/// ```
pub trait RingOps: Clone + Add<Output = Self> + Mul<Output = Self> {}

impl<T> RingOps for T where T: Clone + Add<Output = T> + Mul<Output = T> {}

/// [`RingOps`] extended with subtraction, negation, and division.
///
/// Division by zero is whatever the implementing type does; no law
/// is claimed for it.
///
/// # Example
///
/// ```rust
/// use dual_algebra::{Dual, FieldOps};
///
/// fn mobius<S: FieldOps>(x: S, one: S) -> S {
///     (x.clone() - one.clone()) / (x + one)
/// }
///
/// // d/dx (x-1)/(x+1) = 2/(x+1)², which is 0.5 at x=1
/// let y = mobius(Dual::variable(1.0), Dual::constant(1.0));
/// assert_eq!(y.primal, 0.0);
/// assert_eq!(y.tangent, 0.5);
/// ```
pub trait FieldOps:
    RingOps + Sub<Output = Self> + Neg<Output = Self> + Div<Output = Self>
{
}

impl<T> FieldOps for T where
    T: RingOps + Sub<Output = T> + Neg<Output = T> + Div<Output = T>
{
}

/// Elementary functions on a scalar.
///
/// Implemented here for `f32`, `f64`, and [`Dual`] (whose
/// implementation applies the chain rule over the inner scalar's
/// functions). Other scalar types implement it themselves.
///
/// # Example
///
/// ```rust
/// use dual_algebra::{Dual, RingOps, Transcendental};
///
/// fn softplus<S: Transcendental + RingOps>(x: S, one: S) -> S {
///     (x.exp() + one).ln()
/// }
///
/// // d/dx ln(1 + eˣ) = eˣ/(1 + eˣ), which is 0.5 at x=0
/// let y = softplus(Dual::variable(0.0), Dual::constant(1.0));
/// assert_eq!(y.tangent, 0.5);
/// ```
pub trait Transcendental: Sized {
    /// `eˣ`
    fn exp(self) -> Self;
    /// Natural logarithm.
    fn ln(self) -> Self;
    /// Sine (radians).
    fn sin(self) -> Self;
    /// Cosine (radians).
    fn cos(self) -> Self;
    /// Square root.
    fn sqrt(self) -> Self;
}

macro_rules! impl_transcendental_float {
    ($($t:ty),*) => {
        $(
            impl Transcendental for $t {
                #[inline]
                fn exp(self) -> Self {
                    <$t>::exp(self)
                }

                #[inline]
                fn ln(self) -> Self {
                    <$t>::ln(self)
                }

                #[inline]
                fn sin(self) -> Self {
                    <$t>::sin(self)
                }

                #[inline]
                fn cos(self) -> Self {
                    <$t>::cos(self)
                }

                #[inline]
                fn sqrt(self) -> Self {
                    <$t>::sqrt(self)
                }
            }
        )*
    };
}

impl_transcendental_float!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    fn quadratic<S: RingOps>(x: S, c: S) -> S {
        x.clone() * x + c
    }

    fn assert_ring_ops<S: RingOps>() {}

    fn assert_field_ops<S: FieldOps>() {}

    #[test]
    fn primitives_have_ring_ops() {
        assert_ring_ops::<i32>();
        assert_ring_ops::<i64>();
        assert_ring_ops::<f64>();
        assert_field_ops::<f32>();
    }

    #[test]
    fn duals_have_ring_ops_and_nest() {
        assert_ring_ops::<Dual<f64>>();
        assert_ring_ops::<Dual<Dual<f64>>>();
        assert_field_ops::<Dual<f64>>();
        assert_field_ops::<Dual<Dual<f32>>>();
    }

    #[test]
    fn generic_code_runs_on_plain_and_dual() {
        assert_eq!(quadratic(3, 1), 10);

        let y = quadratic(Dual::variable(3.0), Dual::constant(1.0));
        assert_eq!(y, Dual::new(10.0, 6.0));
    }

    #[test]
    fn float_transcendentals_delegate() {
        assert_eq!(Transcendental::exp(0.0_f64), 1.0);
        assert_eq!(Transcendental::sqrt(9.0_f32), 3.0);
        assert_eq!(Transcendental::ln(1.0_f64), 0.0);
    }
}
