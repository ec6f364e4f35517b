#![deny(missing_docs)]
//! Forward-mode automatic differentiation for Rust.
//!
//! This crate computes exact first derivatives of scalar functions by
//! evaluating them on dual numbers ([`Dual`]):
//!
//! - [`derivative`] / [`derivative_with_seed`]: `f′(x)` in one pass
//! - [`value_and_derivative`]: `f(x)` and `f′(x)` together
//! - [`derivative_curve`] / [`sample`]: many points, in parallel
//!
//! # Single-variable differentiation
//!
//! Write the function once, generic over its scalar:
//!
//! ```
//! use autodiff::{derivative, Dual, RingOps};
//!
//! fn f<S: RingOps>(x: S) -> S {
//!     x.clone() * x.clone() + x
//! }
//!
//! assert_eq!(f(3.0), 12.0);             // plain evaluation
//! assert_eq!(derivative(f, 3.0), 7.0);  // f′(x) = 2x + 1
//! ```
//!
//! # Any conforming scalar
//!
//! The scalar only needs `+`, `*` and a unit to seed with. Integers
//! work, and so does a type that carries extra information of its own,
//! with no changes here:
//!
//! ```
//! use autodiff::derivative_with_seed;
//!
//! // Exact integer arithmetic, unit passed explicitly.
//! let d = derivative_with_seed(|x| x * x * x, 4_i64, 1);
//! assert_eq!(d, 48);
//! ```
//!
//! # Derivative curves
//!
//! ```
//! use autodiff::{sample, Dual, Grid, Transcendental};
//!
//! let grid = Grid::new(0.0, std::f64::consts::PI, 64)?;
//! let curve = sample(|x: Dual<f64>| x.sin(), &grid);
//!
//! assert_eq!(curve.len(), 64);
//! assert!((curve[0].derivative - 1.0).abs() < 1e-12);   // cos 0
//! assert!((curve[63].derivative + 1.0).abs() < 1e-12);  // cos π
//! # Ok::<(), autodiff::Error>(())
//! ```

pub mod curve;
pub mod error;
pub mod forward;

pub use curve::{derivative_curve, sample, CurvePoint, Grid};
pub use dual_algebra::{Dual, FieldOps, RingOps, Transcendental};
pub use error::{Error, Result};
pub use forward::{
    derivative, derivative_with_seed, value_and_derivative, value_and_derivative_with_seed,
};
