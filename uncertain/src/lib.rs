#![deny(missing_docs)]
//! # uncertain — values with propagated variance
//!
//! [`Measurement`] pairs a central value with a variance and carries
//! the variance through arithmetic by first-order error propagation:
//! for `f(a, b)`, `Var f ≈ (∂f/∂a)²·Var a + (∂f/∂b)²·Var b`.
//! Operands are treated as independent.
//!
//! A `Measurement` knows nothing about dual numbers. It implements
//! `+`, `*` and friends, so it meets [`dual_algebra::RingOps`] and can
//! be differentiated through with `Dual<Measurement<T>>` as is.
//!
//! ```rust
//! use uncertain::Measurement;
//!
//! let a = Measurement::with_std_dev(10.0, 0.3)?;
//! let b = Measurement::with_std_dev(2.0, 0.4)?;
//!
//! let sum = a + b;
//! assert_eq!(sum.value(), 12.0);
//! assert!((sum.std_dev() - 0.5_f64).abs() < 1e-12);  // √(0.09 + 0.16)
//! # Ok::<(), uncertain::Error>(())
//! ```

pub mod error;
pub mod measurement;

pub use error::{Error, Result};
pub use measurement::Measurement;
