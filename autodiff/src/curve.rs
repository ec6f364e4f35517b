//! Derivatives at many points, in parallel.
//!
//! Each point is an independent differentiation with no shared state,
//! so the points are spread over rayon's thread pool. Output order
//! always matches input order, and every entry is bit-identical to
//! what a sequential call would produce.
//!
//! ```
//! use autodiff::{sample, Dual, Grid};
//!
//! let grid = Grid::new(0.0, 2.0, 5)?;
//! let curve = sample(|x: Dual<f64>| x * x, &grid);
//!
//! let slopes: Vec<f64> = curve.iter().map(|p| p.derivative).collect();
//! assert_eq!(slopes, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
//! # Ok::<(), autodiff::Error>(())
//! ```

use crate::error::{Error, Result};
use crate::forward::{derivative, value_and_derivative};
use dual_algebra::Dual;
use log::{debug, trace};
use num_traits::One;
use rayon::prelude::*;

/// Evenly spaced sample points over `[start, end]`, both ends included.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    start: f64,
    end: f64,
    points: usize,
}

impl Grid {
    /// Build a grid of `points` abscissae from `start` to `end`.
    ///
    /// # Errors
    ///
    /// - [`Error::TooFewPoints`] if `points < 2`
    /// - [`Error::NonFiniteBound`] if either bound is infinite or NaN
    /// - [`Error::EmptyInterval`] if `start >= end`
    /// - [`Error::SpanOverflow`] if `end - start` is not representable
    pub fn new(start: f64, end: f64, points: usize) -> Result<Self> {
        if points < 2 {
            return Err(Error::TooFewPoints(points));
        }
        if !start.is_finite() || !end.is_finite() {
            return Err(Error::NonFiniteBound { start, end });
        }
        if start >= end {
            return Err(Error::EmptyInterval { start, end });
        }
        if !(end - start).is_finite() {
            return Err(Error::SpanOverflow { start, end });
        }
        Ok(Grid { start, end, points })
    }

    /// First abscissa.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Last abscissa.
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Number of abscissae.
    pub fn points(&self) -> usize {
        self.points
    }

    /// Spacing between neighbouring abscissae.
    pub fn step(&self) -> f64 {
        (self.end - self.start) / (self.points - 1) as f64
    }

    /// The abscissae in increasing order. The last one is exactly `end`.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = f64> {
        let Grid { start, end, points } = *self;
        let step = self.step();
        (0..points).map(move |i| {
            if i + 1 == points {
                end
            } else {
                start + i as f64 * step
            }
        })
    }
}

/// One sample of a function and its derivative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint<S> {
    /// Where `f` was evaluated.
    pub x: S,
    /// `f(x)`
    pub value: S,
    /// `f′(x)`
    pub derivative: S,
}

/// `f′` at each of `points`, computed in parallel.
///
/// ```
/// use autodiff::{derivative_curve, Dual};
///
/// let slopes = derivative_curve(|x: Dual<f64>| x * x * x, &[1.0, 2.0, 3.0]);
/// assert_eq!(slopes, vec![3.0, 12.0, 27.0]);
/// ```
pub fn derivative_curve<S, F>(f: F, points: &[S]) -> Vec<S>
where
    S: One + Clone + Send + Sync,
    F: Fn(Dual<S>) -> Dual<S> + Sync,
{
    debug!("differentiating at {} points", points.len());
    points
        .par_iter()
        .map(|x| derivative(&f, x.clone()))
        .collect()
}

/// `f` and `f′` over a grid, computed in parallel.
pub fn sample<F>(f: F, grid: &Grid) -> Vec<CurvePoint<f64>>
where
    F: Fn(Dual<f64>) -> Dual<f64> + Sync,
{
    debug!(
        "sampling {} points over [{}, {}]",
        grid.points(),
        grid.start(),
        grid.end()
    );
    let xs: Vec<f64> = grid.iter().collect();
    xs.into_par_iter()
        .map(|x| {
            let (value, derivative) = value_and_derivative(&f, x);
            trace!("f({x}) = {value}, f'({x}) = {derivative}");
            CurvePoint {
                x,
                value,
                derivative,
            }
        })
        .collect()
}
