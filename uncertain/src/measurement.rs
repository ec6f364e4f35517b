//! A central value with a propagated variance.
//!
//! Propagation rules, for independent `a` and `b`:
//!
//! - `a ± b`: `Var = Var a + Var b`
//! - `a · b`: `Var = b²·Var a + a²·Var b`
//! - `a / b`: `Var = (Var a + q²·Var b) / b²` where `q = a/b`
//! - `-a`: unchanged
//! - `f(a)` for an elementary `f`: `Var = f′(a)²·Var a`
//!
//! Central values are computed with exactly the operations the bare
//! scalar would use, so a measurement with zero variance tracks the
//! plain computation bit for bit.

use crate::error::{Error, Result};
use dual_algebra::Transcendental;
use num_traits::{Float, FromPrimitive, One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A value `T` with variance `T`.
///
/// The variance is non-negative for every measurement built through
/// the checked constructors, and stays so under the propagation rules.
///
/// # Examples
///
/// ```
/// use uncertain::Measurement;
///
/// let x = Measurement::with_variance(3.0, 0.04)?;
/// let y = x * Measurement::exact(2.0);
///
/// assert_eq!(y.value(), 6.0);
/// assert!((y.variance() - 0.16_f64).abs() < 1e-12);  // 2²·0.04
/// # Ok::<(), uncertain::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement<T> {
    value: T,
    variance: T,
}

impl<T> Measurement<T> {
    /// A value known without error.
    ///
    /// ```
    /// use uncertain::Measurement;
    ///
    /// let c = Measurement::exact(5.0);
    /// assert_eq!(c.variance(), 0.0);
    /// ```
    pub fn exact(value: T) -> Self
    where
        T: Zero,
    {
        Measurement {
            value,
            variance: T::zero(),
        }
    }

    /// A value with the given variance.
    ///
    /// # Errors
    ///
    /// [`Error::NotANumber`] for a NaN variance,
    /// [`Error::NegativeVariance`] for a negative one.
    ///
    /// ```
    /// use uncertain::{Error, Measurement};
    ///
    /// assert!(Measurement::with_variance(1.0, 0.5).is_ok());
    /// assert_eq!(
    ///     Measurement::with_variance(1.0, -0.5),
    ///     Err(Error::NegativeVariance(-0.5)),
    /// );
    /// ```
    pub fn with_variance(value: T, variance: T) -> Result<Self>
    where
        T: Float,
    {
        if variance.is_nan() {
            return Err(Error::NotANumber);
        }
        if variance < T::zero() {
            return Err(Error::NegativeVariance(
                variance.to_f64().unwrap_or(f64::NEG_INFINITY),
            ));
        }
        Ok(Measurement { value, variance })
    }

    /// A value with the given standard deviation.
    ///
    /// # Errors
    ///
    /// [`Error::NotANumber`] for a NaN deviation,
    /// [`Error::NegativeStdDev`] for a negative one.
    ///
    /// ```
    /// use uncertain::Measurement;
    ///
    /// let x = Measurement::with_std_dev(1.0, 0.5)?;
    /// assert_eq!(x.variance(), 0.25);
    /// # Ok::<(), uncertain::Error>(())
    /// ```
    pub fn with_std_dev(value: T, std_dev: T) -> Result<Self>
    where
        T: Float,
    {
        if std_dev.is_nan() {
            return Err(Error::NotANumber);
        }
        if std_dev < T::zero() {
            return Err(Error::NegativeStdDev(
                std_dev.to_f64().unwrap_or(f64::NEG_INFINITY),
            ));
        }
        Ok(Measurement {
            value,
            variance: std_dev * std_dev,
        })
    }

    /// The central value.
    pub fn value(&self) -> T
    where
        T: Clone,
    {
        self.value.clone()
    }

    /// The variance.
    pub fn variance(&self) -> T
    where
        T: Clone,
    {
        self.variance.clone()
    }

    /// The standard deviation, `√variance`.
    pub fn std_dev(&self) -> T
    where
        T: Float,
    {
        self.variance.sqrt()
    }

    /// `σ / |value|`. Infinite for a zero value with non-zero variance.
    ///
    /// ```
    /// use uncertain::Measurement;
    ///
    /// let x = Measurement::with_std_dev(-4.0, 0.2)?;
    /// assert!((x.relative_uncertainty() - 0.05_f64).abs() < 1e-12);
    /// # Ok::<(), uncertain::Error>(())
    /// ```
    pub fn relative_uncertainty(&self) -> T
    where
        T: Float,
    {
        self.std_dev() / self.value.abs()
    }

    /// Split into `(value, variance)`.
    pub fn into_parts(self) -> (T, T) {
        (self.value, self.variance)
    }

    /// Reciprocal: `1/a` with `Var = Var a / a⁴`.
    pub fn recip(self) -> Self
    where
        T: One + Div<Output = T> + Mul<Output = T> + Clone,
    {
        let r = T::one() / self.value;
        let r_squared = r.clone() * r.clone();
        Measurement {
            value: r,
            variance: self.variance * r_squared.clone() * r_squared,
        }
    }

    /// Scale the variance by `slope²`; the value is replaced.
    fn propagate(value: T, variance: T, slope: T) -> Self
    where
        T: Mul<Output = T> + Clone,
    {
        Measurement {
            value,
            variance: variance * slope.clone() * slope,
        }
    }
}

impl<T: Add<Output = T>> Add for Measurement<T> {
    type Output = Measurement<T>;

    fn add(self, rhs: Self) -> Self::Output {
        Measurement {
            value: self.value + rhs.value,
            variance: self.variance + rhs.variance,
        }
    }
}

impl<T: Add<Output = T> + Sub<Output = T>> Sub for Measurement<T> {
    type Output = Measurement<T>;

    fn sub(self, rhs: Self) -> Self::Output {
        Measurement {
            value: self.value - rhs.value,
            variance: self.variance + rhs.variance,
        }
    }
}

impl<T: Add<Output = T> + Mul<Output = T> + Clone> Mul for Measurement<T> {
    type Output = Measurement<T>;

    fn mul(self, rhs: Self) -> Self::Output {
        let a = self.value;
        let b = rhs.value;
        Measurement {
            value: a.clone() * b.clone(),
            variance: b.clone() * b * self.variance + a.clone() * a * rhs.variance,
        }
    }
}

impl<T> Div for Measurement<T>
where
    T: Add<Output = T> + Mul<Output = T> + Div<Output = T> + Clone,
{
    type Output = Measurement<T>;

    fn div(self, rhs: Self) -> Self::Output {
        let b = rhs.value;
        let q = self.value / b.clone();
        let numerator = self.variance + q.clone() * q.clone() * rhs.variance;
        Measurement {
            value: q,
            variance: numerator / (b.clone() * b),
        }
    }
}

impl<T: Neg<Output = T>> Neg for Measurement<T> {
    type Output = Measurement<T>;

    fn neg(self) -> Self::Output {
        Measurement {
            value: -self.value,
            variance: self.variance,
        }
    }
}

impl<T: Zero> Zero for Measurement<T> {
    fn zero() -> Self {
        Measurement::exact(T::zero())
    }

    fn is_zero(&self) -> bool {
        self.value.is_zero() && self.variance.is_zero()
    }
}

impl<T> One for Measurement<T>
where
    T: Zero + One + Add<Output = T> + Mul<Output = T> + Clone,
{
    fn one() -> Self {
        Measurement::exact(T::one())
    }
}

impl<T: FromPrimitive + Zero> FromPrimitive for Measurement<T> {
    fn from_i64(n: i64) -> Option<Self> {
        T::from_i64(n).map(Measurement::exact)
    }

    fn from_u64(n: u64) -> Option<Self> {
        T::from_u64(n).map(Measurement::exact)
    }

    fn from_f64(n: f64) -> Option<Self> {
        T::from_f64(n).map(Measurement::exact)
    }
}

impl<T> Transcendental for Measurement<T>
where
    T: Transcendental + Add<Output = T> + Mul<Output = T> + Div<Output = T> + One + Clone,
{
    fn exp(self) -> Self {
        let e = self.value.exp();
        Measurement::propagate(e.clone(), self.variance, e)
    }

    fn ln(self) -> Self {
        let slope = T::one() / self.value.clone();
        Measurement::propagate(self.value.ln(), self.variance, slope)
    }

    fn sin(self) -> Self {
        let slope = self.value.clone().cos();
        Measurement::propagate(self.value.sin(), self.variance, slope)
    }

    fn cos(self) -> Self {
        // The sign of -sin(a) vanishes once squared.
        let slope = self.value.clone().sin();
        Measurement::propagate(self.value.cos(), self.variance, slope)
    }

    fn sqrt(self) -> Self {
        let root = self.value.sqrt();
        let slope = T::one() / (root.clone() + root.clone());
        Measurement::propagate(root, self.variance, slope)
    }
}

impl<T: Float + fmt::Display> fmt::Display for Measurement<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ± {}", self.value, self.std_dev())
    }
}
