//! Dual numbers for forward-mode automatic differentiation.
//!
//! A dual number carries a value and its derivative together, so that
//! evaluating a function on dual numbers computes the derivative as a
//! by-product of computing the value.
//!
//! # Mathematical Background
//!
//! A dual number has the form `p + t·ε` where `ε² = 0`. `p` is the
//! *primal* and `t` the *tangent*. Arithmetic follows from expanding
//! and discarding `ε²`:
//!
//! - `(a + a′·ε) + (b + b′·ε) = (a+b) + (a′+b′)·ε`
//! - `(a + a′·ε) * (b + b′·ε) = ab + (ab′ + a′b)·ε`
//! - `c · (a + a′·ε) = ca + (ca′)·ε`
//! - `-(a + a′·ε) = -a + (-a′)·ε`
//! - `1/(b + b′·ε) = (1/b) + (-b′/b²)·ε`
//!
//! The first two lines are linearity and the product rule. Every other
//! rule of differential calculus used here is a composition of them.
//!
//! # Genericity
//!
//! `Dual<T>` puts no bound on `T` at the type level. Each operation asks
//! only for the capabilities it uses: addition needs `T: Add`,
//! multiplication needs `T: Add + Mul + Clone`, and so on. Any scalar
//! with conforming `+` and `*` works, including another `Dual` or a
//! type that propagates its own auxiliary quantity.
//!
//! # Example
//!
//! ```
//! use dual_algebra::Dual;
//!
//! // f(x) = x² + 2x at x=3
//! let x = Dual::variable(3.0_f64);
//!
//! let f = x * x + 2.0 * x;
//!
//! assert_eq!(f.primal, 15.0);   // f(3) = 9 + 6 = 15
//! assert_eq!(f.tangent, 8.0);   // f'(3) = 2*3 + 2 = 8
//! ```

use crate::Transcendental;
use num_traits::{FromPrimitive, One, Zero};
use std::fmt;
use std::iter::{Product, Sum};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A dual number: a primal value and its tangent.
///
/// `Dual { primal, tangent }` represents `primal + tangent·ε` where
/// `ε² = 0`. Operations never mutate their operands.
///
/// # Examples
///
/// ## Product rule
///
/// ```
/// use dual_algebra::Dual;
///
/// let x = Dual::variable(5.0);
/// let y = x * x;  // y = x²
///
/// assert_eq!(y.primal, 25.0);
/// assert_eq!(y.tangent, 10.0);  // d/dx(x²) at x=5 is 10
/// ```
///
/// ## Chain rule through composition
///
/// ```
/// use dual_algebra::Dual;
///
/// // f(x) = (x + 1) * (x + 2)
/// let x = Dual::variable(3.0_f64);
/// let f = (x + 1.0) * (x + 2.0);
///
/// assert_eq!(f.primal, 20.0);
/// assert_eq!(f.tangent, 9.0);   // f'(x) = 2x+3
/// ```
///
/// ## Nesting
///
/// A `Dual<Dual<f64>>` is an ordinary `Dual` whose scalar happens to be
/// a dual number:
///
/// ```
/// use dual_algebra::Dual;
///
/// let x = Dual::new(Dual::variable(2.0), Dual::constant(1.0));
/// let y = x * x * x;
///
/// assert_eq!(y.primal.primal, 8.0);
/// assert_eq!(y.tangent.primal, 12.0);  // 3x²
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dual<T> {
    /// The function value.
    pub primal: T,
    /// The derivative accumulator.
    pub tangent: T,
}

impl<T> Dual<T> {
    /// Create a dual number from an explicit primal and tangent.
    ///
    /// # Example
    ///
    /// ```
    /// use dual_algebra::Dual;
    ///
    /// let d = Dual::new(3.0, 1.0);
    /// assert_eq!(d.primal, 3.0);
    /// assert_eq!(d.tangent, 1.0);
    /// ```
    pub fn new(primal: T, tangent: T) -> Self {
        Dual { primal, tangent }
    }

    /// Seed an input variable with a caller-supplied unit.
    ///
    /// Same as [`Dual::new`]; the name documents intent. Use this when
    /// `T` has no canonical `one()` independent of context.
    pub fn seed(x: T, one: T) -> Self {
        Dual::new(x, one)
    }

    /// Create a constant (tangent = 0).
    ///
    /// # Example
    ///
    /// ```
    /// use dual_algebra::Dual;
    ///
    /// let c = Dual::constant(5.0);
    /// assert_eq!(c.tangent, 0.0);
    /// ```
    pub fn constant(primal: T) -> Self
    where
        T: Zero,
    {
        Dual {
            primal,
            tangent: T::zero(),
        }
    }

    /// Create the variable being differentiated against (tangent = 1).
    ///
    /// # Example
    ///
    /// ```
    /// use dual_algebra::Dual;
    ///
    /// let x = Dual::variable(3.0);
    /// assert_eq!(x.tangent, 1.0);  // dx/dx = 1
    /// ```
    pub fn variable(primal: T) -> Self
    where
        T: One,
    {
        Dual {
            primal,
            tangent: T::one(),
        }
    }

    /// Multiply by a bare scalar: `c · (a + a′·ε) = ca + (ca′)·ε`.
    ///
    /// Equivalent to `Dual::constant(c) * self` without needing a zero.
    ///
    /// # Example
    ///
    /// ```
    /// use dual_algebra::Dual;
    ///
    /// let y = Dual::variable(4.0).scale(3.0);
    /// assert_eq!(y, Dual::new(12.0, 3.0));
    /// ```
    pub fn scale(self, c: T) -> Self
    where
        T: Mul<Output = T> + Clone,
    {
        Dual {
            primal: c.clone() * self.primal,
            tangent: c * self.tangent,
        }
    }

    /// Add a bare scalar: `(a + a′·ε) + c = (a+c) + a′·ε`.
    ///
    /// # Example
    ///
    /// ```
    /// use dual_algebra::Dual;
    ///
    /// let y = Dual::variable(4.0).shift(3.0);
    /// assert_eq!(y, Dual::new(7.0, 1.0));
    /// ```
    pub fn shift(self, c: T) -> Self
    where
        T: Add<Output = T>,
    {
        Dual {
            primal: self.primal + c,
            tangent: self.tangent,
        }
    }

    /// Reciprocal: `1/(b + b′·ε) = (1/b) + (-b′/b²)·ε`.
    ///
    /// A zero primal is not checked; the result is whatever `T`'s
    /// division produces.
    ///
    /// # Example
    ///
    /// ```
    /// use dual_algebra::Dual;
    ///
    /// let f = Dual::variable(2.0).recip();
    /// assert_eq!(f.primal, 0.5);
    /// assert_eq!(f.tangent, -0.25);  // -1/x²
    /// ```
    pub fn recip(self) -> Self
    where
        T: One + Div<Output = T> + Mul<Output = T> + Neg<Output = T> + Clone,
    {
        let b = self.primal;
        let b_squared = b.clone() * b.clone();

        Dual {
            primal: T::one() / b,
            tangent: -(self.tangent / b_squared),
        }
    }

    /// Integer power by repeated multiplication.
    ///
    /// The tangent comes out of the product rule, so it agrees with
    /// `n·xⁿ⁻¹`. `powi(0)` is the constant one.
    ///
    /// # Example
    ///
    /// ```
    /// use dual_algebra::Dual;
    ///
    /// let y = Dual::variable(2.0).powi(3);
    /// assert_eq!(y.primal, 8.0);
    /// assert_eq!(y.tangent, 12.0);
    /// ```
    pub fn powi(self, n: usize) -> Self
    where
        T: Zero + One + Clone + Add<Output = T> + Mul<Output = T>,
    {
        num_traits::pow(self, n)
    }

    /// Absolute value.
    ///
    /// At a zero primal the non-negative branch is taken, so the tangent
    /// passes through unchanged (the right derivative of `|x|`).
    ///
    /// # Example
    ///
    /// ```
    /// use dual_algebra::Dual;
    ///
    /// assert_eq!(Dual::variable(-2.0).abs(), Dual::new(2.0, -1.0));
    /// assert_eq!(Dual::variable(0.0).abs().tangent, 1.0);
    /// ```
    pub fn abs(self) -> Self
    where
        T: PartialOrd + Zero + Neg<Output = T>,
    {
        if self.primal < T::zero() {
            -self
        } else {
            self
        }
    }
}

/// Addition: (a + a′·ε) + (b + b′·ε) = (a+b) + (a′+b′)·ε
impl<T: Add<Output = T>> Add for Dual<T> {
    type Output = Dual<T>;

    fn add(self, rhs: Self) -> Self::Output {
        Dual {
            primal: self.primal + rhs.primal,
            tangent: self.tangent + rhs.tangent,
        }
    }
}

/// Subtraction: (a + a′·ε) - (b + b′·ε) = (a-b) + (a′-b′)·ε
impl<T: Sub<Output = T>> Sub for Dual<T> {
    type Output = Dual<T>;

    fn sub(self, rhs: Self) -> Self::Output {
        Dual {
            primal: self.primal - rhs.primal,
            tangent: self.tangent - rhs.tangent,
        }
    }
}

/// Multiplication: (a + a′·ε) * (b + b′·ε) = ab + (ab′ + a′b)·ε
impl<T: Mul<Output = T> + Add<Output = T> + Clone> Mul for Dual<T> {
    type Output = Dual<T>;

    fn mul(self, rhs: Self) -> Self::Output {
        Dual {
            primal: self.primal.clone() * rhs.primal.clone(),
            tangent: self.primal * rhs.tangent + self.tangent * rhs.primal,
        }
    }
}

/// Division: `f / g = f * (1/g)`.
///
/// The quotient rule falls out of the product rule composed with
/// [`Dual::recip`].
#[allow(clippy::suspicious_arithmetic_impl)]
impl<T> Div for Dual<T>
where
    T: One + Div<Output = T> + Mul<Output = T> + Add<Output = T> + Neg<Output = T> + Clone,
{
    type Output = Dual<T>;

    fn div(self, rhs: Self) -> Self::Output {
        self * rhs.recip()
    }
}

/// Negation: -(a + a′·ε) = -a + (-a′)·ε
impl<T: Neg<Output = T>> Neg for Dual<T> {
    type Output = Dual<T>;

    fn neg(self) -> Self::Output {
        Dual {
            primal: -self.primal,
            tangent: -self.tangent,
        }
    }
}

impl<T: Zero> Zero for Dual<T> {
    fn zero() -> Self {
        Dual {
            primal: T::zero(),
            tangent: T::zero(),
        }
    }

    fn is_zero(&self) -> bool {
        self.primal.is_zero() && self.tangent.is_zero()
    }
}

impl<T> One for Dual<T>
where
    T: Zero + One + Clone + Add<Output = T> + Mul<Output = T>,
{
    fn one() -> Self {
        Dual::constant(T::one())
    }
}

/// Lifts a primitive into a constant.
impl<T: FromPrimitive + Zero> FromPrimitive for Dual<T> {
    fn from_i64(n: i64) -> Option<Self> {
        T::from_i64(n).map(Dual::constant)
    }

    fn from_u64(n: u64) -> Option<Self> {
        T::from_u64(n).map(Dual::constant)
    }

    fn from_f64(n: f64) -> Option<Self> {
        T::from_f64(n).map(Dual::constant)
    }
}

impl<T: Zero> Sum for Dual<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Dual::zero(), |acc, x| acc + x)
    }
}

impl<T> Product for Dual<T>
where
    T: Zero + One + Clone + Add<Output = T> + Mul<Output = T>,
{
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Dual::one(), |acc, x| acc * x)
    }
}

impl<T: fmt::Display> fmt::Display for Dual<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}ε", self.primal, self.tangent)
    }
}

/// Elementary functions, each encoding its derivative:
///
/// - `exp(a + a′·ε) = e^a + (a′·e^a)·ε`
/// - `ln(a + a′·ε) = ln a + (a′/a)·ε`
/// - `sin(a + a′·ε) = sin a + (a′·cos a)·ε`
/// - `cos(a + a′·ε) = cos a + (-a′·sin a)·ε`
/// - `√(a + a′·ε) = √a + (a′/(2√a))·ε`
impl<T> Transcendental for Dual<T>
where
    T: Transcendental
        + Clone
        + Add<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
        + Neg<Output = T>,
{
    fn exp(self) -> Self {
        let exp_val = self.primal.exp();
        Dual {
            primal: exp_val.clone(),
            tangent: self.tangent * exp_val,
        }
    }

    fn ln(self) -> Self {
        Dual {
            primal: self.primal.clone().ln(),
            tangent: self.tangent / self.primal,
        }
    }

    fn sin(self) -> Self {
        Dual {
            primal: self.primal.clone().sin(),
            tangent: self.tangent * self.primal.cos(),
        }
    }

    fn cos(self) -> Self {
        Dual {
            primal: self.primal.clone().cos(),
            tangent: -(self.tangent * self.primal.sin()),
        }
    }

    fn sqrt(self) -> Self {
        let sqrt_val = self.primal.sqrt();
        Dual {
            primal: sqrt_val.clone(),
            tangent: self.tangent / (sqrt_val.clone() + sqrt_val),
        }
    }
}

// Mixed arithmetic with bare primitives. The orphan rule rules out a
// generic `impl<T> Mul<Dual<T>> for T`, so generic code calls `scale`
// and `shift` instead.
macro_rules! impl_primitive_ops {
    ($($t:ty),* $(,)?) => {
        $(
            impl Mul<Dual<$t>> for $t {
                type Output = Dual<$t>;

                fn mul(self, rhs: Dual<$t>) -> Dual<$t> {
                    rhs.scale(self)
                }
            }

            impl Mul<$t> for Dual<$t> {
                type Output = Dual<$t>;

                fn mul(self, rhs: $t) -> Dual<$t> {
                    self.scale(rhs)
                }
            }

            impl Add<Dual<$t>> for $t {
                type Output = Dual<$t>;

                fn add(self, rhs: Dual<$t>) -> Dual<$t> {
                    rhs.shift(self)
                }
            }

            impl Add<$t> for Dual<$t> {
                type Output = Dual<$t>;

                fn add(self, rhs: $t) -> Dual<$t> {
                    self.shift(rhs)
                }
            }

            impl Sub<$t> for Dual<$t> {
                type Output = Dual<$t>;

                fn sub(self, rhs: $t) -> Dual<$t> {
                    Dual {
                        primal: self.primal - rhs,
                        tangent: self.tangent,
                    }
                }
            }

            impl Div<$t> for Dual<$t> {
                type Output = Dual<$t>;

                fn div(self, rhs: $t) -> Dual<$t> {
                    Dual {
                        primal: self.primal / rhs,
                        tangent: self.tangent / rhs,
                    }
                }
            }
        )*
    };
}

impl_primitive_ops!(f32, f64, i32, i64);
