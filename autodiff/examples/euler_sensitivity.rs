//! Parameter sensitivity of an ODE solution.
//!
//! A small explicit-Euler integrator knows nothing about derivatives:
//! it is generic over its scalar and treats the right-hand side as an
//! opaque callable. Running it on dual numbers seeded in the decay rate
//! yields `∂y(T)/∂k` alongside `y(T)`.
//!
//! Run with: `cargo run --example euler_sensitivity`

use autodiff::{value_and_derivative, Dual, FieldOps};
use log::info;

/// Integrate `y′ = rhs(y)` from `y0` with `steps` Euler steps of size `h`.
fn euler<S, F>(rhs: F, y0: S, h: S, steps: usize) -> S
where
    S: FieldOps,
    F: Fn(S) -> S,
{
    (0..steps).fold(y0, |y, _| y.clone() + h.clone() * rhs(y))
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let (y0, h, steps) = (2.0_f64, 0.01_f64, 100_usize);
    let k = 0.7_f64;

    // y′ = -k·y, differentiated with respect to k
    let (y_end, dy_dk) = value_and_derivative(
        |k: Dual<f64>| {
            euler(
                |y| -(k * y),
                Dual::constant(y0),
                Dual::constant(h),
                steps,
            )
        },
        k,
    );

    // Closed form of the Euler recurrence: y_N = y0·(1 - hk)^N
    let n = steps as i32;
    let expected = -(n as f64) * h * y0 * (1.0 - h * k).powi(n - 1);

    info!("y(T)       = {y_end:.10}");
    info!("dy(T)/dk   = {dy_dk:.10}");
    info!("closed form  {expected:.10}");
    let t = h * steps as f64;
    info!("exact ODE    {:.10}", -t * y0 * (-k * t).exp());
}
