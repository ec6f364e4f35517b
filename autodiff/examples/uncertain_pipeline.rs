//! Differentiating a model whose inputs carry measurement error.
//!
//! The model is written once over any field-like scalar. Evaluated on
//! `Dual<Measurement<f64>>`, one pass yields the value, its propagated
//! uncertainty, and the sensitivity to the input, itself with an
//! uncertainty.
//!
//! Run with: `RUST_LOG=debug cargo run --example uncertain_pipeline`

use autodiff::{derivative, derivative_curve, value_and_derivative, Dual, FieldOps};
use log::info;
use uncertain::Measurement;

const DRAG: f64 = 0.2;

/// Drag-like response r(v) = v² / (1 + k·v).
fn response<S: FieldOps>(v: S, one: S, k: S) -> S {
    v.clone() * v.clone() / (one + k * v)
}

fn lifted(x: Dual<Measurement<f64>>) -> Dual<Measurement<f64>> {
    let c = |v: f64| Dual::constant(Measurement::exact(v));
    response(x, c(1.0), c(DRAG))
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let v = Measurement::with_std_dev(12.0, 0.5)?;
    info!("input v = {v}");

    let (value, slope) = value_and_derivative(lifted, v);
    info!("r(v)  = {value}");
    info!("r'(v) = {slope}");

    let plain = derivative(
        |x: Dual<f64>| response(x, Dual::constant(1.0), Dual::constant(DRAG)),
        12.0,
    );
    info!("r'(12) on plain reals = {plain}");
    anyhow::ensure!(
        slope.value() == plain,
        "central values diverged: {} vs {plain}",
        slope.value()
    );

    let speeds: Vec<Measurement<f64>> = (1..=5)
        .map(|i| Measurement::with_std_dev(i as f64 * 4.0, 0.25))
        .collect::<Result<_, _>>()?;
    let slopes = derivative_curve(lifted, &speeds);
    for (speed, slope) in speeds.iter().zip(&slopes) {
        info!("v = {speed}  r'(v) = {slope}");
    }

    Ok(())
}
