//! Derivatives of expressions built from exp, ln, sin, cos, and sqrt.
//!
//! Run with: `cargo run --example dual_transcendentals`

use autodiff::{value_and_derivative, Dual, Transcendental};
use std::f64::consts::PI;

fn report(label: &str, f: impl FnOnce(Dual<f64>) -> Dual<f64>, x: f64, expected: f64) {
    let (value, slope) = value_and_derivative(f, x);
    println!("{label}");
    println!("  f({x:.4}) = {value:.6}");
    println!("  f'({x:.4}) = {slope:.6} (expected: {expected:.6})");
    println!();
}

fn main() {
    println!("=== Forward-mode AD: transcendental functions ===\n");

    report("f(x) = e^x", |x| x.exp(), 0.0, 1.0);
    report("f(x) = ln(x)", |x| x.ln(), 2.0, 0.5);
    report("f(x) = sin(x)", |x| x.sin(), PI / 2.0, 0.0);
    report("f(x) = cos(x)", |x| x.cos(), PI, 0.0);
    report("f(x) = sqrt(x)", |x| x.sqrt(), 9.0, 1.0 / 6.0);

    // σ(x) = 1 / (1 + e^(-x)), σ' = σ(1 - σ)
    report(
        "sigmoid σ(x) = 1/(1 + e^(-x))",
        |x| Dual::constant(1.0_f64) / ((-x).exp() + 1.0_f64),
        0.0,
        0.25,
    );

    // Gaussian e^(-x²), derivative -2x·e^(-x²)
    let x0 = 0.5_f64;
    report(
        "gaussian f(x) = e^(-x²)",
        |x| (-(x * x)).exp(),
        x0,
        -2.0 * x0 * (-(x0 * x0)).exp(),
    );

    // ln(sin(e^x)), derivative e^x·cos(e^x)/sin(e^x)
    report(
        "f(x) = ln(sin(e^x))",
        |x| x.exp().sin().ln(),
        0.0,
        1.0_f64.cos() / 1.0_f64.sin(),
    );
}
