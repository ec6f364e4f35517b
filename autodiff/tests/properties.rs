//! Algebraic properties of the differentiator.
//!
//! Each function under test is written once, generic over the scalar,
//! and exercised as `f64`, `Dual<f64>`, and `Dual<Measurement<f64>>`.

use approx::relative_eq;
use autodiff::{derivative, derivative_curve, Dual, FieldOps, RingOps};
use num_traits::FromPrimitive;
use proptest::prelude::*;
use std::thread;
use uncertain::Measurement;

const EPSILON: f64 = 1e-9;

fn lit<S: FromPrimitive>(v: f64) -> S {
    S::from_f64(v).expect("literal representable in scalar")
}

/// f(x) = x³ - 2x + 1
fn cubic<S: FieldOps + FromPrimitive>(x: S) -> S {
    x.clone() * x.clone() * x.clone() - lit::<S>(2.0) * x + lit(1.0)
}

/// g(x) = (x² + 1) / (x + 3)
fn rational<S: FieldOps + FromPrimitive>(x: S) -> S {
    (x.clone() * x.clone() + lit(1.0)) / (x + lit(3.0))
}

/// h(x) = 0.5x² + x
fn quadratic<S: RingOps + FromPrimitive>(x: S) -> S {
    lit::<S>(0.5) * x.clone() * x.clone() + x
}

fn close(a: f64, b: f64) -> bool {
    relative_eq!(a, b, epsilon = EPSILON, max_relative = EPSILON)
}

#[test]
fn power_rule_concrete_values() {
    assert_eq!(derivative(|x: Dual<f64>| x.powi(3), 2.0), 12.0);
    assert_eq!(derivative(|x: Dual<f64>| x, 2.0), 1.0);
    assert_eq!(derivative(|x: Dual<f64>| x.powi(2) + 2.0 * x, 2.0), 6.0);
    assert_eq!(derivative(|x: Dual<f64>| x.powi(0), 2.0), 0.0);
}

proptest! {
    #[test]
    fn linearity(x in -10.0f64..10.0, a in -5.0f64..5.0, b in -5.0f64..5.0) {
        let combined = derivative(
            |d: Dual<f64>| cubic(d).scale(a) + quadratic(d).scale(b),
            x,
        );
        let separate = a * derivative(cubic, x) + b * derivative(quadratic, x);

        prop_assert!(close(combined, separate), "{} vs {}", combined, separate);
    }

    #[test]
    fn product_rule(x in -2.5f64..10.0) {
        let product = derivative(|d: Dual<f64>| cubic(d) * rational(d), x);
        let expected = cubic(x) * derivative(rational, x) + derivative(cubic, x) * rational(x);

        prop_assert!(close(product, expected), "{} vs {}", product, expected);
    }

    #[test]
    fn power_rule(x in -3.0f64..3.0, n in 0usize..12) {
        let d = derivative(|d: Dual<f64>| d.powi(n), x);
        let expected = if n == 0 { 0.0 } else { n as f64 * x.powi(n as i32 - 1) };

        prop_assert!(close(d, expected), "n={}: {} vs {}", n, d, expected);
    }

    #[test]
    fn powi_agrees_with_repeated_multiplication(x in -3.0f64..3.0, n in 1usize..12) {
        let repeated = derivative(
            |d: Dual<f64>| (1..n).fold(d, |acc, _| acc * d),
            x,
        );
        let powered = derivative(|d: Dual<f64>| d.powi(n), x);

        prop_assert!(close(repeated, powered), "{} vs {}", repeated, powered);
    }

    #[test]
    fn exact_measurements_match_plain_reals(x in -2.5f64..10.0) {
        let plain = derivative(cubic, x);
        let measured = derivative(cubic, Measurement::exact(x));
        prop_assert_eq!(measured.value().to_bits(), plain.to_bits());
        prop_assert_eq!(measured.variance(), 0.0);

        let plain = derivative(rational, x);
        let measured = derivative(rational, Measurement::exact(x));
        prop_assert_eq!(measured.value().to_bits(), plain.to_bits());
        prop_assert_eq!(measured.variance(), 0.0);
    }
}

#[test]
fn uncertain_input_keeps_central_derivative() {
    let x = Measurement::with_std_dev(1.5, 0.1).unwrap();
    let d = derivative(cubic, x);

    assert_eq!(d.value(), derivative(cubic, 1.5));
    assert!(d.variance() > 0.0);
}

#[test]
fn derivative_is_deterministic() {
    let points: [f64; 5] = [-1.25, 0.0, 0.5, 3.0, 7.75];
    for x in points {
        let runs: Vec<u64> = (0..16)
            .map(|_| derivative(rational, x).to_bits())
            .collect();
        assert!(runs.windows(2).all(|w| w[0] == w[1]), "x = {x}");
    }
}

#[test]
fn concurrent_calls_match_sequential() {
    let xs: Vec<f64> = (0..4096).map(|i| -2.0 + i as f64 * 1e-3).collect();

    let sequential: Vec<(u64, u64)> = xs
        .iter()
        .map(|&x| {
            (
                derivative(cubic, x).to_bits(),
                derivative(rational, x).to_bits(),
            )
        })
        .collect();

    let threaded: Vec<(u64, u64)> = thread::scope(|scope| {
        let handles: Vec<_> = xs
            .chunks(64)
            .map(|chunk| {
                scope.spawn(move || {
                    chunk
                        .iter()
                        .map(|&x| {
                            (
                                derivative(cubic, x).to_bits(),
                                derivative(rational, x).to_bits(),
                            )
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .flat_map(|h| h.join().expect("worker panicked"))
            .collect()
    });

    assert_eq!(threaded, sequential);

    let pooled: Vec<u64> = derivative_curve(cubic, &xs)
        .into_iter()
        .map(f64::to_bits)
        .collect();
    let expected: Vec<u64> = sequential.iter().map(|(c, _)| *c).collect();
    assert_eq!(pooled, expected);
}

#[test]
fn concurrent_measurement_curve() {
    let xs: Vec<Measurement<f64>> = (0..512)
        .map(|i| Measurement::exact(i as f64 * 0.01))
        .collect();
    let curve = derivative_curve(quadratic, &xs);

    for (x, d) in xs.iter().zip(&curve) {
        assert_eq!(d.value(), derivative(quadratic, x.value()));
    }
}
