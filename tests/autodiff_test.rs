use approx::assert_abs_diff_eq;
use dualgrad::autodiff::{differentiate, evaluate, second_derivative};
use dualgrad::{Dual, Scalar};

fn quadratic<S: Scalar>(x: S) -> S {
    x * x + S::from_constant(3) * x + S::from_constant(2)
}

// 2x⁴ − 5x³ + x − 7
fn quartic<S: Scalar>(x: S) -> S {
    let x2 = x * x;
    S::from_constant(2) * x2 * x2 - S::from_constant(5) * x2 * x + x - S::from_constant(7)
}

fn seven<S: Scalar>(_x: S) -> S {
    S::from_constant(7)
}

fn sample_points() -> impl Iterator<Item = f64> {
    (-20..=20).map(|i| i as f64 * 0.37)
}

#[test]
fn reference_example() {
    assert_eq!(differentiate(quadratic, 5.0), 13.0);
}

#[test]
fn quadratic_matches_closed_form_everywhere() {
    for x in sample_points() {
        assert_abs_diff_eq!(differentiate(quadratic, x), 2.0 * x + 3.0, epsilon = 1e-12);
    }
}

#[test]
fn quartic_matches_closed_form_everywhere() {
    for x in sample_points() {
        let expected = 8.0 * x.powi(3) - 15.0 * x.powi(2) + 1.0;
        assert_abs_diff_eq!(differentiate(quartic, x), expected, epsilon = 1e-9);
    }
}

#[test]
fn constant_function_has_zero_derivative() {
    for x in sample_points() {
        assert_eq!(differentiate(seven, x), 0.0);
    }
}

#[test]
fn identity_has_unit_derivative() {
    assert_eq!(differentiate(|x: Dual<f64>| x, -3.25), 1.0);
}

#[test]
fn evaluate_agrees_with_plain_evaluation() {
    for x in sample_points() {
        let (value, slope) = evaluate(quartic, x);
        assert_eq!(value, quartic(x));
        assert_eq!(slope, differentiate(quartic, x));
    }
}

#[test]
fn negation_and_subtraction_propagate() {
    // f = −(x·x) − x, f' = −2x − 1
    let f = |x: Dual<f64>| -(x * x) - x;
    assert_eq!(differentiate(f, 4.0), -9.0);
}

#[test]
fn abs_uses_sign_of_value() {
    let f = |x: Dual<f64>| (x - Dual::constant(1.0)).abs();
    assert_eq!(differentiate(f, 3.0), 1.0);
    assert_eq!(differentiate(f, -3.0), -1.0);
}

#[test]
fn signum_is_flat() {
    let f = |x: Dual<f64>| x.signum() * Dual::constant(10.0);
    assert_eq!(evaluate(f, -0.5), (-10.0, 0.0));
    assert_eq!(evaluate(f, 2.0), (10.0, 0.0));
}

#[test]
fn works_over_f32() {
    assert_eq!(differentiate(quadratic, 1.5_f32), 6.0_f32);
}

#[test]
fn second_derivative_of_quartic() {
    for x in sample_points() {
        let expected = 24.0 * x * x - 30.0 * x;
        assert_abs_diff_eq!(second_derivative(quartic, x), expected, epsilon = 1e-9);
    }
}
