mod common;

use common::{check_unary, generate, PI};
use fad::math::*;
use fad::Scalar;

// ── Arithmetic with constants ──

#[test]
fn negate() {
    check_unary(|x| -x, |x| Scalar::from(-x), &generate(-10.0, 10.0, 100));
}

#[test]
fn add_constant() {
    let xs = generate(-10.0, 10.0, 100);
    check_unary(|x| x + 1.5, |x| Scalar::from(x + 1.5), &xs);
    check_unary(|x| 1.5 + x, |x| Scalar::from(1.5 + x), &xs);
}

#[test]
fn subtract_constant() {
    let xs = generate(-10.0, 10.0, 100);
    check_unary(|x| x - 1.5, |x| Scalar::from(x - 1.5), &xs);
    check_unary(|x| 1.5 - x, |x| Scalar::from(1.5 - x), &xs);
}

#[test]
fn multiply_constant() {
    let xs = generate(-10.0, 10.0, 100);
    check_unary(|x| x * 2.5, |x| Scalar::from(x * 2.5), &xs);
    check_unary(|x| 2.5 * x, |x| Scalar::from(2.5 * x), &xs);
}

#[test]
fn divide_by_constant() {
    check_unary(|x| x / 2.5, |x| Scalar::from(x / 2.5), &generate(-10.0, 10.0, 100));
}

#[test]
fn divide_constant() {
    check_unary(|x| 2.5 / x, |x| Scalar::from(2.5 / x), &generate(0.5, 10.0, 100));
    check_unary(|x| 2.5 / x, |x| Scalar::from(2.5 / x), &generate(-10.0, -0.5, 100));
}

// ── Powers ──

#[test]
fn square() {
    check_unary(|x| x * x, |x| Scalar::from(sqr(x)), &generate(-10.0, 10.0, 100));
}

#[test]
fn cube_power() {
    check_unary(|x| x * x * x, |x| Scalar::from(cube(x)), &generate(-10.0, 10.0, 100));
}

#[test]
fn square_root() {
    check_unary(f64::sqrt, |x| Scalar::from(sqrt(x)), &generate(0.1, 10.0, 100));
}

// ── Exp/Log ──

#[test]
fn exponential() {
    check_unary(f64::exp, |x| Scalar::from(exp(x)), &generate(-10.0, 10.0, 100));
}

#[test]
fn logarithm() {
    check_unary(f64::ln, |x| Scalar::from(ln(x)), &generate(0.1, 10.0, 100));
}

// ── Trig ──

#[test]
fn sine() {
    check_unary(f64::sin, |x| Scalar::from(sin(x)), &generate(-PI, PI, 100));
}

#[test]
fn cosine() {
    check_unary(f64::cos, |x| Scalar::from(cos(x)), &generate(-PI, PI, 100));
}

#[test]
fn tangent() {
    check_unary(f64::tan, |x| Scalar::from(tan(x)), &generate(-PI / 3.0, PI / 3.0, 100));
}

#[test]
fn inverse_sine() {
    check_unary(f64::asin, |x| Scalar::from(asin(x)), &generate(-0.95, 0.95, 100));
}

#[test]
fn inverse_cosine() {
    check_unary(f64::acos, |x| Scalar::from(acos(x)), &generate(-0.95, 0.95, 100));
}

#[test]
fn inverse_tangent() {
    check_unary(f64::atan, |x| Scalar::from(atan(x)), &generate(-10.0, 10.0, 100));
}

// ── Hyperbolic ──

#[test]
fn hyperbolic_sine() {
    check_unary(f64::sinh, |x| Scalar::from(sinh(x)), &generate(-5.0, 5.0, 100));
}

#[test]
fn hyperbolic_cosine() {
    check_unary(f64::cosh, |x| Scalar::from(cosh(x)), &generate(-5.0, 5.0, 100));
}

#[test]
fn hyperbolic_tangent() {
    check_unary(f64::tanh, |x| Scalar::from(tanh(x)), &generate(-5.0, 5.0, 100));
}

#[test]
fn inverse_hyperbolic_sine() {
    check_unary(f64::asinh, |x| Scalar::from(asinh(x)), &generate(-10.0, 10.0, 100));
}

#[test]
fn inverse_hyperbolic_cosine() {
    check_unary(f64::acosh, |x| Scalar::from(acosh(x)), &generate(1.1, 10.0, 100));
}

#[test]
fn inverse_hyperbolic_tangent() {
    check_unary(f64::atanh, |x| Scalar::from(atanh(x)), &generate(-0.9, 0.9, 100));
}

// ── Method syntax ──

#[test]
fn method_chain_matches_free_functions() {
    use fad::Expression;

    check_unary(
        |x| (x.sin() * 2.0).exp(),
        |x| Scalar::from((x.sin() * 2.0).exp()),
        &generate(-PI, PI, 50),
    );
}
