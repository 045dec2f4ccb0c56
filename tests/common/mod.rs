#![allow(dead_code)]

use approx::assert_relative_eq;
use fad::{Expression, Scalar};

pub const PI: f64 = std::f64::consts::PI;

/// `num` evenly spaced samples starting at `start`, excluding `end`.
pub fn generate(start: f64, end: f64, num: usize) -> Vec<f64> {
    let step = (end - start) / num as f64;
    (0..num).map(|i| start + i as f64 * step).collect()
}

/// Central finite difference: (f(x+h) - f(x-h)) / 2h
pub fn central_difference(f: impl Fn(f64) -> f64, x: f64) -> f64 {
    let h = 1e-6;
    (f(x + h) - f(x - h)) / (2.0 * h)
}

pub fn assert_no_partials<E: Expression>(x: &E) {
    assert_eq!(x.dim(), 0);
    assert_eq!(x.size(), 0);
    assert!(x.parameters().is_empty());
}

/// Check a unary scalar function against its plain counterpart: value
/// agreement, constant purity, and the central-difference law.
pub fn check_unary(f: impl Fn(f64) -> f64, sf: impl Fn(&Scalar) -> Scalar, xs: &[f64]) {
    for &x in xs {
        let c = sf(&Scalar::constant(x));
        assert_no_partials(&c);
        assert_relative_eq!(c.value(), f(x), epsilon = 1e-12, max_relative = 1e-12);

        let s = Scalar::variable(x, "x");
        let p = s.parameter().unwrap().clone();
        let y = sf(&s);
        assert_relative_eq!(y.value(), f(x), epsilon = 1e-12, max_relative = 1e-12);
        assert_eq!(y.size(), 1);
        assert_eq!(y.dim(), 1);

        let analytic = y.at(&p).unwrap()[0];
        let numeric = central_difference(&f, x);
        assert_relative_eq!(analytic, numeric, epsilon = 1e-6, max_relative = 1e-6);
    }
}

/// Two-argument counterpart of [`check_unary`] over the grid `ls × rs`.
pub fn check_binary(
    f: impl Fn(f64, f64) -> f64,
    sf: impl Fn(&Scalar, &Scalar) -> Scalar,
    ls: &[f64],
    rs: &[f64],
) {
    for &l in ls {
        for &r in rs {
            let c = sf(&Scalar::constant(l), &Scalar::constant(r));
            assert_no_partials(&c);
            assert_relative_eq!(c.value(), f(l, r), epsilon = 1e-12, max_relative = 1e-12);

            let a = Scalar::variable(l, "l");
            let b = Scalar::variable(r, "r");
            let pa = a.parameter().unwrap().clone();
            let pb = b.parameter().unwrap().clone();
            let y = sf(&a, &b);
            assert_relative_eq!(y.value(), f(l, r), epsilon = 1e-12, max_relative = 1e-12);
            assert_eq!(y.size(), 2);

            let dl = central_difference(|v| f(v, r), l);
            let dr = central_difference(|v| f(l, v), r);
            assert_relative_eq!(y.at(&pa).unwrap()[0], dl, epsilon = 1e-6, max_relative = 1e-6);
            assert_relative_eq!(y.at(&pb).unwrap()[0], dr, epsilon = 1e-6, max_relative = 1e-6);
        }
    }
}
