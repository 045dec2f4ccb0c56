mod common;

use approx::assert_relative_eq;
use common::{check_binary, generate};
use fad::math::atan2;
use fad::{Expression, Scalar};

fn grid() -> Vec<f64> {
    // 21 samples: never hits zero exactly.
    generate(-10.0, 10.0, 21)
}

#[test]
fn addition() {
    check_binary(|l, r| l + r, |l, r| Scalar::from(l + r), &grid(), &grid());
}

#[test]
fn subtraction() {
    check_binary(|l, r| l - r, |l, r| Scalar::from(l - r), &grid(), &grid());
}

#[test]
fn multiplication() {
    check_binary(|l, r| l * r, |l, r| Scalar::from(l * r), &grid(), &grid());
}

#[test]
fn division() {
    check_binary(|l, r| l / r, |l, r| Scalar::from(l / r), &grid(), &grid());
}

#[test]
fn two_argument_arctangent() {
    check_binary(f64::atan2, |l, r| Scalar::from(atan2(l, r)), &grid(), &grid());
}

#[test]
fn union_of_disjoint_parameters() {
    let a = Scalar::variable(2.0, "a");
    let b = Scalar::variable(5.0, "b");
    let pa = a.parameter().unwrap().clone();
    let pb = b.parameter().unwrap().clone();

    let c = Scalar::from(&a * &b);
    assert_eq!(c.size(), 2);
    assert_eq!(c.dim(), 2);
    assert!(c.contains(&pa));
    assert!(c.contains(&pb));
    // d(a*b)/da = b * da/da, nothing from b.
    assert_relative_eq!(c.at(&pa).unwrap()[0], 5.0);
    assert_relative_eq!(c.at(&pb).unwrap()[0], 2.0);
}

#[test]
fn shared_parameter_on_both_sides() {
    let x = Scalar::variable(3.0, "x");
    let p = x.parameter().unwrap().clone();

    let y = Scalar::from(&x * &x + &x / &x);
    assert_eq!(y.size(), 1);
    assert_relative_eq!(y.value(), 10.0);
    assert_relative_eq!(y.at(&p).unwrap()[0], 6.0, max_relative = 1e-15);
}

#[test]
fn union_keeps_left_then_new_right_order() {
    let a = Scalar::variable(1.0, "a");
    let b = Scalar::variable(2.0, "b");
    let c = Scalar::variable(3.0, "c");

    let left = &a + &b;
    let right = &c * &a;
    let node = left - right;
    let names: Vec<&str> = node.parameters().iter().map(|p| p.name()).collect();
    assert_eq!(names, vec!["a", "b", "c"]);
}

#[test]
fn constant_and_variable_operands() {
    let k = Scalar::constant(4.0);
    let x = Scalar::variable(0.5, "x");
    let p = x.parameter().unwrap().clone();

    let y = Scalar::from(&k / &x);
    assert!(y.parameters().same_as(x.parameters()));
    assert_relative_eq!(y.value(), 8.0);
    assert_relative_eq!(y.at(&p).unwrap()[0], -16.0);
}
