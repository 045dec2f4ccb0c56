//! Operation catalog: stateless value and local-derivative rules.
//!
//! Each operation is a pure function of its operand values. Composite nodes
//! ([`UnaryOp`](crate::UnaryOp), [`BinaryOp`](crate::BinaryOp)) evaluate the
//! rules once at construction and apply the chain rule themselves.

/// Value and local derivative of a one-operand operation.
pub trait UnaryOperation {
    /// Transformed value.
    fn apply(&self, x: f64) -> f64;

    /// Derivative of [`apply`](Self::apply) at `x`.
    fn partial(&self, x: f64) -> f64;
}

/// Value and local derivatives of a two-operand operation.
pub trait BinaryOperation {
    /// Transformed value.
    fn apply(&self, l: f64, r: f64) -> f64;

    /// Derivative with respect to the left operand.
    fn left_partial(&self, l: f64, r: f64) -> f64;

    /// Derivative with respect to the right operand.
    fn right_partial(&self, l: f64, r: f64) -> f64;

    /// Both local derivatives at once.
    ///
    /// Override when the two rules share intermediate work.
    #[inline]
    fn partials(&self, l: f64, r: f64) -> (f64, f64) {
        (self.left_partial(l, r), self.right_partial(l, r))
    }
}

// ──────────────────────────────────────────────
//  Arithmetic with a constant
// ──────────────────────────────────────────────

/// `-x`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Negate;

impl UnaryOperation for Negate {
    #[inline]
    fn apply(&self, x: f64) -> f64 {
        -x
    }

    #[inline]
    fn partial(&self, _x: f64) -> f64 {
        -1.0
    }
}

/// `x + c` (and `c + x`).
#[derive(Clone, Copy, Debug)]
pub struct AddConstant(pub f64);

impl UnaryOperation for AddConstant {
    #[inline]
    fn apply(&self, x: f64) -> f64 {
        x + self.0
    }

    #[inline]
    fn partial(&self, _x: f64) -> f64 {
        1.0
    }
}

/// `x - c`.
#[derive(Clone, Copy, Debug)]
pub struct SubtractConstant(pub f64);

impl UnaryOperation for SubtractConstant {
    #[inline]
    fn apply(&self, x: f64) -> f64 {
        x - self.0
    }

    #[inline]
    fn partial(&self, _x: f64) -> f64 {
        1.0
    }
}

/// `c - x`.
#[derive(Clone, Copy, Debug)]
pub struct SubtractFromConstant(pub f64);

impl UnaryOperation for SubtractFromConstant {
    #[inline]
    fn apply(&self, x: f64) -> f64 {
        self.0 - x
    }

    #[inline]
    fn partial(&self, _x: f64) -> f64 {
        -1.0
    }
}

/// `c * x` (and `x * c`).
#[derive(Clone, Copy, Debug)]
pub struct MultiplyConstant(pub f64);

impl UnaryOperation for MultiplyConstant {
    #[inline]
    fn apply(&self, x: f64) -> f64 {
        self.0 * x
    }

    #[inline]
    fn partial(&self, _x: f64) -> f64 {
        self.0
    }
}

/// `x / c`.
#[derive(Clone, Copy, Debug)]
pub struct DivideByConstant(pub f64);

impl UnaryOperation for DivideByConstant {
    #[inline]
    fn apply(&self, x: f64) -> f64 {
        x / self.0
    }

    #[inline]
    fn partial(&self, _x: f64) -> f64 {
        1.0 / self.0
    }
}

/// `c / x`.
#[derive(Clone, Copy, Debug)]
pub struct DivideConstant(pub f64);

impl UnaryOperation for DivideConstant {
    #[inline]
    fn apply(&self, x: f64) -> f64 {
        self.0 / x
    }

    #[inline]
    fn partial(&self, x: f64) -> f64 {
        -self.0 / (x * x)
    }
}

// ──────────────────────────────────────────────
//  Elementary functions
// ──────────────────────────────────────────────

macro_rules! unary_function {
    ($(#[$doc:meta])* $name:ident, |$x:ident| $value:expr, $partial:expr) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Debug, Default)]
        pub struct $name;

        impl UnaryOperation for $name {
            #[inline]
            fn apply(&self, $x: f64) -> f64 {
                $value
            }

            #[inline]
            fn partial(&self, $x: f64) -> f64 {
                $partial
            }
        }
    };
}

// ── Powers ──

unary_function!(
    /// `x²`.
    Square, |x| x * x, 2.0 * x
);
unary_function!(
    /// `x³`.
    Cube, |x| x * x * x, 3.0 * x * x
);
unary_function!(
    /// `√x`.
    Sqrt, |x| x.sqrt(), 0.5 / x.sqrt()
);

// ── Exp/Log ──

unary_function!(Exp, |x| x.exp(), x.exp());
unary_function!(Ln, |x| x.ln(), 1.0 / x);

// ── Trig ──

unary_function!(Sin, |x| x.sin(), x.cos());
unary_function!(Cos, |x| x.cos(), -x.sin());
unary_function!(Tan, |x| x.tan(), {
    let c = x.cos();
    1.0 / (c * c)
});
unary_function!(Asin, |x| x.asin(), 1.0 / (1.0 - x * x).sqrt());
unary_function!(Acos, |x| x.acos(), -1.0 / (1.0 - x * x).sqrt());
unary_function!(Atan, |x| x.atan(), 1.0 / (1.0 + x * x));

// ── Hyperbolic ──

unary_function!(Sinh, |x| x.sinh(), x.cosh());
unary_function!(Cosh, |x| x.cosh(), x.sinh());
unary_function!(Tanh, |x| x.tanh(), {
    let c = x.cosh();
    1.0 / (c * c)
});
unary_function!(Asinh, |x| x.asinh(), 1.0 / (x * x + 1.0).sqrt());
unary_function!(Acosh, |x| x.acosh(), 1.0 / (x * x - 1.0).sqrt());
unary_function!(Atanh, |x| x.atanh(), 1.0 / (1.0 - x * x));

// ──────────────────────────────────────────────
//  Binary operations
// ──────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default)]
pub struct Add;

impl BinaryOperation for Add {
    #[inline]
    fn apply(&self, l: f64, r: f64) -> f64 {
        l + r
    }

    #[inline]
    fn left_partial(&self, _l: f64, _r: f64) -> f64 {
        1.0
    }

    #[inline]
    fn right_partial(&self, _l: f64, _r: f64) -> f64 {
        1.0
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Sub;

impl BinaryOperation for Sub {
    #[inline]
    fn apply(&self, l: f64, r: f64) -> f64 {
        l - r
    }

    #[inline]
    fn left_partial(&self, _l: f64, _r: f64) -> f64 {
        1.0
    }

    #[inline]
    fn right_partial(&self, _l: f64, _r: f64) -> f64 {
        -1.0
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Mul;

impl BinaryOperation for Mul {
    #[inline]
    fn apply(&self, l: f64, r: f64) -> f64 {
        l * r
    }

    #[inline]
    fn left_partial(&self, _l: f64, r: f64) -> f64 {
        r
    }

    #[inline]
    fn right_partial(&self, l: f64, _r: f64) -> f64 {
        l
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Div;

impl BinaryOperation for Div {
    #[inline]
    fn apply(&self, l: f64, r: f64) -> f64 {
        l / r
    }

    #[inline]
    fn left_partial(&self, _l: f64, r: f64) -> f64 {
        1.0 / r
    }

    #[inline]
    fn right_partial(&self, l: f64, r: f64) -> f64 {
        -l / (r * r)
    }

    #[inline]
    fn partials(&self, l: f64, r: f64) -> (f64, f64) {
        let inv = 1.0 / r;
        (inv, -l * inv * inv)
    }
}

/// Two-argument arctangent `atan2(l, r)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Atan2;

impl BinaryOperation for Atan2 {
    #[inline]
    fn apply(&self, l: f64, r: f64) -> f64 {
        l.atan2(r)
    }

    #[inline]
    fn left_partial(&self, l: f64, r: f64) -> f64 {
        r / (l * l + r * r)
    }

    #[inline]
    fn right_partial(&self, l: f64, r: f64) -> f64 {
        -l / (l * l + r * r)
    }

    #[inline]
    fn partials(&self, l: f64, r: f64) -> (f64, f64) {
        let norm = l * l + r * r;
        (r / norm, -l / norm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_partials() {
        assert_eq!(Add.partials(2.0, 5.0), (1.0, 1.0));
        assert_eq!(Sub.partials(2.0, 5.0), (1.0, -1.0));
        assert_eq!(Mul.partials(2.0, 5.0), (5.0, 2.0));
        assert_eq!(Div.partials(2.0, 4.0), (0.25, -0.125));
    }

    #[test]
    fn partials_agree_with_single_rules() {
        let (l, r) = (0.7, -1.3);
        let (dl, dr) = Atan2.partials(l, r);
        assert!((dl - Atan2.left_partial(l, r)).abs() < 1e-15);
        assert!((dr - Atan2.right_partial(l, r)).abs() < 1e-15);

        let (dl, dr) = Div.partials(l, r);
        assert!((dl - Div.left_partial(l, r)).abs() < 1e-15);
        assert!((dr - Div.right_partial(l, r)).abs() < 1e-15);
    }

    #[test]
    fn constant_operations() {
        assert_eq!(AddConstant(2.0).apply(1.0), 3.0);
        assert_eq!(SubtractConstant(2.0).apply(1.0), -1.0);
        assert_eq!(SubtractFromConstant(2.0).apply(1.0), 1.0);
        assert_eq!(SubtractFromConstant(2.0).partial(1.0), -1.0);
        assert_eq!(MultiplyConstant(3.0).partial(7.0), 3.0);
        assert_eq!(DivideByConstant(4.0).partial(7.0), 0.25);
        assert_eq!(DivideConstant(2.0).apply(4.0), 0.5);
        assert_eq!(DivideConstant(2.0).partial(4.0), -0.125);
    }
}
