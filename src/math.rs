//! Elementary functions on expressions.
//!
//! Each function wraps its argument in a lazy node; pass `&scalar` to borrow a
//! materialized scalar or a nested node to move it in.
//!
//! ```
//! use fad::math::{sin, sqr};
//! use fad::{Expression, Scalar};
//!
//! let x = Scalar::variable(2.0, "x");
//! let y = Scalar::from(sin(&x) + sqr(&x));
//! let p = x.parameter().unwrap();
//! assert!((y.at(p).unwrap()[0] - (2.0_f64.cos() + 4.0)).abs() < 1e-12);
//! ```

use crate::binary::BinaryOp;
use crate::expression::Expression;
use crate::ops;
use crate::unary::UnaryOp;

macro_rules! unary_fn {
    ($(#[$doc:meta])* $name:ident, $op:ident) => {
        $(#[$doc])*
        #[inline]
        pub fn $name<E: Expression>(expr: E) -> UnaryOp<E, ops::$op> {
            UnaryOp::new(expr, ops::$op)
        }
    };
}

unary_fn!(
    /// Square `x²`.
    sqr, Square
);
unary_fn!(
    /// Cube `x³`.
    cube, Cube
);
unary_fn!(sqrt, Sqrt);
unary_fn!(exp, Exp);
unary_fn!(
    /// Natural logarithm.
    ln, Ln
);
unary_fn!(sin, Sin);
unary_fn!(cos, Cos);
unary_fn!(tan, Tan);
unary_fn!(asin, Asin);
unary_fn!(acos, Acos);
unary_fn!(atan, Atan);
unary_fn!(sinh, Sinh);
unary_fn!(cosh, Cosh);
unary_fn!(tanh, Tanh);
unary_fn!(asinh, Asinh);
unary_fn!(acosh, Acosh);
unary_fn!(atanh, Atanh);

/// Two-argument arctangent `atan2(y, x)`.
#[inline]
pub fn atan2<L: Expression, R: Expression>(y: L, x: R) -> BinaryOp<L, R, ops::Atan2> {
    BinaryOp::new(y, x, ops::Atan2)
}
