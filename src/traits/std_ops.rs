use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::binary::BinaryOp;
use crate::expression::Expression;
use crate::ops::{self, BinaryOperation, UnaryOperation};
use crate::scalar::Scalar;
use crate::unary::UnaryOp;

// ──────────────────────────────────────────────
//  Expression operators
// ──────────────────────────────────────────────

// Operators build lazy nodes that own their operand. Operands that are
// `&Scalar` are borrowed, nested nodes are moved in.
macro_rules! impl_expression_ops {
    ([$($g:tt)*] $t:ty) => {
        impl<$($g)* Rhs: Expression> Add<Rhs> for $t {
            type Output = BinaryOp<$t, Rhs, ops::Add>;
            #[inline]
            fn add(self, rhs: Rhs) -> Self::Output {
                BinaryOp::new(self, rhs, ops::Add)
            }
        }

        impl<$($g)* Rhs: Expression> Sub<Rhs> for $t {
            type Output = BinaryOp<$t, Rhs, ops::Sub>;
            #[inline]
            fn sub(self, rhs: Rhs) -> Self::Output {
                BinaryOp::new(self, rhs, ops::Sub)
            }
        }

        impl<$($g)* Rhs: Expression> Mul<Rhs> for $t {
            type Output = BinaryOp<$t, Rhs, ops::Mul>;
            #[inline]
            fn mul(self, rhs: Rhs) -> Self::Output {
                BinaryOp::new(self, rhs, ops::Mul)
            }
        }

        impl<$($g)* Rhs: Expression> Div<Rhs> for $t {
            type Output = BinaryOp<$t, Rhs, ops::Div>;
            #[inline]
            fn div(self, rhs: Rhs) -> Self::Output {
                BinaryOp::new(self, rhs, ops::Div)
            }
        }

        impl<$($g)*> Neg for $t {
            type Output = UnaryOp<$t, ops::Negate>;
            #[inline]
            fn neg(self) -> Self::Output {
                UnaryOp::new(self, ops::Negate)
            }
        }

        // Mixed ops with plain numbers on either side.

        impl<$($g)*> Add<f64> for $t {
            type Output = UnaryOp<$t, ops::AddConstant>;
            #[inline]
            fn add(self, rhs: f64) -> Self::Output {
                UnaryOp::new(self, ops::AddConstant(rhs))
            }
        }

        impl<$($g)*> Add<$t> for f64 {
            type Output = UnaryOp<$t, ops::AddConstant>;
            #[inline]
            fn add(self, rhs: $t) -> Self::Output {
                UnaryOp::new(rhs, ops::AddConstant(self))
            }
        }

        impl<$($g)*> Sub<f64> for $t {
            type Output = UnaryOp<$t, ops::SubtractConstant>;
            #[inline]
            fn sub(self, rhs: f64) -> Self::Output {
                UnaryOp::new(self, ops::SubtractConstant(rhs))
            }
        }

        impl<$($g)*> Sub<$t> for f64 {
            type Output = UnaryOp<$t, ops::SubtractFromConstant>;
            #[inline]
            fn sub(self, rhs: $t) -> Self::Output {
                UnaryOp::new(rhs, ops::SubtractFromConstant(self))
            }
        }

        impl<$($g)*> Mul<f64> for $t {
            type Output = UnaryOp<$t, ops::MultiplyConstant>;
            #[inline]
            fn mul(self, rhs: f64) -> Self::Output {
                UnaryOp::new(self, ops::MultiplyConstant(rhs))
            }
        }

        impl<$($g)*> Mul<$t> for f64 {
            type Output = UnaryOp<$t, ops::MultiplyConstant>;
            #[inline]
            fn mul(self, rhs: $t) -> Self::Output {
                UnaryOp::new(rhs, ops::MultiplyConstant(self))
            }
        }

        impl<$($g)*> Div<f64> for $t {
            type Output = UnaryOp<$t, ops::DivideByConstant>;
            #[inline]
            fn div(self, rhs: f64) -> Self::Output {
                UnaryOp::new(self, ops::DivideByConstant(rhs))
            }
        }

        impl<$($g)*> Div<$t> for f64 {
            type Output = UnaryOp<$t, ops::DivideConstant>;
            #[inline]
            fn div(self, rhs: $t) -> Self::Output {
                UnaryOp::new(rhs, ops::DivideConstant(self))
            }
        }
    };
}

impl_expression_ops!([] Scalar);
impl_expression_ops!(['a,] &'a Scalar);
impl_expression_ops!([E: Expression, O: UnaryOperation,] UnaryOp<E, O>);
impl_expression_ops!([L: Expression, R: Expression, O: BinaryOperation,] BinaryOp<L, R, O>);

// ──────────────────────────────────────────────
//  Scalar compound assignment
// ──────────────────────────────────────────────

impl AddAssign<f64> for Scalar {
    #[inline]
    fn add_assign(&mut self, rhs: f64) {
        let value = self.value() + rhs;
        self.set_value(value);
    }
}

impl SubAssign<f64> for Scalar {
    #[inline]
    fn sub_assign(&mut self, rhs: f64) {
        let value = self.value() - rhs;
        self.set_value(value);
    }
}

impl MulAssign<f64> for Scalar {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        let value = self.value() * rhs;
        self.set_value(value);
        *self.partial_mut() *= rhs;
    }
}

impl DivAssign<f64> for Scalar {
    #[inline]
    fn div_assign(&mut self, rhs: f64) {
        let value = self.value() / rhs;
        self.set_value(value);
        *self.partial_mut() /= rhs;
    }
}

// Compound assignment with an expression materializes `self op rhs`.

impl<E: Expression> AddAssign<E> for Scalar {
    fn add_assign(&mut self, rhs: E) {
        let sum = Scalar::from_expr(&BinaryOp::new(&*self, rhs, ops::Add));
        *self = sum;
    }
}

impl<E: Expression> SubAssign<E> for Scalar {
    fn sub_assign(&mut self, rhs: E) {
        let diff = Scalar::from_expr(&BinaryOp::new(&*self, rhs, ops::Sub));
        *self = diff;
    }
}

impl<E: Expression> MulAssign<E> for Scalar {
    fn mul_assign(&mut self, rhs: E) {
        let prod = Scalar::from_expr(&BinaryOp::new(&*self, rhs, ops::Mul));
        *self = prod;
    }
}

impl<E: Expression> DivAssign<E> for Scalar {
    fn div_assign(&mut self, rhs: E) {
        let quot = Scalar::from_expr(&BinaryOp::new(&*self, rhs, ops::Div));
        *self = quot;
    }
}
