//! The [`Expression`] trait shared by materialized scalars and lazy nodes.
//!
//! Expressions are composed statically: every compound expression has its own
//! type, built from the types of its operands and operations, so evaluating a
//! deep tree involves neither heap allocation per node nor dynamic dispatch.

use std::rc::Rc;

use crate::binary::BinaryOp;
use crate::error::ScalarError;
use crate::ops;
use crate::parameter::{Parameter, ParameterRef, ParameterSet};
use crate::partial::{Partial, PartialViewMut};
use crate::unary::UnaryOp;

/// A differentiable scalar expression.
///
/// Implemented by [`Scalar`](crate::Scalar) (the leaf) and by the lazy
/// composite nodes [`UnaryOp`] and [`BinaryOp`]. References to expressions are
/// expressions as well, which is how nodes borrow materialized scalars without
/// copying them.
pub trait Expression {
    /// Value of the expression.
    fn value(&self) -> f64;

    /// Tracked parameters, in a deterministic order.
    fn parameters(&self) -> &ParameterSet;

    /// Chain-rule accumulation.
    ///
    /// Adds `scale` times this expression's partial derivative with respect to
    /// `p` into `target`, whose length must be `p.dim()`. Sub-expressions not
    /// containing `p` are skipped; callers are expected to check
    /// [`contains`](Self::contains) first.
    fn accum(&self, target: &mut PartialViewMut<'_>, scale: f64, p: &Parameter);

    /// Total length of the partial vector: the sum of the dimensions of the
    /// tracked parameters.
    #[inline]
    fn dim(&self) -> usize {
        self.parameters().dim()
    }

    /// Number of tracked parameters.
    #[inline]
    fn size(&self) -> usize {
        self.parameters().len()
    }

    #[inline]
    fn contains(&self, p: &Parameter) -> bool {
        self.parameters().contains(p)
    }

    /// Partial derivative with respect to `p`.
    ///
    /// Fails with [`ScalarError::UnknownParameter`] when `p` is not tracked.
    fn at(&self, p: &Parameter) -> Result<Partial, ScalarError> {
        if !self.contains(p) {
            return Err(ScalarError::UnknownParameter {
                name: p.name().to_owned(),
            });
        }
        Ok(self.at_or_zero(p))
    }

    /// Partial derivative with respect to `p`, zero when `p` is not tracked.
    fn at_or_zero(&self, p: &Parameter) -> Partial {
        let mut out = Partial::zeros(p.dim());
        if self.contains(p) {
            let mut view = out.columns_mut(0, p.dim());
            self.accum(&mut view, 1.0, p);
        }
        out
    }

    /// First tracked parameter with the given display name.
    fn find(&self, name: &str) -> Option<ParameterRef> {
        self.parameters().find(name).map(Rc::clone)
    }

    // ── Elementary functions ──

    #[inline]
    fn sqr(self) -> UnaryOp<Self, ops::Square>
    where
        Self: Sized,
    {
        UnaryOp::new(self, ops::Square)
    }

    #[inline]
    fn cube(self) -> UnaryOp<Self, ops::Cube>
    where
        Self: Sized,
    {
        UnaryOp::new(self, ops::Cube)
    }

    #[inline]
    fn sqrt(self) -> UnaryOp<Self, ops::Sqrt>
    where
        Self: Sized,
    {
        UnaryOp::new(self, ops::Sqrt)
    }

    #[inline]
    fn exp(self) -> UnaryOp<Self, ops::Exp>
    where
        Self: Sized,
    {
        UnaryOp::new(self, ops::Exp)
    }

    #[inline]
    fn ln(self) -> UnaryOp<Self, ops::Ln>
    where
        Self: Sized,
    {
        UnaryOp::new(self, ops::Ln)
    }

    #[inline]
    fn sin(self) -> UnaryOp<Self, ops::Sin>
    where
        Self: Sized,
    {
        UnaryOp::new(self, ops::Sin)
    }

    #[inline]
    fn cos(self) -> UnaryOp<Self, ops::Cos>
    where
        Self: Sized,
    {
        UnaryOp::new(self, ops::Cos)
    }

    #[inline]
    fn tan(self) -> UnaryOp<Self, ops::Tan>
    where
        Self: Sized,
    {
        UnaryOp::new(self, ops::Tan)
    }

    #[inline]
    fn asin(self) -> UnaryOp<Self, ops::Asin>
    where
        Self: Sized,
    {
        UnaryOp::new(self, ops::Asin)
    }

    #[inline]
    fn acos(self) -> UnaryOp<Self, ops::Acos>
    where
        Self: Sized,
    {
        UnaryOp::new(self, ops::Acos)
    }

    #[inline]
    fn atan(self) -> UnaryOp<Self, ops::Atan>
    where
        Self: Sized,
    {
        UnaryOp::new(self, ops::Atan)
    }

    #[inline]
    fn sinh(self) -> UnaryOp<Self, ops::Sinh>
    where
        Self: Sized,
    {
        UnaryOp::new(self, ops::Sinh)
    }

    #[inline]
    fn cosh(self) -> UnaryOp<Self, ops::Cosh>
    where
        Self: Sized,
    {
        UnaryOp::new(self, ops::Cosh)
    }

    #[inline]
    fn tanh(self) -> UnaryOp<Self, ops::Tanh>
    where
        Self: Sized,
    {
        UnaryOp::new(self, ops::Tanh)
    }

    #[inline]
    fn asinh(self) -> UnaryOp<Self, ops::Asinh>
    where
        Self: Sized,
    {
        UnaryOp::new(self, ops::Asinh)
    }

    #[inline]
    fn acosh(self) -> UnaryOp<Self, ops::Acosh>
    where
        Self: Sized,
    {
        UnaryOp::new(self, ops::Acosh)
    }

    #[inline]
    fn atanh(self) -> UnaryOp<Self, ops::Atanh>
    where
        Self: Sized,
    {
        UnaryOp::new(self, ops::Atanh)
    }

    /// `atan2(self, other)`.
    #[inline]
    fn atan2<R: Expression>(self, other: R) -> BinaryOp<Self, R, ops::Atan2>
    where
        Self: Sized,
    {
        BinaryOp::new(self, other, ops::Atan2)
    }
}

impl<E: Expression + ?Sized> Expression for &E {
    #[inline]
    fn value(&self) -> f64 {
        (**self).value()
    }

    #[inline]
    fn parameters(&self) -> &ParameterSet {
        (**self).parameters()
    }

    #[inline]
    fn accum(&self, target: &mut PartialViewMut<'_>, scale: f64, p: &Parameter) {
        (**self).accum(target, scale, p)
    }

    #[inline]
    fn dim(&self) -> usize {
        (**self).dim()
    }

    #[inline]
    fn contains(&self, p: &Parameter) -> bool {
        (**self).contains(p)
    }

    #[inline]
    fn at(&self, p: &Parameter) -> Result<Partial, ScalarError> {
        (**self).at(p)
    }
}
