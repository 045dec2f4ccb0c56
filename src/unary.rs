//! Lazy one-operand composite node.

use crate::expression::Expression;
use crate::ops::UnaryOperation;
use crate::parameter::{Parameter, ParameterSet};
use crate::partial::PartialViewMut;

/// An operation applied to a single sub-expression.
///
/// The value and the local derivative are evaluated once, at construction.
/// Derivatives with respect to parameters are only produced on request, by
/// forwarding the scaled local derivative to the operand.
///
/// A `UnaryOp` tracks exactly the parameters of its operand.
#[derive(Clone, Debug)]
pub struct UnaryOp<E, O> {
    expr: E,
    op: O,
    value: f64,
    partial: f64,
}

impl<E: Expression, O: UnaryOperation> UnaryOp<E, O> {
    pub fn new(expr: E, op: O) -> Self {
        let x = expr.value();
        let value = op.apply(x);
        let partial = op.partial(x);
        UnaryOp {
            expr,
            op,
            value,
            partial,
        }
    }

    /// The operand.
    #[inline]
    pub fn operand(&self) -> &E {
        &self.expr
    }

    /// The operation.
    #[inline]
    pub fn op(&self) -> &O {
        &self.op
    }

    /// Derivative of this node with respect to its operand.
    #[inline]
    pub fn local_partial(&self) -> f64 {
        self.partial
    }
}

impl<E: Expression, O: UnaryOperation> Expression for UnaryOp<E, O> {
    #[inline]
    fn value(&self) -> f64 {
        self.value
    }

    #[inline]
    fn parameters(&self) -> &ParameterSet {
        self.expr.parameters()
    }

    #[inline]
    fn contains(&self, p: &Parameter) -> bool {
        self.expr.contains(p)
    }

    #[inline]
    fn accum(&self, target: &mut PartialViewMut<'_>, scale: f64, p: &Parameter) {
        self.expr.accum(target, scale * self.partial, p);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::{Negate, Sin};
    use crate::Scalar;

    #[test]
    fn value_and_local_partial_are_eager() {
        let x = Scalar::variable(0.5, "x");
        let node = UnaryOp::new(&x, Sin);
        assert_eq!(node.value(), 0.5_f64.sin());
        assert_eq!(node.local_partial(), 0.5_f64.cos());
        assert!(node.parameters().same_as(x.parameters()));
    }

    #[test]
    fn nested_accumulation_multiplies_local_partials() {
        let x = Scalar::variable(0.5, "x");
        let p = x.parameter().unwrap().clone();
        let node = UnaryOp::new(UnaryOp::new(&x, Sin), Negate);
        let d = node.at(&p).unwrap();
        assert!((d[0] + 0.5_f64.cos()).abs() < 1e-15);
    }

    #[test]
    fn constant_operand_has_no_parameters() {
        let c = Scalar::constant(2.0);
        let node = UnaryOp::new(&c, Sin);
        assert_eq!(node.dim(), 0);
        assert_eq!(node.size(), 0);
    }
}
