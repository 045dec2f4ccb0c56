//! Lazy two-operand composite node.

use crate::expression::Expression;
use crate::ops::BinaryOperation;
use crate::parameter::{Parameter, ParameterSet};
use crate::partial::PartialViewMut;

/// An operation combining a left and a right sub-expression.
///
/// Construction evaluates the value and both local derivatives, and merges
/// the operands' parameter sets once (see [`ParameterSet::union`]).
/// Accumulation for a parameter walks only the operands that contain it.
#[derive(Clone, Debug)]
pub struct BinaryOp<L, R, O> {
    left: L,
    right: R,
    op: O,
    value: f64,
    partials: (f64, f64),
    parameters: ParameterSet,
}

impl<L: Expression, R: Expression, O: BinaryOperation> BinaryOp<L, R, O> {
    pub fn new(left: L, right: R, op: O) -> Self {
        let (l, r) = (left.value(), right.value());
        let value = op.apply(l, r);
        let partials = op.partials(l, r);
        let parameters = ParameterSet::union(left.parameters(), right.parameters());
        BinaryOp {
            left,
            right,
            op,
            value,
            partials,
            parameters,
        }
    }

    #[inline]
    pub fn left(&self) -> &L {
        &self.left
    }

    #[inline]
    pub fn right(&self) -> &R {
        &self.right
    }

    #[inline]
    pub fn op(&self) -> &O {
        &self.op
    }

    /// Derivatives of this node with respect to its left and right operands.
    #[inline]
    pub fn local_partials(&self) -> (f64, f64) {
        self.partials
    }
}

impl<L: Expression, R: Expression, O: BinaryOperation> Expression for BinaryOp<L, R, O> {
    #[inline]
    fn value(&self) -> f64 {
        self.value
    }

    #[inline]
    fn parameters(&self) -> &ParameterSet {
        &self.parameters
    }

    fn accum(&self, target: &mut PartialViewMut<'_>, scale: f64, p: &Parameter) {
        let (dl, dr) = self.partials;
        if self.left.contains(p) {
            self.left.accum(target, scale * dl, p);
        }
        if self.right.contains(p) {
            self.right.accum(target, scale * dr, p);
        }
    }
}
