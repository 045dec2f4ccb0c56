//! The materialized differentiable scalar.
//!
//! [`Scalar`] owns its value, a dense [`Partial`] buffer and a
//! [`ParameterMap`] locating each tracked parameter's segment in that buffer.
//! Any [`Expression`] collapses into a `Scalar` via [`Scalar::from_expr`].

use std::collections::BTreeMap;
use std::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::binary::BinaryOp;
use crate::error::ScalarError;
use crate::expression::Expression;
use crate::parameter::{Parameter, ParameterId, ParameterRef, ParameterSet};
use crate::partial::{self, Partial, PartialView, PartialViewMut};
use crate::unary::UnaryOp;

/// Ordered mapping from parameter identity to the offset of its segment in a
/// partial buffer.
///
/// Segments are packed contiguously in the order of
/// [`ParameterMap::parameters`]; each spans the dimension of its parameter.
#[derive(Clone, Debug, Default)]
pub struct ParameterMap {
    offsets: BTreeMap<ParameterId, usize>,
    order: ParameterSet,
}

impl ParameterMap {
    fn packed(order: ParameterSet) -> Self {
        let mut offsets = BTreeMap::new();
        let mut offset = 0;
        for p in &order {
            offsets.insert(p.id(), offset);
            offset += p.dim();
        }
        ParameterMap { offsets, order }
    }

    /// Offset of `p`'s segment, if tracked.
    #[inline]
    pub fn offset(&self, p: &Parameter) -> Option<usize> {
        self.offsets.get(&p.id()).copied()
    }

    /// Tracked parameters in offset order.
    #[inline]
    pub fn parameters(&self) -> &ParameterSet {
        &self.order
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// `(parameter, offset)` pairs in offset order.
    pub fn iter(&self) -> impl Iterator<Item = (&ParameterRef, usize)> + '_ {
        self.order.iter().scan(0, |offset, p| {
            let here = *offset;
            *offset += p.dim();
            Some((p, here))
        })
    }
}

/// A differentiable scalar with a concrete partial-derivative buffer.
///
/// Invariant: `partial().len()` equals the summed dimensions of the tracked
/// parameters. A scalar with no parameters is a constant.
#[derive(Clone, Debug)]
pub struct Scalar {
    value: f64,
    partial: Partial,
    map: ParameterMap,
}

impl Default for Scalar {
    fn default() -> Self {
        Scalar::constant(0.0)
    }
}

impl From<f64> for Scalar {
    #[inline]
    fn from(value: f64) -> Self {
        Scalar::constant(value)
    }
}

impl Scalar {
    /// A scalar tracking no parameters.
    pub fn constant(value: f64) -> Self {
        Scalar {
            value,
            partial: Partial::zeros(0),
            map: ParameterMap::default(),
        }
    }

    /// A scalar tracking a newly minted one-dimensional parameter called
    /// `name`, with unit derivative with respect to it.
    pub fn variable(value: f64, name: impl Into<String>) -> Self {
        let p = Parameter::scalar(name);
        Scalar {
            value,
            partial: Partial::from_element(1, 1.0),
            map: ParameterMap::packed(ParameterSet::single(p)),
        }
    }

    /// A scalar whose derivative with respect to `p` is `seed`.
    ///
    /// Used for the components of vector-valued parameters, where each
    /// component is seeded with one row of the identity.
    pub fn with_seed(value: f64, p: ParameterRef, seed: Partial) -> Result<Self, ScalarError> {
        if seed.len() != p.dim() {
            return Err(ScalarError::DimensionMismatch {
                name: p.name().to_owned(),
                expected: p.dim(),
                found: seed.len(),
            });
        }
        Ok(Scalar::seeded(value, p, seed))
    }

    pub(crate) fn seeded(value: f64, p: ParameterRef, seed: Partial) -> Self {
        debug_assert_eq!(seed.len(), p.dim());
        Scalar {
            value,
            partial: seed,
            map: ParameterMap::packed(ParameterSet::single(p)),
        }
    }

    /// Collapse an expression into a concrete scalar.
    ///
    /// Each tracked parameter receives the next free segment of a zeroed
    /// buffer and one accumulation pass fills it.
    pub fn from_expr<E: Expression + ?Sized>(expr: &E) -> Self {
        let order = expr.parameters().clone();
        let mut partial = Partial::zeros(order.dim());
        let mut offset = 0;
        for p in &order {
            let dim = p.dim();
            let mut segment = partial.columns_mut(offset, dim);
            expr.accum(&mut segment, 1.0, p);
            offset += dim;
        }
        log::trace!(
            "materialized scalar: value {}, {} parameters, dim {}",
            expr.value(),
            order.len(),
            order.dim()
        );
        Scalar {
            value: expr.value(),
            partial,
            map: ParameterMap::packed(order),
        }
    }

    /// The full partial-derivative buffer.
    #[inline]
    pub fn partial(&self) -> &Partial {
        &self.partial
    }

    #[inline]
    pub fn parameter_map(&self) -> &ParameterMap {
        &self.map
    }

    /// The single tracked parameter.
    ///
    /// Fails with [`ScalarError::AmbiguousParameter`] when the scalar tracks
    /// zero or several parameters.
    pub fn parameter(&self) -> Result<&ParameterRef, ScalarError> {
        match &self.map.order[..] {
            [p] => Ok(p),
            params => Err(ScalarError::AmbiguousParameter {
                count: params.len(),
            }),
        }
    }

    /// Borrowed segment of the partial buffer for `p`, if tracked.
    pub fn segment(&self, p: &Parameter) -> Option<PartialView<'_>> {
        self.map
            .offset(p)
            .map(|offset| self.partial.columns(offset, p.dim()))
    }

    /// `(parameter, partial segment)` pairs in buffer order.
    pub fn iter(&self) -> impl Iterator<Item = (&ParameterRef, PartialView<'_>)> + '_ {
        self.map
            .iter()
            .map(move |(p, offset)| (p, self.partial.columns(offset, p.dim())))
    }

    /// Owned, parameter-identity-free copy of the value and partials.
    pub fn snapshot(&self) -> ScalarSnapshot {
        ScalarSnapshot {
            value: self.value,
            partials: self
                .iter()
                .map(|(p, seg)| PartialSnapshot {
                    name: p.name().to_owned(),
                    values: seg.iter().copied().collect(),
                })
                .collect(),
        }
    }

    pub(crate) fn set_value(&mut self, value: f64) {
        self.value = value;
    }

    pub(crate) fn partial_mut(&mut self) -> &mut Partial {
        &mut self.partial
    }
}

impl Expression for Scalar {
    #[inline]
    fn value(&self) -> f64 {
        self.value
    }

    #[inline]
    fn parameters(&self) -> &ParameterSet {
        &self.map.order
    }

    #[inline]
    fn dim(&self) -> usize {
        self.partial.len()
    }

    #[inline]
    fn contains(&self, p: &Parameter) -> bool {
        self.map.offset(p).is_some()
    }

    fn at(&self, p: &Parameter) -> Result<Partial, ScalarError> {
        self.segment(p)
            .map(|seg| seg.into_owned())
            .ok_or_else(|| ScalarError::UnknownParameter {
                name: p.name().to_owned(),
            })
    }

    #[inline]
    fn accum(&self, target: &mut PartialViewMut<'_>, scale: f64, p: &Parameter) {
        if let Some(seg) = self.segment(p) {
            partial::add_scaled(target, scale, &seg);
        }
    }
}

impl<E: Expression, O: crate::ops::UnaryOperation> From<UnaryOp<E, O>> for Scalar {
    #[inline]
    fn from(expr: UnaryOp<E, O>) -> Self {
        Scalar::from_expr(&expr)
    }
}

impl<L, R, O> From<BinaryOp<L, R, O>> for Scalar
where
    L: Expression,
    R: Expression,
    O: crate::ops::BinaryOperation,
{
    #[inline]
    fn from(expr: BinaryOp<L, R, O>) -> Self {
        Scalar::from_expr(&expr)
    }
}

impl Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (", self.value)?;
        for (p, seg) in self.iter() {
            write!(f, " {}:", p.name())?;
            for v in seg.iter() {
                write!(f, " {}", v)?;
            }
        }
        write!(f, " )")
    }
}

/// Plain-data copy of a [`Scalar`]: value plus partials keyed by parameter
/// name.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScalarSnapshot {
    pub value: f64,
    pub partials: Vec<PartialSnapshot>,
}

/// Partial segment of one parameter inside a [`ScalarSnapshot`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PartialSnapshot {
    pub name: String,
    pub values: Vec<f64>,
}
