//! Vectors of scalars sharing vector-valued parameters.
//!
//! A vector of length `n` created by [`variables`] tracks a single parameter
//! of dimension `n`; component `i` has the `i`-th identity row as its
//! partial derivative.

use crate::error::ScalarError;
use crate::expression::Expression;
use crate::parameter::Parameter;
use crate::partial::identity_seeds;
use crate::scalar::Scalar;

/// Components of a new vector-valued parameter called `name`.
///
/// An empty slice yields no components and mints no parameter.
pub fn variables(values: &[f64], name: impl Into<String>) -> Vec<Scalar> {
    if values.is_empty() {
        return Vec::new();
    }
    let p = Parameter::mint(values.len(), name.into());
    values
        .iter()
        .zip(identity_seeds(values.len()))
        .map(|(&v, seed)| Scalar::seeded(v, p.clone(), seed))
        .collect()
}

/// Literal-only scalars, tracking no parameters.
pub fn constants(values: &[f64]) -> Vec<Scalar> {
    values.iter().map(|&v| Scalar::constant(v)).collect()
}

/// Values of a slice of expressions.
pub fn values<E: Expression>(xs: &[E]) -> Vec<f64> {
    xs.iter().map(|x| x.value()).collect()
}

/// Sum of all scalars in `xs`; a constant zero when empty.
pub fn sum(xs: &[Scalar]) -> Scalar {
    let mut acc = Scalar::constant(0.0);
    for x in xs {
        acc += x;
    }
    acc
}

/// Inner product `Σ aᵢ·bᵢ`.
///
/// Fails with [`ScalarError::LengthMismatch`] when the slices differ in
/// length.
pub fn dot(a: &[Scalar], b: &[Scalar]) -> Result<Scalar, ScalarError> {
    if a.len() != b.len() {
        return Err(ScalarError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    let mut acc = Scalar::constant(0.0);
    for (x, y) in a.iter().zip(b) {
        acc += x * y;
    }
    Ok(acc)
}
