//! Dense storage for partial derivatives, backed by `nalgebra`.

use nalgebra::{DMatrix, Dyn, MatrixView, MatrixViewMut, RowDVector, U1};

/// Dense row vector of partial derivatives.
pub type Partial = RowDVector<f64>;

/// Read-only view of a contiguous range of a [`Partial`].
pub type PartialView<'a> = MatrixView<'a, f64, U1, Dyn>;

/// Mutable view of a contiguous range of a [`Partial`], the target of
/// chain-rule accumulation.
pub type PartialViewMut<'a> = MatrixViewMut<'a, f64, U1, Dyn>;

/// Per-component seeds for a vector-valued parameter of dimension `dim`.
///
/// Row `i` is the derivative of component `i` with respect to the parameter.
pub fn identity_seeds(dim: usize) -> Vec<Partial> {
    let eye = DMatrix::<f64>::identity(dim, dim);
    eye.row_iter().map(|row| row.into_owned()).collect()
}

/// Add `scale * source` into `target` in place.
#[inline]
pub(crate) fn add_scaled(target: &mut PartialViewMut<'_>, scale: f64, source: &PartialView<'_>) {
    // `axpy` is only defined for column vectors.
    target.zip_apply(source, |t, s| *t += scale * s);
}
