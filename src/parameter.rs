//! Independent variables tracked through a computation.
//!
//! A [`Parameter`] is compared by identity, never by name: two parameters
//! created with the same name are distinct. Expressions refer to parameters
//! through shared [`ParameterRef`] handles and collect them into
//! [`ParameterSet`]s.

use std::fmt::{self, Display};
use std::ops::Deref;
use std::rc::Rc;

use crate::error::ScalarError;

/// Shared handle to a parameter.
pub type ParameterRef = Rc<Parameter>;

/// An independent variable whose partial derivatives are tracked.
///
/// Immutable after creation. The dimension is the length of the partial
/// segment reserved for it in every scalar that depends on it.
#[derive(Debug)]
pub struct Parameter {
    dim: usize,
    name: String,
}

impl Parameter {
    /// Mint a new parameter and return a shared handle to it.
    ///
    /// Fails with [`ScalarError::EmptyParameter`] when `dim` is zero.
    pub fn new(dim: usize, name: impl Into<String>) -> Result<ParameterRef, ScalarError> {
        let name = name.into();
        if dim == 0 {
            return Err(ScalarError::EmptyParameter { name });
        }
        Ok(Parameter::mint(dim, name))
    }

    /// Mint a new one-dimensional parameter.
    #[inline]
    pub fn scalar(name: impl Into<String>) -> ParameterRef {
        Parameter::mint(1, name.into())
    }

    pub(crate) fn mint(dim: usize, name: String) -> ParameterRef {
        debug_assert!(dim > 0);
        log::debug!("new parameter '{}' (dim {})", name, dim);
        Rc::new(Parameter { dim, name })
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Identity key of this parameter.
    #[inline]
    pub fn id(&self) -> ParameterId {
        ParameterId(self as *const Parameter as usize)
    }

    /// Whether `self` and `other` are the same parameter.
    #[inline]
    pub fn is(&self, other: &Parameter) -> bool {
        std::ptr::eq(self, other)
    }
}

impl Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Identity key of a [`Parameter`], usable as an ordered map key.
///
/// Only meaningful while the parameter is alive; holders of an id must also
/// hold a [`ParameterRef`] to the same parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParameterId(usize);

/// Immutable, cheaply clonable, ordered sequence of distinct parameters.
///
/// Caches the total dimension. Cloning shares the underlying storage.
#[derive(Clone, Debug)]
pub struct ParameterSet {
    params: Rc<[ParameterRef]>,
    dim: usize,
}

impl Default for ParameterSet {
    fn default() -> Self {
        ParameterSet::empty()
    }
}

impl ParameterSet {
    /// The empty set: no tracked parameters, dimension zero.
    pub fn empty() -> Self {
        ParameterSet {
            params: Rc::from(Vec::new()),
            dim: 0,
        }
    }

    /// A set holding exactly `p`.
    pub fn single(p: ParameterRef) -> Self {
        let dim = p.dim();
        ParameterSet {
            params: Rc::from(vec![p]),
            dim,
        }
    }

    /// Build a set from parameters assumed to be distinct.
    pub(crate) fn from_distinct(params: Vec<ParameterRef>) -> Self {
        let dim = params.iter().map(|p| p.dim()).sum();
        ParameterSet {
            params: Rc::from(params),
            dim,
        }
    }

    /// Sum of the dimensions of all parameters in the set.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Whether `p` is in the set (by identity).
    #[inline]
    pub fn contains(&self, p: &Parameter) -> bool {
        self.params.iter().any(|q| q.is(p))
    }

    /// Whether both sets hold the same parameters in the same order.
    pub fn same_as(&self, other: &ParameterSet) -> bool {
        Rc::ptr_eq(&self.params, &other.params)
            || (self.params.len() == other.params.len()
                && self
                    .params
                    .iter()
                    .zip(other.params.iter())
                    .all(|(a, b)| a.is(b)))
    }

    /// Parameter set of a binary composition.
    ///
    /// Identical or one-sided operands share the existing storage. Otherwise
    /// the result is `left` followed by the parameters of `right` that are not
    /// already in `left`, in their original order.
    pub fn union(left: &ParameterSet, right: &ParameterSet) -> ParameterSet {
        match (left.is_empty(), right.is_empty()) {
            (true, true) => ParameterSet::empty(),
            (false, true) => left.clone(),
            (true, false) => right.clone(),
            (false, false) if left.same_as(right) => left.clone(),
            (false, false) => {
                let mut params = left.params.to_vec();
                params.extend(right.params.iter().filter(|p| !left.contains(p)).cloned());
                log::trace!(
                    "merged parameter sets: {} + {} -> {}",
                    left.len(),
                    right.len(),
                    params.len()
                );
                ParameterSet::from_distinct(params)
            }
        }
    }

    /// First parameter in the set with the given display name.
    pub fn find(&self, name: &str) -> Option<&ParameterRef> {
        self.params.iter().find(|p| p.name() == name)
    }
}

impl Deref for ParameterSet {
    type Target = [ParameterRef];

    #[inline]
    fn deref(&self) -> &[ParameterRef] {
        &self.params
    }
}

impl PartialEq for ParameterSet {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl<'a> IntoIterator for &'a ParameterSet {
    type Item = &'a ParameterRef;
    type IntoIter = std::slice::Iter<'a, ParameterRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.iter()
    }
}
