//! Error type shared by parameter construction and scalar lookups.

use std::fmt;

/// Errors raised by parameter lookups and scalar construction.
///
/// All of them indicate a programming error (wrong parameter, mismatched
/// shapes), never a transient condition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScalarError {
    /// The queried parameter is not tracked by the expression.
    UnknownParameter {
        /// Display name of the queried parameter.
        name: String,
    },
    /// A single parameter was requested from a scalar tracking zero or
    /// several parameters.
    AmbiguousParameter {
        /// Number of parameters actually tracked.
        count: usize,
    },
    /// A parameter was requested with dimension zero.
    EmptyParameter {
        /// Display name of the rejected parameter.
        name: String,
    },
    /// A seed row does not match the dimension of its parameter.
    DimensionMismatch {
        /// Display name of the parameter.
        name: String,
        /// Dimension of the parameter.
        expected: usize,
        /// Length of the supplied seed.
        found: usize,
    },
    /// Two sequences of scalars that must pair up have different lengths.
    LengthMismatch {
        left: usize,
        right: usize,
    },
}

impl fmt::Display for ScalarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarError::UnknownParameter { name } => {
                write!(f, "parameter not present in partials: '{}'", name)
            }
            ScalarError::AmbiguousParameter { count } => {
                write!(
                    f,
                    "expected exactly one tracked parameter, found {}",
                    count
                )
            }
            ScalarError::EmptyParameter { name } => {
                write!(f, "parameter '{}' must have a positive dimension", name)
            }
            ScalarError::DimensionMismatch {
                name,
                expected,
                found,
            } => write!(
                f,
                "seed for parameter '{}' has length {} (dimension {})",
                name, found, expected
            ),
            ScalarError::LengthMismatch { left, right } => {
                write!(f, "length mismatch: {} vs {}", left, right)
            }
        }
    }
}

impl std::error::Error for ScalarError {}
