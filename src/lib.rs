//! Forward-mode automatic differentiation over named parameters.
//!
//! A [`Scalar`] carries a value together with its partial derivatives with
//! respect to any number of [`Parameter`]s. Arithmetic and elementary
//! functions on scalars build lazy, statically typed expression nodes
//! ([`UnaryOp`], [`BinaryOp`]); converting a node back into a `Scalar`
//! propagates the derivatives through the chain rule in one pass per
//! parameter, without intermediate derivative buffers.
//!
//! ```
//! use fad::math::sin;
//! use fad::{Expression, Scalar};
//!
//! let a = Scalar::variable(1.0, "a");
//! let b = Scalar::variable(2.0, "b");
//! let c = Scalar::variable(3.0, "c");
//!
//! let x = Scalar::from(-sin(&a + &b) + 0.5 * &c);
//!
//! let pa = a.parameter().unwrap();
//! let pc = c.parameter().unwrap();
//! assert!((x.value() - (1.5 - 3.0_f64.sin())).abs() < 1e-12);
//! assert!((x.at(pa).unwrap()[0] + 3.0_f64.cos()).abs() < 1e-12);
//! assert!((x.at(pc).unwrap()[0] - 0.5).abs() < 1e-12);
//! ```

pub mod binary;
pub mod error;
pub mod expression;
pub mod math;
pub mod ops;
pub mod parameter;
pub mod partial;
pub mod scalar;
pub mod unary;
pub mod vector;
mod traits;

pub use binary::BinaryOp;
pub use error::ScalarError;
pub use expression::Expression;
pub use parameter::{Parameter, ParameterId, ParameterRef, ParameterSet};
pub use partial::{Partial, PartialView, PartialViewMut};
pub use scalar::{ParameterMap, PartialSnapshot, Scalar, ScalarSnapshot};
pub use unary::UnaryOp;
