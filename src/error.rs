//! Error surface of the engine.
//!
//! Algebraic degeneracies (annihilation through a zero-metric factor,
//! cancellation to zero) are values, not errors; the simplifier drops
//! them. Errors are reserved for a vanishing invertible part and for
//! dispatch misses, plus two interface-level failures.

use crate::dispatch::Op;
use crate::multivector::Multivector;

#[derive(thiserror::Error, Debug)]
pub enum GaError {
    /// `inverse` (or `normalize`) on a multivector whose scalar norm is zero.
    #[error("multivector has no invertible scalar norm: {0}")]
    NonInvertable(Multivector),

    /// No handler registered for this operator/operand combination.
    #[error("no handler for {op:?} on ({operands})")]
    NoSuchOp { op: Op, operands: String },

    /// A multivector literal referenced a label outside the basis.
    #[error("unknown basis label `{0}`")]
    UnknownBasis(String),

    /// Blade expansion requested on an algebra without metric multivectors.
    #[error("algebra carries no metric-vector expansion")]
    MissingMetric,
}

pub type Result<T> = std::result::Result<T, GaError>;
