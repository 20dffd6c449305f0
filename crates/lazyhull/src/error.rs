//! Error taxonomy shared by the protocol, the combinators and the engine.
//!
//! Every failure is a contract violation detected at construction or query
//! time. Computations are pure, so the same input always fails the same way.

use thiserror::Error;

/// Errors surfaced by lazy sets and overapproximations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SetError {
    /// Operands or a direction disagree on the ambient dimension.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// The operation needs a bounded set.
    #[error("set is unbounded")]
    Unbounded,

    /// Zonotope merge with different generator counts.
    #[error("zonotope order mismatch: {left} vs {right} generators")]
    OrderMismatch { left: usize, right: usize },

    /// Axis index outside `0..dim`.
    #[error("index {index} out of range for dimension {dim}")]
    InvalidIndex { index: usize, dim: usize },

    /// Support query against the empty set.
    #[error("support query on the empty set")]
    EmptySet,

    /// The operation needs a concrete operand kind the input does not have.
    #[error("unsupported operand: expected {what}")]
    Unsupported { what: &'static str },

    /// ε-refinement did not reach its tolerance within the direction budget.
    #[error("polygon refinement exceeded its budget of {directions} directions")]
    RefinementBudget { directions: usize },

    /// A half-space with zero normal vector.
    #[error("half-space has a zero normal vector")]
    DegenerateConstraint,

    /// Interval whose lower bound exceeds its upper bound.
    #[error("interval bounds out of order")]
    InvertedBounds,

    /// Enumerating `2^exponent` items does not fit in `usize`.
    #[error("cannot enumerate 2^{exponent} items")]
    EnumerationOverflow { exponent: usize },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, SetError>;

/// Fail with `DimensionMismatch` unless `found == expected`.
#[inline]
pub(crate) fn check_dim(expected: usize, found: usize) -> Result<()> {
    if expected == found {
        Ok(())
    } else {
        Err(SetError::DimensionMismatch { expected, found })
    }
}
