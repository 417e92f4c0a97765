// Error types for the cyclic-vector engine.
//
// Every failure in this crate is a local, synchronous precondition violation:
// a zero divisor reaching modular arithmetic, an out-of-domain construction
// value, or a degenerate input to the ranking engine. Nothing retries and
// nothing degrades silently — the caller gets the precise condition and
// decides what to do (clamp a dial, skip an empty matrix, fix the data).

use thiserror::Error;

/// Errors raised by vector construction, arithmetic, and ranking.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VectorError {
    /// Division or remainder by zero, in the Euclidean-division helper or in
    /// a componentwise/scalar quotient or remainder.
    #[error("division by zero")]
    ZeroDivisor,

    /// A container was constructed with a modulus below 1. Cyclic indexing is
    /// only well defined for a positive period.
    #[error("modulus must be positive, got {0}")]
    InvalidModulus(i64),

    /// A BinaryVector was handed an element outside {0, 1}.
    #[error("binary vector element at index {index} is {value}, expected 0 or 1")]
    NonBinaryValue { index: usize, value: i64 },

    /// The complexity dial only spans percentiles 0 through 100.
    #[error("complexity {0} is outside [0, 100]")]
    ComplexityOutOfRange(i64),

    /// Ranking or percentile selection was asked to pick from zero rows.
    #[error("matrix has no rows to rank")]
    EmptyMatrix,
}

/// Result alias used throughout the crate.
pub type VectorResult<T> = Result<T, VectorError>;
