//! Error types for topology generation and bulk application.

use alsvid_gates::GateError;
use thiserror::Error;

use crate::marshal::BoundaryError;

/// Errors from topology generation, application, and dispatch.
///
/// Invalid input (wrong counts, bad selectors, out-of-range indices) is
/// detected before mutation wherever feasible. Resource exhaustion is kept
/// distinct so callers can tell "fix your call" from "retry later". Boundary
/// failures are the collaborator's and pass through unmodified.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LatticeError {
    /// Qubit count below the pattern's minimum.
    #[error("Pattern '{pattern}' needs at least {needed} qubits, got {got}")]
    InsufficientQubits {
        /// Pattern selector name.
        pattern: &'static str,
        /// Minimum qubit count for the pattern.
        needed: usize,
        /// Qubits actually supplied.
        got: usize,
    },

    /// A topology edge or gate request referenced an index outside the
    /// qubit buffer.
    #[error("Operand index {index} is outside the qubit buffer")]
    MissingOperand {
        /// The out-of-range index.
        index: usize,
    },

    /// The same qubit index appeared twice in one gate request.
    #[error("Duplicate operand index {index} in gate request")]
    DuplicateOperand {
        /// The repeated index.
        index: usize,
    },

    /// Topology selector did not name a known pattern.
    #[error("Unknown topology pattern '{0}'")]
    UnknownPattern(String),

    /// Positions were supplied in a different dimension than the lattice.
    #[error("Lattice '{pattern}' is {expected}-dimensional, positions are {got}-dimensional")]
    DimensionMismatch {
        /// Lattice selector name.
        pattern: &'static str,
        /// Dimension the lattice is defined in.
        expected: usize,
        /// Dimension of the supplied positions.
        got: usize,
    },

    /// Sample range for the RNG was empty or inverted.
    #[error("Invalid sample range: min {min} must be below max {max}")]
    InvalidRange {
        /// Lower bound supplied.
        min: u64,
        /// Upper bound supplied.
        max: u64,
    },

    /// Zero samples requested.
    #[error("Sample count must be at least 1")]
    EmptyDraw,

    /// A transient buffer could not be allocated. Distinct from invalid
    /// input: the call may succeed on retry.
    #[error("Transient buffer allocation failed")]
    ResourceExhausted,

    /// Gate-level error, propagated from the catalog.
    #[error(transparent)]
    Gate(#[from] GateError),

    /// Boundary transport failure, propagated unmodified.
    #[error(transparent)]
    Boundary(#[from] BoundaryError),
}

/// Result type for lattice operations.
pub type LatticeResult<T> = Result<T, LatticeError>;

/// Allocate a transient buffer, surfacing failure as
/// [`LatticeError::ResourceExhausted`].
pub(crate) fn try_vec<T>(capacity: usize) -> LatticeResult<Vec<T>> {
    let mut v = Vec::new();
    v.try_reserve_exact(capacity)
        .map_err(|_| LatticeError::ResourceExhausted)?;
    Ok(v)
}
