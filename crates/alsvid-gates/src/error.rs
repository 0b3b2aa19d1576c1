//! Error types for the gate catalog.

use thiserror::Error;

/// Errors from gate selection and dispatch.
///
/// Gate arithmetic itself never fails — every divisor in the catalog is a
/// compile-time constant — so the only failure modes are invalid selectors
/// and operand mismatches, all detected before any amplitude is mutated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GateError {
    /// Rotation axis selector was not one of x/y/z.
    #[error("Unknown rotation axis '{0}'")]
    UnknownAxis(char),

    /// A gate was dispatched with the wrong number of operands.
    #[error("Gate '{gate}' takes {expected} qubits, got {got}")]
    OperandCount {
        /// Name of the gate.
        gate: &'static str,
        /// Operands the gate requires.
        expected: u32,
        /// Operands actually supplied.
        got: u32,
    },

    /// The Deutsch oracle must act on a single qubit.
    #[error("Deutsch oracle must be a single-qubit gate, got '{0}'")]
    InvalidOracle(&'static str),
}

/// Result type for gate operations.
pub type GateResult<T> = Result<T, GateError>;
