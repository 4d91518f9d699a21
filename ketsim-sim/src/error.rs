//! Simulation-layer error types

use ketsim_gates::GateError;
use ketsim_matrices::MatrixError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SimError>;

/// Errors from measurement and the algorithm constructors.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    /// Measurement requires a single-column state vector.
    #[error("expected a column vector, got a {num_rows}x{num_columns} matrix")]
    NotAColumnVector { num_rows: usize, num_columns: usize },

    /// The operator handed to phase estimation must be unitary.
    #[error("a {dimension}x{dimension} operator failed the unitarity check")]
    NotUnitary { dimension: usize },

    /// A named constraint on an algorithm argument was violated.
    #[error("invalid algorithm parameters: {0}")]
    InvalidAlgorithmParameters(String),

    #[error(transparent)]
    Gate(#[from] GateError),

    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

impl SimError {
    /// Algorithm register below the two-qubit minimum
    pub fn register_too_small(size: usize) -> Self {
        Self::InvalidAlgorithmParameters(format!(
            "register of {} qubits is below the 2-qubit minimum",
            size
        ))
    }

    /// Register so large its basis indices overflow
    pub fn register_too_large(size: usize) -> Self {
        Self::InvalidAlgorithmParameters(format!(
            "register of {} qubits exceeds the addressable basis-state range",
            size
        ))
    }

    /// Search target outside the register's basis states
    pub fn target_out_of_range(target: usize, dimension: usize) -> Self {
        Self::InvalidAlgorithmParameters(format!(
            "target state {} is outside the {}-dimensional register",
            target, dimension
        ))
    }

    /// Eigenstate dimension does not match the unitary
    pub fn eigenstate_mismatch(num_rows: usize, expected: usize) -> Self {
        Self::InvalidAlgorithmParameters(format!(
            "eigenstate has {} rows but the unitary acts on {}",
            num_rows, expected
        ))
    }

    /// Phase estimation with nothing to write the phase into
    pub fn empty_counting_register() -> Self {
        Self::InvalidAlgorithmParameters(
            "phase estimation needs at least one counting qubit".to_string(),
        )
    }

    /// Failure-probability bound at or below zero
    pub fn nonpositive_error_bound(error: f64) -> Self {
        Self::InvalidAlgorithmParameters(format!(
            "failure probability bound {} is not positive",
            error
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_violation() {
        assert_eq!(
            SimError::target_out_of_range(9, 8).to_string(),
            "invalid algorithm parameters: target state 9 is outside the 8-dimensional register"
        );
        assert_eq!(
            SimError::NotAColumnVector {
                num_rows: 2,
                num_columns: 2
            }
            .to_string(),
            "expected a column vector, got a 2x2 matrix"
        );
    }

    #[test]
    fn test_lowering_from_gate_errors() {
        let gate_error = GateError::qubit_out_of_range(4, 3);
        let lowered = SimError::from(gate_error.clone());
        assert_eq!(lowered.to_string(), gate_error.to_string());
    }
}
