//! Error types for gate construction

use ketsim_matrices::MatrixError;
use thiserror::Error;

/// Result type for gate-builder operations
pub type Result<T> = std::result::Result<T, GateError>;

/// Errors that can occur while building composite operators
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GateError {
    /// A builder was called with out-of-range or contradictory qubit
    /// indices, or with a register too small for the requested gate
    #[error("invalid gate parameters: {0}")]
    InvalidGateParameters(String),

    /// Dimension or index failure in the underlying matrix layer
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

impl GateError {
    /// Register has fewer qubits than the gate needs
    pub fn register_too_small(size: usize, minimum: usize) -> Self {
        Self::InvalidGateParameters(format!(
            "register of {} qubits is too small, need at least {}",
            size, minimum
        ))
    }

    /// Register so large its basis indices overflow
    pub fn register_too_large(size: usize) -> Self {
        Self::InvalidGateParameters(format!(
            "register of {} qubits exceeds the addressable basis-state range",
            size
        ))
    }

    /// A control or target index lies outside the register
    pub fn qubit_out_of_range(index: usize, size: usize) -> Self {
        Self::InvalidGateParameters(format!(
            "qubit index {} out of range for a {}-qubit register",
            index, size
        ))
    }

    /// The target qubit also appears in the control list
    pub fn target_is_control(target: usize) -> Self {
        Self::InvalidGateParameters(format!(
            "target qubit {} is also listed as a control",
            target
        ))
    }

    /// A controlled block is not a square power-of-two operator
    pub fn invalid_unitary_block(num_rows: usize, num_columns: usize) -> Self {
        Self::InvalidGateParameters(format!(
            "controlled block must be square with power-of-two dimension of at least 2, got {}x{}",
            num_rows, num_columns
        ))
    }

    /// The control qubit overlaps the qubits the block acts on
    pub fn control_inside_block(control: usize, boundary: usize) -> Self {
        Self::InvalidGateParameters(format!(
            "control qubit {} overlaps the controlled block occupying qubits {} and above",
            control, boundary
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_error_messages() {
        let err = GateError::register_too_small(1, 2);
        assert_eq!(
            err.to_string(),
            "invalid gate parameters: register of 1 qubits is too small, need at least 2"
        );

        let err = GateError::qubit_out_of_range(3, 2);
        assert!(err.to_string().contains("qubit index 3"));

        let err = GateError::target_is_control(1);
        assert!(err.to_string().contains("target qubit 1"));
    }

    #[test]
    fn test_matrix_error_is_transparent() {
        let err: GateError = MatrixError::InvalidDimension { dimension: 0 }.into();
        assert_eq!(err.to_string(), "matrix dimensions must be positive, got 0");
    }
}
