//! Single-qubit gate selector

use crate::constants::{phase_shift, HADAMARD, IDENTITY, PAULI_X, PAULI_Z};
use ketsim_matrices::Matrix;
use std::fmt;

/// The single-qubit gates [`multi_gate`](crate::multi_gate) can
/// broadcast across a register.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gate {
    /// 2x2 identity.
    Identity,
    /// Pauli-X (NOT).
    PauliX,
    /// Pauli-Z (phase flip).
    PauliZ,
    /// Hadamard.
    Hadamard,
    /// Phase shift by the carried angle, in radians.
    PhaseShift(f64),
}

impl Gate {
    /// The gate's 2x2 unitary matrix.
    pub fn matrix(&self) -> Matrix {
        match self {
            Gate::Identity => IDENTITY.clone(),
            Gate::PauliX => PAULI_X.clone(),
            Gate::PauliZ => PAULI_Z.clone(),
            Gate::Hadamard => HADAMARD.clone(),
            Gate::PhaseShift(phi) => phase_shift(*phi),
        }
    }

    /// Short name used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Gate::Identity => "I",
            Gate::PauliX => "X",
            Gate::PauliZ => "Z",
            Gate::Hadamard => "H",
            Gate::PhaseShift(_) => "P",
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gate::PhaseShift(phi) => write!(f, "P({:.4})", phi),
            other => write!(f, "{}", other.name()),
        }
    }
}
