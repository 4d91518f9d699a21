//! Quantum gate library over [`ketsim_matrices`]
//!
//! Provides:
//! - The standard single-qubit gate matrices as lazily built sparse
//!   singletons ([`constants`])
//! - A small [`Gate`] vocabulary for naming single-qubit gates
//! - [`tensor_product`] for composing operators across registers
//! - Bitmask-driven builders for multi-qubit operators: broadcast
//!   gates, controlled X/Z/phase, swap, and control of an arbitrary
//!   unitary block ([`builders`])
//!
//! Throughout the crate qubit 0 is the least-significant bit of a
//! basis-state index: the column vector entry at index `i` is the
//! amplitude of the basis state whose qubit `q` holds bit `q` of `i`.

pub mod builders;
pub mod constants;
pub mod error;
pub mod gate;
pub mod tensor;

pub use builders::{control_phase, control_u, control_x, control_z, multi_gate, swap};
pub use constants::{
    phase_shift, HADAMARD, IDENTITY, KET_ONE, KET_ZERO, PAULI_X, PAULI_Z, PROJ_ONE, PROJ_ZERO,
};
pub use error::{GateError, Result};
pub use gate::Gate;
pub use tensor::tensor_product;
