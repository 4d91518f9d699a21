//! Grover's search over an n-qubit register
//!
//! Amplifies the amplitude of one target basis state with repeated
//! oracle + diffusion reflections. The oracle phase-flips the target by
//! conjugating a full-register controlled-Z with X selectors on the
//! target's zero bits; the diffuser is the standard `H·X·CZ·X·H`
//! reflection about the uniform superposition.
//!
//! # Example
//!
//! ```ignore
//! use ketsim_sim::grover::GroverCircuit;
//!
//! let search = GroverCircuit::new(3, 5)?;
//! let probabilities = search.run()?;
//! assert!(probabilities[5] > 0.9);
//! ```

use crate::error::{Result, SimError};
use crate::measurement::{measure, sample};
use ketsim_gates::{control_z, multi_gate, Gate};
use ketsim_matrices::Matrix;
use smallvec::SmallVec;
use std::f64::consts::FRAC_PI_4;

/// Indices of the set bits of `value`, lowest first.
fn set_bits(value: usize) -> SmallVec<[usize; 8]> {
    let mut bits = SmallVec::new();
    let mut remaining = value;
    let mut position = 0;
    while remaining != 0 {
        if remaining & 1 == 1 {
            bits.push(position);
        }
        remaining >>= 1;
        position += 1;
    }
    bits
}

fn register_dimension(size: usize) -> Result<usize> {
    if size < 2 {
        return Err(SimError::register_too_small(size));
    }
    if size >= usize::BITS as usize {
        return Err(SimError::register_too_large(size));
    }
    Ok(1 << size)
}

/// Reflections that bring the target amplitude closest to 1.
fn max_reflections(size: usize) -> usize {
    let dimension = 1usize << size;
    (FRAC_PI_4 * (dimension as f64).sqrt()).floor() as usize
}

/// Phase-flip the single basis state `target`, leaving the rest alone.
///
/// X gates on the zero bits of `target` rotate it onto |1…1⟩, where the
/// controlled-Z applies the flip, and rotate it back.
fn build_oracle(size: usize, target: usize) -> Result<Matrix> {
    let dimension = 1usize << size;
    let zero_bits = set_bits(dimension - 1 - target);
    let controls: SmallVec<[usize; 8]> = (0..size - 1).collect();

    let selector = multi_gate(size, &zero_bits, Gate::PauliX)?;
    let cz = control_z(size, &controls, size - 1)?;
    let oracle = selector.dot(&cz)?.dot(&selector)?;
    Ok(oracle)
}

/// Reflection about the uniform superposition (up to global sign).
fn build_diffuser(size: usize) -> Result<Matrix> {
    let every: SmallVec<[usize; 8]> = (0..size).collect();
    let controls: SmallVec<[usize; 8]> = (0..size - 1).collect();

    let h = multi_gate(size, &every, Gate::Hadamard)?;
    let x = multi_gate(size, &every, Gate::PauliX)?;
    let cz = control_z(size, &controls, size - 1)?;
    let diffuser = h.dot(&x)?.dot(&cz)?.dot(&x)?.dot(&h)?;
    Ok(diffuser)
}

/// A fully assembled Grover search circuit for one target state.
#[derive(Debug, Clone)]
pub struct GroverCircuit {
    size: usize,
    target: usize,
    circuit: Matrix,
}

impl GroverCircuit {
    /// Assemble the circuit: a Hadamard wall, then the optimal number
    /// of oracle + diffusion rounds.
    ///
    /// # Errors
    /// [`SimError::InvalidAlgorithmParameters`] when `size < 2` or
    /// `target` is not a basis state of the register.
    pub fn new(size: usize, target: usize) -> Result<Self> {
        let dimension = register_dimension(size)?;
        if target >= dimension {
            return Err(SimError::target_out_of_range(target, dimension));
        }

        let oracle = build_oracle(size, target)?;
        let diffuser = build_diffuser(size)?;

        let every: SmallVec<[usize; 8]> = (0..size).collect();
        let mut circuit = multi_gate(size, &every, Gate::Hadamard)?;
        for _ in 0..max_reflections(size) {
            circuit = oracle.dot(&circuit)?;
            circuit = diffuser.dot(&circuit)?;
        }
        Ok(Self {
            size,
            target,
            circuit,
        })
    }

    /// Number of qubits in the register.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The basis state being searched for.
    pub fn target(&self) -> usize {
        self.target
    }

    /// The assembled circuit operator.
    pub fn circuit(&self) -> &Matrix {
        &self.circuit
    }

    /// Oracle + diffusion rounds the circuit applies.
    pub fn max_reflections(&self) -> usize {
        max_reflections(self.size)
    }

    /// The target-marking oracle on its own.
    pub fn oracle(&self) -> Result<Matrix> {
        build_oracle(self.size, self.target)
    }

    /// The diffusion operator on its own.
    pub fn diffusion(&self) -> Result<Matrix> {
        build_diffuser(self.size)
    }

    /// Apply the circuit to |0…0⟩ and return the probability of every
    /// basis state.
    pub fn run(&self) -> Result<Vec<f64>> {
        let initial = Matrix::basis_column(1 << self.size, 0)?;
        let state = self.circuit.dot(&initial)?;
        measure(&state)
    }

    /// [`run`](Self::run), then draw one observed outcome.
    pub fn run_sampled(&self, rng: &mut dyn FnMut() -> f64) -> Result<(usize, f64)> {
        let probabilities = self.run()?;
        let observed = sample(&probabilities, rng);
        Ok((observed, probabilities[observed]))
    }
}
