//! Grover search for valid 2x2 binary sudoku grids
//!
//! The puzzle assigns a bit to each cell of a 2x2 grid (row-major
//! qubits 0-3) such that no row or column repeats a value. Four
//! condition qubits (4-7) record the XOR of each constrained cell
//! pair, a validity qubit (8) is flipped when all four hold, and the
//! conditions are uncomputed again. Two reflection rounds over the
//! cell register amplify the two checkerboard assignments `0110` and
//! `1001`.
//!
//! # Example
//!
//! ```ignore
//! use ketsim_sim::sudoku::SudokuCircuit;
//!
//! let puzzle = SudokuCircuit::new()?;
//! let probabilities = puzzle.solution_probabilities()?;
//! assert!(probabilities[0b0110] + probabilities[0b1001] > 0.5);
//! ```

use crate::error::Result;
use crate::measurement::{measure, sample};
use ketsim_gates::{control_x, control_z, multi_gate, Gate};
use ketsim_matrices::Matrix;
use smallvec::SmallVec;

const CELL_QUBITS: usize = 4;
const TOTAL_QUBITS: usize = 9;
const VALIDITY_QUBIT: usize = 8;
const GROVER_ITERATIONS: usize = 2;

/// Row and column constraints of the grid: each pair of cells must
/// differ, recorded on one condition qubit.
const CONDITIONS: [([usize; 2], usize); 4] = [
    ([0, 1], 4),
    ([0, 2], 5),
    ([1, 3], 6),
    ([2, 3], 7),
];

/// XOR each constrained cell pair onto its condition qubit.
///
/// Self-inverse, so the same operator also uncomputes the conditions.
fn build_conditions() -> Result<Matrix> {
    let mut operator = multi_gate(TOTAL_QUBITS, &[], Gate::Identity)?;
    for (cells, condition) in CONDITIONS {
        for cell in cells {
            operator = control_x(TOTAL_QUBITS, &[cell], condition)?.dot(&operator)?;
        }
    }
    Ok(operator)
}

/// Flip the validity qubit exactly for cell assignments satisfying all
/// four conditions, leaving the condition qubits cleared.
fn build_oracle() -> Result<Matrix> {
    let conditions = build_conditions()?;
    let condition_qubits: SmallVec<[usize; 8]> =
        CONDITIONS.iter().map(|&(_, qubit)| qubit).collect();
    let flip = control_x(TOTAL_QUBITS, &condition_qubits, VALIDITY_QUBIT)?;
    Ok(conditions.dot(&flip)?.dot(&conditions)?)
}

/// Reflection about the uniform superposition of the cell register,
/// acting trivially on the condition and validity qubits.
fn build_diffuser() -> Result<Matrix> {
    let cells: SmallVec<[usize; 8]> = (0..CELL_QUBITS).collect();
    let controls: SmallVec<[usize; 8]> = (0..CELL_QUBITS - 1).collect();

    let h = multi_gate(TOTAL_QUBITS, &cells, Gate::Hadamard)?;
    let x = multi_gate(TOTAL_QUBITS, &cells, Gate::PauliX)?;
    let cz = control_z(TOTAL_QUBITS, &controls, CELL_QUBITS - 1)?;
    Ok(h.dot(&x)?.dot(&cz)?.dot(&x)?.dot(&h)?)
}

/// Assembled search circuit over the nine-qubit puzzle register.
#[derive(Debug, Clone)]
pub struct SudokuCircuit {
    circuit: Matrix,
}

impl SudokuCircuit {
    /// Assemble the circuit: a Hadamard wall over the cells, then two
    /// oracle + diffusion rounds.
    pub fn new() -> Result<Self> {
        let oracle = build_oracle()?;
        let diffuser = build_diffuser()?;

        let cells: SmallVec<[usize; 8]> = (0..CELL_QUBITS).collect();
        let mut circuit = multi_gate(TOTAL_QUBITS, &cells, Gate::Hadamard)?;
        for _ in 0..GROVER_ITERATIONS {
            circuit = oracle.dot(&circuit)?;
            circuit = diffuser.dot(&circuit)?;
        }
        Ok(Self { circuit })
    }

    /// The assembled circuit operator.
    pub fn circuit(&self) -> &Matrix {
        &self.circuit
    }

    /// Apply the circuit to |0…0⟩ and return the probability of every
    /// nine-qubit basis state.
    pub fn run(&self) -> Result<Vec<f64>> {
        let initial = Matrix::basis_column(1 << TOTAL_QUBITS, 0)?;
        let state = self.circuit.dot(&initial)?;
        measure(&state)
    }

    /// Probability of each of the 16 cell assignments, marginalized
    /// over the condition and validity qubits.
    pub fn solution_probabilities(&self) -> Result<Vec<f64>> {
        let full = self.run()?;
        let dimension = 1 << CELL_QUBITS;
        let mut probabilities = vec![0.0; dimension];
        for (index, probability) in full.into_iter().enumerate() {
            probabilities[index % dimension] += probability;
        }
        Ok(probabilities)
    }

    /// Draw one observed cell assignment with its probability.
    pub fn sample_solution(&self, rng: &mut dyn FnMut() -> f64) -> Result<(usize, f64)> {
        let probabilities = self.solution_probabilities()?;
        let observed = sample(&probabilities, rng);
        Ok((observed, probabilities[observed]))
    }
}
