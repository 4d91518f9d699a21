//! Quantum Fourier transform and eigenphase estimation
//!
//! [`qft`] assembles the n-qubit Fourier operator from Hadamard
//! broadcasts, controlled phase rotations and a bit-reversal swap
//! network; [`inverse_qft`] is its adjoint. [`PhaseEstimation`] layers
//! a Hadamard wall, controlled powers of the unitary under test, and
//! the inverse transform to read an eigenvalue's phase out of the
//! counting register.
//!
//! # Example
//!
//! ```ignore
//! use ketsim_gates::{phase_shift, KET_ONE};
//! use ketsim_sim::phase_estimation::PhaseEstimation;
//! use std::f64::consts::PI;
//!
//! // |1⟩ is an eigenvector of the phase gate with eigenphase 1/8.
//! let unitary = phase_shift(2.0 * PI / 8.0);
//! let pe = PhaseEstimation::new(3, &unitary, &KET_ONE)?;
//! let (phase, probability) = pe.estimate()?;
//! assert_eq!(phase, 0.125);
//! ```

use crate::error::{Result, SimError};
use crate::measurement::measure;
use ketsim_gates::{control_phase, control_u, multi_gate, swap, tensor_product, Gate};
use ketsim_matrices::Matrix;
use smallvec::SmallVec;
use std::f64::consts::PI;

/// The quantum Fourier transform on `size` qubits.
///
/// Column `j` holds the amplitudes `e^(2πi·jk/2^size) / √(2^size)` at
/// row `k`, with basis indices read little-endian (qubit 0 is the
/// least-significant bit).
///
/// # Errors
/// [`SimError::Gate`] for an empty or oversized register.
pub fn qft(size: usize) -> Result<Matrix> {
    let mut gate = multi_gate(size, &[], Gate::Identity)?;
    for target in (0..size).rev() {
        gate = multi_gate(size, &[target], Gate::Hadamard)?.dot(&gate)?;
        // Rotation shrinks with the distance between control and target.
        for offset in 1..=target {
            let angle = PI / (1 << offset) as f64;
            gate = control_phase(size, &[target - offset], target, angle)?.dot(&gate)?;
        }
    }
    for low in 0..size / 2 {
        gate = swap(size, low, size - 1 - low)?.dot(&gate)?;
    }
    Ok(gate)
}

/// The inverse quantum Fourier transform, the adjoint of [`qft`].
pub fn inverse_qft(size: usize) -> Result<Matrix> {
    Ok(qft(size)?.adjoint())
}

/// Counting qubits needed for `precision` binary digits of phase with
/// failure probability at most `error`, which must lie in `(0, 1)`.
///
/// # Errors
/// [`SimError::InvalidAlgorithmParameters`] when `error` is zero or
/// negative.
pub fn optimum_counting_qubits(precision: usize, error: f64) -> Result<usize> {
    if error <= 0.0 {
        return Err(SimError::nonpositive_error_bound(error));
    }
    Ok((precision as f64 + (2.0 + 1.0 / (2.0 * error)).log2()).ceil() as usize)
}

/// Phase estimation circuit for one unitary and a prepared eigenstate.
///
/// The eigenstate register occupies the high-order qubits and the
/// counting register the low-order ones, so controlled applications go
/// through [`control_u`] unchanged.
#[derive(Debug, Clone)]
pub struct PhaseEstimation {
    counting_qubits: usize,
    block_qubits: usize,
    circuit: Matrix,
    initial: Matrix,
}

impl PhaseEstimation {
    /// Validate the inputs and assemble the three circuit layers:
    /// Hadamard wall, controlled `U^(2^i)` from each counting qubit
    /// `i` (squaring the unitary between layers), inverse QFT.
    ///
    /// # Errors
    /// [`SimError::NotUnitary`] when `unitary` fails the unitarity
    /// check; [`SimError::NotAColumnVector`] /
    /// [`SimError::InvalidAlgorithmParameters`] when the eigenstate is
    /// not a column of matching dimension or the counting register is
    /// empty; [`SimError::Gate`] when the unitary is not a
    /// power-of-two block of at least two rows.
    pub fn new(counting_qubits: usize, unitary: &Matrix, eigenstate: &Matrix) -> Result<Self> {
        if counting_qubits == 0 {
            return Err(SimError::empty_counting_register());
        }
        let block = unitary.num_rows();
        if !unitary.is_unitary() {
            return Err(SimError::NotUnitary { dimension: block });
        }
        if eigenstate.num_columns() != 1 {
            return Err(SimError::NotAColumnVector {
                num_rows: eigenstate.num_rows(),
                num_columns: eigenstate.num_columns(),
            });
        }
        if eigenstate.num_rows() != block {
            return Err(SimError::eigenstate_mismatch(eigenstate.num_rows(), block));
        }

        let block_identity = Matrix::identity(block)?;
        let counting_targets: SmallVec<[usize; 8]> = (0..counting_qubits).collect();
        let wall = multi_gate(counting_qubits, &counting_targets, Gate::Hadamard)?;
        let first = tensor_product(&block_identity, &wall);

        let block_qubits = block.trailing_zeros() as usize;
        let total = counting_qubits + block_qubits;
        let mut second = multi_gate(total, &[], Gate::Identity)?;
        let mut power = unitary.clone();
        for control in 0..counting_qubits {
            second = control_u(total, control, &power)?.dot(&second)?;
            if control + 1 < counting_qubits {
                power = power.dot(&power)?;
            }
        }

        let third = tensor_product(&block_identity, &inverse_qft(counting_qubits)?);
        let circuit = third.dot(&second)?.dot(&first)?;

        let counting_zero = Matrix::basis_column(1 << counting_qubits, 0)?;
        let initial = tensor_product(eigenstate, &counting_zero);

        Ok(Self {
            counting_qubits,
            block_qubits,
            circuit,
            initial,
        })
    }

    /// Number of counting qubits (phase readout precision).
    pub fn counting_qubits(&self) -> usize {
        self.counting_qubits
    }

    /// Number of qubits the unitary block acts on.
    pub fn block_qubits(&self) -> usize {
        self.block_qubits
    }

    /// The assembled circuit operator.
    pub fn circuit(&self) -> &Matrix {
        &self.circuit
    }

    /// Apply the circuit to `eigenstate ⊗ |0…0⟩` and return the
    /// probability of each counting-register value, marginalized over
    /// the eigenstate register.
    pub fn run(&self) -> Result<Vec<f64>> {
        let state = self.circuit.dot(&self.initial)?;
        let full = measure(&state)?;

        let dimension = 1 << self.counting_qubits;
        let mut probabilities = vec![0.0; dimension];
        for (index, probability) in full.into_iter().enumerate() {
            probabilities[index % dimension] += probability;
        }
        Ok(probabilities)
    }

    /// The phase estimate `index / 2^counting` of the most probable
    /// counting-register value, with that value's probability.
    pub fn estimate(&self) -> Result<(f64, f64)> {
        let probabilities = self.run()?;
        let dimension = probabilities.len();
        let (best, probability) = probabilities
            .into_iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .expect("counting register has at least two states");
        Ok((best as f64 / dimension as f64, probability))
    }
}
