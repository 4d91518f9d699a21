//! Constant gate matrices, basis vectors and projectors
//!
//! Process-wide immutable singletons, initialized lazily on first use
//! and never mutated afterwards. All are stored sparsely so that gate
//! composition hits the sparse tensor-product path.

use ketsim_matrices::{Matrix, SparseMatrix, ONE, ZERO};
use num_complex::Complex64;
use once_cell::sync::Lazy;

/// 1/√2, the Hadamard normalization factor.
pub const INV_SQRT2: f64 = std::f64::consts::FRAC_1_SQRT_2;

fn gate_literal(rows: Vec<Vec<Complex64>>) -> Matrix {
    Matrix::from(SparseMatrix::from_rows(rows).expect("gate constant construction failed"))
}

/// 2x2 identity:
///
/// ```text
/// | 1  0 |
/// | 0  1 |
/// ```
pub static IDENTITY: Lazy<Matrix> = Lazy::new(|| {
    gate_literal(vec![vec![ONE, ZERO], vec![ZERO, ONE]])
});

/// Pauli-X (NOT) gate:
///
/// ```text
/// | 0  1 |
/// | 1  0 |
/// ```
pub static PAULI_X: Lazy<Matrix> = Lazy::new(|| {
    gate_literal(vec![vec![ZERO, ONE], vec![ONE, ZERO]])
});

/// Pauli-Z (phase flip) gate:
///
/// ```text
/// | 1   0 |
/// | 0  -1 |
/// ```
pub static PAULI_Z: Lazy<Matrix> = Lazy::new(|| {
    gate_literal(vec![vec![ONE, ZERO], vec![ZERO, Complex64::new(-1.0, 0.0)]])
});

/// Hadamard gate:
///
/// ```text
/// (1/√2) * | 1   1 |
///          | 1  -1 |
/// ```
pub static HADAMARD: Lazy<Matrix> = Lazy::new(|| {
    gate_literal(vec![
        vec![Complex64::new(INV_SQRT2, 0.0), Complex64::new(INV_SQRT2, 0.0)],
        vec![Complex64::new(INV_SQRT2, 0.0), Complex64::new(-INV_SQRT2, 0.0)],
    ])
});

/// Basis state |0⟩ as a 2x1 column.
pub static KET_ZERO: Lazy<Matrix> = Lazy::new(|| gate_literal(vec![vec![ONE], vec![ZERO]]));

/// Basis state |1⟩ as a 2x1 column.
pub static KET_ONE: Lazy<Matrix> = Lazy::new(|| gate_literal(vec![vec![ZERO], vec![ONE]]));

/// Rank-1 projector |0⟩⟨0|:
///
/// ```text
/// | 1  0 |
/// | 0  0 |
/// ```
pub static PROJ_ZERO: Lazy<Matrix> = Lazy::new(|| {
    gate_literal(vec![vec![ONE, ZERO], vec![ZERO, ZERO]])
});

/// Rank-1 projector |1⟩⟨1|:
///
/// ```text
/// | 0  0 |
/// | 0  1 |
/// ```
pub static PROJ_ONE: Lazy<Matrix> = Lazy::new(|| {
    gate_literal(vec![vec![ZERO, ZERO], vec![ZERO, ONE]])
});

/// Phase-shift gate for angle `phi` (radians):
///
/// ```text
/// | 1       0 |
/// | 0  e^(iφ) |
/// ```
///
/// Parametrized, so built per call rather than stored as a singleton.
pub fn phase_shift(phi: f64) -> Matrix {
    gate_literal(vec![
        vec![ONE, ZERO],
        vec![ZERO, Complex64::from_polar(1.0, phi)],
    ])
}
