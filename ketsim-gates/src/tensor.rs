//! Kronecker (tensor) products
//!
//! The sole mechanism for broadcasting a gate or register into a larger
//! composite space. `tensor_product(a, b)` places `b` on the low-order
//! side: for operators on qubit registers, `a` acts on the high bits of
//! a basis-state index and `b` on the low bits.

use ketsim_matrices::{is_negligible, EntryMap, Matrix, SparseMatrix};
use num_complex::Complex64;

/// The stored non-zero `(row, column, value)` triples of either
/// representation; for sparse operands this touches only stored entries.
fn nonzero_triples(matrix: &Matrix) -> Vec<(usize, usize, Complex64)> {
    match matrix {
        Matrix::Sparse(sparse) => sparse.iter().collect(),
        Matrix::Dense(dense) => dense
            .rows()
            .into_iter()
            .enumerate()
            .flat_map(|(row, values)| {
                values
                    .into_iter()
                    .enumerate()
                    .filter_map(move |(column, value)| {
                        (!is_negligible(value)).then_some((row, column, value))
                    })
            })
            .collect(),
    }
}

/// Kronecker product `a ⊗ b`.
///
/// The result is `(a.rows·b.rows) x (a.cols·b.cols)` with entry
/// `(i, j) = a[i / b.rows][j / b.cols] · b[i % b.rows][j % b.cols]`,
/// carried sparsely: only non-zero entry pairs are visited, writing
/// `entries[k·b.rows + r][l·b.cols + s] = a[k][l] · b[r][s]`, and
/// near-zero products are dropped.
pub fn tensor_product(a: &Matrix, b: &Matrix) -> Matrix {
    let b_rows = b.num_rows();
    let b_columns = b.num_columns();
    let mut entries = EntryMap::new();

    let right = nonzero_triples(b);
    for (k, l, left) in nonzero_triples(a) {
        for &(r, s, rv) in &right {
            let value = left * rv;
            if !is_negligible(value) {
                entries
                    .entry(k * b_rows + r)
                    .or_default()
                    .insert(l * b_columns + s, value);
            }
        }
    }

    let sparse = SparseMatrix::from_map(
        entries,
        a.num_rows() * b_rows,
        a.num_columns() * b_columns,
    )
    .expect("tensor indices stay within the product dimensions");
    Matrix::from(sparse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{HADAMARD, IDENTITY, INV_SQRT2, KET_ONE, KET_ZERO};

    #[test]
    fn test_identity_blocks() {
        // I ⊗ A = block diagonal [A, A]
        let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let product = tensor_product(&IDENTITY, &a);

        let expected = Matrix::from_rows(vec![
            vec![1.0, 2.0, 0.0, 0.0],
            vec![3.0, 4.0, 0.0, 0.0],
            vec![0.0, 0.0, 1.0, 2.0],
            vec![0.0, 0.0, 3.0, 4.0],
        ])
        .unwrap();
        assert_eq!(product, expected);
    }

    #[test]
    fn test_dimensions_multiply() {
        let a = Matrix::zeros(2, 3).unwrap();
        let b = Matrix::zeros(4, 5).unwrap();
        let product = tensor_product(&a, &b);
        assert_eq!(product.num_rows(), 8);
        assert_eq!(product.num_columns(), 15);
    }

    #[test]
    fn test_left_operand_is_high_bits() {
        // (X ⊗ I)|01⟩ = |11⟩: the left factor acts on qubit 1.
        let x = crate::constants::PAULI_X.clone();
        let op = tensor_product(&x, &IDENTITY);
        let input = Matrix::basis_column(4, 0b01).unwrap();
        let output = op.dot(&input).unwrap();
        assert_eq!(output, Matrix::basis_column(4, 0b11).unwrap());
    }

    #[test]
    fn test_ket_tensor_ket() {
        // |0⟩ ⊗ |1⟩ = |01⟩, basis index 1 of the 4-dimensional space.
        let combined = tensor_product(&KET_ZERO, &KET_ONE);
        assert_eq!(combined, Matrix::basis_column(4, 1).unwrap());
    }

    #[test]
    fn test_two_qubit_hadamard_entries() {
        let hh = tensor_product(&HADAMARD, &HADAMARD);
        assert_eq!(hh.num_rows(), 4);
        let half = INV_SQRT2 * INV_SQRT2;
        // Sign pattern of H⊗H: negative where both Hadamard factors
        // contribute their lower-right entry.
        assert_eq!(hh.get(0, 0).unwrap().re, half);
        assert_eq!(hh.get(1, 1).unwrap().re, -half);
        assert_eq!(hh.get(2, 2).unwrap().re, -half);
        assert_eq!(hh.get(3, 3).unwrap().re, half);
        assert_eq!(hh.get(3, 0).unwrap().re, half);
    }

    #[test]
    fn test_associativity() {
        let a = Matrix::from_rows(vec![vec![1.0, 0.0], vec![0.0, -1.0]]).unwrap();
        let b = Matrix::from_rows(vec![vec![0.0, 2.0], vec![2.0, 0.0]]).unwrap();
        let c = Matrix::from_rows(vec![vec![1.0, 1.0], vec![0.0, 1.0]]).unwrap();

        let left = tensor_product(&tensor_product(&a, &b), &c);
        let right = tensor_product(&a, &tensor_product(&b, &c));
        assert_eq!(left, right);
    }

    #[test]
    fn test_mixed_representations_agree() {
        let dense = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let sparse = Matrix::from(
            ketsim_matrices::SparseMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]])
                .unwrap(),
        );
        let from_dense = tensor_product(&IDENTITY, &dense);
        let from_sparse = tensor_product(&IDENTITY, &sparse);
        assert_eq!(from_dense, from_sparse);
    }
}
