//! Dense and sparse representations must be observationally equivalent:
//! the same logical content run through the same operations materializes
//! to the same nested rows.

use ketsim_matrices::{Complex64, DenseMatrix, Matrix, SparseMatrix};

fn sample_rows() -> Vec<Vec<Complex64>> {
    vec![
        vec![Complex64::new(1.0, 0.5), Complex64::new(0.0, 0.0)],
        vec![Complex64::new(-2.0, 0.0), Complex64::new(0.0, -1.0)],
    ]
}

fn both_representations() -> (Matrix, Matrix) {
    let dense = Matrix::from(DenseMatrix::from_rows(sample_rows()).unwrap());
    let sparse = Matrix::from(SparseMatrix::from_rows(sample_rows()).unwrap());
    (dense, sparse)
}

#[test]
fn test_construction_compares_equal() {
    let (dense, sparse) = both_representations();
    assert_eq!(dense, sparse);
    assert_eq!(dense.rows(), sparse.rows());
}

#[test]
fn test_add_matches_across_representations() {
    let (dense, sparse) = both_representations();
    let other_dense = Matrix::from_rows(vec![vec![0.5, 1.0], vec![1.5, 2.0]]).unwrap();
    let other_sparse = Matrix::from(
        SparseMatrix::from_rows(vec![vec![0.5, 1.0], vec![1.5, 2.0]]).unwrap(),
    );
    assert_eq!(
        dense.add(&other_dense).unwrap().rows(),
        sparse.add(&other_sparse).unwrap().rows()
    );
}

#[test]
fn test_sub_matches_across_representations() {
    let (dense, sparse) = both_representations();
    let id = Matrix::identity(2).unwrap();
    assert_eq!(
        dense.sub(&id).unwrap().rows(),
        sparse.sub(&id).unwrap().rows()
    );
}

#[test]
fn test_scalar_mul_matches_across_representations() {
    let (dense, sparse) = both_representations();
    let factor = Complex64::new(0.0, 2.0);
    assert_eq!(
        dense.scalar_mul(factor).rows(),
        sparse.scalar_mul(factor).rows()
    );
}

#[test]
fn test_dot_matches_across_representations() {
    let (dense, sparse) = both_representations();
    let operand = Matrix::from_rows(vec![vec![1.0, 1.0], vec![0.0, 1.0]]).unwrap();
    assert_eq!(
        dense.dot(&operand).unwrap().rows(),
        sparse.dot(&operand).unwrap().rows()
    );
}

#[test]
fn test_transpose_and_conjugate_match() {
    let (dense, sparse) = both_representations();
    assert_eq!(dense.transpose().rows(), sparse.transpose().rows());
    assert_eq!(dense.conjugate().rows(), sparse.conjugate().rows());
    assert_eq!(dense.adjoint().rows(), sparse.adjoint().rows());
}

#[test]
fn test_identity_is_multiplicative_unit() {
    let (dense, sparse) = both_representations();
    let id = Matrix::identity(2).unwrap();
    assert_eq!(dense.dot(&id).unwrap(), dense);
    assert_eq!(id.dot(&dense).unwrap(), dense);
    assert_eq!(sparse.dot(&id).unwrap(), sparse);
    assert_eq!(id.dot(&sparse).unwrap(), sparse);
}

#[test]
fn test_trace_and_unitarity_agree() {
    let (dense, sparse) = both_representations();
    assert_eq!(dense.trace().unwrap(), sparse.trace().unwrap());
    assert_eq!(dense.is_unitary(), sparse.is_unitary());
}
