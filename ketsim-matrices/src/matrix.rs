//! Polymorphic matrix over the dense and sparse representations
//!
//! The rest of the simulator traffics in [`Matrix`], an enum over
//! [`DenseMatrix`] and [`SparseMatrix`]. The two representations are
//! observationally equivalent: equality is structural over the logical
//! content, and every operation accepts either variant on either side.
//! Mixed-representation arithmetic converts the right operand, so the
//! result keeps the left operand's representation.

use crate::dense::DenseMatrix;
use crate::error::Result;
use crate::sparse::{EntryMap, SparseMatrix};
use num_complex::Complex64;
use std::fmt;

/// A complex matrix in either dense or sparse representation.
///
/// ```
/// use ketsim_matrices::{DenseMatrix, Matrix, SparseMatrix};
///
/// let dense = Matrix::from(DenseMatrix::identity(2).unwrap());
/// let sparse = Matrix::from(SparseMatrix::identity(2).unwrap());
/// assert_eq!(dense, sparse);
/// ```
#[derive(Debug, Clone)]
pub enum Matrix {
    /// Row-major full storage.
    Dense(DenseMatrix),
    /// Row -> column -> value storage of the non-zero entries.
    Sparse(SparseMatrix),
}

impl Matrix {
    /// The n x n identity, in sparse representation.
    pub fn identity(dimension: usize) -> Result<Self> {
        Ok(Self::Sparse(SparseMatrix::identity(dimension)?))
    }

    /// An all-zero matrix, in sparse representation.
    pub fn zeros(num_rows: usize, num_columns: usize) -> Result<Self> {
        Ok(Self::Sparse(SparseMatrix::zeros(num_rows, num_columns)?))
    }

    /// A dense matrix from nested rows of scalars.
    pub fn from_rows<T: Into<Complex64>>(rows: Vec<Vec<T>>) -> Result<Self> {
        Ok(Self::Dense(DenseMatrix::from_rows(rows)?))
    }

    /// A sparse matrix from an explicit row -> column -> value map.
    pub fn from_sparse_map(entries: EntryMap, num_rows: usize, num_columns: usize) -> Result<Self> {
        Ok(Self::Sparse(SparseMatrix::from_map(
            entries,
            num_rows,
            num_columns,
        )?))
    }

    /// The computational basis state |index⟩ as a sparse column vector.
    pub fn basis_column(dimension: usize, index: usize) -> Result<Self> {
        Ok(Self::Sparse(SparseMatrix::basis_column(dimension, index)?))
    }

    /// Number of rows.
    #[inline]
    pub fn num_rows(&self) -> usize {
        match self {
            Self::Dense(m) => m.num_rows(),
            Self::Sparse(m) => m.num_rows(),
        }
    }

    /// Number of columns.
    #[inline]
    pub fn num_columns(&self) -> usize {
        match self {
            Self::Dense(m) => m.num_columns(),
            Self::Sparse(m) => m.num_columns(),
        }
    }

    /// True for the dense representation.
    #[inline]
    pub fn is_dense(&self) -> bool {
        matches!(self, Self::Dense(_))
    }

    /// True for the sparse representation.
    #[inline]
    pub fn is_sparse(&self) -> bool {
        matches!(self, Self::Sparse(_))
    }

    /// The current representation as a string, for diagnostics.
    pub fn representation(&self) -> &'static str {
        match self {
            Self::Dense(_) => "Dense",
            Self::Sparse(_) => "Sparse",
        }
    }

    /// Entry at `(row, column)`.
    pub fn get(&self, row: usize, column: usize) -> Result<Complex64> {
        match self {
            Self::Dense(m) => m.get(row, column),
            Self::Sparse(m) => m.get(row, column),
        }
    }

    /// Overwrite the entry at `(row, column)`.
    pub fn set(&mut self, row: usize, column: usize, value: impl Into<Complex64>) -> Result<()> {
        match self {
            Self::Dense(m) => m.set(row, column, value),
            Self::Sparse(m) => m.set(row, column, value),
        }
    }

    /// Copy in dense representation.
    pub fn to_dense(&self) -> DenseMatrix {
        match self {
            Self::Dense(m) => m.clone(),
            Self::Sparse(m) => m.to_dense(),
        }
    }

    /// Copy in sparse representation, pruning near-zero values.
    pub fn to_sparse(&self) -> SparseMatrix {
        match self {
            Self::Dense(m) => SparseMatrix::from_dense(m),
            Self::Sparse(m) => m.clone(),
        }
    }

    /// Element-wise sum; the result keeps `self`'s representation.
    pub fn add(&self, other: &Matrix) -> Result<Matrix> {
        match (self, other) {
            (Self::Dense(a), Self::Dense(b)) => Ok(Self::Dense(a.add(b)?)),
            (Self::Sparse(a), Self::Sparse(b)) => Ok(Self::Sparse(a.add(b)?)),
            (Self::Dense(a), Self::Sparse(b)) => Ok(Self::Dense(a.add(&b.to_dense())?)),
            (Self::Sparse(a), Self::Dense(b)) => {
                Ok(Self::Sparse(a.add(&SparseMatrix::from_dense(b))?))
            }
        }
    }

    /// Element-wise difference; the result keeps `self`'s representation.
    pub fn sub(&self, other: &Matrix) -> Result<Matrix> {
        match (self, other) {
            (Self::Dense(a), Self::Dense(b)) => Ok(Self::Dense(a.sub(b)?)),
            (Self::Sparse(a), Self::Sparse(b)) => Ok(Self::Sparse(a.sub(b)?)),
            (Self::Dense(a), Self::Sparse(b)) => Ok(Self::Dense(a.sub(&b.to_dense())?)),
            (Self::Sparse(a), Self::Dense(b)) => {
                Ok(Self::Sparse(a.sub(&SparseMatrix::from_dense(b))?))
            }
        }
    }

    /// Scale every entry by `scalar`.
    pub fn scalar_mul(&self, scalar: impl Into<Complex64>) -> Matrix {
        match self {
            Self::Dense(m) => Self::Dense(m.scalar_mul(scalar)),
            Self::Sparse(m) => Self::Sparse(m.scalar_mul(scalar)),
        }
    }

    /// Matrix product `self · other`; the result keeps `self`'s
    /// representation, with a sparse-only fast path when both operands
    /// are sparse.
    pub fn dot(&self, other: &Matrix) -> Result<Matrix> {
        match (self, other) {
            (Self::Dense(a), Self::Dense(b)) => Ok(Self::Dense(a.dot(b)?)),
            (Self::Sparse(a), Self::Sparse(b)) => Ok(Self::Sparse(a.dot(b)?)),
            (Self::Dense(a), Self::Sparse(b)) => Ok(Self::Dense(a.dot(&b.to_dense())?)),
            (Self::Sparse(a), Self::Dense(b)) => {
                Ok(Self::Sparse(a.dot(&SparseMatrix::from_dense(b))?))
            }
        }
    }

    /// Transposed copy.
    pub fn transpose(&self) -> Matrix {
        match self {
            Self::Dense(m) => Self::Dense(m.transpose()),
            Self::Sparse(m) => Self::Sparse(m.transpose()),
        }
    }

    /// Entry-wise complex conjugate.
    pub fn conjugate(&self) -> Matrix {
        match self {
            Self::Dense(m) => Self::Dense(m.conjugate()),
            Self::Sparse(m) => Self::Sparse(m.conjugate()),
        }
    }

    /// Conjugate transpose.
    pub fn adjoint(&self) -> Matrix {
        match self {
            Self::Dense(m) => Self::Dense(m.adjoint()),
            Self::Sparse(m) => Self::Sparse(m.adjoint()),
        }
    }

    /// Sum of the diagonal entries.
    pub fn trace(&self) -> Result<Complex64> {
        match self {
            Self::Dense(m) => m.trace(),
            Self::Sparse(m) => m.trace(),
        }
    }

    /// True iff the matrix is square and `adjoint(M)·M ≈ I`.
    pub fn is_unitary(&self) -> bool {
        match self {
            Self::Dense(m) => m.is_unitary(),
            Self::Sparse(m) => m.is_unitary(),
        }
    }

    /// Materialize to nested rows, the canonical logical content.
    pub fn rows(&self) -> Vec<Vec<Complex64>> {
        match self {
            Self::Dense(m) => m.rows(),
            Self::Sparse(m) => m.rows(),
        }
    }

    /// Entry-wise comparison within `tolerance`, for float-valued
    /// operators that are not exactly representable.
    pub fn approx_eq(&self, other: &Matrix, tolerance: f64) -> bool {
        if self.num_rows() != other.num_rows() || self.num_columns() != other.num_columns() {
            return false;
        }
        self.rows()
            .into_iter()
            .zip(other.rows())
            .all(|(left, right)| {
                left.into_iter()
                    .zip(right)
                    .all(|(a, b)| (a - b).norm() <= tolerance)
            })
    }
}

impl From<DenseMatrix> for Matrix {
    fn from(matrix: DenseMatrix) -> Self {
        Self::Dense(matrix)
    }
}

impl From<SparseMatrix> for Matrix {
    fn from(matrix: SparseMatrix) -> Self {
        Self::Sparse(matrix)
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Dense(a), Self::Dense(b)) => a == b,
            (Self::Sparse(a), Self::Sparse(b)) => a == b,
            // Cross-representation comparison goes through the
            // materialized logical content.
            _ => {
                self.num_rows() == other.num_rows()
                    && self.num_columns() == other.num_columns()
                    && self.rows() == other.rows()
            }
        }
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().into_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let cells: Vec<String> = row.iter().map(|value| format!("{:.3}", value)).collect();
            write!(f, "[{}]", cells.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatrixError;
    use crate::{ONE, ZERO};

    #[test]
    fn test_cross_representation_equality() {
        let dense = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let sparse = Matrix::from(
            SparseMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap(),
        );
        assert!(dense.is_dense());
        assert!(sparse.is_sparse());
        assert_eq!(dense, sparse);
        assert_eq!(sparse, dense);

        let other = Matrix::identity(2).unwrap();
        assert_ne!(dense, other);
    }

    #[test]
    fn test_mixed_arithmetic_keeps_left_representation() {
        let dense = Matrix::from_rows(vec![vec![1.0, 0.0], vec![0.0, 1.0]]).unwrap();
        let sparse = Matrix::identity(2).unwrap();

        let sum = dense.add(&sparse).unwrap();
        assert!(sum.is_dense());
        assert_eq!(sum.get(0, 0).unwrap().re, 2.0);

        let product = sparse.dot(&dense).unwrap();
        assert!(product.is_sparse());
        assert_eq!(product, Matrix::identity(2).unwrap());
    }

    #[test]
    fn test_representation_conversions() {
        let sparse = Matrix::basis_column(4, 2).unwrap();
        let dense = Matrix::from(sparse.to_dense());
        assert_eq!(sparse, dense);
        assert_eq!(dense.to_sparse().nnz(), 1);
    }

    #[test]
    fn test_dispatch_matches_concrete_results() {
        let m = Matrix::from_rows(vec![
            vec![Complex64::new(0.0, 1.0), ZERO],
            vec![ZERO, Complex64::new(0.0, -1.0)],
        ])
        .unwrap();

        assert_eq!(m.conjugate().get(0, 0).unwrap(), Complex64::new(0.0, -1.0));
        assert_eq!(m.adjoint().get(0, 0).unwrap(), Complex64::new(0.0, -1.0));
        assert_eq!(m.trace().unwrap(), ZERO);
        assert!(m.is_unitary());
        assert_eq!(m.scalar_mul(2.0).get(1, 1).unwrap(), Complex64::new(0.0, -2.0));
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert!(matches!(
            Matrix::identity(0),
            Err(MatrixError::InvalidDimension { .. })
        ));
        assert!(matches!(
            Matrix::zeros(0, 1),
            Err(MatrixError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_approx_eq() {
        let a = Matrix::from_rows(vec![vec![1.0, 0.0], vec![0.0, 1.0]]).unwrap();
        let mut b = a.clone();
        b.set(0, 0, 1.0 + 1e-12).unwrap();
        assert_ne!(a, b);
        assert!(a.approx_eq(&b, 1e-9));
        assert!(!a.approx_eq(&b, 1e-15));

        let c = Matrix::identity(3).unwrap();
        assert!(!a.approx_eq(&c, 1.0));
    }

    #[test]
    fn test_display_lists_rows() {
        let m = Matrix::from_rows(vec![vec![1.0, 0.0], vec![0.0, 1.0]]).unwrap();
        let printed = m.to_string();
        assert_eq!(printed.lines().count(), 2);
        assert!(printed.starts_with('['));
    }

    #[test]
    fn test_set_on_enum() {
        let mut m = Matrix::zeros(2, 2).unwrap();
        m.set(0, 1, ONE).unwrap();
        assert_eq!(m.get(0, 1).unwrap(), ONE);
        assert!(m.set(5, 0, ONE).is_err());
    }
}
