//! Dense matrix storage
//!
//! Row-major full storage for small operators (single- and two-qubit
//! gates, basis vectors). Composite circuit operators should prefer
//! [`SparseMatrix`](crate::SparseMatrix), which only stores non-zero
//! entries.

use crate::error::{MatrixError, Result};
use crate::sparse::SparseMatrix;
use crate::{is_negligible, ONE, ZERO, ZERO_TOLERANCE};
use num_complex::Complex64;

/// Dense complex matrix with row-major flattened storage.
///
/// Every producing operation returns a new matrix; operands are never
/// modified. Dimensions are fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix {
    num_rows: usize,
    num_columns: usize,
    /// Flattened entries, indexed as `row * num_columns + column`.
    entries: Vec<Complex64>,
}

impl DenseMatrix {
    /// Create an all-zero matrix.
    ///
    /// # Errors
    /// Returns [`MatrixError::InvalidDimension`] if either dimension is zero.
    pub fn zeros(num_rows: usize, num_columns: usize) -> Result<Self> {
        if num_rows == 0 || num_columns == 0 {
            return Err(MatrixError::InvalidDimension {
                dimension: num_rows.min(num_columns),
            });
        }
        Ok(Self {
            num_rows,
            num_columns,
            entries: vec![ZERO; num_rows * num_columns],
        })
    }

    /// Create the `dimension` x `dimension` identity matrix.
    pub fn identity(dimension: usize) -> Result<Self> {
        let mut matrix = Self::zeros(dimension, dimension)?;
        for i in 0..dimension {
            matrix.entries[i * dimension + i] = ONE;
        }
        Ok(matrix)
    }

    /// Build a matrix from nested rows of scalars.
    ///
    /// Accepts any scalar convertible to [`Complex64`], so plain `f64`
    /// literals work:
    ///
    /// ```
    /// use ketsim_matrices::DenseMatrix;
    ///
    /// let m = DenseMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    /// assert_eq!(m.num_rows(), 2);
    /// assert_eq!(m.get(1, 0).unwrap().re, 3.0);
    /// ```
    ///
    /// # Errors
    /// Returns [`MatrixError::InvalidDimension`] for an empty literal and
    /// [`MatrixError::RaggedRows`] if the rows have differing lengths.
    pub fn from_rows<T: Into<Complex64>>(rows: Vec<Vec<T>>) -> Result<Self> {
        let num_rows = rows.len();
        let num_columns = rows.first().map_or(0, Vec::len);
        if num_rows == 0 || num_columns == 0 {
            return Err(MatrixError::InvalidDimension { dimension: 0 });
        }
        let mut entries = Vec::with_capacity(num_rows * num_columns);
        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != num_columns {
                return Err(MatrixError::RaggedRows {
                    row: index,
                    expected: num_columns,
                    actual: row.len(),
                });
            }
            entries.extend(row.into_iter().map(Into::into));
        }
        Ok(Self {
            num_rows,
            num_columns,
            entries,
        })
    }

    /// Materialize a sparse matrix into dense storage.
    pub fn from_sparse(sparse: &SparseMatrix) -> Self {
        let num_rows = sparse.num_rows();
        let num_columns = sparse.num_columns();
        let mut entries = vec![ZERO; num_rows * num_columns];
        for (row, column, value) in sparse.iter() {
            entries[row * num_columns + column] = value;
        }
        Self {
            num_rows,
            num_columns,
            entries,
        }
    }

    /// Number of rows.
    #[inline]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Number of columns.
    #[inline]
    pub fn num_columns(&self) -> usize {
        self.num_columns
    }

    fn check_bounds(&self, row: usize, column: usize) -> Result<()> {
        if row >= self.num_rows || column >= self.num_columns {
            return Err(MatrixError::index_out_of_range(
                row,
                column,
                (self.num_rows, self.num_columns),
            ));
        }
        Ok(())
    }

    /// Entry at `(row, column)`.
    ///
    /// # Errors
    /// Returns [`MatrixError::IndexOutOfRange`] outside the matrix bounds.
    pub fn get(&self, row: usize, column: usize) -> Result<Complex64> {
        self.check_bounds(row, column)?;
        Ok(self.entries[row * self.num_columns + column])
    }

    /// Overwrite the entry at `(row, column)`.
    ///
    /// # Errors
    /// Returns [`MatrixError::IndexOutOfRange`] outside the matrix bounds.
    pub fn set(&mut self, row: usize, column: usize, value: impl Into<Complex64>) -> Result<()> {
        self.check_bounds(row, column)?;
        self.entries[row * self.num_columns + column] = value.into();
        Ok(())
    }

    fn check_same_shape(&self, other: &Self) -> Result<()> {
        if self.num_rows != other.num_rows || self.num_columns != other.num_columns {
            return Err(MatrixError::dimension_mismatch(
                (self.num_rows, self.num_columns),
                (other.num_rows, other.num_columns),
            ));
        }
        Ok(())
    }

    /// Element-wise sum.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(other)?;
        let entries = self
            .entries
            .iter()
            .zip(&other.entries)
            .map(|(a, b)| a + b)
            .collect();
        Ok(Self {
            num_rows: self.num_rows,
            num_columns: self.num_columns,
            entries,
        })
    }

    /// Element-wise difference.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(other)?;
        let entries = self
            .entries
            .iter()
            .zip(&other.entries)
            .map(|(a, b)| a - b)
            .collect();
        Ok(Self {
            num_rows: self.num_rows,
            num_columns: self.num_columns,
            entries,
        })
    }

    /// Scale every entry by `scalar`.
    pub fn scalar_mul(&self, scalar: impl Into<Complex64>) -> Self {
        let scalar = scalar.into();
        Self {
            num_rows: self.num_rows,
            num_columns: self.num_columns,
            entries: self.entries.iter().map(|v| v * scalar).collect(),
        }
    }

    /// Matrix product `self · other`.
    ///
    /// # Errors
    /// Returns [`MatrixError::DimensionMismatch`] unless
    /// `self.num_columns == other.num_rows`.
    pub fn dot(&self, other: &Self) -> Result<Self> {
        if self.num_columns != other.num_rows {
            return Err(MatrixError::dimension_mismatch(
                (self.num_rows, self.num_columns),
                (other.num_rows, other.num_columns),
            ));
        }
        let mut entries = vec![ZERO; self.num_rows * other.num_columns];
        for i in 0..self.num_rows {
            for j in 0..other.num_columns {
                let mut sum = ZERO;
                for k in 0..self.num_columns {
                    sum += self.entries[i * self.num_columns + k]
                        * other.entries[k * other.num_columns + j];
                }
                entries[i * other.num_columns + j] = sum;
            }
        }
        Ok(Self {
            num_rows: self.num_rows,
            num_columns: other.num_columns,
            entries,
        })
    }

    /// Transposed copy.
    pub fn transpose(&self) -> Self {
        let mut entries = Vec::with_capacity(self.entries.len());
        for column in 0..self.num_columns {
            for row in 0..self.num_rows {
                entries.push(self.entries[row * self.num_columns + column]);
            }
        }
        Self {
            num_rows: self.num_columns,
            num_columns: self.num_rows,
            entries,
        }
    }

    /// Entry-wise complex conjugate.
    pub fn conjugate(&self) -> Self {
        Self {
            num_rows: self.num_rows,
            num_columns: self.num_columns,
            entries: self.entries.iter().map(Complex64::conj).collect(),
        }
    }

    /// Conjugate transpose.
    pub fn adjoint(&self) -> Self {
        let mut entries = Vec::with_capacity(self.entries.len());
        for column in 0..self.num_columns {
            for row in 0..self.num_rows {
                entries.push(self.entries[row * self.num_columns + column].conj());
            }
        }
        Self {
            num_rows: self.num_columns,
            num_columns: self.num_rows,
            entries,
        }
    }

    /// Sum of the diagonal entries.
    ///
    /// # Errors
    /// Returns [`MatrixError::NotSquare`] for a rectangular matrix.
    pub fn trace(&self) -> Result<Complex64> {
        if self.num_rows != self.num_columns {
            return Err(MatrixError::NotSquare {
                num_rows: self.num_rows,
                num_columns: self.num_columns,
            });
        }
        let mut sum = ZERO;
        for i in 0..self.num_rows {
            sum += self.entries[i * self.num_columns + i];
        }
        Ok(sum)
    }

    /// True iff the matrix is square and `adjoint(M)·M ≈ I` entry-wise
    /// within [`ZERO_TOLERANCE`].
    pub fn is_unitary(&self) -> bool {
        if self.num_rows != self.num_columns {
            return false;
        }
        let product = match self.adjoint().dot(self) {
            Ok(product) => product,
            Err(_) => return false,
        };
        let n = self.num_rows;
        for row in 0..n {
            for column in 0..n {
                let expected = if row == column { ONE } else { ZERO };
                if (product.entries[row * n + column] - expected).norm() > ZERO_TOLERANCE {
                    return false;
                }
            }
        }
        true
    }

    /// Materialize to nested rows, the canonical logical content.
    pub fn rows(&self) -> Vec<Vec<Complex64>> {
        self.entries
            .chunks(self.num_columns)
            .map(<[Complex64]>::to_vec)
            .collect()
    }

    /// Number of entries with magnitude above [`ZERO_TOLERANCE`].
    pub fn nnz(&self) -> usize {
        self.entries.iter().filter(|v| !is_negligible(**v)).count()
    }
}
