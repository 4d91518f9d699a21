//! Sparse matrix storage
//!
//! Composite circuit operators on n qubits are 2^n x 2^n but mostly
//! zero (permutations, diagonals, projector sums), so they are stored
//! as a row -> column -> value map holding only non-zero entries.
//! Entries within [`ZERO_TOLERANCE`](crate::ZERO_TOLERANCE) of zero are
//! pruned by every producing operation, keeping the storage invariant:
//! no stored value is negligible and no stored row is empty.

use crate::dense::DenseMatrix;
use crate::error::{MatrixError, Result};
use crate::{is_negligible, ONE, ZERO, ZERO_TOLERANCE};
use ahash::AHashMap;
use num_complex::Complex64;

/// Nested index map: row -> column -> non-zero value.
pub type EntryMap = AHashMap<usize, AHashMap<usize, Complex64>>;

/// Sparse complex matrix storing only non-zero entries.
///
/// Absent `(row, column)` pairs read as zero. Every producing operation
/// returns a new matrix and leaves its operands untouched, so a gate
/// matrix can be reused as an operand across many compositions.
#[derive(Debug, Clone)]
pub struct SparseMatrix {
    num_rows: usize,
    num_columns: usize,
    entries: EntryMap,
}

/// Drop negligible values and empty rows after an accumulation pass.
fn prune(entries: &mut EntryMap) {
    for columns in entries.values_mut() {
        columns.retain(|_, value| !is_negligible(*value));
    }
    entries.retain(|_, columns| !columns.is_empty());
}

impl SparseMatrix {
    /// Create an all-zero matrix (no stored entries).
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
            entries: EntryMap::new(),
        })
    }

    /// Create the `dimension` x `dimension` identity matrix.
    pub fn identity(dimension: usize) -> Result<Self> {
        let mut matrix = Self::zeros(dimension, dimension)?;
        for i in 0..dimension {
            matrix.entries.entry(i).or_default().insert(i, ONE);
        }
        Ok(matrix)
    }

    /// Build a sparse matrix from nested rows, pruning near-zero values.
    ///
    /// ```
    /// use ketsim_matrices::SparseMatrix;
    ///
    /// let m = SparseMatrix::from_rows(vec![vec![1.0, 0.0], vec![0.0, 1e-12]]).unwrap();
    /// assert_eq!(m.nnz(), 1);
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
        let mut entries = EntryMap::new();
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != num_columns {
                return Err(MatrixError::RaggedRows {
                    row,
                    expected: num_columns,
                    actual: values.len(),
                });
            }
            for (column, value) in values.into_iter().enumerate() {
                let value = value.into();
                if !is_negligible(value) {
                    entries.entry(row).or_default().insert(column, value);
                }
            }
        }
        Ok(Self {
            num_rows,
            num_columns,
            entries,
        })
    }

    /// Build a sparse matrix from an explicit row -> column -> value map
    /// with the stated dimensions.
    ///
    /// # Errors
    /// Returns [`MatrixError::InvalidDimension`] for zero dimensions and
    /// [`MatrixError::IndexOutOfRange`] if any entry lies outside them.
    pub fn from_map(entries: EntryMap, num_rows: usize, num_columns: usize) -> Result<Self> {
        if num_rows == 0 || num_columns == 0 {
            return Err(MatrixError::InvalidDimension {
                dimension: num_rows.min(num_columns),
            });
        }
        let mut pruned = EntryMap::with_capacity(entries.len());
        for (row, columns) in entries {
            for (column, value) in columns {
                if row >= num_rows || column >= num_columns {
                    return Err(MatrixError::index_out_of_range(
                        row,
                        column,
                        (num_rows, num_columns),
                    ));
                }
                if !is_negligible(value) {
                    pruned.entry(row).or_default().insert(column, value);
                }
            }
        }
        Ok(Self {
            num_rows,
            num_columns,
            entries: pruned,
        })
    }

    /// Column vector of the given dimension with a single 1 at `index`,
    /// i.e. the computational basis state |index⟩.
    pub fn basis_column(dimension: usize, index: usize) -> Result<Self> {
        let mut matrix = Self::zeros(dimension, 1)?;
        if index >= dimension {
            return Err(MatrixError::index_out_of_range(index, 0, (dimension, 1)));
        }
        matrix.entries.entry(index).or_default().insert(0, ONE);
        Ok(matrix)
    }

    /// Convert a dense matrix, pruning near-zero values.
    pub fn from_dense(dense: &DenseMatrix) -> Self {
        let mut entries = EntryMap::new();
        for (row, values) in dense.rows().into_iter().enumerate() {
            for (column, value) in values.into_iter().enumerate() {
                if !is_negligible(value) {
                    entries.entry(row).or_default().insert(column, value);
                }
            }
        }
        Self {
            num_rows: dense.num_rows(),
            num_columns: dense.num_columns(),
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

    /// Number of stored (non-zero) entries.
    pub fn nnz(&self) -> usize {
        self.entries.values().map(|columns| columns.len()).sum()
    }

    /// Fraction of logical entries that are non-zero.
    pub fn density(&self) -> f64 {
        self.nnz() as f64 / (self.num_rows * self.num_columns) as f64
    }

    /// Iterate the stored `(row, column, value)` triples in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Complex64)> + '_ {
        self.entries.iter().flat_map(|(&row, columns)| {
            columns
                .iter()
                .map(move |(&column, &value)| (row, column, value))
        })
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

    /// Entry at `(row, column)`; absent entries read as zero.
    ///
    /// # Errors
    /// Returns [`MatrixError::IndexOutOfRange`] outside the matrix bounds.
    pub fn get(&self, row: usize, column: usize) -> Result<Complex64> {
        self.check_bounds(row, column)?;
        Ok(self
            .entries
            .get(&row)
            .and_then(|columns| columns.get(&column))
            .copied()
            .unwrap_or(ZERO))
    }

    /// Overwrite the entry at `(row, column)`, dropping it from storage
    /// when the new value is negligible.
    ///
    /// # Errors
    /// Returns [`MatrixError::IndexOutOfRange`] outside the matrix bounds.
    pub fn set(&mut self, row: usize, column: usize, value: impl Into<Complex64>) -> Result<()> {
        self.check_bounds(row, column)?;
        let value = value.into();
        if is_negligible(value) {
            if let Some(columns) = self.entries.get_mut(&row) {
                columns.remove(&column);
                if columns.is_empty() {
                    self.entries.remove(&row);
                }
            }
        } else {
            self.entries.entry(row).or_default().insert(column, value);
        }
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
        let mut entries = self.entries.clone();
        for (row, column, value) in other.iter() {
            *entries.entry(row).or_default().entry(column).or_insert(ZERO) += value;
        }
        prune(&mut entries);
        Ok(Self {
            num_rows: self.num_rows,
            num_columns: self.num_columns,
            entries,
        })
    }

    /// Element-wise difference.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(other)?;
        let mut entries = self.entries.clone();
        for (row, column, value) in other.iter() {
            *entries.entry(row).or_default().entry(column).or_insert(ZERO) -= value;
        }
        prune(&mut entries);
        Ok(Self {
            num_rows: self.num_rows,
            num_columns: self.num_columns,
            entries,
        })
    }

    /// Scale every entry by `scalar`.
    pub fn scalar_mul(&self, scalar: impl Into<Complex64>) -> Self {
        let scalar = scalar.into();
        let mut entries = EntryMap::with_capacity(self.entries.len());
        for (row, column, value) in self.iter() {
            let scaled = value * scalar;
            if !is_negligible(scaled) {
                entries.entry(row).or_default().insert(column, scaled);
            }
        }
        Self {
            num_rows: self.num_rows,
            num_columns: self.num_columns,
            entries,
        }
    }

    /// Matrix product `self · other`, touching only stored entries.
    ///
    /// Cost is O(nnz(self) · columns-per-row(other)) rather than the
    /// O(n³) of the dense triple loop.
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
        let mut entries = EntryMap::with_capacity(self.entries.len());
        for (&row, columns) in &self.entries {
            let out_row = entries.entry(row).or_default();
            for (&k, &left) in columns {
                if let Some(other_row) = other.entries.get(&k) {
                    for (&column, &right) in other_row {
                        *out_row.entry(column).or_insert(ZERO) += left * right;
                    }
                }
            }
        }
        prune(&mut entries);
        Ok(Self {
            num_rows: self.num_rows,
            num_columns: other.num_columns,
            entries,
        })
    }

    /// Transposed copy.
    pub fn transpose(&self) -> Self {
        let mut entries = EntryMap::new();
        for (row, column, value) in self.iter() {
            entries.entry(column).or_default().insert(row, value);
        }
        Self {
            num_rows: self.num_columns,
            num_columns: self.num_rows,
            entries,
        }
    }

    /// Entry-wise complex conjugate.
    pub fn conjugate(&self) -> Self {
        let mut entries = EntryMap::with_capacity(self.entries.len());
        for (row, column, value) in self.iter() {
            entries.entry(row).or_default().insert(column, value.conj());
        }
        Self {
            num_rows: self.num_rows,
            num_columns: self.num_columns,
            entries,
        }
    }

    /// Conjugate transpose, in one pass.
    pub fn adjoint(&self) -> Self {
        let mut entries = EntryMap::new();
        for (row, column, value) in self.iter() {
            entries.entry(column).or_default().insert(row, value.conj());
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
        for (&row, columns) in &self.entries {
            if let Some(value) = columns.get(&row) {
                sum += value;
            }
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
        for i in 0..self.num_rows {
            let diagonal = product
                .entries
                .get(&i)
                .and_then(|columns| columns.get(&i))
                .copied()
                .unwrap_or(ZERO);
            if (diagonal - ONE).norm() > ZERO_TOLERANCE {
                return false;
            }
        }
        for (&row, columns) in &product.entries {
            for (&column, &value) in columns {
                if row != column && value.norm() > ZERO_TOLERANCE {
                    return false;
                }
            }
        }
        true
    }

    /// Materialize to nested rows, the canonical logical content.
    pub fn rows(&self) -> Vec<Vec<Complex64>> {
        let mut rows = vec![vec![ZERO; self.num_columns]; self.num_rows];
        for (row, column, value) in self.iter() {
            rows[row][column] = value;
        }
        rows
    }

    /// Materialize into dense storage.
    pub fn to_dense(&self) -> DenseMatrix {
        DenseMatrix::from_sparse(self)
    }
}

impl PartialEq for SparseMatrix {
    /// Structural equality over the logical content; the no-stored-zero
    /// invariant makes comparing stored entry sets sufficient.
    fn eq(&self, other: &Self) -> bool {
        if self.num_rows != other.num_rows
            || self.num_columns != other.num_columns
            || self.nnz() != other.nnz()
        {
            return false;
        }
        self.iter().all(|(row, column, value)| {
            other
                .entries
                .get(&row)
                .and_then(|columns| columns.get(&column))
                == Some(&value)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zeros_identity_shape() {
        let z = SparseMatrix::zeros(4, 2).unwrap();
        assert_eq!(z.nnz(), 0);
        assert_eq!(z.get(3, 1).unwrap(), ZERO);

        let id = SparseMatrix::identity(4).unwrap();
        assert_eq!(id.nnz(), 4);
        assert_eq!(id.get(2, 2).unwrap(), ONE);
        assert_eq!(id.get(2, 3).unwrap(), ZERO);
    }

    #[test]
    fn test_from_rows_prunes_near_zero() {
        let m = SparseMatrix::from_rows(vec![vec![1.0, 1e-10], vec![0.0, 2.0]]).unwrap();
        assert_eq!(m.nnz(), 2);
        assert_eq!(m.get(0, 1).unwrap(), ZERO);
        assert_eq!(m.get(1, 1).unwrap().re, 2.0);
    }

    #[test]
    fn test_from_map_validates_bounds() {
        let mut entries = EntryMap::new();
        entries.entry(0).or_default().insert(3, ONE);
        let err = SparseMatrix::from_map(entries, 2, 2).unwrap_err();
        assert!(matches!(err, MatrixError::IndexOutOfRange { .. }));

        let mut entries = EntryMap::new();
        entries.entry(1).or_default().insert(0, Complex64::new(0.5, 0.5));
        let m = SparseMatrix::from_map(entries, 2, 2).unwrap();
        assert_eq!(m.get(1, 0).unwrap(), Complex64::new(0.5, 0.5));
    }

    #[test]
    fn test_basis_column() {
        let ket = SparseMatrix::basis_column(8, 5).unwrap();
        assert_eq!(ket.num_rows(), 8);
        assert_eq!(ket.num_columns(), 1);
        assert_eq!(ket.nnz(), 1);
        assert_eq!(ket.get(5, 0).unwrap(), ONE);

        assert!(matches!(
            SparseMatrix::basis_column(4, 4),
            Err(MatrixError::IndexOutOfRange { .. })
        ));
    }

    #[test]
    fn test_add_leaves_operands_untouched() {
        let a = SparseMatrix::from_rows(vec![vec![1.0, 0.0], vec![0.0, 1.0]]).unwrap();
        let b = SparseMatrix::from_rows(vec![vec![0.0, 2.0], vec![3.0, 0.0]]).unwrap();

        let sum = a.add(&b).unwrap();
        assert_eq!(sum.get(0, 1).unwrap().re, 2.0);
        assert_eq!(sum.get(1, 0).unwrap().re, 3.0);
        assert_eq!(sum.nnz(), 4);

        // The same operand can be reused afterwards.
        assert_eq!(a.nnz(), 2);
        assert_eq!(b.nnz(), 2);
        let again = a.add(&b).unwrap();
        assert_eq!(again, sum);
    }

    #[test]
    fn test_sub_cancellation_prunes() {
        let a = SparseMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let diff = a.sub(&a).unwrap();
        assert_eq!(diff.nnz(), 0);
        assert_eq!(diff.rows(), SparseMatrix::zeros(2, 2).unwrap().rows());
    }

    #[test]
    fn test_scalar_mul_prunes_underflow() {
        let a = SparseMatrix::from_rows(vec![vec![1.0, 0.0], vec![0.0, 1e-6]]).unwrap();
        let scaled = a.scalar_mul(1e-6);
        // 1e-12 falls below the tolerance and is dropped.
        assert_eq!(scaled.nnz(), 1);
        assert_relative_eq!(scaled.get(0, 0).unwrap().re, 1e-6);
    }

    #[test]
    fn test_sparse_dot() {
        let a = SparseMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let id = SparseMatrix::identity(2).unwrap();
        assert_eq!(a.dot(&id).unwrap(), a);
        assert_eq!(id.dot(&a).unwrap(), a);

        let x = SparseMatrix::from_rows(vec![vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap();
        let product = a.dot(&x).unwrap();
        assert_eq!(product.get(0, 0).unwrap().re, 2.0);
        assert_eq!(product.get(1, 1).unwrap().re, 3.0);

        let mismatch = SparseMatrix::zeros(3, 3).unwrap();
        assert!(matches!(
            a.dot(&mismatch),
            Err(MatrixError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_dot_column_vector() {
        let x = SparseMatrix::from_rows(vec![vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap();
        let ket0 = SparseMatrix::basis_column(2, 0).unwrap();
        let flipped = x.dot(&ket0).unwrap();
        assert_eq!(flipped, SparseMatrix::basis_column(2, 1).unwrap());
    }

    #[test]
    fn test_transpose_adjoint() {
        let m = SparseMatrix::from_rows(vec![
            vec![Complex64::new(1.0, 1.0), ZERO],
            vec![Complex64::new(0.0, -2.0), ZERO],
        ])
        .unwrap();

        let t = m.transpose();
        assert_eq!(t.num_rows(), 2);
        assert_eq!(t.get(0, 1).unwrap(), Complex64::new(0.0, -2.0));

        let adj = m.adjoint();
        assert_eq!(adj.get(0, 1).unwrap(), Complex64::new(0.0, 2.0));
        assert_eq!(adj.get(0, 0).unwrap(), Complex64::new(1.0, -1.0));
        assert_eq!(adj, m.conjugate().transpose());
    }

    #[test]
    fn test_trace() {
        let m = SparseMatrix::from_rows(vec![vec![1.0, 5.0], vec![7.0, 2.0]]).unwrap();
        assert_eq!(m.trace().unwrap(), Complex64::new(3.0, 0.0));

        let rect = SparseMatrix::zeros(2, 3).unwrap();
        assert!(matches!(rect.trace(), Err(MatrixError::NotSquare { .. })));
    }

    #[test]
    fn test_is_unitary() {
        assert!(SparseMatrix::identity(8).unwrap().is_unitary());

        let x = SparseMatrix::from_rows(vec![vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap();
        assert!(x.is_unitary());

        let not_unitary = SparseMatrix::from_rows(vec![vec![1.0, 0.0], vec![0.0, 2.0]]).unwrap();
        assert!(!not_unitary.is_unitary());

        // Unit columns that are not orthogonal: the adjoint product has a
        // unit diagonal, so only its off-diagonal entries reject it.
        let f = std::f64::consts::FRAC_1_SQRT_2;
        let skewed = SparseMatrix::from_rows(vec![vec![1.0, f], vec![0.0, f]]).unwrap();
        assert!(!skewed.is_unitary());

        // All-zero matrix: adjoint product has no diagonal ones.
        assert!(!SparseMatrix::zeros(2, 2).unwrap().is_unitary());
    }

    #[test]
    fn test_structural_equality() {
        let a = SparseMatrix::from_rows(vec![vec![1.0, 0.0], vec![0.0, 1.0]]).unwrap();
        let b = SparseMatrix::identity(2).unwrap();
        assert_eq!(a, b);

        let c = SparseMatrix::from_rows(vec![vec![1.0, 0.0], vec![0.0, 2.0]]).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_set_maintains_invariant() {
        let mut m = SparseMatrix::identity(2).unwrap();
        m.set(0, 0, 0.0).unwrap();
        assert_eq!(m.nnz(), 1);
        m.set(0, 1, Complex64::new(0.0, 1.0)).unwrap();
        assert_eq!(m.get(0, 1).unwrap(), Complex64::new(0.0, 1.0));
        assert!(m.set(2, 0, 1.0).is_err());
    }
}
