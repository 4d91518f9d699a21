//! Error types for matrix construction and arithmetic

use thiserror::Error;

/// Result type for matrix operations
pub type Result<T> = std::result::Result<T, MatrixError>;

/// Errors that can occur when constructing or combining matrices
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// A matrix was requested with a zero-sized dimension
    #[error("matrix dimensions must be positive, got {dimension}")]
    InvalidDimension { dimension: usize },

    /// An entry was addressed outside the matrix bounds
    #[error("index ({row}, {column}) out of range for a {num_rows}x{num_columns} matrix")]
    IndexOutOfRange {
        row: usize,
        column: usize,
        num_rows: usize,
        num_columns: usize,
    },

    /// Two operands have shapes the operation cannot combine
    #[error(
        "dimension mismatch: left operand is {left_rows}x{left_columns}, \
         right operand is {right_rows}x{right_columns}"
    )]
    DimensionMismatch {
        left_rows: usize,
        left_columns: usize,
        right_rows: usize,
        right_columns: usize,
    },

    /// A square-only operation was applied to a rectangular matrix
    #[error("matrix is {num_rows}x{num_columns}, expected square")]
    NotSquare { num_rows: usize, num_columns: usize },

    /// A nested-row literal had rows of differing lengths
    #[error("row {row} has {actual} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

impl MatrixError {
    /// Convenience constructor for an out-of-range index error
    pub fn index_out_of_range(row: usize, column: usize, shape: (usize, usize)) -> Self {
        Self::IndexOutOfRange {
            row,
            column,
            num_rows: shape.0,
            num_columns: shape.1,
        }
    }

    /// Convenience constructor for a shape-mismatch error
    pub fn dimension_mismatch(left: (usize, usize), right: (usize, usize)) -> Self {
        Self::DimensionMismatch {
            left_rows: left.0,
            left_columns: left.1,
            right_rows: right.0,
            right_columns: right.1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = MatrixError::index_out_of_range(4, 0, (4, 1));
        assert_eq!(
            err.to_string(),
            "index (4, 0) out of range for a 4x1 matrix"
        );

        let err = MatrixError::dimension_mismatch((2, 3), (2, 3));
        assert!(err.to_string().contains("2x3"));

        let err = MatrixError::NotSquare {
            num_rows: 2,
            num_columns: 4,
        };
        assert_eq!(err.to_string(), "matrix is 2x4, expected square");
    }

    #[test]
    fn test_invalid_dimension_message() {
        let err = MatrixError::InvalidDimension { dimension: 0 };
        assert_eq!(err.to_string(), "matrix dimensions must be positive, got 0");
    }
}
