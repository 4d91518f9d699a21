//! Matrix layer for the ketsim quantum circuit simulator
//!
//! This crate provides the linear-algebra substrate the gate builders
//! and algorithms are written against:
//!
//! - [`DenseMatrix`]: row-major full storage for small operators
//! - [`SparseMatrix`]: row -> column -> value storage for the
//!   exponentially large composite operators and state vectors
//! - [`Matrix`]: the polymorphic enum over both representations, with
//!   structural equality and mixed-representation arithmetic
//!
//! All operations are pure: operands are never mutated, every producing
//! operation returns a new value. Values with magnitude at or below
//! [`ZERO_TOLERANCE`] are treated as zero and never stored sparsely.

pub mod dense;
pub mod error;
pub mod matrix;
pub mod sparse;

pub use dense::DenseMatrix;
pub use error::{MatrixError, Result};
pub use matrix::Matrix;
pub use sparse::{EntryMap, SparseMatrix};

// Re-export the scalar type for convenience
pub use num_complex::Complex64;

/// Complex zero.
pub const ZERO: Complex64 = Complex64::new(0.0, 0.0);

/// Complex one.
pub const ONE: Complex64 = Complex64::new(1.0, 0.0);

/// Magnitude at or below which a value is treated as zero.
pub const ZERO_TOLERANCE: f64 = 1e-9;

/// True when `value` is within [`ZERO_TOLERANCE`] of zero.
#[inline]
pub fn is_negligible(value: Complex64) -> bool {
    value.norm_sqr() <= ZERO_TOLERANCE * ZERO_TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_negligible_boundary() {
        assert!(is_negligible(ZERO));
        assert!(is_negligible(Complex64::new(1e-9, 0.0)));
        assert!(is_negligible(Complex64::new(0.0, -1e-9)));
        assert!(!is_negligible(Complex64::new(1.1e-9, 0.0)));
        assert!(!is_negligible(ONE));
    }
}
