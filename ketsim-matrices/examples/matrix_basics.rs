//! Example demonstrating the two matrix representations
//!
//! Builds the same operators densely and sparsely, runs the shared
//! arithmetic on both, and shows where sparse storage pays off.

use ketsim_matrices::{Complex64, Matrix, SparseMatrix};

fn main() {
    println!("=== Matrix Representation Examples ===\n");

    example_construction();
    example_arithmetic();
    example_sparse_scaling();
}

fn example_construction() {
    println!("Example 1: Dense and sparse construction");
    println!("----------------------------------------");

    let dense = Matrix::from_rows(vec![vec![1.0, 0.0], vec![0.0, -1.0]]).unwrap();
    println!("Dense ({}):\n{}", dense.representation(), dense);

    let mut sparse = Matrix::zeros(2, 2).unwrap();
    sparse.set(0, 0, 1.0).unwrap();
    sparse.set(1, 1, Complex64::new(-1.0, 0.0)).unwrap();
    println!("\nSparse ({}):\n{}", sparse.representation(), sparse);

    println!("\nEqual as matrices: {}", dense == sparse);
    println!();
}

fn example_arithmetic() {
    println!("Example 2: Shared operations");
    println!("----------------------------");

    let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    let identity = Matrix::identity(2).unwrap();

    println!("A + I:\n{}", a.add(&identity).unwrap());
    println!("\nA · I:\n{}", a.dot(&identity).unwrap());
    println!("\nA†:\n{}", a.adjoint());

    println!("\ntrace(A) = {}", a.trace().unwrap());
    println!("A unitary: {}", a.is_unitary());
    println!("I unitary: {}", identity.is_unitary());
    println!();
}

fn example_sparse_scaling() {
    println!("Example 3: Sparse storage of large operators");
    println!("--------------------------------------------");

    for dimension in [16, 64, 256, 1024] {
        let identity = SparseMatrix::identity(dimension).unwrap();
        println!(
            "  {}x{} identity: {} stored entries (density {:.4})",
            dimension,
            dimension,
            identity.nnz(),
            identity.density()
        );
    }
}
