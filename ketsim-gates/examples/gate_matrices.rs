//! Example demonstrating gate construction
//!
//! Prints the single-qubit constants, widens them onto registers with
//! tensor products, and walks the truth tables of the controlled
//! builders.

use ketsim_gates::{
    control_phase, control_x, multi_gate, phase_shift, swap, tensor_product, Gate, HADAMARD,
    IDENTITY, PAULI_X, PAULI_Z,
};
use ketsim_matrices::Matrix;
use std::f64::consts::PI;

fn main() {
    println!("=== Gate Construction Examples ===\n");

    example_constants();
    example_tensor_products();
    example_controlled_gates();
}

fn example_constants() {
    println!("Example 1: Single-qubit gate matrices");
    println!("-------------------------------------");

    println!("Identity:\n{}\n", *IDENTITY);
    println!("Pauli-X:\n{}\n", *PAULI_X);
    println!("Pauli-Z:\n{}\n", *PAULI_Z);
    println!("Hadamard:\n{}\n", *HADAMARD);
    println!("Phase shift π/4:\n{}\n", phase_shift(PI / 4.0));
}

fn example_tensor_products() {
    println!("Example 2: Tensor products");
    println!("--------------------------");

    println!("X ⊗ Z:\n{}\n", tensor_product(&PAULI_X, &PAULI_Z));

    let wall = multi_gate(2, &[0, 1], Gate::Hadamard).unwrap();
    println!("H ⊗ H:\n{}\n", wall);
}

fn example_controlled_gates() {
    println!("Example 3: Controlled gates on two qubits");
    println!("-----------------------------------------");

    let cx = control_x(2, &[0], 1).unwrap();
    println!("CX (control 0, target 1):\n{}\n", cx);

    println!("CX truth table:");
    for input in 0..4 {
        let ket = Matrix::basis_column(4, input).unwrap();
        let output = cx.dot(&ket).unwrap();
        let observed = (0..4)
            .find(|&row| output.get(row, 0).unwrap().re > 0.5)
            .unwrap();
        println!("  |{:02b}⟩ -> |{:02b}⟩", input, observed);
    }

    let cphase = control_phase(2, &[0], 1, PI / 2.0).unwrap();
    println!("\nControlled phase π/2:\n{}\n", cphase);

    println!("SWAP:\n{}", swap(2, 0, 1).unwrap());
}
