//! Example demonstrating quantum phase estimation
//!
//! Reads the eigenphase of a single-qubit phase gate out of a
//! three-qubit counting register, for both exactly representable and
//! inexact phases.

use ketsim_gates::{phase_shift, KET_ONE};
use ketsim_sim::phase_estimation::{optimum_counting_qubits, PhaseEstimation};
use std::f64::consts::PI;

fn main() {
    println!("=== Phase Estimation Examples ===\n");

    example_dyadic_phase();
    example_inexact_phase();
    example_register_sizing();
}

fn example_dyadic_phase() {
    println!("Example 1: Phase 3/8 with three counting qubits");
    println!("------------------------------------------------");

    let unitary = phase_shift(2.0 * PI * 3.0 / 8.0);
    let pe = PhaseEstimation::new(3, &unitary, &KET_ONE).unwrap();

    let probabilities = pe.run().unwrap();
    for (value, probability) in probabilities.iter().enumerate() {
        println!("  counting {:03b}: {:.4}", value, probability);
    }

    let (phase, probability) = pe.estimate().unwrap();
    println!("Estimate: {} (probability {:.4})", phase, probability);
    println!();
}

fn example_inexact_phase() {
    println!("Example 2: Phase 0.2 spreads over its neighbours");
    println!("-------------------------------------------------");

    let unitary = phase_shift(2.0 * PI * 0.2);
    let pe = PhaseEstimation::new(3, &unitary, &KET_ONE).unwrap();

    let probabilities = pe.run().unwrap();
    for (value, probability) in probabilities.iter().enumerate() {
        println!(
            "  counting {:03b}: {:.4}  (phase {:.3})",
            value,
            probability,
            value as f64 / 8.0
        );
    }

    let (phase, probability) = pe.estimate().unwrap();
    println!("Best estimate: {} (probability {:.4})", phase, probability);
    println!();
}

fn example_register_sizing() {
    println!("Example 3: Counting qubits for a target precision");
    println!("--------------------------------------------------");

    for (precision, error) in [(3, 0.1), (4, 0.05), (6, 0.01)] {
        println!(
            "  {} bits at failure rate {}: {} counting qubits",
            precision,
            error,
            optimum_counting_qubits(precision, error).unwrap()
        );
    }
}
