//! Example demonstrating Grover's search
//!
//! Builds the full circuit operator for a marked basis state, runs it
//! against |0…0⟩ and shows how the target probability behaves as the
//! register grows.

use ketsim_sim::measurement::sample;
use ketsim_sim::GroverCircuit;

// Simple random number generator for examples
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next(&mut self) -> f64 {
        // Linear congruential generator
        self.state = self.state.wrapping_mul(1103515245).wrapping_add(12345);
        ((self.state / 65536) % 32768) as f64 / 32768.0
    }
}

fn main() {
    println!("=== Grover Search Examples ===\n");

    example_three_qubits();
    example_sampling();
    example_scaling();
}

fn example_three_qubits() {
    println!("Example 1: Searching 3 qubits for |101⟩");
    println!("----------------------------------------");

    let search = GroverCircuit::new(3, 0b101).unwrap();
    println!("Reflections: {}", search.max_reflections());

    let probabilities = search.run().unwrap();
    for (state, probability) in probabilities.iter().enumerate() {
        println!("  |{:03b}⟩: {:.4}", state, probability);
    }
    println!();
}

fn example_sampling() {
    println!("Example 2: Simulated measurements");
    println!("---------------------------------");

    let search = GroverCircuit::new(3, 0b101).unwrap();
    let probabilities = search.run().unwrap();

    let mut rng = SimpleRng::new(42);
    let shots = 1000;
    let mut hits = 0;
    for _ in 0..shots {
        if sample(&probabilities, &mut || rng.next()) == 0b101 {
            hits += 1;
        }
    }

    println!("Shots: {}", shots);
    println!(
        "Observed |101⟩: {} ({:.1}%)",
        hits,
        hits as f64 / shots as f64 * 100.0
    );
    println!();
}

fn example_scaling() {
    println!("Example 3: Target probability by register size");
    println!("-----------------------------------------------");

    for size in 2..=6 {
        let search = GroverCircuit::new(size, 1).unwrap();
        let probabilities = search.run().unwrap();
        println!(
            "  {} qubits, {} reflections: target probability {:.4}",
            size,
            search.max_reflections(),
            probabilities[1]
        );
    }
}
