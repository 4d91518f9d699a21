//! Example demonstrating the binary sudoku search
//!
//! Amplifies the two 2x2 grid assignments whose rows and columns all
//! differ, then prints the marginal probability of every assignment
//! and one sampled grid.

use ketsim_sim::SudokuCircuit;

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
    println!("=== Binary Sudoku Search ===\n");

    let puzzle = SudokuCircuit::new().unwrap();
    let probabilities = puzzle.solution_probabilities().unwrap();

    println!("Cell assignment probabilities (cells 0-3, row-major):");
    for (value, probability) in probabilities.iter().enumerate() {
        let marker = if *probability > 0.25 { "  <-- valid" } else { "" };
        println!("  {:04b}: {:.4}{}", value, probability, marker);
    }

    let mut rng = SimpleRng::new(42);
    let (observed, probability) = puzzle.sample_solution(&mut || rng.next()).unwrap();

    println!("\nSampled grid {:04b} (probability {:.4}):", observed, probability);
    println!("  {} {}", observed & 1, (observed >> 1) & 1);
    println!("  {} {}", (observed >> 2) & 1, (observed >> 3) & 1);
}
