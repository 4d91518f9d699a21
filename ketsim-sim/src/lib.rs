//! Measurement and reference algorithm circuits over [`ketsim_gates`]
//!
//! This crate turns the matrix and gate layers into runnable quantum
//! algorithms: it reads probability distributions out of state vectors
//! and assembles the canonical circuits end to end.
//!
//! # Features
//!
//! - **Measurement**: Born-rule probabilities, renormalizing
//!   unnormalized states, plus sampling through a caller-supplied
//!   entropy source
//! - **Grover search**: oracle and diffusion construction for any
//!   target state, with the optimal reflection count
//! - **Phase estimation**: the quantum Fourier transform and
//!   eigenphase readout of an arbitrary unitary block
//! - **Constraint search**: a nine-qubit binary sudoku solved by
//!   amplitude amplification with compute/uncompute ancillas
//!
//! # Example
//!
//! ```ignore
//! use ketsim_sim::grover::GroverCircuit;
//! use ketsim_sim::measurement::sample;
//!
//! let search = GroverCircuit::new(3, 5)?;
//! let probabilities = search.run()?;
//!
//! let mut rng = rand::thread_rng();
//! let mut draw = move || rng.gen::<f64>();
//! let observed = sample(&probabilities, &mut draw);
//! assert_eq!(observed, 5);
//! ```

pub mod error;
pub mod grover;
pub mod measurement;
pub mod phase_estimation;
pub mod sudoku;

pub use error::{Result, SimError};
pub use grover::GroverCircuit;
pub use measurement::{measure, measure_and_sample, sample};
pub use phase_estimation::{inverse_qft, optimum_counting_qubits, qft, PhaseEstimation};
pub use sudoku::SudokuCircuit;
