//! Converting state vectors into measurement probabilities
//!
//! [`measure`] is the pure half: amplitudes to a normalized probability
//! vector. [`sample`] draws one basis index from such a vector; it takes
//! the random source as a closure so callers control determinism.

use crate::error::{Result, SimError};
use ketsim_matrices::{Matrix, ZERO_TOLERANCE};

/// Probability of observing each basis state of `state`.
///
/// Requires a column vector. Each row contributes `|amplitude|²`; the
/// magnitudes are divided by their total unless the total is already
/// within tolerance of 1, or within tolerance of 0 (a null vector's raw
/// magnitudes come back unchanged rather than dividing by zero).
///
/// Pure and deterministic: the state is never collapsed or mutated.
///
/// # Errors
/// [`SimError::NotAColumnVector`] when `state` has more than one column.
pub fn measure(state: &Matrix) -> Result<Vec<f64>> {
    if state.num_columns() != 1 {
        return Err(SimError::NotAColumnVector {
            num_rows: state.num_rows(),
            num_columns: state.num_columns(),
        });
    }

    let mut magnitudes: Vec<f64> = state
        .rows()
        .into_iter()
        .map(|row| row[0].norm_sqr())
        .collect();

    let total: f64 = magnitudes.iter().sum();
    if (total - 1.0).abs() > ZERO_TOLERANCE && total > ZERO_TOLERANCE {
        for magnitude in &mut magnitudes {
            *magnitude /= total;
        }
    }
    Ok(magnitudes)
}

/// Draw one index from `probabilities` by cumulative scan.
///
/// `rng` must yield uniform values in `[0, 1)`. Accumulated rounding can
/// leave the final cumulative sum fractionally below the drawn value, in
/// which case the last index is returned.
pub fn sample(probabilities: &[f64], rng: &mut dyn FnMut() -> f64) -> usize {
    let drawn = rng();
    let mut cumulative = 0.0;
    for (index, &probability) in probabilities.iter().enumerate() {
        cumulative += probability;
        if drawn < cumulative {
            return index;
        }
    }
    probabilities.len().saturating_sub(1)
}

/// Measure `state` and draw one outcome, returning the observed basis
/// index with its probability.
pub fn measure_and_sample(
    state: &Matrix,
    rng: &mut dyn FnMut() -> f64,
) -> Result<(usize, f64)> {
    let probabilities = measure(state)?;
    let observed = sample(&probabilities, rng);
    Ok((observed, probabilities[observed]))
}
