//! Composite n-qubit operator construction
//!
//! [`multi_gate`] broadcasts a single-qubit gate across a register via
//! repeated tensor products. The controlled-gate builders skip the
//! O(size) tensor chain entirely and write the 2^size x 2^size sparse
//! operator directly from bit arithmetic on basis-state indices.
//!
//! Canonical bit convention: qubit index 0 is the least-significant bit
//! of a basis-state index, so `control_x(2, &[0], 1)` flips qubit 1
//! exactly on the indices with bit 0 set.

use crate::constants::{IDENTITY, PROJ_ONE, PROJ_ZERO};
use crate::error::{GateError, Result};
use crate::gate::Gate;
use crate::tensor::tensor_product;
use ketsim_matrices::{EntryMap, Matrix, ONE};
use num_complex::Complex64;

/// Validate a register size and return its basis dimension 2^size.
fn register_dimension(size: usize, minimum: usize) -> Result<usize> {
    if size < minimum {
        return Err(GateError::register_too_small(size, minimum));
    }
    if size >= usize::BITS as usize {
        return Err(GateError::register_too_large(size));
    }
    Ok(1 << size)
}

fn check_qubit(index: usize, size: usize) -> Result<()> {
    if index >= size {
        return Err(GateError::qubit_out_of_range(index, size));
    }
    Ok(())
}

fn check_control_layout(size: usize, controls: &[usize], target: usize) -> Result<()> {
    for &control in controls {
        check_qubit(control, size)?;
    }
    check_qubit(target, size)?;
    if controls.contains(&target) {
        return Err(GateError::target_is_control(target));
    }
    Ok(())
}

/// Bitmask with a 1 at every control position; duplicates collapse.
fn control_mask(controls: &[usize]) -> usize {
    controls
        .iter()
        .fold(0, |mask, &control| mask | (1 << control))
}

/// Exchange bits `first` and `second` of `index`.
fn swap_bits(index: usize, first: usize, second: usize) -> usize {
    let differ = ((index >> first) ^ (index >> second)) & 1;
    index ^ ((differ << first) | (differ << second))
}

/// Broadcast `gate` to every index in `targets` of a `size`-qubit
/// register, tensoring the identity everywhere else.
///
/// Position 0 is tensored last and therefore lands on the low-order
/// side of the basis index. `Gate::Identity` shortcuts to the full
/// register identity.
///
/// # Errors
/// [`GateError::InvalidGateParameters`] for an empty register or an
/// out-of-range target.
pub fn multi_gate(size: usize, targets: &[usize], gate: Gate) -> Result<Matrix> {
    let dimension = register_dimension(size, 1)?;
    for &target in targets {
        check_qubit(target, size)?;
    }
    if matches!(gate, Gate::Identity) {
        return Ok(Matrix::identity(dimension)?);
    }

    let gate_matrix = gate.matrix();
    let identity: &Matrix = &IDENTITY;
    let mut operator = Matrix::identity(1)?;
    for position in 0..size {
        let factor = if targets.contains(&position) {
            &gate_matrix
        } else {
            identity
        };
        operator = tensor_product(factor, &operator);
    }
    Ok(operator)
}

/// Controlled-X: flip `target` on every basis index whose control bits
/// are all set.
///
/// An empty control list applies the flip unconditionally. Built
/// directly as a sparse basis permutation: index `i` maps to
/// `i XOR 2^target` when `(i & mask) == mask`, else to itself.
///
/// # Errors
/// [`GateError::InvalidGateParameters`] when `size < 2`, an index is out
/// of range, or the target is also a control.
pub fn control_x(size: usize, controls: &[usize], target: usize) -> Result<Matrix> {
    let dimension = register_dimension(size, 2)?;
    check_control_layout(size, controls, target)?;
    let mask = control_mask(controls);
    let flip = 1 << target;

    let mut entries = EntryMap::with_capacity(dimension);
    for i in 0..dimension {
        let j = if i & mask == mask { i ^ flip } else { i };
        entries.entry(i).or_default().insert(j, ONE);
    }
    Ok(Matrix::from_sparse_map(entries, dimension, dimension)?)
}

/// Shared shape of the diagonal controlled gates: scale the diagonal
/// entry by `value` exactly when the target bit and every control bit
/// of the index are set.
fn controlled_diagonal(
    size: usize,
    controls: &[usize],
    target: usize,
    value: Complex64,
) -> Result<Matrix> {
    let dimension = register_dimension(size, 2)?;
    check_control_layout(size, controls, target)?;
    let mask = control_mask(controls);
    let target_bit = 1 << target;

    let mut entries = EntryMap::with_capacity(dimension);
    for i in 0..dimension {
        let diagonal = if i & target_bit == target_bit && i & mask == mask {
            value
        } else {
            ONE
        };
        entries.entry(i).or_default().insert(i, diagonal);
    }
    Ok(Matrix::from_sparse_map(entries, dimension, dimension)?)
}

/// Controlled-Z: negate the diagonal on every basis index whose control
/// bits and target bit are all set.
///
/// # Errors
/// [`GateError::InvalidGateParameters`] as for [`control_x`].
pub fn control_z(size: usize, controls: &[usize], target: usize) -> Result<Matrix> {
    controlled_diagonal(size, controls, target, Complex64::new(-1.0, 0.0))
}

/// Controlled phase shift: multiply the diagonal by `e^(i·phi)` on every
/// basis index whose control bits and target bit are all set.
///
/// `control_phase(size, controls, target, PI)` equals
/// `control_z(size, controls, target)` up to floating-point rounding.
///
/// # Errors
/// [`GateError::InvalidGateParameters`] as for [`control_x`].
pub fn control_phase(size: usize, controls: &[usize], target: usize, phi: f64) -> Result<Matrix> {
    controlled_diagonal(size, controls, target, Complex64::from_polar(1.0, phi))
}

/// Exchange qubits `first` and `second`: the basis permutation that
/// swaps the two bits of every index.
///
/// # Errors
/// [`GateError::InvalidGateParameters`] when `size < 2` or an index is
/// out of range.
pub fn swap(size: usize, first: usize, second: usize) -> Result<Matrix> {
    let dimension = register_dimension(size, 2)?;
    check_qubit(first, size)?;
    check_qubit(second, size)?;

    let mut entries = EntryMap::with_capacity(dimension);
    for i in 0..dimension {
        entries
            .entry(i)
            .or_default()
            .insert(swap_bits(i, first, second), ONE);
    }
    Ok(Matrix::from_sparse_map(entries, dimension, dimension)?)
}

/// Generalized control of an arbitrary unitary block.
///
/// The block occupies the top qubits of the register (positions
/// `size - k` and above for a 2^k-dimensional block) and is applied
/// exactly when the `control` qubit is set:
///
/// ```text
/// I ⊗ I_mid ⊗ |0⟩⟨0| ⊗ I_low  +  U ⊗ I_mid ⊗ |1⟩⟨1| ⊗ I_low
/// ```
///
/// with the projectors sitting at the control position.
///
/// # Errors
/// [`GateError::InvalidGateParameters`] when the block is not square
/// with a power-of-two dimension of at least 2, the register cannot hold
/// the block plus a control, or the control overlaps the block.
pub fn control_u(size: usize, control: usize, unitary: &Matrix) -> Result<Matrix> {
    let dimension = register_dimension(size, 2)?;
    let block = unitary.num_rows();
    if unitary.num_columns() != block || block < 2 || !block.is_power_of_two() {
        return Err(GateError::invalid_unitary_block(
            block,
            unitary.num_columns(),
        ));
    }
    let block_qubits = block.trailing_zeros() as usize;
    if block_qubits + 1 > size {
        return Err(GateError::register_too_small(size, block_qubits + 1));
    }
    let boundary = size - block_qubits;
    if control >= boundary {
        return Err(GateError::control_inside_block(control, boundary));
    }

    let low = Matrix::identity(1 << control)?;
    let mid = Matrix::identity(1 << (boundary - 1 - control))?;
    let block_identity = Matrix::identity(block)?;

    let when_clear = tensor_product(
        &block_identity,
        &tensor_product(&mid, &tensor_product(&PROJ_ZERO, &low)),
    );
    let when_set = tensor_product(
        unitary,
        &tensor_product(&mid, &tensor_product(&PROJ_ONE, &low)),
    );
    let operator = when_clear.add(&when_set)?;
    debug_assert_eq!(operator.num_rows(), dimension);
    Ok(operator)
}
