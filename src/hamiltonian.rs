//! Diagonal of the Max-Cut Ising Hamiltonian.
//!
//! The QUBO term `W[i][j] * x_i * (1 - x_j)` maps onto the product of the
//! projectors `P0 = |0><0|` on qubit `i` and `P1 = |1><1|` on qubit `j`, so
//! the Hamiltonian is diagonal in the computational basis. Basis states are
//! indexed with qubit 0 as the most significant bit (tensor-product order)
//! and `x_i = 1` when qubit `i` is `|0>`. The Hamiltonian is negated so that
//! its ground state is the maximum cut.

use rayon::prelude::*;

use crate::error::{MaxCutError, Result};
use crate::graph::weighted::WeightedGraph;
use crate::partition::Partition;

/// Energies of all `2^n` basis states: entry `k` is `-cut(x(k))`.
pub fn ising_diagonal(graph: &WeightedGraph) -> Result<Vec<f64>> {
    let n = graph.vertex_count();
    let Some(dimension) = 1usize.checked_shl(n as u32) else {
        return Err(MaxCutError::invalid(format!(
            "a {n}-qubit Hamiltonian does not fit in memory on this platform"
        )));
    };

    Ok((0..dimension)
        .into_par_iter()
        .map(|k| -(graph.cut_value(&basis_state_partition(k as u64, n)) as f64))
        .collect())
}

/// The partition encoded by basis state `k` of an `n`-qubit register.
pub fn basis_state_partition(k: u64, n: usize) -> Partition {
    // qubit i is bit (n - 1 - i); x_i is set when that bit is 0
    let bits = (0..n)
        .filter(|&i| k & (1 << (n - 1 - i)) == 0)
        .fold(0u64, |bits, i| bits | (1 << i));
    Partition::from_index(bits, n)
}

/// Index of the basis state that encodes `partition`.
pub fn partition_basis_state(partition: &Partition) -> u64 {
    let n = partition.len();
    (0..n)
        .filter(|&i| !partition.side(i))
        .fold(0u64, |k, i| k | (1 << (n - 1 - i)))
}
