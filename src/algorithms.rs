use rayon::prelude::*;

use crate::error::{MaxCutError, Result};
use crate::graph::weighted::WeightedGraph;
use crate::partition::{BitOrder, Partition};

/// Largest graph `solve_max_cut` will enumerate; `2^32` cut values already
/// take 32 GiB.
pub const MAX_SOLVER_VERTICES: usize = 32;

/// Result of exhaustive enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaxCutSolution {
    /// Every partition whose cut equals `best_cost`, in enumeration order.
    pub optimal: Vec<Partition>,
    pub best_cost: u64,
    /// Cut value of partition `b` at index `b`.
    pub cut_values: Vec<u64>,
}

impl MaxCutSolution {
    pub fn optimal_keys(&self, order: BitOrder) -> Vec<String> {
        self.optimal.iter().map(|p| p.key(order)).collect()
    }

    pub fn is_optimal(&self, partition: &Partition) -> bool {
        self.optimal.contains(partition)
    }

    pub fn mean(&self) -> f64 {
        self.cut_values.iter().map(|&c| c as f64).sum::<f64>() / self.cut_values.len() as f64
    }

    /// Population standard deviation of all cut values.
    pub fn std_dev(&self) -> f64 {
        let mean = self.mean();
        let variance = self
            .cut_values
            .iter()
            .map(|&c| (c as f64 - mean).powi(2))
            .sum::<f64>()
            / self.cut_values.len() as f64;
        variance.sqrt()
    }
}

#[derive(Debug, Default)]
struct Best {
    cost: Option<u64>,
    ties: Vec<usize>,
}

impl Best {
    fn push(mut self, index: usize, cost: u64) -> Self {
        match self.cost {
            Some(best) if cost < best => {}
            Some(best) if cost == best => self.ties.push(index),
            _ => {
                self.cost = Some(cost);
                self.ties.clear();
                self.ties.push(index);
            }
        }
        self
    }

    /// `self` covers indices before `other`, so ties stay in enumeration order.
    fn merge(mut self, mut other: Self) -> Self {
        match (self.cost, other.cost) {
            (_, None) => self,
            (None, _) => other,
            (Some(a), Some(b)) if a > b => self,
            (Some(a), Some(b)) if a < b => other,
            _ => {
                self.ties.append(&mut other.ties);
                self
            }
        }
    }
}

/// Enumerates all `2^n` partitions of `graph` and keeps every one that
/// reaches the maximum cut.
///
/// This is a ground-truth oracle: cost grows as `O(2^n * n^2)` and the full
/// list of cut values is kept, so it is only practical up to about 20
/// vertices.
pub fn solve_max_cut(graph: &WeightedGraph) -> Result<MaxCutSolution> {
    let n = graph.vertex_count();
    if n > MAX_SOLVER_VERTICES {
        return Err(MaxCutError::invalid(format!(
            "brute force is limited to {MAX_SOLVER_VERTICES} vertices, got {n}"
        )));
    }
    let Some(states) = 1usize.checked_shl(n as u32) else {
        return Err(MaxCutError::invalid(format!(
            "cannot enumerate 2^{n} partitions on this platform"
        )));
    };

    let cut_values: Vec<u64> = (0..states)
        .into_par_iter()
        .map(|b| graph.cut_value(&Partition::from_index(b as u64, n)))
        .collect();

    let best = cut_values
        .par_iter()
        .enumerate()
        .fold(Best::default, |best, (index, &cost)| best.push(index, cost))
        .reduce(Best::default, Best::merge);

    let best_cost = best.cost.unwrap_or(0);
    let optimal: Vec<Partition> = best
        .ties
        .into_iter()
        .map(|b| Partition::from_index(b as u64, n))
        .collect();

    log::debug!(
        "max cut over {states} partitions: best cost {best_cost}, {} optimal partition(s)",
        optimal.len()
    );

    Ok(MaxCutSolution {
        optimal,
        best_cost,
        cut_values,
    })
}
