//! Classical core of a variational Max-Cut benchmark.
//!
//! Builds reproducible random weighted graphs, solves them exactly by brute
//! force, and scores sampled measurement histograms with the plain mean or the
//! CVaR of the cut objective. The optional `python` feature builds the
//! `maxcut_cvar` extension module.

pub mod algorithms;
pub mod config;
pub mod cost;
pub mod error;
pub mod experiment;
pub mod graph;
pub mod hamiltonian;
pub mod histogram;
pub mod partition;
#[cfg(feature = "python")]
mod python;

pub use crate::algorithms::{solve_max_cut, MaxCutSolution, MAX_SOLVER_VERTICES};
pub use crate::config::{ExperimentConfig, RunSettings};
pub use crate::cost::cvar::{cvar, CvarCost};
pub use crate::cost::fit::{best_candidate, fraction_optimal, DEFAULT_MAX_DISTINCT};
pub use crate::cost::mean::{expected_cost, MeanCost};
pub use crate::cost::{CostFunction, CostKind};
pub use crate::error::{MaxCutError, Result};
pub use crate::experiment::summary::{summarize, ShotsSummary};
pub use crate::experiment::{
    initial_parameters, run_repetition, run_scan, OptimizedParams, Optimizer, Repetition, Sampler,
};
pub use crate::graph::builder::build_graph;
pub use crate::graph::weighted::WeightedGraph;
pub use crate::hamiltonian::ising_diagonal;
pub use crate::histogram::{Outcome, OutcomeHistogram};
pub use crate::partition::{BitOrder, Partition, MAX_VERTICES};
