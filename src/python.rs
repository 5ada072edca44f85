use std::collections::HashMap;

use pyo3::prelude::*;

use crate::algorithms;
use crate::cost::{cvar as cvar_cost, fit, mean};
use crate::graph::builder;
use crate::graph::weighted::WeightedGraph;
use crate::hamiltonian;
use crate::histogram::OutcomeHistogram;
use crate::partition::{BitOrder, Partition};

fn histogram(counts: HashMap<String, usize>, bit_order: Option<&str>) -> PyResult<OutcomeHistogram> {
    let order = bit_order.map(str::parse::<BitOrder>).transpose()?.unwrap_or_default();
    Ok(OutcomeHistogram::with_order(counts, order)?)
}

#[pyfunction]
fn build_graph(n_vertices: usize, n_edges: usize, seed: u64) -> PyResult<Vec<Vec<u32>>> {
    Ok(builder::build_graph(n_vertices, n_edges, seed)?.to_matrix())
}

#[pyfunction]
fn reference_example() -> Vec<Vec<u32>> {
    WeightedGraph::reference_example().to_matrix()
}

/// Returns `(optimal_partitions, best_cost, cut_values)`; partitions are
/// written with vertex 0 first.
#[pyfunction]
fn solve_max_cut(graph: WeightedGraph) -> PyResult<(Vec<String>, u64, Vec<u64>)> {
    let solution = algorithms::solve_max_cut(&graph)?;
    Ok((
        solution.optimal_keys(BitOrder::VertexZeroFirst),
        solution.best_cost,
        solution.cut_values,
    ))
}

#[pyfunction]
#[pyo3(signature = (counts, graph, bit_order=None))]
fn expected_cost(
    counts: HashMap<String, usize>,
    graph: WeightedGraph,
    bit_order: Option<&str>,
) -> PyResult<f64> {
    Ok(mean::expected_cost(&histogram(counts, bit_order)?, &graph)?)
}

#[pyfunction]
#[pyo3(signature = (counts, graph, alpha, bit_order=None))]
fn cvar(
    counts: HashMap<String, usize>,
    graph: WeightedGraph,
    alpha: f64,
    bit_order: Option<&str>,
) -> PyResult<f64> {
    Ok(cvar_cost::cvar(&histogram(counts, bit_order)?, &graph, alpha)?)
}

#[pyfunction]
#[pyo3(signature = (counts, graph, bit_order=None))]
fn best_candidate(
    counts: HashMap<String, usize>,
    graph: WeightedGraph,
    bit_order: Option<&str>,
) -> PyResult<Option<String>> {
    let histogram = histogram(counts, bit_order)?;
    let candidate = fit::best_candidate(&histogram, &graph)?;
    Ok(candidate.map(|partition| partition.key(histogram.order())))
}

/// `runs` is a list of `(shots, counts)` pairs; `optimal` holds partitions as
/// returned by `solve_max_cut` (vertex 0 first) whatever `bit_order` the
/// histograms use.
#[pyfunction]
#[pyo3(signature = (runs, shots, graph, optimal, max_distinct=fit::DEFAULT_MAX_DISTINCT, bit_order=None))]
fn fraction_optimal(
    runs: Vec<(usize, HashMap<String, usize>)>,
    shots: usize,
    graph: WeightedGraph,
    optimal: Vec<String>,
    max_distinct: usize,
    bit_order: Option<&str>,
) -> PyResult<f64> {
    let runs = runs
        .into_iter()
        .map(|(run_shots, counts)| -> PyResult<_> {
            Ok((run_shots, histogram(counts, bit_order)?))
        })
        .collect::<PyResult<Vec<_>>>()?;
    let optimal = optimal
        .iter()
        .map(|key| key.parse::<Partition>())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(fit::fraction_optimal(
        runs.iter().map(|(run_shots, histogram)| (*run_shots, histogram)),
        shots,
        &graph,
        &optimal,
        max_distinct,
    )?)
}

#[pyfunction]
fn ising_diagonal(graph: WeightedGraph) -> PyResult<Vec<f64>> {
    Ok(hamiltonian::ising_diagonal(&graph)?)
}

/// Routes the crate's log records to stderr, filtered by `RUST_LOG`.
#[pyfunction]
fn init_logging() {
    let _ = env_logger::try_init();
}

#[pymodule]
fn maxcut_cvar(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(build_graph, m)?)?;
    m.add_function(wrap_pyfunction!(reference_example, m)?)?;
    m.add_function(wrap_pyfunction!(solve_max_cut, m)?)?;
    m.add_function(wrap_pyfunction!(expected_cost, m)?)?;
    m.add_function(wrap_pyfunction!(cvar, m)?)?;
    m.add_function(wrap_pyfunction!(best_candidate, m)?)?;
    m.add_function(wrap_pyfunction!(fraction_optimal, m)?)?;
    m.add_function(wrap_pyfunction!(ising_diagonal, m)?)?;
    m.add_function(wrap_pyfunction!(init_logging, m)?)?;

    Ok(())
}
