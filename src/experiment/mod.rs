//! Repeated variational optimization against pluggable back ends.
//!
//! The circuit simulator and the classical optimizer are external: a
//! [`Sampler`] turns ansatz parameters into a measurement histogram and an
//! [`Optimizer`] minimizes a scalar objective. The driver wires a
//! [`CostKind`](crate::cost::CostKind) between them, times each optimization
//! and keeps what is needed to summarise a scan.

pub mod summary;

use std::f64::consts::FRAC_PI_2;
use std::time::{Duration, Instant};

use crate::config::{ExperimentConfig, RunSettings};
use crate::cost::CostFunction;
use crate::error::Result;
use crate::graph::weighted::WeightedGraph;
use crate::histogram::OutcomeHistogram;

/// Produces `shots` measurement outcomes of the circuit at `parameters`.
pub trait Sampler {
    fn sample(&mut self, parameters: &[f64], shots: usize) -> Result<OutcomeHistogram>;
}

impl<F> Sampler for F
where
    F: FnMut(&[f64], usize) -> Result<OutcomeHistogram>,
{
    fn sample(&mut self, parameters: &[f64], shots: usize) -> Result<OutcomeHistogram> {
        self(parameters, shots)
    }
}

/// Objective handed to an [`Optimizer`].
pub type Objective<'a> = dyn FnMut(&[f64]) -> Result<f64> + 'a;

#[derive(Debug, Clone, PartialEq)]
pub struct OptimizedParams {
    pub parameters: Vec<f64>,
    /// How many times the objective was evaluated.
    pub evaluations: usize,
}

/// Black-box minimizer.
pub trait Optimizer {
    fn minimize(&mut self, objective: &mut Objective<'_>, initial: &[f64])
        -> Result<OptimizedParams>;
}

/// Outcome of one optimization run.
#[derive(Debug, Clone, PartialEq)]
pub struct Repetition {
    pub elapsed: Duration,
    /// Histogram of the optimized circuit sampled with `final_eval_shots`.
    pub counts: OutcomeHistogram,
    pub shots: usize,
    pub evaluations: usize,
    pub final_eval_shots: usize,
}

/// Starting point of an RY ansatz with `depth` entangling layers: the first
/// rotation layer puts every qubit in `|+>`, the rest start at zero.
/// Layout is row-major `(depth + 1) x n_qubits`.
pub fn initial_parameters(n_qubits: usize, depth: usize) -> Vec<f64> {
    let mut parameters = vec![0.0; (depth + 1) * n_qubits];
    parameters[..n_qubits].fill(FRAC_PI_2);
    parameters
}

pub fn run_repetition<S, O>(
    sampler: &mut S,
    optimizer: &mut O,
    graph: &WeightedGraph,
    settings: &RunSettings,
) -> Result<Repetition>
where
    S: Sampler + ?Sized,
    O: Optimizer + ?Sized,
{
    let initial = initial_parameters(graph.vertex_count(), settings.depth);
    let cost = settings.cost;

    let start = Instant::now();
    let optimized = {
        let mut objective = |parameters: &[f64]| -> Result<f64> {
            let histogram = sampler.sample(parameters, settings.shots)?;
            cost.evaluate(&histogram, graph)
        };
        optimizer.minimize(&mut objective, &initial)?
    };
    let elapsed = start.elapsed();

    let counts = sampler.sample(&optimized.parameters, settings.final_eval_shots)?;

    Ok(Repetition {
        elapsed,
        counts,
        shots: settings.shots,
        evaluations: optimized.evaluations,
        final_eval_shots: settings.final_eval_shots,
    })
}

/// Runs `config.repetitions` repetitions for every shot count in
/// `config.shots`, in that order. `graph` must have the vertex and edge
/// counts the configuration names.
pub fn run_scan<S, O>(
    sampler: &mut S,
    optimizer: &mut O,
    graph: &WeightedGraph,
    config: &ExperimentConfig,
) -> Result<Vec<Repetition>>
where
    S: Sampler + ?Sized,
    O: Optimizer + ?Sized,
{
    config.validate()?;
    config.check_graph(graph)?;

    let mut repetitions = Vec::with_capacity(config.shots.len() * config.repetitions);
    for &shots in &config.shots {
        let settings = config.run_settings(shots);
        for rep in 0..config.repetitions {
            repetitions.push(run_repetition(sampler, optimizer, graph, &settings)?);
            if rep % 20 == 0 {
                log::info!("done with {shots} shots, repetition {rep}");
            }
        }
    }

    Ok(repetitions)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::cost::CostKind;
    use crate::error::MaxCutError;

    /// Evaluates the start point and a few fixed offsets of the first
    /// parameter, keeping the best.
    pub(crate) struct OffsetSearch {
        pub offsets: Vec<f64>,
    }

    impl Optimizer for OffsetSearch {
        fn minimize(
            &mut self,
            objective: &mut Objective<'_>,
            initial: &[f64],
        ) -> Result<OptimizedParams> {
            let mut best = (initial.to_vec(), objective(initial)?);
            let mut evaluations = 1;
            for &offset in &self.offsets {
                let mut candidate = initial.to_vec();
                candidate[0] += offset;
                let value = objective(&candidate)?;
                evaluations += 1;
                if value < best.1 {
                    best = (candidate, value);
                }
            }
            Ok(OptimizedParams {
                parameters: best.0,
                evaluations,
            })
        }
    }

    /// On the reference example: the optimal `00100` once the first
    /// parameter passes 2, otherwise the poor `10000`.
    pub(crate) fn threshold_sampler(
        parameters: &[f64],
        shots: usize,
    ) -> Result<OutcomeHistogram> {
        let key = if parameters[0] > 2.0 { "00100" } else { "10000" };
        OutcomeHistogram::new([(key, shots)])
    }

    #[test]
    fn initial_parameters_layout() {
        let parameters = initial_parameters(3, 2);
        assert_eq!(parameters.len(), 9);
        assert!(parameters[..3].iter().all(|&p| p == FRAC_PI_2));
        assert!(parameters[3..].iter().all(|&p| p == 0.0));
    }

    #[test]
    fn repetition_records_optimized_histogram() {
        let graph = WeightedGraph::reference_example();
        let mut optimizer = OffsetSearch {
            offsets: vec![-1.0, 1.0],
        };
        let settings = RunSettings {
            shots: 16,
            final_eval_shots: 128,
            depth: 1,
            cost: CostKind::Mean,
        };
        let repetition =
            run_repetition(&mut threshold_sampler, &mut optimizer, &graph, &settings).unwrap();

        assert_eq!(repetition.evaluations, 3);
        assert_eq!(repetition.shots, 16);
        assert_eq!(repetition.final_eval_shots, 128);
        assert_eq!(repetition.counts.get("00100"), 128);
    }

    #[test]
    fn sampler_failures_propagate() {
        let graph = WeightedGraph::reference_example();
        let mut failing = |_: &[f64], _: usize| -> Result<OutcomeHistogram> {
            Err(MaxCutError::Backend("device offline".into()))
        };
        let mut optimizer = OffsetSearch { offsets: vec![] };
        let settings = ExperimentConfig::default().run_settings(8);
        assert_eq!(
            run_repetition(&mut failing, &mut optimizer, &graph, &settings),
            Err(MaxCutError::Backend("device offline".into()))
        );
    }

    #[test]
    fn scan_runs_every_shot_count() {
        let graph = WeightedGraph::reference_example();
        let config = ExperimentConfig {
            n_vertices: 5,
            n_edges: 6,
            repetitions: 3,
            shots: vec![4, 8],
            ..Default::default()
        };
        let mut optimizer = OffsetSearch { offsets: vec![1.0] };
        let repetitions =
            run_scan(&mut threshold_sampler, &mut optimizer, &graph, &config).unwrap();

        assert_eq!(repetitions.len(), 6);
        assert_eq!(repetitions.iter().filter(|r| r.shots == 4).count(), 3);
        assert!(repetitions.iter().all(|r| r.counts.shots() == 128));
    }

    #[test]
    fn scan_validates_configuration() {
        let graph = WeightedGraph::reference_example();
        let config = ExperimentConfig {
            repetitions: 0,
            ..Default::default()
        };
        let mut optimizer = OffsetSearch { offsets: vec![] };
        assert!(run_scan(&mut threshold_sampler, &mut optimizer, &graph, &config).is_err());
    }

    #[test]
    fn scan_rejects_graph_of_another_size() {
        let graph = WeightedGraph::reference_example();
        let config = ExperimentConfig {
            repetitions: 1,
            shots: vec![4],
            ..Default::default()
        };
        let mut optimizer = OffsetSearch { offsets: vec![] };
        let mut calls = 0;
        let mut counting = |parameters: &[f64], shots: usize| {
            calls += 1;
            threshold_sampler(parameters, shots)
        };
        assert!(matches!(
            run_scan(&mut counting, &mut optimizer, &graph, &config),
            Err(MaxCutError::InvalidArgument(_))
        ));
        assert_eq!(calls, 0);
    }
}
