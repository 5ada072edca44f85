use crate::config::ExperimentConfig;
use crate::cost::fit::fraction_optimal;
use crate::cost::mean::expected_cost;
use crate::error::Result;
use crate::experiment::Repetition;
use crate::graph::weighted::WeightedGraph;
use crate::partition::Partition;

/// Averages over all repetitions that used the same shot count.
#[derive(Debug, Clone, PartialEq)]
pub struct ShotsSummary {
    pub shots: usize,
    pub repetitions: usize,
    pub mean_elapsed_secs: f64,
    pub mean_evaluations: f64,
    /// Mean of `expected_cost` over the final histograms; negative, and
    /// `-best_cost` at best.
    pub mean_cost: f64,
    pub fraction_optimal: f64,
}

impl ShotsSummary {
    /// `mean_cost / best_cost`, in `[-1, 0]`.
    pub fn relative_cost(&self, best_cost: u64) -> f64 {
        self.mean_cost / best_cost as f64
    }

    /// Distance of the mean cost from the optimum.
    pub fn gap_to_optimum(&self, best_cost: u64) -> f64 {
        best_cost as f64 + self.mean_cost
    }

    /// Circuit executions spent by an average optimization.
    pub fn circuit_evaluations(&self) -> f64 {
        self.shots as f64 * self.mean_evaluations
    }
}

pub fn summarize(
    repetitions: &[Repetition],
    config: &ExperimentConfig,
    graph: &WeightedGraph,
    optimal: &[Partition],
) -> Result<Vec<ShotsSummary>> {
    let mut summaries = Vec::with_capacity(config.shots.len());

    for &shots in &config.shots {
        let selected: Vec<&Repetition> =
            repetitions.iter().filter(|r| r.shots == shots).collect();
        if selected.is_empty() {
            log::warn!("no repetition was run with {shots} shots, skipping");
            continue;
        }

        let count = selected.len() as f64;
        let mean_elapsed_secs =
            selected.iter().map(|r| r.elapsed.as_secs_f64()).sum::<f64>() / count;
        let mean_evaluations =
            selected.iter().map(|r| r.evaluations as f64).sum::<f64>() / count;
        let mut total_cost = 0.0;
        for repetition in &selected {
            total_cost += expected_cost(&repetition.counts, graph)?;
        }

        let fraction_optimal = fraction_optimal(
            selected.iter().map(|r| (r.shots, &r.counts)),
            shots,
            graph,
            optimal,
            config.max_distinct,
        )?;

        summaries.push(ShotsSummary {
            shots,
            repetitions: selected.len(),
            mean_elapsed_secs,
            mean_evaluations,
            mean_cost: total_cost / count,
            fraction_optimal,
        });
    }

    Ok(summaries)
}
