use crate::cost::utils::minimization_costs;
use crate::cost::CostFunction;
use crate::error::Result;
use crate::graph::weighted::WeightedGraph;
use crate::histogram::OutcomeHistogram;

/// Negated count-weighted mean cut: `-(sum count_k * cut_k) / sum count_k`.
/// Negated so that a minimizer drives it towards the maximum cut.
pub fn expected_cost(histogram: &OutcomeHistogram, graph: &WeightedGraph) -> Result<f64> {
    MeanCost.evaluate(histogram, graph)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MeanCost;

impl CostFunction for MeanCost {
    fn evaluate(&self, histogram: &OutcomeHistogram, graph: &WeightedGraph) -> Result<f64> {
        let (costs, total) = minimization_costs(histogram, graph)?;
        let weighted: f64 = costs.iter().map(|&(cost, count)| cost * count).sum();
        Ok(weighted / total)
    }
}
