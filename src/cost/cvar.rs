use crate::cost::utils::{check_alpha, minimization_costs};
use crate::cost::CostFunction;
use crate::error::Result;
use crate::graph::weighted::WeightedGraph;
use crate::histogram::OutcomeHistogram;

/// Conditional value at risk of the negated cut over the best `alpha`
/// fraction of the sampled mass.
///
/// Costs are `-cut`, sorted ascending, and probability mass is accumulated
/// until it reaches `alpha`; the bucket that crosses the boundary only
/// contributes the mass needed to land exactly on `alpha`. The result is the
/// mean cost over that mass. At `alpha = 1` this is exactly
/// [`expected_cost`](crate::cost::mean::expected_cost).
pub fn cvar(histogram: &OutcomeHistogram, graph: &WeightedGraph, alpha: f64) -> Result<f64> {
    CvarCost::new(alpha)?.evaluate(histogram, graph)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CvarCost {
    alpha: f64,
}

impl CvarCost {
    pub fn new(alpha: f64) -> Result<Self> {
        check_alpha(alpha)?;
        Ok(CvarCost { alpha })
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl CostFunction for CvarCost {
    fn evaluate(&self, histogram: &OutcomeHistogram, graph: &WeightedGraph) -> Result<f64> {
        check_alpha(self.alpha)?;
        let (mut costs, total) = minimization_costs(histogram, graph)?;
        costs.sort_by(|a, b| a.0.total_cmp(&b.0));

        // Mass is kept in units of counts so that alpha = 1 sums the same
        // integers as the plain mean.
        let budget = self.alpha * total;
        let mut remaining = budget;
        let mut weighted = 0.0;
        for (cost, count) in costs {
            if remaining <= 0.0 {
                break;
            }
            let taken = count.min(remaining);
            weighted += taken * cost;
            remaining -= taken;
        }

        Ok(weighted / budget)
    }
}
