use crate::error::{MaxCutError, Result};
use crate::graph::weighted::WeightedGraph;
use crate::histogram::OutcomeHistogram;

/// `(cost, count)` pairs with `cost = -cut`, so that lower is better, plus
/// the total count. Every value is an exact integer in `f64`.
pub(crate) fn minimization_costs(
    histogram: &OutcomeHistogram,
    graph: &WeightedGraph,
) -> Result<(Vec<(f64, f64)>, f64)> {
    if histogram.shots() == 0 {
        return Err(MaxCutError::invalid("histogram has no samples"));
    }

    let costs: Vec<(f64, f64)> = histogram
        .outcomes(graph)?
        .into_iter()
        .map(|outcome| (-(outcome.cut as f64), outcome.count as f64))
        .collect();
    let total = costs.iter().map(|&(_, count)| count).sum();

    Ok((costs, total))
}

pub(crate) fn check_alpha(alpha: f64) -> Result<()> {
    if !(alpha > 0.0 && alpha <= 1.0) {
        return Err(MaxCutError::invalid(format!(
            "alpha must lie in (0, 1], got {alpha}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_bounds() {
        assert!(check_alpha(1.0).is_ok());
        assert!(check_alpha(1e-9).is_ok());
        assert!(check_alpha(0.0).is_err());
        assert!(check_alpha(-0.5).is_err());
        assert!(check_alpha(1.0 + f64::EPSILON).is_err());
        assert!(check_alpha(f64::NAN).is_err());
    }

    #[test]
    fn empty_histogram_is_rejected() {
        let graph = WeightedGraph::reference_example();
        let empty = OutcomeHistogram::new(Vec::<(String, usize)>::new()).unwrap();
        assert!(matches!(
            minimization_costs(&empty, &graph),
            Err(MaxCutError::InvalidArgument(_))
        ));
    }
}
