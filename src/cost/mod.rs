pub mod cvar;
pub mod fit;
pub mod mean;
mod utils;

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::{MaxCutError, Result};
use crate::graph::weighted::WeightedGraph;
use crate::histogram::OutcomeHistogram;

use self::cvar::CvarCost;
use self::mean::MeanCost;

/// Scores a sampled histogram against a graph. Lower is better.
pub trait CostFunction {
    fn evaluate(&self, histogram: &OutcomeHistogram, graph: &WeightedGraph) -> Result<f64>;
}

/// Which cost function an experiment minimizes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum CostKind {
    #[default]
    Mean,
    Cvar(CvarCost),
}

impl CostKind {
    pub fn cvar(alpha: f64) -> Result<Self> {
        Ok(CostKind::Cvar(CvarCost::new(alpha)?))
    }

    /// Parses the `(cost, alpha)` argument pair of the scan scripts:
    /// `("cost" | "mean", _)` or `("cvar", alpha)`. An alpha of 1 always
    /// means the plain mean.
    pub fn from_label(label: &str, alpha: f64) -> Result<Self> {
        match label {
            "mean" | "cost" => Ok(CostKind::Mean),
            "cvar" if alpha == 1.0 => Ok(CostKind::Mean),
            "cvar" => CostKind::cvar(alpha),
            other => Err(MaxCutError::invalid(format!("unknown cost function `{other}`"))),
        }
    }
}

impl CostFunction for CostKind {
    fn evaluate(&self, histogram: &OutcomeHistogram, graph: &WeightedGraph) -> Result<f64> {
        match self {
            CostKind::Mean => MeanCost.evaluate(histogram, graph),
            CostKind::Cvar(cvar) => cvar.evaluate(histogram, graph),
        }
    }
}

impl Display for CostKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CostKind::Mean => write!(f, "mean"),
            CostKind::Cvar(cvar) => write!(f, "cvar_{}", cvar.alpha()),
        }
    }
}

/// Accepts the labels used for result folders: `mean`, `cost`, `cvar_0.5`.
impl FromStr for CostKind {
    type Err = MaxCutError;

    fn from_str(s: &str) -> Result<Self> {
        if let Some(alpha) = s.strip_prefix("cvar_") {
            let alpha = alpha
                .parse::<f64>()
                .map_err(|_| MaxCutError::invalid(format!("bad CVaR alpha in `{s}`")))?;
            return CostKind::cvar(alpha);
        }
        CostKind::from_label(s, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        assert_eq!("mean".parse::<CostKind>().unwrap(), CostKind::Mean);
        assert_eq!("cost".parse::<CostKind>().unwrap(), CostKind::Mean);
        let cvar: CostKind = "cvar_0.5".parse().unwrap();
        assert_eq!(cvar, CostKind::cvar(0.5).unwrap());
        assert_eq!(cvar.to_string(), "cvar_0.5");
        assert_eq!(CostKind::Mean.to_string(), "mean");
    }

    #[test]
    fn script_arguments() {
        assert_eq!(CostKind::from_label("cvar", 0.2).unwrap(), CostKind::cvar(0.2).unwrap());
        assert_eq!(CostKind::from_label("cvar", 1.0).unwrap(), CostKind::Mean);
        assert!(CostKind::from_label("median", 0.5).is_err());
        assert!("cvar_abc".parse::<CostKind>().is_err());
        assert!("cvar_0".parse::<CostKind>().is_err());
    }

    #[test]
    fn dispatches_to_the_selected_estimator() {
        let graph = WeightedGraph::reference_example();
        let histogram = OutcomeHistogram::new([("00100", 1), ("00000", 1)]).unwrap();
        assert_eq!(CostKind::Mean.evaluate(&histogram, &graph).unwrap(), -4.0);
        assert_eq!(
            CostKind::cvar(0.5).unwrap().evaluate(&histogram, &graph).unwrap(),
            -8.0
        );
    }
}
