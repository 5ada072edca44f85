use crate::error::{MaxCutError, Result};
use crate::graph::weighted::WeightedGraph;
use crate::histogram::OutcomeHistogram;
use crate::partition::Partition;

/// Runs whose histogram has this many distinct bitstrings or more are too
/// flat to count as having found anything.
pub const DEFAULT_MAX_DISTINCT: usize = 1000;

/// The sampled bitstring with the largest cut. Keys are scanned in
/// lexicographic order and only a strictly larger cut replaces the current
/// candidate, so the first of several equal cuts wins.
pub fn best_candidate(
    histogram: &OutcomeHistogram,
    graph: &WeightedGraph,
) -> Result<Option<Partition>> {
    let best = histogram
        .outcomes(graph)?
        .into_iter()
        .fold(None, |best: Option<(Partition, u64)>, outcome| match best {
            Some((_, cut)) if outcome.cut <= cut => best,
            _ => Some((outcome.partition, outcome.cut)),
        });

    Ok(best.map(|(partition, _)| partition))
}

/// Fraction of the runs with `shots_filter` shots whose best candidate is one
/// of the `optimal` partitions, counting only histograms with fewer than
/// `max_distinct` distinct entries.
///
/// `runs` yields `(shots, histogram)` pairs. Returns 0 when no run used
/// `shots_filter` shots.
pub fn fraction_optimal<'a, I>(
    runs: I,
    shots_filter: usize,
    graph: &WeightedGraph,
    optimal: &[Partition],
    max_distinct: usize,
) -> Result<f64>
where
    I: IntoIterator<Item = (usize, &'a OutcomeHistogram)>,
{
    if let Some(partition) = optimal
        .iter()
        .find(|p| p.len() != graph.vertex_count())
    {
        return Err(MaxCutError::invalid(format!(
            "optimal partition {partition} does not match a graph of {} vertices",
            graph.vertex_count()
        )));
    }

    let mut repetitions = 0usize;
    let mut successes = 0usize;
    for (shots, histogram) in runs {
        if shots != shots_filter {
            continue;
        }
        repetitions += 1;

        let Some(candidate) = best_candidate(histogram, graph)? else {
            continue;
        };
        if optimal.contains(&candidate) && histogram.len() < max_distinct {
            successes += 1;
        }
    }

    if repetitions == 0 {
        log::warn!("no repetition was run with {shots_filter} shots");
        return Ok(0.0);
    }

    Ok(successes as f64 / repetitions as f64)
}
