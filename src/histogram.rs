use counter::Counter;

use crate::error::{MaxCutError, Result};
use crate::graph::weighted::WeightedGraph;
use crate::partition::{BitOrder, Partition};

/// How often each bitstring was observed by a sampler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomeHistogram {
    counts: Counter<String>,
    width: usize,
    order: BitOrder,
}

/// A histogram entry decoded against a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub partition: Partition,
    pub count: usize,
    pub cut: u64,
}

impl OutcomeHistogram {
    pub fn new<K, I>(counts: I) -> Result<Self>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, usize)>,
    {
        Self::with_order(counts, BitOrder::default())
    }

    pub fn with_order<K, I>(counts: I, order: BitOrder) -> Result<Self>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, usize)>,
    {
        let mut histogram = OutcomeHistogram {
            counts: Counter::new(),
            width: 0,
            order,
        };
        for (key, count) in counts {
            histogram.record(key.into(), count)?;
        }
        Ok(histogram)
    }

    /// One count per observed bitstring.
    pub fn from_samples<K, I>(samples: I, order: BitOrder) -> Result<Self>
    where
        K: Into<String>,
        I: IntoIterator<Item = K>,
    {
        let counts: Counter<String> = samples.into_iter().map(Into::into).collect();
        Self::with_order(counts.iter().map(|(key, &count)| (key.clone(), count)), order)
    }

    fn record(&mut self, key: String, count: usize) -> Result<()> {
        if count == 0 {
            return Ok(());
        }

        let partition = Partition::parse(&key, self.order)?;
        if self.counts.is_empty() {
            self.width = partition.len();
        } else if partition.len() != self.width {
            return Err(MaxCutError::invalid(format!(
                "bitstring `{key}` has width {}, other keys have width {}",
                partition.len(),
                self.width
            )));
        }

        *self.counts.entry(key).or_insert(0) += count;
        Ok(())
    }

    /// Total number of samples.
    pub fn shots(&self) -> usize {
        self.counts.values().sum()
    }

    /// Number of distinct bitstrings.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn order(&self) -> BitOrder {
        self.order
    }

    pub fn get(&self, key: &str) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(key, &count)| (key.as_str(), count))
    }

    pub fn most_common(&self) -> Vec<(String, usize)> {
        self.counts.most_common_ordered()
    }

    /// Entries decoded against `graph`, in lexicographic key order.
    pub fn outcomes(&self, graph: &WeightedGraph) -> Result<Vec<Outcome>> {
        if !self.is_empty() {
            graph.check_width(self.width)?;
        }

        let mut keys: Vec<(&String, &usize)> = self.counts.iter().collect();
        keys.sort_unstable_by(|a, b| a.0.cmp(b.0));

        keys.into_iter()
            .map(|(key, &count)| {
                let partition = Partition::parse(key, self.order)?;
                Ok(Outcome {
                    partition,
                    count,
                    cut: graph.cut_value(&partition),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_merge_and_zero_counts_are_dropped() {
        let histogram =
            OutcomeHistogram::new([("010", 3), ("010", 2), ("111", 0), ("100", 1)]).unwrap();
        assert_eq!(histogram.get("010"), 5);
        assert_eq!(histogram.get("111"), 0);
        assert_eq!(histogram.len(), 2);
        assert_eq!(histogram.shots(), 6);
        assert_eq!(histogram.width(), 3);
    }

    #[test]
    fn from_samples_counts_repeats() {
        let histogram =
            OutcomeHistogram::from_samples(["01", "10", "01"], BitOrder::VertexZeroFirst)
                .unwrap();
        assert_eq!(histogram.most_common()[0], ("01".to_string(), 2));
    }

    #[test]
    fn rejects_mixed_widths_and_bad_characters() {
        assert!(OutcomeHistogram::new([("01", 1), ("011", 1)]).is_err());
        assert!(matches!(
            OutcomeHistogram::new([("0x", 1)]),
            Err(MaxCutError::InvalidArgument(_))
        ));
    }

    #[test]
    fn outcomes_check_graph_width() {
        let graph = WeightedGraph::reference_example();
        let histogram = OutcomeHistogram::new([("0010", 1)]).unwrap();
        assert!(histogram.outcomes(&graph).is_err());
    }

    #[test]
    fn outcomes_honour_bit_order() {
        let graph = WeightedGraph::reference_example();
        let histogram =
            OutcomeHistogram::with_order([("00001", 4)], BitOrder::VertexZeroLast).unwrap();
        let outcomes = histogram.outcomes(&graph).unwrap();
        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].partition.to_string(), "10000");
        assert_eq!(outcomes[0].cut, 3);
        assert_eq!(outcomes[0].count, 4);
    }
}
