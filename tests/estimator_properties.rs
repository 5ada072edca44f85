//! Properties of the mean and CVaR estimators over random graphs and
//! histograms.

use maxcut_cvar::{
    build_graph, cvar, expected_cost, solve_max_cut, CostFunction, CostKind, OutcomeHistogram,
    Partition, WeightedGraph,
};
use proptest::prelude::*;

fn graph_strategy() -> impl Strategy<Value = WeightedGraph> {
    (1usize..=7)
        .prop_flat_map(|n| (Just(n), 0..=n * (n - 1) / 2, any::<u64>()))
        .prop_map(|(n, edges, seed)| build_graph(n, edges, seed).unwrap())
}

fn graph_and_histogram() -> impl Strategy<Value = (WeightedGraph, OutcomeHistogram)> {
    graph_strategy().prop_flat_map(|graph| {
        let n = graph.vertex_count();
        let states = 1u64 << n;
        let entries = prop::collection::vec((0..states, 1usize..50), 1..12);
        (Just(graph), entries).prop_map(move |(graph, entries)| {
            let histogram = OutcomeHistogram::new(
                entries
                    .into_iter()
                    .map(|(b, count)| (Partition::from_index(b, n).to_string(), count)),
            )
            .unwrap();
            (graph, histogram)
        })
    })
}

#[cfg(test)]
mod exact {
    use super::*;

    #[test]
    fn test_uniform_histogram_mean_matches_brute_force() {
        for seed in 0..5 {
            let graph = build_graph(6, 8, seed).unwrap();
            let solution = solve_max_cut(&graph).unwrap();
            let uniform = OutcomeHistogram::new(
                (0..64u64).map(|b| (Partition::from_index(b, 6).to_string(), 1)),
            )
            .unwrap();
            assert_eq!(expected_cost(&uniform, &graph).unwrap(), -solution.mean());
        }
    }

    #[test]
    fn test_cost_kind_matches_free_functions() {
        let graph = WeightedGraph::reference_example();
        let histogram = OutcomeHistogram::new([("00100", 2), ("01000", 5), ("00000", 1)]).unwrap();
        assert_eq!(
            CostKind::Mean.evaluate(&histogram, &graph).unwrap(),
            expected_cost(&histogram, &graph).unwrap()
        );
        assert_eq!(
            "cvar_0.2".parse::<CostKind>().unwrap().evaluate(&histogram, &graph).unwrap(),
            cvar(&histogram, &graph, 0.2).unwrap()
        );
    }
}

proptest! {
    #[test]
    fn prop_cvar_at_one_is_the_mean((graph, histogram) in graph_and_histogram()) {
        prop_assert_eq!(
            cvar(&histogram, &graph, 1.0).unwrap(),
            expected_cost(&histogram, &graph).unwrap()
        );
    }

    #[test]
    fn prop_cvar_non_increasing_as_alpha_shrinks(
        (graph, histogram) in graph_and_histogram(),
        a in 0.01f64..=1.0,
        b in 0.01f64..=1.0,
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let at_low = cvar(&histogram, &graph, low).unwrap();
        let at_high = cvar(&histogram, &graph, high).unwrap();
        prop_assert!(at_low <= at_high + 1e-9, "cvar({}) = {} > cvar({}) = {}", low, at_low, high, at_high);
    }

    #[test]
    fn prop_cvar_bounded_by_sampled_costs(
        (graph, histogram) in graph_and_histogram(),
        alpha in 0.01f64..=1.0,
    ) {
        let cuts: Vec<f64> = histogram
            .outcomes(&graph)
            .unwrap()
            .iter()
            .map(|o| -(o.cut as f64))
            .collect();
        let lowest = cuts.iter().copied().fold(f64::INFINITY, f64::min);
        let highest = cuts.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let value = cvar(&histogram, &graph, alpha).unwrap();
        prop_assert!(value >= lowest - 1e-9 && value <= highest + 1e-9);
    }

    #[test]
    fn prop_mean_never_beats_the_optimum((graph, histogram) in graph_and_histogram()) {
        let solution = solve_max_cut(&graph).unwrap();
        let best = -(solution.best_cost as f64);
        prop_assert!(expected_cost(&histogram, &graph).unwrap() >= best);
        prop_assert!(cvar(&histogram, &graph, 0.05).unwrap() >= best - 1e-9);
    }

    #[test]
    fn prop_single_entry_cvar_is_its_cost(
        graph in graph_strategy(),
        index in any::<u64>(),
        count in 1usize..1000,
        alpha in 0.01f64..=1.0,
    ) {
        let n = graph.vertex_count();
        let partition = Partition::from_index(index, n);
        let histogram = OutcomeHistogram::new([(partition.to_string(), count)]).unwrap();
        let cost = -(graph.cut_value(&partition) as f64);
        let value = cvar(&histogram, &graph, alpha).unwrap();
        prop_assert!((value - cost).abs() <= 1e-9 * cost.abs().max(1.0));
    }
}
