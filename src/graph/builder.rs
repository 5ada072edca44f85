use petgraph::graph::{NodeIndex, UnGraph};
use rand::seq::index;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::{MaxCutError, Result};
use crate::graph::weighted::{check_vertex_count, WeightedGraph};

pub const MIN_EDGE_WEIGHT: u32 = 1;
pub const MAX_EDGE_WEIGHT: u32 = 10;

/// Random simple graph with exactly `n_edges` edges among `n_vertices`
/// vertices, each edge weighted uniformly in `[1, 10]`.
///
/// The same `(n_vertices, n_edges, seed)` always yields the same matrix: edge
/// selection and weights are both drawn from one `ChaCha8Rng` stream, which is
/// stable across platforms and releases.
pub fn build_graph(n_vertices: usize, n_edges: usize, seed: u64) -> Result<WeightedGraph> {
    check_vertex_count(n_vertices)?;
    let max_edges = n_vertices * (n_vertices - 1) / 2;
    if n_edges > max_edges {
        return Err(MaxCutError::invalid(format!(
            "{n_edges} edges requested but a simple graph on {n_vertices} vertices has at most {max_edges}"
        )));
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut graph = UnGraph::<usize, u32>::with_capacity(n_vertices, n_edges);
    let nodes: Vec<NodeIndex> = (0..n_vertices).map(|v| graph.add_node(v)).collect();

    // Pair indices are drawn without replacement, then sorted so that the
    // weight stream is consumed in a fixed edge order.
    let mut chosen = index::sample(&mut rng, max_edges, n_edges).into_vec();
    chosen.sort_unstable();

    for pair in chosen {
        let (a, b) = pair_from_index(pair, n_vertices);
        let weight = rng.gen_range(MIN_EDGE_WEIGHT..=MAX_EDGE_WEIGHT);
        graph.add_edge(nodes[a], nodes[b], weight);
    }

    log::debug!(
        "built graph with {n_vertices} vertices and {} edges from seed {seed}",
        graph.edge_count()
    );

    WeightedGraph::from_petgraph(&graph)
}

/// Maps `0..n(n-1)/2` onto the pairs `(a, b)`, `a < b`, in row-major order.
fn pair_from_index(mut index: usize, n: usize) -> (usize, usize) {
    let mut a = 0;
    loop {
        let row_len = n - 1 - a;
        if index < row_len {
            return (a, a + 1 + index);
        }
        index -= row_len;
        a += 1;
    }
}
