use std::fmt::{Display, Formatter};
use std::ops::Index;

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use crate::error::{MaxCutError, Result};
use crate::partition::{Partition, MAX_VERTICES};

/// Symmetric, zero-diagonal matrix of integer edge weights. A weight of 0
/// means "no edge".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WeightedGraph {
    n: usize,
    weights: Vec<u32>,
}

impl WeightedGraph {
    pub fn from_matrix(matrix: Vec<Vec<u32>>) -> Result<Self> {
        let n = matrix.len();
        check_vertex_count(n)?;

        let mut weights = Vec::with_capacity(n * n);
        for (i, row) in matrix.into_iter().enumerate() {
            if row.len() != n {
                return Err(MaxCutError::invalid(format!(
                    "row {i} has {} entries, expected {n}",
                    row.len()
                )));
            }
            weights.extend(row);
        }

        let graph = WeightedGraph { n, weights };
        for i in 0..n {
            if graph[(i, i)] != 0 {
                return Err(MaxCutError::invalid(format!(
                    "diagonal entry ({i}, {i}) is {}, expected 0",
                    graph[(i, i)]
                )));
            }
            for j in (i + 1)..n {
                if graph[(i, j)] != graph[(j, i)] {
                    return Err(MaxCutError::invalid(format!(
                        "matrix is not symmetric at ({i}, {j}): {} != {}",
                        graph[(i, j)],
                        graph[(j, i)]
                    )));
                }
            }
        }

        Ok(graph)
    }

    /// Builds the matrix from an undirected petgraph graph. Node `k` of the
    /// petgraph graph becomes vertex `k`; parallel edges add up.
    pub fn from_petgraph<N>(graph: &UnGraph<N, u32>) -> Result<Self> {
        let n = graph.node_count();
        check_vertex_count(n)?;

        let mut weights = vec![0u32; n * n];
        for edge in graph.edge_references() {
            let (a, b) = (edge.source().index(), edge.target().index());
            if a == b {
                return Err(MaxCutError::invalid(format!("self-loop on vertex {a}")));
            }
            let Some(sum) = weights[a * n + b].checked_add(*edge.weight()) else {
                return Err(MaxCutError::invalid(format!(
                    "weight of edge ({a}, {b}) overflows u32"
                )));
            };
            weights[a * n + b] = sum;
            weights[b * n + a] = sum;
        }

        Ok(WeightedGraph { n, weights })
    }

    /// The 5-vertex worked example of the harness: a hub (vertex 2) joined to
    /// two weighted triangles.
    pub fn reference_example() -> Self {
        WeightedGraph {
            n: 5,
            weights: vec![
                0, 1, 2, 0, 0,
                1, 0, 2, 0, 0,
                2, 2, 0, 2, 2,
                0, 0, 2, 0, 1,
                0, 0, 2, 1, 0,
            ],
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.n
    }

    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    pub fn weight(&self, i: usize, j: usize) -> u32 {
        self[(i, j)]
    }

    pub fn row(&self, i: usize) -> &[u32] {
        &self.weights[i * self.n..(i + 1) * self.n]
    }

    /// Edges as `(i, j, weight)` with `i < j`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, u32)> + '_ {
        (0..self.n).flat_map(move |i| {
            ((i + 1)..self.n)
                .map(move |j| (i, j, self[(i, j)]))
                .filter(|&(_, _, w)| w > 0)
        })
    }

    pub fn to_matrix(&self) -> Vec<Vec<u32>> {
        (0..self.n).map(|i| self.row(i).to_vec()).collect()
    }

    pub fn to_petgraph(&self) -> UnGraph<usize, u32> {
        let mut graph = UnGraph::with_capacity(self.n, self.edge_count());
        let nodes: Vec<NodeIndex> = (0..self.n).map(|v| graph.add_node(v)).collect();
        for (i, j, w) in self.edges() {
            graph.add_edge(nodes[i], nodes[j], w);
        }
        graph
    }

    /// `sum_{i,j} W[i][j] * x[i] * (1 - x[j])`: every edge with one end on
    /// each side, counted once.
    pub fn cut_value(&self, partition: &Partition) -> u64 {
        debug_assert_eq!(partition.len(), self.n);
        let mut cut = 0u64;
        for i in (0..self.n).filter(|&i| partition.side(i)) {
            let row = self.row(i);
            for (j, &w) in row.iter().enumerate() {
                if !partition.side(j) {
                    cut += u64::from(w);
                }
            }
        }
        cut
    }

    pub(crate) fn check_width(&self, width: usize) -> Result<()> {
        if width != self.n {
            return Err(MaxCutError::invalid(format!(
                "bitstrings of width {width} do not match a graph of {} vertices",
                self.n
            )));
        }
        Ok(())
    }
}

pub(crate) fn check_vertex_count(n: usize) -> Result<()> {
    if n == 0 || n > MAX_VERTICES {
        return Err(MaxCutError::invalid(format!(
            "vertex count must be between 1 and {MAX_VERTICES}, got {n}"
        )));
    }
    Ok(())
}

impl Index<(usize, usize)> for WeightedGraph {
    type Output = u32;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        &self.weights[i * self.n + j]
    }
}

impl Display for WeightedGraph {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for i in 0..self.n {
            let row = self
                .row(i)
                .iter()
                .map(|w| w.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "[{row}]")?;
        }
        Ok(())
    }
}
