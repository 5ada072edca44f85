use crate::cost::fit::DEFAULT_MAX_DISTINCT;
use crate::cost::CostKind;
use crate::error::{MaxCutError, Result};
use crate::graph::builder::build_graph;
use crate::graph::weighted::{check_vertex_count, WeightedGraph};

pub const DEFAULT_SHOTS: [usize; 12] = [1, 2, 4, 8, 12, 16, 24, 32, 64, 96, 128, 256];

/// Parameters of a shot-count scan.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentConfig {
    pub n_vertices: usize,
    pub n_edges: usize,
    pub seed: u64,
    /// Number of entangling layers of the ansatz.
    pub depth: usize,
    pub repetitions: usize,
    pub shots: Vec<usize>,
    /// Shots used to sample the optimized parameters once at the end of each
    /// repetition.
    pub final_eval_shots: usize,
    pub cost: CostKind,
    pub max_distinct: usize,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        ExperimentConfig {
            n_vertices: 10,
            n_edges: 20,
            seed: 2000,
            depth: 2,
            repetitions: 100,
            shots: DEFAULT_SHOTS.to_vec(),
            final_eval_shots: 128,
            cost: CostKind::Mean,
            max_distinct: DEFAULT_MAX_DISTINCT,
        }
    }
}

impl ExperimentConfig {
    pub fn validate(&self) -> Result<()> {
        check_vertex_count(self.n_vertices)?;
        let max_edges = self.n_vertices * (self.n_vertices - 1) / 2;
        if self.n_edges > max_edges {
            return Err(MaxCutError::invalid(format!(
                "{} edges do not fit in a simple graph on {} vertices",
                self.n_edges, self.n_vertices
            )));
        }
        if self.repetitions == 0 {
            return Err(MaxCutError::invalid("at least one repetition is required"));
        }
        if self.shots.is_empty() || self.shots.contains(&0) {
            return Err(MaxCutError::invalid(
                "shot list must be non-empty and contain only positive counts",
            ));
        }
        if self.final_eval_shots == 0 {
            return Err(MaxCutError::invalid("final evaluation needs at least one shot"));
        }
        Ok(())
    }

    /// Rejects a graph whose size differs from the configured instance.
    pub fn check_graph(&self, graph: &WeightedGraph) -> Result<()> {
        if graph.vertex_count() != self.n_vertices || graph.edge_count() != self.n_edges {
            return Err(MaxCutError::invalid(format!(
                "graph has {} vertices and {} edges, configuration expects {} and {}",
                graph.vertex_count(),
                graph.edge_count(),
                self.n_vertices,
                self.n_edges
            )));
        }
        Ok(())
    }

    /// The random problem instance this configuration describes.
    pub fn graph(&self) -> Result<WeightedGraph> {
        build_graph(self.n_vertices, self.n_edges, self.seed)
    }

    /// Settings for one repetition at `shots` shots.
    pub fn run_settings(&self, shots: usize) -> RunSettings {
        RunSettings {
            shots,
            final_eval_shots: self.final_eval_shots,
            depth: self.depth,
            cost: self.cost,
        }
    }
}

/// What a single optimization run needs to know.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSettings {
    pub shots: usize,
    pub final_eval_shots: usize,
    pub depth: usize,
    pub cost: CostKind,
}
