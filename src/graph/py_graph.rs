use petgraph::graph::{NodeIndex, UnGraph};
use pyo3::{types::PyAnyMethods, Bound, FromPyObject, PyAny, PyResult};

use crate::graph::weighted::WeightedGraph;

/// Accepts either a networkx graph whose nodes are labelled `0..n` (edge
/// attribute `weight`, default 1) or a square nested sequence / numpy array
/// of non-negative integers.
impl<'py> FromPyObject<'py> for WeightedGraph {
    fn extract_bound(ob: &Bound<'py, PyAny>) -> PyResult<Self> {
        if ob.hasattr("edges")? && ob.hasattr("number_of_nodes")? {
            let n = ob.call_method0("number_of_nodes")?.extract::<usize>()?;
            let edges_obj = ob.getattr("edges")?;
            let edges_iter = edges_obj.call_method1("data", ("weight", 1))?.iter()?;

            let mut graph = UnGraph::<usize, u32>::with_capacity(n, 0);
            let nodes: Vec<NodeIndex> = (0..n).map(|v| graph.add_node(v)).collect();
            for item in edges_iter {
                let (source, target, weight) = item?.extract::<(usize, usize, u32)>()?;
                let (Some(&a), Some(&b)) = (nodes.get(source), nodes.get(target)) else {
                    return Err(pyo3::exceptions::PyValueError::new_err(format!(
                        "edge ({source}, {target}) references a node outside 0..{n}"
                    )));
                };
                graph.update_edge(a, b, weight);
            }

            return Ok(WeightedGraph::from_petgraph(&graph)?);
        }

        let matrix = ob.extract::<Vec<Vec<u32>>>()?;
        Ok(WeightedGraph::from_matrix(matrix)?)
    }
}
