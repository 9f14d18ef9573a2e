use pyo3::prelude::*;
#[cfg(feature = "stubgen")]
use pyo3_stub_gen::derive::gen_stub_pyfunction;

use crate::model::PyRoadGraph;
use crate::to_py_err;
use roadmap_core::prelude::*;

/// Articulation points (cut vertices) of the road network
///
/// Intersections whose removal would split the network apart. Segment
/// directions are ignored.
///
/// Parameters
/// ----------
/// road_graph : RoadGraph
///     The road network
/// root_id : int, optional
///     Only analyse the part of the network connected to this intersection.
///     If None, every part of the network is analysed.
///
/// Returns
/// -------
/// list[int]
///     Sorted intersection ids
#[cfg_attr(feature = "stubgen", gen_stub_pyfunction)]
#[pyfunction]
#[pyo3(signature = (road_graph, root_id=None))]
pub fn articulation_points(
    py: Python<'_>,
    road_graph: &PyRoadGraph,
    root_id: Option<NodeId>,
) -> PyResult<Vec<NodeId>> {
    let points = py
        .detach(|| match root_id {
            Some(root) => find_articulation_points(&road_graph.graph, root),
            None => find_all_articulation_points(&road_graph.graph),
        })
        .map_err(to_py_err)?;

    let mut points: Vec<NodeId> = points.into_iter().collect();
    points.sort_unstable();
    Ok(points)
}
