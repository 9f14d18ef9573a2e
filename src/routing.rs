use geo::Point;
use pyo3::prelude::*;
use pyo3::types::PyDict;
#[cfg(feature = "stubgen")]
use pyo3_stub_gen::derive::gen_stub_pyfunction;

use crate::model::PyRoadGraph;
use crate::to_py_err;
use roadmap_core::prelude::*;

/// Convert a found route to a Python dictionary
fn route_to_py<'py>(py: Python<'py>, route: &RoutePath) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("start", route.start)?;
    dict.set_item("goal", route.goal)?;
    dict.set_item("total_cost", route.total_cost)?;
    dict.set_item("nodes", route.nodes())?;

    let segments = route
        .segments
        .iter()
        .map(|segment| {
            let item = PyDict::new(py);
            item.set_item("from", segment.from)?;
            item.set_item("to", segment.to)?;
            item.set_item("road_name", &segment.road_name)?;
            item.set_item("length", segment.length)?;
            Ok(item)
        })
        .collect::<PyResult<Vec<_>>>()?;
    dict.set_item("segments", segments)?;

    let legs: Vec<(String, f64)> = route
        .legs()
        .into_iter()
        .map(|leg| (leg.road_name, leg.length))
        .collect();
    dict.set_item("roads", legs)?;

    Ok(dict)
}

/// Find the shortest route between two intersections
///
/// Parameters
/// ----------
/// road_graph : RoadGraph
///     The road network
/// start_id : int
///     Map data id of the start intersection
/// goal_id : int
///     Map data id of the goal intersection
///
/// Returns
/// -------
/// dict or None
///     ``total_cost`` (km), ``segments`` (list of dicts with ``road_name``
///     and ``length``), ``roads`` (consecutive segments merged per road) and
///     ``nodes``; None when the goal is unreachable
#[cfg_attr(feature = "stubgen", gen_stub_pyfunction)]
#[pyfunction(name = "find_path")]
#[pyo3(signature = (road_graph, start_id, goal_id))]
pub fn py_find_path<'py>(
    py: Python<'py>,
    road_graph: &PyRoadGraph,
    start_id: NodeId,
    goal_id: NodeId,
) -> PyResult<Option<Bound<'py, PyDict>>> {
    let outcome = py
        .detach(|| find_path(&road_graph.graph, start_id, goal_id))
        .map_err(to_py_err)?;

    outcome
        .route()
        .map(|route| route_to_py(py, route))
        .transpose()
}

/// Shortest route between two intersections as a GeoJSON FeatureCollection
/// string, None when the goal is unreachable
#[cfg_attr(feature = "stubgen", gen_stub_pyfunction)]
#[pyfunction]
#[pyo3(signature = (road_graph, start_id, goal_id))]
pub fn route_geojson(
    py: Python<'_>,
    road_graph: &PyRoadGraph,
    start_id: NodeId,
    goal_id: NodeId,
) -> PyResult<Option<String>> {
    py.detach(|| {
        let outcome = find_path(&road_graph.graph, start_id, goal_id).map_err(to_py_err)?;
        outcome
            .route()
            .map(|route| route.to_geojson_string(&road_graph.graph))
            .transpose()
            .map_err(to_py_err)
    })
}

/// Id of the intersection closest to the planar point ``(x, y)`` (km), None
/// when nothing lies within ``max_distance``
#[cfg_attr(feature = "stubgen", gen_stub_pyfunction)]
#[pyfunction]
#[pyo3(signature = (road_graph, x, y, max_distance=MAX_CLICKED_DISTANCE))]
pub fn nearest_node(
    road_graph: &PyRoadGraph,
    x: f64,
    y: f64,
    max_distance: f64,
) -> PyResult<Option<NodeId>> {
    road_graph
        .graph
        .node_near(&Point::new(x, y), max_distance)
        .map(|node| road_graph.graph.node_id(node))
        .transpose()
        .map_err(to_py_err)
}
