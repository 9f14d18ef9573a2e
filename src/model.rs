use roadmap_core::prelude::*;

use pyo3::prelude::*;
#[cfg(feature = "stubgen")]
use pyo3_stub_gen::derive::{gen_stub_pyclass, gen_stub_pyfunction, gen_stub_pymethods};

use crate::to_py_err;

/// RoadGraph
///
/// The road network of a map: intersections joined by directed road
/// segments, each segment belonging to a named road.
///
/// All route searches and structural analyses run against this object. It is
/// immutable once loaded, so the same graph can serve any number of calls.
///
/// Example:
///
/// .. code-block:: python
///
///     graph = load_road_graph("data/auckland")
///     route = find_path(graph, 10523, 18872)
#[cfg_attr(feature = "stubgen", gen_stub_pyclass)]
#[pyclass(name = "RoadGraph")]
pub struct PyRoadGraph {
    pub(crate) graph: RoadGraph,
}

#[cfg_attr(feature = "stubgen", gen_stub_pymethods)]
#[pymethods]
impl PyRoadGraph {
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn segment_count(&self) -> usize {
        self.graph.segment_count()
    }

    pub fn road_count(&self) -> usize {
        self.graph.road_count()
    }

    /// Describe an intersection: its id, planar location and the roads
    /// meeting there
    pub fn describe_node(&self, node_id: NodeId) -> PyResult<String> {
        let node = self.graph.node_index(node_id).map_err(to_py_err)?;
        let intersection = self.graph.intersection(node).map_err(to_py_err)?;
        Ok(format!(
            "ID: {}  loc: ({:.3}, {:.3})\nroads: {}",
            intersection.id,
            intersection.geometry.x(),
            intersection.geometry.y(),
            self.graph.road_names_at(node).join(", ")
        ))
    }

    fn __repr__(&self) -> String {
        format!(
            "RoadGraph with {} intersections, {} roads and {} segments",
            self.graph.node_count(),
            self.graph.road_count(),
            self.graph.segment_count()
        )
    }

    fn __str__(&self) -> String {
        self.__repr__()
    }
}

/// Load a road graph from a map directory
///
/// The directory must contain the three tab-separated map files:
/// ``nodeID-lat-lon.tab``, ``roadID-roadInfo.tab`` and
/// ``roadSeg-roadID-length-nodeID-nodeID-coords.tab``.
///
/// Parameters
/// ----------
/// directory : str
///     Path to the map directory
///
/// Returns
/// -------
/// RoadGraph
///     The loaded road network
///
/// Raises
/// ------
/// ValueError
///     If a map file is missing
/// RuntimeError
///     If a map file cannot be read
///
/// Notes
/// -----
/// The function releases the GIL while loading.
#[cfg_attr(feature = "stubgen", gen_stub_pyfunction)]
#[pyfunction(name = "load_road_graph")]
#[pyo3(signature = (directory))]
pub fn py_load_road_graph(py: Python<'_>, directory: &str) -> PyResult<PyRoadGraph> {
    py.detach(|| {
        let config = RoadGraphConfig::from_dir(directory);
        let graph = create_road_graph(&config).map_err(to_py_err)?;
        Ok(PyRoadGraph { graph })
    })
}
