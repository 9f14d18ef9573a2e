use pyo3::prelude::*;

use analysis::articulation_points;
use model::{PyRoadGraph, py_load_road_graph};
use routing::{nearest_node, py_find_path, route_geojson};

pub mod analysis;
pub mod model;
pub mod routing;

/// A Python module implemented in Rust.
#[pymodule]
fn roadmap(m: &Bound<'_, PyModule>) -> PyResult<()> {
    pyo3_log::init();

    m.add_class::<PyRoadGraph>()?;
    m.add_function(wrap_pyfunction!(py_load_road_graph, m)?)?;

    m.add_function(wrap_pyfunction!(py_find_path, m)?)?;
    m.add_function(wrap_pyfunction!(route_geojson, m)?)?;
    m.add_function(wrap_pyfunction!(nearest_node, m)?)?;

    m.add_function(wrap_pyfunction!(articulation_points, m)?)?;
    Ok(())
}

#[cfg(feature = "stubgen")]
pyo3_stub_gen::define_stub_info_gatherer!(stub_info);

/// Convert an engine error into the matching Python exception
pub(crate) fn to_py_err(error: roadmap_core::Error) -> PyErr {
    use roadmap_core::Error;

    match error {
        Error::InvalidNodeId(_) | Error::InvalidNodeIndex | Error::InvalidData(_) => {
            PyErr::new::<pyo3::exceptions::PyValueError, _>(error.to_string())
        }
        _ => PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(error.to_string()),
    }
}
