use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};
use regpoly::{InvalidPolygonError, VertexSet};

pub fn map_polygon_err(err: InvalidPolygonError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// `{"sides", "center", "radius", "rotation_degrees", "points"}`; `points`
/// holds `sides + 1` pairs (closing point included).
pub fn vertex_set_to_py(py: Python<'_>, vs: &VertexSet) -> PyResult<PyObject> {
    let points = PyList::empty(py);
    for p in vs.points() {
        points.append((p.x, p.y))?;
    }
    let dict = PyDict::new(py);
    dict.set_item("sides", vs.sides())?;
    dict.set_item("center", (vs.center().x, vs.center().y))?;
    dict.set_item("radius", vs.radius())?;
    dict.set_item("rotation_degrees", vs.rotation_degrees())?;
    dict.set_item("labels", vs.labels())?;
    dict.set_item("points", points)?;
    Ok(dict.into())
}

pub fn get_required<'py, T: FromPyObject<'py>>(dict: &'py PyDict, key: &str) -> PyResult<T> {
    match dict.get_item(key)? {
        Some(value) => value.extract(),
        None => Err(PyValueError::new_err(format!(
            "missing required key '{key}'"
        ))),
    }
}

pub fn get_with_default<'py, T>(dict: &'py PyDict, key: &str, default: T) -> PyResult<T>
where
    T: FromPyObject<'py>,
{
    match dict.get_item(key)? {
        Some(value) if !value.is_none() => value.extract(),
        _ => Ok(default),
    }
}
