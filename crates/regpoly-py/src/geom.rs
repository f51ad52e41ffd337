//! Property and vertex bindings (kept separate so `lib.rs` stays tiny).

use crate::common::{map_polygon_err, vertex_set_to_py};
use nalgebra::Vector2;
use pyo3::prelude::*;
use pyo3::types::PyDict;
use regpoly::api;

/// All measurements of a regular polygon as a dict.
#[pyfunction]
pub fn compute_properties(py: Python<'_>, sides: f64, side_length: f64) -> PyResult<PyObject> {
    let p = api::compute_properties_f64(sides, side_length).map_err(map_polygon_err)?;
    let dict = PyDict::new(py);
    dict.set_item("sides", p.sides)?;
    dict.set_item("side_length", p.side_length)?;
    dict.set_item("interior_angle_degrees", p.interior_angle_degrees)?;
    dict.set_item("exterior_angle_degrees", p.exterior_angle_degrees)?;
    dict.set_item("central_angle_degrees", p.central_angle_degrees)?;
    dict.set_item("interior_angle_sum_degrees", p.interior_angle_sum_degrees)?;
    dict.set_item("perimeter", p.perimeter)?;
    dict.set_item("apothem", p.apothem)?;
    dict.set_item("circumradius", p.circumradius)?;
    dict.set_item("area", p.area)?;
    Ok(dict.into())
}

/// Side length from one known measurement; `kind` is side-length, perimeter, area or apothem.
#[pyfunction]
pub fn derive_side_length(sides: f64, known: f64, kind: &str) -> PyResult<f64> {
    let n = api::sides_from_f64(sides).map_err(map_polygon_err)?;
    api::derive_side_length_named(n, known, kind).map_err(map_polygon_err)
}

#[pyfunction]
pub fn side_length_to_radius(sides: f64, side_length: f64) -> PyResult<f64> {
    let n = api::sides_from_f64(sides).map_err(map_polygon_err)?;
    api::side_length_to_radius(n, side_length).map_err(map_polygon_err)
}

#[pyfunction]
#[pyo3(signature = (sides, radius, center = (0.0, 0.0), rotation_degrees = 0.0))]
pub fn generate_vertices(
    py: Python<'_>,
    sides: f64,
    radius: f64,
    center: (f64, f64),
    rotation_degrees: f64,
) -> PyResult<PyObject> {
    let n = api::sides_from_f64(sides).map_err(map_polygon_err)?;
    let vs = api::generate_vertices(n, Vector2::new(center.0, center.1), radius, rotation_degrees)
        .map_err(map_polygon_err)?;
    vertex_set_to_py(py, &vs)
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(compute_properties, m)?)?;
    m.add_function(wrap_pyfunction!(derive_side_length, m)?)?;
    m.add_function(wrap_pyfunction!(side_length_to_radius, m)?)?;
    m.add_function(wrap_pyfunction!(generate_vertices, m)?)?;
    Ok(())
}
