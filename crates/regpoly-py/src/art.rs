//! Art-mode bindings: palette lookup, scene composition, random scenes.
//!
//! Scenes cross the boundary as lists of dicts (`sides`, `radius`,
//! `rotation`) so they round-trip through JSON on the Python side.

use crate::common::{get_required, get_with_default, map_polygon_err, vertex_set_to_py};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyAny, PyDict, PyList};
use regpoly::palette::Color;
use regpoly::scene::{random_scene, ArtScene, RandomSceneCfg, SceneEntry};
use regpoly::VertexSet;

/// `{"name", "fill", "line"}` with CSS color strings.
#[pyfunction]
pub fn color_for(py: Python<'_>, index: usize) -> PyResult<PyObject> {
    color_to_py(py, regpoly::api::color_for(index))
}

/// Vertex loops for an ordered list of polygons, colored by position.
#[pyfunction]
pub fn compose_scene(py: Python<'_>, entries: &PyAny) -> PyResult<PyObject> {
    let scene = ArtScene::from_entries(entries_from_seq(entries)?);
    let layers = scene.render().map_err(map_polygon_err)?;
    layers_to_py(py, &layers)
}

/// Reproducible random scene; same seed, same scene.
#[pyfunction]
pub fn random_art(py: Python<'_>, seed: u64) -> PyResult<PyObject> {
    let scene = random_scene(RandomSceneCfg::default(), seed)
        .map_err(|err| PyValueError::new_err(err.to_string()))?;
    let layers = scene.render().map_err(map_polygon_err)?;
    layers_to_py(py, &layers)
}

fn entries_from_seq(obj: &PyAny) -> PyResult<Vec<SceneEntry>> {
    let mut entries = Vec::new();
    for (idx, item_res) in obj.iter()?.enumerate() {
        let item = item_res?;
        let dict = item.downcast::<PyDict>().map_err(|_| {
            PyValueError::new_err(format!(
                "entries[{idx}] must be a dict with 'sides', 'radius', 'rotation'"
            ))
        })?;
        let sides = get_required::<f64>(dict, "sides")?;
        let sides = regpoly::api::sides_from_f64(sides).map_err(map_polygon_err)?;
        let radius = get_required::<f64>(dict, "radius")?;
        let rotation = get_with_default::<f64>(dict, "rotation", 0.0)?;
        entries.push(SceneEntry::with_radius(sides, radius, rotation).map_err(map_polygon_err)?);
    }
    Ok(entries)
}

fn layers_to_py(py: Python<'_>, layers: &[(VertexSet, Color)]) -> PyResult<PyObject> {
    let out = PyList::empty(py);
    for (vs, color) in layers {
        let dict = PyDict::new(py);
        dict.set_item("polygon", vertex_set_to_py(py, vs)?)?;
        dict.set_item("color", color_to_py(py, *color)?)?;
        out.append(dict)?;
    }
    Ok(out.into())
}

fn color_to_py(py: Python<'_>, color: Color) -> PyResult<PyObject> {
    let dict = PyDict::new(py);
    dict.set_item("name", color.name)?;
    dict.set_item("fill", color.fill.to_string())?;
    dict.set_item("line", color.line.to_string())?;
    Ok(dict.into())
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(color_for, m)?)?;
    m.add_function(wrap_pyfunction!(compose_scene, m)?)?;
    m.add_function(wrap_pyfunction!(random_art, m)?)?;
    Ok(())
}
