//! PyO3 bindings for the `regpoly` engine.
//!
//! Notes
//! - Bindings stay thin: plain floats, tuples and dicts in, dicts out.
//! - Side counts arrive as Python numbers and are checked, never truncated;
//!   every engine error surfaces as `ValueError`.

use pyo3::prelude::*;

mod art;
mod common;
mod geom;

#[pymodule]
fn regpoly_native(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add("__version__", regpoly::VERSION)?;
    geom::register(m)?;
    art::register(m)?;
    Ok(())
}
