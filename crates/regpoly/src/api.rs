//! Flat function surface used by front-ends.
//!
//! The names follow the operations front-ends call: compute properties, derive
//! a side length, generate vertices, compose a scene, pick a color. Everything
//! here forwards to the owning module.

pub use crate::palette::color_for;
pub use crate::props::{compute_properties, derive_side_length, derive_side_length_named};
pub use crate::scene::compose_scene;
pub use crate::types::sides_from_f64;
pub use crate::vertices::{generate_vertices, radius_to_side_length, side_length_to_radius};

use crate::props::PolygonProperties;
use crate::types::{InvalidPolygonError, Point, PolygonSpec};
use crate::vertices::VertexSet;

/// Properties for a side count given as a real number (checked, never truncated).
pub fn compute_properties_f64(
    sides: f64,
    side_length: f64,
) -> Result<PolygonProperties, InvalidPolygonError> {
    compute_properties(sides_from_f64(sides)?, side_length)
}

/// Vertices of the polygon with edge length `side_length` centered at `center`.
pub fn vertices_for_side_length(
    sides: u32,
    side_length: f64,
    center: Point,
    rotation_degrees: f64,
) -> Result<VertexSet, InvalidPolygonError> {
    VertexSet::for_spec(&PolygonSpec::new(sides, side_length)?, center, rotation_degrees)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn real_valued_sides_are_checked() {
        assert!(compute_properties_f64(6.0, 1.0).is_ok());
        assert!(matches!(
            compute_properties_f64(6.5, 1.0),
            Err(InvalidPolygonError::NonIntegerSides { .. })
        ));
        assert_eq!(
            compute_properties_f64(2.0, 1.0),
            Err(InvalidPolygonError::TooFewSides { sides: 2 })
        );
    }

    #[test]
    fn vertices_by_side_length() {
        let vs = vertices_for_side_length(6, 1.0, vector![0.0, 0.0], 0.0).unwrap();
        assert_eq!(vs.len(), 7);
        assert!((vs.first() - vector![1.0, 0.0]).norm() < 1e-12);
    }

    #[test]
    fn parallelogram_area_axis_aligned() {
        let a = vector![1.0, 0.0];
        let b = vector![0.0, 2.5];
        assert!((crate::parallelogram_area(a, b) - 2.5).abs() < 1e-12);
        assert!((crate::parallelogram_area(b, a) + 2.5).abs() < 1e-12);
    }
}
