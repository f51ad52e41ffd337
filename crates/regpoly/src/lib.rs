//! Regular-polygon geometry engine.
//!
//! Two stateless pieces:
//! - `props`: angles, perimeter, apothem and area from a side count plus one
//!   known measurement (and the inverse derivations).
//! - `vertices`/`scene`: closed vertex loops for rendering, single polygons or
//!   ordered art scenes.
//!
//! Every entry point is a pure function of its inputs. Front-ends (the CLI,
//! the Python bindings) own all session state and all rendering.

pub mod api;
pub mod names;
pub mod palette;
pub mod props;
pub mod scene;
pub mod types;
pub mod vertices;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use props::{compute_properties, derive_side_length, PolygonProperties, QuantityKind};
pub use types::{GeomCfg, InvalidPolygonError, Point, PolygonSpec};
pub use vertices::{generate_vertices, side_length_to_radius, VertexSet};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::names::{display_name, polygon_name};
    pub use crate::palette::{color_for, Color, Rgba};
    pub use crate::props::{
        compute_properties, derive_side_length, PolygonProperties, QuantityKind,
    };
    pub use crate::scene::{compose_scene, random_scene, ArtScene, RandomSceneCfg, SceneEntry};
    pub use crate::types::{sides_from_f64, GeomCfg, InvalidPolygonError, Point, PolygonSpec};
    pub use crate::vertices::{
        generate_vertices, radius_to_side_length, side_length_to_radius, VertexSet,
    };
    pub use nalgebra::Vector2 as Vec2;
}

/// Signed area of the parallelogram spanned by vectors `a` and `b` in R².
/// Positive for a→b counterclockwise, negative otherwise.
#[inline]
pub fn parallelogram_area(a: Point, b: Point) -> f64 {
    a.x * b.y - a.y * b.x
}
