//! Vertex loops of regular polygons for rendering.
//!
//! Model
//! - `sides + 1` angles evenly spaced over [0, 2π] inclusive, shifted by the
//!   rotation, mapped to `center + r (cos θ, sin θ)`.
//! - Counter-clockwise, first vertex on the +x axis before rotation.
//! - The last point closes the loop and is bit-identical to the first.
//!
//! Code cross-refs: `types::PolygonSpec`, `scene::compose_scene`

use std::f64::consts::{PI, TAU};

use crate::types::{check_radius, check_sides, GeomCfg, InvalidPolygonError, Point, PolygonSpec};

/// Closed, ordered boundary of a regular polygon.
#[derive(Clone, Debug, PartialEq)]
pub struct VertexSet {
    points: Vec<Point>,
    center: Point,
    radius: f64,
    rotation_degrees: f64,
}

impl VertexSet {
    /// Render a validated spec around `center` (radius from the side length).
    pub fn for_spec(
        spec: &PolygonSpec,
        center: Point,
        rotation_degrees: f64,
    ) -> Result<Self, InvalidPolygonError> {
        generate_vertices(spec.sides(), center, spec.circumradius(), rotation_degrees)
    }

    /// All points including the closing duplicate (`sides + 1` entries).
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Distinct vertices only (`sides` entries).
    #[inline]
    pub fn open(&self) -> &[Point] {
        &self.points[..self.points.len() - 1]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn sides(&self) -> u32 {
        (self.points.len() - 1) as u32
    }

    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn rotation_degrees(&self) -> f64 {
        self.rotation_degrees
    }

    pub fn first(&self) -> Point {
        self.points[0]
    }

    pub fn last(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    pub fn is_closed_eps(&self, cfg: GeomCfg) -> bool {
        (self.first() - self.last()).norm() <= cfg.eps_closure
    }

    /// Labels `V1..Vn` for the distinct vertices, in loop order.
    pub fn labels(&self) -> Vec<String> {
        (1..=self.open().len()).map(|i| format!("V{i}")).collect()
    }

    /// Axis-aligned bounding box `(min, max)` of the vertices.
    pub fn bounds(&self) -> (Point, Point) {
        let mut lo = self.points[0];
        let mut hi = self.points[0];
        for p in &self.points[1..] {
            lo = lo.inf(p);
            hi = hi.sup(p);
        }
        (lo, hi)
    }

    /// Square viewport around the center with half-width `margin * radius`.
    pub fn viewport(&self, margin: f64) -> (Point, Point) {
        let half = Point::new(self.radius * margin, self.radius * margin);
        (self.center - half, self.center + half)
    }

    /// Boundary length computed from the points (matches `n * s` up to rounding).
    pub fn perimeter(&self) -> f64 {
        self.points.windows(2).map(|w| (w[1] - w[0]).norm()).sum()
    }

    /// Shoelace area of the loop (positive: counter-clockwise).
    pub fn signed_area(&self) -> f64 {
        0.5 * self
            .points
            .windows(2)
            .map(|w| crate::parallelogram_area(w[0] - self.center, w[1] - self.center))
            .sum::<f64>()
    }
}

/// Generate the closed vertex loop of a regular polygon.
///
/// Errors when `sides < 3`, `radius` is not finite and positive, or
/// `center`/`rotation_degrees` are not finite.
pub fn generate_vertices(
    sides: u32,
    center: Point,
    radius: f64,
    rotation_degrees: f64,
) -> Result<VertexSet, InvalidPolygonError> {
    let n = check_sides(sides)?;
    let r = check_radius(radius)?;
    if !(center.x.is_finite() && center.y.is_finite()) {
        return Err(InvalidPolygonError::NonFinite { what: "center" });
    }
    if !rotation_degrees.is_finite() {
        return Err(InvalidPolygonError::NonFinite { what: "rotation" });
    }
    let offset = rotation_degrees.to_radians();
    let step = TAU / f64::from(n);
    let mut points: Vec<Point> = (0..n)
        .map(|k| {
            let theta = f64::from(k) * step + offset;
            let (sin, cos) = theta.sin_cos();
            center + Point::new(cos, sin) * r
        })
        .collect();
    points.push(points[0]);
    Ok(VertexSet {
        points,
        center,
        radius: r,
        rotation_degrees,
    })
}

/// Circumradius of a regular polygon with edge length `side_length`.
pub fn side_length_to_radius(sides: u32, side_length: f64) -> Result<f64, InvalidPolygonError> {
    let n = check_sides(sides)?;
    let s = crate::types::check_side_length(side_length)?;
    Ok(circumradius_unchecked(n, s))
}

/// Edge length of a regular polygon with circumradius `radius`.
pub fn radius_to_side_length(sides: u32, radius: f64) -> Result<f64, InvalidPolygonError> {
    let n = check_sides(sides)?;
    let r = check_radius(radius)?;
    let s = 2.0 * r * (PI / f64::from(n)).sin();
    crate::types::check_side_length(s)
}

#[inline]
pub(crate) fn circumradius_unchecked(n: u32, s: f64) -> f64 {
    s / (2.0 * (PI / f64::from(n)).sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props::compute_properties;
    use nalgebra::vector;
    use proptest::prelude::*;

    #[test]
    fn square_at_origin() {
        let vs = generate_vertices(4, Point::zeros(), 1.0, 0.0).unwrap();
        assert_eq!(vs.len(), 5);
        assert_eq!(vs.first(), vector![1.0, 0.0]);
        assert_eq!(vs.last(), vs.first());
        // Counter-clockwise: second vertex on +y.
        let v2 = vs.points()[1];
        assert!(v2.x.abs() < 1e-12 && (v2.y - 1.0).abs() < 1e-12);
        assert!(vs.signed_area() > 0.0);
        assert!(vs.is_closed_eps(GeomCfg::default()));
    }

    #[test]
    fn first_vertex_offset_from_center() {
        let c = vector![2.0, -3.0];
        let vs = generate_vertices(7, c, 1.5, 0.0).unwrap();
        assert_eq!(vs.first(), vector![3.5, -3.0]);
        for p in vs.points() {
            assert!(((p - c).norm() - 1.5).abs() < 1e-12);
        }
    }

    #[test]
    fn rotation_moves_first_vertex() {
        let vs = generate_vertices(3, Point::zeros(), 2.0, 90.0).unwrap();
        let v1 = vs.first();
        assert!(v1.x.abs() < 1e-12);
        assert!((v1.y - 2.0).abs() < 1e-12);
        assert_eq!(vs.last(), v1);
    }

    #[test]
    fn rejects_invalid_requests() {
        assert_eq!(
            generate_vertices(2, Point::zeros(), 1.0, 0.0),
            Err(InvalidPolygonError::TooFewSides { sides: 2 })
        );
        assert!(matches!(
            generate_vertices(5, Point::zeros(), 0.0, 0.0),
            Err(InvalidPolygonError::NonPositiveRadius { .. })
        ));
        assert!(matches!(
            generate_vertices(5, Point::zeros(), -1.0, 0.0),
            Err(InvalidPolygonError::NonPositiveRadius { .. })
        ));
        assert!(matches!(
            generate_vertices(5, vector![f64::NAN, 0.0], 1.0, 0.0),
            Err(InvalidPolygonError::NonFinite { what: "center" })
        ));
        assert!(matches!(
            generate_vertices(5, Point::zeros(), 1.0, f64::INFINITY),
            Err(InvalidPolygonError::NonFinite { what: "rotation" })
        ));
        assert!(side_length_to_radius(2, 1.0).is_err());
    }

    #[test]
    fn side_length_radius_known_values() {
        // Hexagon: r = s. Square: r = s / sqrt(2).
        assert!((side_length_to_radius(6, 1.0).unwrap() - 1.0).abs() < 1e-12);
        let r4 = side_length_to_radius(4, 1.0).unwrap();
        assert!((r4 - 1.0 / 2f64.sqrt()).abs() < 1e-12);
        let s = radius_to_side_length(9, side_length_to_radius(9, 0.75).unwrap()).unwrap();
        assert!((s - 0.75).abs() < 1e-12);
        assert!(radius_to_side_length(9, 0.0).is_err());
    }

    #[test]
    fn labels_bounds_and_viewport() {
        let vs = generate_vertices(4, Point::zeros(), 1.0, 0.0).unwrap();
        assert_eq!(vs.labels(), vec!["V1", "V2", "V3", "V4"]);
        let (lo, hi) = vs.bounds();
        assert!((lo - vector![-1.0, -1.0]).norm() < 1e-12);
        assert!((hi - vector![1.0, 1.0]).norm() < 1e-12);
        let (vlo, vhi) = vs.viewport(1.5);
        assert_eq!(vlo, vector![-1.5, -1.5]);
        assert_eq!(vhi, vector![1.5, 1.5]);
    }

    #[test]
    fn spec_rendering_matches_side_length() {
        let spec = PolygonSpec::new(5, 2.0).unwrap();
        let vs = VertexSet::for_spec(&spec, Point::zeros(), 0.0).unwrap();
        for w in vs.points().windows(2) {
            assert!(((w[1] - w[0]).norm() - 2.0).abs() < 1e-12);
        }
        let props = compute_properties(5, 2.0).unwrap();
        assert!((vs.perimeter() - props.perimeter).abs() < 1e-9);
        assert!((vs.signed_area() - props.area).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn prop_loop_shape(
            n in 3u32..=500,
            r in 1e-2f64..1e2,
            rot in -720.0f64..720.0,
            cx in -10.0f64..10.0,
            cy in -10.0f64..10.0,
        ) {
            let c = Point::new(cx, cy);
            let vs = generate_vertices(n, c, r, rot).unwrap();
            prop_assert_eq!(vs.len(), n as usize + 1);
            prop_assert_eq!(vs.sides(), n);
            prop_assert_eq!(vs.first(), vs.last());
            for p in vs.points() {
                prop_assert!(((p - c).norm() - r).abs() < 1e-9 * r.max(1.0));
            }
        }
    }
}
