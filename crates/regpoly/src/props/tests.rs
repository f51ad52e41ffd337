use super::*;
use crate::types::GeomCfg;
use proptest::prelude::*;

const EPS: f64 = 1e-9;

/// Field-wise comparison within `cfg.eps_compare`; side counts must match exactly.
fn approx_eq(a: &PolygonProperties, b: &PolygonProperties, cfg: GeomCfg) -> bool {
    let close = |x: f64, y: f64| (x - y).abs() <= cfg.eps_compare;
    a.sides == b.sides
        && close(a.side_length, b.side_length)
        && close(a.interior_angle_degrees, b.interior_angle_degrees)
        && close(a.exterior_angle_degrees, b.exterior_angle_degrees)
        && close(a.central_angle_degrees, b.central_angle_degrees)
        && close(a.interior_angle_sum_degrees, b.interior_angle_sum_degrees)
        && close(a.perimeter, b.perimeter)
        && close(a.apothem, b.apothem)
        && close(a.circumradius, b.circumradius)
        && close(a.area, b.area)
}

#[test]
fn known_values_triangle_square_hexagon() {
    let tri = compute_properties(3, 1.0).unwrap();
    assert!((tri.interior_angle_degrees - 60.0).abs() < 1e-12);
    assert!((tri.area - 3f64.sqrt() / 4.0).abs() < 1e-12);
    assert!((tri.area - 0.4330).abs() < 1e-4);

    let sq = compute_properties(4, 1.0).unwrap();
    assert!((sq.interior_angle_degrees - 90.0).abs() < 1e-12);
    assert!((sq.area - 1.0).abs() < 1e-12);
    assert!((sq.perimeter - 4.0).abs() < 1e-12);
    assert!((sq.apothem - 0.5).abs() < 1e-12);

    let hex = compute_properties(6, 1.0).unwrap();
    assert!((hex.interior_angle_degrees - 120.0).abs() < 1e-12);
    assert!((hex.exterior_angle_degrees - 60.0).abs() < 1e-12);
    assert!((hex.circumradius - 1.0).abs() < 1e-12);
    assert!((hex.interior_angle_sum_degrees - 720.0).abs() < 1e-12);
}

#[test]
fn central_angle_is_exterior_angle() {
    for n in 3..=64u32 {
        let p = compute_properties(n, 2.5).unwrap();
        assert_eq!(p.central_angle_degrees, p.exterior_angle_degrees);
    }
}

#[test]
fn rejects_degenerate_inputs() {
    assert_eq!(
        compute_properties(2, 1.0),
        Err(InvalidPolygonError::TooFewSides { sides: 2 })
    );
    assert!(compute_properties(0, 1.0).is_err());
    assert!(matches!(
        compute_properties(5, 0.0),
        Err(InvalidPolygonError::NonPositiveSideLength { .. })
    ));
    assert!(matches!(
        compute_properties(5, -3.0),
        Err(InvalidPolygonError::NonPositiveSideLength { .. })
    ));
    assert!(matches!(
        derive_side_length(5, 0.0, QuantityKind::Area),
        Err(InvalidPolygonError::NonPositiveQuantity {
            kind: QuantityKind::Area,
            ..
        })
    ));
    assert!(derive_side_length(2, 1.0, QuantityKind::Perimeter).is_err());
}

#[test]
fn quantity_kind_parsing() {
    assert_eq!("perimeter".parse::<QuantityKind>(), Ok(QuantityKind::Perimeter));
    assert_eq!("Area".parse::<QuantityKind>(), Ok(QuantityKind::Area));
    assert_eq!(" apothem ".parse::<QuantityKind>(), Ok(QuantityKind::Apothem));
    assert_eq!("side_length".parse::<QuantityKind>(), Ok(QuantityKind::SideLength));
    assert_eq!("Side Length".parse::<QuantityKind>(), Ok(QuantityKind::SideLength));
    for kind in QuantityKind::ALL {
        assert_eq!(kind.as_str().parse::<QuantityKind>(), Ok(kind));
    }
    assert_eq!(
        derive_side_length_named(6, 1.0, "volume"),
        Err(InvalidPolygonError::UnknownQuantityKind {
            name: "volume".to_string()
        })
    );
}

#[test]
fn calculator_defaults_describe_unit_hexagon() {
    // Default inputs offered by the calculator screen: P=6, A≈2.6, a≈0.87 for n=6.
    let from_p = derive_side_length(6, 6.0, QuantityKind::Perimeter).unwrap();
    assert!((from_p - 1.0).abs() < 1e-12);
    let from_a = derive_side_length(6, 2.6, QuantityKind::Area).unwrap();
    assert!((from_a - 1.0).abs() < 0.01);
    let from_apothem = derive_side_length(6, 0.87, QuantityKind::Apothem).unwrap();
    assert!((from_apothem - 1.0).abs() < 0.01);
}

/// The apothem-estimate chain `a ≈ sqrt(2A / (n tan(π/n)))`, `s = 2 a tan(π/n)`
/// double counts the area and overshoots by exactly √2. The closed form does not.
#[test]
fn area_inversion_closed_form_vs_apothem_estimate() {
    for n in [3u32, 4, 5, 6, 8, 12, 50] {
        let s = 1.7;
        let area = compute_properties(n, s).unwrap().area;
        let t = (PI / f64::from(n)).tan();
        let apothem_est = (area * 2.0 / f64::from(n) / t).sqrt();
        let chained = 2.0 * apothem_est * t;
        let exact = derive_side_length(n, area, QuantityKind::Area).unwrap();
        assert!((exact - s).abs() < EPS, "n={n}: exact={exact}");
        assert!(
            (chained / exact - 2f64.sqrt()).abs() < 1e-12,
            "n={n}: chained={chained} exact={exact}"
        );
    }
}

#[test]
fn approx_eq_respects_tolerance() {
    let cfg = GeomCfg::default();
    let a = compute_properties(7, 1.0).unwrap();
    let b = compute_properties(7, 1.0 + 1e-12).unwrap();
    let c = compute_properties(7, 1.1).unwrap();
    assert!(approx_eq(&a, &b, cfg));
    assert!(!approx_eq(&a, &c, cfg));
}

proptest! {
    #[test]
    fn prop_interior_plus_exterior_is_straight(n in 3u32..=1000, s in 1e-3f64..1e3) {
        let p = compute_properties(n, s).unwrap();
        prop_assert!((p.interior_angle_degrees + p.exterior_angle_degrees - 180.0).abs() < EPS);
        prop_assert_eq!(p.exterior_angle_degrees, p.central_angle_degrees);
    }

    #[test]
    fn prop_interior_angle_sum(n in 3u32..=1000, s in 1e-3f64..1e3) {
        let p = compute_properties(n, s).unwrap();
        let expected = f64::from(n - 2) * 180.0;
        prop_assert!((p.interior_angle_sum_degrees - expected).abs() < EPS);
        let tol = EPS * expected.max(1.0);
        prop_assert!((f64::from(n) * p.interior_angle_degrees - expected).abs() < tol);
    }

    #[test]
    fn prop_perimeter_round_trip(n in 3u32..=1000, s in 1e-3f64..1e2) {
        let p = compute_properties(n, s).unwrap();
        let back = derive_side_length(n, p.perimeter, QuantityKind::Perimeter).unwrap();
        prop_assert!((back - s).abs() < EPS);
    }

    #[test]
    fn prop_apothem_round_trip(n in 3u32..=1000, s in 1e-3f64..1e2) {
        let p = compute_properties(n, s).unwrap();
        let back = derive_side_length(n, p.apothem, QuantityKind::Apothem).unwrap();
        prop_assert!((back - s).abs() < EPS);
    }

    #[test]
    fn prop_area_round_trip(n in 3u32..=1000, s in 1e-3f64..1e2) {
        let p = compute_properties(n, s).unwrap();
        let back = derive_side_length(n, p.area, QuantityKind::Area).unwrap();
        prop_assert!((back - s).abs() < EPS * s.max(1.0));
    }

    #[test]
    fn prop_area_is_half_perimeter_times_apothem(n in 3u32..=200, s in 1e-2f64..1e2) {
        let p = compute_properties(n, s).unwrap();
        let alt = f64::from(n) * s * s / (4.0 * (PI / f64::from(n)).tan());
        prop_assert!((p.area - alt).abs() <= 1e-9 * alt.max(1.0));
    }
}
