//! Basic value types shared by the calculator, the vertex generator and scenes.
//!
//! - `Point`: 2D point (nalgebra column vector).
//! - `GeomCfg`: centralizes comparison tolerances.
//! - `PolygonSpec`: validated (sides, side length) pair.
//! - `InvalidPolygonError`: the single error kind of the engine.
//!
//! Code cross-refs: `props::compute_properties`, `vertices::generate_vertices`

use std::fmt;

use nalgebra::Vector2;

use crate::props::{self, PolygonProperties, QuantityKind};

/// A point in the plane.
pub type Point = Vector2<f64>;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    /// Max distance between the first and last point of a closed loop.
    pub eps_closure: f64,
    /// Absolute tolerance for comparing derived measurements.
    pub eps_compare: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_closure: 1e-12,
            eps_compare: 1e-9,
        }
    }
}

/// Why a polygon request was rejected.
#[derive(Clone, Debug, PartialEq)]
pub enum InvalidPolygonError {
    /// A polygon needs at least three sides.
    TooFewSides { sides: i64 },
    /// Side count given as a real number that is not a whole number.
    NonIntegerSides { value: f64 },
    /// Side count does not fit the supported integer range.
    SidesOutOfRange { value: f64 },
    /// Side length must be finite and > 0.
    NonPositiveSideLength { value: f64 },
    /// Radius must be finite and > 0.
    NonPositiveRadius { value: f64 },
    /// Known measurement for an inverse derivation must be finite and > 0.
    NonPositiveQuantity { kind: QuantityKind, value: f64 },
    /// Quantity name not understood by the inverse derivation.
    UnknownQuantityKind { name: String },
    /// Center or rotation contains NaN/inf.
    NonFinite { what: &'static str },
}

impl fmt::Display for InvalidPolygonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewSides { sides } => {
                write!(f, "a polygon needs at least 3 sides (got {sides})")
            }
            Self::NonIntegerSides { value } => {
                write!(f, "number of sides must be a whole number (got {value})")
            }
            Self::SidesOutOfRange { value } => {
                write!(f, "number of sides {value} is out of range")
            }
            Self::NonPositiveSideLength { value } => {
                write!(f, "side length must be finite and positive (got {value})")
            }
            Self::NonPositiveRadius { value } => {
                write!(f, "radius must be finite and positive (got {value})")
            }
            Self::NonPositiveQuantity { kind, value } => {
                write!(f, "{kind} must be finite and positive (got {value})")
            }
            Self::UnknownQuantityKind { name } => write!(
                f,
                "unknown quantity '{name}' (expected one of: side-length, perimeter, area, apothem)"
            ),
            Self::NonFinite { what } => write!(f, "{what} must be finite"),
        }
    }
}

impl std::error::Error for InvalidPolygonError {}

/// Validate an integer side count.
#[inline]
pub fn check_sides(sides: u32) -> Result<u32, InvalidPolygonError> {
    if sides < 3 {
        return Err(InvalidPolygonError::TooFewSides {
            sides: i64::from(sides),
        });
    }
    Ok(sides)
}

/// Checked conversion for side counts that arrive as real numbers (text input,
/// Python floats). Fractions are rejected, never truncated.
pub fn sides_from_f64(value: f64) -> Result<u32, InvalidPolygonError> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(InvalidPolygonError::NonIntegerSides { value });
    }
    if value < 3.0 {
        if value < i64::MIN as f64 {
            return Err(InvalidPolygonError::SidesOutOfRange { value });
        }
        return Err(InvalidPolygonError::TooFewSides {
            sides: value as i64,
        });
    }
    if value > f64::from(u32::MAX) {
        return Err(InvalidPolygonError::SidesOutOfRange { value });
    }
    Ok(value as u32)
}

#[inline]
pub(crate) fn check_side_length(value: f64) -> Result<f64, InvalidPolygonError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(InvalidPolygonError::NonPositiveSideLength { value });
    }
    Ok(value)
}

#[inline]
pub(crate) fn check_radius(value: f64) -> Result<f64, InvalidPolygonError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(InvalidPolygonError::NonPositiveRadius { value });
    }
    Ok(value)
}

/// A regular polygon given by its side count and edge length.
///
/// Invariants: `sides >= 3`, `side_length` finite and `> 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "SpecRepr")
)]
pub struct PolygonSpec {
    sides: u32,
    side_length: f64,
}

impl PolygonSpec {
    pub fn new(sides: u32, side_length: f64) -> Result<Self, InvalidPolygonError> {
        Ok(Self {
            sides: check_sides(sides)?,
            side_length: check_side_length(side_length)?,
        })
    }

    /// Build from one known measurement (perimeter, area, apothem or side length).
    pub fn from_known(
        sides: u32,
        known: f64,
        kind: QuantityKind,
    ) -> Result<Self, InvalidPolygonError> {
        let side_length = props::derive_side_length(sides, known, kind)?;
        Self::new(sides, side_length)
    }

    #[inline]
    pub fn sides(&self) -> u32 {
        self.sides
    }

    #[inline]
    pub fn side_length(&self) -> f64 {
        self.side_length
    }

    /// All derived measurements. Recomputed on every call.
    pub fn properties(&self) -> PolygonProperties {
        props::properties_unchecked(self.sides, self.side_length)
    }

    /// Distance from the center to a vertex.
    pub fn circumradius(&self) -> f64 {
        crate::vertices::circumradius_unchecked(self.sides, self.side_length)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct SpecRepr {
    sides: u32,
    side_length: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<SpecRepr> for PolygonSpec {
    type Error = InvalidPolygonError;

    fn try_from(raw: SpecRepr) -> Result<Self, Self::Error> {
        PolygonSpec::new(raw.sides, raw.side_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sides_from_f64_rejects_fractions_and_small_values() {
        assert_eq!(sides_from_f64(6.0), Ok(6));
        assert!(matches!(
            sides_from_f64(5.5),
            Err(InvalidPolygonError::NonIntegerSides { .. })
        ));
        assert!(matches!(
            sides_from_f64(f64::NAN),
            Err(InvalidPolygonError::NonIntegerSides { .. })
        ));
        assert_eq!(
            sides_from_f64(2.0),
            Err(InvalidPolygonError::TooFewSides { sides: 2 })
        );
        assert_eq!(
            sides_from_f64(-4.0),
            Err(InvalidPolygonError::TooFewSides { sides: -4 })
        );
        assert!(matches!(
            sides_from_f64(1e12),
            Err(InvalidPolygonError::SidesOutOfRange { .. })
        ));
    }

    #[test]
    fn spec_validates_inputs() {
        assert!(PolygonSpec::new(3, 1.0).is_ok());
        assert_eq!(
            PolygonSpec::new(2, 1.0),
            Err(InvalidPolygonError::TooFewSides { sides: 2 })
        );
        for bad in [0.0, -1.0, f64::INFINITY, f64::NAN] {
            assert!(matches!(
                PolygonSpec::new(5, bad),
                Err(InvalidPolygonError::NonPositiveSideLength { .. })
            ));
        }
    }

    #[test]
    fn spec_from_known_perimeter() {
        let spec = PolygonSpec::from_known(6, 6.0, QuantityKind::Perimeter).unwrap();
        assert_eq!(spec.sides(), 6);
        assert!((spec.side_length() - 1.0).abs() < 1e-12);
        // Hexagon: circumradius equals side length.
        assert!((spec.circumradius() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn error_messages_name_the_problem() {
        let msg = InvalidPolygonError::TooFewSides { sides: 2 }.to_string();
        assert!(msg.contains("at least 3"));
        let msg = InvalidPolygonError::UnknownQuantityKind {
            name: "volume".into(),
        }
        .to_string();
        assert!(msg.contains("volume"));
    }
}
