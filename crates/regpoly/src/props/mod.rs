//! Derived measurements of regular polygons.
//!
//! Purpose
//! - Turn a side count plus one known measurement into every standard quantity
//!   (angles, perimeter, apothem, area).
//! - Keep every entry point a pure function: nothing is cached, nothing mutated.
//!
//! Conventions
//! - Angles are reported in degrees; trigonometry runs in radians.
//! - The inverse derivation from area uses the closed form
//!   `s = sqrt(4 A tan(π/n) / n)`, not an apothem estimate.
//!
//! Code cross-refs: `types::PolygonSpec`, `vertices::side_length_to_radius`

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use crate::types::{check_side_length, check_sides, InvalidPolygonError};

/// Measurements of a regular polygon with `sides` edges of length `side_length`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PolygonProperties {
    pub sides: u32,
    pub side_length: f64,
    pub interior_angle_degrees: f64,
    pub exterior_angle_degrees: f64,
    pub central_angle_degrees: f64,
    pub interior_angle_sum_degrees: f64,
    pub perimeter: f64,
    pub apothem: f64,
    pub circumradius: f64,
    pub area: f64,
}

/// Which measurement the caller knows when asking for the side length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum QuantityKind {
    SideLength,
    Perimeter,
    Area,
    Apothem,
}

impl QuantityKind {
    pub const ALL: [QuantityKind; 4] = [
        QuantityKind::SideLength,
        QuantityKind::Perimeter,
        QuantityKind::Area,
        QuantityKind::Apothem,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            QuantityKind::SideLength => "side-length",
            QuantityKind::Perimeter => "perimeter",
            QuantityKind::Area => "area",
            QuantityKind::Apothem => "apothem",
        }
    }
}

impl fmt::Display for QuantityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuantityKind {
    type Err = InvalidPolygonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        match key.as_str() {
            "side-length" | "side" => Ok(QuantityKind::SideLength),
            "perimeter" => Ok(QuantityKind::Perimeter),
            "area" => Ok(QuantityKind::Area),
            "apothem" => Ok(QuantityKind::Apothem),
            _ => Err(InvalidPolygonError::UnknownQuantityKind { name: s.to_string() }),
        }
    }
}

/// Compute all measurements of a regular polygon.
///
/// Errors when `sides < 3` or `side_length` is not finite and positive.
pub fn compute_properties(
    sides: u32,
    side_length: f64,
) -> Result<PolygonProperties, InvalidPolygonError> {
    let n = check_sides(sides)?;
    let s = check_side_length(side_length)?;
    Ok(properties_unchecked(n, s))
}

/// Formulas without validation; callers guarantee `n >= 3`, `s > 0`.
pub(crate) fn properties_unchecked(n: u32, s: f64) -> PolygonProperties {
    let nf = f64::from(n);
    let apothem = apothem_from_side(nf, s);
    let perimeter = nf * s;
    PolygonProperties {
        sides: n,
        side_length: s,
        interior_angle_degrees: (nf - 2.0) * 180.0 / nf,
        exterior_angle_degrees: 360.0 / nf,
        central_angle_degrees: 360.0 / nf,
        interior_angle_sum_degrees: (nf - 2.0) * 180.0,
        perimeter,
        apothem,
        circumradius: crate::vertices::circumradius_unchecked(n, s),
        area: 0.5 * perimeter * apothem,
    }
}

#[inline]
fn apothem_from_side(nf: f64, s: f64) -> f64 {
    s / (2.0 * (PI / nf).tan())
}

/// Recover the side length from one known measurement.
///
/// - perimeter: `s = P / n`
/// - apothem:   `s = 2 a tan(π/n)`
/// - area:      `s = sqrt(4 A tan(π/n) / n)`
pub fn derive_side_length(
    sides: u32,
    known: f64,
    kind: QuantityKind,
) -> Result<f64, InvalidPolygonError> {
    let n = f64::from(check_sides(sides)?);
    if !known.is_finite() || known <= 0.0 {
        return Err(InvalidPolygonError::NonPositiveQuantity { kind, value: known });
    }
    let t = (PI / n).tan();
    let s = match kind {
        QuantityKind::SideLength => known,
        QuantityKind::Perimeter => known / n,
        QuantityKind::Apothem => 2.0 * known * t,
        QuantityKind::Area => (4.0 * known * t / n).sqrt(),
    };
    // Extreme inputs can still overflow or underflow to zero.
    check_side_length(s)
}

/// Textual variant of `derive_side_length` for shells that pass the kind as a name.
pub fn derive_side_length_named(
    sides: u32,
    known: f64,
    kind: &str,
) -> Result<f64, InvalidPolygonError> {
    derive_side_length(sides, known, kind.parse()?)
}

#[cfg(test)]
mod tests;
