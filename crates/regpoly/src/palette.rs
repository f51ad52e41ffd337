//! Art-mode colors: a fixed five-entry palette indexed cyclically.

use std::fmt;

/// 8-bit RGB with an alpha in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }
}

impl fmt::Display for Rgba {
    /// CSS notation: `rgb(..)` when opaque, `rgba(..)` otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a >= 1.0 {
            write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

/// Fill and outline color for one polygon of a scene.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Color {
    pub name: &'static str,
    pub fill: Rgba,
    pub line: Rgba,
}

/// Fill transparency shared by all palette entries.
pub const FILL_ALPHA: f64 = 0.4;

const fn entry(name: &'static str, r: u8, g: u8, b: u8) -> Color {
    let line = Rgba::opaque(r, g, b);
    Color {
        name,
        fill: line.with_alpha(FILL_ALPHA),
        line,
    }
}

pub const PALETTE: [Color; 5] = [
    entry("red", 255, 99, 132),
    entry("blue", 54, 162, 235),
    entry("green", 75, 192, 192),
    entry("yellow", 255, 205, 86),
    entry("purple", 153, 102, 255),
];

/// Palette color for the `index`-th polygon; wraps around.
#[inline]
pub fn color_for(index: usize) -> Color {
    PALETTE[index % PALETTE.len()]
}
