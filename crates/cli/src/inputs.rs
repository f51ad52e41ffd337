//! Declarative input descriptors for each screen of the explorer.
//!
//! Front-ends build their widgets (or validate flags) from these lists instead
//! of hard-coding ranges. `regpoly inputs` prints them as JSON.

use anyhow::{bail, Result};
use regpoly::QuantityKind;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputKind {
    Integer {
        min: i64,
        max: i64,
        step: i64,
        default: i64,
    },
    Real {
        min: f64,
        max: Option<f64>,
        step: f64,
        default: f64,
    },
    Choice {
        options: &'static [&'static str],
        default: usize,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct InputDescriptor {
    pub name: &'static str,
    pub label: &'static str,
    #[serde(flatten)]
    pub kind: InputKind,
}

impl InputDescriptor {
    const fn integer(
        name: &'static str,
        label: &'static str,
        min: i64,
        max: i64,
        step: i64,
        default: i64,
    ) -> Self {
        Self {
            name,
            label,
            kind: InputKind::Integer {
                min,
                max,
                step,
                default,
            },
        }
    }

    const fn real(
        name: &'static str,
        label: &'static str,
        min: f64,
        max: Option<f64>,
        step: f64,
        default: f64,
    ) -> Self {
        Self {
            name,
            label,
            kind: InputKind::Real {
                min,
                max,
                step,
                default,
            },
        }
    }

    /// Range (and step grid) check for integer inputs.
    pub fn check_integer(&self, value: i64) -> Result<i64> {
        match self.kind {
            InputKind::Integer { min, max, step, .. } => {
                if value < min || value > max {
                    bail!("{} must be in {min}..={max} (got {value})", self.name);
                }
                if step > 1 && (value - min) % step != 0 {
                    bail!("{} must be a multiple of {step} from {min} (got {value})", self.name);
                }
                Ok(value)
            }
            _ => bail!("{} is not an integer input", self.name),
        }
    }

    /// Range check for real inputs (the step only guides widgets).
    pub fn check_real(&self, value: f64) -> Result<f64> {
        match self.kind {
            InputKind::Real { min, max, .. } => {
                if !value.is_finite() || value < min {
                    bail!("{} must be >= {min} (got {value})", self.name);
                }
                if let Some(max) = max {
                    if value > max {
                        bail!("{} must be <= {max} (got {value})", self.name);
                    }
                }
                Ok(value)
            }
            _ => bail!("{} is not a real input", self.name),
        }
    }

    pub fn check_choice(&self, value: &str) -> Result<usize> {
        match self.kind {
            InputKind::Choice { options, .. } => options
                .iter()
                .position(|o| o.eq_ignore_ascii_case(value))
                .ok_or_else(|| anyhow::anyhow!("{} must be one of {options:?}", self.name)),
            _ => bail!("{} is not a choice input", self.name),
        }
    }
}

/// Screens of the explorer, each with its own inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    Intro,
    Explorer,
    Calculator,
    AngleHunt,
    Art,
    Vertices,
}

impl Screen {
    pub const ALL: [Screen; 6] = [
        Screen::Intro,
        Screen::Explorer,
        Screen::Calculator,
        Screen::AngleHunt,
        Screen::Art,
        Screen::Vertices,
    ];

    pub fn descriptors(self) -> &'static [InputDescriptor] {
        match self {
            Screen::Intro => &INTRO,
            Screen::Explorer => &EXPLORER,
            Screen::Calculator => &CALCULATOR,
            Screen::AngleHunt => &ANGLE_HUNT,
            Screen::Art => &ART,
            Screen::Vertices => &VERTICES,
        }
    }

    pub fn descriptor(self, name: &str) -> Option<&'static InputDescriptor> {
        self.descriptors().iter().find(|d| d.name == name)
    }
}

pub const QUANTITY_OPTIONS: &[&str] = &["side-length", "perimeter", "area", "apothem"];
pub const HUNT_OPTIONS: &[&str] = &["3", "4", "5", "6", "8"];

static INTRO: [InputDescriptor; 1] = [InputDescriptor::integer(
    "demo_sides",
    "Choose number of sides",
    3,
    12,
    1,
    6,
)];

static EXPLORER: [InputDescriptor; 2] = [
    InputDescriptor::integer("sides", "Number of sides", 3, 20, 1, 6),
    InputDescriptor::real("side_length", "Side length", 0.5, Some(3.0), 0.1, 1.0),
];

static CALCULATOR: [InputDescriptor; 3] = [
    InputDescriptor::integer("sides", "Number of sides", 3, 50, 1, 6),
    InputDescriptor {
        name: "known",
        label: "What do you know?",
        kind: InputKind::Choice {
            options: QUANTITY_OPTIONS,
            default: 0,
        },
    },
    InputDescriptor::real("value", "Known value", 0.1, None, 0.1, 1.0),
];

static ANGLE_HUNT: [InputDescriptor; 3] = [
    InputDescriptor {
        name: "sides",
        label: "Choose polygon",
        kind: InputKind::Choice {
            options: HUNT_OPTIONS,
            default: 0,
        },
    },
    InputDescriptor::real("interior", "What is each interior angle?", 0.0, None, 0.1, 0.0),
    InputDescriptor::real("exterior", "What is each exterior angle?", 0.0, None, 0.1, 0.0),
];

static ART: [InputDescriptor; 4] = [
    InputDescriptor::integer("count", "Number of polygons", 1, 5, 1, 3),
    InputDescriptor::integer("sides", "Sides", 3, 12, 1, 6),
    InputDescriptor::real("size", "Size", 0.3, Some(2.0), 0.1, 1.0),
    InputDescriptor::integer("rotation", "Rotation", 0, 360, 15, 0),
];

/// Coordinate export. The side cap bounds the table size.
static VERTICES: [InputDescriptor; 3] = [
    InputDescriptor::integer("sides", "Number of sides", 3, 1000, 1, 6),
    InputDescriptor::real("side_length", "Side length", 0.001, None, 0.1, 1.0),
    InputDescriptor::real("radius", "Circumradius", 0.001, None, 0.1, 1.0),
];

/// Default for the calculator's known value, per quantity (unit hexagon).
pub fn known_value_default(kind: QuantityKind) -> f64 {
    match kind {
        QuantityKind::SideLength => 1.0,
        QuantityKind::Perimeter => 6.0,
        QuantityKind::Area => 2.6,
        QuantityKind::Apothem => 0.87,
    }
}

/// Look up a descriptor by screen and name.
pub fn required(screen: Screen, name: &str) -> Result<&'static InputDescriptor> {
    screen
        .descriptor(name)
        .ok_or_else(|| anyhow::anyhow!("no input '{name}' on screen {screen:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explorer_ranges() {
        let sides = required(Screen::Explorer, "sides").unwrap();
        assert!(sides.check_integer(3).is_ok());
        assert!(sides.check_integer(20).is_ok());
        assert!(sides.check_integer(21).is_err());
        let len = required(Screen::Explorer, "side_length").unwrap();
        assert!(len.check_real(0.5).is_ok());
        assert!(len.check_real(0.4).is_err());
        assert!(len.check_real(f64::NAN).is_err());
        assert!(len.check_integer(1).is_err());
    }

    #[test]
    fn vertex_export_caps_side_count() {
        let sides = required(Screen::Vertices, "sides").unwrap();
        assert!(sides.check_integer(1000).is_ok());
        assert!(sides.check_integer(1001).is_err());
        assert!(sides.check_integer(i64::from(u32::MAX)).is_err());
        assert!(required(Screen::Vertices, "radius").unwrap().check_real(0.0).is_err());
    }

    #[test]
    fn art_rotation_uses_step_grid() {
        let rot = required(Screen::Art, "rotation").unwrap();
        assert!(rot.check_integer(45).is_ok());
        assert!(rot.check_integer(360).is_ok());
        assert!(rot.check_integer(50).is_err());
    }

    #[test]
    fn calculator_choice_covers_every_quantity() {
        let known = required(Screen::Calculator, "known").unwrap();
        for kind in QuantityKind::ALL {
            let idx = known.check_choice(kind.as_str()).unwrap();
            assert_eq!(QUANTITY_OPTIONS[idx].parse::<QuantityKind>().unwrap(), kind);
            assert!(known_value_default(kind) >= 0.1);
        }
        assert!(known.check_choice("volume").is_err());
    }

    #[test]
    fn descriptors_serialize_with_kind_tag() {
        let json = serde_json::to_value(Screen::Art.descriptors()).unwrap();
        assert_eq!(json[0]["name"], "count");
        assert_eq!(json[0]["kind"], "integer");
        assert_eq!(json[2]["kind"], "real");
        assert_eq!(json[2]["max"], 2.0);
    }

    #[test]
    fn defaults_lie_inside_their_ranges() {
        for screen in Screen::ALL {
            for d in screen.descriptors() {
                match d.kind {
                    InputKind::Integer { default, .. } => {
                        assert!(d.check_integer(default).is_ok(), "{}", d.name)
                    }
                    InputKind::Real { default, .. } => {
                        assert!(d.check_real(default).is_ok(), "{}", d.name)
                    }
                    InputKind::Choice { options, default } => assert!(default < options.len()),
                }
            }
        }
    }
}
