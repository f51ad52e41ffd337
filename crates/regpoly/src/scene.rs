//! Art mode: ordered stacks of regular polygons.
//!
//! Model
//! - A scene is a list of entries (spec, radius, rotation) drawn around the
//!   origin; later entries draw over earlier ones, so order is preserved.
//! - Colors come from the cyclic palette by position.
//! - `random_scene` draws reproducible scenes from a seed, on the same grid
//!   of values the art controls offer (size step 0.1, rotation step 15°).
//!
//! Code cross-refs: `vertices::generate_vertices`, `palette::color_for`

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::palette::{color_for, Color};
use crate::types::{check_radius, InvalidPolygonError, Point, PolygonSpec};
use crate::vertices::{generate_vertices, radius_to_side_length, VertexSet};

/// One polygon of a scene.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SceneEntry {
    pub spec: PolygonSpec,
    pub radius: f64,
    pub rotation_degrees: f64,
}

impl SceneEntry {
    pub fn new(
        spec: PolygonSpec,
        radius: f64,
        rotation_degrees: f64,
    ) -> Result<Self, InvalidPolygonError> {
        check_radius(radius)?;
        if !rotation_degrees.is_finite() {
            return Err(InvalidPolygonError::NonFinite { what: "rotation" });
        }
        Ok(Self {
            spec,
            radius,
            rotation_degrees,
        })
    }

    /// Entry sized by its circumradius (the "size" control of art mode).
    pub fn with_radius(
        sides: u32,
        radius: f64,
        rotation_degrees: f64,
    ) -> Result<Self, InvalidPolygonError> {
        let side_length = radius_to_side_length(sides, radius)?;
        Self::new(PolygonSpec::new(sides, side_length)?, radius, rotation_degrees)
    }
}

/// Map every entry to its vertex loop around the origin, keeping input order.
///
/// Fails as a whole on the first invalid entry.
pub fn compose_scene(entries: &[SceneEntry]) -> Result<Vec<VertexSet>, InvalidPolygonError> {
    entries
        .iter()
        .map(|e| generate_vertices(e.spec.sides(), Point::zeros(), e.radius, e.rotation_degrees))
        .collect()
}

/// A scene entry with its assigned color.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ArtLayer {
    pub entry: SceneEntry,
    pub color: Color,
}

/// Ordered rendering instructions for art mode.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ArtScene {
    layers: Vec<ArtLayer>,
}

impl ArtScene {
    /// Assign palette colors by position.
    pub fn from_entries(entries: impl IntoIterator<Item = SceneEntry>) -> Self {
        let mut scene = Self::default();
        for e in entries {
            scene.push(e);
        }
        scene
    }

    /// Append on top, colored by the next palette slot.
    pub fn push(&mut self, entry: SceneEntry) {
        let color = color_for(self.layers.len());
        self.layers.push(ArtLayer { entry, color });
    }

    /// Layers bottom first; colors always follow position.
    pub fn layers(&self) -> &[ArtLayer] {
        &self.layers
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn entries(&self) -> Vec<SceneEntry> {
        self.layers.iter().map(|l| l.entry).collect()
    }

    /// Vertex loops paired with colors, bottom layer first.
    pub fn render(&self) -> Result<Vec<(VertexSet, Color)>, InvalidPolygonError> {
        let sets = compose_scene(&self.entries())?;
        Ok(sets
            .into_iter()
            .zip(self.layers.iter().map(|l| l.color))
            .collect())
    }
}

/// Error for inconsistent random-scene parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneCfgError {
    InvalidParams { reason: String },
}

impl SceneCfgError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SceneCfgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid scene params: {reason}"),
        }
    }
}

impl std::error::Error for SceneCfgError {}

/// Random scene sampler configuration. Defaults mirror the art controls.
#[derive(Clone, Copy, Debug)]
pub struct RandomSceneCfg {
    pub count_min: usize,
    pub count_max: usize,
    pub sides_min: u32,
    pub sides_max: u32,
    pub size_min: f64,
    pub size_max: f64,
    pub size_step: f64,
    /// Rotations are multiples of this step in [0, 360].
    pub rotation_step_degrees: f64,
}

impl Default for RandomSceneCfg {
    fn default() -> Self {
        Self {
            count_min: 1,
            count_max: 5,
            sides_min: 3,
            sides_max: 12,
            size_min: 0.3,
            size_max: 2.0,
            size_step: 0.1,
            rotation_step_degrees: 15.0,
        }
    }
}

impl RandomSceneCfg {
    pub fn validate(&self) -> Result<(), SceneCfgError> {
        if self.count_min == 0 || self.count_min > self.count_max {
            return Err(SceneCfgError::invalid("need 1 <= count_min <= count_max"));
        }
        if self.sides_min < 3 || self.sides_min > self.sides_max {
            return Err(SceneCfgError::invalid("need 3 <= sides_min <= sides_max"));
        }
        if !(self.size_min.is_finite() && self.size_max.is_finite()) || self.size_min <= 0.0 {
            return Err(SceneCfgError::invalid("size_min must be finite and > 0"));
        }
        if self.size_min > self.size_max {
            return Err(SceneCfgError::invalid("size_min <= size_max required"));
        }
        if !self.size_step.is_finite() || self.size_step <= 0.0 {
            return Err(SceneCfgError::invalid("size_step must be > 0"));
        }
        if !self.rotation_step_degrees.is_finite()
            || self.rotation_step_degrees <= 0.0
            || self.rotation_step_degrees > 360.0
        {
            return Err(SceneCfgError::invalid("rotation step must be in (0, 360]"));
        }
        Ok(())
    }
}

/// Draw a reproducible scene: same `(cfg, seed)`, same scene.
pub fn random_scene(cfg: RandomSceneCfg, seed: u64) -> Result<ArtScene, SceneCfgError> {
    cfg.validate()?;
    let mut rng = StdRng::seed_from_u64(seed);
    let count = rng.gen_range(cfg.count_min..=cfg.count_max);
    let size_steps = ((cfg.size_max - cfg.size_min) / cfg.size_step + 1e-9).floor() as u32;
    let rot_steps = (360.0 / cfg.rotation_step_degrees + 1e-9).floor() as u32;
    let mut scene = ArtScene::default();
    for _ in 0..count {
        let sides = rng.gen_range(cfg.sides_min..=cfg.sides_max);
        let size = (cfg.size_min + f64::from(rng.gen_range(0..=size_steps)) * cfg.size_step)
            .min(cfg.size_max);
        let rotation = f64::from(rng.gen_range(0..=rot_steps)) * cfg.rotation_step_degrees;
        let entry = SceneEntry::with_radius(sides, size, rotation)
            .map_err(|e| SceneCfgError::invalid(e.to_string()))?;
        scene.push(entry);
    }
    Ok(scene)
}
