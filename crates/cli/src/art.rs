//! Art-mode inputs: `--polygon sides:size[:rotation]` flags, JSON scene files,
//! CSV scene tables, or a random draw. All paths end in a validated `ArtScene`.

use std::path::Path;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use regpoly::scene::{random_scene, ArtScene, RandomSceneCfg, SceneEntry};
use serde::Deserialize;

use crate::inputs::{required, Screen};
use crate::render::read_scene_csv;

/// One polygon as entered by a user (size is the circumradius).
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct ArtPolygon {
    pub sides: i64,
    pub size: f64,
    #[serde(default)]
    pub rotation: f64,
}

impl FromStr for ArtPolygon {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(':').map(str::trim).collect();
        if !(2..=3).contains(&parts.len()) {
            bail!("expected sides:size[:rotation], got '{s}'");
        }
        let sides = parts[0]
            .parse::<i64>()
            .with_context(|| format!("sides in '{s}'"))?;
        let size = parts[1]
            .parse::<f64>()
            .with_context(|| format!("size in '{s}'"))?;
        let rotation = match parts.get(2) {
            Some(r) => r.parse::<f64>().with_context(|| format!("rotation in '{s}'"))?,
            None => 0.0,
        };
        Ok(Self {
            sides,
            size,
            rotation,
        })
    }
}

#[derive(Debug, Deserialize)]
struct SceneFile {
    polygons: Vec<ArtPolygon>,
}

/// Validate against the art-screen ranges and build the scene (colors by position).
pub fn build_scene(polygons: &[ArtPolygon]) -> Result<ArtScene> {
    let count = i64::try_from(polygons.len()).unwrap_or(i64::MAX);
    required(Screen::Art, "count")?.check_integer(count)?;
    let sides_d = required(Screen::Art, "sides")?;
    let size_d = required(Screen::Art, "size")?;
    let rot_d = required(Screen::Art, "rotation")?;
    let mut scene = ArtScene::default();
    for (i, p) in polygons.iter().enumerate() {
        let ctx = || format!("polygon {}", i + 1);
        let sides = sides_d.check_integer(p.sides).with_context(ctx)?;
        let size = size_d.check_real(p.size).with_context(ctx)?;
        if p.rotation.fract() != 0.0 {
            bail!("polygon {}: rotation must be a whole number of degrees", i + 1);
        }
        rot_d.check_integer(p.rotation as i64).with_context(ctx)?;
        let sides = u32::try_from(sides).with_context(ctx)?;
        let entry = SceneEntry::with_radius(sides, size, p.rotation).with_context(ctx)?;
        scene.push(entry);
    }
    Ok(scene)
}

/// Load polygons from `.json` (`{"polygons": [...]}`) or `.csv` (sides,size,rotation).
pub fn load_polygons(path: &Path) -> Result<Vec<ArtPolygon>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("json") => {
            let bytes =
                std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            let file: SceneFile = serde_json::from_slice(&bytes)
                .with_context(|| format!("parsing {}", path.display()))?;
            Ok(file.polygons)
        }
        Some("csv") => Ok(read_scene_csv(path)?
            .into_iter()
            .map(|r| ArtPolygon {
                sides: r.sides,
                size: r.size,
                rotation: r.rotation,
            })
            .collect()),
        _ => bail!("unsupported scene file {} (use .json or .csv)", path.display()),
    }
}

/// Random scene on the art-screen grid.
pub fn random(seed: u64) -> Result<ArtScene> {
    Ok(random_scene(RandomSceneCfg::default(), seed)?)
}
