//! Hand-off to rendering collaborators: vertex tables (CSV/Parquet via Polars),
//! plain-text metric blocks, and scene tables read back from CSV.

use std::fs::File;
use std::path::Path;

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use regpoly::palette::Color;
use regpoly::{PolygonProperties, VertexSet};

/// Plot half-width as a multiple of the circumradius.
pub const VIEWPORT_MARGIN: f64 = 1.5;

/// Labeled metrics, formatted the way the explorer screens show them.
pub fn properties_block(p: &PolygonProperties) -> String {
    let name = regpoly::names::display_name(p.sides);
    let rows = [
        ("Polygon", name),
        ("Number of sides", p.sides.to_string()),
        ("Side length", format!("{:.3}", p.side_length)),
        ("Perimeter", format!("{:.3}", p.perimeter)),
        ("Area", format!("{:.3}", p.area)),
        ("Apothem", format!("{:.3}", p.apothem)),
        ("Circumradius", format!("{:.3}", p.circumradius)),
        ("Interior angle", format!("{:.2}°", p.interior_angle_degrees)),
        ("Exterior angle", format!("{:.2}°", p.exterior_angle_degrees)),
        ("Central angle", format!("{:.2}°", p.central_angle_degrees)),
        (
            "Sum of interior angles",
            format!("{:.0}°", p.interior_angle_sum_degrees),
        ),
    ];
    let width = rows.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    rows.iter()
        .map(|(k, v)| format!("{k:<width$}  {v}\n"))
        .collect()
}

/// One row per point (closing point included), one block per polygon.
///
/// Columns: polygon, sides, vertex, label, closing, x, y, fill, line.
pub fn vertex_frame(layers: &[(VertexSet, Option<Color>)]) -> PolarsResult<DataFrame> {
    let rows: usize = layers.iter().map(|(vs, _)| vs.len()).sum();
    let mut polygon = Vec::with_capacity(rows);
    let mut sides = Vec::with_capacity(rows);
    let mut vertex = Vec::with_capacity(rows);
    let mut label = Vec::with_capacity(rows);
    let mut closing = Vec::with_capacity(rows);
    let mut xs = Vec::with_capacity(rows);
    let mut ys = Vec::with_capacity(rows);
    let mut fill: Vec<Option<String>> = Vec::with_capacity(rows);
    let mut line: Vec<Option<String>> = Vec::with_capacity(rows);
    for (i, (vs, color)) in layers.iter().enumerate() {
        let labels = vs.labels();
        let n = labels.len();
        for (k, p) in vs.points().iter().enumerate() {
            polygon.push(i as u32 + 1);
            sides.push(vs.sides());
            vertex.push(k as u32);
            label.push(labels[k % n].clone());
            closing.push(k == n);
            xs.push(p.x);
            ys.push(p.y);
            fill.push(color.map(|c| c.fill.to_string()));
            line.push(color.map(|c| c.line.to_string()));
        }
    }
    df!(
        "polygon" => polygon,
        "sides" => sides,
        "vertex" => vertex,
        "label" => label,
        "closing" => closing,
        "x" => xs,
        "y" => ys,
        "fill" => fill,
        "line" => line,
    )
}

/// Write a frame; the format follows the extension (`.csv` or `.parquet`).
pub fn write_frame(df: &mut DataFrame, out: &Path) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let ext = out
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("csv") => {
            let mut file =
                File::create(out).with_context(|| format!("creating {}", out.display()))?;
            CsvWriter::new(&mut file).include_header(true).finish(df)?;
        }
        Some("parquet") => {
            let file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
            ParquetWriter::new(file).finish(df)?;
        }
        _ => bail!(
            "unsupported output format for {} (use .csv or .parquet)",
            out.display()
        ),
    }
    tracing::info!(rows = df.height(), cols = df.width(), out = %out.display(), "wrote_table");
    Ok(())
}

/// Rows of a scene table: `sides`, `size`, `rotation` (rotation optional, default 0).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneRow {
    pub sides: i64,
    pub size: f64,
    pub rotation: f64,
}

/// Read scene rows from a CSV file with a header.
pub fn read_scene_csv(path: &Path) -> Result<Vec<SceneRow>> {
    let lf = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("reading {}", path.display()))?;
    let df = lf.collect()?;
    tracing::debug!(rows = df.height(), cols = df.width(), "scene_csv_shape");
    let sides = df
        .column("sides")
        .context("scene CSV needs a 'sides' column")?
        .cast(&DataType::Int64)?;
    let size = df
        .column("size")
        .context("scene CSV needs a 'size' column")?
        .cast(&DataType::Float64)?;
    let rotation = match df.column("rotation") {
        Ok(col) => Some(col.cast(&DataType::Float64)?),
        Err(_) => None,
    };
    let sides = sides.i64()?;
    let size = size.f64()?;
    let mut rows = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        let (Some(s), Some(r)) = (sides.get(i), size.get(i)) else {
            bail!("scene CSV row {} has an empty sides/size cell", i + 1);
        };
        let rot = match &rotation {
            Some(col) => col.f64()?.get(i).unwrap_or(0.0),
            None => 0.0,
        };
        rows.push(SceneRow {
            sides: s,
            size: r,
            rotation: rot,
        });
    }
    Ok(rows)
}

/// Plain-text vertex listing for terminals.
pub fn vertex_listing(vs: &VertexSet) -> String {
    let (lo, hi) = vs.viewport(VIEWPORT_MARGIN);
    let mut text = format!(
        "center ({:.3}, {:.3})  radius {:.3}  rotation {}°\n\
         viewport x [{:.3}, {:.3}]  y [{:.3}, {:.3}]\n",
        vs.center().x,
        vs.center().y,
        vs.radius(),
        vs.rotation_degrees(),
        lo.x,
        hi.x,
        lo.y,
        hi.y
    );
    for (label, p) in vs.labels().iter().zip(vs.open()) {
        text.push_str(&format!("{label:>4}  {:>9.4}  {:>9.4}\n", p.x, p.y));
    }
    text
}
