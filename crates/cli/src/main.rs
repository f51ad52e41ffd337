use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use regpoly::api;
use regpoly::prelude::*;
use serde::Serialize;
use serde_json::json;
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

mod art;
mod inputs;
mod provenance;
mod quiz;
mod render;

use art::ArtPolygon;
use inputs::{known_value_default, required, Screen};

#[derive(Parser)]
#[command(name = "regpoly")]
#[command(about = "Explore regular polygons: properties, vertices, art and quizzes")]
struct Cmd {
    /// Print JSON instead of text where a command supports it
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Properties of a regular polygon from its side length
    Props {
        #[arg(long, default_value_t = 6.0)]
        sides: f64,
        #[arg(long, default_value_t = 1.0)]
        side_length: f64,
    },
    /// All properties from one known measurement
    Calc {
        #[arg(long, default_value_t = 6.0)]
        sides: f64,
        /// side-length, perimeter, area or apothem
        #[arg(long, default_value = "side-length")]
        known: String,
        /// Known value (defaults to the unit hexagon's value for that quantity)
        #[arg(long)]
        value: Option<f64>,
    },
    /// Vertex coordinates of one polygon (closed loop, counter-clockwise)
    Vertices {
        #[arg(long)]
        sides: f64,
        /// Edge length (default 1.0 when no radius is given)
        #[arg(long, conflicts_with = "radius")]
        side_length: Option<f64>,
        /// Circumradius
        #[arg(long)]
        radius: Option<f64>,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        cx: f64,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        cy: f64,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        rotation: f64,
        /// Write a table (.csv or .parquet) plus a provenance sidecar
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Compose polygon art from flags, a scene file, or a random seed
    Art {
        /// sides:size[:rotation], repeatable; drawn in order
        #[arg(long = "polygon")]
        polygons: Vec<ArtPolygon>,
        /// Scene file (.json or .csv)
        #[arg(long, conflicts_with_all = ["polygons", "random"])]
        from: Option<PathBuf>,
        /// Seed for a random scene
        #[arg(long, conflicts_with = "polygons")]
        random: Option<u64>,
        /// Write a table (.csv or .parquet) plus a provenance sidecar
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Take the quick quiz on stdin/stdout
    Quiz,
    /// Check interior/exterior angle guesses
    AngleHunt {
        #[arg(long)]
        sides: String,
        #[arg(long)]
        interior: f64,
        #[arg(long)]
        exterior: f64,
    },
    /// Show the property card of a named polygon (all cards when omitted)
    Match {
        #[arg(long)]
        polygon: Option<String>,
    },
    /// Print input descriptors for front-ends
    Inputs {
        #[arg(long, value_enum)]
        screen: Option<Screen>,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    init_tracing();
    let cmd = Cmd::parse();
    let json = cmd.json;
    match cmd.action {
        Action::Props { sides, side_length } => props(sides, side_length, json),
        Action::Calc {
            sides,
            known,
            value,
        } => calc(sides, &known, value, json),
        Action::Vertices {
            sides,
            side_length,
            radius,
            cx,
            cy,
            rotation,
            out,
        } => vertices(
            sides,
            side_length,
            radius,
            Point::new(cx, cy),
            rotation,
            out.as_deref(),
            json,
        ),
        Action::Art {
            polygons,
            from,
            random,
            out,
        } => art(polygons, from.as_deref(), random, out.as_deref(), json),
        Action::Quiz => run_quiz(),
        Action::AngleHunt {
            sides,
            interior,
            exterior,
        } => angle_hunt(&sides, interior, exterior, json),
        Action::Match { polygon } => property_match(polygon.as_deref(), json),
        Action::Inputs { screen } => print_inputs(screen),
        Action::Report => report(),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    SubscriberBuilder::default()
        .with_target(false)
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn print_properties(p: &PolygonProperties, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(p)?);
    } else {
        print!("{}", render::properties_block(p));
    }
    Ok(())
}

fn props(sides: f64, side_length: f64, json: bool) -> Result<()> {
    let n = sides_from_f64(sides)?;
    required(Screen::Explorer, "sides")?.check_integer(i64::from(n))?;
    required(Screen::Explorer, "side_length")?.check_real(side_length)?;
    tracing::info!(sides = n, side_length, "props");
    let p = compute_properties(n, side_length)?;
    print_properties(&p, json)
}

fn calc(sides: f64, known: &str, value: Option<f64>, json: bool) -> Result<()> {
    let n = sides_from_f64(sides)?;
    required(Screen::Calculator, "sides")?.check_integer(i64::from(n))?;
    let kind: QuantityKind = known.parse()?;
    required(Screen::Calculator, "known")?.check_choice(kind.as_str())?;
    let value = value.unwrap_or_else(|| known_value_default(kind));
    required(Screen::Calculator, "value")?.check_real(value)?;
    let spec = PolygonSpec::from_known(n, value, kind)?;
    tracing::info!(sides = n, %kind, value, side_length = spec.side_length(), "calc");
    print_properties(&spec.properties(), json)
}

#[derive(Serialize)]
struct VertexOut {
    sides: u32,
    center: [f64; 2],
    radius: f64,
    rotation_degrees: f64,
    labels: Vec<String>,
    points: Vec<[f64; 2]>,
    closed: bool,
    perimeter: f64,
    area: f64,
    bounds: [[f64; 2]; 2],
    viewport: [[f64; 2]; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<Color>,
}

impl VertexOut {
    fn new(vs: &VertexSet, color: Option<Color>) -> Self {
        let (lo, hi) = vs.bounds();
        let (vlo, vhi) = vs.viewport(render::VIEWPORT_MARGIN);
        Self {
            sides: vs.sides(),
            center: [vs.center().x, vs.center().y],
            radius: vs.radius(),
            rotation_degrees: vs.rotation_degrees(),
            labels: vs.labels(),
            points: vs.points().iter().map(|p| [p.x, p.y]).collect(),
            closed: vs.is_closed_eps(GeomCfg::default()),
            perimeter: vs.perimeter(),
            area: vs.signed_area(),
            bounds: [[lo.x, lo.y], [hi.x, hi.y]],
            viewport: [[vlo.x, vlo.y], [vhi.x, vhi.y]],
            color,
        }
    }
}

fn vertices(
    sides: f64,
    side_length: Option<f64>,
    radius: Option<f64>,
    center: Point,
    rotation: f64,
    out: Option<&Path>,
    json: bool,
) -> Result<()> {
    let n = sides_from_f64(sides)?;
    required(Screen::Vertices, "sides")?.check_integer(i64::from(n))?;
    let vs = match radius {
        Some(r) => {
            required(Screen::Vertices, "radius")?.check_real(r)?;
            generate_vertices(n, center, r, rotation)?
        }
        None => {
            let s = side_length.unwrap_or(1.0);
            required(Screen::Vertices, "side_length")?.check_real(s)?;
            api::vertices_for_side_length(n, s, center, rotation)?
        }
    };
    let r = vs.radius();
    tracing::info!(sides = n, radius = r, rotation, points = vs.len(), "vertices");
    if let Some(out) = out {
        let (vlo, vhi) = vs.viewport(render::VIEWPORT_MARGIN);
        let mut df = render::vertex_frame(&[(vs, None)])?;
        render::write_frame(&mut df, out)?;
        provenance::write_sidecar(
            out,
            provenance::Payload::new(
                "vertices",
                json!({
                    "sides": n,
                    "radius": r,
                    "center": [center.x, center.y],
                    "rotation_degrees": rotation,
                    "viewport": [[vlo.x, vlo.y], [vhi.x, vhi.y]]
                }),
            ),
        )?;
        return Ok(());
    }
    if json {
        println!("{}", serde_json::to_string_pretty(&VertexOut::new(&vs, None))?);
    } else {
        print!("{}", render::vertex_listing(&vs));
    }
    Ok(())
}

fn art(
    polygons: Vec<ArtPolygon>,
    from: Option<&Path>,
    random: Option<u64>,
    out: Option<&Path>,
    json: bool,
) -> Result<()> {
    let (scene, source) = match (from, random) {
        (Some(path), _) => (art::build_scene(&art::load_polygons(path)?)?, json!(path)),
        (None, Some(seed)) => (art::random(seed)?, json!({ "seed": seed })),
        (None, None) if !polygons.is_empty() => (art::build_scene(&polygons)?, json!("flags")),
        (None, None) => (art::build_scene(&default_art()?)?, json!("defaults")),
    };
    let layers = scene.render()?;
    tracing::info!(layers = layers.len(), source = %source, "art");
    if let Some(out) = out {
        let rows: Vec<(VertexSet, Option<Color>)> =
            layers.into_iter().map(|(vs, c)| (vs, Some(c))).collect();
        let mut df = render::vertex_frame(&rows)?;
        render::write_frame(&mut df, out)?;
        provenance::write_sidecar(
            out,
            provenance::Payload::new(
                "art",
                json!({ "source": source, "scene": serde_json::to_value(&scene)? }),
            ),
        )?;
        return Ok(());
    }
    if json {
        let outs: Vec<VertexOut> = layers
            .iter()
            .map(|(vs, c)| VertexOut::new(vs, Some(*c)))
            .collect();
        println!("{}", serde_json::to_string_pretty(&outs)?);
    } else {
        for (i, (vs, color)) in layers.iter().enumerate() {
            println!(
                "Polygon {} ({} sides, {}): fill {} line {}",
                i + 1,
                vs.sides(),
                color.name,
                color.fill,
                color.line
            );
            print!("{}", render::vertex_listing(vs));
        }
    }
    Ok(())
}

/// The art screen's initial state: `count` copies of the default polygon.
fn default_art() -> Result<Vec<ArtPolygon>> {
    let pick = |name: &str| -> Result<f64> {
        match required(Screen::Art, name)?.kind {
            inputs::InputKind::Integer { default, .. } => Ok(default as f64),
            inputs::InputKind::Real { default, .. } => Ok(default),
            inputs::InputKind::Choice { default, .. } => Ok(default as f64),
        }
    };
    let count = pick("count")? as usize;
    let polygon = ArtPolygon {
        sides: pick("sides")? as i64,
        size: pick("size")?,
        rotation: pick("rotation")?,
    };
    Ok(vec![polygon; count])
}

fn run_quiz() -> Result<()> {
    let mut session = quiz::QuizSession::default();
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    quiz::run_quiz(&mut session, stdin.lock(), &mut stdout)?;
    tracing::info!(
        score = session.score(),
        total = session.total(),
        complete = session.is_complete(),
        "quiz"
    );
    stdout.flush().context("flushing stdout")?;
    Ok(())
}

fn angle_hunt(sides: &str, interior: f64, exterior: f64, json: bool) -> Result<()> {
    let idx = required(Screen::AngleHunt, "sides")?.check_choice(sides.trim())?;
    let n = quiz::HUNT_SIDES[idx];
    let (outcome, p) = quiz::check_angles(n, interior, exterior)?;
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "sides": n,
                "outcome": format!("{outcome:?}"),
                "message": outcome.message(),
                "interior_angle_degrees": p.interior_angle_degrees,
                "exterior_angle_degrees": p.exterior_angle_degrees,
            }))?
        );
    } else {
        println!("{}", outcome.message());
        println!(
            "Correct answers: Interior = {:.1}°, Exterior = {:.1}°",
            p.interior_angle_degrees, p.exterior_angle_degrees
        );
    }
    Ok(())
}

fn property_match(polygon: Option<&str>, json: bool) -> Result<()> {
    let cards: Vec<&quiz::MatchCard> = match polygon {
        Some(name) => vec![quiz::card_named(name)
            .with_context(|| format!("unknown polygon '{name}'"))?],
        None => quiz::MATCH_CARDS.iter().collect(),
    };
    if json {
        println!("{}", serde_json::to_string_pretty(&cards)?);
        return Ok(());
    }
    for card in cards {
        println!("Properties of a regular {}:", card.name);
        println!("  Number of sides: {}", card.sides);
        println!("  Each interior angle: {}°", card.interior);
        println!("  Sum of interior angles: {}°", card.sum_interior);
        println!("  Each exterior angle: {}°", card.exterior());
    }
    Ok(())
}

fn print_inputs(screen: Option<Screen>) -> Result<()> {
    let doc = match screen {
        Some(s) => json!({ "screen": s, "inputs": s.descriptors() }),
        None => serde_json::Value::Array(
            Screen::ALL
                .iter()
                .map(|s| json!({ "screen": s, "inputs": s.descriptors() }))
                .collect(),
        ),
    };
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

fn report() -> Result<()> {
    let doc = provenance::report_doc("report", json!({}), &[]);
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
