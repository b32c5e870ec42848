use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use polygons::{Polygon, PolygonSequence, SliceSpec};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod report;

use report::{parse_scalar, PolygonRow};

#[derive(Parser)]
#[command(name = "polygons")]
#[command(about = "Regular polygon and polygon sequence walkthrough")]
struct Cmd {
    /// Log library events at debug level
    #[arg(long, short)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Construct, compare and iterate a few fixed polygons
    Demo,
    /// Describe a single polygon; inputs are parsed loosely (int, real, complex, text)
    Polygon {
        #[arg(long, allow_hyphen_values = true)]
        edges: String,
        #[arg(long, allow_hyphen_values = true)]
        radius: String,
    },
    /// Print every polygon of a sequence plus its most efficient member
    Sequence {
        #[arg(long, default_value_t = 20)]
        max_edges: u32,
        #[arg(long, default_value_t = 1.0)]
        radius: f64,
        /// Emit JSON rows instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Demo => demo(),
        Action::Polygon { edges, radius } => describe(&edges, &radius),
        Action::Sequence {
            max_edges,
            radius,
            json,
        } => sequence(max_edges, radius, json),
    }
}

fn demo() -> Result<()> {
    tracing::info!("demo");
    let p1 = Polygon::new(7, 12.0)?;
    let p2 = Polygon::new(5, 15.8)?;
    let p3 = Polygon::new(7, 12.0)?;
    println!("p1={p1}, p2={p2}, p3={p3}");
    println!(
        "p1: interior_angle={}; apothem={}; edge_length={}; area={}; perimeter={}",
        p1.interior_angle(),
        p1.apothem(),
        p1.edge_length(),
        p1.area(),
        p1.perimeter()
    );
    println!(
        "p1==p2: {}; p1==p3: {}; p1>p2: {}; p1>p3: {}; p1<p2: {}",
        p1 == p2,
        p1 == p3,
        p1 > p2,
        p1 > p3,
        p1 < p2
    );

    for (edges, radius) in [("7.3", "12"), ("a", "12"), ("7", "-12"), ("5+5j", "12")] {
        match Polygon::from_scalars(parse_scalar(edges), parse_scalar(radius)) {
            Ok(p) => println!("Polygon({edges}, {radius}) -> {p}"),
            Err(err) => println!("Polygon({edges}, {radius}) -> {err}"),
        }
    }

    let seq = PolygonSequence::new(20, 1.0)?;
    println!("{seq}");
    println!("seq[2]={}", seq.get(2)?);
    let window: Vec<String> = seq.slice(2..4)?.iter().map(ToString::to_string).collect();
    println!("seq[2..4]=[{}]", window.join(", "));
    println!("len(seq)={}", seq.len());
    println!("max_efficiency_polygon={}", seq.max_efficiency_polygon());
    println!("============================");
    for p in &seq {
        println!(
            "{p}, area={}, perimeter={}, area/perimeter={}",
            p.area(),
            p.perimeter(),
            p.efficiency()
        );
    }
    Ok(())
}

fn describe(edges: &str, radius: &str) -> Result<()> {
    tracing::info!(edges, radius, "polygon");
    let p = Polygon::from_scalars(parse_scalar(edges), parse_scalar(radius))
        .with_context(|| format!("building polygon from edges={edges:?} radius={radius:?}"))?;
    println!("{p}");
    println!("{}", PolygonRow::from(&p).to_line());
    Ok(())
}

fn sequence(max_edges: u32, radius: f64, json: bool) -> Result<()> {
    tracing::info!(max_edges, radius, json, "sequence");
    let seq = PolygonSequence::new(max_edges, radius)
        .with_context(|| format!("building sequence max_edges={max_edges} radius={radius}"))?;
    let rows: Vec<PolygonRow> = seq.iter().map(|p| PolygonRow::from(&p)).collect();
    let best = PolygonRow::from(&seq.max_efficiency_polygon());
    if json {
        let doc = serde_json::json!({
            "sequence": seq.to_string(),
            "len": seq.len(),
            "rows": rows,
            "max_efficiency": best,
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }
    println!("{seq} len={}", seq.len());
    for row in &rows {
        println!("{}", row.to_line());
    }
    let tail: Vec<String> = seq
        .slice(SliceSpec::new().start(-3))?
        .iter()
        .map(ToString::to_string)
        .collect();
    println!("last three: [{}]", tail.join(", "));
    println!("max efficiency: {}", best.to_line());
    Ok(())
}
