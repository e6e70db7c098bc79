use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use hullscan::io::{parse_points, write_points};
use hullscan::rand::{draw_cloud, CloudShape, ReplayToken};
use hullscan::{graham_scan, HullCfg, Point, SortStrategy, DEFAULT_CAPACITY};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

use provenance::{current_git_rev, ensure_parent_dir, write_sidecar, HullRun};

#[derive(Parser)]
#[command(name = "hullscan", version)]
#[command(about = "Convex hulls of point files via Graham scan")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the hull of a point file and write it (plus a provenance sidecar)
    Hull {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Sort back-end: heap or selection
        #[arg(long, default_value_t = SortStrategy::Heap)]
        sort: SortStrategy,
        /// Stack capacity; larger inputs are rejected
        #[arg(long, default_value_t = DEFAULT_CAPACITY)]
        capacity: usize,
        /// Skip the provenance sidecar
        #[arg(long)]
        no_provenance: bool,
    },
    /// Run both sort back-ends on the same input and check the hulls agree
    Compare {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, default_value_t = DEFAULT_CAPACITY)]
        capacity: usize,
    },
    /// Write a seeded random point file
    Gen {
        #[arg(long, value_enum, default_value_t = Shape::Square)]
        shape: Shape,
        #[arg(long)]
        count: usize,
        /// Half-width for squares, radius for disks and circles
        #[arg(long, default_value_t = 100.0)]
        size: f64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print version and git revision as JSON
    Report,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Shape {
    Square,
    Disk,
    Circle,
}

impl Shape {
    fn cloud(self, size: f64) -> CloudShape {
        match self {
            Shape::Square => CloudShape::Square { half_width: size },
            Shape::Disk => CloudShape::Disk { radius: size },
            Shape::Circle => CloudShape::Circle { radius: size },
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Hull {
            input,
            out,
            sort,
            capacity,
            no_provenance,
        } => {
            let cfg = HullCfg { sort, capacity };
            hull(&input, &out, cfg, !no_provenance).map(|_| ())
        }
        Action::Compare { input, capacity } => compare(&input, capacity),
        Action::Gen {
            shape,
            count,
            size,
            seed,
            index,
            out,
        } => gen(shape.cloud(size), count, ReplayToken::new(seed, index), &out),
        Action::Report => report(),
    }
}

fn load_points(path: &Path) -> Result<Vec<Point>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let points = parse_points(&text).with_context(|| format!("parsing {}", path.display()))?;
    Ok(points)
}

fn save_points(path: &Path, points: &[Point]) -> Result<()> {
    ensure_parent_dir(path)?;
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    write_points(BufWriter::new(file), points)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Run the scan with `cfg`, returning the hull and elapsed milliseconds.
fn timed_scan(points: &[Point], cfg: HullCfg) -> Result<(Vec<Point>, f64)> {
    let mut work = points.to_vec();
    let start = Instant::now();
    let hull = graham_scan(&mut work, cfg)?;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    Ok((hull, elapsed_ms))
}

fn hull(input: &Path, out: &Path, cfg: HullCfg, provenance: bool) -> Result<HullRun> {
    let points = load_points(input)?;
    tracing::info!(
        input = %input.display(),
        points = points.len(),
        sort = %cfg.sort,
        "hull"
    );
    let (hull, elapsed_ms) = timed_scan(&points, cfg)
        .with_context(|| format!("computing hull of {}", input.display()))?;
    tracing::info!(hull_points = hull.len(), elapsed_ms, "scan_done");

    save_points(out, &hull)?;

    let run = HullRun {
        input: input.display().to_string(),
        sort: cfg.sort.to_string(),
        capacity: cfg.capacity,
        input_points: points.len(),
        hull_points: hull.len(),
        elapsed_ms,
    };
    if provenance {
        let path = write_sidecar(out, &run)?;
        tracing::debug!(path = %path.display(), "provenance_written");
    }
    Ok(run)
}

fn compare(input: &Path, capacity: usize) -> Result<()> {
    let points = load_points(input)?;
    tracing::info!(input = %input.display(), points = points.len(), "compare");
    let mut hulls = Vec::with_capacity(SortStrategy::ALL.len());
    for sort in SortStrategy::ALL {
        let (hull, elapsed_ms) = timed_scan(&points, HullCfg { sort, capacity })?;
        tracing::info!(sort = %sort, hull_points = hull.len(), elapsed_ms, "backend");
        hulls.push((sort, hull));
    }
    check_agreement(input, &hulls)?;
    tracing::info!("backends_agree");
    Ok(())
}

/// Fail unless every back-end produced the same hull as the first.
fn check_agreement(input: &Path, hulls: &[(SortStrategy, Vec<Point>)]) -> Result<()> {
    let Some((first_sort, first)) = hulls.first() else {
        return Ok(());
    };
    for (sort, hull) in &hulls[1..] {
        if hull != first {
            bail!(
                "sort back-ends produced different hulls for {}: {first_sort} gave {} points, {sort} gave {}",
                input.display(),
                first.len(),
                hull.len()
            );
        }
    }
    Ok(())
}

fn gen(shape: CloudShape, count: usize, tok: ReplayToken, out: &Path) -> Result<()> {
    tracing::info!(?shape, count, seed = tok.seed, index = tok.index, "gen");
    let points = draw_cloud(shape, count, tok)
        .with_context(|| format!("generating {}", out.display()))?;
    save_points(out, &points)
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": current_git_rev(),
        "version": hullscan::VERSION,
        "default_capacity": DEFAULT_CAPACITY,
        "sorts": SortStrategy::ALL.iter().map(|s| s.name()).collect::<Vec<_>>(),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
