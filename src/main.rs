use anyhow::{bail, Context, Result};
use clap::Parser;
use graham_hull::algorithms::{GrahamScan, SortStrategy};
use graham_hull::data::{Point, DEFAULT_CAPACITY};
use graham_hull::io::{read_points_with_capacity, write_hull};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "graham-hull")]
#[command(about = "Convex hull of a planar point set by Graham scan")]
struct Cmd {
  /// Point file: a count line, then one `x y` pair per line. Reads stdin when absent
  input: Option<PathBuf>,

  /// Output file for the hull (overwrites old files), else writes to stdout
  #[arg(short, long)]
  out: Option<PathBuf>,

  /// Angular sort used before the sweep: `selection` (or `slow`), `heap` (or `fast`)
  #[arg(short, long, default_value_t = SortStrategy::Heap)]
  strategy: SortStrategy,

  /// Maximum number of hull candidates held during the sweep
  #[arg(long, default_value_t = DEFAULT_CAPACITY)]
  capacity: usize,

  /// Scan this many random points from the unit square instead of reading input
  #[arg(long, conflicts_with = "input")]
  random: Option<usize>,

  /// Seed for `--random`
  #[arg(long, requires = "random")]
  seed: Option<u64>,
}

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_writer(io::stderr)
    .with_target(false)
    .init();
  let cmd = Cmd::parse();

  let mut points = load(&cmd)?;
  tracing::info!(points = points.len(), strategy = %cmd.strategy, "read points");

  let scanner = GrahamScan::new(cmd.strategy).with_capacity(cmd.capacity);
  let start = Instant::now();
  let hull = scanner.scan(&mut points).context("Graham scan failed")?;
  let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
  if let Some(anchor) = hull.first() {
    tracing::debug!(x = *anchor.x_coord(), y = *anchor.y_coord(), "anchor");
  }
  tracing::info!(hull = hull.len(), elapsed_ms, "scan complete");

  store(&cmd, &hull)
}

fn load(cmd: &Cmd) -> Result<Vec<Point>> {
  if let Some(count) = cmd.random {
    if count > cmd.capacity {
      bail!(
        "The problem size is too big: {} points, at most {} are supported",
        count,
        cmd.capacity
      );
    }
    let mut rng = match cmd.seed {
      Some(seed) => SmallRng::seed_from_u64(seed),
      None => SmallRng::from_entropy(),
    };
    return Ok((0..count).map(|_| rng.gen::<Point>()).collect());
  }
  match &cmd.input {
    Some(path) => {
      let file = File::open(path)
        .with_context(|| format!("Failed to read the input file {}", path.display()))?;
      read_points_with_capacity(BufReader::new(file), cmd.capacity)
        .with_context(|| format!("Invalid input file {}", path.display()))
    }
    None => {
      tracing::info!("Reading from stdin");
      read_points_with_capacity(io::stdin().lock(), cmd.capacity).context("Invalid input on stdin")
    }
  }
}

fn store(cmd: &Cmd, hull: &[Point]) -> Result<()> {
  match &cmd.out {
    Some(path) => {
      let file = File::create(path)
        .with_context(|| format!("Failed to write the output file {}", path.display()))?;
      let mut writer = BufWriter::new(file);
      write_hull(&mut writer, hull)?;
      writer.flush()?;
    }
    None => {
      let stdout = io::stdout();
      let mut writer = stdout.lock();
      write_hull(&mut writer, hull)?;
      writer.flush()?;
    }
  }
  Ok(())
}
