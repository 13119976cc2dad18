use std::{fs, path::PathBuf, thread, time::Duration};

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

pub use utils::Pos;
mod utils;

pub use error::LifeError;
mod error;

pub use grid::Grid;
mod grid;

pub mod rules;

pub use sim::Sim;
mod sim;

pub mod seed;

pub use view::{InputCmd, Status, View};
mod view;

const MIN_INTERVAL: Duration = Duration::from_millis(10);
const MAX_INTERVAL: Duration = Duration::from_secs(10);

/// Conway's game of life on a toroidal grid, drawn to the terminal.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Number of columns.
    #[arg(long, env = "LIFE_WIDTH", default_value_t = 80)]
    width: usize,
    /// Number of rows.
    #[arg(long, env = "LIFE_HEIGHT", default_value_t = 15)]
    height: usize,
    /// Probability for each cell to start alive.
    #[arg(long, env = "LIFE_LIVE_FRACTION", default_value_t = 0.25)]
    live_fraction: f64,
    /// Seconds between generations.
    #[arg(
        long,
        env = "LIFE_INTERVAL",
        value_name = "SECONDS",
        default_value = "1.0",
        value_parser = parse_interval
    )]
    interval: Duration,
    /// Seed for the random generator, a fresh one is drawn when absent.
    #[arg(long, env = "LIFE_SEED")]
    seed: Option<u64>,
    /// Plaintext pattern to start from instead of random cells.
    #[arg(long, value_name = "PATH")]
    pattern: Option<PathBuf>,
    /// Stop after this many generations.
    #[arg(long, value_name = "COUNT")]
    generations: Option<u64>,
    /// Stop as soon as a generation repeats.
    #[arg(long)]
    stop_on_cycle: bool,
}

fn parse_interval(value: &str) -> Result<Duration, String> {
    let seconds: f64 = value.parse().map_err(|err| format!("{err}"))?;
    let interval = Duration::try_from_secs_f64(seconds).map_err(|err| format!("{err}"))?;
    if !(MIN_INTERVAL..=MAX_INTERVAL).contains(&interval) {
        return Err(format!(
            "{seconds} seconds is outside {}..={} seconds",
            MIN_INTERVAL.as_secs_f64(),
            MAX_INTERVAL.as_secs_f64()
        ));
    }
    Ok(interval)
}

fn faster(interval: Duration) -> Duration {
    (interval / 2).clamp(MIN_INTERVAL, MAX_INTERVAL)
}

fn slower(interval: Duration) -> Duration {
    interval.saturating_mul(2).clamp(MIN_INTERVAL, MAX_INTERVAL)
}

fn initial_grid(args: &Args) -> Result<Grid> {
    let mut grid = Grid::new(args.width, args.height)?;
    if let Some(path) = &args.pattern {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read pattern {}", path.display()))?;
        let cells = seed::parse_pattern(&content);
        if cells.is_empty() {
            warn!(path = %path.display(), "pattern has no live cells");
        }
        seed::apply_pattern(&mut grid, &cells, pos!(0, 0));
        return Ok(grid);
    }

    let mut rng = match args.seed {
        Some(value) => ChaCha8Rng::seed_from_u64(value),
        None => ChaCha8Rng::from_entropy(),
    };
    seed::seed(&mut grid, args.live_fraction, &mut rng)?;
    Ok(grid)
}

fn run(args: Args) -> Result<()> {
    let grid = initial_grid(&args)?;
    info!(
        width = args.width,
        height = args.height,
        population = grid.population(),
        "starting simulation"
    );

    let mut sim = Sim::new(grid);
    let mut view = View::open()?;
    let mut interval = args.interval;
    let mut paused = false;
    let mut period = None;

    loop {
        for command in view.poll() {
            match command {
                InputCmd::Exit => return Ok(()),
                InputCmd::TogglePause => paused = !paused,
                InputCmd::Accelerate => interval = faster(interval),
                InputCmd::Decelerate => interval = slower(interval),
            }
        }

        let status = Status {
            generation: sim.generation(),
            population: sim.current().population(),
            period,
            paused,
        };
        view.display(sim.current(), &status)?;

        if args.generations.is_some_and(|limit| sim.generation() >= limit) {
            return Ok(());
        }
        if period.is_some() && args.stop_on_cycle {
            return Ok(());
        }

        if !paused {
            period = sim.tick().period;
        }
        thread::sleep(interval);
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    run(Args::parse())
}
