// main.rs - Terminal driver: owns the simulation and animates it

use std::io::{self, Write};
use std::time::Duration;

use clap::Parser;
use life_core::{BoundaryMode, Simulation, SimulationConfig, StepOutcome};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod render;

/// Conway's Game of Life, animated in the terminal.
#[derive(Parser, Debug)]
#[command(name = "life", version)]
struct Args {
    /// Grid rows
    #[arg(long, default_value_t = 128)]
    rows: usize,

    /// Grid columns
    #[arg(long, default_value_t = 128)]
    cols: usize,

    /// Seed for the random starting grid
    #[arg(long)]
    seed: Option<u64>,

    /// Probability a starting cell is alive (default: uniform 0/1)
    #[arg(long)]
    density: Option<f64>,

    /// Edge handling: reference, zero-padded or toroidal
    #[arg(long, default_value_t = BoundaryMode::Reference)]
    boundary: BoundaryMode,

    /// Frames to render, 0 runs until Ctrl+C
    #[arg(long, default_value_t = 100)]
    frames: u64,

    /// Delay between frames in milliseconds
    #[arg(long, default_value_t = 100)]
    interval_ms: u64,

    /// Start from a named pattern (block, blinker, toad, beacon, glider,
    /// r-pentomino, lwss, pulsar) instead of random cells
    #[arg(long)]
    pattern: Option<String>,

    /// Generations remembered for cycle detection
    #[arg(long, default_value_t = 10)]
    history: usize,

    /// Stop as soon as the board repeats a recent generation
    #[arg(long)]
    stop_on_cycle: bool,
}

impl Args {
    fn to_config(&self) -> SimulationConfig {
        SimulationConfig {
            rows: self.rows,
            cols: self.cols,
            seed: self.seed,
            density: self.density,
            boundary: self.boundary,
            frames: (self.frames > 0).then_some(self.frames),
            interval: Duration::from_millis(self.interval_ms),
            pattern: self.pattern.clone(),
            history_len: self.history,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Frames own stdout, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = args.to_config();
    let mut sim = Simulation::from_config(&config)?;
    info!(
        rows = config.rows,
        cols = config.cols,
        boundary = %config.boundary,
        population = sim.population(),
        "starting simulation"
    );

    let mut out = io::stdout();
    render::begin(&mut out)?;
    let result = animate(&mut sim, &config, args.stop_on_cycle, &mut out).await;
    render::end(&mut out)?;

    let outcome = result?;
    info!(
        generation = outcome.generation,
        population = outcome.population,
        cycle = outcome.cycle_detected,
        "simulation finished"
    );
    Ok(())
}

/// Draw the current board, then step it, once per tick.
async fn animate<W: Write>(
    sim: &mut Simulation,
    config: &SimulationConfig,
    stop_on_cycle: bool,
    out: &mut W,
) -> io::Result<StepOutcome> {
    let mut ticker = tokio::time::interval(config.interval);
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let mut outcome = StepOutcome {
        generation: sim.generation(),
        population: sim.population(),
        cycle_detected: false,
    };
    let mut frame = 0u64;

    while config.frames.is_none_or(|limit| frame < limit) {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = &mut ctrl_c => {
                info!(frame, "interrupted");
                break;
            }
        }

        render::draw(out, sim)?;
        outcome = sim.advance();
        frame += 1;

        if stop_on_cycle && outcome.cycle_detected {
            info!(generation = outcome.generation, "board is cycling, stopping");
            break;
        }
    }
    Ok(outcome)
}
