// main.rs - Batch Wireworld runner
//
// Loads a grid file and prints a fixed number of generations to stdout.
// Logging goes to stderr so the frames can be piped.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use clap::builder::TypedValueParser as _;
use tracing::{Level, info};

use wireworld::config::DEFAULT_GENERATIONS;
use wireworld::display::write_generation;
use wireworld::grid::{DEFAULT_COLS, DEFAULT_ROWS};
use wireworld::{Dims, RunConfig, Simulation, SizeMode};

/// Runs Wireworld on a grid file and prints each generation as text.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Grid file: one row per line using ' ', 'H', 't' and 'c'.
    file: PathBuf,

    /// Number of rows the file must have.
    #[arg(long, value_name = "ROWS", default_value_t = DEFAULT_ROWS,
          value_parser = clap::value_parser!(u32).range(1..).map(|v| v as usize))]
    rows: usize,

    /// Number of columns each row must have.
    #[arg(long, value_name = "COLUMNS", default_value_t = DEFAULT_COLS,
          value_parser = clap::value_parser!(u32).range(1..).map(|v| v as usize))]
    cols: usize,

    /// Take the grid size from the file instead of --rows/--cols.
    #[arg(long, conflicts_with_all = ["rows", "cols"])]
    infer_size: bool,

    /// Generations to print.
    #[arg(short, long, value_name = "COUNT", default_value_t = DEFAULT_GENERATIONS)]
    generations: u64,

    /// More log output on stderr (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn run_config(&self) -> Result<RunConfig> {
        let size = if self.infer_size {
            SizeMode::Infer
        } else {
            SizeMode::Fixed(Dims::new(self.rows, self.cols)?)
        };
        Ok(RunConfig { size, generations: self.generations })
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn run(args: &Args) -> Result<()> {
    let config = args.run_config()?;
    let grid = config
        .load(&args.file)
        .with_context(|| format!("failed to load {}", args.file.display()))?;

    info!(dims = %grid.dims(), generations = config.generations, "starting run");

    let mut sim = Simulation::new(grid);
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    for _ in 0..config.generations {
        write_generation(&mut out, sim.current())?;
        let report = sim.advance();
        if !report.is_clean() {
            out.flush()?;
            let plural = if report.unexpected == 1 { "" } else { "s" };
            bail!(
                "{} unexpected character{plural} in generation {}",
                report.unexpected,
                sim.generation()
            );
        }
    }
    out.flush()?;

    info!(generations = sim.generation(), "run finished");
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    run(&args)
}
