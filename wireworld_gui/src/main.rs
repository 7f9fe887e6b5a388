// main.rs - Interactive Wireworld
// Window runner: timed generations, per-state colours, cell painting, ESC to quit.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use clap::builder::TypedValueParser as _;
use eframe::egui;
use egui::Color32;
use tracing::{Level, info, warn};

use wireworld::grid::{DEFAULT_COLS, DEFAULT_ROWS};
use wireworld::patterns::{self, PATTERNS};
use wireworld::{Cell, Dims, Grid, Pos, RunConfig, Simulation, SizeMode};

mod ui;

/// Interactive Wireworld window.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Grid file to start from; without one the first built-in pattern is shown.
    file: Option<PathBuf>,

    #[arg(long, value_name = "ROWS", default_value_t = DEFAULT_ROWS,
          value_parser = clap::value_parser!(u32).range(1..).map(|v| v as usize))]
    rows: usize,

    #[arg(long, value_name = "COLUMNS", default_value_t = DEFAULT_COLS,
          value_parser = clap::value_parser!(u32).range(1..).map(|v| v as usize))]
    cols: usize,

    /// Take the grid size from the file instead of --rows/--cols.
    #[arg(long, requires = "file", conflicts_with_all = ["rows", "cols"])]
    infer_size: bool,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn initial_grid(&self) -> Result<Grid> {
        let dims = Dims::new(self.rows, self.cols)?;
        let Some(path) = &self.file else {
            let mut grid = Grid::new(dims);
            patterns::apply_pattern(&mut grid, &PATTERNS[0]);
            return Ok(grid);
        };

        let size = if self.infer_size { SizeMode::Infer } else { SizeMode::Fixed(dims) };
        let config = RunConfig { size, ..RunConfig::default() };
        config
            .load(path)
            .with_context(|| format!("failed to load {}", path.display()))
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(if args.verbose > 0 { Level::DEBUG } else { Level::INFO })
        .init();

    let grid = args.initial_grid()?;
    info!(dims = %grid.dims(), "starting window");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 1000.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Wireworld",
        options,
        Box::new(move |_cc| Box::new(WireworldApp::new(grid))),
    )
    .map_err(|e| anyhow!("window failed: {e}"))
}

pub struct WireworldApp {
    sim: Simulation,

    pub is_running: bool,
    pub last_update: Instant,
    pub update_interval: Duration,
    /// Indexed by `Cell as usize`.
    pub colors: [Color32; 4],
    pub brush: Cell,
    pub selected_pattern: usize,
    /// Unexpected cells seen by the last step that reported any.
    pub anomalies: usize,
    random_seed: u64,
}

impl WireworldApp {
    pub fn new(grid: Grid) -> Self {
        Self {
            sim: Simulation::new(grid),
            is_running: false,
            last_update: Instant::now(),
            update_interval: Duration::from_secs(1),
            colors: [
                Color32::BLACK,                 // empty
                Color32::from_rgb(40, 90, 230), // head
                Color32::from_rgb(220, 40, 40), // tail
                Color32::from_rgb(230, 200, 40),// conductor
            ],
            brush: Cell::Conductor,
            selected_pattern: 0,
            anomalies: 0,
            random_seed: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        self.sim.current()
    }

    pub fn generation(&self) -> u64 {
        self.sim.generation()
    }

    pub fn color_of(&self, symbol: u8) -> Color32 {
        match Cell::from_symbol(symbol) {
            Some(cell) => self.colors[cell as usize],
            None => Color32::from_rgb(255, 0, 255),
        }
    }
}

/// Actions driven by the controls in `ui.rs`.
pub trait WireworldInterface {
    fn update_generation(&mut self);
    fn clear_grid(&mut self);
    fn apply_selected_pattern(&mut self);
    fn apply_random_pattern(&mut self);
    fn paint_cell(&mut self, pos: Pos);
}

impl WireworldInterface for WireworldApp {
    fn update_generation(&mut self) {
        let report = self.sim.advance();

        if !report.is_clean() {
            self.is_running = false;
            self.anomalies = report.unexpected;
            warn!(unexpected = report.unexpected, "paused on unexpected cells");
        } else if report.is_static() && self.is_running {
            self.is_running = false;
            info!(generation = self.sim.generation(), "grid is static, pausing");
        }
    }

    fn clear_grid(&mut self) {
        let dims = self.grid().dims();
        self.sim.replace(Grid::new(dims));
        self.anomalies = 0;
    }

    fn apply_selected_pattern(&mut self) {
        if let Some(pattern) = PATTERNS.get(self.selected_pattern) {
            let mut grid = self.grid().blank_like();
            patterns::apply_pattern(&mut grid, pattern);
            self.sim.replace(grid);
            self.anomalies = 0;
        }
    }

    fn apply_random_pattern(&mut self) {
        let mut grid = self.grid().blank_like();
        patterns::apply_random_pattern(&mut grid, self.random_seed);
        self.random_seed = self.random_seed.wrapping_add(1);
        self.sim.replace(grid);
        self.anomalies = 0;
    }

    fn paint_cell(&mut self, pos: Pos) {
        // Clicks outside the grid are ignored.
        let _ = self.sim.set(pos, self.brush);
    }
}
