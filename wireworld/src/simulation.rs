// simulation.rs - Double-buffered generation driver

use tracing::{debug, warn};

use crate::cell::Cell;
use crate::engine::{StepReport, step_unchecked};
use crate::error::GridResult;
use crate::grid::{Grid, Pos};

/// Owns the generation pair. `advance` steps into the back buffer and swaps.
#[derive(Clone, Debug)]
pub struct Simulation {
    current: Grid,
    next: Grid,
    generation: u64,
}

impl Simulation {
    pub fn new(grid: Grid) -> Self {
        let next = grid.blank_like();
        Self { current: grid, next, generation: 0 }
    }

    pub fn current(&self) -> &Grid {
        &self.current
    }

    /// Edits one cell of the current generation. The shape only changes via [`Simulation::replace`].
    pub fn set(&mut self, pos: Pos, cell: Cell) -> GridResult<()> {
        self.current.set(pos, cell)
    }

    pub fn set_symbol(&mut self, pos: Pos, symbol: u8) -> GridResult<()> {
        self.current.set_symbol(pos, symbol)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replaces the grid and restarts counting; the back buffer follows the new shape.
    pub fn replace(&mut self, grid: Grid) {
        self.next = grid.blank_like();
        self.current = grid;
        self.generation = 0;
    }

    pub fn advance(&mut self) -> StepReport {
        let report = step_unchecked(&self.current, &mut self.next);
        std::mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;

        debug!(generation = self.generation, changed = report.changed, "advanced");
        if !report.is_clean() {
            warn!(generation = self.generation, unexpected = report.unexpected, "unexpected cells");
        }
        report
    }

    /// Advances `n` generations, summing the reports.
    pub fn advance_n(&mut self, n: u64) -> StepReport {
        let mut total = StepReport::default();
        for _ in 0..n {
            total.merge(self.advance());
        }
        total
    }

    pub fn into_grid(self) -> Grid {
        self.current
    }
}

impl From<Grid> for Simulation {
    fn from(grid: Grid) -> Self {
        Self::new(grid)
    }
}
