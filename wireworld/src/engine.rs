// engine.rs - One Wireworld generation from `current` into `next`
//
// Reads only from `current` and writes every cell of `next`, so no cell sees a
// value produced during the same step.

use tracing::trace;

use crate::cell::Cell;
use crate::error::{GridError, GridResult};
use crate::grid::{Grid, Pos};
use crate::neighbors::neighbors_in_bounds;

/// Outcome of a single step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Cells holding a symbol outside the alphabet. They are copied through unchanged.
    pub unexpected: usize,
    /// Cells whose symbol differs between the two generations.
    pub changed: usize,
}

impl StepReport {
    pub fn is_clean(&self) -> bool {
        self.unexpected == 0
    }

    pub fn is_static(&self) -> bool {
        self.changed == 0
    }

    pub(crate) fn merge(&mut self, other: StepReport) {
        self.unexpected += other.unexpected;
        self.changed += other.changed;
    }
}

/// Writes the generation after `current` into `next`.
///
/// Fails only when the buffers differ in shape, before anything is written.
/// Unknown symbols never stop the step; they are counted in the report.
pub fn step(current: &Grid, next: &mut Grid) -> GridResult<StepReport> {
    if current.dims() != next.dims() {
        return Err(GridError::DimensionMismatch {
            expected: current.dims(),
            found: next.dims(),
        });
    }
    Ok(step_unchecked(current, next))
}

pub(crate) fn step_unchecked(current: &Grid, next: &mut Grid) -> StepReport {
    let mut report = StepReport::default();

    for (row, source) in current.rows_iter().enumerate() {
        let target = next.row_mut(row);
        for (col, (&symbol, out)) in source.iter().zip(target.iter_mut()).enumerate() {
            *out = match Cell::from_symbol(symbol) {
                Some(Cell::Conductor) => {
                    let heads = head_neighbors(current, Pos::new(row, col));
                    Cell::Conductor.next(heads).symbol()
                }
                Some(cell) => cell.next(0).symbol(),
                None => {
                    trace!(row, col, symbol, "unexpected cell symbol");
                    report.unexpected += 1;
                    symbol
                }
            };
            if *out != symbol {
                report.changed += 1;
            }
        }
    }

    report
}

/// Number of in-bounds neighbours of `pos` that are heads in `grid`.
pub fn head_neighbors(grid: &Grid, pos: Pos) -> usize {
    neighbors_in_bounds(pos, grid.dims())
        .filter(|&p| grid.get(p) == Some(Cell::Head))
        .count()
}
