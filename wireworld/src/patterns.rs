use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::cell::Cell;
use crate::grid::{Grid, Pos};

/// A drawing in file syntax, stamped centred onto a grid.
pub struct Pattern {
    pub name: &'static str,
    pub rows: &'static [&'static str],
}

impl Pattern {
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.rows.iter().map(|r| r.len()).max().unwrap_or(0)
    }
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Electron on a wire",
        rows: &["tHcccccccccccccccccccccccccc"],
    },
    Pattern {
        name: "Clock",
        rows: &[
            " ctHccc ",
            "c      cccccccccccccccccc",
            " cccccc ",
        ],
    },
    Pattern {
        name: "Fan-out",
        rows: &[
            "          cccccccccccc",
            "tHcccccccc",
            "          cccccccccccc",
        ],
    },
    Pattern {
        name: "Twin loops",
        rows: &[
            " ctHccc   cccccc ",
            "c      c c      c",
            " cccccc   cccHtc ",
        ],
    },
];

/// Clears `grid` and draws `pattern` in its centre. Cells that fall outside
/// the grid are dropped.
pub fn apply_pattern(grid: &mut Grid, pattern: &Pattern) {
    grid.fill(Cell::Empty);

    let top = centre_start(grid.rows(), pattern.height());
    let left = centre_start(grid.cols(), pattern.width());

    for (r, line) in pattern.rows.iter().enumerate() {
        for (c, symbol) in line.bytes().enumerate() {
            let Some(cell) = Cell::from_symbol(symbol) else { continue };
            let (Ok(row), Ok(col)) = (usize::try_from(top + r as isize), usize::try_from(left + c as isize)) else {
                continue;
            };
            // Out-of-range positions are clipped.
            let _ = grid.set(Pos::new(row, col), cell);
        }
    }
}

// Signed so that a pattern wider than the grid starts left of column 0.
fn centre_start(available: usize, needed: usize) -> isize {
    (available as isize - needed as isize) / 2
}

/// Fills `grid` with a deterministic soup of wire and sparse electrons.
pub fn apply_random_pattern(grid: &mut Grid, seed_value: u64) {
    // Simple pseudo-random generator
    let mut hasher = DefaultHasher::new();
    seed_value.hash(&mut hasher);
    let mut seed = hasher.finish();

    grid.fill_with(|_| {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        match (seed >> 33) % 16 {
            0..=6 => Cell::Conductor,
            7     => Cell::Head,
            _     => Cell::Empty,
        }
    });
}
