// display.rs - Plain text output of generations

use std::io::{self, Write};

use crate::grid::Grid;

/// Writes one frame: each row's symbols followed by a newline.
pub fn write_generation<W: Write>(out: &mut W, grid: &Grid) -> io::Result<()> {
    for row in grid.rows_iter() {
        out.write_all(row)?;
        out.write_all(b"\n")?;
    }
    Ok(())
}
