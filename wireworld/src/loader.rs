// loader.rs - Reads Wireworld grid files
//
// One grid row per line, one character per cell: ' ' empty, 'H' head,
// 't' tail, 'c' conductor. CRLF line endings are accepted.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::cell::Cell;
use crate::error::{LoadError, LoadResult};
use crate::grid::{Dims, Grid};

/// Reads and validates the grid file at `path`.
///
/// With `expected` set, the file must have exactly that shape; otherwise the
/// shape is taken from the line count and the first line.
pub fn load(path: impl AsRef<Path>, expected: Option<Dims>) -> LoadResult<Grid> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "file opened");

    let text = String::from_utf8_lossy(&bytes);
    let grid = parse(&text, expected)?;
    info!(path = %path.display(), dims = %grid.dims(), "file loaded");
    Ok(grid)
}

/// Parses grid text. Every unexpected character in the text is counted before
/// failing, so the error reports the total.
pub fn parse(text: &str, expected: Option<Dims>) -> LoadResult<Grid> {
    let lines: Vec<&str> = text.lines().collect();

    let dims = match expected {
        Some(dims) => {
            if lines.len() != dims.rows() {
                return Err(LoadError::RowCount { found: lines.len(), expected: dims.rows() });
            }
            dims
        }
        None => {
            let first = lines.first().ok_or(LoadError::Empty)?;
            Dims::new(lines.len(), first.chars().count())?
        }
    };

    let mut cells = Vec::with_capacity(dims.cell_count());
    let mut unexpected = 0;

    for (index, line) in lines.iter().enumerate() {
        let found = line.chars().count();
        if found != dims.cols() {
            return Err(LoadError::ColumnCount {
                line: index + 1,
                found,
                expected: dims.cols(),
            });
        }

        for c in line.chars() {
            match u8::try_from(c).ok().and_then(Cell::from_symbol) {
                Some(cell) => cells.push(cell.symbol()),
                None => {
                    unexpected += 1;
                    cells.push(Cell::Empty.symbol());
                }
            }
        }
    }

    if unexpected > 0 {
        return Err(LoadError::UnexpectedCharacters { count: unexpected });
    }

    Ok(Grid::from_symbols(dims, cells)?)
}
