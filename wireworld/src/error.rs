// error.rs - Error types for grid construction and file loading

use std::path::PathBuf;

use thiserror::Error;

use crate::grid::{Dims, Pos};

/// Errors raised when building or pairing grids.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    ZeroDimension { rows: usize, cols: usize },

    /// The two generation buffers handed to a step differ in shape.
    #[error("grid dimensions differ: expected {expected}, found {found}")]
    DimensionMismatch { expected: Dims, found: Dims },

    #[error("{dims} grid needs {expected} cells, got {found}")]
    SymbolCount { dims: Dims, expected: usize, found: usize },

    #[error("position {pos} is outside the {dims} grid")]
    OutOfBounds { pos: Pos, dims: Dims },
}

/// Errors raised while reading a grid file.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot open file {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read grid data: {0}")]
    Read(#[from] std::io::Error),

    #[error("grid file is empty")]
    Empty,

    #[error("file has {found} rows, the file must have {expected} rows")]
    RowCount { found: usize, expected: usize },

    #[error("line {line} has {found} columns, each row must have {expected} columns")]
    ColumnCount { line: usize, found: usize, expected: usize },

    #[error("{count} unexpected character{}", plural(.count))]
    UnexpectedCharacters { count: usize },

    #[error(transparent)]
    Grid(#[from] GridError),
}

pub type GridResult<T> = Result<T, GridError>;
pub type LoadResult<T> = Result<T, LoadError>;

fn plural(count: &usize) -> &'static str {
    if *count == 1 { "" } else { "s" }
}
