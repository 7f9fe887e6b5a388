// grid.rs - Grid types for Wireworld
//
// Dimensions are carried by the grid value rather than fixed at compile time.
// Cells are stored row-major as raw symbols; lookups always go through `Pos`.

use std::fmt;

use crate::cell::Cell;
use crate::error::{GridError, GridResult};
use crate::neighbors::Offset;

pub const DEFAULT_ROWS: usize = 40;
pub const DEFAULT_COLS: usize = 40;

/// Grid shape: `rows` by `cols`, both positive once validated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dims {
    rows: usize,
    cols: usize,
}

impl Dims {
    pub fn new(rows: usize, cols: usize) -> GridResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(GridError::ZeroDimension { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    pub fn rows(self) -> usize { self.rows }
    pub fn cols(self) -> usize { self.cols }

    pub fn cell_count(self) -> usize {
        self.rows * self.cols
    }

    pub fn contains(self, pos: Pos) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Position reached from `pos` by `offset`, or `None` if it leaves the grid.
    /// Rows and columns are checked separately so a step off one edge can never
    /// land on the far side of a neighbouring row.
    pub fn offset(self, pos: Pos, offset: Offset) -> Option<Pos> {
        let (dr, dc) = offset.delta();
        let row = pos.row.checked_add_signed(dr)?;
        let col = pos.col.checked_add_signed(dc)?;
        let target = Pos::new(row, col);
        self.contains(target).then_some(target)
    }

    pub fn is_first_col(self, pos: Pos) -> bool { pos.col == 0 }
    pub fn is_last_col(self, pos: Pos)  -> bool { pos.col + 1 == self.cols }
    pub fn is_top_row(self, pos: Pos)   -> bool { pos.row == 0 }
    pub fn is_bottom_row(self, pos: Pos) -> bool { pos.row + 1 == self.rows }

    /// Every position, row by row.
    pub fn positions(self) -> impl Iterator<Item = Pos> {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Pos::new(row, col)))
    }
}

impl Default for Dims {
    fn default() -> Self {
        Self { rows: DEFAULT_ROWS, cols: DEFAULT_COLS }
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// A cell position as (row, column).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Pos {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    dims: Dims,
    cells: Vec<u8>,
}

impl Grid {
    /// An all-empty grid.
    pub fn new(dims: Dims) -> Self {
        Self { dims, cells: vec![Cell::Empty.symbol(); dims.cell_count()] }
    }

    pub fn with_size(rows: usize, cols: usize) -> GridResult<Self> {
        Ok(Self::new(Dims::new(rows, cols)?))
    }

    /// Builds a grid from row-major symbols. Symbols are not validated here;
    /// the engine reports any it does not recognise.
    pub fn from_symbols(dims: Dims, cells: Vec<u8>) -> GridResult<Self> {
        if cells.len() != dims.cell_count() {
            return Err(GridError::SymbolCount {
                dims,
                expected: dims.cell_count(),
                found: cells.len(),
            });
        }
        Ok(Self { dims, cells })
    }

    /// An all-empty grid of the same shape, used as the second generation buffer.
    pub fn blank_like(&self) -> Self {
        Self::new(self.dims)
    }

    pub fn dims(&self) -> Dims { self.dims }
    pub fn rows(&self) -> usize { self.dims.rows }
    pub fn cols(&self) -> usize { self.dims.cols }

    fn index(&self, pos: Pos) -> Option<usize> {
        self.dims.contains(pos).then(|| pos.row * self.dims.cols + pos.col)
    }

    fn checked_index(&self, pos: Pos) -> GridResult<usize> {
        self.index(pos).ok_or(GridError::OutOfBounds { pos, dims: self.dims })
    }

    /// Raw symbol at `pos`, or `None` outside the grid.
    pub fn symbol(&self, pos: Pos) -> Option<u8> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// Decoded cell at `pos`; `None` outside the grid or for an unknown symbol.
    pub fn get(&self, pos: Pos) -> Option<Cell> {
        self.symbol(pos).and_then(Cell::from_symbol)
    }

    pub fn set(&mut self, pos: Pos, cell: Cell) -> GridResult<()> {
        self.set_symbol(pos, cell.symbol())
    }

    pub fn set_symbol(&mut self, pos: Pos, symbol: u8) -> GridResult<()> {
        let i = self.checked_index(pos)?;
        self.cells[i] = symbol;
        Ok(())
    }

    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell.symbol());
    }

    /// Sets every cell from `f`, visiting positions in row-major order.
    pub fn fill_with(&mut self, mut f: impl FnMut(Pos) -> Cell) {
        for (pos, slot) in self.dims.positions().zip(self.cells.iter_mut()) {
            *slot = f(pos).symbol();
        }
    }

    pub fn row(&self, row: usize) -> Option<&[u8]> {
        (row < self.dims.rows).then(|| {
            let start = row * self.dims.cols;
            &self.cells[start..start + self.dims.cols]
        })
    }

    pub fn rows_iter(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks_exact(self.dims.cols)
    }

    pub(crate) fn row_mut(&mut self, row: usize) -> &mut [u8] {
        let start = row * self.dims.cols;
        &mut self.cells[start..start + self.dims.cols]
    }

    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        self.dims.positions()
    }

    pub fn count(&self, cell: Cell) -> usize {
        let symbol = cell.symbol();
        self.cells.iter().filter(|&&s| s == symbol).count()
    }

    /// Number of cells holding a symbol outside the alphabet.
    pub fn count_unexpected(&self) -> usize {
        self.cells.iter().filter(|&&s| Cell::from_symbol(s).is_none()).count()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows_iter() {
            for &symbol in row {
                write!(f, "{}", symbol as char)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_sized_grids_are_rejected() {
        assert_eq!(Dims::new(0, 4), Err(GridError::ZeroDimension { rows: 0, cols: 4 }));
        assert!(Grid::with_size(3, 0).is_err());
    }

    #[test]
    fn new_grid_is_empty() {
        let grid = Grid::with_size(3, 7).unwrap();
        assert_eq!(grid.count(Cell::Empty), 21);
        assert_eq!(grid.rows_iter().count(), 3);
        assert!(grid.rows_iter().all(|row| row.len() == 7));
    }

    #[test]
    fn set_and_get_use_row_and_column() {
        let mut grid = Grid::with_size(2, 3).unwrap();
        grid.set(Pos::new(1, 0), Cell::Head).unwrap();
        assert_eq!(grid.get(Pos::new(1, 0)), Some(Cell::Head));
        assert_eq!(grid.get(Pos::new(0, 2)), Some(Cell::Empty));
        assert_eq!(grid.row(1), Some(&b"H  "[..]));
    }

    #[test]
    fn out_of_bounds_access() {
        let mut grid = Grid::with_size(2, 3).unwrap();
        assert_eq!(grid.get(Pos::new(0, 3)), None);
        assert_eq!(grid.get(Pos::new(2, 0)), None);
        assert_eq!(
            grid.set(Pos::new(0, 3), Cell::Head),
            Err(GridError::OutOfBounds { pos: Pos::new(0, 3), dims: grid.dims() })
        );
        assert_eq!(grid.row(2), None);
    }

    #[test]
    fn from_symbols_checks_length() {
        let dims = Dims::new(2, 2).unwrap();
        assert!(Grid::from_symbols(dims, b"cccc".to_vec()).is_ok());
        assert_eq!(
            Grid::from_symbols(dims, b"ccc".to_vec()),
            Err(GridError::SymbolCount { dims, expected: 4, found: 3 })
        );
    }

    #[test]
    fn unknown_symbols_are_kept_but_not_decoded() {
        let mut grid = Grid::with_size(1, 2).unwrap();
        grid.set_symbol(Pos::new(0, 1), b'x').unwrap();
        assert_eq!(grid.symbol(Pos::new(0, 1)), Some(b'x'));
        assert_eq!(grid.get(Pos::new(0, 1)), None);
        assert_eq!(grid.count_unexpected(), 1);
    }

    #[test]
    fn offsets_never_wrap_rows() {
        let dims = Dims::new(3, 4).unwrap();
        assert_eq!(dims.offset(Pos::new(1, 3), Offset::East), None);
        assert_eq!(dims.offset(Pos::new(1, 3), Offset::SouthEast), None);
        assert_eq!(dims.offset(Pos::new(1, 0), Offset::West), None);
        assert_eq!(dims.offset(Pos::new(0, 0), Offset::North), None);
        assert_eq!(dims.offset(Pos::new(2, 1), Offset::South), None);
        assert_eq!(dims.offset(Pos::new(1, 1), Offset::NorthWest), Some(Pos::new(0, 0)));
    }

    #[test]
    fn fill_with_visits_row_major() {
        let mut grid = Grid::with_size(2, 3).unwrap();
        let mut seen = Vec::new();
        grid.fill_with(|pos| {
            seen.push(pos);
            if pos.col == pos.row { Cell::Head } else { Cell::Conductor }
        });
        assert_eq!(seen, grid.positions().collect::<Vec<_>>());
        assert_eq!(grid.to_string(), "Hcc\ncHc\n");
    }

    #[test]
    fn display_prints_rows() {
        let mut grid = Grid::with_size(2, 3).unwrap();
        grid.set(Pos::new(0, 0), Cell::Conductor).unwrap();
        grid.set(Pos::new(1, 2), Cell::Tail).unwrap();
        assert_eq!(grid.to_string(), "c  \n  t\n");
    }
}
