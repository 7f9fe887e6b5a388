// cell.rs - The four Wireworld cell states

/// A Wireworld cell. Grids store cells as their text symbol so that values
/// outside this alphabet stay representable and can be reported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Head,
    Tail,
    Conductor,
}

impl Cell {
    pub const ALL: [Cell; 4] = [Cell::Empty, Cell::Head, Cell::Tail, Cell::Conductor];

    pub const EMPTY_SYMBOL: u8     = b' ';
    pub const HEAD_SYMBOL: u8      = b'H';
    pub const TAIL_SYMBOL: u8      = b't';
    pub const CONDUCTOR_SYMBOL: u8 = b'c';

    pub const fn symbol(self) -> u8 {
        match self {
            Cell::Empty     => Self::EMPTY_SYMBOL,
            Cell::Head      => Self::HEAD_SYMBOL,
            Cell::Tail      => Self::TAIL_SYMBOL,
            Cell::Conductor => Self::CONDUCTOR_SYMBOL,
        }
    }

    /// `None` for anything outside the alphabet.
    pub const fn from_symbol(symbol: u8) -> Option<Cell> {
        match symbol {
            Self::EMPTY_SYMBOL     => Some(Cell::Empty),
            Self::HEAD_SYMBOL      => Some(Cell::Head),
            Self::TAIL_SYMBOL      => Some(Cell::Tail),
            Self::CONDUCTOR_SYMBOL => Some(Cell::Conductor),
            _ => None,
        }
    }

    /// Next state of this cell given how many of its in-bounds neighbours are heads.
    /// Only conductors look at the count.
    pub fn next(self, head_neighbors: usize) -> Cell {
        match (self, head_neighbors) {
            (Cell::Empty, _)             => Cell::Empty,
            (Cell::Head, _)              => Cell::Tail,
            (Cell::Tail, _)              => Cell::Conductor,
            (Cell::Conductor, 1) | (Cell::Conductor, 2) => Cell::Head,
            (Cell::Conductor, _)         => Cell::Conductor,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Cell::Empty     => "Empty",
            Cell::Head      => "Head",
            Cell::Tail      => "Tail",
            Cell::Conductor => "Conductor",
        }
    }
}
