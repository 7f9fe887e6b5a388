// neighbors.rs - Moore neighbourhood lookup with edge and corner truncation
//
// A cell on an edge loses the offsets that point off the grid. Exclusions are
// computed per side by name; surviving offsets are then resolved with separate
// row and column range checks, so the first and last columns of adjacent rows
// are never treated as neighbours.

use std::ops::{BitOr, BitOrAssign};

use crate::grid::{Dims, Pos};

/// Relative neighbour position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Offset {
    NorthWest,
    North,
    NorthEast,
    West,
    East,
    SouthWest,
    South,
    SouthEast,
}

impl Offset {
    /// Neighbourhood order used for every lookup.
    pub const ALL: [Offset; 8] = [
        Offset::NorthWest, Offset::North, Offset::NorthEast,
        Offset::West,                     Offset::East,
        Offset::SouthWest, Offset::South, Offset::SouthEast,
    ];

    /// (row delta, column delta)
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Offset::NorthWest => (-1, -1),
            Offset::North     => (-1,  0),
            Offset::NorthEast => (-1,  1),
            Offset::West      => ( 0, -1),
            Offset::East      => ( 0,  1),
            Offset::SouthWest => ( 1, -1),
            Offset::South     => ( 1,  0),
            Offset::SouthEast => ( 1,  1),
        }
    }

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// A set of offsets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct OffsetSet(u8);

impl OffsetSet {
    const EMPTY: OffsetSet = OffsetSet(0);

    pub const WEST_SIDE: OffsetSet =
        OffsetSet(Offset::NorthWest.bit() | Offset::West.bit() | Offset::SouthWest.bit());
    pub const EAST_SIDE: OffsetSet =
        OffsetSet(Offset::NorthEast.bit() | Offset::East.bit() | Offset::SouthEast.bit());
    pub const NORTH_SIDE: OffsetSet =
        OffsetSet(Offset::NorthWest.bit() | Offset::North.bit() | Offset::NorthEast.bit());
    pub const SOUTH_SIDE: OffsetSet =
        OffsetSet(Offset::SouthWest.bit() | Offset::South.bit() | Offset::SouthEast.bit());

    pub const fn contains(self, offset: Offset) -> bool {
        self.0 & offset.bit() != 0
    }

    /// Members in neighbourhood order.
    pub fn iter(self) -> impl Iterator<Item = Offset> {
        Offset::ALL.into_iter().filter(move |&o| self.contains(o))
    }
}

impl BitOr for OffsetSet {
    type Output = OffsetSet;

    fn bitor(self, rhs: OffsetSet) -> OffsetSet {
        OffsetSet(self.0 | rhs.0)
    }
}

impl BitOrAssign for OffsetSet {
    fn bitor_assign(&mut self, rhs: OffsetSet) {
        self.0 |= rhs.0;
    }
}

/// Offsets that must be skipped for the cell at `pos`.
pub fn exclusions(pos: Pos, dims: Dims) -> OffsetSet {
    let mut excluded = OffsetSet::EMPTY;
    if dims.is_first_col(pos)  { excluded |= OffsetSet::WEST_SIDE; }
    if dims.is_last_col(pos)   { excluded |= OffsetSet::EAST_SIDE; }
    if dims.is_top_row(pos)    { excluded |= OffsetSet::NORTH_SIDE; }
    if dims.is_bottom_row(pos) { excluded |= OffsetSet::SOUTH_SIDE; }
    excluded
}

/// In-bounds neighbours of `pos`, in `Offset::ALL` order.
pub fn neighbors_in_bounds(pos: Pos, dims: Dims) -> Neighbors {
    Neighbors {
        pos,
        dims,
        excluded: exclusions(pos, dims),
        next: 0,
    }
}

/// Iterator returned by [`neighbors_in_bounds`].
#[derive(Clone, Debug)]
pub struct Neighbors {
    pos: Pos,
    dims: Dims,
    excluded: OffsetSet,
    next: usize,
}

impl Iterator for Neighbors {
    type Item = Pos;

    fn next(&mut self) -> Option<Pos> {
        while let Some(&offset) = Offset::ALL.get(self.next) {
            self.next += 1;
            if self.excluded.contains(offset) {
                continue;
            }
            if let Some(target) = self.dims.offset(self.pos, offset) {
                return Some(target);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(Offset::ALL.len() - self.next.min(Offset::ALL.len())))
    }
}
