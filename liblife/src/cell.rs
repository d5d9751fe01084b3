use std::fmt;

/// Offsets of the 8 cells surrounding a cell, as `[dx, dy]`.
const NEIGHBOR_RELATIVE_POSITIONS: &[[i64; 2]] = &[
    [-1, -1],
    [-1, 0],
    [-1, 1],
    [0, -1],
    [0, 1],
    [1, -1],
    [1, 0],
    [1, 1],
];

/// A single position on the unbounded lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub x: i64,
    pub y: i64,
}

impl Cell {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The cells at Chebyshev distance 1 from this one.
    ///
    /// Offsets that would step past `i64::MIN` or `i64::MAX` are skipped rather than wrapped,
    /// so a cell on the edge of the representable range has fewer than 8 neighbors
    /// (5 on an edge, 3 in a corner).
    pub fn neighbors(self) -> impl Iterator<Item = Cell> {
        NEIGHBOR_RELATIVE_POSITIONS.iter().filter_map(move |[dx, dy]| {
            Some(Cell {
                x: self.x.checked_add(*dx)?,
                y: self.y.checked_add(*dy)?,
            })
        })
    }
}

impl From<(i64, i64)> for Cell {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

impl From<[i64; 2]> for Cell {
    fn from(value: [i64; 2]) -> Self {
        Self {
            x: value[0],
            y: value[1],
        }
    }
}

impl From<Cell> for [i64; 2] {
    fn from(value: Cell) -> Self {
        [value.x, value.y]
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}
