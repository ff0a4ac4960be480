//! Lattice coordinates and the [`Neighbors`] list type.

use smallvec::SmallVec;
use std::fmt;

/// A 2D lattice coordinate.
///
/// `x` is the column, `y` is the row. Coordinates are signed so that
/// out-of-bounds positions (e.g. one column west of the lattice) are
/// representable and can be rejected by bounds checks instead of
/// wrapping silently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    /// Column index.
    pub x: i32,
    /// Row index.
    pub y: i32,
}

impl Point {
    /// Create a point from column and row indices.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// The in-bounds Moore neighborhood of a cell.
///
/// Uses `SmallVec<[Point; 8]>` so the full eight-neighbor case never
/// touches the heap.
pub type Neighbors = SmallVec<[Point; 8]>;
