//! Error types for lattice construction.

use std::fmt;

/// Errors arising from lattice construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LatticeError {
    /// Attempted to construct a lattice with a zero axis.
    EmptyLattice,
    /// An axis exceeds the maximum representable coordinate.
    DimensionTooLarge {
        /// Which axis (`"width"` or `"height"`).
        name: &'static str,
        /// The requested size.
        value: u32,
        /// The maximum allowed size.
        max: u32,
    },
}

impl fmt::Display for LatticeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLattice => write!(f, "lattice must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "lattice {name} {value} exceeds maximum {max}")
            }
        }
    }
}

impl std::error::Error for LatticeError {}
