//! Error types for the Ripple field simulator.
//!
//! Organized by subsystem: perturbation (out-of-band cell writes) and
//! stepping (the per-tick averaging sweep). Lattice construction errors
//! live in `ripple-space` next to the lattice itself.

use crate::point::Point;
use std::error::Error;
use std::fmt;

/// Largest magnitude accepted by a perturbation write.
///
/// Perturbation values are bounded to `[-PERTURB_LIMIT, PERTURB_LIMIT]`
/// so a single injected cell cannot dwarf the averaged field around it.
pub const PERTURB_LIMIT: i32 = 255;

/// Errors from perturbation writes into the field.
///
/// Both variants are local, synchronous rejections; nothing is written
/// when either is returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PerturbError {
    /// The target point fails the lattice bounds check.
    OutOfRangeLocation {
        /// The offending point.
        point: Point,
        /// Lattice width at the time of the call.
        width: u32,
        /// Lattice height at the time of the call.
        height: u32,
    },
    /// The value lies outside `[-PERTURB_LIMIT, PERTURB_LIMIT]`.
    OutOfRangeValue {
        /// The offending value.
        value: i32,
    },
}

impl fmt::Display for PerturbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRangeLocation {
                point,
                width,
                height,
            } => {
                write!(
                    f,
                    "perturb location {point} out of range: lattice is {width}x{height}"
                )
            }
            Self::OutOfRangeValue { value } => {
                write!(
                    f,
                    "perturb value {value} out of range: [-{PERTURB_LIMIT}, {PERTURB_LIMIT}]"
                )
            }
        }
    }
}

impl Error for PerturbError {}

/// Errors from the per-tick averaging sweep.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StepError {
    /// The effective divisor `(neighbours / coupling) as i32` truncated
    /// to zero or below.
    ///
    /// Raised for isolated cells (zero neighbors), for couplings large
    /// enough that the quotient truncates to zero, and for non-positive
    /// or non-finite couplings. A failed sweep publishes nothing: the
    /// live generation is exactly what it was before the call.
    InvalidDivisor {
        /// Coupling constant at the time of the sweep.
        coupling: f32,
        /// Neighbor count of the cell that produced the bad divisor.
        neighbours: usize,
    },
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDivisor {
                coupling,
                neighbours,
            } => {
                write!(
                    f,
                    "averaging divisor is not positive: {neighbours} neighbours / coupling {coupling}"
                )
            }
        }
    }
}

impl Error for StepError {}
