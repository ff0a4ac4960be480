//! Core types for the Ripple field simulator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental vocabulary used throughout the Ripple workspace:
//! lattice coordinates, neighbor lists, and error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod point;

pub use error::{PerturbError, StepError, PERTURB_LIMIT};
pub use point::{Neighbors, Point};
