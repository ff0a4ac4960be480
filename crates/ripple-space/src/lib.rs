//! Lattice geometry for the Ripple field simulator.
//!
//! This crate defines the [`Lattice`] — the 2D index space the field
//! lives on. It owns the row-major index mapping ([`Lattice::flatten`] /
//! [`Lattice::expand`]), the bounds predicate ([`Lattice::contains`]),
//! and Moore-neighborhood enumeration ([`Lattice::neighbours`]).
//!
//! The lattice holds no cell data; storage lives in `ripple-arena` and
//! the two are combined by `ripple-engine`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod lattice;

pub use error::LatticeError;
pub use lattice::Lattice;
