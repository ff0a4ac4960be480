//! Field stepping engine for the Ripple field simulator.
//!
//! Provides [`FieldEngine`], which owns the lattice geometry and the
//! double-buffered cell storage and advances the field one generation
//! per [`FieldEngine::step`] by Jacobi-style neighbor averaging under a
//! tunable coupling constant. Perturbation, coupling control, seeding,
//! and the read accessors a renderer consumes all live here.
//!
//! The engine is strictly single-threaded: every mutator takes
//! `&mut self`, and a step runs to completion before any reader can
//! observe the new generation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod engine;
mod seed;

pub use engine::{FieldEngine, COUPLING_STEP, DEFAULT_COUPLING};
