//! Benchmark profiles for the Ripple field simulator.
//!
//! Provides pre-built field engines for benchmarking:
//!
//! - [`demo_field`]: seeded square field at the default coupling
//! - [`stress_field`]: 316x316 (~100K cells) for stress runs

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use ripple_engine::FieldEngine;

/// Build a noise-seeded square field of `side * side` cells.
///
/// # Panics
///
/// Panics if `side` is 0.
pub fn demo_field(side: u32, seed: u64) -> FieldEngine {
    let mut engine = FieldEngine::with_dims(side, side).expect("side must be positive");
    engine.seed_noise(seed);
    engine
}

/// Build the stress profile: 316x316 (~100K cells), ramp-seeded.
pub fn stress_field() -> FieldEngine {
    let mut engine = FieldEngine::with_dims(316, 316).expect("dims are static");
    engine.seed_ramp();
    engine
}
