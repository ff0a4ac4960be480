//! Seed generators for freshly dimensioned fields.
//!
//! Both generators produce demo/start-of-run data, not anything a
//! correctness path depends on. They are written through both buffers
//! by the engine so the first sweep reads the seed regardless of which
//! buffer is live.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Linear ramp across `[-100, 100)` indexed by cell position.
///
/// `value(i) = 200 * i / len - 100`, truncated toward zero.
pub(crate) fn ramp_value(index: usize, len: usize) -> i32 {
    ((200.0 * (index as f64 / len as f64)) - 100.0) as i32
}

/// Uniform integer noise in `[-100, 100]` from a seeded ChaCha8 RNG.
///
/// Deterministic: the same seed always yields the same fill sequence.
pub(crate) fn noise_fill(seed: u64) -> impl FnMut(usize) -> i32 {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    move |_| rng.random_range(-100..=100)
}
