//! Minimal Ripple loop: dimension a field, seed it, poke it, and watch
//! the perturbation diffuse over a handful of ticks.
//!
//! Run with: `cargo run --example quickstart`

use ripple_core::Point;
use ripple_engine::FieldEngine;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut field = FieldEngine::with_dims(16, 16)?;
    field.seed_noise(42);

    // The host-side gesture a renderer would wire to a click: hit the
    // center hard, then its ring at reduced intensity.
    let center = Point::new(8, 8);
    field.perturb(center, 240)?;
    let spread = (240.0 / (8.0 / field.coupling())) as i32;
    for nb in field.neighbors_of(center) {
        field.perturb(nb, spread)?;
    }

    for _ in 0..10 {
        field.step()?;
        let frame = field.values();
        let min = frame.iter().min().copied().unwrap_or(0);
        let max = frame.iter().max().copied().unwrap_or(0);
        println!(
            "tick {:>2}: coupling {:.1}, range [{min}, {max}]",
            field.ticks(),
            field.coupling(),
        );
    }

    Ok(())
}
