//! End-to-end behavior of the field engine: seeded sweeps with
//! hand-computed expected frames, perturbation interplay, and coupling
//! effects on the averaging divisor.

use proptest::prelude::*;
use ripple_core::Point;
use ripple_engine::FieldEngine;

fn p(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

/// One sweep of a ramp-seeded 3x3 field at coupling 1.0.
///
/// Every cell of the expected frame is hand-computed from the seed
/// values `[-100, -77, -55, -33, -11, 11, 33, 55, 77]` and the boundary
/// guards: on a 3x3 lattice every cell admits exactly three neighbors
/// (the low-side guards suppress the west and north flanks of the
/// interior), so each output is `total / 3` truncated toward zero.
#[test]
fn ramp_seeded_3x3_sweep_produces_the_hand_computed_frame() {
    let mut engine = FieldEngine::with_dims(3, 3).unwrap();
    engine.seed_ramp();
    engine.set_coupling(1.0);
    engine.step().unwrap();

    assert_eq!(
        engine.values(),
        &[-40, -18, -25, 25, 47, 40, 3, 25, 18]
    );
    // Center cell spelled out: neighbors (2,1), (2,2), (1,2) hold
    // 11 + 77 + 55 = 143; 143 / (3 / 1.0) = 47.
    assert_eq!(engine.value_at(4), Some(47));
}

#[test]
fn tightening_shrinks_the_divisor_and_sharpens_the_average() {
    // At coupling 2.0 the 3-neighbor divisor truncates to 1, so the
    // center cell holds the raw neighbor total instead of a third of it.
    let mut engine = FieldEngine::with_dims(3, 3).unwrap();
    engine.seed_ramp();
    engine.set_coupling(2.0);
    engine.step().unwrap();
    assert_eq!(engine.value_at(4), Some(143));
}

#[test]
fn relaxing_grows_the_divisor_and_damps_the_average() {
    // At coupling 0.5 the divisor doubles to 6: 143 / 6 = 23.
    let mut engine = FieldEngine::with_dims(3, 3).unwrap();
    engine.seed_ramp();
    engine.set_coupling(0.5);
    engine.step().unwrap();
    assert_eq!(engine.value_at(4), Some(23));
}

#[test]
fn perturbation_feeds_the_next_sweep() {
    // A zero field stays zero under averaging; a single perturbed cell
    // is the only source, so after one sweep its neighbors-of-neighbors
    // pick up a share of it.
    let mut engine = FieldEngine::with_dims(5, 5).unwrap();
    engine.perturb(p(2, 2), 240).unwrap();
    engine.step().unwrap();

    // (2,2) contributes to every cell that admits it as a neighbor;
    // (2,3) sees it as its plain north neighbor among 8 admitted
    // neighbors, all others zero: 240 / 8 = 30.
    let index = engine.lattice().flatten(p(2, 3));
    assert_eq!(engine.value_at(index), Some(30));

    // The perturbed cell itself was averaged over — its own staging
    // copy was overwritten by the sweep, and none of its admitted
    // neighbors held anything.
    assert_eq!(engine.value_at(engine.lattice().flatten(p(2, 2))), Some(0));
}

#[test]
fn ring_spread_perturbation_gesture() {
    // The host-side gesture: hit a point hard, then its admitted ring
    // at reduced intensity.
    let mut engine = FieldEngine::with_dims(9, 9).unwrap();
    let center = p(4, 4);

    engine.perturb(center, 240).unwrap();
    let spread = (240.0 / (8.0 / engine.coupling())) as i32;
    for nb in engine.neighbors_of(center) {
        engine.perturb(nb, spread).unwrap();
    }

    let lattice = engine.lattice();
    assert_eq!(engine.value_at(lattice.flatten(center)), Some(240));
    for nb in engine.neighbors_of(center) {
        assert_eq!(engine.value_at(lattice.flatten(nb)), Some(30));
    }
}

#[test]
fn redimensioning_discards_the_field() {
    let mut engine = FieldEngine::with_dims(5, 5).unwrap();
    engine.seed_noise(3);
    engine.step().unwrap();

    engine.set_dims(4, 4).unwrap();
    assert_eq!(engine.cell_count(), 16);
    assert_eq!(engine.ticks(), 0);
    assert!(engine.values().iter().all(|&v| v == 0));
}

proptest! {
    /// On lattices of 3x3 and up, every cell admits at least one
    /// neighbor, so ramp-seeded sweeps at the default coupling never
    /// fail and the frame length never drifts.
    #[test]
    fn default_coupling_sweeps_succeed_on_lattices_3x3_and_up(
        width in 3u32..16,
        height in 3u32..16,
        steps in 1u8..5,
    ) {
        let mut engine = FieldEngine::with_dims(width, height).unwrap();
        engine.seed_ramp();
        for _ in 0..steps {
            engine.step().unwrap();
            prop_assert_eq!(engine.values().len(), (width * height) as usize);
        }
        prop_assert_eq!(engine.ticks(), u64::from(steps));
    }

    /// Averaging a uniform zero field yields zero everywhere, for any
    /// in-range perturbation-free start.
    #[test]
    fn zero_field_is_a_fixed_point(width in 3u32..12, height in 3u32..12) {
        let mut engine = FieldEngine::with_dims(width, height).unwrap();
        engine.step().unwrap();
        prop_assert!(engine.values().iter().all(|&v| v == 0));
    }

    /// The published frame always spans exactly `width * height` cells,
    /// no matter how dimensioning, perturbation, and stepping interleave.
    #[test]
    fn frame_length_is_stable_under_mixed_operations(
        dims in proptest::collection::vec((3u32..10, 3u32..10), 1..3),
        pokes in proptest::collection::vec((0i32..10, 0i32..10, -255i32..=255), 0..8),
        steps in 0u8..4,
    ) {
        let mut engine = FieldEngine::new();
        for (width, height) in dims {
            engine.set_dims(width, height).unwrap();
            for &(x, y, value) in &pokes {
                let target = p(x % width as i32, y % height as i32);
                engine.perturb(target, value).unwrap();
                prop_assert_eq!(engine.values().len(), engine.cell_count());
            }
            for _ in 0..steps {
                engine.step().unwrap();
                prop_assert_eq!(engine.values().len(), engine.cell_count());
                prop_assert_eq!(engine.cell_count(), (width * height) as usize);
            }
            prop_assert_eq!(engine.value_at(engine.cell_count()), None);
        }
    }
}
