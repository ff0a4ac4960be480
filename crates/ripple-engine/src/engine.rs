//! The [`FieldEngine`]: lattice + double buffer + coupling constant.

use crate::seed;
use ripple_arena::PingPongBuffer;
use ripple_core::{Neighbors, PerturbError, Point, StepError, PERTURB_LIMIT};
use ripple_space::{Lattice, LatticeError};

/// Coupling constant a fresh engine starts with.
pub const DEFAULT_COUPLING: f32 = 1.0;

/// Increment applied by [`FieldEngine::tighten`] / [`FieldEngine::relax`].
pub const COUPLING_STEP: f32 = 0.1;

/// A 2D integer scalar field advanced by Jacobi-style neighbor averaging.
///
/// Each [`FieldEngine::step`] reads the published generation, writes the
/// averaged next generation into staging, and publishes it in a single
/// selector flip. The averaging divisor is `(n / coupling) as i32` for a
/// cell with `n` admitted neighbors: raising the coupling shrinks the
/// divisor, making the averages sharper; lowering it grows the divisor.
///
/// An engine starts empty (zero cells) and must be dimensioned through
/// [`FieldEngine::set_dims`] (or constructed with
/// [`FieldEngine::with_dims`]) before it holds any data. Re-dimensioning
/// discards all prior contents.
#[derive(Debug, Clone)]
pub struct FieldEngine {
    lattice: Lattice,
    cells: PingPongBuffer,
    coupling: f32,
}

impl FieldEngine {
    /// Create an empty engine: no cells, coupling at
    /// [`DEFAULT_COUPLING`].
    pub fn new() -> Self {
        Self {
            lattice: Lattice::empty(),
            cells: PingPongBuffer::new(0),
            coupling: DEFAULT_COUPLING,
        }
    }

    /// Create a dimensioned engine with both buffers zero-filled.
    pub fn with_dims(width: u32, height: u32) -> Result<Self, LatticeError> {
        let mut engine = Self::new();
        engine.set_dims(width, height)?;
        Ok(engine)
    }

    /// (Re)dimension the field to `width * height` cells.
    ///
    /// Both buffers are reallocated zero-filled, the live selector
    /// returns to its initial buffer, and the tick count rewinds to
    /// zero. Prior contents are discarded.
    pub fn set_dims(&mut self, width: u32, height: u32) -> Result<(), LatticeError> {
        self.lattice = Lattice::new(width, height)?;
        self.cells.reset(self.lattice.cell_count());
        Ok(())
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.lattice.width()
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.lattice.height()
    }

    /// The lattice geometry (copyable; carries no cell data).
    pub fn lattice(&self) -> Lattice {
        self.lattice
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Completed steps since the last dimensioning.
    pub fn ticks(&self) -> u64 {
        self.cells.generation()
    }

    /// Current coupling constant.
    pub fn coupling(&self) -> f32 {
        self.coupling
    }

    /// Set the coupling constant directly.
    ///
    /// No range is enforced here; a value that produces a non-positive
    /// averaging divisor surfaces as [`StepError::InvalidDivisor`] at
    /// the next [`FieldEngine::step`].
    pub fn set_coupling(&mut self, value: f32) {
        self.coupling = value;
    }

    /// Raise the coupling by [`COUPLING_STEP`], sharpening the averages.
    pub fn tighten(&mut self) {
        self.coupling += COUPLING_STEP;
    }

    /// Lower the coupling by [`COUPLING_STEP`], damping the averages.
    ///
    /// Unclamped, like [`FieldEngine::set_coupling`]: repeated calls can
    /// drive the coupling to zero or below, which the next step rejects.
    pub fn relax(&mut self) {
        self.coupling -= COUPLING_STEP;
    }

    /// Bounds-checked read from the published generation.
    pub fn value_at(&self, index: usize) -> Option<i32> {
        self.cells.published().get(index).copied()
    }

    /// The entire published generation, for per-frame bulk reads.
    pub fn values(&self) -> &[i32] {
        self.cells.published()
    }

    /// The neighborhood of `p` admitted by the lattice boundary guards.
    ///
    /// Exposed so hosts can spread a perturbation over a point's ring at
    /// reduced intensity. See [`Lattice::neighbours`] for the emission
    /// order and boundary behavior.
    pub fn neighbors_of(&self, p: Point) -> Neighbors {
        self.lattice.neighbours(p)
    }

    /// Write `value` directly into the cell at `p`, bypassing the
    /// averaging rule.
    ///
    /// The write goes through both buffers, so it is visible immediately
    /// and survives the next selector flip rather than vanishing into
    /// the staging rotation.
    ///
    /// # Errors
    ///
    /// [`PerturbError::OutOfRangeLocation`] if `p` is outside the
    /// lattice; [`PerturbError::OutOfRangeValue`] if `value` lies
    /// outside `[-PERTURB_LIMIT, PERTURB_LIMIT]`. Nothing is written on
    /// either error.
    pub fn perturb(&mut self, p: Point, value: i32) -> Result<(), PerturbError> {
        if !self.lattice.contains(p) {
            return Err(PerturbError::OutOfRangeLocation {
                point: p,
                width: self.lattice.width(),
                height: self.lattice.height(),
            });
        }
        if !(-PERTURB_LIMIT..=PERTURB_LIMIT).contains(&value) {
            return Err(PerturbError::OutOfRangeValue { value });
        }
        self.cells.write_through(self.lattice.flatten(p), value);
        Ok(())
    }

    /// Advance the field one generation.
    ///
    /// Every cell of the next generation is the truncating average of
    /// its neighbors' published values: `total / ((n / coupling) as i32)`.
    /// All reads come from the published snapshot; no cell ever reads a
    /// value written during the same sweep. The selector flips only
    /// after the full sweep, so a failed step publishes nothing — the
    /// live generation and the tick count are exactly as before.
    ///
    /// # Errors
    ///
    /// [`StepError::InvalidDivisor`] if any cell's divisor truncates to
    /// zero or below: isolated cells (no admitted neighbors), couplings
    /// large enough that `n / coupling` truncates to zero, and
    /// non-positive or non-finite couplings.
    pub fn step(&mut self) -> Result<(), StepError> {
        let lattice = self.lattice;
        let coupling = self.coupling;
        let (prev, next) = self.cells.split();

        for (i, slot) in next.iter_mut().enumerate() {
            let loc = lattice.expand(i);
            let nbs = lattice.neighbours(loc);

            // Non-square lattices expand() some indices past the column
            // range; the aliased flat reads that land beyond the cell
            // range contribute zero.
            let mut total = 0i32;
            for nb in &nbs {
                total += prev.get(lattice.flatten(*nb)).copied().unwrap_or(0);
            }

            let divisor = (nbs.len() as f32 / coupling) as i32;
            if divisor <= 0 {
                return Err(StepError::InvalidDivisor {
                    coupling,
                    neighbours: nbs.len(),
                });
            }
            *slot = total / divisor;
        }

        self.cells.publish();
        Ok(())
    }

    /// Seed both buffers with the deterministic linear ramp across
    /// `[-100, 100)` indexed by cell position.
    pub fn seed_ramp(&mut self) {
        let len = self.cells.len();
        self.cells.fill_with(|i| seed::ramp_value(i, len));
    }

    /// Seed both buffers with uniform integer noise in `[-100, 100]`,
    /// deterministic for a given `seed`.
    pub fn seed_noise(&mut self, seed: u64) {
        self.cells.fill_with(seed::noise_fill(seed));
    }
}

impl Default for FieldEngine {
    fn default() -> Self {
        Self::new()
    }
}
