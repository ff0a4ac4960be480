//! Ripple: a real-time 2D scalar field simulator core.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all Ripple sub-crates. For most users, adding `ripple` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use ripple::prelude::*;
//!
//! // A 3x3 field seeded with the demo ramp.
//! let mut field = FieldEngine::with_dims(3, 3).unwrap();
//! field.seed_ramp();
//!
//! // Inject a perturbation; it lands in both generations, so it is
//! // visible immediately.
//! field.perturb(Point::new(1, 1), 120).unwrap();
//! assert_eq!(field.value_at(4), Some(120));
//!
//! // One averaging sweep: the center becomes the truncating average
//! // of its admitted neighbors' seed values.
//! field.step().unwrap();
//! assert_eq!(field.value_at(4), Some(47));
//! assert_eq!(field.ticks(), 1);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `ripple-core` | Points, neighbor lists, error types |
//! | [`space`] | `ripple-space` | Lattice geometry and neighborhood enumeration |
//! | [`arena`] | `ripple-arena` | Double-buffered generation storage |
//! | [`engine`] | `ripple-engine` | The field stepping engine |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and errors (`ripple-core`).
///
/// Contains [`types::Point`], the [`types::Neighbors`] list, and the
/// perturbation/stepping error enums.
pub use ripple_core as types;

/// Lattice geometry (`ripple-space`).
///
/// Provides [`space::Lattice`]: row-major index mapping, bounds checks,
/// and Moore-neighborhood enumeration.
pub use ripple_space as space;

/// Double-buffered generation storage (`ripple-arena`).
///
/// Provides [`arena::PingPongBuffer`], the published/staging buffer
/// pair underneath the field.
pub use ripple_arena as arena;

/// The field stepping engine (`ripple-engine`).
///
/// [`engine::FieldEngine`] combines a lattice with a buffer pair and a
/// coupling constant, and advances the field one generation per step.
pub use ripple_engine as engine;

/// Common imports for typical Ripple usage.
///
/// ```rust
/// use ripple::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use ripple_core::{Neighbors, Point, PERTURB_LIMIT};

    // Errors
    pub use ripple_core::{PerturbError, StepError};
    pub use ripple_space::LatticeError;

    // Geometry and storage
    pub use ripple_arena::PingPongBuffer;
    pub use ripple_space::Lattice;

    // Engine
    pub use ripple_engine::{FieldEngine, COUPLING_STEP, DEFAULT_COUPLING};
}
