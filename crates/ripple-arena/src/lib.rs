//! Double-buffered generation storage for the Ripple field simulator.
//!
//! Provides [`PingPongBuffer`], the two-buffer arena underneath the
//! field: one buffer is "published" (readable, the live generation) and
//! the other is "staging" (the write target for the next generation).
//! A sweep writes staging from a consistent published snapshot, then
//! [`PingPongBuffer::publish`] swaps the roles in a single selector
//! flip.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod pingpong;

pub use pingpong::PingPongBuffer;
