//! Constraint-based chain physics with interactive dragging.
//!
//! `catena` simulates fixed-length multi-segment chains (ropes, linkages) by
//! Verlet-integrating unconstrained particle motion, then iteratively
//! projecting inter-particle distance constraints back onto the rigid-length
//! manifold. Grab, drag, and release any particle with a pointer.
//!
//! # Features
//!
//! - **Verlet integration**: Position-based dynamics with implicit velocity
//! - **Constraint relaxation**: Fixed-iteration Gauss–Seidel distance solving
//! - **Interactive dragging**: Pointer grab / drag / release with a permanent anchor
//! - **Boundary clamping**: Optional axis-aligned position bounds
//! - **Observable**: Monitor solver passes via the `StepObserver` trait
//! - **Deterministic**: No randomness, no globals; same inputs, same output
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! The crate owns the numerics only: rendering, frame scheduling, and input
//! polling are external collaborators that feed pointer events in and read
//! particle positions out each tick.

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod particle;
pub mod constraint;
pub mod solver;
pub mod chain;
pub mod interaction;
pub mod config;
pub mod observer;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use particle::Particle;
pub use constraint::DistanceConstraint;
pub use chain::{Chain, ANCHOR};
pub use interaction::DragController;
pub use config::{Bounds, SolverConfig};
pub use observer::{StepObserver, NoOpStepObserver, FiniteGuard};
pub use error::PhysicsError;
