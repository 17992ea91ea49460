//! Configuration types for the chain solver.

use crate::float::Float;
use crate::vec::Vec2;

/// Axis-aligned box that particle positions are clamped into.
///
/// Clamping is positional only, with no velocity correction.
/// A particle pressed against the boundary simply loses the implicit
/// velocity it arrived with.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds<F: Float> {
    pub min: Vec2<F>,
    pub max: Vec2<F>,
}

impl<F: Float> Bounds<F> {
    pub fn new(min: Vec2<F>, max: Vec2<F>) -> Self {
        Bounds { min, max }
    }

    /// True if the point lies inside the box (inclusive).
    pub fn contains(&self, p: Vec2<F>) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// Configuration for the constraint solver and simulation.
///
/// An explicit immutable value passed into every step; the solver has no
/// global state.
///
/// # Builder Pattern
/// ```
/// use catena::config::{Bounds, SolverConfig};
/// use catena::vec::Vec2;
///
/// let config: SolverConfig<f32> = SolverConfig::new()
///     .with_iterations(10)
///     .with_gravity(Vec2::new(0.0, 9.81))
///     .with_damping(0.98)
///     .with_bounds(Bounds::new(Vec2::new(0.0, 0.0), Vec2::new(800.0, 600.0)));
/// ```
pub struct SolverConfig<F: Float> {
    /// Number of constraint relaxation passes per sub-step.
    /// More iterations = stiffer chain but slower. Default: 8.
    pub iterations: usize,
    /// Gravity acceleration vector. Default: zero (no gravity).
    pub gravity: Vec2<F>,
    /// Velocity damping factor [0, 1]. 1.0 = no damping. Default: 0.98.
    pub damping: F,
    /// Number of sub-steps per frame. Higher = more stable. Default: 1.
    pub sub_steps: usize,
    /// Optional clamp box applied after relaxation. Default: none.
    pub bounds: Option<Bounds<F>>,
}

impl<F: Float> SolverConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        SolverConfig {
            iterations: 8,
            gravity: Vec2::zero(),
            damping: F::from_f32(0.98),
            sub_steps: 1,
            bounds: None,
        }
    }

    /// Set the number of relaxation passes.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the gravity vector.
    pub fn with_gravity(mut self, gravity: Vec2<F>) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the damping factor.
    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    /// Set the number of sub-steps.
    pub fn with_sub_steps(mut self, sub_steps: usize) -> Self {
        self.sub_steps = sub_steps.max(1);
        self
    }

    /// Set the clamp box.
    pub fn with_bounds(mut self, bounds: Bounds<F>) -> Self {
        self.bounds = Some(bounds);
        self
    }
}

impl<F: Float> Default for SolverConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
