//! Step observer trait for monitoring physics simulation progress.

use crate::float::Float;
use crate::particle::Particle;

/// Trait for observing simulation steps.
///
/// Implement this trait to monitor solver progress (e.g., for debugging,
/// visualization, or performance profiling). All methods have default
/// no-op implementations.
pub trait StepObserver<F: Float> {
    /// Called after all particles have been integrated (Verlet step).
    fn on_integrate(&mut self) {}

    /// Called after each constraint relaxation pass.
    fn on_constraint_iteration(&mut self, _iteration: usize) {}

    /// Called when a simulation step is fully complete, with the
    /// post-step particle state.
    fn on_step_complete(&mut self, _particles: &[Particle<F>]) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl<F: Float> StepObserver<F> for NoOpStepObserver {}

/// Diagnostic observer that counts steps ending with a non-finite particle
/// position (NaN or infinity from runaway velocities).
///
/// Non-fatal: it only records, the caller decides what to do.
#[derive(Default)]
pub struct FiniteGuard {
    pub violations: usize,
}

impl FiniteGuard {
    pub fn new() -> Self {
        FiniteGuard { violations: 0 }
    }

    pub fn all_finite(&self) -> bool {
        self.violations == 0
    }
}

impl<F: Float> StepObserver<F> for FiniteGuard {
    fn on_step_complete(&mut self, particles: &[Particle<F>]) {
        if particles.iter().any(|p| !p.pos.is_finite()) {
            self.violations += 1;
        }
    }
}
