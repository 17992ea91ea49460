//! The per-tick solve: integrate, relax constraints, clamp to bounds.

use crate::config::SolverConfig;
use crate::constraint::DistanceConstraint;
use crate::float::Float;
use crate::observer::StepObserver;
use crate::particle::Particle;

/// Advance a particle arena by one fixed tick.
///
/// Per sub-step: feed gravity into every accumulator, integrate every
/// particle, then run `config.iterations` Gauss–Seidel passes over the
/// constraints in index order, then clamp into `config.bounds` if set.
///
/// The fixed iteration count trades exactness for bounded per-tick cost;
/// an exactly rigid chain is the limit as iterations grow. The whole step
/// is deterministic: identical state, `dt`, and config produce identical
/// output bit for bit.
pub fn step<F: Float, O: StepObserver<F>>(
    particles: &mut [Particle<F>],
    constraints: &[DistanceConstraint<F>],
    dt: F,
    config: &SolverConfig<F>,
    observer: &mut O,
) {
    let sub_dt = dt / F::from_f32(config.sub_steps as f32);

    for _sub in 0..config.sub_steps {
        for p in particles.iter_mut() {
            p.apply_acceleration(config.gravity);
        }

        for p in particles.iter_mut() {
            p.integrate(sub_dt, config.damping);
        }
        observer.on_integrate();

        for i in 0..config.iterations {
            for c in constraints.iter() {
                c.solve(particles);
            }
            observer.on_constraint_iteration(i);
        }

        if let Some(bounds) = &config.bounds {
            for p in particles.iter_mut() {
                p.clamp_to_bounds(bounds);
            }
        }
    }

    observer.on_step_complete(particles);
}
