//! Distance constraints between pairs of particles.

use crate::float::Float;
use crate::particle::Particle;

/// A rigid-length constraint between two particles in an arena.
///
/// Holds indices rather than references; the particle storage is owned by
/// the chain and passed in at solve time.
pub struct DistanceConstraint<F: Float> {
    pub a: usize,
    pub b: usize,
    pub rest_length: F,
}

impl<F: Float> DistanceConstraint<F> {
    pub fn new(a: usize, b: usize, rest_length: F) -> Self {
        DistanceConstraint { a, b, rest_length }
    }

    /// Build a constraint whose rest length is the current separation.
    pub fn from_particles(a: usize, b: usize, particles: &[Particle<F>]) -> Self {
        let rest_length = particles[a].pos.distance(particles[b].pos);
        DistanceConstraint { a, b, rest_length }
    }

    /// Project both endpoints toward the rest length.
    ///
    /// The length error is split half/half between two free endpoints, and
    /// applied in full to the free endpoint when the other is pinned. Both
    /// endpoints pinned is a no-op. A single call only reduces the error for
    /// a chain of constraints, since neighbouring constraints perturb each
    /// other; the solver runs repeated passes for that reason.
    pub fn solve(&self, particles: &mut [Particle<F>]) {
        let a_pinned = particles[self.a].pinned;
        let b_pinned = particles[self.b].pinned;
        if a_pinned && b_pinned {
            return;
        }

        let delta = particles[self.b].pos - particles[self.a].pos;
        let mut dist = delta.length();
        if dist.is_near_zero(F::from_f32(1e-6)) {
            // Coincident endpoints: substitute an epsilon so the division
            // below stays finite. The correction degenerates to zero.
            dist = F::from_f32(1e-6);
        }

        let correction = delta.scale((self.rest_length - dist) / dist);

        if a_pinned {
            particles[self.b].pos = particles[self.b].pos + correction;
        } else if b_pinned {
            particles[self.a].pos = particles[self.a].pos - correction;
        } else {
            let half = correction.scale(F::half());
            particles[self.a].pos = particles[self.a].pos - half;
            particles[self.b].pos = particles[self.b].pos + half;
        }
    }

    /// Current signed length error (positive when stretched).
    pub fn error(&self, particles: &[Particle<F>]) -> F {
        particles[self.a].pos.distance(particles[self.b].pos) - self.rest_length
    }
}
