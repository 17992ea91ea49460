//! A rigid-length chain built from particles and distance constraints.

use crate::config::SolverConfig;
use crate::constraint::DistanceConstraint;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::observer::StepObserver;
use crate::particle::Particle;
use crate::solver;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Index of the permanently pinned anchor particle.
pub const ANCHOR: usize = 0;

/// A multi-segment chain: `segments + 1` particles linked in order by
/// `segments` distance constraints. Constraint `i` links particles `i` and
/// `i + 1` for the lifetime of the chain.
///
/// Particle [`ANCHOR`] is pinned at construction and acts as the suspension
/// point; everything else hangs from it.
pub struct Chain<F: Float> {
    particles: AllocVec<Particle<F>>,
    constraints: AllocVec<DistanceConstraint<F>>,
}

impl<F: Float> Chain<F> {
    /// Create a chain hanging straight below `anchor` along +y.
    ///
    /// Fails fast on a zero segment count or a non-positive / non-finite
    /// segment length; construction parameters are never silently clamped.
    pub fn new(anchor: Vec2<F>, segments: usize, segment_length: F) -> Result<Self, PhysicsError> {
        Self::angled(anchor, segments, segment_length, F::zero())
    }

    /// Create a chain laid out in a straight line tilted `angle` radians
    /// from the +y axis. `angled(a, n, l, 0.0)` is equivalent to `new`.
    pub fn angled(
        anchor: Vec2<F>,
        segments: usize,
        segment_length: F,
        angle: F,
    ) -> Result<Self, PhysicsError> {
        if segments == 0 {
            return Err(PhysicsError::InvalidSegmentCount);
        }
        if !(segment_length > F::zero()) || !segment_length.is_finite() {
            return Err(PhysicsError::InvalidSegmentLength);
        }

        let dir = Vec2::new(angle.sin(), angle.cos());

        let mut particles = AllocVec::with_capacity(segments + 1);
        particles.push(Particle::pinned(anchor));
        for i in 1..=segments {
            let offset = dir.scale(segment_length * F::from_f32(i as f32));
            particles.push(Particle::new(anchor + offset));
        }

        let mut constraints = AllocVec::with_capacity(segments);
        for i in 0..segments {
            constraints.push(DistanceConstraint::new(i, i + 1, segment_length));
        }

        Ok(Chain { particles, constraints })
    }

    /// Advance one fixed tick: integrate, relax, clamp.
    pub fn step<O: StepObserver<F>>(&mut self, dt: F, config: &SolverConfig<F>, observer: &mut O) {
        solver::step(&mut self.particles, &self.constraints, dt, config, observer);
    }

    /// Snapshot of all particle positions, in chain order, for rendering.
    pub fn positions(&self) -> AllocVec<Vec2<F>> {
        self.particles.iter().map(|p| p.pos).collect()
    }

    /// Borrow the particle arena directly.
    pub fn particles(&self) -> &[Particle<F>] {
        &self.particles
    }

    /// Index of the particle nearest to `point` within `radius`, if any.
    pub fn nearest_within(&self, point: Vec2<F>, radius: F) -> Option<usize> {
        let mut best: Option<(usize, F)> = None;
        for (i, p) in self.particles.iter().enumerate() {
            let dist = p.pos.distance(point);
            if dist > radius {
                continue;
            }
            match best {
                Some((_, best_dist)) if best_dist <= dist => {}
                _ => best = Some((i, dist)),
            }
        }
        best.map(|(i, _)| i)
    }

    pub fn pin(&mut self, index: usize) {
        self.particles[index].pin();
    }

    pub fn unpin(&mut self, index: usize) {
        self.particles[index].unpin();
    }

    pub fn move_pin(&mut self, index: usize, pos: Vec2<F>) {
        self.particles[index].move_to(pos);
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn segment_count(&self) -> usize {
        self.constraints.len()
    }

    pub fn particle(&self, index: usize) -> &Particle<F> {
        &self.particles[index]
    }

    pub fn particle_mut(&mut self, index: usize) -> &mut Particle<F> {
        &mut self.particles[index]
    }

    pub fn constraint(&self, index: usize) -> &DistanceConstraint<F> {
        &self.constraints[index]
    }
}
