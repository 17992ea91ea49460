//! Verlet particles with position-based dynamics.

use crate::config::Bounds;
use crate::float::Float;
use crate::vec::Vec2;

/// A Verlet particle: position-based dynamics with implicit velocity.
///
/// Velocity is never stored; it is derived each step from the difference
/// between `pos` and `prev_pos`. A pinned particle is immovable by
/// integration and constraint projection; only [`Particle::move_to`]
/// relocates it.
#[derive(Clone, Debug)]
pub struct Particle<F: Float> {
    pub pos: Vec2<F>,
    pub prev_pos: Vec2<F>,
    pub accel: Vec2<F>,
    pub pinned: bool,
}

impl<F: Float> Particle<F> {
    pub fn new(pos: Vec2<F>) -> Self {
        Particle {
            pos,
            prev_pos: pos,
            accel: Vec2::zero(),
            pinned: false,
        }
    }

    pub fn pinned(pos: Vec2<F>) -> Self {
        Particle {
            pos,
            prev_pos: pos,
            accel: Vec2::zero(),
            pinned: true,
        }
    }

    pub fn apply_acceleration(&mut self, accel: Vec2<F>) {
        if !self.pinned {
            self.accel = self.accel + accel;
        }
    }

    /// Advance one Verlet step: `pos += (pos - prev_pos) * damping + accel * dt²`.
    ///
    /// The acceleration accumulator enters scaled by `dt²`, so the step is
    /// tick-rate independent. No-op when pinned.
    pub fn integrate(&mut self, dt: F, damping: F) {
        if self.pinned {
            return;
        }
        let velocity = (self.pos - self.prev_pos).scale(damping);
        let new_pos = self.pos + velocity + self.accel.scale(dt * dt);
        self.prev_pos = self.pos;
        self.pos = new_pos;
        self.accel = Vec2::zero();
    }

    /// Clamp `pos` componentwise into the box. No-op when pinned.
    ///
    /// The implicit velocity is left untouched, so a particle hitting the
    /// boundary loses that velocity component over the next step. This is a
    /// deliberate simplification; see `Bounds`.
    pub fn clamp_to_bounds(&mut self, bounds: &Bounds<F>) {
        if self.pinned {
            return;
        }
        self.pos.x = self.pos.x.clamp(bounds.min.x, bounds.max.x);
        self.pos.y = self.pos.y.clamp(bounds.min.y, bounds.max.y);
    }

    /// Implicit velocity in units of distance per step.
    pub fn velocity_raw(&self) -> Vec2<F> {
        self.pos - self.prev_pos
    }

    pub fn pin(&mut self) {
        self.pinned = true;
        self.prev_pos = self.pos;
    }

    pub fn unpin(&mut self) {
        self.pinned = false;
    }

    /// Relocate a pinned particle. `prev_pos` keeps the prior position, so
    /// the move shows up as implicit velocity if the particle is unpinned.
    pub fn move_to(&mut self, pos: Vec2<F>) {
        if self.pinned {
            self.prev_pos = self.pos;
            self.pos = pos;
        }
    }
}
