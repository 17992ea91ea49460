//! Pointer-driven grabbing and dragging of chain particles.

use crate::chain::{Chain, ANCHOR};
use crate::float::Float;
use crate::vec::Vec2;

#[derive(Clone, Copy)]
enum DragState {
    Idle,
    Dragging(usize),
}

/// Maps pointer events onto temporary pin / position-override operations.
///
/// A small state machine: `grab` moves Idle → Dragging when a particle is in
/// range, `release` moves Dragging → Idle. `drag` and `release` while Idle
/// are no-ops, as is `grab` while already dragging: at most one particle is
/// dragged at a time.
///
/// The controller never runs concurrently with [`Chain::step`]; both take
/// `&mut Chain` and are called strictly in sequence on one thread.
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        DragController { state: DragState::Idle }
    }

    /// Grab the particle nearest to `pointer` within `radius` and pin it.
    /// Silently does nothing if no particle is in range.
    pub fn grab<F: Float>(&mut self, chain: &mut Chain<F>, pointer: Vec2<F>, radius: F) {
        if let DragState::Dragging(_) = self.state {
            return;
        }
        if let Some(index) = chain.nearest_within(pointer, radius) {
            chain.pin(index);
            self.state = DragState::Dragging(index);
        }
    }

    /// Move the dragged particle to `pointer`. Call once per tick, before
    /// the chain steps, so constraints react to the forced position.
    pub fn drag<F: Float>(&mut self, chain: &mut Chain<F>, pointer: Vec2<F>) {
        if let DragState::Dragging(index) = self.state {
            chain.move_pin(index, pointer);
        }
    }

    /// Unpin the dragged particle and return to Idle. The anchor is exempt:
    /// it stays pinned no matter how it was grabbed.
    pub fn release<F: Float>(&mut self, chain: &mut Chain<F>) {
        if let DragState::Dragging(index) = self.state {
            if index != ANCHOR {
                chain.unpin(index);
            }
            self.state = DragState::Idle;
        }
    }

    /// Index of the currently dragged particle, if any.
    pub fn active(&self) -> Option<usize> {
        match self.state {
            DragState::Dragging(index) => Some(index),
            DragState::Idle => None,
        }
    }
}

impl Default for DragController {
    fn default() -> Self {
        Self::new()
    }
}
