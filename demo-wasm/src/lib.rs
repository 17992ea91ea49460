use catena::{Bounds, Chain, DragController, NoOpStepObserver, SolverConfig, Vec2};
use wasm_bindgen::prelude::*;

// Screen coordinates: +y down, origin at the canvas top-left. Gravity is
// tuned so a 60 fps tick displaces free particles by about half a pixel,
// matching the feel of the classic interactive rope toys.

const GRAB_RADIUS: f32 = 20.0;

#[wasm_bindgen]
pub struct ChainDemo {
    chain: Chain<f32>,
    controller: DragController,
    config: SolverConfig<f32>,
}

#[wasm_bindgen]
impl ChainDemo {
    /// Build a chain hanging from the top center of a `width` x `height`
    /// canvas.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32, segments: usize, segment_length: f32) -> ChainDemo {
        let anchor = Vec2::new(width / 2.0, 50.0);
        let chain = Chain::new(anchor, segments, segment_length)
            .expect_throw("segments and segment_length must be positive");

        ChainDemo {
            chain,
            controller: DragController::new(),
            config: SolverConfig::new()
                .with_gravity(Vec2::new(0.0, 1800.0))
                .with_damping(0.98)
                .with_iterations(10)
                .with_bounds(Bounds::new(Vec2::zero(), Vec2::new(width, height))),
        }
    }

    /// Advance the simulation by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        self.chain.step(dt, &self.config, &mut NoOpStepObserver);
    }

    /// Pointer-down: try to grab the particle under the cursor.
    pub fn grab(&mut self, x: f32, y: f32) {
        self.controller.grab(&mut self.chain, Vec2::new(x, y), GRAB_RADIUS);
    }

    /// Pointer-move while held: drive the grabbed particle.
    pub fn drag(&mut self, x: f32, y: f32) {
        self.controller.drag(&mut self.chain, Vec2::new(x, y));
    }

    /// Pointer-up: let go (the anchor stays pinned).
    pub fn release(&mut self) {
        self.controller.release(&mut self.chain);
    }

    /// Index of the dragged particle, or -1 when idle (for highlighting).
    pub fn dragged(&self) -> i32 {
        self.controller.active().map_or(-1, |i| i as i32)
    }

    /// Flattened `[x0, y0, x1, y1, ...]` particle positions for drawing.
    pub fn positions(&self) -> Vec<f32> {
        self.chain
            .positions()
            .iter()
            .flat_map(|p| [p.x, p.y])
            .collect()
    }
}
