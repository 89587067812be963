#![forbid(unsafe_code)]

//! Held-key state for camera panning.
//!
//! The event loop records key transitions as they arrive; the fixed-rate
//! update tick samples the result once per tick, so a held arrow pans the
//! camera one cell per tick regardless of the display rate.

use winit::event::ElementState;
use winit::keyboard::{KeyCode, PhysicalKey};

#[derive(Debug, Clone, Copy, Default)]
pub struct HeldKeys {
    up: bool,
    down: bool,
    left: bool,
    right: bool,
}

impl HeldKeys {
    /// Record a key transition. Non-arrow keys are ignored.
    pub fn apply(&mut self, key: PhysicalKey, state: ElementState) {
        let pressed = state.is_pressed();
        match key {
            PhysicalKey::Code(KeyCode::ArrowUp) => self.up = pressed,
            PhysicalKey::Code(KeyCode::ArrowDown) => self.down = pressed,
            PhysicalKey::Code(KeyCode::ArrowLeft) => self.left = pressed,
            PhysicalKey::Code(KeyCode::ArrowRight) => self.right = pressed,
            _ => {}
        }
    }

    /// Camera delta for one tick: one cell per held direction.
    ///
    /// Up is +y: viewport cell (0, 0) is the bottom-left quad, so
    /// increasing the camera offset pans the view up the map.
    #[must_use]
    pub fn camera_step(&self) -> (i32, i32) {
        let dx = i32::from(self.right) - i32::from(self.left);
        let dy = i32::from(self.up) - i32::from(self.down);
        (dx, dy)
    }
}
