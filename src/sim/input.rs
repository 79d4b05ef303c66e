//! Pointer input state
//!
//! Pointer moves are last-value-wins. A press latches a tap that the frame
//! driver consumes at most once.

use super::vector::Vector2d;

#[derive(Debug, Clone, Default)]
pub struct PointerInput {
    pointer: Vector2d,
    press: Vector2d,
    pressed: bool,
}

impl PointerInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.pointer = Vector2d::new(x, y);
    }

    /// Record a press. A second press before the tap is taken overwrites the
    /// first.
    pub fn pointer_pressed(&mut self, x: f32, y: f32) {
        self.press = Vector2d::new(x, y);
        self.pressed = true;
    }

    /// Latest pointer position (origin until the first move)
    pub fn pointer(&self) -> Vector2d {
        self.pointer
    }

    /// Consume the pending tap, if any
    pub fn take_tap(&mut self) -> Option<Vector2d> {
        if self.pressed {
            self.pressed = false;
            Some(self.press)
        } else {
            None
        }
    }
}
