//! Drawing seam
//!
//! The simulation never touches pixels. Frontends implement [`Surface`];
//! [`DrawList`] records commands for headless runs and tests.

pub mod layout;

use glam::Vec2;

/// RGBA color, components in 0..=1
pub type Color = [f32; 4];

pub const YELLOW: Color = [1.0, 1.0, 0.0, 1.0];
pub const RED: Color = [1.0, 0.0, 0.0, 1.0];

/// Images a frontend must provide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    Ball,
}

/// Target for one frame of drawing
pub trait Surface {
    /// Blit the background image scaled to `size` at `origin`
    fn draw_background(&mut self, origin: Vec2, size: Vec2);
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color);
    /// Blit a sprite at its natural size with its top-left corner at `top_left`
    fn draw_sprite(&mut self, sprite: Sprite, top_left: Vec2);
    fn draw_text(&mut self, text: &str, origin: Vec2, size: f32, color: Color);
}

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Background { origin: Vec2, size: Vec2 },
    FillRect { origin: Vec2, size: Vec2, color: Color },
    Sprite { sprite: Sprite, top_left: Vec2 },
    Text { text: String, origin: Vec2, size: f32, color: Color },
}

/// Surface that records draw calls in order
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Top-left corners of every sprite drawn, in draw order
    pub fn sprite_positions(&self) -> Vec<Vec2> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Sprite { top_left, .. } => Some(*top_left),
                _ => None,
            })
            .collect()
    }

    /// Text of the last text command, if any
    pub fn last_text(&self) -> Option<&str> {
        self.commands.iter().rev().find_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Surface for DrawList {
    fn draw_background(&mut self, origin: Vec2, size: Vec2) {
        self.commands.push(DrawCommand::Background { origin, size });
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color) {
        self.commands.push(DrawCommand::FillRect {
            origin,
            size,
            color,
        });
    }

    fn draw_sprite(&mut self, sprite: Sprite, top_left: Vec2) {
        self.commands.push(DrawCommand::Sprite { sprite, top_left });
    }

    fn draw_text(&mut self, text: &str, origin: Vec2, size: f32, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            origin,
            size,
            color,
        });
    }
}
