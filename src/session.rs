//! Frame driver
//!
//! One frame: draw everything, step the chain against the latest pointer,
//! then apply a pending tap. Taps in the header strip below the floor set
//! the time scale; taps inside the play area are dropped.

use glam::Vec2;

use crate::consts::{HUD_FONT_SIZE, HUD_ORIGIN};
use crate::error::DekaResult;
use crate::render::{RED, Surface, YELLOW, layout};
use crate::sim::{Arena, Ball, BallChain, BallMetrics, PlayArea, PointerInput, Vector2d};
use crate::tuning::PhysicsTuning;

/// A running toy: bounds, balls, input and tuning
#[derive(Debug, Clone)]
pub struct Session {
    arena: Arena,
    metrics: BallMetrics,
    tuning: PhysicsTuning,
    chain: BallChain,
    input: PointerInput,
    /// Natural size of the background image, if the frontend has one
    background_size: Option<Vec2>,
    frames: u64,
}

impl Session {
    /// Start a session with one ball at the top center of a
    /// `width` x `height` surface
    pub fn new(
        width: f32,
        height: f32,
        metrics: BallMetrics,
        tuning: PhysicsTuning,
    ) -> DekaResult<Self> {
        let arena = Arena::with_header(width, height, tuning.header_height)?;
        let chain = BallChain::new(Ball::spawn(metrics, &arena));
        log::info!(
            "Session started: {}x{} area, ball {}x{}",
            width,
            height,
            metrics.half_width * 2.0,
            metrics.half_height * 2.0
        );
        Ok(Self {
            arena,
            metrics,
            tuning,
            chain,
            input: PointerInput::new(),
            background_size: None,
            frames: 0,
        })
    }

    pub fn with_background(mut self, image_width: u32, image_height: u32) -> Self {
        self.background_size = Some(Vec2::new(image_width as f32, image_height as f32));
        self
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn chain(&self) -> &BallChain {
        &self.chain
    }

    pub fn input_mut(&mut self) -> &mut PointerInput {
        &mut self.input
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.input.pointer_moved(x, y);
    }

    pub fn pointer_pressed(&mut self, x: f32, y: f32) {
        self.input.pointer_pressed(x, y);
    }

    /// Follow a surface resize. Ball positions are left as they are.
    pub fn resize(&mut self, width: f32, height: f32) -> DekaResult<()> {
        self.arena.resize(width, height)?;
        log::debug!("Play area resized to {}x{}", width, height);
        Ok(())
    }

    /// Append a new ball at the top center
    pub fn spawn_ball(&mut self) {
        self.chain.push(Ball::spawn(self.metrics, &self.arena));
        log::debug!("Chain extended to {} balls", self.chain.len());
    }

    /// HUD line for the first ball
    pub fn hud_text(&self) -> String {
        let first = self.chain.first();
        layout::hud_text(first.bounce_streak(), first.best_bounce_streak())
    }

    /// Run one frame: draw, update, then apply any pending tap
    pub fn frame(&mut self, surface: &mut impl Surface) {
        self.draw(surface);
        self.chain
            .update_all(self.input.pointer(), &self.arena, &self.tuning);
        if let Some(tap) = self.input.take_tap() {
            self.apply_tap(tap);
        }
        self.frames += 1;
    }

    fn draw(&self, surface: &mut impl Surface) {
        let surface_size = Vec2::new(self.arena.width(), self.arena.height());
        if let Some(image_size) = self.background_size {
            let (origin, size) = layout::background_cover(surface_size, image_size);
            surface.draw_background(origin, size);
        }

        let (origin, size) = layout::time_scale_bar(&self.arena, self.chain.first().time_scale());
        surface.fill_rect(origin, size, YELLOW);

        self.chain.draw_all(surface);

        surface.draw_text(
            &self.hud_text(),
            Vec2::new(HUD_ORIGIN.0, HUD_ORIGIN.1),
            HUD_FONT_SIZE,
            RED,
        );
    }

    fn apply_tap(&mut self, tap: Vector2d) {
        if tap.y <= self.arena.floor_y() {
            return;
        }
        let time_scale = tap.x / self.arena.width() * 2.0;
        self.chain.set_time_scale(time_scale);
        log::debug!("Time scale set to {:.3}", time_scale);
    }
}
