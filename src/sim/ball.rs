//! Ball simulation node
//!
//! One tick of a ball: pointer repulsion, edge-latched floor and wall
//! contacts, integration, velocity decay, then gravity. The order matters:
//! the displacement is computed from the velocity *before* this tick's
//! gravity is applied.

use serde::{Deserialize, Serialize};

use super::area::PlayArea;
use super::latch::{EdgeLatch, ReleaseRule};
use super::vector::Vector2d;
use crate::consts::DEFAULT_TIME_SCALE;
use crate::error::{DekaError, DekaResult};
use crate::render::{Sprite, Surface};
use crate::tuning::PhysicsTuning;

/// Half extents of the ball sprite
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallMetrics {
    pub half_width: f32,
    pub half_height: f32,
}

impl BallMetrics {
    /// Derive metrics from the loaded sprite's pixel dimensions
    pub fn from_sprite(width: u32, height: u32) -> DekaResult<Self> {
        if width == 0 || height == 0 {
            return Err(DekaError::InvalidSprite { width, height });
        }
        Ok(Self {
            half_width: width as f32 / 2.0,
            half_height: height as f32 / 2.0,
        })
    }

    /// Square sprite with the given half extent
    pub const fn circle(radius: f32) -> Self {
        Self {
            half_width: radius,
            half_height: radius,
        }
    }

    /// Pointer-contact radius and side-wall margin
    #[inline]
    pub fn radius(&self) -> f32 {
        self.half_width
    }
}

/// A simulated ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub position: Vector2d,
    pub velocity: Vector2d,
    floor: EdgeLatch,
    left: EdgeLatch,
    right: EdgeLatch,
    pointer: EdgeLatch,
    /// Pointer bounces since the last floor touch
    bounce_streak: u32,
    best_bounce_streak: u32,
    time_scale: f32,
    metrics: BallMetrics,
}

impl Ball {
    pub fn new(metrics: BallMetrics, position: Vector2d) -> Self {
        Self {
            position,
            velocity: Vector2d::ZERO,
            floor: EdgeLatch::Idle,
            left: EdgeLatch::Idle,
            right: EdgeLatch::Idle,
            pointer: EdgeLatch::Idle,
            bounce_streak: 0,
            best_bounce_streak: 0,
            time_scale: DEFAULT_TIME_SCALE,
            metrics,
        }
    }

    /// New ball centered horizontally, just above the top edge
    pub fn spawn(metrics: BallMetrics, area: &impl PlayArea) -> Self {
        Self::new(
            metrics,
            Vector2d::new(area.width() / 2.0, -metrics.half_height),
        )
    }

    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// Any value is accepted: 0 freezes the ball, negative runs it backwards
    /// with gravity pointing up.
    pub fn set_time_scale(&mut self, time_scale: f32) {
        self.time_scale = time_scale;
    }

    pub fn bounce_streak(&self) -> u32 {
        self.bounce_streak
    }

    pub fn best_bounce_streak(&self) -> u32 {
        self.best_bounce_streak
    }

    pub fn contact_floor(&self) -> bool {
        self.floor.is_contacting()
    }

    pub fn contact_left(&self) -> bool {
        self.left.is_contacting()
    }

    pub fn contact_right(&self) -> bool {
        self.right.is_contacting()
    }

    pub fn contact_pointer(&self) -> bool {
        self.pointer.is_contacting()
    }

    /// Advance one tick
    pub fn step(&mut self, pointer: Vector2d, area: &impl PlayArea, tuning: &PhysicsTuning) {
        let radius = self.metrics.radius();

        // Pointer repulsion: pushes away from the pointer, mostly sideways,
        // and never downward
        let mut d = pointer - self.position;
        let touching_pointer = d.length() < radius;
        if touching_pointer {
            d.y += radius;
            d.scale_in_place(-tuning.pointer_impulse);
            d.x *= tuning.pointer_horizontal_gain;
            self.velocity.add_in_place(d);
            if self.velocity.y > 0.0 {
                self.velocity.y = -self.velocity.y;
            }
        }
        if self.pointer.observe(touching_pointer, ReleaseRule::OnSeparation) {
            self.bounce_streak += 1;
            if self.bounce_streak > self.best_bounce_streak {
                self.best_bounce_streak = self.bounce_streak;
                log::debug!("New bounce record: {}", self.best_bounce_streak);
            }
        }

        let mut delta = self.velocity.scale(self.time_scale);

        let on_floor = self.position.y + delta.y + self.metrics.half_height > area.floor_y();
        if on_floor {
            self.bounce_streak = 0;
        }
        resolve_contact(
            &mut self.floor,
            ReleaseRule::OnSeparation,
            on_floor,
            -1.0,
            &mut self.velocity.y,
            &mut delta.y,
            tuning.contact_damping,
        );

        let on_left = self.position.x + delta.x - radius < 0.0;
        resolve_contact(
            &mut self.left,
            ReleaseRule::OnSeparation,
            on_left,
            1.0,
            &mut self.velocity.x,
            &mut delta.x,
            tuning.contact_damping,
        );

        let on_right = self.position.x + delta.x + radius > area.width();
        resolve_contact(
            &mut self.right,
            ReleaseRule::OnRepeatContact,
            on_right,
            -1.0,
            &mut self.velocity.x,
            &mut delta.x,
            tuning.contact_damping,
        );

        self.position.add_in_place(delta);
        self.velocity.scale_in_place(tuning.decay_factor(self.time_scale));
        self.velocity.y += tuning.gravity * self.time_scale;
    }

    /// Draw the sprite centered on the ball position
    pub fn draw(&self, surface: &mut impl Surface) {
        let half = Vector2d::new(self.metrics.half_width, self.metrics.half_height);
        surface.draw_sprite(Sprite::Ball, (self.position - half).into());
    }
}

/// Force one axis of velocity and displacement to point along `dir` while
/// touching, and damp both once on contact onset.
fn resolve_contact(
    latch: &mut EdgeLatch,
    rule: ReleaseRule,
    touching: bool,
    dir: f32,
    velocity: &mut f32,
    delta: &mut f32,
    damping: f32,
) {
    if touching {
        *velocity = dir * velocity.abs();
        *delta = dir * delta.abs();
    }
    if latch.observe(touching, rule) {
        *velocity *= damping;
        *delta *= damping;
    }
}
