//! 2D vector value type for ball physics
//!
//! Non-mutating operations return new values; the `*_in_place` variants and
//! [`Vector2d::normalize`] mutate the receiver and are used for accumulators
//! on the per-tick hot path.

use std::ops::{Add, Mul, Neg, Sub};

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A 2D vector in play-area coordinates (y grows downward)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2d {
    pub x: f32,
    pub y: f32,
}

impl Vector2d {
    /// Squared length below which a vector is treated as zero
    pub const SQ_EPSILON: f32 = 1e-4 * 1e-4;

    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Scaled copy
    #[inline]
    pub fn scale(self, k: f32) -> Self {
        Self::new(self.x * k, self.y * k)
    }

    #[inline]
    pub fn scale_in_place(&mut self, k: f32) -> &mut Self {
        self.x *= k;
        self.y *= k;
        self
    }

    /// Componentwise sum as a new vector
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    #[inline]
    pub fn add_in_place(&mut self, other: Self) -> &mut Self {
        self.x += other.x;
        self.y += other.y;
        self
    }

    /// Scale to unit length in place.
    ///
    /// Vectors shorter than `1e-4` collapse to zero instead of blowing up
    /// into NaN/inf.
    pub fn normalize(&mut self) -> &mut Self {
        let len_sq = self.length_squared();
        if len_sq < Self::SQ_EPSILON {
            *self = Self::ZERO;
            return self;
        }
        // hypot stays finite where x*x + y*y overflows f32
        self.scale_in_place(1.0 / self.x.hypot(self.y))
    }
}

impl Add for Vector2d {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Vector2d::add(self, rhs)
    }
}

impl Sub for Vector2d {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vector2d {
    type Output = Self;

    #[inline]
    fn mul(self, k: f32) -> Self {
        self.scale(k)
    }
}

impl Neg for Vector2d {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl From<Vec2> for Vector2d {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2d> for Vec2 {
    fn from(v: Vector2d) -> Self {
        Vec2::new(v.x, v.y)
    }
}
