//! Play-area bounds
//!
//! The simulation reads these every tick and never mutates them.

use serde::{Deserialize, Serialize};

use crate::consts::HEADER_HEIGHT;
use crate::error::{DekaError, DekaResult};

/// Bounds provider consumed by [`crate::sim::Ball::step`]
pub trait PlayArea {
    fn width(&self) -> f32;
    fn height(&self) -> f32;
    /// Strip below the floor (time-scale bar)
    fn header_height(&self) -> f32;

    /// Y coordinate of the floor (y grows downward, top is open)
    #[inline]
    fn floor_y(&self) -> f32 {
        self.height() - self.header_height()
    }
}

/// Rectangular play area sized to the drawing surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    width: f32,
    height: f32,
    header_height: f32,
}

impl Arena {
    /// Arena with the default header strip
    pub fn new(width: f32, height: f32) -> DekaResult<Self> {
        Self::with_header(width, height, HEADER_HEIGHT)
    }

    pub fn with_header(width: f32, height: f32, header_height: f32) -> DekaResult<Self> {
        let valid = width.is_finite()
            && height.is_finite()
            && header_height.is_finite()
            && width > 0.0
            && height > 0.0
            && header_height >= 0.0
            && header_height < height;
        if !valid {
            return Err(DekaError::InvalidArena {
                width,
                height,
                header_height,
            });
        }
        Ok(Self {
            width,
            height,
            header_height,
        })
    }

    /// Resize to a new surface, keeping the header height
    pub fn resize(&mut self, width: f32, height: f32) -> DekaResult<()> {
        *self = Self::with_header(width, height, self.header_height)?;
        Ok(())
    }
}

impl PlayArea for Arena {
    #[inline]
    fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    fn height(&self) -> f32 {
        self.height
    }

    #[inline]
    fn header_height(&self) -> f32 {
        self.header_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_sits_above_header() {
        let arena = Arena::new(400.0, 300.0).unwrap();
        assert_eq!(arena.floor_y(), 284.0);
        assert_eq!(arena.width(), 400.0);
    }

    #[test]
    fn test_rejects_degenerate_sizes() {
        assert!(Arena::new(0.0, 300.0).is_err());
        assert!(Arena::new(400.0, f32::NAN).is_err());
        assert!(Arena::new(400.0, 10.0).is_err()); // header doesn't fit
        assert!(Arena::with_header(400.0, 10.0, 0.0).is_ok());
    }

    #[test]
    fn test_resize_keeps_header_and_rejects_bad_sizes() {
        let mut arena = Arena::with_header(400.0, 300.0, 20.0).unwrap();
        arena.resize(800.0, 600.0).unwrap();
        assert_eq!(arena.floor_y(), 580.0);

        assert!(arena.resize(-1.0, 600.0).is_err());
        assert_eq!(arena.width(), 800.0);
    }
}
