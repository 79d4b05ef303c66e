//! Deka - a pointer-juggling bouncing ball toy
//!
//! Core modules:
//! - `sim`: Ball simulation (vector math, contact latches, chain stepping)
//! - `render`: Drawing seam and frame layout math
//! - `session`: Frame driver (draw, update, consume tap)
//! - `tuning`: Data-driven physics constants

pub mod error;
pub mod render;
pub mod session;
pub mod sim;
pub mod tuning;

pub use error::{DekaError, DekaResult};
pub use session::Session;
pub use tuning::PhysicsTuning;

/// Simulation configuration constants
pub mod consts {
    /// Downward acceleration added per tick (scaled by time scale)
    pub const GRAVITY: f32 = 0.3;
    /// Fraction of velocity lost per tick
    pub const VELOCITY_DECAY: f32 = 1e-3;
    /// One-shot damping applied on contact onset with floor or walls
    pub const CONTACT_DAMPING: f32 = 0.9;
    /// Pointer offset to velocity impulse factor
    pub const POINTER_IMPULSE: f32 = 1.0 / 32.0;
    /// Extra horizontal gain on the pointer impulse
    pub const POINTER_HORIZONTAL_GAIN: f32 = 8.0;

    /// Strip below the floor reserved for the time-scale bar
    pub const HEADER_HEIGHT: f32 = 16.0;
    /// Time scale a fresh ball starts with
    pub const DEFAULT_TIME_SCALE: f32 = 1.0;

    /// HUD text baseline origin and font size
    pub const HUD_ORIGIN: (f32, f32) = (4.0, 16.0);
    pub const HUD_FONT_SIZE: f32 = 16.0;
}
