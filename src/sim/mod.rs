//! Ball simulation module
//!
//! All physics lives here. No rendering backend or platform dependencies:
//! - Bounds are read through [`PlayArea`], never owned
//! - Balls step once per tick, in chain order
//! - Contact onset is tracked by explicit [`EdgeLatch`] state machines

pub mod area;
pub mod ball;
pub mod chain;
pub mod input;
pub mod latch;
pub mod vector;

pub use area::{Arena, PlayArea};
pub use ball::{Ball, BallMetrics};
pub use chain::BallChain;
pub use input::PointerInput;
pub use latch::{EdgeLatch, ReleaseRule};
pub use vector::Vector2d;
