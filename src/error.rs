//! Error types for the glue layer
//!
//! The simulation core is infallible; only setup (sprite metrics, arena
//! sizing) and tuning IO can fail.

/// Errors raised while setting up a session
#[derive(Debug, thiserror::Error)]
pub enum DekaError {
    #[error("sprite has degenerate dimensions {width}x{height}")]
    InvalidSprite { width: u32, height: u32 },
    #[error("play area {width}x{height} cannot hold a {header_height} unit header")]
    InvalidArena {
        width: f32,
        height: f32,
        header_height: f32,
    },
    #[error("failed to read tuning file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid tuning: {0}")]
    Tuning(#[from] serde_json::Error),
}

pub type DekaResult<T> = Result<T, DekaError>;
