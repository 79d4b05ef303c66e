//! Data-driven physics tuning
//!
//! All constants the ball update uses, loadable from JSON so the feel can be
//! adjusted without a rebuild. Missing fields fall back to the defaults in
//! [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{DekaError, DekaResult};

/// Tunable physics constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsTuning {
    /// Downward acceleration per tick
    pub gravity: f32,
    /// Fraction of velocity lost per tick
    pub velocity_decay: f32,
    /// One-shot damping on floor/wall contact onset
    pub contact_damping: f32,
    /// Pointer offset to impulse factor
    pub pointer_impulse: f32,
    /// Horizontal multiplier on the pointer impulse
    pub pointer_horizontal_gain: f32,
    /// Header strip height below the floor
    pub header_height: f32,
}

impl Default for PhysicsTuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            velocity_decay: VELOCITY_DECAY,
            contact_damping: CONTACT_DAMPING,
            pointer_impulse: POINTER_IMPULSE,
            pointer_horizontal_gain: POINTER_HORIZONTAL_GAIN,
            header_height: HEADER_HEIGHT,
        }
    }
}

impl PhysicsTuning {
    pub fn from_json(json: &str) -> DekaResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> DekaResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| DekaError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded physics tuning from {}", path.display());
        Ok(tuning)
    }

    /// Load tuning, falling back to defaults if the file is missing or invalid
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::warn!("{e}, using default tuning");
                Self::default()
            }
        }
    }

    /// Per-tick velocity retention for a given time scale
    #[inline]
    pub fn decay_factor(&self, time_scale: f32) -> f32 {
        (1.0 - self.velocity_decay).powf(time_scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let t = PhysicsTuning::default();
        assert_eq!(t.gravity, 0.3);
        assert_eq!(t.contact_damping, 0.9);
        assert_eq!(t.pointer_impulse, 1.0 / 32.0);
        assert_eq!(t.header_height, 16.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let t = PhysicsTuning::from_json(r#"{ "gravity": 0.5 }"#).unwrap();
        assert_eq!(t.gravity, 0.5);
        assert_eq!(t.velocity_decay, VELOCITY_DECAY);
        assert_eq!(t.pointer_horizontal_gain, 8.0);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let err = PhysicsTuning::from_json("{ gravity: ").unwrap_err();
        assert!(matches!(err, DekaError::Tuning(_)));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let path = std::env::temp_dir().join("deka-missing-tuning-file.json");
        assert!(matches!(
            PhysicsTuning::load(&path),
            Err(DekaError::Io { .. })
        ));
        assert_eq!(PhysicsTuning::load_or_default(&path), PhysicsTuning::default());
    }

    #[test]
    fn test_load_round_trips_through_file() {
        let path = std::env::temp_dir().join(format!("deka-tuning-{}.json", std::process::id()));
        let tuning = PhysicsTuning {
            gravity: 0.1,
            ..Default::default()
        };
        std::fs::write(&path, serde_json::to_string(&tuning).unwrap()).unwrap();
        let loaded = PhysicsTuning::load(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, tuning);
    }

    #[test]
    fn test_decay_factor() {
        let t = PhysicsTuning::default();
        assert!((t.decay_factor(1.0) - 0.999).abs() < 1e-7);
        assert_eq!(t.decay_factor(0.0), 1.0);
    }
}
