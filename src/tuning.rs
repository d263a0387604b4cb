//! Data-driven game balance
//!
//! Defaults mirror the constants in [`crate::consts`]; a JSON file can
//! override them for playtesting without rebuilding. World geometry, entity
//! sizes, and reap thresholds stay compile-time constants.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay balance knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Ninja run speed, px/s
    pub player_speed: f32,
    /// Jump impulse, px/s (negative is up)
    pub jump_velocity: f32,
    /// Downward acceleration, px/s²
    pub gravity: f32,
    /// Minimum time between throws, ms
    pub fire_rate_ms: f64,
    /// Enemy spawn cadence, ms
    pub spawn_interval_ms: f64,
    /// Shuriken flight speed, px/s
    pub shuriken_speed: f32,
    pub faller_speed_min: f32,
    pub faller_speed_max: f32,
    pub walker_speed: f32,
    pub score_per_kill: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_speed: PLAYER_SPEED,
            jump_velocity: JUMP_VELOCITY,
            gravity: GRAVITY,
            fire_rate_ms: FIRE_RATE_MS,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            shuriken_speed: SHURIKEN_SPEED,
            faller_speed_min: FALLER_SPEED_MIN,
            faller_speed_max: FALLER_SPEED_MAX,
            walker_speed: WALKER_SPEED,
            score_per_kill: SCORE_PER_KILL,
        }
    }
}

impl Tuning {
    /// Load balance values from a JSON file
    pub fn load(path: &Path) -> io::Result<Self> {
        let json = fs::read_to_string(path)?;
        serde_json::from_str(&json).map_err(io::Error::other)
    }

    /// Write the current values as pretty JSON
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, json)
    }

    /// Load from `path`, falling back to defaults when absent or invalid
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(tuning) => {
                log::info!("loaded tuning from {}", path.display());
                tuning
            }
            Err(err) => {
                log::info!("using default tuning ({}: {err})", path.display());
                Self::default()
            }
        }
    }
}
