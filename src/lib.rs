//! Shuriken Rush - a side-view ninja arcade survival game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, physics, collisions, game state)
//! - `render`: Per-tick draw commands for a rendering backend
//! - `tuning`: Data-driven game balance

pub mod render;
pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const TICK_DT: f32 = 1.0 / 60.0;

    /// World dimensions
    pub const WORLD_W: f32 = 800.0;
    pub const WORLD_H: f32 = 600.0;
    /// Top edge of the ground band (the band fills [GROUND_Y, WORLD_H])
    pub const GROUND_Y: f32 = 560.0;
    /// Downward acceleration, pixels/s²
    pub const GRAVITY: f32 = 600.0;

    /// Ninja defaults
    pub const PLAYER_SIZE: f32 = 30.0;
    pub const PLAYER_SPAWN_X: f32 = 100.0;
    pub const PLAYER_SPAWN_Y: f32 = 520.0;
    pub const PLAYER_SPEED: f32 = 250.0;
    pub const JUMP_VELOCITY: f32 = -400.0;
    pub const PLAYER_BOUNCE: f32 = 0.2;

    /// Shuriken defaults
    pub const SHURIKEN_POOL_SIZE: usize = 20;
    pub const SHURIKEN_SIZE: f32 = 16.0;
    pub const SHURIKEN_SPEED: f32 = 500.0;
    /// Spawn offset in front of the ninja, pixels
    pub const SHURIKEN_SPAWN_OFFSET: f32 = 20.0;
    /// Minimum time between throws, milliseconds
    pub const FIRE_RATE_MS: f64 = 300.0;

    /// Enemy defaults
    pub const SPAWN_INTERVAL_MS: f64 = 2000.0;
    pub const ENEMY_SIZE: f32 = 30.0;
    pub const FALLER_BOUNCE: f32 = 0.3;
    pub const FALLER_SPAWN_Y: f32 = -20.0;
    pub const FALLER_X_MIN: f32 = 50.0;
    pub const FALLER_X_MAX: f32 = 750.0;
    pub const FALLER_SPEED_MIN: f32 = 100.0;
    pub const FALLER_SPEED_MAX: f32 = 200.0;
    pub const WALKER_SPEED: f32 = 100.0;
    pub const WALKER_SPAWN_Y: f32 = 520.0;
    /// Walkers enter from just outside the side edges
    pub const WALKER_SPAWN_MARGIN: f32 = 20.0;

    pub const SCORE_PER_KILL: u32 = 10;

    /// Off-screen reap thresholds (entity centers)
    pub const REAP_X_MIN: f32 = -50.0;
    pub const REAP_X_MAX: f32 = 850.0;
    pub const REAP_Y_MAX: f32 = 610.0;

    /// Pointer steering deadzone around the ninja, pixels
    pub const POINTER_DEADZONE: f32 = 20.0;
}

/// Horizontal direction sign with the scene's right-facing default
#[inline]
pub fn horizontal_sign(v: f32) -> f32 {
    if v >= 0.0 { 1.0 } else { -1.0 }
}
