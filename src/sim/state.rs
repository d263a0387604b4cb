//! Game state and core simulation types
//!
//! Everything a tick mutates lives in one owned [`GameState`] value; there
//! are no ambient globals.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::clock::{Clock, RepeatingTimer};
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended; only the restart trigger remains live
    GameOver,
}

/// Enemy variants, discriminating the motion rule and the rendered shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Spawns above the screen, falls under gravity, bounces off the ground
    Faller,
    /// Spawns at a side edge, walks straight across, exits unclamped
    Walker,
}

/// The ninja
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    /// Last nonzero horizontal intent sign; orients the sprite
    pub facing: f32,
    /// Ground contact this tick (jump gate)
    pub grounded: bool,
    /// Flips false on the fatal hit; drives the death color
    pub alive: bool,
}

impl Player {
    fn new() -> Self {
        Self {
            pos: Vec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y),
            vel: Vec2::ZERO,
            size: Vec2::splat(PLAYER_SIZE),
            facing: 1.0,
            grounded: false,
            alive: true,
        }
    }
}

/// A pooled shuriken slot; `active == false` slots are free
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shuriken {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    /// Fixed at throw time; only the renderer's spin orientation uses it
    pub direction: f32,
    pub active: bool,
}

impl Shuriken {
    fn idle() -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            size: Vec2::splat(SHURIKEN_SIZE),
            direction: 1.0,
            active: false,
        }
    }
}

/// An enemy entity; every entry in `GameState::enemies` is alive
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub kind: EnemyKind,
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
}

/// Per-tick notifications for collaborators (UI, sound hooks).
///
/// Carries no gameplay authority; the simulation never reads it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    EnemySpawned { kind: EnemyKind },
    EnemyKilled { kind: EnemyKind },
    ShurikenThrown,
    PlayerJumped,
    GameOver,
}

/// Complete game state for one scene lifetime
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub phase: GamePhase,
    pub score: u32,
    pub player: Player,
    /// Fixed pool of `SHURIKEN_POOL_SIZE` slots
    pub shurikens: Vec<Shuriken>,
    pub enemies: Vec<Enemy>,
    pub clock: Clock,
    pub spawn_timer: RepeatingTimer,
    /// Clock timestamp of the last successful throw, ms
    pub last_fired: f64,
    pub rng: Pcg32,
    pub tuning: Tuning,
    /// Events of the current tick, drained by collaborators
    pub events: Vec<GameEvent>,
    restart_requested: bool,
    next_id: u32,
}

impl GameState {
    /// Create a fully-populated scene with default balance
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        log::info!("scene created (seed {seed})");
        Self {
            seed,
            phase: GamePhase::Playing,
            score: 0,
            player: Player::new(),
            shurikens: (0..SHURIKEN_POOL_SIZE).map(|_| Shuriken::idle()).collect(),
            enemies: Vec::new(),
            clock: Clock::new(),
            spawn_timer: RepeatingTimer::new(tuning.spawn_interval_ms),
            last_fired: 0.0,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            events: Vec::new(),
            restart_requested: false,
            next_id: 1,
        }
    }

    /// Allocate a new enemy ID
    pub fn next_enemy_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn active_shurikens(&self) -> usize {
        self.shurikens.iter().filter(|s| s.active).count()
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Arm the restart signal; meaningful only while game over
    pub(crate) fn request_restart(&mut self) {
        self.restart_requested = true;
    }

    /// One-shot restart signal. The host reacts by rebuilding the scene
    /// with [`GameState::new`]; nothing in the engine resets in place.
    pub fn take_restart_request(&mut self) -> bool {
        std::mem::take(&mut self.restart_requested)
    }

    /// Hand the current tick's events to a collaborator
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
