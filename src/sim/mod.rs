//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (slot order for shurikens, spawn order for enemies)
//! - No rendering or platform dependencies

pub mod clock;
pub mod collision;
pub mod input;
pub mod physics;
pub mod spawn;
pub mod state;
pub mod tick;

pub use clock::{Clock, RepeatingTimer};
pub use collision::aabb_overlap;
pub use input::{InputAdapter, Key};
pub use state::{Enemy, EnemyKind, GameEvent, GamePhase, GameState, Player, Shuriken};
pub use tick::{TickInput, tick};
