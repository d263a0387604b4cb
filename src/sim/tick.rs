//! Fixed timestep simulation tick
//!
//! The ordering backbone of the engine. Each tick: player intent and
//! motion, throw, spawn (if due), enemy and shuriken motion, collision
//! resolution, off-screen reaping. All on one thread, no reentrancy.

use glam::Vec2;

use crate::consts::*;
use crate::horizontal_sign;

use super::collision;
use super::physics;
use super::spawn;
use super::state::{GameEvent, GamePhase, GameState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Horizontal intent in {-1.0, 0.0, +1.0}
    pub move_dir: f32,
    /// Jump intent (rising edge of the up key)
    pub jump: bool,
    /// Throw requested this tick (space held or pointer-down edge)
    pub throw: bool,
    /// Raw pointer-down edge; arms the restart while game over
    pub pointer_pressed: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();

    if state.phase == GamePhase::GameOver {
        // Gameplay is frozen; only the restart trigger stays live.
        if input.pointer_pressed {
            state.request_restart();
        }
        return;
    }

    state.clock.advance(dt);

    // Player intent and motion
    state.player.vel.x = input.move_dir * state.tuning.player_speed;
    if input.move_dir != 0.0 {
        state.player.facing = input.move_dir;
    }
    if input.jump && state.player.grounded {
        state.player.vel.y = state.tuning.jump_velocity;
        state.events.push(GameEvent::PlayerJumped);
    }
    physics::step_player(&mut state.player, &state.tuning, dt);

    if input.throw {
        try_throw(state);
    }

    // Spawn cadence
    let now = state.clock.elapsed_ms();
    if state.spawn_timer.poll(now) {
        spawn::spawn_enemy(state);
    }

    // Enemy and shuriken motion
    for enemy in &mut state.enemies {
        physics::step_enemy(enemy, &state.tuning, dt);
    }
    for shuriken in &mut state.shurikens {
        if shuriken.active {
            physics::step_shuriken(shuriken, dt);
        }
    }

    // Collisions, then reaping, within the same tick
    collision::resolve_shuriken_hits(state);
    if collision::player_hit(state) {
        enter_game_over(state);
    }
    collision::reap_offscreen(state);
}

/// Throw a shuriken if the cooldown has elapsed and a pool slot is free.
///
/// A request during cooldown or with an exhausted pool is silently dropped.
fn try_throw(state: &mut GameState) {
    let now = state.clock.elapsed_ms();
    if now - state.last_fired < state.tuning.fire_rate_ms {
        return;
    }

    let direction = horizontal_sign(state.player.vel.x);
    let origin = Vec2::new(
        state.player.pos.x + direction * SHURIKEN_SPAWN_OFFSET,
        state.player.pos.y,
    );
    let speed = state.tuning.shuriken_speed;

    let Some(slot) = state.shurikens.iter_mut().find(|s| !s.active) else {
        return;
    };
    slot.active = true;
    slot.direction = direction;
    slot.pos = origin;
    slot.vel = Vec2::new(direction * speed, 0.0);

    state.last_fired = now;
    state.events.push(GameEvent::ShurikenThrown);
}

/// Terminal transition: freeze the ninja, cancel spawning. Idempotent.
fn enter_game_over(state: &mut GameState) {
    if state.phase == GamePhase::GameOver {
        return;
    }
    state.phase = GamePhase::GameOver;
    state.player.alive = false;
    state.player.vel = Vec2::ZERO;
    state.spawn_timer.cancel();
    state.events.push(GameEvent::GameOver);
    log::info!("game over at score {}", state.score);
}
