//! Motion step: explicit Euler integration against a static ground body
//! and the world bounds.
//!
//! Positions are entity centers; collision extents come from `size`.

use crate::consts::*;
use crate::tuning::Tuning;

use super::state::{Enemy, EnemyKind, Player, Shuriken};

/// Bounces slower than this settle instead of ringing forever
const REST_SPEED: f32 = 20.0;

/// Reflect a downward impact speed by `restitution`, settling small bounces
#[inline]
fn ground_bounce(impact: f32, restitution: f32) -> f32 {
    let reflected = -impact * restitution;
    if reflected.abs() < REST_SPEED { 0.0 } else { reflected }
}

/// Advance the ninja: gravity, ground contact, world-bound clamping.
///
/// Horizontal velocity is written by the tick from intent before this runs;
/// only the vertical axis is integrated here.
pub fn step_player(player: &mut Player, tuning: &Tuning, dt: f32) {
    player.vel.y += tuning.gravity * dt;
    player.pos += player.vel * dt;

    let half = player.size * 0.5;

    player.grounded = false;
    if player.pos.y + half.y >= GROUND_Y && player.vel.y >= 0.0 {
        player.pos.y = GROUND_Y - half.y;
        player.vel.y = ground_bounce(player.vel.y, PLAYER_BOUNCE);
        player.grounded = true;
    }

    // Ceiling, restitution on the vertical axis only
    if player.pos.y - half.y < 0.0 && player.vel.y < 0.0 {
        player.pos.y = half.y;
        player.vel.y = -player.vel.y * PLAYER_BOUNCE;
    }

    if player.pos.x < half.x {
        player.pos.x = half.x;
        player.vel.x = 0.0;
    } else if player.pos.x > WORLD_W - half.x {
        player.pos.x = WORLD_W - half.x;
        player.vel.x = 0.0;
    }
}

/// Advance one enemy by its kind's motion rule
pub fn step_enemy(enemy: &mut Enemy, tuning: &Tuning, dt: f32) {
    match enemy.kind {
        EnemyKind::Faller => {
            enemy.vel.y += tuning.gravity * dt;
            enemy.pos += enemy.vel * dt;

            let half = enemy.size * 0.5;
            if enemy.pos.y + half.y >= GROUND_Y && enemy.vel.y >= 0.0 {
                enemy.pos.y = GROUND_Y - half.y;
                enemy.vel.y = ground_bounce(enemy.vel.y, FALLER_BOUNCE);
            }

            // Fallers stay within horizontal bounds
            enemy.pos.x = enemy.pos.x.clamp(half.x, WORLD_W - half.x);
        }
        // Walkers cross unclamped: no gravity, no ground test, no bounce
        EnemyKind::Walker => {
            enemy.pos += enemy.vel * dt;
        }
    }
}

/// Advance an active shuriken: constant velocity, no gravity
pub fn step_shuriken(shuriken: &mut Shuriken, dt: f32) {
    shuriken.pos += shuriken.vel * dt;
}
