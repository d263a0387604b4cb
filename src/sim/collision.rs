//! Collision resolution and off-screen reaping
//!
//! Runs after motion each tick: shuriken hits first, then the fatal
//! player overlap, then reaping. Entities that are already dead or gone
//! are skipped; transient absence is expected, never an error.

use glam::Vec2;

use crate::consts::*;

use super::state::{GameEvent, GameState};

/// Axis-aligned overlap between two centered boxes
#[inline]
pub fn aabb_overlap(a_pos: Vec2, a_size: Vec2, b_pos: Vec2, b_size: Vec2) -> bool {
    let gap = (a_pos - b_pos).abs();
    let reach = (a_size + b_size) * 0.5;
    gap.x < reach.x && gap.y < reach.y
}

/// Resolve shuriken×enemy overlaps: both die, +10 per pair.
///
/// Pairs resolve independently and in stable order (slot order for
/// shurikens, spawn order for enemies). A shuriken dies with the first
/// enemy it overlaps, so one throw never scores twice.
pub fn resolve_shuriken_hits(state: &mut GameState) {
    let mut killed: Vec<u32> = Vec::new();

    for slot in 0..state.shurikens.len() {
        if !state.shurikens[slot].active {
            continue;
        }
        let (pos, size) = (state.shurikens[slot].pos, state.shurikens[slot].size);

        let hit = state
            .enemies
            .iter()
            .find(|e| !killed.contains(&e.id) && aabb_overlap(pos, size, e.pos, e.size))
            .map(|e| (e.id, e.kind));

        if let Some((id, kind)) = hit {
            killed.push(id);
            state.shurikens[slot].active = false;
            state.score += state.tuning.score_per_kill;
            state.events.push(GameEvent::EnemyKilled { kind });
            log::debug!("shuriken destroyed {kind:?} #{id}, score {}", state.score);
        }
    }

    state.enemies.retain(|e| !killed.contains(&e.id));
}

/// True when any enemy overlaps the ninja
pub fn player_hit(state: &GameState) -> bool {
    state
        .enemies
        .iter()
        .any(|e| aabb_overlap(state.player.pos, state.player.size, e.pos, e.size))
}

/// Remove everything that left the playable world.
///
/// Shurikens free their pool slot past x ∈ [-50, 850]; enemies are dropped
/// past the same x range or below y = 610.
pub fn reap_offscreen(state: &mut GameState) {
    for shuriken in &mut state.shurikens {
        if shuriken.active && (shuriken.pos.x < REAP_X_MIN || shuriken.pos.x > REAP_X_MAX) {
            shuriken.active = false;
        }
    }

    state.enemies.retain(|e| {
        let gone = e.pos.y > REAP_Y_MAX || e.pos.x < REAP_X_MIN || e.pos.x > REAP_X_MAX;
        if gone {
            log::debug!("reaped {:?} #{} off-screen", e.kind, e.id);
        }
        !gone
    });
}
