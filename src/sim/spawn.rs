//! Timed enemy spawning
//!
//! Fired by the scene's repeating spawn timer while playing. All randomness
//! flows through the seeded RNG so a run is reproducible from its seed.

use glam::Vec2;
use rand::Rng;

use crate::consts::*;

use super::state::{Enemy, EnemyKind, GameEvent, GameState};

/// Create one enemy of random kind at a random entry point
pub fn spawn_enemy(state: &mut GameState) {
    let id = state.next_enemy_id();

    let enemy = if state.rng.random_bool(0.5) {
        // Falls in from above the top edge
        let x = state.rng.random_range(FALLER_X_MIN..=FALLER_X_MAX);
        let speed = state
            .rng
            .random_range(state.tuning.faller_speed_min..=state.tuning.faller_speed_max);
        Enemy {
            id,
            kind: EnemyKind::Faller,
            pos: Vec2::new(x, FALLER_SPAWN_Y),
            vel: Vec2::new(0.0, speed),
            size: Vec2::splat(ENEMY_SIZE),
        }
    } else {
        // Walks in from a side edge toward the interior
        let from_left = state.rng.random_bool(0.5);
        let (x, vx) = if from_left {
            (-WALKER_SPAWN_MARGIN, state.tuning.walker_speed)
        } else {
            (WORLD_W + WALKER_SPAWN_MARGIN, -state.tuning.walker_speed)
        };
        Enemy {
            id,
            kind: EnemyKind::Walker,
            pos: Vec2::new(x, WALKER_SPAWN_Y),
            vel: Vec2::new(vx, 0.0),
            size: Vec2::splat(ENEMY_SIZE),
        }
    };

    log::debug!(
        "spawned {:?} #{} at ({:.0}, {:.0})",
        enemy.kind,
        enemy.id,
        enemy.pos.x,
        enemy.pos.y
    );
    state.events.push(GameEvent::EnemySpawned { kind: enemy.kind });
    state.enemies.push(enemy);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawned_enemy_is_well_formed() {
        let mut state = GameState::new(4242);
        for _ in 0..200 {
            spawn_enemy(&mut state);
        }
        assert_eq!(state.enemies.len(), 200);

        for enemy in &state.enemies {
            match enemy.kind {
                EnemyKind::Faller => {
                    assert!(enemy.pos.x >= FALLER_X_MIN && enemy.pos.x <= FALLER_X_MAX);
                    assert_eq!(enemy.pos.y, FALLER_SPAWN_Y);
                    assert_eq!(enemy.vel.x, 0.0);
                    assert!(enemy.vel.y >= FALLER_SPEED_MIN && enemy.vel.y <= FALLER_SPEED_MAX);
                }
                EnemyKind::Walker => {
                    assert_eq!(enemy.pos.y, WALKER_SPAWN_Y);
                    assert_eq!(enemy.vel.y, 0.0);
                    // Entering from outside, moving toward the interior
                    if enemy.pos.x < 0.0 {
                        assert_eq!(enemy.vel.x, WALKER_SPEED);
                    } else {
                        assert_eq!(enemy.pos.x, WORLD_W + WALKER_SPAWN_MARGIN);
                        assert_eq!(enemy.vel.x, -WALKER_SPEED);
                    }
                }
            }
        }
    }

    #[test]
    fn test_both_kinds_appear() {
        let mut state = GameState::new(99);
        for _ in 0..64 {
            spawn_enemy(&mut state);
        }
        let fallers = state
            .enemies
            .iter()
            .filter(|e| e.kind == EnemyKind::Faller)
            .count();
        assert!(fallers > 0 && fallers < 64);
    }

    #[test]
    fn test_spawn_sequence_is_seed_deterministic() {
        let mut a = GameState::new(1234);
        let mut b = GameState::new(1234);
        for _ in 0..32 {
            spawn_enemy(&mut a);
            spawn_enemy(&mut b);
        }
        for (ea, eb) in a.enemies.iter().zip(&b.enemies) {
            assert_eq!(ea.kind, eb.kind);
            assert_eq!(ea.pos, eb.pos);
            assert_eq!(ea.vel, eb.vel);
        }
    }
}
