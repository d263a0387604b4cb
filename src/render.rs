//! Draw-command production for the rendering collaborator
//!
//! The engine owns no drawing surface; each tick it derives a fresh list of
//! procedural shapes and HUD text from the game state. Commands are ordered
//! back-to-front: ground, enemies, shurikens, ninja, HUD, overlays.

use glam::Vec2;

use crate::consts::*;
use crate::sim::{EnemyKind, GameState};

pub const COLOR_NINJA: u32 = 0x9370db;
pub const COLOR_NINJA_DEAD: u32 = 0xff0000;
pub const COLOR_SHURIKEN: u32 = 0xc0c0c0;
pub const COLOR_FALLER: u32 = 0xff0000;
pub const COLOR_WALKER: u32 = 0xff4500;
pub const COLOR_GROUND: u32 = 0x8b4513;
pub const COLOR_HUD: u32 = 0xffffff;
pub const COLOR_HINT: u32 = 0xaaaaaa;

/// One drawing primitive; colors are 0xRRGGBB
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Upward-pointing triangle centered at `pos`; `facing` mirrors it
    Triangle {
        pos: Vec2,
        size: Vec2,
        facing: f32,
        color: u32,
    },
    /// Four-pointed star; `direction` orients the spin
    Diamond {
        pos: Vec2,
        size: Vec2,
        direction: f32,
        color: u32,
    },
    Circle {
        pos: Vec2,
        radius: f32,
        color: u32,
    },
    Rect {
        pos: Vec2,
        size: Vec2,
        color: u32,
    },
    Text {
        pos: Vec2,
        size_px: f32,
        color: u32,
        content: String,
    },
}

/// Derive this tick's full draw list from the game state
pub fn draw_commands(state: &GameState) -> Vec<DrawCommand> {
    let mut out = Vec::with_capacity(8 + state.enemies.len() + state.active_shurikens());

    out.push(DrawCommand::Rect {
        pos: Vec2::new(WORLD_W / 2.0, (GROUND_Y + WORLD_H) / 2.0),
        size: Vec2::new(WORLD_W, WORLD_H - GROUND_Y),
        color: COLOR_GROUND,
    });

    for enemy in &state.enemies {
        out.push(match enemy.kind {
            EnemyKind::Faller => DrawCommand::Circle {
                pos: enemy.pos,
                radius: enemy.size.x / 2.0,
                color: COLOR_FALLER,
            },
            EnemyKind::Walker => DrawCommand::Rect {
                pos: enemy.pos,
                size: enemy.size,
                color: COLOR_WALKER,
            },
        });
    }

    for shuriken in state.shurikens.iter().filter(|s| s.active) {
        out.push(DrawCommand::Diamond {
            pos: shuriken.pos,
            size: shuriken.size,
            direction: shuriken.direction,
            color: COLOR_SHURIKEN,
        });
    }

    out.push(DrawCommand::Triangle {
        pos: state.player.pos,
        size: state.player.size,
        facing: state.player.facing,
        color: if state.player.alive {
            COLOR_NINJA
        } else {
            COLOR_NINJA_DEAD
        },
    });

    out.push(DrawCommand::Text {
        pos: Vec2::new(16.0, 16.0),
        size_px: 24.0,
        color: COLOR_HUD,
        content: format!("スコア: {}", state.score),
    });
    out.push(DrawCommand::Text {
        pos: Vec2::new(WORLD_W / 2.0, 16.0),
        size_px: 14.0,
        color: COLOR_HINT,
        content: "操作: ← → 移動 / ↑ ジャンプ / スペース: 手裏剣 / タップでも操作可".to_string(),
    });

    if state.is_game_over() {
        out.push(DrawCommand::Text {
            pos: Vec2::new(WORLD_W / 2.0, 300.0),
            size_px: 64.0,
            color: COLOR_NINJA_DEAD,
            content: "GAME OVER".to_string(),
        });
        out.push(DrawCommand::Text {
            pos: Vec2::new(WORLD_W / 2.0, 370.0),
            size_px: 24.0,
            color: COLOR_HUD,
            content: "クリックかタップで再スタート".to_string(),
        });
    }

    out
}
