//! Shuriken Rush entry point
//!
//! Headless demo host: drives the engine at a fixed timestep with a scripted
//! input session and reports the outcome. A real front end wires the same
//! calls to a window, pointer events, and a renderer backend.

use std::time::{SystemTime, UNIX_EPOCH};

use shuriken_rush::consts::*;
use shuriken_rush::render;
use shuriken_rush::sim::{GameState, InputAdapter, Key, tick};
use shuriken_rush::tuning::Tuning;

/// Demo session length in ticks (30 seconds at 60 Hz)
const DEMO_TICKS: u32 = 30 * 60;

fn main() {
    env_logger::init();
    log::info!("Shuriken Rush (headless demo) starting...");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0x5eed);
    let tuning = Tuning::load_or_default(std::path::Path::new("tuning.json"));
    let mut state = GameState::with_tuning(seed, tuning);
    let mut input = InputAdapter::new();

    // Scripted session: hold space and pace back and forth across the arena,
    // hopping at each turn.
    input.key_down(Key::Space);
    input.key_down(Key::Right);
    for n in 0..DEMO_TICKS {
        if n % 240 == 0 && n > 0 {
            let heading_right = (n / 240) % 2 == 0;
            input.key_up(if heading_right { Key::Left } else { Key::Right });
            input.key_down(if heading_right { Key::Right } else { Key::Left });
            input.key_down(Key::Up);
        } else {
            input.key_up(Key::Up);
        }

        let command = input.sample(state.player.pos.x);
        tick(&mut state, &command, TICK_DT);

        for event in state.drain_events() {
            log::debug!("event: {event:?}");
        }
        if state.is_game_over() {
            break;
        }
    }

    let frame = render::draw_commands(&state);
    log::info!(
        "demo finished: score {}, {} enemies on screen, {} draw commands",
        state.score,
        state.enemies.len(),
        frame.len()
    );
    println!(
        "score: {} ({})",
        state.score,
        if state.is_game_over() { "game over" } else { "survived" }
    );
}
