//! Input adapter
//!
//! Folds raw keyboard and pointer state into one [`TickInput`] per tick.
//! The host feeds device events in as they arrive; `sample` is called once
//! per tick and consumes the edge-triggered state.
//!
//! Channel precedence: a held pointer overrides keyboard-derived horizontal
//! intent; once released, the keyboard governs again.

use glam::Vec2;

use super::tick::TickInput;
use crate::consts::POINTER_DEADZONE;

/// Keys the engine understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Up,
    Space,
}

/// Raw device state between ticks
#[derive(Debug, Clone, Default)]
pub struct InputAdapter {
    left: bool,
    right: bool,
    up: bool,
    space: bool,
    /// Up level at the previous sample, for rising-edge jump detection
    up_was_down: bool,
    /// Pointer position while held
    pointer: Option<Vec2>,
    /// Unconsumed pointer-down edge
    pointer_pressed: bool,
}

impl InputAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        match key {
            Key::Left => self.left = true,
            Key::Right => self.right = true,
            Key::Up => self.up = true,
            Key::Space => self.space = true,
        }
    }

    pub fn key_up(&mut self, key: Key) {
        match key {
            Key::Left => self.left = false,
            Key::Right => self.right = false,
            Key::Up => self.up = false,
            Key::Space => self.space = false,
        }
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.pointer = Some(Vec2::new(x, y));
        self.pointer_pressed = true;
    }

    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        if self.pointer.is_some() {
            self.pointer = Some(Vec2::new(x, y));
        }
    }

    pub fn pointer_up(&mut self) {
        self.pointer = None;
    }

    /// Fold the current device state into this tick's intent.
    ///
    /// `player_x` anchors the pointer deadzone comparison.
    pub fn sample(&mut self, player_x: f32) -> TickInput {
        let mut move_dir = if self.left {
            -1.0
        } else if self.right {
            1.0
        } else {
            0.0
        };

        if let Some(pointer) = self.pointer {
            move_dir = if pointer.x < player_x - POINTER_DEADZONE {
                -1.0
            } else if pointer.x > player_x + POINTER_DEADZONE {
                1.0
            } else {
                0.0
            };
        }

        let jump = self.up && !self.up_was_down;
        self.up_was_down = self.up;

        let pointer_pressed = std::mem::take(&mut self.pointer_pressed);

        TickInput {
            move_dir,
            jump,
            // Space re-requests every tick held; the fire-rate cooldown
            // suppresses all but one throw per window.
            throw: self.space || pointer_pressed,
            pointer_pressed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyboard_horizontal_intent() {
        let mut input = InputAdapter::new();
        assert_eq!(input.sample(100.0).move_dir, 0.0);

        input.key_down(Key::Right);
        assert_eq!(input.sample(100.0).move_dir, 1.0);

        input.key_up(Key::Right);
        input.key_down(Key::Left);
        assert_eq!(input.sample(100.0).move_dir, -1.0);
    }

    #[test]
    fn test_jump_is_edge_triggered() {
        let mut input = InputAdapter::new();
        input.key_down(Key::Up);
        assert!(input.sample(100.0).jump);
        // Still held: no second jump
        assert!(!input.sample(100.0).jump);

        input.key_up(Key::Up);
        input.sample(100.0);
        input.key_down(Key::Up);
        assert!(input.sample(100.0).jump);
    }

    #[test]
    fn test_space_requests_throw_every_tick_held() {
        let mut input = InputAdapter::new();
        input.key_down(Key::Space);
        assert!(input.sample(100.0).throw);
        assert!(input.sample(100.0).throw);
        input.key_up(Key::Space);
        assert!(!input.sample(100.0).throw);
    }

    #[test]
    fn test_pointer_steers_with_deadzone() {
        let mut input = InputAdapter::new();
        input.pointer_down(300.0, 400.0);
        assert_eq!(input.sample(100.0).move_dir, 1.0);

        input.pointer_moved(50.0, 400.0);
        assert_eq!(input.sample(100.0).move_dir, -1.0);

        // Inside the ±20 px deadzone
        input.pointer_moved(110.0, 400.0);
        assert_eq!(input.sample(100.0).move_dir, 0.0);
    }

    #[test]
    fn test_pointer_overrides_keyboard_while_held() {
        let mut input = InputAdapter::new();
        input.key_down(Key::Left);
        input.pointer_down(300.0, 400.0);
        assert_eq!(input.sample(100.0).move_dir, 1.0);

        input.pointer_up();
        assert_eq!(input.sample(100.0).move_dir, -1.0);
    }

    #[test]
    fn test_pointer_down_edge_throws_once() {
        let mut input = InputAdapter::new();
        input.pointer_down(300.0, 400.0);

        let first = input.sample(100.0);
        assert!(first.throw);
        assert!(first.pointer_pressed);

        // Held, not re-pressed: no new edge
        let second = input.sample(100.0);
        assert!(!second.throw);
        assert!(!second.pointer_pressed);
    }

    #[test]
    fn test_pointer_move_without_press_is_ignored() {
        let mut input = InputAdapter::new();
        input.pointer_moved(700.0, 300.0);
        assert_eq!(input.sample(100.0).move_dir, 0.0);
    }
}
