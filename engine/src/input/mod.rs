//! Input Module
//!
//! Platform-agnostic input handling. The windowing layer feeds key and
//! mouse events into an [`InputSnapshot`]; the game samples the snapshot
//! once per frame.
//!
//! # Example
//!
//! ```rust,ignore
//! use voxel_strike_engine::input::{InputSnapshot, KeyCode, MouseButton};
//!
//! let mut input = InputSnapshot::new();
//! input.handle_key(KeyCode::W, true);
//! input.set_button(MouseButton::Left, true);
//! input.set_cursor(400.0, 300.0);
//! ```

pub mod bindings;
pub mod keyboard;
pub mod mouse;

use std::collections::HashSet;

use glam::Vec2;

pub use bindings::{InputAction, KeyBindings};
pub use keyboard::KeyCode;
pub use mouse::{ButtonState, MouseButton};

/// Input state sampled once per frame.
#[derive(Debug, Clone, Default)]
pub struct InputSnapshot {
    /// Keys currently held down
    pressed: HashSet<KeyCode>,
    /// Left (fire) and right (dash) buttons
    pub buttons: ButtonState,
    /// Cursor position in window pixels, y growing downward
    pub cursor: Vec2,
    /// Vertical scroll since the last frame
    pub scroll: f32,
}

impl InputSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press or release.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) {
        if pressed {
            self.pressed.insert(key);
        } else {
            self.pressed.remove(&key);
        }
    }

    #[inline]
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }

    pub fn pressed_keys(&self) -> &HashSet<KeyCode> {
        &self.pressed
    }

    /// Whether the key bound to `action` is held.
    pub fn is_action_pressed(&self, bindings: &KeyBindings, action: InputAction) -> bool {
        bindings.is_action_pressed(action, &self.pressed)
    }

    pub fn set_button(&mut self, button: MouseButton, pressed: bool) {
        self.buttons.set(button, pressed);
    }

    #[inline]
    pub fn fire_held(&self) -> bool {
        self.buttons.left
    }

    #[inline]
    pub fn dash_held(&self) -> bool {
        self.buttons.right
    }

    pub fn set_cursor(&mut self, x: f32, y: f32) {
        self.cursor = Vec2::new(x, y);
    }

    pub fn set_scroll(&mut self, offset: f32) {
        self.scroll = offset;
    }
}
