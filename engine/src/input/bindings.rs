//! Key bindings
//!
//! One physical key per movement action. The table is plain data so it can
//! live in the game config and be remapped from JSON.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::KeyCode;

/// Logical keyboard actions the player controller reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Away from the camera
    MoveForward,
    /// Toward the camera
    MoveBack,
    MoveLeft,
    MoveRight,
    Jump,
}

/// Key assigned to each [`InputAction`]. Two actions may share a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub forward: KeyCode,
    pub back: KeyCode,
    pub left: KeyCode,
    pub right: KeyCode,
    pub jump: KeyCode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            forward: KeyCode::W,
            back: KeyCode::S,
            left: KeyCode::A,
            right: KeyCode::D,
            jump: KeyCode::Space,
        }
    }
}

impl KeyBindings {
    /// WASD plus Space.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key(&self, action: InputAction) -> KeyCode {
        match action {
            InputAction::MoveForward => self.forward,
            InputAction::MoveBack => self.back,
            InputAction::MoveLeft => self.left,
            InputAction::MoveRight => self.right,
            InputAction::Jump => self.jump,
        }
    }

    /// Assign `key` to `action`, replacing its previous key.
    pub fn set(&mut self, action: InputAction, key: KeyCode) {
        let slot = match action {
            InputAction::MoveForward => &mut self.forward,
            InputAction::MoveBack => &mut self.back,
            InputAction::MoveLeft => &mut self.left,
            InputAction::MoveRight => &mut self.right,
            InputAction::Jump => &mut self.jump,
        };
        *slot = key;
    }

    /// Whether the key assigned to `action` is among `pressed_keys`.
    /// An action mapped to [`KeyCode::Unknown`] never fires.
    pub fn is_action_pressed(&self, action: InputAction, pressed_keys: &HashSet<KeyCode>) -> bool {
        let key = self.key(action);
        key != KeyCode::Unknown && pressed_keys.contains(&key)
    }
}
