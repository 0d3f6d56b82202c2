//! Keyboard key codes, decoupled from any windowing system.

use serde::{Deserialize, Serialize};

/// Keys the game can bind. Serialized by variant name ("W", "Space",
/// "ArrowUp") in config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    W,
    A,
    S,
    D,
    Space,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    Escape,
    Enter,
    ShiftLeft,
    ControlLeft,

    /// Anything the windowing layer could not map
    Unknown,
}
