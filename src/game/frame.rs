//! Per-frame context handed to the player controller.

use crate::camera::{CameraProvider, Viewport};
use crate::input::{InputAction, InputSnapshot, KeyBindings};

/// Everything the controller reads for one simulation step.
pub struct FrameContext<'a> {
    /// Seconds since the previous frame
    pub dt: f32,
    /// Monotonic session clock in seconds, already advanced by `dt`
    pub elapsed: f32,
    pub input: &'a InputSnapshot,
    pub bindings: &'a KeyBindings,
    pub camera: &'a dyn CameraProvider,
    pub viewport: Viewport,
}

impl FrameContext<'_> {
    #[inline]
    pub fn action(&self, action: InputAction) -> bool {
        self.input.is_action_pressed(self.bindings, action)
    }
}
