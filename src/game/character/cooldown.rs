//! Timestamp-based cooldown gate.
//!
//! All actors share the session's monotonic clock; a cooldown only stores
//! when it last fired and how long it must wait.

/// Gate that permits an action once `duration` seconds have passed since
/// the last trigger. A never-triggered cooldown is always ready.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cooldown {
    duration: f32,
    last: Option<f32>,
}

impl Cooldown {
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            last: None,
        }
    }

    #[inline]
    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn set_duration(&mut self, duration: f32) {
        self.duration = duration;
    }

    #[inline]
    pub fn last_triggered(&self) -> Option<f32> {
        self.last
    }

    /// True if the action may run at `now`.
    pub fn ready(&self, now: f32) -> bool {
        match self.last {
            None => true,
            Some(last) => now - last >= self.duration,
        }
    }

    pub fn trigger(&mut self, now: f32) {
        self.last = Some(now);
    }

    /// Seconds since the last trigger, `None` if never triggered.
    pub fn elapsed(&self, now: f32) -> Option<f32> {
        self.last.map(|last| now - last)
    }

    /// Forget the last trigger.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
