//! Model-swap animation.
//!
//! Characters animate by cycling through a list of voxel models. Alive
//! actors loop their idle list; dying actors play the death list once.

use super::cooldown::Cooldown;
use crate::game::error::GameError;
use crate::game::model::{ModelHandle, ModelRegistry};

/// Alive and death model lists, resolved from the registry.
#[derive(Debug, Clone)]
pub struct ModelSet {
    alive: Vec<ModelHandle>,
    death: Vec<ModelHandle>,
}

impl ModelSet {
    /// Resolve both lists; either being empty or naming an unknown model
    /// is an error.
    pub fn resolve<S: AsRef<str>>(
        registry: &ModelRegistry,
        alive: &[S],
        death: &[S],
    ) -> Result<Self, GameError> {
        if alive.is_empty() {
            return Err(GameError::EmptyModelSet("alive"));
        }
        if death.is_empty() {
            return Err(GameError::EmptyModelSet("death"));
        }
        Ok(Self {
            alive: registry.resolve(alive)?,
            death: registry.resolve(death)?,
        })
    }

    #[inline]
    pub fn alive(&self) -> &[ModelHandle] {
        &self.alive
    }

    #[inline]
    pub fn death(&self) -> &[ModelHandle] {
        &self.death
    }
}

/// What one call to [`Animation::advance`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationStep {
    /// Delay not yet elapsed
    Unchanged,
    /// Moved to the next frame
    Advanced,
    /// The death animation tried to move past its last frame
    DeathFinished,
}

/// Frame cursor over a [`ModelSet`].
#[derive(Debug, Clone)]
pub struct Animation {
    index: usize,
    timer: Cooldown,
    dying_delay: f32,
}

impl Animation {
    /// Cursor at frame 0. The first step waits `delay` from clock zero.
    pub fn new(delay: f32, dying_delay: f32) -> Self {
        let mut timer = Cooldown::new(delay);
        timer.trigger(0.0);
        Self {
            index: 0,
            timer,
            dying_delay,
        }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn delay(&self) -> f32 {
        self.timer.duration()
    }

    /// Back to frame 0 without touching the timer.
    pub fn rewind(&mut self) {
        self.index = 0;
    }

    /// Switch to the death list: restart at frame 0 with the shorter delay.
    pub fn start_dying(&mut self, now: f32) {
        self.index = 0;
        self.timer.set_duration(self.dying_delay);
        self.timer.trigger(now);
    }

    /// Step the cursor if the delay has elapsed.
    ///
    /// `frame_count` is the length of the list selected by the actor's
    /// state; `dying` selects play-once instead of looping.
    pub fn advance(&mut self, now: f32, frame_count: usize, dying: bool) -> AnimationStep {
        if !self.timer.ready(now) {
            return AnimationStep::Unchanged;
        }
        self.timer.trigger(now);

        if dying {
            if self.index + 1 >= frame_count {
                return AnimationStep::DeathFinished;
            }
            self.index += 1;
        } else {
            self.index = (self.index + 1) % frame_count.max(1);
        }
        AnimationStep::Advanced
    }
}
