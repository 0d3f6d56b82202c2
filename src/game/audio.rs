//! Audio hand-off
//!
//! The simulation only decides *when* a sound plays. Playback belongs to an
//! external engine reached through [`AudioSink`]; calls are fire-and-forget.

/// Every sound effect the simulation can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundClip {
    Shoot,
    PlayerDamage,
    Dash,
    PlayerDeath,
    Jump,
    Land,
    EnemyShoot,
    EnemyDamage,
    EnemyDeath,
}

impl SoundClip {
    /// Asset path the playback engine should load for this clip.
    pub fn asset_path(self) -> &'static str {
        match self {
            SoundClip::Shoot => "audio/gunshot.wav",
            SoundClip::PlayerDamage => "audio/player_damage.wav",
            SoundClip::Dash => "audio/player_dash.wav",
            SoundClip::PlayerDeath => "audio/player_death.wav",
            SoundClip::Jump => "audio/player_jump.wav",
            SoundClip::Land => "audio/player_land.wav",
            SoundClip::EnemyShoot => "audio/enemy_shoot.wav",
            SoundClip::EnemyDamage => "audio/enemy_damage.wav",
            SoundClip::EnemyDeath => "audio/enemy_death.wav",
        }
    }
}

/// Non-blocking playback target.
pub trait AudioSink {
    fn play(&mut self, clip: SoundClip);
}

/// Discards every clip.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn play(&mut self, _clip: SoundClip) {}
}

/// Records every clip in play order.
#[derive(Debug, Clone, Default)]
pub struct AudioLog {
    played: Vec<SoundClip>,
}

impl AudioLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn played(&self) -> &[SoundClip] {
        &self.played
    }

    /// How many times `clip` has been played.
    pub fn count(&self, clip: SoundClip) -> usize {
        self.played.iter().filter(|&&c| c == clip).count()
    }

    pub fn clear(&mut self) {
        self.played.clear();
    }
}

impl AudioSink for AudioLog {
    fn play(&mut self, clip: SoundClip) {
        log::trace!("play {}", clip.asset_path());
        self.played.push(clip);
    }
}
