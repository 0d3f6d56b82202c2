//! Voxel Strike - Headless Demo
//!
//! Run with: `cargo run --bin voxel_strike [config.json]`
//!
//! Drives a scripted session at 60 fps with no window: the player walks
//! forward, sweeps the cursor across the screen, holds fire and dashes
//! every couple of seconds. Set `RUST_LOG=debug` to follow damage, deaths
//! and power-ups.

use std::process::ExitCode;

use voxel_strike_engine::game::{AudioLog, GameConfig, GameError, GameSession, ModelRegistry, SessionStatus, SoundClip};
use voxel_strike_engine::input::{KeyCode, MouseButton};

const FRAME_DT: f32 = 1.0 / 60.0;
const MAX_FRAMES: u32 = 60 * 30;
const DASH_EVERY: u32 = 120;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), GameError> {
    let config = match std::env::args().nth(1) {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    let [width, height] = config.window_size;

    let registry = ModelRegistry::with_default_models();
    let mut session = GameSession::with_audio(config, &registry, AudioLog::new())?;
    log::info!("starting scripted run ({} models registered)", registry.len());

    let input = session.input_mut();
    input.handle_key(KeyCode::W, true);
    input.set_button(MouseButton::Left, true);

    let mut frames = 0;
    while frames < MAX_FRAMES {
        frames += 1;

        // Sweep the cursor left to right across the upper half of the window
        let phase = (frames as f32 * FRAME_DT * 0.5).sin() * 0.5 + 0.5;
        let input = session.input_mut();
        input.set_cursor(phase * width, height * 0.3);
        input.set_button(MouseButton::Right, frames % DASH_EVERY == 0);

        if session.frame(FRAME_DT) == SessionStatus::PlayerDead {
            break;
        }
    }

    let player = &session.player().character;
    let audio = session.audio();
    log::info!(
        "finished after {frames} frames ({:.1}s): state {:?}, hp {}, position {:?}",
        session.elapsed(),
        player.state(),
        player.hp(),
        player.pos
    );
    log::info!(
        "shots {}, dashes {}, jumps {}, enemies left {}, pickups left {}",
        audio.count(SoundClip::Shoot),
        audio.count(SoundClip::Dash),
        audio.count(SoundClip::Jump),
        session.level().enemies().len(),
        session.level().pickups().len()
    );
    Ok(())
}
