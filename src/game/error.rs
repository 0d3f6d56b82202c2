//! Game error type
//!
//! Failures here are construction-time problems (missing models, bad
//! configuration). Per-frame simulation never returns errors; degenerate
//! geometry is handled in place.

use std::path::PathBuf;

/// Errors raised while setting up actors, levels or sessions.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// A model name was looked up before being registered.
    #[error("model '{0}' is not registered")]
    UnknownModel(String),
    /// An actor was configured without any models for one of its states.
    #[error("{0} model list is empty")]
    EmptyModelSet(&'static str),
    /// An actor handle no longer refers to a live actor.
    #[error("actor {0} does not exist")]
    UnknownActor(u32),
    /// The configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The configuration file is not valid JSON for [`GameConfig`](super::GameConfig).
    #[error("invalid config: {0}")]
    ConfigJson(#[from] serde_json::Error),
}
