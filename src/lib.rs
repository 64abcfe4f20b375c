//! vocoach - Voice interview trainer
//!
//! Records spoken answers to a fixed interview question set, transcribes them
//! locally with Whisper, and asks a hosted chat model for an evaluation.

// Enforce error handling discipline
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::let_underscore_must_use)]

pub mod audio;
pub mod chat;
pub mod cli;
pub mod config;
pub mod defaults;
pub mod error;
pub mod interview;
pub mod models;
pub mod stt;
#[cfg(feature = "gui")]
pub mod ui;

// Core traits (capture → transcribe → evaluate)
pub use audio::recorder::AudioSource;
pub use chat::ChatCompleter;
pub use stt::transcriber::Transcriber;

// Pipeline
pub use interview::{Evaluation, Evaluator, QUESTIONS};

// Error handling
pub use error::{Result, VocoachError};

// Config
pub use config::Config;

/// Build version string with optional git commit hash.
///
/// Returns `"0.1.0+abc1234"` when git hash is available, `"0.1.0"` otherwise.
pub fn version_string() -> String {
    let version = env!("CARGO_PKG_VERSION");
    match option_env!("GIT_HASH") {
        Some(hash) if !hash.is_empty() => format!("{}+{}", version, hash),
        _ => version.to_string(),
    }
}
