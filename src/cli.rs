//! Command-line interface for vocoach
//!
//! Provides argument parsing using clap derive macros.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Voice interview trainer
#[derive(Parser, Debug)]
#[command(name = "vocoach", version = crate::version_string(), about = "Voice interview trainer")]
pub struct Cli {
    /// Subcommand to execute (default: launch the trainer window)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Suppress status output (quiet mode)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Audio input device (e.g., pipewire)
    #[arg(long, value_name = "DEVICE")]
    pub device: Option<String>,

    /// Whisper model (default: base, multilingual). Use base.en for English-only optimized
    #[arg(long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Language code for transcription (default: auto-detect). Examples: auto, en, de, es
    #[arg(long, value_name = "LANG")]
    pub language: Option<String>,

    /// Prevent automatic model download if the configured model is missing
    #[arg(long)]
    pub no_download: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate pre-recorded WAV answers headlessly and print the report
    Evaluate {
        /// Up to five WAV files, one per question in order; omitted
        /// trailing questions count as unanswered
        #[arg(value_name = "WAV")]
        answers: Vec<PathBuf>,
    },

    /// List available audio input devices
    Devices,

    /// Manage Whisper models
    Models {
        /// Action to perform
        #[command(subcommand)]
        action: ModelsAction,
    },
}

/// Model management actions
#[derive(Subcommand, Debug)]
pub enum ModelsAction {
    /// List known models and their installation state
    List,

    /// Download a model into the local cache
    Install {
        /// Model name (e.g., base, base.en, small)
        name: String,
    },
}
