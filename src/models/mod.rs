//! Whisper model catalog and local installation.

pub mod catalog;
pub mod download;

pub use catalog::{ModelInfo, get_model, list_models};
pub use download::{ensure_model, is_model_installed, model_path, models_dir};
