//! Whisper model metadata catalog.
//!
//! Models are the ggml conversions published on HuggingFace by the
//! whisper.cpp project.

use crate::error::{Result, VocoachError};

/// Metadata for a Whisper model.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelInfo {
    /// Model identifier (e.g., "tiny.en", "base", "large")
    pub name: &'static str,
    /// Approximate model size in megabytes
    pub size_mb: u32,
    /// Whether this model supports English only
    pub english_only: bool,
}

impl ModelInfo {
    /// Download URL on HuggingFace.
    pub fn url(&self) -> String {
        format!(
            "https://huggingface.co/ggerganov/whisper.cpp/resolve/main/ggml-{}.bin",
            self.name
        )
    }
}

/// Catalog of available Whisper models.
///
/// Models range from tiny (75 MB, fast, lower accuracy) to large (3094 MB,
/// slower, highest accuracy). The `.en` suffix indicates English-only models.
pub const MODELS: &[ModelInfo] = &[
    ModelInfo {
        name: "tiny.en",
        size_mb: 75,
        english_only: true,
    },
    ModelInfo {
        name: "tiny",
        size_mb: 75,
        english_only: false,
    },
    ModelInfo {
        name: "base.en",
        size_mb: 142,
        english_only: true,
    },
    ModelInfo {
        name: "base",
        size_mb: 142,
        english_only: false,
    },
    ModelInfo {
        name: "small.en",
        size_mb: 466,
        english_only: true,
    },
    ModelInfo {
        name: "small",
        size_mb: 466,
        english_only: false,
    },
    ModelInfo {
        name: "medium.en",
        size_mb: 1533,
        english_only: true,
    },
    ModelInfo {
        name: "medium",
        size_mb: 1533,
        english_only: false,
    },
    ModelInfo {
        name: "large",
        size_mb: 3094,
        english_only: false,
    },
];

/// Find a model by name, failing with `ModelUnknown` if it isn't cataloged.
pub fn get_model(name: &str) -> Result<&'static ModelInfo> {
    MODELS
        .iter()
        .find(|m| m.name == name)
        .ok_or_else(|| VocoachError::ModelUnknown {
            name: name.to_string(),
        })
}

/// Get all available models.
pub fn list_models() -> &'static [ModelInfo] {
    MODELS
}
