//! Default configuration constants for vocoach.
//!
//! Shared constants used across configuration types and the evaluation
//! pipeline, kept in one place to eliminate duplication.

/// Default audio sample rate in Hz.
///
/// 16kHz is the standard for speech recognition and what Whisper expects.
pub const SAMPLE_RATE: u32 = 16000;

/// Default Whisper model name.
///
/// "base" (multilingual) supports auto-detection of any language.
/// Use "base.en" explicitly for English-only optimized transcription.
pub const DEFAULT_MODEL: &str = "base";

/// Default language code for transcription.
///
/// "auto" lets Whisper detect the spoken language automatically.
pub const DEFAULT_LANGUAGE: &str = "auto";

/// Language value that triggers automatic language detection.
pub const AUTO_LANGUAGE: &str = "auto";

/// Suffix for English-only model variants.
pub const ENGLISH_ONLY_SUFFIX: &str = ".en";

/// Remote chat-completion model identifier.
pub const CHAT_MODEL: &str = "openai/gpt-oss-20b";

/// Base URL of the OpenAI-compatible chat-completion endpoint.
pub const CHAT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Environment variable holding the chat API key.
pub const API_KEY_ENV: &str = "GROQ_API_KEY";

/// Maximum number of tokens requested per completion.
pub const CHAT_MAX_TOKENS: u32 = 700;

/// Sampling temperature for the evaluation call.
pub const CHAT_TEMPERATURE: f64 = 0.4;

/// Fixed system instruction sent with every evaluation call.
pub const CHAT_SYSTEM_PROMPT: &str = "You are a professional interviewer evaluator.";

/// Status line shown before the first submission.
pub const STATUS_WAITING: &str = "Waiting...";

/// Status line shown while a submission is being evaluated.
pub const STATUS_PROCESSING: &str = "⏳ Processing answers. Please wait...";

/// Status line shown once a report has been rendered.
pub const STATUS_COMPLETE: &str = "✅ Evaluation complete";

/// Report the GPU backend compiled into this build.
///
/// Only one GPU backend can be active at a time; if none is enabled,
/// returns "CPU".
pub fn gpu_backend() -> &'static str {
    if cfg!(feature = "cuda") {
        "CUDA"
    } else if cfg!(feature = "vulkan") {
        "Vulkan"
    } else {
        "CPU"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gpu_backend_matches_compiled_feature() {
        let expected = if cfg!(feature = "cuda") {
            "CUDA"
        } else if cfg!(feature = "vulkan") {
            "Vulkan"
        } else {
            "CPU"
        };
        assert_eq!(gpu_backend(), expected);
    }

    #[test]
    fn chat_parameters_match_hosted_deployment() {
        assert_eq!(CHAT_MAX_TOKENS, 700);
        assert!((CHAT_TEMPERATURE - 0.4).abs() < f64::EPSILON);
        assert!(CHAT_BASE_URL.starts_with("https://"));
    }
}
