//! Error types for vocoach.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VocoachError {
    // Configuration errors
    #[error("Configuration file not found at {path}")]
    ConfigFileNotFound { path: String },

    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    // Audio errors
    #[error("Audio device not found: {device}")]
    AudioDeviceNotFound { device: String },

    #[error("Audio capture failed: {message}")]
    AudioCapture { message: String },

    // Transcription errors
    #[error("Transcription model not found at {path}")]
    TranscriptionModelNotFound { path: String },

    #[error("Transcription inference failed: {message}")]
    TranscriptionInferenceFailed { message: String },

    #[error("Transcription error: {message}")]
    Transcription { message: String },

    // Chat completion errors
    #[error("Chat API key not set; export {env_var} to enable evaluation")]
    ChatAuth { env_var: String },

    #[error("Chat completion request failed: {message}")]
    ChatRequest { message: String },

    #[error("Malformed chat completion response: {message}")]
    ChatResponse { message: String },

    // Model management errors
    #[error("Unknown model: {name}")]
    ModelUnknown { name: String },

    #[error("Model download failed: {message}")]
    ModelDownload { message: String },

    // General I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// Type alias for convenience
pub type Result<T> = std::result::Result<T, VocoachError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_config_file_not_found_display() {
        let error = VocoachError::ConfigFileNotFound {
            path: "/path/to/config.toml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found at /path/to/config.toml"
        );
    }

    #[test]
    fn test_audio_device_not_found_display() {
        let error = VocoachError::AudioDeviceNotFound {
            device: "default".to_string(),
        };
        assert_eq!(error.to_string(), "Audio device not found: default");
    }

    #[test]
    fn test_transcription_model_not_found_display() {
        let error = VocoachError::TranscriptionModelNotFound {
            path: "/models/ggml-base.bin".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Transcription model not found at /models/ggml-base.bin"
        );
    }

    #[test]
    fn test_chat_auth_display() {
        let error = VocoachError::ChatAuth {
            env_var: "GROQ_API_KEY".to_string(),
        };
        assert!(error.to_string().contains("GROQ_API_KEY"));
    }

    #[test]
    fn test_chat_request_display() {
        let error = VocoachError::ChatRequest {
            message: "connection refused".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Chat completion request failed: connection refused"
        );
    }

    #[test]
    fn test_chat_response_display() {
        let error = VocoachError::ChatResponse {
            message: "no choices".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Malformed chat completion response: no choices"
        );
    }

    #[test]
    fn test_model_unknown_display() {
        let error = VocoachError::ModelUnknown {
            name: "gigantic".to_string(),
        };
        assert_eq!(error.to_string(), "Unknown model: gigantic");
    }

    #[test]
    fn test_from_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error: VocoachError = io_error.into();
        assert!(error.to_string().contains("file not found"));
    }

    #[test]
    fn test_from_toml_error() {
        let toml_str = "invalid = toml = syntax";
        let toml_error = toml::from_str::<toml::Value>(toml_str).unwrap_err();
        let error: VocoachError = toml_error.into();
        assert!(error.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<VocoachError>();
        assert_sync::<VocoachError>();
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<i32> {
            Ok(42)
        }
        assert_eq!(returns_result().unwrap(), 42);
    }
}
