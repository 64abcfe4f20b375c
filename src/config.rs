use crate::defaults;
use crate::error::{Result, VocoachError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub audio: AudioConfig,
    pub stt: SttConfig,
    pub chat: ChatConfig,
}

/// Audio capture configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AudioConfig {
    pub device: Option<String>,
    pub sample_rate: u32,
}

/// Speech-to-text configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SttConfig {
    pub model: String,
    pub language: String,
    pub threads: Option<usize>,
}

/// Chat-completion endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChatConfig {
    pub model: String,
    pub base_url: String,
    pub max_tokens: u32,
    pub temperature: f64,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            device: None,
            sample_rate: defaults::SAMPLE_RATE,
        }
    }
}

impl Default for SttConfig {
    fn default() -> Self {
        Self {
            model: defaults::DEFAULT_MODEL.to_string(),
            language: defaults::DEFAULT_LANGUAGE.to_string(),
            threads: None,
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            model: defaults::CHAT_MODEL.to_string(),
            base_url: defaults::CHAT_BASE_URL.to_string(),
            max_tokens: defaults::CHAT_MAX_TOKENS,
            temperature: defaults::CHAT_TEMPERATURE,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Returns an error if the file contains invalid TOML.
    /// Missing fields will use default values.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                VocoachError::ConfigFileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                VocoachError::Io(e)
            }
        })?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from a file or return defaults if the file doesn't exist
    ///
    /// Only returns defaults if the file is missing; invalid TOML is an error.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match Self::load(path) {
            Ok(config) => Ok(config),
            Err(VocoachError::ConfigFileNotFound { .. }) => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }

    /// Apply environment variable overrides
    ///
    /// Supported environment variables:
    /// - VOCOACH_MODEL → stt.model
    /// - VOCOACH_LANGUAGE → stt.language
    /// - VOCOACH_AUDIO_DEVICE → audio.device
    /// - VOCOACH_CHAT_MODEL → chat.model
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(model) = std::env::var("VOCOACH_MODEL")
            && !model.is_empty()
        {
            self.stt.model = model;
        }

        if let Ok(language) = std::env::var("VOCOACH_LANGUAGE")
            && !language.is_empty()
        {
            self.stt.language = language;
        }

        if let Ok(device) = std::env::var("VOCOACH_AUDIO_DEVICE")
            && !device.is_empty()
        {
            self.audio.device = Some(device);
        }

        if let Ok(chat_model) = std::env::var("VOCOACH_CHAT_MODEL")
            && !chat_model.is_empty()
        {
            self.chat.model = chat_model;
        }

        self
    }

    /// Get the default configuration file path
    ///
    /// Returns ~/.config/vocoach/config.toml on Linux
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("vocoach")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_uses_shared_constants() {
        let config = Config::default();
        assert_eq!(config.audio.sample_rate, defaults::SAMPLE_RATE);
        assert_eq!(config.stt.model, defaults::DEFAULT_MODEL);
        assert_eq!(config.stt.language, defaults::DEFAULT_LANGUAGE);
        assert_eq!(config.chat.model, defaults::CHAT_MODEL);
        assert_eq!(config.chat.max_tokens, defaults::CHAT_MAX_TOKENS);
    }

    #[test]
    fn load_parses_partial_toml_with_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[stt]\nmodel = \"small.en\"\n\n[chat]\ntemperature = 0.9"
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.stt.model, "small.en");
        // Unset fields fall back to defaults
        assert_eq!(config.stt.language, defaults::DEFAULT_LANGUAGE);
        assert!((config.chat.temperature - 0.9).abs() < f64::EPSILON);
        assert_eq!(config.chat.model, defaults::CHAT_MODEL);
    }

    #[test]
    fn load_rejects_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "stt = model =").unwrap();

        assert!(Config::load(file.path()).is_err());
    }

    #[test]
    fn load_or_default_returns_defaults_for_missing_file() {
        let config = Config::load_or_default(Path::new("/nonexistent/vocoach.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_or_default_propagates_parse_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[[[not toml").unwrap();

        assert!(Config::load_or_default(file.path()).is_err());
    }

    #[test]
    fn env_overrides_replace_configured_values() {
        // SAFETY: tests that mutate the environment run in this process only
        unsafe {
            std::env::set_var("VOCOACH_MODEL", "tiny.en");
            std::env::set_var("VOCOACH_LANGUAGE", "de");
        }

        let config = Config::default().with_env_overrides();
        assert_eq!(config.stt.model, "tiny.en");
        assert_eq!(config.stt.language, "de");

        unsafe {
            std::env::remove_var("VOCOACH_MODEL");
            std::env::remove_var("VOCOACH_LANGUAGE");
        }
    }

    #[test]
    fn default_path_ends_with_crate_config() {
        let path = Config::default_path();
        assert!(path.ends_with("vocoach/config.toml"));
    }
}
