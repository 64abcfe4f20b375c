use crate::error::{Result, VocoachError};

/// Trait for audio source devices.
///
/// This trait allows swapping implementations (real audio device vs mock).
pub trait AudioSource: Send {
    /// Start capturing audio from the source.
    fn start(&mut self) -> Result<()>;

    /// Stop capturing audio from the source.
    fn stop(&mut self) -> Result<()>;

    /// Drain buffered audio samples from the source.
    ///
    /// # Returns
    /// Vector of 16-bit PCM audio samples at 16kHz mono, or an error
    fn read_samples(&mut self) -> Result<Vec<i16>>;
}

/// Mock audio source for testing
#[derive(Debug, Clone, Default)]
pub struct MockAudioSource {
    is_started: bool,
    samples: Vec<i16>,
    fail_with: Option<String>,
}

impl MockAudioSource {
    /// Create a new mock audio source that yields silence
    pub fn new() -> Self {
        Self {
            is_started: false,
            samples: vec![0i16; 160],
            fail_with: None,
        }
    }

    /// Configure the mock to return specific samples
    pub fn with_samples(mut self, samples: Vec<i16>) -> Self {
        self.samples = samples;
        self
    }

    /// Configure the mock to fail every operation with the given message
    pub fn with_failure(mut self, message: &str) -> Self {
        self.fail_with = Some(message.to_string());
        self
    }

    /// Check if the audio source is started
    pub fn is_started(&self) -> bool {
        self.is_started
    }

    fn fail(&self) -> Option<VocoachError> {
        self.fail_with
            .as_ref()
            .map(|message| VocoachError::AudioCapture {
                message: message.clone(),
            })
    }
}

impl AudioSource for MockAudioSource {
    fn start(&mut self) -> Result<()> {
        if let Some(err) = self.fail() {
            return Err(err);
        }
        self.is_started = true;
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        if let Some(err) = self.fail() {
            return Err(err);
        }
        self.is_started = false;
        Ok(())
    }

    fn read_samples(&mut self) -> Result<Vec<i16>> {
        if let Some(err) = self.fail() {
            return Err(err);
        }
        Ok(self.samples.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_returns_configured_samples() {
        let test_samples = vec![100i16, 200, 300, 400, 500];
        let mut source = MockAudioSource::new().with_samples(test_samples.clone());

        assert_eq!(source.read_samples().unwrap(), test_samples);
    }

    #[test]
    fn mock_defaults_to_silence() {
        let mut source = MockAudioSource::new();

        let samples = source.read_samples().unwrap();
        assert_eq!(samples.len(), 160);
        assert!(samples.iter().all(|&s| s == 0));
    }

    #[test]
    fn mock_start_stop_state_management() {
        let mut source = MockAudioSource::new();

        assert!(!source.is_started());
        source.start().unwrap();
        assert!(source.is_started());
        source.stop().unwrap();
        assert!(!source.is_started());
    }

    #[test]
    fn mock_failure_covers_all_operations() {
        let mut source = MockAudioSource::new().with_failure("device unplugged");

        for result in [source.start(), source.stop()] {
            match result {
                Err(VocoachError::AudioCapture { message }) => {
                    assert_eq!(message, "device unplugged");
                }
                other => panic!("expected AudioCapture error, got {:?}", other),
            }
        }
        assert!(source.read_samples().is_err());
        assert!(!source.is_started());
    }

    #[test]
    fn audio_source_trait_is_object_safe() {
        let mut source: Box<dyn AudioSource> =
            Box::new(MockAudioSource::new().with_samples(vec![1i16, 2, 3]));

        source.start().unwrap();
        assert_eq!(source.read_samples().unwrap(), vec![1i16, 2, 3]);
        source.stop().unwrap();
    }
}
