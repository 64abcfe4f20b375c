use crate::error::{Result, VocoachError};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Trait for speech-to-text transcription.
///
/// This trait allows swapping implementations (real Whisper vs mock).
pub trait Transcriber: Send + Sync {
    /// Transcribe audio samples to text.
    ///
    /// # Arguments
    /// * `audio` - Audio samples as 16-bit PCM at 16kHz mono
    ///
    /// # Returns
    /// Transcribed text (trimmed) or error
    fn transcribe(&self, audio: &[i16]) -> Result<String>;

    /// Get the name of the loaded model
    fn model_name(&self) -> &str;

    /// Check if the transcriber is ready
    fn is_ready(&self) -> bool;
}

/// Implement Transcriber for Arc<T> to allow sharing across threads.
impl<T: Transcriber + ?Sized> Transcriber for Arc<T> {
    fn transcribe(&self, audio: &[i16]) -> Result<String> {
        (**self).transcribe(audio)
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }

    fn is_ready(&self) -> bool {
        (**self).is_ready()
    }
}

/// Mock transcriber for testing.
///
/// Returns a fixed response, or walks through a queue of responses when
/// configured with `with_responses` (the last one repeats once exhausted).
#[derive(Debug, Default)]
pub struct MockTranscriber {
    model_name: String,
    responses: Vec<String>,
    next_response: AtomicUsize,
    should_fail: bool,
}

impl MockTranscriber {
    /// Create a new mock transcriber with default settings
    pub fn new(model_name: &str) -> Self {
        Self {
            model_name: model_name.to_string(),
            responses: vec!["mock transcription".to_string()],
            next_response: AtomicUsize::new(0),
            should_fail: false,
        }
    }

    /// Configure the mock to return a specific response
    pub fn with_response(mut self, response: &str) -> Self {
        self.responses = vec![response.to_string()];
        self
    }

    /// Configure the mock to return responses in sequence, one per call
    pub fn with_responses(mut self, responses: &[&str]) -> Self {
        self.responses = responses.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Configure the mock to fail on transcribe
    pub fn with_failure(mut self) -> Self {
        self.should_fail = true;
        self
    }
}

impl Transcriber for MockTranscriber {
    fn transcribe(&self, _audio: &[i16]) -> Result<String> {
        if self.should_fail {
            return Err(VocoachError::Transcription {
                message: "mock transcription failure".to_string(),
            });
        }
        let index = self.next_response.fetch_add(1, Ordering::SeqCst);
        let response = self
            .responses
            .get(index)
            .or_else(|| self.responses.last())
            .cloned()
            .unwrap_or_default();
        Ok(response)
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }

    fn is_ready(&self) -> bool {
        !self.should_fail
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_returns_configured_response() {
        let transcriber = MockTranscriber::new("test-model").with_response("Hello, this is a test");

        let audio = vec![0i16; 1000];
        assert_eq!(transcriber.transcribe(&audio).unwrap(), "Hello, this is a test");
    }

    #[test]
    fn mock_walks_response_queue_in_order() {
        let transcriber =
            MockTranscriber::new("test-model").with_responses(&["first", "second", "third"]);

        let audio = vec![0i16; 100];
        assert_eq!(transcriber.transcribe(&audio).unwrap(), "first");
        assert_eq!(transcriber.transcribe(&audio).unwrap(), "second");
        assert_eq!(transcriber.transcribe(&audio).unwrap(), "third");
        // Exhausted queue repeats the last response
        assert_eq!(transcriber.transcribe(&audio).unwrap(), "third");
    }

    #[test]
    fn mock_returns_error_when_configured() {
        let transcriber = MockTranscriber::new("test-model").with_failure();

        let audio = vec![0i16; 1000];
        match transcriber.transcribe(&audio) {
            Err(VocoachError::Transcription { message }) => {
                assert_eq!(message, "mock transcription failure");
            }
            _ => panic!("Expected Transcription error"),
        }
    }

    #[test]
    fn mock_model_name_and_readiness() {
        let ready = MockTranscriber::new("whisper-base");
        assert_eq!(ready.model_name(), "whisper-base");
        assert!(ready.is_ready());

        let failing = MockTranscriber::new("whisper-base").with_failure();
        assert!(!failing.is_ready());
    }

    #[test]
    fn transcriber_trait_is_object_safe() {
        let transcriber: Box<dyn Transcriber> =
            Box::new(MockTranscriber::new("test-model").with_response("boxed test"));

        assert_eq!(transcriber.model_name(), "test-model");
        assert!(transcriber.is_ready());
        assert_eq!(transcriber.transcribe(&[0i16; 100]).unwrap(), "boxed test");
    }

    #[test]
    fn arc_dyn_transcriber_delegates() {
        let transcriber: Arc<dyn Transcriber> =
            Arc::new(MockTranscriber::new("shared").with_response("shared response"));

        assert_eq!(transcriber.transcribe(&[]).unwrap(), "shared response");
        assert_eq!(transcriber.model_name(), "shared");
    }

    #[test]
    fn mock_accepts_empty_and_large_audio() {
        let transcriber = MockTranscriber::new("test-model").with_response("ok");

        assert_eq!(transcriber.transcribe(&[]).unwrap(), "ok");
        // 10 seconds of 16kHz audio
        assert_eq!(transcriber.transcribe(&vec![0i16; 16000 * 10]).unwrap(), "ok");
    }
}
