//! Per-answer transcription results and metrics.

/// Transcript and metrics for one answered (or skipped) question.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerRecord {
    /// Transcribed answer text, empty when the question went unanswered
    pub transcript: String,
    /// Wall-clock seconds spent transcribing this answer
    pub duration_secs: f64,
    /// Number of whitespace-separated words in the transcript
    pub word_count: usize,
}

impl AnswerRecord {
    /// Record for a question the candidate skipped.
    pub fn unanswered() -> Self {
        Self {
            transcript: String::new(),
            duration_secs: 0.0,
            word_count: 0,
        }
    }

    /// Build a record from a transcript and the time it took to produce.
    pub fn from_transcript(transcript: String, duration_secs: f64) -> Self {
        let word_count = count_words(&transcript);
        Self {
            transcript,
            duration_secs,
            word_count,
        }
    }
}

/// Count whitespace-separated words.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unanswered_record_is_all_zero() {
        let record = AnswerRecord::unanswered();
        assert!(record.transcript.is_empty());
        assert_eq!(record.duration_secs, 0.0);
        assert_eq!(record.word_count, 0);
    }

    #[test]
    fn word_count_splits_on_any_whitespace() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("   "), 0);
        assert_eq!(count_words("hello"), 1);
        assert_eq!(count_words("I am a software engineer"), 5);
        assert_eq!(count_words("  spaced \t out\nwords  "), 3);
    }

    #[test]
    fn from_transcript_counts_words() {
        let record = AnswerRecord::from_transcript("I enjoy solving hard problems".to_string(), 1.5);
        assert_eq!(record.word_count, 5);
        assert_eq!(record.duration_secs, 1.5);
    }
}
