//! The evaluation pipeline: transcribe recorded answers, send them to the
//! chat model in one request, and render the final report.

use crate::audio::wav;
use crate::chat::ChatCompleter;
use crate::defaults;
use crate::error::Result;
use crate::interview::answer::AnswerRecord;
use crate::interview::questions::QUESTIONS;
use crate::interview::{prompt, report};
use crate::stt::transcriber::Transcriber;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Result of evaluating a full interview.
#[derive(Debug, Clone)]
pub struct Evaluation {
    /// Markdown report: model reply plus the per-question metrics table
    pub report: String,
    /// Status line to display once the report is ready
    pub status: &'static str,
}

/// Runs the full interview evaluation pipeline.
///
/// Holds the transcriber and chat backend behind trait objects so tests can
/// substitute mocks for both.
pub struct Evaluator {
    transcriber: Arc<dyn Transcriber>,
    chat: Arc<dyn ChatCompleter>,
}

impl Evaluator {
    pub fn new(transcriber: Arc<dyn Transcriber>, chat: Arc<dyn ChatCompleter>) -> Self {
        Self { transcriber, chat }
    }

    /// Transcribe every answer, yielding one record per interview question.
    ///
    /// `answers` holds one optional WAV path per question; missing or `None`
    /// entries produce an unanswered record with zero duration and word
    /// count. Duration is the wall-clock time spent loading and transcribing
    /// the recording.
    pub fn transcribe_answers(&self, answers: &[Option<PathBuf>]) -> Result<Vec<AnswerRecord>> {
        let mut records = Vec::with_capacity(QUESTIONS.len());

        for i in 0..QUESTIONS.len() {
            let Some(Some(path)) = answers.get(i).map(|a| a.as_ref()) else {
                records.push(AnswerRecord::unanswered());
                continue;
            };

            let start = Instant::now();
            let samples = wav::load(path)?;
            let transcript = if samples.is_empty() {
                String::new()
            } else {
                self.transcriber.transcribe(&samples)?
            };
            let duration_secs = start.elapsed().as_secs_f64();

            log::debug!(
                "transcribed answer {} ({} words in {:.2}s)",
                i + 1,
                transcript.split_whitespace().count(),
                duration_secs
            );

            records.push(AnswerRecord::from_transcript(transcript, duration_secs));
        }

        Ok(records)
    }

    /// Run the full pipeline: transcribe all answers, request a single
    /// evaluation from the chat model, and render the Markdown report.
    pub fn evaluate(&self, answers: &[Option<PathBuf>]) -> Result<Evaluation> {
        let records = self.transcribe_answers(answers)?;

        let transcripts: Vec<String> = records.iter().map(|r| r.transcript.clone()).collect();
        let prompt = prompt::build_prompt(&transcripts);

        log::info!(
            "requesting evaluation from {} ({} answered questions)",
            self.chat.model_name(),
            records.iter().filter(|r| r.word_count > 0).count()
        );
        let reply = self.chat.complete(&prompt)?;

        Ok(Evaluation {
            report: report::render_report(&reply, &records),
            status: defaults::STATUS_COMPLETE,
        })
    }
}
