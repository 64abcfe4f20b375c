//! Background evaluation worker.
//!
//! Transcription and the completion request can take many seconds, so they
//! run on a plain thread and report back over a channel the UI polls.

use crate::interview::{Evaluation, Evaluator};
use crossbeam_channel::Receiver;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;

/// Message sent from the worker thread to the UI.
#[derive(Debug, Clone)]
pub enum WorkerMessage {
    Finished(Evaluation),
    Failed(String),
}

/// Spawn a background evaluation of the given answers.
///
/// The worker sends exactly one message and exits.
pub fn spawn(evaluator: Arc<Evaluator>, answers: Vec<Option<PathBuf>>) -> Receiver<WorkerMessage> {
    let (tx, rx) = crossbeam_channel::bounded::<WorkerMessage>(1);

    thread::spawn(move || {
        let message = match evaluator.evaluate(&answers) {
            Ok(evaluation) => WorkerMessage::Finished(evaluation),
            Err(e) => WorkerMessage::Failed(e.to_string()),
        };
        let _ = tx.send(message);
    });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::MockChatCompleter;
    use crate::stt::transcriber::MockTranscriber;
    use std::time::Duration;

    fn mock_evaluator(fail: bool) -> Arc<Evaluator> {
        let transcriber = Arc::new(MockTranscriber::new("mock"));
        let chat = if fail {
            Arc::new(MockChatCompleter::new().with_failure())
        } else {
            Arc::new(MockChatCompleter::new().with_response("Hired"))
        };
        Arc::new(Evaluator::new(transcriber, chat))
    }

    #[test]
    fn worker_reports_a_finished_evaluation() {
        let rx = spawn(mock_evaluator(false), vec![None; 5]);

        match rx.recv_timeout(Duration::from_secs(5)).unwrap() {
            WorkerMessage::Finished(evaluation) => {
                assert!(evaluation.report.contains("Hired"));
            }
            WorkerMessage::Failed(e) => panic!("unexpected failure: {}", e),
        }
    }

    #[test]
    fn worker_reports_failures_as_messages() {
        let rx = spawn(mock_evaluator(true), vec![None; 5]);

        match rx.recv_timeout(Duration::from_secs(5)).unwrap() {
            WorkerMessage::Failed(message) => {
                assert!(message.contains("mock completion failure"));
            }
            WorkerMessage::Finished(_) => panic!("expected failure"),
        }
    }
}
