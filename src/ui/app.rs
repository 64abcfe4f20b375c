use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::Receiver;
use iced::widget::{button, column, container, row, scrollable, text};
use iced::{Element, Length, Subscription, Task};

use crate::audio::capture::CpalAudioSource;
use crate::audio::recorder::AudioSource;
use crate::audio::wav;
use crate::defaults;
use crate::interview::questions::label;
use crate::interview::{Evaluator, QUESTIONS};
use crate::ui::worker::{self, WorkerMessage};

#[derive(Debug, Clone)]
pub enum Message {
    ToggleRecord(usize),
    Submit,
    PollWorker,
}

pub struct App {
    evaluator: Arc<Evaluator>,
    device: Option<String>,
    /// Directory holding this session's recordings, removed on exit
    recordings_dir: Arc<tempfile::TempDir>,
    /// One optional recording per question
    answers: Vec<Option<PathBuf>>,
    /// Active recording, if any: question index plus the live capture
    recorder: Option<(usize, CpalAudioSource)>,
    worker: Option<Receiver<WorkerMessage>>,
    report: String,
    status: String,
}

impl App {
    pub fn new(
        evaluator: Arc<Evaluator>,
        device: Option<String>,
        recordings_dir: Arc<tempfile::TempDir>,
    ) -> (Self, Task<Message>) {
        (
            Self {
                evaluator,
                device,
                recordings_dir,
                answers: vec![None; QUESTIONS.len()],
                recorder: None,
                worker: None,
                report: String::new(),
                status: defaults::STATUS_WAITING.to_string(),
            },
            Task::none(),
        )
    }

    /// Stop the active recording and save it as that question's answer.
    fn stop_recording(&mut self) {
        let Some((index, mut source)) = self.recorder.take() else {
            return;
        };

        let result = source
            .stop()
            .and_then(|_| source.read_samples())
            .and_then(|samples| {
                let path = self
                    .recordings_dir
                    .path()
                    .join(format!("answer_q{}.wav", index + 1));
                wav::save(&path, &samples)?;
                Ok(path)
            });

        match result {
            Ok(path) => {
                log::debug!("saved answer {} to {}", index + 1, path.display());
                self.answers[index] = Some(path);
            }
            Err(e) => {
                self.status = format!("Recording failed: {}", e);
            }
        }
    }

    fn start_recording(&mut self, index: usize) {
        let result = CpalAudioSource::new(self.device.as_deref()).and_then(|mut source| {
            source.start()?;
            Ok(source)
        });

        match result {
            Ok(source) => {
                self.recorder = Some((index, source));
            }
            Err(e) => {
                self.status = format!("Could not start recording: {}", e);
            }
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ToggleRecord(index) => {
                // Re-recording while an evaluation runs would race the worker
                if self.worker.is_some() {
                    return Task::none();
                }

                match &self.recorder {
                    Some((active, _)) if *active == index => {
                        self.stop_recording();
                    }
                    Some(_) => {
                        // Switching questions finishes the current recording first
                        self.stop_recording();
                        self.start_recording(index);
                    }
                    None => {
                        self.start_recording(index);
                    }
                }
            }
            Message::Submit => {
                if self.worker.is_some() {
                    return Task::none();
                }
                self.stop_recording();
                self.status = defaults::STATUS_PROCESSING.to_string();
                self.worker = Some(worker::spawn(
                    Arc::clone(&self.evaluator),
                    self.answers.clone(),
                ));
            }
            Message::PollWorker => {
                let Some(rx) = &self.worker else {
                    return Task::none();
                };
                match rx.try_recv() {
                    Ok(WorkerMessage::Finished(evaluation)) => {
                        self.report = evaluation.report;
                        self.status = evaluation.status.to_string();
                        self.worker = None;
                    }
                    Ok(WorkerMessage::Failed(message)) => {
                        self.status = format!("Evaluation failed: {}", message);
                        self.worker = None;
                    }
                    Err(_) => {}
                }
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let title = text("\u{1F3A4} Interview Trainer AI").size(24);

        let question_rows = QUESTIONS.iter().enumerate().map(|(i, question)| {
            let recording_this = matches!(&self.recorder, Some((active, _)) if *active == i);
            let record_label = if recording_this {
                "\u{23F9} Stop"
            } else {
                "\u{23FA} Record"
            };
            let answered = if self.answers[i].is_some() {
                "recorded"
            } else {
                ""
            };

            row![
                text(format!("{}: {}", label(i), question))
                    .size(14)
                    .width(Length::Fill),
                text(answered).size(12),
                button(text(record_label).size(13)).on_press(Message::ToggleRecord(i)),
            ]
            .spacing(12)
            .align_y(iced::Alignment::Center)
            .into()
        });

        let questions = column(question_rows.collect::<Vec<_>>()).spacing(8);

        let submit = button(text("Submit All Answers").size(14))
            .on_press_maybe(self.worker.is_none().then_some(Message::Submit))
            .padding([8, 16]);

        let report = container(scrollable(text(self.report.clone()).size(13)).height(Length::Fill))
            .padding(8)
            .height(Length::Fill)
            .width(Length::Fill);

        let status = text(self.status.clone()).size(13);

        column![title, questions, submit, report, status]
            .spacing(16)
            .padding(16)
            .height(Length::Fill)
            .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        if self.worker.is_some() {
            iced::time::every(Duration::from_millis(100)).map(|_| Message::PollWorker)
        } else {
            Subscription::none()
        }
    }
}

/// Launch the trainer window.
pub fn run(
    evaluator: Arc<Evaluator>,
    device: Option<String>,
    recordings_dir: Arc<tempfile::TempDir>,
) -> iced::Result {
    iced::application(
        move || App::new(Arc::clone(&evaluator), device.clone(), Arc::clone(&recordings_dir)),
        App::update,
        App::view,
    )
    .title("\u{1F3A4} Interview Trainer AI")
    .subscription(App::subscription)
    .window(iced::window::Settings {
        size: iced::Size::new(700.0, 780.0),
        ..Default::default()
    })
    .run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::MockChatCompleter;
    use crate::stt::transcriber::MockTranscriber;

    fn test_app() -> App {
        let transcriber = Arc::new(MockTranscriber::new("mock"));
        let chat = Arc::new(MockChatCompleter::new().with_response("Borderline"));
        let evaluator = Arc::new(Evaluator::new(transcriber, chat));
        let dir = Arc::new(tempfile::tempdir().unwrap());
        App::new(evaluator, None, dir).0
    }

    #[test]
    fn starts_waiting_with_no_answers() {
        let app = test_app();
        assert_eq!(app.status, defaults::STATUS_WAITING);
        assert_eq!(app.answers.len(), QUESTIONS.len());
        assert!(app.answers.iter().all(|a| a.is_none()));
        assert!(app.report.is_empty());
    }

    #[test]
    fn submit_spawns_worker_and_shows_processing() {
        let mut app = test_app();

        let _ = app.update(Message::Submit);
        assert_eq!(app.status, defaults::STATUS_PROCESSING);
        assert!(app.worker.is_some());

        // A second submit while running is ignored
        let _ = app.update(Message::Submit);
        assert!(app.worker.is_some());
    }

    #[test]
    fn poll_worker_collects_the_report() {
        let mut app = test_app();
        let _ = app.update(Message::Submit);

        // The mock pipeline finishes quickly; poll until it lands
        let deadline = std::time::Instant::now() + Duration::from_secs(5);
        while app.worker.is_some() && std::time::Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(10));
            let _ = app.update(Message::PollWorker);
        }

        assert!(app.worker.is_none());
        assert_eq!(app.status, defaults::STATUS_COMPLETE);
        assert!(app.report.contains("Borderline"));
        assert!(app.report.contains("### \u{1F4CA} Interview Evaluation"));
    }

    #[test]
    fn poll_without_worker_is_a_no_op() {
        let mut app = test_app();
        let _ = app.update(Message::PollWorker);
        assert_eq!(app.status, defaults::STATUS_WAITING);
    }
}
