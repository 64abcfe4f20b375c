//! Interview questions, prompt construction, evaluation, and report rendering.

pub mod answer;
pub mod evaluator;
pub mod prompt;
pub mod questions;
pub mod report;

pub use answer::AnswerRecord;
pub use evaluator::{Evaluation, Evaluator};
pub use questions::QUESTIONS;
