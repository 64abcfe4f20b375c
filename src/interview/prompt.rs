//! Evaluation prompt construction.
//!
//! All answers are sent to the model in a single completion request, so the
//! whole interview is judged in one pass.

use crate::interview::questions::label;

/// Fixed rubric prepended to the candidate's answers.
const RUBRIC: &str = "You are a professional hiring manager.\n\n\
    For each answer:\n\
    - Give a rating (1\u{2013}10) for delivery\n\
    - Give one improvement suggestion\n\n\
    Then provide:\n\
    - Overall summary of the candidate\n\
    - Final hireability decision: Hired / Borderline / Rejected\n\n\
    Format clearly.\n\nCandidate Answers:\n";

/// Build the single evaluation prompt from all answer transcripts.
///
/// Answers appear in question order as `Q1:` through `Q5:` lines; unanswered
/// questions contribute an empty line so the numbering stays aligned.
pub fn build_prompt(transcripts: &[String]) -> String {
    let mut prompt = String::from(RUBRIC);
    for (i, transcript) in transcripts.iter().enumerate() {
        prompt.push_str(&format!("{}: {}\n", label(i), transcript));
    }
    prompt
}
