//! The fixed interview question set.

/// The five questions asked in every session, in the order they are asked.
pub const QUESTIONS: [&str; 5] = [
    "Tell me about yourself.",
    "Describe a challenging situation you faced. How did you handle it?",
    "Why do you want to work for this company?",
    "What are your key strengths and weaknesses?",
    "Where do you see yourself in 5 years?",
];

/// Display label for question `index` (zero-based), e.g. "Q1".
pub fn label(index: usize) -> String {
    format!("Q{}", index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn there_are_exactly_five_questions() {
        assert_eq!(QUESTIONS.len(), 5);
        assert!(QUESTIONS.iter().all(|q| !q.is_empty()));
    }

    #[test]
    fn labels_are_one_based() {
        assert_eq!(label(0), "Q1");
        assert_eq!(label(4), "Q5");
    }
}
