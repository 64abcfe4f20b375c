//! Markdown report rendering.

use crate::interview::answer::AnswerRecord;
use crate::interview::questions::{QUESTIONS, label};

/// Render the per-question metrics table.
///
/// Always emits one row per interview question so unanswered questions show
/// up as zero rows rather than disappearing.
pub fn metrics_table(records: &[AnswerRecord]) -> String {
    let mut table = String::from("| Question | Duration (sec) | Word Count |\n");
    table.push_str("|---------|---------------|------------|\n");

    let unanswered = AnswerRecord::unanswered();
    for i in 0..QUESTIONS.len() {
        let record = records.get(i).unwrap_or(&unanswered);
        table.push_str(&format!(
            "| {} | {:.2} | {} |\n",
            label(i),
            record.duration_secs,
            record.word_count
        ));
    }
    table
}

/// Render the full Markdown report: model reply followed by the metrics table.
pub fn render_report(model_reply: &str, records: &[AnswerRecord]) -> String {
    format!(
        "### \u{1F4CA} Interview Evaluation\n{}\n\n### \u{1F4C8} Answer Metrics\n{}",
        model_reply,
        metrics_table(records)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_always_has_five_rows() {
        let table = metrics_table(&[]);
        let rows: Vec<&str> = table.lines().collect();
        // header + separator + 5 question rows
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0], "| Question | Duration (sec) | Word Count |");
        assert_eq!(rows[1], "|---------|---------------|------------|");
        for (i, row) in rows[2..].iter().enumerate() {
            assert_eq!(*row, format!("| Q{} | 0.00 | 0 |", i + 1));
        }
    }

    #[test]
    fn table_formats_duration_with_two_decimals() {
        let records = vec![
            AnswerRecord {
                transcript: "one two three".to_string(),
                duration_secs: 1.2345,
                word_count: 3,
            },
            AnswerRecord::unanswered(),
        ];

        let table = metrics_table(&records);
        assert!(table.contains("| Q1 | 1.23 | 3 |\n"));
        assert!(table.contains("| Q2 | 0.00 | 0 |\n"));
        assert!(table.contains("| Q5 | 0.00 | 0 |\n"));
    }

    #[test]
    fn report_contains_both_sections_in_order() {
        let records = vec![AnswerRecord::unanswered(); 5];
        let report = render_report("Overall: Borderline.", &records);

        let eval = report.find("### \u{1F4CA} Interview Evaluation\n").unwrap();
        let reply = report.find("Overall: Borderline.").unwrap();
        let metrics = report.find("### \u{1F4C8} Answer Metrics\n").unwrap();
        assert!(eval < reply && reply < metrics);
    }
}
