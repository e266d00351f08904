//! Console output formatter for quiz lists and attempt reports

use colored::Colorize;
use quiz_domain::{AttemptReport, Quiz, ReviewOutcome, ScoreBand};
use serde::Serialize;

/// Formats quiz data for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the public quiz list
    pub fn format_quiz_list(quizzes: &[Quiz]) -> String {
        let mut output = String::new();
        output.push_str(&Self::header("Available Quizzes"));
        output.push('\n');

        if quizzes.is_empty() {
            output.push_str(&format!("\n{}\n", "No quizzes available.".dimmed()));
        }
        for quiz in quizzes {
            output.push_str(&format!(
                "\n{} {} {}\n",
                format!("[{}]", quiz.id).yellow().bold(),
                quiz.title.bold(),
                format!("({} questions)", quiz.question_count()).dimmed()
            ));
            if let Some(description) = &quiz.description {
                output.push_str(&format!("    {}\n", description));
            }
        }

        output.push_str(&format!(
            "\n{} {}\n",
            "Start one with:".cyan(),
            "online-quiz take <ID>".bold()
        ));
        output
    }

    /// Format a scored attempt
    pub fn format_report(report: &AttemptReport) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Quiz Results"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n",
            "Quiz:".cyan().bold(),
            report.result.quiz_title
        ));

        let band = report.score.band();
        let score = format!(
            "{}/{} ({}%)",
            report.score.correct, report.score.total, report.score.percentage
        );
        let score = match band {
            ScoreBand::Excellent => score.green().bold(),
            ScoreBand::Good => score.cyan().bold(),
            ScoreBand::Fair => score.yellow().bold(),
            ScoreBand::NeedsPractice => score.red().bold(),
        };
        output.push_str(&format!(
            "{} {}  {}\n",
            "Score:".cyan().bold(),
            score,
            band.label()
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Time taken:".cyan().bold(),
            report.time_taken()
        ));
        if report.result.reason.is_forced() {
            output.push_str(&format!(
                "{}\n",
                format!("Submitted automatically: {}", report.result.reason).yellow()
            ));
        }

        output.push_str(&Self::section_header("Breakdown"));
        for (index, row) in report.review.iter().enumerate() {
            let mark = match row.outcome {
                ReviewOutcome::Correct => "✓".green(),
                ReviewOutcome::Incorrect => "✗".red(),
                ReviewOutcome::Unanswered => "-".dimmed(),
            };
            output.push_str(&format!("{} {}. {}\n", mark, index + 1, row.question_text));
            output.push_str(&format!(
                "    Your answer: {}\n",
                row.selected_text.as_deref().unwrap_or("(no answer)")
            ));
            if !row.outcome.is_correct()
                && let Some(correct) = &row.correct_text
            {
                output.push_str(&format!("    Correct:     {}\n", correct.green()));
            }
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format as JSON
    pub fn format_json<T: Serialize + ?Sized>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}
