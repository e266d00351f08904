//! The scored outcome of one attempt, as shown on the results screen.

use super::review::{QuestionReview, review_answers};
use super::score::{Score, calculate_score};
use crate::quiz::entities::Quiz;
use crate::session::result::SessionResult;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptReport {
    pub result: SessionResult,
    pub score: Score,
    pub review: Vec<QuestionReview>,
}

impl AttemptReport {
    /// Score `result` against the revealing view of its quiz.
    ///
    /// The caller is responsible for checking that `revealed.id` matches
    /// `result.quiz_id`.
    pub fn build(revealed: &Quiz, result: SessionResult) -> Self {
        let score = calculate_score(revealed, &result.user_answers);
        let review = review_answers(revealed, &result.user_answers);
        Self {
            result,
            score,
            review,
        }
    }

    /// Time taken rendered as `Xm Ys`.
    pub fn time_taken(&self) -> String {
        format_duration(self.result.time_taken_secs)
    }
}

/// Format seconds as `Xm Ys`.
pub fn format_duration(secs: u32) -> String {
    format!("{}m {}s", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::entities::{Question, QuizOption};
    use crate::quiz::value_objects::{OptionId, QuestionId, QuizId};
    use crate::session::result::{SubmitReason, UserAnswer};

    #[test]
    fn build_joins_score_and_review() {
        let quiz_id = QuizId::new(3);
        let qid = QuestionId::new(21);
        let quiz = Quiz::new(quiz_id, "Math Quiz").with_question(
            Question::new(qid, quiz_id, "What is 5 + 7?")
                .with_option(QuizOption::new(OptionId::new(81), qid, "11"))
                .with_option(QuizOption::new(OptionId::new(82), qid, "12").correct()),
        );
        let result = SessionResult {
            quiz_id,
            quiz_title: "Math Quiz".into(),
            user_answers: vec![UserAnswer::new(qid, OptionId::new(82))],
            time_taken_secs: 95,
            reason: SubmitReason::Manual,
            violations: 1,
        };

        let report = AttemptReport::build(&quiz, result);
        assert_eq!(report.score, Score::new(1, 1));
        assert_eq!(report.review.len(), 1);
        assert_eq!(report.time_taken(), "1m 35s");
        assert_eq!(report.result.violations, 1);
    }

    #[test]
    fn duration_format() {
        assert_eq!(format_duration(0), "0m 0s");
        assert_eq!(format_duration(59), "0m 59s");
        assert_eq!(format_duration(300), "5m 0s");
    }
}
