//! Per-question breakdown of a scored attempt.

use crate::quiz::entities::Quiz;
use crate::quiz::value_objects::{OptionId, QuestionId};
use crate::session::result::UserAnswer;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewOutcome {
    Correct,
    Incorrect,
    Unanswered,
}

impl ReviewOutcome {
    pub fn is_correct(self) -> bool {
        matches!(self, ReviewOutcome::Correct)
    }
}

/// One row of the detailed results view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionReview {
    pub question_id: QuestionId,
    pub question_text: String,
    pub selected_option_id: Option<OptionId>,
    pub selected_text: Option<String>,
    pub correct_option_id: Option<OptionId>,
    pub correct_text: Option<String>,
    pub outcome: ReviewOutcome,
}

/// Build the breakdown in the quiz's question order.
///
/// Outcomes agree with [`calculate_score`](super::calculate_score): a row is
/// `Correct` exactly when that question was counted as correct.
pub fn review_answers(quiz: &Quiz, answers: &[UserAnswer]) -> Vec<QuestionReview> {
    quiz.questions
        .iter()
        .map(|question| {
            let selected = answers
                .iter()
                .find(|a| a.question_id == question.id)
                .map(|a| a.selected_option_id);
            let correct = question.correct_option();

            let outcome = match (selected, correct) {
                (None, _) => ReviewOutcome::Unanswered,
                (Some(s), Some(c)) if s == c.id => ReviewOutcome::Correct,
                (Some(_), _) => ReviewOutcome::Incorrect,
            };

            QuestionReview {
                question_id: question.id,
                question_text: question.question_text.clone(),
                selected_option_id: selected,
                selected_text: selected
                    .and_then(|id| question.option(id))
                    .map(|o| o.option_text.clone()),
                correct_option_id: correct.map(|o| o.id),
                correct_text: correct.map(|o| o.option_text.clone()),
                outcome,
            }
        })
        .collect()
}
