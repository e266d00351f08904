//! Values handed from a finished session to the results screen.

use crate::quiz::value_objects::{OptionId, QuestionId, QuizId};
use serde::{Deserialize, Serialize};

/// The option a user picked for one question (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAnswer {
    pub question_id: QuestionId,
    pub selected_option_id: OptionId,
}

impl UserAnswer {
    pub fn new(question_id: QuestionId, selected_option_id: OptionId) -> Self {
        Self {
            question_id,
            selected_option_id,
        }
    }
}

/// Why a session moved to `Submitted`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitReason {
    /// The user submitted from the last question
    Manual,
    /// Elapsed time reached the limit
    TimeExpired,
    /// Focus-loss violations reached the threshold
    ViolationLimit,
}

impl SubmitReason {
    pub fn is_forced(self) -> bool {
        !matches!(self, SubmitReason::Manual)
    }
}

impl std::fmt::Display for SubmitReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            SubmitReason::Manual => "submitted",
            SubmitReason::TimeExpired => "time limit reached",
            SubmitReason::ViolationLimit => "too many focus violations",
        };
        f.write_str(text)
    }
}

/// Outcome of one quiz session (Value Object)
///
/// Lives only on the client, from submission until the results are shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResult {
    pub quiz_id: QuizId,
    pub quiz_title: String,
    pub user_answers: Vec<UserAnswer>,
    /// Seconds taken; equals the time limit when the deadline forced submission
    #[serde(rename = "timeTaken")]
    pub time_taken_secs: u32,
    pub reason: SubmitReason,
    pub violations: u32,
}

impl SessionResult {
    pub fn answer_for(&self, question_id: QuestionId) -> Option<&UserAnswer> {
        self.user_answers
            .iter()
            .find(|a| a.question_id == question_id)
    }
}
