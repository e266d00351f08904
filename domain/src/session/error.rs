//! Session error types

use crate::quiz::value_objects::OptionId;
use thiserror::Error;

/// Rejected user actions on a [`QuizSession`](super::QuizSession)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("The quiz has not been started")]
    NotStarted,

    #[error("The quiz has already been started")]
    AlreadyStarted,

    #[error("The quiz has already been submitted")]
    AlreadySubmitted,

    #[error("The quiz has no questions")]
    NoQuestions,

    #[error("Answers can only be submitted from the last question")]
    NotOnLastQuestion,

    #[error("Option {0} does not belong to the current question")]
    UnknownOption(OptionId),

    #[error("Question {index} is out of range (quiz has {len} questions)")]
    QuestionOutOfRange { index: usize, len: usize },
}
