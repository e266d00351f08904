//! Domain error types

use crate::quiz::value_objects::QuizId;
use crate::session::error::SessionError;
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Quiz {quiz_id} is invalid: {reason}")]
    InvalidQuiz { quiz_id: QuizId, reason: String },

    #[error("Quiz ID mismatch: expected {expected}, got {actual}")]
    QuizMismatch { expected: QuizId, actual: QuizId },

    #[error(transparent)]
    Session(#[from] SessionError),
}

impl DomainError {
    /// Check if this error comes from a rejected session action
    pub fn is_session(&self) -> bool {
        matches!(self, DomainError::Session(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatch_display() {
        let error = DomainError::QuizMismatch {
            expected: QuizId::new(1),
            actual: QuizId::new(2),
        };
        assert_eq!(error.to_string(), "Quiz ID mismatch: expected 1, got 2");
    }

    #[test]
    fn test_session_error_is_transparent() {
        let error: DomainError = SessionError::NotOnLastQuestion.into();
        assert!(error.is_session());
        assert_eq!(
            error.to_string(),
            "Answers can only be submitted from the last question"
        );
        assert!(
            !DomainError::InvalidQuiz {
                quiz_id: QuizId::new(1),
                reason: "x".into()
            }
            .is_session()
        );
    }
}
