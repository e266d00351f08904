//! Score Attempt use case
//!
//! Fetches the revealing view of a quiz and scores a finished session
//! against it.

use crate::ports::quiz_gateway::{QuizFetchError, QuizGateway};
use quiz_domain::{AttemptReport, QuizId, SessionResult};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur while scoring an attempt
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoreAttemptError {
    #[error("Quiz ID mismatch: expected {expected}, got {actual}")]
    QuizMismatch { expected: QuizId, actual: QuizId },

    #[error(transparent)]
    Fetch(#[from] QuizFetchError),
}

/// Use case for turning a [`SessionResult`] into an [`AttemptReport`]
pub struct ScoreAttemptUseCase<G: QuizGateway + 'static> {
    gateway: Arc<G>,
}

impl<G: QuizGateway + 'static> ScoreAttemptUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Score `result` for the quiz the user asked for.
    ///
    /// Refuses a result recorded for a different quiz before any request is
    /// made.
    pub async fn execute(
        &self,
        requested: QuizId,
        result: SessionResult,
    ) -> Result<AttemptReport, ScoreAttemptError> {
        if result.quiz_id != requested {
            warn!(
                expected = %requested,
                actual = %result.quiz_id,
                "Refusing to score a result for another quiz"
            );
            return Err(ScoreAttemptError::QuizMismatch {
                expected: requested,
                actual: result.quiz_id,
            });
        }

        let revealed = self.gateway.get_answers(requested).await?;
        if revealed.id != requested {
            return Err(ScoreAttemptError::QuizMismatch {
                expected: requested,
                actual: revealed.id,
            });
        }

        let report = AttemptReport::build(&revealed, result);
        info!(
            quiz_id = %requested,
            score = %report.score,
            reason = %report.result.reason,
            "Scored attempt"
        );
        Ok(report)
    }
}
