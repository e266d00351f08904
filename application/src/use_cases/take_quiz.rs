//! Take Quiz use case
//!
//! Fetches the public view of a quiz and prepares a session over it.

use crate::ports::quiz_gateway::{QuizFetchError, QuizGateway};
use quiz_domain::{AnswerVisibility, Quiz, QuizId, QuizSession, SessionRules};
use std::sync::Arc;
use tracing::{info, warn};

/// Use case for fetching quizzes and preparing sessions
pub struct TakeQuizUseCase<G: QuizGateway + 'static> {
    gateway: Arc<G>,
    rules: SessionRules,
}

impl<G: QuizGateway + 'static> TakeQuizUseCase<G> {
    pub fn new(gateway: Arc<G>, rules: SessionRules) -> Self {
        Self { gateway, rules }
    }

    pub fn rules(&self) -> &SessionRules {
        &self.rules
    }

    /// Quizzes available to take (public view)
    pub async fn list(&self) -> Result<Vec<Quiz>, QuizFetchError> {
        self.gateway.list_quizzes().await
    }

    /// Fetch the public view of `id` and wrap it in a not-yet-started session.
    pub async fn prepare(&self, id: QuizId) -> Result<QuizSession, QuizFetchError> {
        let quiz = self.gateway.get_quiz(id).await?;
        if quiz.id != id {
            return Err(QuizFetchError::Unexpected(format!(
                "requested quiz {} but received quiz {}",
                id, quiz.id
            )));
        }
        if quiz.reveals_answers() {
            warn!(quiz_id = %id, "Public quiz view carried correct answers; clearing them");
        }
        // The session never needs the flags.
        let quiz = quiz.into_projection(AnswerVisibility::Hidden);
        info!(
            quiz_id = %id,
            questions = quiz.question_count(),
            "Prepared quiz session"
        );
        Ok(QuizSession::new(quiz, self.rules.clone()))
    }
}
