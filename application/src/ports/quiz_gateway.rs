//! Quiz gateway port
//!
//! Defines how the client side reaches the quiz API.

use async_trait::async_trait;
use quiz_domain::{Quiz, QuizId};
use thiserror::Error;

/// Errors that can occur while fetching quiz data
///
/// `Unauthorized` and `NotFound` are expected outcomes that the user can act
/// on; everything else is `Unexpected`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuizFetchError {
    #[error("Unauthorized: the API key was missing or rejected")]
    Unauthorized,

    #[error("Quiz with ID {0} not found")]
    NotFound(QuizId),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl QuizFetchError {
    /// Whether retrying the same request could succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, QuizFetchError::Unexpected(_))
    }
}

/// Gateway to the quiz API
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait QuizGateway: Send + Sync {
    /// Public view of every quiz
    async fn list_quizzes(&self) -> Result<Vec<Quiz>, QuizFetchError>;

    /// Public view of one quiz
    async fn get_quiz(&self, id: QuizId) -> Result<Quiz, QuizFetchError>;

    /// Revealing view of one quiz, used for scoring
    async fn get_answers(&self, id: QuizId) -> Result<Quiz, QuizFetchError>;
}
