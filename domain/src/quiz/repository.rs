//! Quiz repository trait

use super::entities::Quiz;
use super::value_objects::QuizId;
use async_trait::async_trait;

/// Read-only access to stored quizzes
///
/// Returns quizzes exactly as authored, correctness flags included.
/// Projection to the public shape happens in the application layer.
/// Implementations live in the infrastructure layer.
#[async_trait]
pub trait QuizRepository: Send + Sync {
    /// Error type for storage failures
    type Error: std::error::Error + Send + Sync + 'static;

    /// All quizzes, ordered by id
    async fn list(&self) -> Result<Vec<Quiz>, Self::Error>;

    /// A single quiz, or `None` if the id is unknown
    async fn find(&self, id: QuizId) -> Result<Option<Quiz>, Self::Error>;
}
