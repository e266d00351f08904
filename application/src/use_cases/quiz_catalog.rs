//! Quiz catalog use case
//!
//! Serves quizzes to API callers, applying the answer-hiding projection.

use quiz_domain::{AnswerVisibility, Quiz, QuizId, QuizRepository};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error};

/// Errors that can occur while reading the catalog
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Quiz with ID {0} not found")]
    NotFound(QuizId),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Use case for reading quizzes in their public or revealing shape
pub struct QuizCatalogUseCase<R: QuizRepository + 'static> {
    repository: Arc<R>,
}

impl<R: QuizRepository + 'static> Clone for QuizCatalogUseCase<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: QuizRepository + 'static> QuizCatalogUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Every quiz with correctness flags cleared
    pub async fn list_public(&self) -> Result<Vec<Quiz>, CatalogError> {
        let quizzes = self.repository.list().await.map_err(storage_error)?;
        debug!("Serving {} quizzes", quizzes.len());
        Ok(quizzes
            .into_iter()
            .map(|q| q.into_projection(AnswerVisibility::Hidden))
            .collect())
    }

    /// One quiz with correctness flags cleared
    pub async fn get_public(&self, id: QuizId) -> Result<Quiz, CatalogError> {
        self.get(id, AnswerVisibility::Hidden).await
    }

    /// One quiz with correctness flags intact
    pub async fn get_revealing(&self, id: QuizId) -> Result<Quiz, CatalogError> {
        self.get(id, AnswerVisibility::Revealed).await
    }

    /// One quiz in the requested shape; unknown ids are `NotFound`, never an
    /// empty quiz.
    pub async fn get(
        &self,
        id: QuizId,
        visibility: AnswerVisibility,
    ) -> Result<Quiz, CatalogError> {
        let quiz = self
            .repository
            .find(id)
            .await
            .map_err(storage_error)?
            .ok_or(CatalogError::NotFound(id))?;
        debug!(quiz_id = %id, ?visibility, "Serving quiz");
        Ok(quiz.into_projection(visibility))
    }
}

fn storage_error<E: std::error::Error>(e: E) -> CatalogError {
    error!("Quiz repository failed: {}", e);
    CatalogError::Storage(e.to_string())
}
