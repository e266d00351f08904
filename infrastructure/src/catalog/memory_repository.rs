//! In-memory quiz repository
//!
//! Holds the loaded catalog for the lifetime of the server. The data is
//! immutable after construction, so reads need no locking.

use super::file_catalog::CatalogLoadError;
use async_trait::async_trait;
use quiz_domain::{Quiz, QuizId, QuizRepository};
use std::collections::BTreeMap;
use std::convert::Infallible;

/// [`QuizRepository`] over a fixed set of quizzes, ordered by id
#[derive(Debug, Clone, Default)]
pub struct InMemoryQuizRepository {
    quizzes: BTreeMap<QuizId, Quiz>,
}

impl InMemoryQuizRepository {
    /// Build from loaded quizzes; fails on a repeated quiz id.
    pub fn from_quizzes(quizzes: Vec<Quiz>) -> Result<Self, CatalogLoadError> {
        let mut map = BTreeMap::new();
        for quiz in quizzes {
            let id = quiz.id;
            if map.insert(id, quiz).is_some() {
                return Err(CatalogLoadError::DuplicateQuiz(id));
            }
        }
        Ok(Self { quizzes: map })
    }

    pub fn len(&self) -> usize {
        self.quizzes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quizzes.is_empty()
    }
}

#[async_trait]
impl QuizRepository for InMemoryQuizRepository {
    type Error = Infallible;

    async fn list(&self) -> Result<Vec<Quiz>, Infallible> {
        Ok(self.quizzes.values().cloned().collect())
    }

    async fn find(&self, id: QuizId) -> Result<Option<Quiz>, Infallible> {
        Ok(self.quizzes.get(&id).cloned())
    }
}
