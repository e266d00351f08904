//! Application layer for online-quiz
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    quiz_gateway::{QuizFetchError, QuizGateway},
    request_logger::{NoRequestLogger, RequestLogger, RequestRecord},
};
pub use use_cases::access_guard::{API_KEY_HEADER, AccessError, ApiKeyGuard};
pub use use_cases::quiz_catalog::{CatalogError, QuizCatalogUseCase};
pub use use_cases::score_attempt::{ScoreAttemptError, ScoreAttemptUseCase};
pub use use_cases::take_quiz::TakeQuizUseCase;
