//! Quiz catalog domain.
//!
//! - [`entities::Quiz`] / [`entities::Question`] / [`entities::QuizOption`]: the aggregate
//! - [`projection::AnswerVisibility`]: public vs. answer-revealing view
//! - [`validation`]: authoring checks run when a catalog is loaded
//! - [`repository::QuizRepository`]: trait for read-only storage

pub mod entities;
pub mod projection;
pub mod repository;
pub mod validation;
pub mod value_objects;

pub use entities::{Question, Quiz, QuizOption};
pub use projection::AnswerVisibility;
pub use repository::QuizRepository;
pub use validation::{QuizIssue, QuizIssueCode, Severity};
pub use value_objects::{OptionId, QuestionId, QuizId};
