//! Domain layer for online-quiz
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Answer hiding
//!
//! A [`Quiz`] is always stored with its correctness flags. What leaves the
//! server is a *projection*: the public view clears every flag, the revealing
//! view keeps them ([`AnswerVisibility`]).
//!
//! ## Sessions
//!
//! A [`QuizSession`] walks `NotStarted → InProgress → Submitted`, driven by
//! user actions, a one-second timer and focus-loss signals. Answers stay on
//! the client until the session produces a [`SessionResult`].
//!
//! ## Scoring
//!
//! [`calculate_score`] joins a [`SessionResult`]'s answers with the revealing
//! view and yields a [`Score`].

pub mod core;
pub mod quiz;
pub mod scoring;
pub mod session;
pub mod util;

// Re-export commonly used types
pub use core::error::DomainError;
pub use quiz::{
    entities::{Question, Quiz, QuizOption},
    projection::AnswerVisibility,
    repository::QuizRepository,
    validation::{QuizIssue, QuizIssueCode, Severity},
    value_objects::{OptionId, QuestionId, QuizId},
};
pub use scoring::{
    AttemptReport, QuestionReview, ReviewOutcome, Score, ScoreBand, calculate_score,
    format_duration, review_answers,
};
pub use session::{
    QuizSession, SessionError, SessionPhase, SessionResult, SessionRules, SubmitReason,
    UserAnswer, format_clock,
};
pub use util::mask_secret;
