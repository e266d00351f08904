//! Scoring of finished attempts against the revealing view of a quiz.

pub mod report;
pub mod review;
pub mod score;

pub use report::{AttemptReport, format_duration};
pub use review::{QuestionReview, ReviewOutcome, review_answers};
pub use score::{Score, ScoreBand, calculate_score};
