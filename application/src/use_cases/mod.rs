//! Use cases (application services)

pub mod access_guard;
pub mod quiz_catalog;
pub mod score_attempt;
pub mod take_quiz;
