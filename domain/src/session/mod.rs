//! Quiz session domain (client side).
//!
//! - [`machine::QuizSession`]: the `NotStarted → InProgress → Submitted` state machine
//! - [`rules::SessionRules`]: time limit and violation policy
//! - [`result::SessionResult`]: what a finished session hands to scoring
//! - [`shuffle`]: Fisher-Yates ordering of questions and options
//! - [`violation::ViolationTracker`]: debounced focus-loss counter

pub mod error;
pub mod machine;
pub mod result;
pub mod rules;
pub mod shuffle;
pub mod violation;

pub use error::SessionError;
pub use machine::{QuizSession, SessionPhase, format_clock};
pub use result::{SessionResult, SubmitReason, UserAnswer};
pub use rules::SessionRules;
