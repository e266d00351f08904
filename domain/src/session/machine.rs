//! Quiz session state machine.
//!
//! ```text
//!  NotStarted ──start──▶ InProgress ──submit (last question)──▶ Submitted
//!                          │  ▲   ├──tick reaches time limit──▶ Submitted
//!     select / next / prev │  │   └──violations reach limit──▶ Submitted
//!     jump ────────────────┘──┘
//! ```
//!
//! Three independent event sources drive a session: user actions, a
//! one-second timer tick and focus-loss signals. The two forced transitions
//! are edge-triggered: the tick or signal that crosses the limit returns the
//! [`SessionResult`], every later one returns `None`.

use super::error::SessionError;
use super::result::{SessionResult, SubmitReason, UserAnswer};
use super::rules::SessionRules;
use super::shuffle::shuffle_quiz;
use super::violation::ViolationTracker;
use crate::quiz::entities::{Question, Quiz};
use crate::quiz::value_objects::{OptionId, QuizId};
use rand::Rng;
use std::time::Instant;

/// Lifecycle phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    NotStarted,
    InProgress,
    Submitted,
}

impl SessionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionPhase::NotStarted => "not_started",
            SessionPhase::InProgress => "in_progress",
            SessionPhase::Submitted => "submitted",
        }
    }
}

impl std::fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One attempt at a quiz, from start to submission
#[derive(Debug, Clone)]
pub struct QuizSession {
    quiz: Quiz,
    rules: SessionRules,
    phase: SessionPhase,
    current: usize,
    answers: Vec<UserAnswer>,
    elapsed_secs: u32,
    violations: ViolationTracker,
    result: Option<SessionResult>,
}

impl QuizSession {
    /// Create a session over the public view of a quiz.
    pub fn new(quiz: Quiz, rules: SessionRules) -> Self {
        let violations = ViolationTracker::new(rules.violation_cooldown);
        Self {
            quiz,
            rules,
            phase: SessionPhase::NotStarted,
            current: 0,
            answers: Vec::new(),
            elapsed_secs: 0,
            violations,
            result: None,
        }
    }

    // ==================== Transitions ====================

    /// `NotStarted → InProgress`. Shuffles questions and options when the
    /// rules ask for it.
    pub fn start<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), SessionError> {
        match self.phase {
            SessionPhase::NotStarted => {}
            SessionPhase::InProgress => return Err(SessionError::AlreadyStarted),
            SessionPhase::Submitted => return Err(SessionError::AlreadySubmitted),
        }
        if self.quiz.questions.is_empty() {
            return Err(SessionError::NoQuestions);
        }
        if self.rules.shuffle {
            shuffle_quiz(&mut self.quiz, rng);
        }
        self.phase = SessionPhase::InProgress;
        Ok(())
    }

    /// Record (or overwrite) the answer for the current question.
    pub fn select_option(&mut self, option_id: OptionId) -> Result<(), SessionError> {
        self.ensure_in_progress()?;
        let question = &self.quiz.questions[self.current];
        if question.option(option_id).is_none() {
            return Err(SessionError::UnknownOption(option_id));
        }
        let answer = UserAnswer::new(question.id, option_id);
        match self
            .answers
            .iter_mut()
            .find(|a| a.question_id == answer.question_id)
        {
            Some(existing) => *existing = answer,
            None => self.answers.push(answer),
        }
        Ok(())
    }

    /// Select the option at `index` in the current question's display order.
    pub fn select_option_at(&mut self, index: usize) -> Result<(), SessionError> {
        self.ensure_in_progress()?;
        let option_id = self.quiz.questions[self.current]
            .options
            .get(index)
            .map(|o| o.id)
            .ok_or(SessionError::QuestionOutOfRange {
                index,
                len: self.quiz.questions[self.current].options.len(),
            })?;
        self.select_option(option_id)
    }

    /// Move to the next question. Returns `false` when already on the last one.
    pub fn next(&mut self) -> Result<bool, SessionError> {
        self.ensure_in_progress()?;
        if self.is_last_question() {
            return Ok(false);
        }
        self.current += 1;
        Ok(true)
    }

    /// Move to the previous question. Returns `false` when already on the first one.
    pub fn previous(&mut self) -> Result<bool, SessionError> {
        self.ensure_in_progress()?;
        if self.current == 0 {
            return Ok(false);
        }
        self.current -= 1;
        Ok(true)
    }

    /// Jump to any question by display index.
    pub fn jump_to(&mut self, index: usize) -> Result<(), SessionError> {
        self.ensure_in_progress()?;
        let len = self.quiz.questions.len();
        if index >= len {
            return Err(SessionError::QuestionOutOfRange { index, len });
        }
        self.current = index;
        Ok(())
    }

    /// Explicit submission; only allowed from the last question.
    pub fn submit(&mut self) -> Result<SessionResult, SessionError> {
        self.ensure_in_progress()?;
        if !self.is_last_question() {
            return Err(SessionError::NotOnLastQuestion);
        }
        Ok(self.finish(SubmitReason::Manual, self.elapsed_secs))
    }

    /// One-second timer tick.
    ///
    /// Returns the result only on the tick that reaches the time limit; time
    /// taken is pinned to the limit.
    pub fn tick(&mut self) -> Option<SessionResult> {
        if self.phase != SessionPhase::InProgress {
            return None;
        }
        self.elapsed_secs = self.elapsed_secs.saturating_add(1);
        if self.elapsed_secs >= self.rules.time_limit_secs {
            self.elapsed_secs = self.rules.time_limit_secs;
            return Some(self.finish(SubmitReason::TimeExpired, self.rules.time_limit_secs));
        }
        None
    }

    /// The quiz window lost focus or visibility at `now`.
    ///
    /// Returns the result only on the counted violation that reaches the
    /// threshold; time taken is the actual elapsed time.
    pub fn register_focus_loss(&mut self, now: Instant) -> Option<SessionResult> {
        if self.phase != SessionPhase::InProgress {
            return None;
        }
        if self.violations.register(now) && self.violations.count() >= self.rules.violation_threshold
        {
            return Some(self.finish(SubmitReason::ViolationLimit, self.elapsed_secs));
        }
        None
    }

    fn finish(&mut self, reason: SubmitReason, time_taken_secs: u32) -> SessionResult {
        let result = SessionResult {
            quiz_id: self.quiz.id,
            quiz_title: self.quiz.title.clone(),
            user_answers: self.answers.clone(),
            time_taken_secs,
            reason,
            violations: self.violations.count(),
        };
        self.phase = SessionPhase::Submitted;
        self.result = Some(result.clone());
        result
    }

    fn ensure_in_progress(&self) -> Result<(), SessionError> {
        match self.phase {
            SessionPhase::InProgress => Ok(()),
            SessionPhase::NotStarted => Err(SessionError::NotStarted),
            SessionPhase::Submitted => Err(SessionError::AlreadySubmitted),
        }
    }

    // ==================== Queries ====================

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn quiz_id(&self) -> QuizId {
        self.quiz.id
    }

    /// The quiz in display order (shuffled once started).
    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn rules(&self) -> &SessionRules {
        &self.rules
    }

    pub fn question_count(&self) -> usize {
        self.quiz.questions.len()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.quiz.questions.get(self.current)
    }

    pub fn is_last_question(&self) -> bool {
        self.current + 1 >= self.quiz.questions.len()
    }

    /// Option recorded for the current question.
    pub fn selected_option(&self) -> Option<OptionId> {
        let question = self.current_question()?;
        self.answers
            .iter()
            .find(|a| a.question_id == question.id)
            .map(|a| a.selected_option_id)
    }

    pub fn answers(&self) -> &[UserAnswer] {
        &self.answers
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// Whether the question at display `index` has an answer (navigator).
    pub fn is_answered(&self, index: usize) -> bool {
        self.quiz
            .questions
            .get(index)
            .is_some_and(|q| self.answers.iter().any(|a| a.question_id == q.id))
    }

    /// Position of the current question as a fraction in `(0, 1]`.
    pub fn progress(&self) -> f64 {
        if self.quiz.questions.is_empty() {
            return 0.0;
        }
        (self.current + 1) as f64 / self.quiz.questions.len() as f64
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    pub fn remaining_secs(&self) -> u32 {
        self.rules.time_limit_secs.saturating_sub(self.elapsed_secs)
    }

    pub fn violations(&self) -> u32 {
        self.violations.count()
    }

    /// Counted violations still allowed before the session is force-submitted.
    pub fn violations_left(&self) -> u32 {
        self.rules
            .violation_threshold
            .saturating_sub(self.violations.count())
    }

    pub fn result(&self) -> Option<&SessionResult> {
        self.result.as_ref()
    }
}

/// Format seconds as `MM:SS`.
pub fn format_clock(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
