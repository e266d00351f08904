//! TUI state: everything the widgets render, and the transitions that keys,
//! timer ticks and focus events drive.
//!
//! `TuiState` never performs I/O. Transitions that need the network return an
//! [`Effect`] which the app loop carries out and feeds back through
//! [`TuiState::loaded`] or [`TuiState::scored`].

use super::keys::Action;
use quiz_application::{QuizFetchError, ScoreAttemptError};
use quiz_domain::{AttemptReport, QuizId, QuizSession, SessionError, SessionResult};
use rand::Rng;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// How long a flash message stays in the status bar
pub const FLASH_TTL: Duration = Duration::from_secs(3);

const MAX_JUMP_DIGITS: usize = 4;

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Fetching the public quiz view
    Loading,
    /// Quiz loaded, waiting for the user to start
    Intro,
    /// Session in progress
    Taking,
    /// Session submitted, fetching answers to score it
    Scoring,
    Results,
    Error,
}

/// Work the app loop must do after a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Fetch the quiz and prepare a session
    Load,
    /// Start the prepared session (needs a random source and a fresh timer)
    Start,
    /// Fetch the revealing view and score this result
    Score(SessionResult),
    Quit,
}

pub struct TuiState {
    pub quiz_id: QuizId,
    pub screen: Screen,
    pub session: Option<QuizSession>,
    pub report: Option<AttemptReport>,
    pub error: Option<String>,
    /// Highlighted option of the current question
    pub cursor: usize,
    /// Scroll offset of the results breakdown
    pub scroll: u16,
    pub flash_message: Option<(String, Instant)>,
    /// Digits typed into the go-to-question prompt, while it is open
    pub jump_input: Option<String>,
    pub should_quit: bool,
    /// A submitted result whose scoring failed and can be retried
    unscored: Option<SessionResult>,
}

impl TuiState {
    pub fn new(quiz_id: QuizId) -> Self {
        Self {
            quiz_id,
            screen: Screen::Loading,
            session: None,
            report: None,
            error: None,
            cursor: 0,
            scroll: 0,
            flash_message: None,
            jump_input: None,
            should_quit: false,
            unscored: None,
        }
    }

    // ==================== Flash ====================

    pub fn set_flash(&mut self, msg: impl Into<String>) {
        self.flash_message = Some((msg.into(), Instant::now()));
    }

    /// Clear flash if older than the given duration
    pub fn expire_flash(&mut self, max_age: Duration) {
        if let Some((_, created)) = &self.flash_message
            && created.elapsed() >= max_age
        {
            self.flash_message = None;
        }
    }

    // ==================== Async outcomes ====================

    /// Feed back the outcome of [`Effect::Load`].
    pub fn loaded(&mut self, outcome: Result<QuizSession, QuizFetchError>) {
        match outcome {
            Ok(session) => {
                debug!(quiz_id = %self.quiz_id, "Quiz loaded");
                self.session = Some(session);
                self.screen = Screen::Intro;
            }
            Err(e) => self.fail(e.to_string()),
        }
    }

    /// Feed back the outcome of [`Effect::Score`].
    pub fn scored(&mut self, outcome: Result<AttemptReport, ScoreAttemptError>) {
        match outcome {
            Ok(report) => {
                info!(
                    quiz_id = %self.quiz_id,
                    score = %report.score,
                    "Attempt scored"
                );
                self.unscored = None;
                self.report = Some(report);
                self.scroll = 0;
                self.screen = Screen::Results;
            }
            Err(e) => {
                // A mismatched result will never score; only keep retryable ones.
                let retryable = matches!(&e, ScoreAttemptError::Fetch(f) if f.is_retryable());
                if !retryable {
                    self.unscored = None;
                }
                self.fail(e.to_string());
            }
        }
    }

    fn fail(&mut self, message: String) {
        self.error = Some(message);
        self.screen = Screen::Error;
    }

    /// Start the loaded session. Returns whether it actually started.
    pub fn start<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        match session.start(rng) {
            Ok(()) => {
                self.screen = Screen::Taking;
                self.sync_cursor();
                true
            }
            Err(e) => {
                self.fail(e.to_string());
                false
            }
        }
    }

    // ==================== Event sources ====================

    /// One-second timer tick.
    pub fn on_tick(&mut self) -> Effect {
        if self.screen != Screen::Taking {
            return Effect::None;
        }
        match self.session.as_mut().and_then(|s| s.tick()) {
            Some(result) => self.finish(result),
            None => Effect::None,
        }
    }

    /// The terminal lost focus.
    pub fn on_focus_lost(&mut self, now: Instant) -> Effect {
        if self.screen != Screen::Taking {
            return Effect::None;
        }
        let Some(session) = self.session.as_mut() else {
            return Effect::None;
        };
        let before = session.violations();
        if let Some(result) = session.register_focus_loss(now) {
            return self.finish(result);
        }
        if session.violations() > before {
            let left = session.violations_left();
            self.set_flash(format!(
                "Focus lost! {} more and the quiz is submitted",
                left
            ));
        }
        Effect::None
    }

    /// Apply a user action.
    pub fn apply(&mut self, action: Action) -> Effect {
        match action {
            Action::None => Effect::None,
            Action::Quit => {
                self.should_quit = true;
                Effect::Quit
            }
            Action::Start => {
                if self.screen == Screen::Intro {
                    Effect::Start
                } else {
                    Effect::None
                }
            }
            Action::Retry => self.retry(),
            Action::ScrollUp => {
                self.scroll = self.scroll.saturating_sub(1);
                Effect::None
            }
            Action::ScrollDown => {
                self.scroll = self.scroll.saturating_add(1);
                Effect::None
            }
            Action::CursorUp => {
                self.cursor = self.cursor.saturating_sub(1);
                Effect::None
            }
            Action::CursorDown => {
                let last = self.option_count().saturating_sub(1);
                self.cursor = (self.cursor + 1).min(last);
                Effect::None
            }
            Action::Choose => self.select(self.cursor),
            Action::SelectOption(index) => self.select(index),
            Action::Next => self.navigate(Nav::Next),
            Action::Previous => self.navigate(Nav::Previous),
            Action::First => self.navigate(Nav::Jump(0)),
            Action::Last => {
                let count = self.session.as_ref().map_or(0, |s| s.question_count());
                self.navigate(Nav::Jump(count.saturating_sub(1)))
            }
            Action::NextUnanswered => match self.next_unanswered() {
                Some(index) => self.navigate(Nav::Jump(index)),
                None => {
                    self.set_flash("All questions answered: go to the last one and press s");
                    Effect::None
                }
            },
            Action::JumpTo(index) => self.navigate(Nav::Jump(index)),
            Action::BeginJump => {
                if self.screen == Screen::Taking {
                    self.jump_input = Some(String::new());
                }
                Effect::None
            }
            Action::JumpDigit(digit) => {
                if let Some(input) = self.jump_input.as_mut()
                    && input.len() < MAX_JUMP_DIGITS
                {
                    input.push(char::from(b'0' + digit.min(9)));
                }
                Effect::None
            }
            Action::JumpBackspace => {
                if let Some(input) = self.jump_input.as_mut() {
                    input.pop();
                }
                Effect::None
            }
            Action::CancelJump => {
                self.jump_input = None;
                Effect::None
            }
            Action::ConfirmJump => self.confirm_jump(),
            Action::Submit => self.submit(),
        }
    }

    /// Jump to the question number typed into the prompt (1-based).
    fn confirm_jump(&mut self) -> Effect {
        let Some(input) = self.jump_input.take() else {
            return Effect::None;
        };
        match input.parse::<usize>() {
            Ok(number) if number > 0 => self.navigate(Nav::Jump(number - 1)),
            _ => {
                if !input.is_empty() {
                    self.set_flash(format!("No question {}", input));
                }
                Effect::None
            }
        }
    }

    fn retry(&mut self) -> Effect {
        if self.screen != Screen::Error {
            return Effect::None;
        }
        self.error = None;
        if let Some(result) = self.unscored.clone() {
            self.screen = Screen::Scoring;
            return Effect::Score(result);
        }
        // Back to start: the quiz is fetched again.
        self.session = None;
        self.report = None;
        self.screen = Screen::Loading;
        Effect::Load
    }

    fn select(&mut self, index: usize) -> Effect {
        let Some(session) = self.session.as_mut() else {
            return Effect::None;
        };
        if self.screen != Screen::Taking {
            return Effect::None;
        }
        match session.select_option_at(index) {
            Ok(()) => self.cursor = index,
            Err(SessionError::QuestionOutOfRange { .. }) => {}
            Err(e) => self.set_flash(e.to_string()),
        }
        Effect::None
    }

    fn navigate(&mut self, nav: Nav) -> Effect {
        let Some(session) = self.session.as_mut() else {
            return Effect::None;
        };
        if self.screen != Screen::Taking {
            return Effect::None;
        }
        let at_end = matches!(nav, Nav::Next);
        let outcome = match nav {
            Nav::Next => session.next(),
            Nav::Previous => session.previous(),
            Nav::Jump(index) => session.jump_to(index).map(|()| true),
        };
        match outcome {
            Ok(false) if at_end => self.set_flash("Last question: press s to submit"),
            Ok(_) => {}
            Err(e) => self.set_flash(e.to_string()),
        }
        self.sync_cursor();
        Effect::None
    }

    fn submit(&mut self) -> Effect {
        let Some(session) = self.session.as_mut() else {
            return Effect::None;
        };
        if self.screen != Screen::Taking {
            return Effect::None;
        }
        match session.submit() {
            Ok(result) => self.finish(result),
            Err(SessionError::NotOnLastQuestion) => {
                self.set_flash("Submit is only available on the last question");
                Effect::None
            }
            Err(e) => {
                self.set_flash(e.to_string());
                Effect::None
            }
        }
    }

    fn finish(&mut self, result: SessionResult) -> Effect {
        info!(
            quiz_id = %result.quiz_id,
            reason = %result.reason,
            answered = result.user_answers.len(),
            "Session submitted"
        );
        self.jump_input = None;
        if result.reason.is_forced() {
            self.set_flash(format!("Quiz submitted automatically: {}", result.reason));
        }
        self.unscored = Some(result.clone());
        self.screen = Screen::Scoring;
        Effect::Score(result)
    }

    // ==================== Helpers ====================

    /// Put the cursor on the current question's selected option, or the top.
    fn sync_cursor(&mut self) {
        self.cursor = self
            .session
            .as_ref()
            .and_then(|s| {
                let selected = s.selected_option()?;
                s.current_question()?
                    .options
                    .iter()
                    .position(|o| o.id == selected)
            })
            .unwrap_or(0);
    }

    fn option_count(&self) -> usize {
        self.session
            .as_ref()
            .and_then(|s| s.current_question())
            .map_or(0, |q| q.options.len())
    }

    /// First unanswered question after the current one, wrapping around.
    fn next_unanswered(&self) -> Option<usize> {
        let session = self.session.as_ref()?;
        let len = session.question_count();
        let current = session.current_index();
        (1..=len)
            .map(|offset| (current + offset) % len)
            .find(|&index| !session.is_answered(index))
    }
}

enum Nav {
    Next,
    Previous,
    Jump(usize),
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_domain::{
        OptionId, Question, QuestionId, Quiz, QuizOption, Score, SessionRules, SubmitReason,
    };
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn quiz() -> Quiz {
        let quiz_id = QuizId::new(1);
        let mut quiz = Quiz::new(quiz_id, "General Knowledge Quiz");
        for n in 1..=3u32 {
            let qid = QuestionId::new(n);
            quiz = quiz.with_question(
                Question::new(qid, quiz_id, format!("Question {}", n))
                    .with_option(QuizOption::new(OptionId::new(n * 10 + 1), qid, "A"))
                    .with_option(QuizOption::new(OptionId::new(n * 10 + 2), qid, "B"))
                    .with_option(QuizOption::new(OptionId::new(n * 10 + 3), qid, "C")),
            );
        }
        quiz
    }

    fn rules() -> SessionRules {
        SessionRules::default()
            .with_time_limit(5)
            .with_violation_threshold(2)
            .without_shuffle()
    }

    fn taking() -> TuiState {
        let mut state = TuiState::new(QuizId::new(1));
        state.loaded(Ok(QuizSession::new(quiz(), rules())));
        assert_eq!(state.apply(Action::Start), Effect::Start);
        assert!(state.start(&mut StdRng::seed_from_u64(7)));
        state
    }

    fn session(state: &TuiState) -> &QuizSession {
        state.session.as_ref().unwrap()
    }

    fn report_for(result: SessionResult) -> AttemptReport {
        AttemptReport {
            score: Score::new(0, 3),
            review: Vec::new(),
            result,
        }
    }

    #[test]
    fn starts_on_loading_then_intro() {
        let mut state = TuiState::new(QuizId::new(1));
        assert_eq!(state.screen, Screen::Loading);
        state.loaded(Ok(QuizSession::new(quiz(), rules())));
        assert_eq!(state.screen, Screen::Intro);
    }

    #[test]
    fn load_failure_shows_error_and_retry_reloads() {
        let mut state = TuiState::new(QuizId::new(9));
        state.loaded(Err(QuizFetchError::NotFound(QuizId::new(9))));
        assert_eq!(state.screen, Screen::Error);
        assert_eq!(state.error.as_deref(), Some("Quiz with ID 9 not found"));

        assert_eq!(state.apply(Action::Retry), Effect::Load);
        assert_eq!(state.screen, Screen::Loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn start_is_ignored_outside_intro() {
        let mut state = TuiState::new(QuizId::new(1));
        assert_eq!(state.apply(Action::Start), Effect::None);
        assert!(!state.start(&mut StdRng::seed_from_u64(1)));
    }

    #[test]
    fn number_keys_select_and_overwrite() {
        let mut state = taking();
        state.apply(Action::SelectOption(1));
        assert_eq!(session(&state).selected_option(), Some(OptionId::new(12)));
        state.apply(Action::SelectOption(2));
        assert_eq!(session(&state).selected_option(), Some(OptionId::new(13)));
        assert_eq!(state.cursor, 2);
        assert_eq!(session(&state).answered_count(), 1);
    }

    #[test]
    fn out_of_range_option_is_ignored() {
        let mut state = taking();
        state.apply(Action::SelectOption(8));
        assert_eq!(session(&state).answered_count(), 0);
    }

    #[test]
    fn cursor_moves_within_options_and_chooses() {
        let mut state = taking();
        state.apply(Action::CursorUp);
        assert_eq!(state.cursor, 0);
        for _ in 0..5 {
            state.apply(Action::CursorDown);
        }
        assert_eq!(state.cursor, 2);
        state.apply(Action::Choose);
        assert_eq!(session(&state).selected_option(), Some(OptionId::new(13)));
    }

    #[test]
    fn navigation_keeps_answers_and_restores_cursor() {
        let mut state = taking();
        state.apply(Action::SelectOption(1));
        state.apply(Action::Next);
        assert_eq!(session(&state).current_index(), 1);
        assert_eq!(state.cursor, 0);

        state.apply(Action::Previous);
        assert_eq!(session(&state).current_index(), 0);
        assert_eq!(state.cursor, 1);
        assert_eq!(session(&state).selected_option(), Some(OptionId::new(12)));
    }

    #[test]
    fn next_on_last_question_flashes_hint() {
        let mut state = taking();
        state.apply(Action::Last);
        assert_eq!(session(&state).current_index(), 2);
        state.apply(Action::Next);
        assert_eq!(session(&state).current_index(), 2);
        assert!(state.flash_message.is_some());
    }

    #[test]
    fn tab_jumps_to_next_unanswered() {
        let mut state = taking();
        state.apply(Action::SelectOption(0));
        state.apply(Action::Next);
        state.apply(Action::SelectOption(0));
        state.apply(Action::First);

        state.apply(Action::NextUnanswered);
        assert_eq!(session(&state).current_index(), 2);

        state.apply(Action::SelectOption(0));
        state.apply(Action::NextUnanswered);
        assert_eq!(session(&state).current_index(), 2);
        assert!(state.flash_message.is_some());
    }

    #[test]
    fn jump_to_keeps_earlier_answers() {
        let mut state = taking();
        state.apply(Action::SelectOption(1));
        assert_eq!(session(&state).current_index(), 0);

        state.apply(Action::JumpTo(2));
        assert_eq!(session(&state).current_index(), 2);
        assert_eq!(state.cursor, 0);
        assert!(session(&state).is_answered(0));
        assert_eq!(session(&state).answered_count(), 1);

        state.apply(Action::JumpTo(0));
        assert_eq!(session(&state).selected_option(), Some(OptionId::new(12)));
        assert_eq!(state.cursor, 1);
    }

    #[test]
    fn jump_past_the_end_flashes_and_stays() {
        let mut state = taking();
        state.apply(Action::JumpTo(3));
        assert_eq!(session(&state).current_index(), 0);
        assert!(state.flash_message.is_some());
    }

    #[test]
    fn typed_question_number_jumps() {
        let mut state = taking();
        state.apply(Action::BeginJump);
        assert_eq!(state.jump_input.as_deref(), Some(""));
        state.apply(Action::JumpDigit(1));
        state.apply(Action::JumpDigit(2));
        state.apply(Action::JumpBackspace);
        state.apply(Action::JumpBackspace);
        state.apply(Action::JumpDigit(3));
        assert_eq!(state.jump_input.as_deref(), Some("3"));

        assert_eq!(state.apply(Action::ConfirmJump), Effect::None);
        assert!(state.jump_input.is_none());
        assert_eq!(session(&state).current_index(), 2);
    }

    #[test]
    fn jump_prompt_rejects_zero_and_cancels() {
        let mut state = taking();
        state.apply(Action::BeginJump);
        state.apply(Action::JumpDigit(0));
        state.apply(Action::ConfirmJump);
        assert_eq!(session(&state).current_index(), 0);
        assert!(state.flash_message.is_some());

        state.apply(Action::BeginJump);
        state.apply(Action::JumpDigit(2));
        state.apply(Action::CancelJump);
        assert!(state.jump_input.is_none());
        assert_eq!(session(&state).current_index(), 0);
    }

    #[test]
    fn jump_prompt_only_opens_while_taking() {
        let mut state = TuiState::new(QuizId::new(1));
        state.apply(Action::BeginJump);
        assert!(state.jump_input.is_none());
    }

    #[test]
    fn submit_only_from_last_question() {
        let mut state = taking();
        assert_eq!(state.apply(Action::Submit), Effect::None);
        assert_eq!(state.screen, Screen::Taking);

        state.apply(Action::Last);
        match state.apply(Action::Submit) {
            Effect::Score(result) => assert_eq!(result.reason, SubmitReason::Manual),
            other => panic!("expected Score, got {:?}", other),
        }
        assert_eq!(state.screen, Screen::Scoring);
    }

    #[test]
    fn timer_expiry_scores_once() {
        let mut state = taking();
        let mut scores = 0;
        for _ in 0..10 {
            if let Effect::Score(result) = state.on_tick() {
                assert_eq!(result.reason, SubmitReason::TimeExpired);
                assert_eq!(result.time_taken_secs, 5);
                scores += 1;
            }
        }
        assert_eq!(scores, 1);
    }

    #[test]
    fn ticks_before_start_do_nothing() {
        let mut state = TuiState::new(QuizId::new(1));
        state.loaded(Ok(QuizSession::new(quiz(), rules())));
        assert_eq!(state.on_tick(), Effect::None);
        assert_eq!(session(&state).elapsed_secs(), 0);
    }

    #[test]
    fn focus_losses_warn_then_submit() {
        let mut state = taking();
        let t0 = Instant::now();

        assert_eq!(state.on_focus_lost(t0), Effect::None);
        assert!(state.flash_message.is_some());
        // Inside the cooldown: counted once.
        assert_eq!(state.on_focus_lost(t0 + Duration::from_millis(10)), Effect::None);
        assert_eq!(session(&state).violations(), 1);

        match state.on_focus_lost(t0 + Duration::from_secs(2)) {
            Effect::Score(result) => assert_eq!(result.reason, SubmitReason::ViolationLimit),
            other => panic!("expected Score, got {:?}", other),
        }
        assert_eq!(state.on_focus_lost(t0 + Duration::from_secs(4)), Effect::None);
    }

    #[test]
    fn keys_are_inert_after_submission() {
        let mut state = taking();
        state.apply(Action::Last);
        state.apply(Action::Submit);
        assert_eq!(state.apply(Action::SelectOption(0)), Effect::None);
        assert_eq!(state.apply(Action::Submit), Effect::None);
    }

    #[test]
    fn scored_moves_to_results() {
        let mut state = taking();
        state.apply(Action::Last);
        let Effect::Score(result) = state.apply(Action::Submit) else {
            panic!("expected Score");
        };
        state.scored(Ok(report_for(result)));
        assert_eq!(state.screen, Screen::Results);
        assert!(state.report.is_some());

        state.apply(Action::ScrollDown);
        state.apply(Action::ScrollDown);
        state.apply(Action::ScrollUp);
        assert_eq!(state.scroll, 1);
    }

    #[test]
    fn scoring_failure_retries_the_same_result() {
        let mut state = taking();
        state.apply(Action::Last);
        let Effect::Score(result) = state.apply(Action::Submit) else {
            panic!("expected Score");
        };
        state.scored(Err(ScoreAttemptError::Fetch(QuizFetchError::Unexpected(
            "timeout".into(),
        ))));
        assert_eq!(state.screen, Screen::Error);
        assert_eq!(state.apply(Action::Retry), Effect::Score(result));
    }

    #[test]
    fn mismatched_result_falls_back_to_reload() {
        let mut state = taking();
        state.apply(Action::Last);
        state.apply(Action::Submit);
        state.scored(Err(ScoreAttemptError::QuizMismatch {
            expected: QuizId::new(1),
            actual: QuizId::new(2),
        }));
        assert_eq!(state.apply(Action::Retry), Effect::Load);
    }

    #[test]
    fn quit_sets_flag() {
        let mut state = TuiState::new(QuizId::new(1));
        assert_eq!(state.apply(Action::Quit), Effect::Quit);
        assert!(state.should_quit);
    }

    #[test]
    fn flash_expires() {
        let mut state = TuiState::new(QuizId::new(1));
        state.set_flash("hello");
        state.expire_flash(Duration::from_secs(60));
        assert!(state.flash_message.is_some());
        state.expire_flash(Duration::ZERO);
        assert!(state.flash_message.is_none());
    }
}
