//! Key bindings, per screen
//!
//! | Screen  | Keys |
//! |---------|------|
//! | Intro   | `Enter`/`Space` start, `q`/`Esc` quit |
//! | Taking  | `1`-`9` pick option, `↑↓`/`k j` move, `Enter`/`Space` pick highlighted, `←→`/`h l` previous/next, `Home`/`End` first/last, `Tab` next unanswered, `g` then a number go to question, `F1`-`F12` questions 1-12, `s` submit |
//! | Results | `↑↓`/`k j` scroll, `q`/`Esc`/`Enter` quit |
//! | Error   | `r`/`Enter` retry, `q`/`Esc` quit |
//!
//! While the `g` prompt is open, digits type the question number, `Backspace`
//! erases, `Enter` jumps and `Esc` closes the prompt.
//!
//! `Ctrl+C` quits from anywhere.

use super::state::Screen;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// User action derived from key events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Start,
    /// Back to start after an error
    Retry,
    /// Pick the option at this display index
    SelectOption(usize),
    CursorUp,
    CursorDown,
    /// Pick the highlighted option
    Choose,
    Next,
    Previous,
    First,
    Last,
    NextUnanswered,
    /// Go to the question at this index
    JumpTo(usize),
    /// Open the go-to-question prompt
    BeginJump,
    /// Digit typed into the prompt
    JumpDigit(u8),
    JumpBackspace,
    ConfirmJump,
    CancelJump,
    Submit,
    ScrollUp,
    ScrollDown,
    None,
}

pub struct KeyHandler;

impl KeyHandler {
    pub fn handle(screen: Screen, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }
        match screen {
            Screen::Loading | Screen::Scoring => Self::handle_busy(key),
            Screen::Intro => Self::handle_intro(key),
            Screen::Taking => Self::handle_taking(key),
            Screen::Results => Self::handle_results(key),
            Screen::Error => Self::handle_error(key),
        }
    }

    /// Keys while the go-to-question prompt is open
    pub fn handle_jump_prompt(key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }
        match key.code {
            KeyCode::Char(c @ '0'..='9') => Action::JumpDigit(c as u8 - b'0'),
            KeyCode::Backspace => Action::JumpBackspace,
            KeyCode::Enter => Action::ConfirmJump,
            KeyCode::Esc => Action::CancelJump,
            _ => Action::None,
        }
    }

    fn handle_busy(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }

    fn handle_intro(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Action::Start,
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }

    fn handle_taking(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char(c @ '1'..='9') => Action::SelectOption(c as usize - '1' as usize),
            KeyCode::Up | KeyCode::Char('k') => Action::CursorUp,
            KeyCode::Down | KeyCode::Char('j') => Action::CursorDown,
            KeyCode::Enter | KeyCode::Char(' ') => Action::Choose,
            KeyCode::Right | KeyCode::Char('l') => Action::Next,
            KeyCode::Left | KeyCode::Char('h') => Action::Previous,
            KeyCode::Home => Action::First,
            KeyCode::End => Action::Last,
            KeyCode::Tab => Action::NextUnanswered,
            KeyCode::Char('g') => Action::BeginJump,
            KeyCode::F(n @ 1..=12) => Action::JumpTo(n as usize - 1),
            KeyCode::Char('s') => Action::Submit,
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }

    fn handle_results(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => Action::ScrollUp,
            KeyCode::Down | KeyCode::Char('j') => Action::ScrollDown,
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter => Action::Quit,
            _ => Action::None,
        }
    }

    fn handle_error(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('r') | KeyCode::Enter => Action::Retry,
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }
}
