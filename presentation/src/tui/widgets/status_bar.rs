//! Status bar: flash message, otherwise the key hints of the current screen

use crate::tui::state::{Screen, TuiState};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct StatusBarWidget<'a> {
    state: &'a TuiState,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

/// Key hints shown when no flash message is active
pub fn hints(screen: Screen) -> &'static str {
    match screen {
        Screen::Loading | Screen::Scoring => "q quit",
        Screen::Intro => "Enter start | q quit",
        Screen::Taking => {
            "1-9 answer | ↑↓ move | ←→ prev/next | Tab unanswered | g go to | s submit (last question) | q quit"
        }
        Screen::Results => "↑↓ scroll | q quit",
        Screen::Error => "r retry | q quit",
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if let Some(input) = &self.state.jump_input {
            let line = Line::from(vec![
                Span::styled(
                    format!("Go to question: {}_", input),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled("  Enter go | Esc cancel", Style::default().fg(Color::DarkGray)),
            ]);
            Paragraph::new(line).render(area, buf);
            return;
        }
        let line = match &self.state.flash_message {
            Some((msg, _)) => Line::from(Span::styled(
                msg.as_str(),
                Style::default().fg(Color::Yellow),
            )),
            None => Line::from(Span::styled(
                hints(self.state.screen),
                Style::default().fg(Color::DarkGray),
            )),
        };
        Paragraph::new(line).render(area, buf);
    }
}
