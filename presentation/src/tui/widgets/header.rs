//! Header widget: quiz title, position, clock and violation count

use crate::tui::state::TuiState;
use quiz_domain::format_clock;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Seconds left at which the clock turns red
const CLOCK_WARNING_SECS: u32 = 60;

pub struct HeaderWidget<'a> {
    state: &'a TuiState,
}

impl<'a> HeaderWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for HeaderWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Online Quiz ")
            .style(Style::default().fg(Color::White));

        let Some(session) = self.state.session.as_ref() else {
            Paragraph::new(Line::from(Span::styled(
                format!("Quiz #{}", self.state.quiz_id),
                Style::default().fg(Color::DarkGray),
            )))
            .block(block)
            .render(area, buf);
            return;
        };

        let remaining = session.remaining_secs();
        let clock_color = if remaining <= CLOCK_WARNING_SECS {
            Color::Red
        } else {
            Color::Green
        };
        let violation_color = if session.violations() == 0 {
            Color::DarkGray
        } else {
            Color::Yellow
        };

        let line = Line::from(vec![
            Span::styled(
                session.quiz().title.as_str(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::raw(format!(
                "Question {}/{}",
                session.current_index() + 1,
                session.question_count()
            )),
            Span::raw(" | "),
            Span::styled(
                format!("⏱ {}", format_clock(remaining)),
                Style::default()
                    .fg(clock_color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::styled(
                format!(
                    "Violations {}/{}",
                    session.violations(),
                    session.rules().violation_threshold
                ),
                Style::default().fg(violation_color),
            ),
        ]);

        Paragraph::new(line).block(block).render(area, buf);
    }
}
