//! Question navigator: one cell per question, answered ones highlighted

use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct NavigatorWidget<'a> {
    state: &'a TuiState,
}

impl<'a> NavigatorWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for NavigatorWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        let mut title = " Questions ".to_string();

        if let Some(session) = self.state.session.as_ref() {
            title = format!(
                " Questions ({}/{} answered) ",
                session.answered_count(),
                session.question_count()
            );
            for index in 0..session.question_count() {
                let mut style = if session.is_answered(index) {
                    Style::default().fg(Color::Black).bg(Color::Green)
                } else {
                    Style::default().fg(Color::White)
                };
                if index == session.current_index() {
                    style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
                }
                spans.push(Span::styled(format!(" {} ", index + 1), style));
                spans.push(Span::raw(" "));
            }
        }

        let block = Block::default().borders(Borders::ALL).title(title);
        Paragraph::new(Line::from(spans))
            .block(block)
            .render(area, buf);
    }
}
