//! Main body: intro card, current question, or a status message

use crate::tui::state::{Screen, TuiState};
use quiz_domain::{QuizSession, format_duration};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct BodyWidget<'a> {
    state: &'a TuiState,
}

impl<'a> BodyWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    fn intro_lines(session: &QuizSession) -> Vec<Line<'_>> {
        let quiz = session.quiz();
        let rules = session.rules();
        let mut lines = vec![
            Line::from(Span::styled(
                quiz.title.as_str(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        if let Some(description) = &quiz.description {
            lines.push(Line::from(description.as_str()));
            lines.push(Line::from(""));
        }
        lines.push(Line::from(format!("Questions:   {}", quiz.question_count())));
        lines.push(Line::from(format!(
            "Time limit:  {}",
            format_duration(rules.time_limit_secs)
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!(
                "Leaving the terminal counts as a violation; after {} the quiz is submitted.",
                rules.violation_threshold
            ),
            Style::default().fg(Color::Yellow),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Press Enter to start",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines
    }

    fn question_lines(&self, session: &'a QuizSession) -> Vec<Line<'a>> {
        let Some(question) = session.current_question() else {
            return Vec::new();
        };
        let selected = session.selected_option();

        let mut lines = vec![
            Line::from(Span::styled(
                question.question_text.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        for (index, option) in question.options.iter().enumerate() {
            let is_selected = selected == Some(option.id);
            let marker = if is_selected { "(●)" } else { "( )" };
            let mut style = if is_selected {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            };
            if index == self.state.cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }
            lines.push(Line::from(Span::styled(
                format!(" {} {}. {}", marker, index + 1, option.option_text),
                style,
            )));
        }
        if session.is_last_question() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Last question: press s to submit",
                Style::default().fg(Color::DarkGray),
            )));
        }
        lines
    }
}

impl<'a> Widget for BodyWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL);
        let session = self.state.session.as_ref();

        let (lines, alignment) = match (self.state.screen, session) {
            (Screen::Intro, Some(session)) => (Self::intro_lines(session), Alignment::Center),
            (Screen::Taking, Some(session)) => (self.question_lines(session), Alignment::Left),
            (Screen::Scoring, _) => (
                vec![Line::from("Submitting... checking your answers")],
                Alignment::Center,
            ),
            (Screen::Error, _) => (
                vec![
                    Line::from(Span::styled(
                        "Something went wrong",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )),
                    Line::from(""),
                    Line::from(self.state.error.as_deref().unwrap_or("Unknown error")),
                    Line::from(""),
                    Line::from("Press r to go back to the start"),
                ],
                Alignment::Center,
            ),
            _ => (vec![Line::from("Loading quiz...")], Alignment::Center),
        };

        Paragraph::new(lines)
            .block(block)
            .alignment(alignment)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
