//! Results screen: score summary and per-question breakdown

use crate::tui::state::TuiState;
use quiz_domain::{AttemptReport, ReviewOutcome, ScoreBand};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct ResultsWidget<'a> {
    state: &'a TuiState,
}

impl<'a> ResultsWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

fn band_color(band: ScoreBand) -> Color {
    match band {
        ScoreBand::Excellent => Color::Green,
        ScoreBand::Good => Color::Cyan,
        ScoreBand::Fair => Color::Yellow,
        ScoreBand::NeedsPractice => Color::Red,
    }
}

fn report_lines(report: &AttemptReport) -> Vec<Line<'_>> {
    let band = report.score.band();
    let mut lines = vec![
        Line::from(Span::styled(
            report.result.quiz_title.as_str(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("Score: "),
            Span::styled(
                format!(
                    "{}/{} ({}%)",
                    report.score.correct, report.score.total, report.score.percentage
                ),
                Style::default()
                    .fg(band_color(band))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(band.label(), Style::default().fg(band_color(band))),
        ]),
        Line::from(format!("Time taken: {}", report.time_taken())),
    ];
    if report.result.reason.is_forced() {
        lines.push(Line::from(Span::styled(
            format!("Submitted automatically: {}", report.result.reason),
            Style::default().fg(Color::Yellow),
        )));
    }
    lines.push(Line::from(""));

    for (index, row) in report.review.iter().enumerate() {
        let (mark, color) = match row.outcome {
            ReviewOutcome::Correct => ("✓", Color::Green),
            ReviewOutcome::Incorrect => ("✗", Color::Red),
            ReviewOutcome::Unanswered => ("-", Color::DarkGray),
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", mark), Style::default().fg(color)),
            Span::raw(format!("{}. {}", index + 1, row.question_text)),
        ]));
        let answer = row.selected_text.as_deref().unwrap_or("(no answer)");
        lines.push(Line::from(Span::styled(
            format!("    Your answer: {}", answer),
            Style::default().fg(color),
        )));
        if !row.outcome.is_correct()
            && let Some(correct) = &row.correct_text
        {
            lines.push(Line::from(Span::styled(
                format!("    Correct:     {}", correct),
                Style::default().fg(Color::Green),
            )));
        }
    }
    lines
}

impl<'a> Widget for ResultsWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL).title(" Results ");
        let lines = self
            .state
            .report
            .as_ref()
            .map(report_lines)
            .unwrap_or_default();

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.state.scroll, 0))
            .render(area, buf);
    }
}
