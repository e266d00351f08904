//! TUI widgets: ratatui components for the quiz screens
//!
//! Layout:
//! ┌── Header (3) ────────────────────────────────────┐
//! ├── Body (flex): intro / question / results ───────┤
//! ├── Navigator (3) ─────────────────────────────────┤
//! └── StatusBar (1) ─────────────────────────────────┘

pub mod body;
pub mod header;
pub mod navigator;
pub mod results;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Compute the main layout regions from a terminal area
pub struct MainLayout {
    pub header: Rect,
    pub body: Rect,
    pub navigator: Rect,
    pub status_bar: Rect,
}

impl MainLayout {
    pub fn compute(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            header: chunks[0],
            body: chunks[1],
            navigator: chunks[2],
            status_bar: chunks[3],
        }
    }
}
