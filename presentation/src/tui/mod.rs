//! Full-screen terminal quiz client
//!
//! Built on ratatui + crossterm. [`TuiState`] holds every transition and is
//! tested without a terminal; [`QuizTuiApp`] owns the terminal and the
//! select loop.

pub mod app;
pub mod keys;
pub mod state;
pub mod widgets;

pub use app::QuizTuiApp;
pub use keys::{Action, KeyHandler};
pub use state::{Effect, Screen, TuiState};
