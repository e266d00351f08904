//! TUI application: main loop
//!
//! ```text
//! QuizTuiApp (select! loop)
//!   ├─ crossterm EventStream   keys → KeyHandler → TuiState::apply
//!   │                          FocusLost → TuiState::on_focus_lost
//!   └─ one-second interval     TuiState::on_tick
//!
//! Effects returned by TuiState (Load / Start / Score) are carried out inline.
//! ```

use super::keys::KeyHandler;
use super::state::{Effect, FLASH_TTL, Screen, TuiState};
use super::widgets::{
    MainLayout, body::BodyWidget, header::HeaderWidget, navigator::NavigatorWidget,
    results::ResultsWidget, status_bar::StatusBarWidget,
};
use crossterm::{
    event::{DisableFocusChange, EnableFocusChange, Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::stream::StreamExt;
use quiz_application::{QuizGateway, ScoreAttemptUseCase, TakeQuizUseCase};
use quiz_domain::{AttemptReport, QuizId};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::time::{Interval, MissedTickBehavior};
use tracing::{debug, warn};

const TICK: Duration = Duration::from_secs(1);

/// Full-screen quiz session for one quiz
pub struct QuizTuiApp<G: QuizGateway + 'static> {
    quiz_id: QuizId,
    take: TakeQuizUseCase<G>,
    scorer: ScoreAttemptUseCase<G>,
    /// Shuffles questions and options when a session starts
    rng: StdRng,
}

impl<G: QuizGateway + 'static> QuizTuiApp<G> {
    pub fn new(quiz_id: QuizId, gateway: Arc<G>, rules: quiz_domain::SessionRules) -> Self {
        Self {
            quiz_id,
            take: TakeQuizUseCase::new(gateway.clone(), rules),
            scorer: ScoreAttemptUseCase::new(gateway),
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Replace the random source used to shuffle a starting session.
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    /// Run the TUI main loop. Returns the scored attempt if the user got that far.
    pub async fn run(&mut self) -> io::Result<Option<AttemptReport>> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableFocusChange)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Install panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableFocusChange);
            original_hook(info);
        }));

        let outcome = self.event_loop(&mut terminal).await;

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableFocusChange
        )?;
        terminal.show_cursor()?;

        outcome
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<Option<AttemptReport>> {
        let mut state = TuiState::new(self.quiz_id);
        let mut event_stream = EventStream::new();
        let mut tick = timer();
        let mut pending = Effect::Load;

        loop {
            terminal.draw(|frame| Self::render(frame, &state))?;

            if state.should_quit {
                break;
            }

            // Carry out pending work after the screen shows it is happening.
            if pending != Effect::None {
                let effect = std::mem::replace(&mut pending, Effect::None);
                pending = self.perform(&mut state, effect, &mut tick).await;
                continue;
            }

            tokio::select! {
                maybe_event = event_stream.next() => match maybe_event {
                    Some(Ok(event)) => pending = Self::handle_terminal_event(&mut state, event),
                    Some(Err(e)) => warn!("Terminal event error: {}", e),
                    None => break,
                },

                _ = tick.tick() => {
                    state.expire_flash(FLASH_TTL);
                    pending = state.on_tick();
                }
            }
        }

        Ok(state.report.take())
    }

    fn handle_terminal_event(state: &mut TuiState, event: Event) -> Effect {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let action = if state.jump_input.is_some() {
                    KeyHandler::handle_jump_prompt(key)
                } else {
                    KeyHandler::handle(state.screen, key)
                };
                state.apply(action)
            }
            Event::FocusLost => {
                debug!("Terminal lost focus");
                state.on_focus_lost(Instant::now())
            }
            _ => Effect::None,
        }
    }

    async fn perform(&mut self, state: &mut TuiState, effect: Effect, tick: &mut Interval) -> Effect {
        match effect {
            Effect::None => Effect::None,
            Effect::Quit => {
                state.should_quit = true;
                Effect::None
            }
            Effect::Load => {
                let outcome = self.take.prepare(self.quiz_id).await;
                state.loaded(outcome);
                Effect::None
            }
            Effect::Start => {
                if state.start(&mut self.rng) {
                    // The first tick lands one full second after start.
                    *tick = timer();
                }
                Effect::None
            }
            Effect::Score(result) => {
                let outcome = self.scorer.execute(self.quiz_id, result).await;
                state.scored(outcome);
                Effect::None
            }
        }
    }

    fn render(frame: &mut ratatui::Frame, state: &TuiState) {
        let layout = MainLayout::compute(frame.area());

        frame.render_widget(HeaderWidget::new(state), layout.header);
        if state.screen == Screen::Results {
            frame.render_widget(ResultsWidget::new(state), layout.body);
        } else {
            frame.render_widget(BodyWidget::new(state), layout.body);
        }
        frame.render_widget(NavigatorWidget::new(state), layout.navigator);
        frame.render_widget(StatusBarWidget::new(state), layout.status_bar);
    }
}

fn timer() -> Interval {
    let mut interval = tokio::time::interval_at(tokio::time::Instant::now() + TICK, TICK);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    interval
}
