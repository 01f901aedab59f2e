//! Terminal host for the deck (crossterm + ratatui).
//!
//! Kept apart from `kernel` so the engine never depends on terminal crates.

pub mod crossterm;
pub mod input;
pub mod terminal_guard;
pub mod view;

use std::io;
use std::time::{Duration, Instant};

use ::crossterm::event;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

use self::input::{handle_event, Flow};
use self::terminal_guard::TerminalGuard;
use self::view::{DeckScreen, SummaryScreen};
use crate::app::Session;
use crate::kernel::services::ports::{DecisionSink, KeyValueStore};
use crate::kernel::SessionPhase;

const FRAME_BUDGET: Duration = Duration::from_millis(16);

pub fn run<S: KeyValueStore, K: DecisionSink>(session: &mut Session<S, K>) -> io::Result<()> {
    let guard = TerminalGuard::new()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let mut deck_area = Rect::default();

    loop {
        session.tick(Instant::now());

        terminal.draw(|frame| match session.phase() {
            SessionPhase::Complete => {
                let screen = SummaryScreen {
                    decisions: session.decisions(),
                    summary: session.summary(),
                };
                view::render_summary(frame, &screen);
            }
            SessionPhase::InProgress { .. } => {
                let cards = session.deck();
                let screen = DeckScreen {
                    cards: &cards,
                    progress: session.progress(),
                };
                deck_area = view::render_deck(frame, &screen);
            }
        })?;

        if !event::poll(FRAME_BUDGET)? {
            continue;
        }

        if handle_event(session, &event::read()?, deck_area) == Flow::Quit {
            break;
        }
    }

    guard.restore()
}
