use ::crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::layout::Rect;

use super::crossterm::{into_pointer_input, to_units, PointerInput};
use super::view;
use crate::app::Session;
use crate::kernel::services::ports::{DecisionSink, KeyValueStore, PointerSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Routes one terminal event into the session. `deck_area` is where the last frame drew the cards.
pub fn handle_event<S: KeyValueStore, K: DecisionSink>(
    session: &mut Session<S, K>,
    event: &Event,
    deck_area: Rect,
) -> Flow {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Flow::Quit,
            KeyCode::Char('r') => {
                session.reset();
            }
            _ => {}
        },
        Event::Mouse(mouse) => match into_pointer_input(mouse) {
            Some(PointerInput::Down { col, row }) => {
                let hit = {
                    let cards = session.deck();
                    view::hit_test(deck_area, &cards, col, row)
                };
                if let Some(depth) = hit {
                    let (x, y) = to_units(col, row);
                    session.pointer_down(depth, x, y, PointerSource::Mouse);
                }
            }
            Some(PointerInput::Move { col, row }) => {
                let (x, y) = to_units(col, row);
                session.pointer_move(x, y);
            }
            Some(PointerInput::Up) => {
                session.pointer_up();
            }
            None => {}
        },
        Event::FocusLost => {
            session.pointer_cancel();
        }
        _ => {}
    }
    Flow::Continue
}

#[cfg(test)]
#[path = "../../tests/unit/tui/input.rs"]
mod tests;
