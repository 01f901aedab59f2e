use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

/// Drag units per terminal column / row.
pub const UNITS_PER_COL: f64 = 8.0;
pub const UNITS_PER_ROW: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerInput {
    Down { col: u16, row: u16 },
    Move { col: u16, row: u16 },
    Up,
}

/// Left button only; everything else is not a swipe.
pub fn into_pointer_input(event: &MouseEvent) -> Option<PointerInput> {
    let (col, row) = (event.column, event.row);
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(PointerInput::Down { col, row }),
        MouseEventKind::Drag(MouseButton::Left) => Some(PointerInput::Move { col, row }),
        MouseEventKind::Up(MouseButton::Left) => Some(PointerInput::Up),
        _ => None,
    }
}

pub fn to_units(col: u16, row: u16) -> (f64, f64) {
    (col as f64 * UNITS_PER_COL, row as f64 * UNITS_PER_ROW)
}

#[cfg(test)]
#[path = "../../tests/unit/tui/crossterm.rs"]
mod tests;
