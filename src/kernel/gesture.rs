//! Drag tracking for the top card.
//!
//! Mouse, touch and pen input all arrive as plain coordinates; the tracker only cares about the
//! horizontal travel since the drag began. Vertical travel is carried along for rendering.

use super::decision::Direction;
use super::services::ports::PointerSource;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureThresholds {
    pub intent: f64,
    pub release: f64,
}

impl Default for GestureThresholds {
    fn default() -> Self {
        Self {
            intent: 50.0,
            release: 120.0,
        }
    }
}

/// Provisional direction shown while dragging. Visual only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Intent {
    #[default]
    None,
    Left,
    Right,
}

impl Intent {
    pub fn from_dx(dx: f64, threshold: f64) -> Self {
        if dx > threshold {
            Intent::Right
        } else if dx < -threshold {
            Intent::Left
        } else {
            Intent::None
        }
    }

    pub fn direction(self) -> Option<Direction> {
        match self {
            Intent::None => None,
            Intent::Left => Some(Direction::Left),
            Intent::Right => Some(Direction::Right),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragVector {
    pub dx: f64,
    pub dy: f64,
    pub intent: Intent,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragState {
    pub active: bool,
    pub origin_x: f64,
    pub origin_y: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub intent: Intent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    Decided(Direction),
    SnapBack,
}

#[derive(Debug, Default)]
pub struct GestureTracker {
    thresholds: GestureThresholds,
    drag: DragState,
    source: Option<PointerSource>,
}

impl GestureTracker {
    pub fn new(thresholds: GestureThresholds) -> Self {
        Self {
            thresholds,
            drag: DragState::default(),
            source: None,
        }
    }

    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    pub fn is_active(&self) -> bool {
        self.drag.active
    }

    pub fn source(&self) -> Option<PointerSource> {
        self.source
    }

    /// Starts a drag. Only the card at depth 0 may start one, never while an exit is in flight,
    /// and never on top of a drag that is already running.
    pub fn begin(
        &mut self,
        depth: usize,
        locked: bool,
        x: f64,
        y: f64,
        source: PointerSource,
    ) -> bool {
        if depth != 0 || locked || self.drag.active {
            return false;
        }

        self.drag = DragState {
            active: true,
            origin_x: x,
            origin_y: y,
            ..DragState::default()
        };
        self.source = Some(source);
        true
    }

    pub fn update(&mut self, x: f64, y: f64) -> Option<DragVector> {
        if !self.drag.active {
            return None;
        }

        let dx = x - self.drag.origin_x;
        let dy = y - self.drag.origin_y;
        let intent = Intent::from_dx(dx, self.thresholds.intent);

        self.drag.offset_x = dx;
        self.drag.offset_y = dy;
        self.drag.intent = intent;

        Some(DragVector { dx, dy, intent })
    }

    /// Finishes the drag. The release threshold looks at horizontal travel only.
    pub fn end(&mut self) -> Option<SwipeOutcome> {
        if !self.drag.active {
            return None;
        }

        let dx = self.drag.offset_x;
        self.reset();

        if dx.abs() > self.thresholds.release {
            let direction = if dx > 0.0 {
                Direction::Right
            } else {
                Direction::Left
            };
            Some(SwipeOutcome::Decided(direction))
        } else {
            Some(SwipeOutcome::SnapBack)
        }
    }

    /// Drops an active drag without deciding anything.
    pub fn cancel(&mut self) -> bool {
        let was_active = self.drag.active;
        self.reset();
        was_active
    }

    fn reset(&mut self) {
        self.drag = DragState::default();
        self.source = None;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/gesture.rs"]
mod tests;
