//! Visual state of a single card in the stack.

use std::time::Duration;

use super::decision::{Choice, Direction};
use super::gesture::DragState;
use super::services::ports::DeckConfig;

/// Where an exiting card left from and which way it is going.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExitMotion {
    pub direction: Direction,
    pub from_x: f64,
    pub from_y: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum CardPhase {
    #[default]
    Resting,
    Dragging,
    Exiting(ExitMotion),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Follows the pointer directly.
    None,
    /// Eases back into its stack slot (also used for snap-back).
    Settle(Duration),
    /// Slides off-screen.
    Exit(Duration),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardStyle {
    pub translate_x: f64,
    pub translate_y: f64,
    pub rotation_deg: f64,
    pub scale: f64,
    pub opacity: f64,
    pub z_index: i32,
    pub transition: Transition,
    pub highlight: Option<Choice>,
}

/// Style of a card, derived only from its depth, the live drag and any exit in progress.
///
/// Drag and exit only apply at depth 0.
pub fn card_style(
    depth: usize,
    drag: &DragState,
    exit: Option<ExitMotion>,
    config: &DeckConfig,
) -> CardStyle {
    let d = depth as f64;
    let stagger = d * config.stagger;
    let mut style = CardStyle {
        translate_x: 0.0,
        translate_y: stagger,
        rotation_deg: 0.0,
        scale: (1.0 - d * config.scale_step).max(config.scale_floor),
        opacity: (1.0 - d * config.opacity_step).max(config.opacity_floor),
        z_index: 10 - depth as i32,
        transition: Transition::Settle(config.settle_duration()),
        highlight: None,
    };

    if depth != 0 {
        return style;
    }

    if let Some(exit) = exit {
        style.translate_x = exit.from_x + exit.direction.sign() * config.exit_offset;
        style.translate_y = exit.from_y + stagger;
        style.rotation_deg = exit.from_x * config.rotation_per_unit;
        style.transition = Transition::Exit(config.exit_duration());
        style.highlight = Some(exit.direction.choice());
    } else if drag.active {
        style.translate_x = drag.offset_x;
        style.translate_y = drag.offset_y + stagger;
        style.rotation_deg = drag.offset_x * config.rotation_per_unit;
        style.transition = Transition::None;
        style.highlight = drag.intent.direction().map(Direction::choice);
    }

    style
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeCard {
    item_id: u64,
    depth: usize,
    phase: CardPhase,
}

impl SwipeCard {
    pub fn new(item_id: u64, depth: usize) -> Self {
        Self {
            item_id,
            depth,
            phase: CardPhase::Resting,
        }
    }

    pub fn item_id(&self) -> u64 {
        self.item_id
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn phase(&self) -> CardPhase {
        self.phase
    }

    /// Only the top card takes input, and not once it is on its way out.
    pub fn is_interactive(&self) -> bool {
        self.depth == 0 && !matches!(self.phase, CardPhase::Exiting(_))
    }

    pub fn start_drag(&mut self) {
        if self.is_interactive() {
            self.phase = CardPhase::Dragging;
        }
    }

    pub fn snap_back(&mut self) {
        if self.phase == CardPhase::Dragging {
            self.phase = CardPhase::Resting;
        }
    }

    pub fn start_exit(&mut self, motion: ExitMotion) {
        if self.depth == 0 {
            self.phase = CardPhase::Exiting(motion);
        }
    }

    pub fn style(&self, drag: &DragState, config: &DeckConfig) -> CardStyle {
        match self.phase {
            CardPhase::Exiting(motion) => card_style(self.depth, drag, Some(motion), config),
            CardPhase::Dragging => card_style(self.depth, drag, None, config),
            CardPhase::Resting => card_style(self.depth, &DragState::default(), None, config),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/card.rs"]
mod tests;
