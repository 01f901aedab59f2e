//! The windowed stack of cards starting at the current position.

use chrono::{DateTime, Utc};

use super::card::{ExitMotion, SwipeCard};
use super::decision::{Decision, DecisionLog, Direction};
use super::services::ports::Item;

#[derive(Debug, Clone)]
pub struct DeckStack {
    window: usize,
    cards: Vec<SwipeCard>,
}

impl DeckStack {
    pub fn new(window: usize) -> Self {
        Self {
            window: window.max(1),
            cards: Vec::new(),
        }
    }

    /// Rebuilds the visible cards for `current_index`, depth 0 first.
    pub fn relayout(&mut self, items: &[Item], current_index: usize) {
        let start = current_index.min(items.len());
        let end = (start + self.window).min(items.len());
        self.cards = items[start..end]
            .iter()
            .enumerate()
            .map(|(depth, item)| SwipeCard::new(item.id, depth))
            .collect();
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn cards(&self) -> &[SwipeCard] {
        &self.cards
    }

    pub fn card(&self, depth: usize) -> Option<&SwipeCard> {
        self.cards.get(depth)
    }

    pub fn top(&self) -> Option<&SwipeCard> {
        self.cards.first()
    }

    pub fn top_mut(&mut self) -> Option<&mut SwipeCard> {
        self.cards.first_mut()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Turns the top card's swipe into a decision for the item at `current_index` and appends it
    /// to `log`. The top card starts its exit from `(from_x, from_y)`.
    pub fn on_top_card_decided(
        &mut self,
        direction: Direction,
        from: (f64, f64),
        items: &[Item],
        current_index: usize,
        at: DateTime<Utc>,
        log: &mut DecisionLog,
    ) -> Option<Decision> {
        let item = items.get(current_index)?;
        let top = self.cards.first_mut()?;
        if top.item_id() != item.id || !top.is_interactive() {
            return None;
        }

        top.start_exit(ExitMotion {
            direction,
            from_x: from.0,
            from_y: from.1,
        });

        let decision = Decision::new(item, direction.choice(), at);
        log.append(decision.clone());
        Some(decision)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/deck.rs"]
mod tests;
