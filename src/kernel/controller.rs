use super::decision::{DecisionLog, DecisionSummary};
use super::gesture::{GestureTracker, SwipeOutcome};
use super::services::ports::{DeckConfig, Item};
use super::state::{SessionPhase, SessionState};
use super::{Action, DeckStack, Effect};

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn unchanged() -> Self {
        Self {
            effects: Vec::new(),
            state_changed: false,
        }
    }

    fn changed(effects: Vec<Effect>) -> Self {
        Self {
            effects,
            state_changed: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    /// 1-based card number shown to the user, capped at `total`.
    pub position: usize,
    pub total: usize,
    pub fraction: f64,
}

pub struct SessionController {
    items: Vec<Item>,
    config: DeckConfig,
    state: SessionState,
    tracker: GestureTracker,
    deck: DeckStack,
    next_token: u64,
    pending_unlock: Option<u64>,
}

impl SessionController {
    /// Builds the controller from the persisted snapshot, if any.
    pub fn restore(items: Vec<Item>, config: DeckConfig, snapshot: Option<&str>) -> Self {
        let log = DecisionLog::restore(snapshot, &items);
        let state = SessionState::resume(log);
        let mut deck = DeckStack::new(config.window());
        deck.relayout(&items, state.current_index());

        tracing::info!(
            items = items.len(),
            resumed_at = state.current_index(),
            "session mounted"
        );

        Self {
            tracker: GestureTracker::new(config.thresholds()),
            items,
            config,
            state,
            deck,
            next_token: 0,
            pending_unlock: None,
        }
    }

    /// Effects owed right after mounting: a session restored at its end reports completion.
    pub fn mount_effects(&self) -> Vec<Effect> {
        match self.phase() {
            SessionPhase::Complete => vec![Effect::SessionComplete(
                self.state.decisions().as_slice().to_vec(),
            )],
            SessionPhase::InProgress { .. } => Vec::new(),
        }
    }

    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn tracker(&self) -> &GestureTracker {
        &self.tracker
    }

    pub fn deck(&self) -> &DeckStack {
        &self.deck
    }

    pub fn phase(&self) -> SessionPhase {
        self.state.phase(self.items.len())
    }

    pub fn current_item(&self) -> Option<&Item> {
        match self.phase() {
            SessionPhase::InProgress { index } => self.items.get(index),
            SessionPhase::Complete => None,
        }
    }

    pub fn item(&self, id: u64) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn pending_unlock(&self) -> Option<u64> {
        self.pending_unlock
    }

    pub fn summary(&self) -> DecisionSummary {
        self.state.decisions().summary()
    }

    pub fn progress(&self) -> Progress {
        let total = self.items.len();
        let index = self.state.current_index().min(total);
        let fraction = if total == 0 {
            0.0
        } else {
            index as f64 / total as f64
        };
        Progress {
            position: (index + 1).min(total),
            total,
            fraction,
        }
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::PointerDown {
                depth,
                x,
                y,
                source,
            } => {
                if self.phase() == SessionPhase::Complete || self.deck.card(depth).is_none() {
                    return DispatchResult::unchanged();
                }
                if !self
                    .tracker
                    .begin(depth, self.state.locked(), x, y, source)
                {
                    return DispatchResult::unchanged();
                }
                if let Some(top) = self.deck.top_mut() {
                    top.start_drag();
                }
                tracing::debug!(?source, x, y, "drag started");
                DispatchResult::changed(vec![Effect::AttachPointerListeners])
            }
            Action::PointerMove { x, y } => match self.tracker.update(x, y) {
                Some(_) => DispatchResult::changed(Vec::new()),
                None => DispatchResult::unchanged(),
            },
            Action::PointerUp { at } => {
                let drag = *self.tracker.drag();
                let Some(outcome) = self.tracker.end() else {
                    return DispatchResult::unchanged();
                };
                let mut effects = vec![Effect::DetachPointerListeners];

                match outcome {
                    SwipeOutcome::SnapBack => {
                        if let Some(top) = self.deck.top_mut() {
                            top.snap_back();
                        }
                        tracing::debug!(dx = drag.offset_x, "snap back");
                    }
                    SwipeOutcome::Decided(direction) => {
                        let index = self.state.current_index();
                        let items = &self.items;
                        let deck = &mut self.deck;
                        let decided = self.state.apply_decision(|log| {
                            deck.on_top_card_decided(
                                direction,
                                (drag.offset_x, drag.offset_y),
                                items,
                                index,
                                at,
                                log,
                            )
                        });

                        match decided {
                            Some(decision) => {
                                self.next_token += 1;
                                let token = self.next_token;
                                self.pending_unlock = Some(token);
                                tracing::debug!(
                                    item = decision.item_id,
                                    choice = ?decision.choice,
                                    index,
                                    "decision recorded"
                                );
                                effects.push(Effect::PersistDecisions(
                                    self.state.decisions().to_snapshot(),
                                ));
                                effects.push(Effect::ScheduleUnlock {
                                    token,
                                    after: self.config.exit_duration(),
                                });
                            }
                            None => {
                                if let Some(top) = self.deck.top_mut() {
                                    top.snap_back();
                                }
                            }
                        }
                    }
                }

                DispatchResult::changed(effects)
            }
            Action::PointerCancel => {
                if !self.tracker.cancel() {
                    return DispatchResult::unchanged();
                }
                if let Some(top) = self.deck.top_mut() {
                    top.snap_back();
                }
                DispatchResult::changed(vec![Effect::DetachPointerListeners])
            }
            Action::ExitAnimationFinished { token } => {
                if self.pending_unlock != Some(token) {
                    return DispatchResult::unchanged();
                }
                self.pending_unlock = None;
                if !self.state.finish_transition() {
                    return DispatchResult::unchanged();
                }
                self.deck.relayout(&self.items, self.state.current_index());

                let mut effects = Vec::new();
                if self.phase() == SessionPhase::Complete {
                    tracing::info!(decisions = self.state.decisions().len(), "session complete");
                    effects.push(Effect::SessionComplete(
                        self.state.decisions().as_slice().to_vec(),
                    ));
                }
                DispatchResult::changed(effects)
            }
            Action::Reset => {
                let mut effects = Vec::new();
                if self.tracker.cancel() {
                    effects.push(Effect::DetachPointerListeners);
                }
                if let Some(token) = self.pending_unlock.take() {
                    effects.push(Effect::CancelUnlock { token });
                }
                effects.push(Effect::ClearPersisted);

                self.state.reset();
                self.deck.relayout(&self.items, 0);
                tracing::info!("session reset");
                DispatchResult::changed(effects)
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/controller.rs"]
mod tests;
