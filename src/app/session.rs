//! Host-side runtime: feeds input into the controller and carries out its effects.

use std::time::{Duration, Instant};

use crate::kernel::services::adapters::NullCapture;
use crate::kernel::services::ports::{
    Clock, DeckConfig, DecisionSink, Item, KeyValueStore, PointerCapture, PointerSource,
    SystemClock,
};
use crate::kernel::{
    Action, CardStyle, Decision, DecisionSummary, Effect, Progress, SessionController,
    SessionPhase, SwipeCard,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingUnlock {
    token: u64,
    scheduled_at: Instant,
    after: Duration,
}

impl PendingUnlock {
    fn due_at(&self) -> Instant {
        self.scheduled_at + self.after
    }
}

/// A visible card together with the item it shows and how to draw it.
#[derive(Debug, Clone, Copy)]
pub struct CardView<'a> {
    pub card: SwipeCard,
    pub item: &'a Item,
    pub style: CardStyle,
}

pub struct Session<S, K> {
    controller: SessionController,
    store: S,
    sink: K,
    capture: Box<dyn PointerCapture>,
    clock: Box<dyn Clock>,
    pending_unlock: Option<PendingUnlock>,
    listening: bool,
}

impl<S: KeyValueStore, K: DecisionSink> Session<S, K> {
    /// Reads the saved decisions once and resumes from them.
    pub fn mount(items: Vec<Item>, config: DeckConfig, store: S, sink: K) -> Self {
        let snapshot = store.get(&config.storage_key);
        let controller = SessionController::restore(items, config, snapshot.as_deref());
        let effects = controller.mount_effects();

        let mut session = Self {
            controller,
            store,
            sink,
            capture: Box::new(NullCapture),
            clock: Box::new(SystemClock),
            pending_unlock: None,
            listening: false,
        };
        session.run_effects(effects);
        session
    }

    pub fn with_capture(mut self, capture: Box<dyn PointerCapture>) -> Self {
        self.capture = capture;
        self
    }

    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn controller(&self) -> &SessionController {
        &self.controller
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    pub fn phase(&self) -> SessionPhase {
        self.controller.phase()
    }

    pub fn current_index(&self) -> usize {
        self.controller.state().current_index()
    }

    pub fn current_item(&self) -> Option<&Item> {
        self.controller.current_item()
    }

    pub fn decisions(&self) -> &[Decision] {
        self.controller.state().decisions().as_slice()
    }

    pub fn summary(&self) -> DecisionSummary {
        self.controller.summary()
    }

    pub fn progress(&self) -> Progress {
        self.controller.progress()
    }

    pub fn is_locked(&self) -> bool {
        self.controller.state().locked()
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    pub fn unlock_due_at(&self) -> Option<Instant> {
        self.pending_unlock.map(|pending| pending.due_at())
    }

    /// Visible cards, top card first.
    pub fn deck(&self) -> Vec<CardView<'_>> {
        let drag = self.controller.tracker().drag();
        let config = self.controller.config();
        self.controller
            .deck()
            .cards()
            .iter()
            .filter_map(|card| {
                let item = self.controller.item(card.item_id())?;
                Some(CardView {
                    card: *card,
                    item,
                    style: card.style(drag, config),
                })
            })
            .collect()
    }

    pub fn pointer_down(&mut self, depth: usize, x: f64, y: f64, source: PointerSource) -> bool {
        self.dispatch(Action::PointerDown {
            depth,
            x,
            y,
            source,
        })
    }

    /// Moves outside an active drag are not ours to handle.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> bool {
        if !self.listening {
            return false;
        }
        self.dispatch(Action::PointerMove { x, y })
    }

    pub fn pointer_up(&mut self) -> bool {
        if !self.listening {
            return false;
        }
        let at = self.clock.now();
        self.dispatch(Action::PointerUp { at })
    }

    pub fn pointer_cancel(&mut self) -> bool {
        if !self.listening {
            return false;
        }
        self.dispatch(Action::PointerCancel)
    }

    /// Fires the exit-animation unlock once it is due.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.pending_unlock {
            Some(pending) if now >= pending.due_at() => self.fire_unlock(pending.token),
            _ => false,
        }
    }

    /// Releases the exit-animation lock right away, e.g. on an animation-complete signal.
    pub fn finish_exit_animation(&mut self) -> bool {
        match self.pending_unlock {
            Some(pending) => self.fire_unlock(pending.token),
            None => false,
        }
    }

    pub fn reset(&mut self) -> bool {
        self.dispatch(Action::Reset)
    }

    fn fire_unlock(&mut self, token: u64) -> bool {
        self.pending_unlock = None;
        self.dispatch(Action::ExitAnimationFinished { token })
    }

    fn dispatch(&mut self, action: Action) -> bool {
        let result = self.controller.dispatch(action);
        self.run_effects(result.effects);
        result.state_changed
    }

    fn run_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::AttachPointerListeners => {
                    if !self.listening {
                        self.listening = true;
                        self.capture.subscribe();
                    }
                }
                Effect::DetachPointerListeners => {
                    if self.listening {
                        self.listening = false;
                        self.capture.unsubscribe();
                    }
                }
                Effect::ScheduleUnlock { token, after } => {
                    self.pending_unlock = Some(PendingUnlock {
                        token,
                        scheduled_at: self.clock.instant(),
                        after,
                    });
                }
                Effect::CancelUnlock { token } => {
                    if self.pending_unlock.is_some_and(|pending| pending.token == token) {
                        self.pending_unlock = None;
                    }
                }
                Effect::PersistDecisions(snapshot) => {
                    let key = self.controller.config().storage_key.clone();
                    self.store.set(&key, snapshot);
                }
                Effect::ClearPersisted => {
                    let key = self.controller.config().storage_key.clone();
                    self.store.remove(&key);
                }
                Effect::SessionComplete(decisions) => {
                    self.sink.deliver(&decisions);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/session.rs"]
mod tests;
