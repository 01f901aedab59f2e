use super::decision::{Decision, DecisionLog};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    InProgress { index: usize },
    Complete,
}

/// Position, decisions and the exit-animation lock.
///
/// `decisions.len() == current_index` except between a release and the matching unlock, when
/// the log is one ahead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    current_index: usize,
    decisions: DecisionLog,
    locked: bool,
}

impl SessionState {
    /// Resumes at the end of `decisions`. The log must already be cut to the item count.
    pub fn resume(decisions: DecisionLog) -> Self {
        Self {
            current_index: decisions.len(),
            decisions,
            locked: false,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn decisions(&self) -> &DecisionLog {
        &self.decisions
    }

    pub fn locked(&self) -> bool {
        self.locked
    }

    pub fn phase(&self, total_items: usize) -> SessionPhase {
        if self.current_index >= total_items {
            SessionPhase::Complete
        } else {
            SessionPhase::InProgress {
                index: self.current_index,
            }
        }
    }

    /// Records the decision and holds the lock until `finish_transition`.
    pub fn apply_decision(
        &mut self,
        record: impl FnOnce(&mut DecisionLog) -> Option<Decision>,
    ) -> Option<Decision> {
        if self.locked {
            return None;
        }
        let decision = record(&mut self.decisions)?;
        self.locked = true;
        Some(decision)
    }

    /// Second half of a decision: advance past the decided item and release the lock.
    pub fn finish_transition(&mut self) -> bool {
        if !self.locked {
            return false;
        }
        self.current_index = self.decisions.len();
        self.locked = false;
        true
    }

    pub fn reset(&mut self) {
        self.current_index = 0;
        self.decisions.clear();
        self.locked = false;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/state.rs"]
mod tests;
