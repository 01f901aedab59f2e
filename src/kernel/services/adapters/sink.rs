use crate::kernel::decision::{Decision, DecisionSummary};
use crate::kernel::services::ports::DecisionSink;

/// Keeps the most recently delivered sequence.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    delivered: Option<Vec<Decision>>,
    deliveries: usize,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delivered(&self) -> Option<&[Decision]> {
        self.delivered.as_deref()
    }

    pub fn deliveries(&self) -> usize {
        self.deliveries
    }
}

impl DecisionSink for RecordingSink {
    fn deliver(&mut self, decisions: &[Decision]) {
        self.delivered = Some(decisions.to_vec());
        self.deliveries += 1;
    }
}

/// Writes the buy/rent split to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DecisionSink for LogSink {
    fn deliver(&mut self, decisions: &[Decision]) {
        let summary = DecisionSummary::from_decisions(decisions);
        tracing::info!(
            total = summary.total,
            buy = summary.buy,
            rent = summary.rent,
            buy_percent = summary.buy_percent,
            rent_percent = summary.rent_percent,
            "decisions delivered"
        );
    }
}
