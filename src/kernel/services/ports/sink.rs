use crate::kernel::decision::Decision;

/// Receives the finished, ordered decisions once the last card is decided.
pub trait DecisionSink {
    fn deliver(&mut self, decisions: &[Decision]);
}
