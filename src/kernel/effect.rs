use std::time::Duration;

use super::decision::Decision;

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    AttachPointerListeners,
    DetachPointerListeners,
    ScheduleUnlock { token: u64, after: Duration },
    CancelUnlock { token: u64 },
    PersistDecisions(String),
    ClearPersisted,
    SessionComplete(Vec<Decision>),
}
