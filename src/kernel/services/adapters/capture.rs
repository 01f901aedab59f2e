use crate::kernel::services::ports::PointerCapture;

/// For hosts that already route every pointer event to the session.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCapture;

impl PointerCapture for NullCapture {
    fn subscribe(&mut self) {}

    fn unsubscribe(&mut self) {}
}
