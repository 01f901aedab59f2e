/// Host capability for following a drag outside the card's bounds.
///
/// `subscribe` is called when a drag starts and `unsubscribe` as soon as it ends, so
/// move/up routing never outlives the gesture.
pub trait PointerCapture {
    fn subscribe(&mut self);

    fn unsubscribe(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerSource {
    Mouse,
    Touch,
    Pen,
}
