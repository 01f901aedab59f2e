//! Service ports: traits + data contracts.

pub mod clock;
pub mod config;
pub mod input;
pub mod item;
pub mod sink;
pub mod storage;

#[cfg(test)]
pub use clock::FixedClock;
pub use clock::{Clock, SystemClock};
pub use config::DeckConfig;
pub use input::{PointerCapture, PointerSource};
pub use item::Item;
pub use sink::DecisionSink;
pub use storage::KeyValueStore;
