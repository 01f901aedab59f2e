//! Host layer that runs the kernel against real adapters.

pub mod session;

pub use session::{CardView, Session};
