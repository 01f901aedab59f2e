//! swipedeck - buy-or-rent swipe deck engine
//!
//! Module layout:
//! - kernel: headless core (gesture tracking, card stack, decision log, session controller)
//! - kernel::services: ports (storage, sink, input capture, clock, config) and adapters
//! - app: host runtime that executes kernel effects
//! - logging: tracing setup
//! - tui: terminal host (feature `tui`)

pub mod app;
pub mod kernel;
pub mod logging;
#[cfg(feature = "tui")]
pub mod tui;
