use chrono::{DateTime, Utc};

use super::services::ports::PointerSource;

#[derive(Debug, Clone)]
pub enum Action {
    PointerDown {
        depth: usize,
        x: f64,
        y: f64,
        source: PointerSource,
    },
    PointerMove {
        x: f64,
        y: f64,
    },
    PointerUp {
        at: DateTime<Utc>,
    },
    PointerCancel,
    ExitAnimationFinished {
        token: u64,
    },
    Reset,
}
