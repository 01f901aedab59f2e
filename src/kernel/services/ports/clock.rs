use std::time::Instant;

use chrono::{DateTime, Utc};

/// Wall-clock time for decision timestamps plus a monotonic instant for timers.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    fn instant(&self) -> Instant;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn instant(&self) -> Instant {
        Instant::now()
    }
}

/// Frozen clock for tests. The instant is captured once at construction.
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    at: DateTime<Utc>,
    instant: Instant,
}

#[cfg(test)]
impl FixedClock {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self {
            at,
            instant: Instant::now(),
        }
    }
}

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.at
    }

    fn instant(&self) -> Instant {
        self.instant
    }
}
