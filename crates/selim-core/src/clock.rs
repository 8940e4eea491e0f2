//! Wall-clock abstraction used to stamp domain events.

use chrono::{DateTime, Utc};

/// Source of event timestamps. Injected so tests can pin time.
pub trait Clock {
    /// Returns the current time.
    fn now(&self) -> DateTime<Utc>;
}

/// Clock backed by the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
