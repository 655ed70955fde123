//! Wall-clock source for history timestamps.

use std::time::SystemTime;

/// Abstraction over the time source used to stamp log entries.
pub trait Clock {
    /// Current wall-clock time.
    fn now(&self) -> SystemTime;
}

/// The host system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub SystemTime);

impl Clock for FixedClock {
    fn now(&self) -> SystemTime {
        self.0
    }
}
