use std::cell::Cell;
use std::time::{Duration, Instant};

/// Monotonic time source for the search deadline.
pub trait Clock {
    /// Time since an arbitrary fixed origin.
    fn now(&self) -> Duration;
}

#[derive(Clone, Copy, Debug)]
pub struct WallClock {
    origin: Instant,
}

impl Default for WallClock {
    fn default() -> Self { Self { origin: Instant::now() } }
}

impl Clock for WallClock {
    fn now(&self) -> Duration { self.origin.elapsed() }
}

/// A clock that only moves when told to. Makes time cutoffs reproducible in tests.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self { Self::default() }

    pub fn advance(&self, by: Duration) { self.now.set(self.now.get() + by); }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration { self.now.get() }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Duration { (**self).now() }
}
