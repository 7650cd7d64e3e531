use std::time::{Duration, Instant};

/// Time source for the search budget.
///
/// Readings are offsets from an arbitrary fixed origin; only differences
/// between readings are meaningful.
pub trait Clock {
    fn now(&mut self) -> Duration;
}

impl<C> Clock for &mut C
where
    C: Clock + ?Sized,
{
    fn now(&mut self) -> Duration {
        (**self).now()
    }
}

/// Wall-clock time measured from the clock's creation.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn now(&mut self) -> Duration {
        self.origin.elapsed()
    }
}

/// Deterministic clock that advances by a fixed step on every reading.
///
/// The default step is zero, so time never passes and only the attempt
/// budget ends a search.
///
/// # Example
///
/// ```
/// use std::time::Duration;
///
/// use crossgen_engine::{Clock as _, FixedStepClock};
///
/// let mut clock = FixedStepClock::new(Duration::from_secs(5));
/// assert_eq!(clock.now(), Duration::ZERO);
/// assert_eq!(clock.now(), Duration::from_secs(5));
/// assert_eq!(clock.now(), Duration::from_secs(10));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedStepClock {
    now: Duration,
    step: Duration,
}

impl FixedStepClock {
    #[must_use]
    pub const fn new(step: Duration) -> Self {
        Self {
            now: Duration::ZERO,
            step,
        }
    }
}

impl Clock for FixedStepClock {
    fn now(&mut self) -> Duration {
        let now = self.now;
        self.now = self.now.saturating_add(self.step);
        now
    }
}
