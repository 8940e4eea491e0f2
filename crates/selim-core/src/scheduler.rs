//! Host timer system.
//!
//! Animations are driven by repeating callbacks scheduled on the host's
//! time system. A [`Scheduler`] hands out [`TimerHandle`]s; the host
//! advances time and routes each fired handle back to the component that
//! scheduled it. Handles are never reused, so a tick that arrives for a
//! cancelled timer can be recognised and ignored by its owner.

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use tracing::trace;

/// Opaque identifier of a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(pub u64);

impl fmt::Display for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// How many times a timer fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    /// Fires exactly this many times, then expires. `Times(0)` never fires.
    Times(u32),
    /// Fires until cancelled.
    Forever,
}

/// A timer request: fire every `delay`, `repeat` times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerSpec {
    /// Interval between fires, measured from scheduling.
    pub delay: Duration,
    /// Fire count.
    pub repeat: Repeat,
}

impl TimerSpec {
    /// A timer that fires once after `delay`.
    #[must_use]
    pub const fn once(delay: Duration) -> Self {
        Self {
            delay,
            repeat: Repeat::Times(1),
        }
    }

    /// A timer that fires `times` times, `delay` apart.
    #[must_use]
    pub const fn repeating(delay: Duration, times: u32) -> Self {
        Self {
            delay,
            repeat: Repeat::Times(times),
        }
    }

    /// A timer that fires every `delay` until cancelled.
    #[must_use]
    pub const fn looping(delay: Duration) -> Self {
        Self {
            delay,
            repeat: Repeat::Forever,
        }
    }
}

/// Ability to schedule and cancel timed callbacks.
pub trait Scheduler {
    /// Schedules a timer and returns its handle.
    fn schedule(&mut self, spec: TimerSpec) -> TimerHandle;

    /// Cancels a timer. Returns `false` if it had already expired or was
    /// never known.
    fn cancel(&mut self, handle: TimerHandle) -> bool;

    /// Returns true while the timer still has fires pending.
    fn is_scheduled(&self, handle: TimerHandle) -> bool;
}

/// Shortest interval a timer may use; keeps a zero-delay loop from
/// firing forever inside a single `advance`.
pub const MIN_DELAY: Duration = Duration::from_millis(1);

#[derive(Debug, Clone)]
struct PendingTimer {
    delay: Duration,
    due: Duration,
    remaining: Option<u32>,
}

/// Deterministic scheduler driven by explicit time advancement.
///
/// Fires are delivered in deadline order; timers due at the same instant
/// fire in the order they were scheduled.
#[derive(Debug, Default)]
pub struct TimerQueue {
    now: Duration,
    next_id: u64,
    timers: BTreeMap<u64, PendingTimer>,
}

impl TimerQueue {
    /// Creates an empty queue at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since the queue was created.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of timers with fires pending.
    #[must_use]
    pub fn len(&self) -> usize {
        self.timers.len()
    }

    /// Returns true if no timer is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Advances time by `elapsed` and returns every fire that fell due,
    /// one entry per fire.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<TimerHandle> {
        let target = self.now + elapsed;
        let mut fired = Vec::new();

        loop {
            let next = self
                .timers
                .iter()
                .filter(|(_, timer)| timer.due <= target)
                .min_by_key(|(id, timer)| (timer.due, **id))
                .map(|(id, timer)| (*id, timer.due));
            let Some((id, due)) = next else {
                break;
            };

            self.now = due;
            fired.push(TimerHandle(id));

            let expired = match self.timers.get_mut(&id) {
                Some(timer) => {
                    timer.due += timer.delay;
                    match timer.remaining.as_mut() {
                        Some(remaining) => {
                            *remaining -= 1;
                            *remaining == 0
                        }
                        None => false,
                    }
                }
                None => true,
            };
            if expired {
                self.timers.remove(&id);
            }
        }

        self.now = target;
        fired
    }
}

impl Scheduler for TimerQueue {
    fn schedule(&mut self, spec: TimerSpec) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        let delay = spec.delay.max(MIN_DELAY);
        let remaining = match spec.repeat {
            Repeat::Times(0) => {
                trace!(%handle, "timer scheduled with zero fires; not armed");
                return handle;
            }
            Repeat::Times(n) => Some(n),
            Repeat::Forever => None,
        };
        self.timers.insert(
            handle.0,
            PendingTimer {
                delay,
                due: self.now + delay,
                remaining,
            },
        );
        trace!(%handle, ?delay, "timer scheduled");
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) -> bool {
        self.timers.remove(&handle.0).is_some()
    }

    fn is_scheduled(&self, handle: TimerHandle) -> bool {
        self.timers.contains_key(&handle.0)
    }
}
