//! Manual scheduler — records timer requests without ever firing them.
//!
//! Tests deliver ticks themselves by handing the recorded handle back to
//! the component under test.

use std::collections::BTreeMap;

use selim_core::scheduler::{Scheduler, TimerHandle, TimerSpec};

/// A `Scheduler` that only bookkeeps. Nothing fires unless the test says so.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    active: BTreeMap<TimerHandle, TimerSpec>,
    cancelled: Vec<TimerHandle>,
}

impl ManualScheduler {
    /// Creates an empty scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles of all timers not yet cancelled, oldest first.
    #[must_use]
    pub fn active(&self) -> Vec<TimerHandle> {
        self.active.keys().copied().collect()
    }

    /// The spec a still-active timer was scheduled with.
    #[must_use]
    pub fn spec(&self, handle: TimerHandle) -> Option<TimerSpec> {
        self.active.get(&handle).copied()
    }

    /// Every handle cancelled so far, in cancellation order.
    #[must_use]
    pub fn cancelled(&self) -> &[TimerHandle] {
        &self.cancelled
    }

    /// Total number of timers ever scheduled.
    #[must_use]
    pub fn scheduled_count(&self) -> u64 {
        self.next_id
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, spec: TimerSpec) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        self.active.insert(handle, spec);
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) -> bool {
        let removed = self.active.remove(&handle).is_some();
        if removed {
            self.cancelled.push(handle);
        }
        removed
    }

    fn is_scheduled(&self, handle: TimerHandle) -> bool {
        self.active.contains_key(&handle)
    }
}
