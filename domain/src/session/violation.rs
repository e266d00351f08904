//! Focus-loss violation counting with a debounce window.
//!
//! Losing focus usually produces a burst of signals (window blur followed by
//! a visibility change, or a terminal emitting `FocusLost` twice). Only the
//! first signal of a burst counts; anything inside the cooldown window after
//! a counted violation is dropped.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct ViolationTracker {
    count: u32,
    cooldown: Duration,
    last_counted: Option<Instant>,
}

impl ViolationTracker {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            count: 0,
            cooldown,
            last_counted: None,
        }
    }

    /// Register one focus-loss signal observed at `now`.
    ///
    /// Returns `true` if the signal was counted.
    pub fn register(&mut self, now: Instant) -> bool {
        if let Some(last) = self.last_counted
            && now.saturating_duration_since(last) < self.cooldown
        {
            return false;
        }
        self.count += 1;
        self.last_counted = Some(now);
        true
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}
