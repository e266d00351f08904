//! Session rules (time limit, violation policy, shuffling)

use std::time::Duration;

/// Default time allowed per session
pub const DEFAULT_TIME_LIMIT_SECS: u32 = 5 * 60;

/// Default number of focus-loss violations that force submission
pub const DEFAULT_VIOLATION_THRESHOLD: u32 = 3;

/// Default window after a counted violation during which further
/// focus-loss signals are ignored
pub const DEFAULT_VIOLATION_COOLDOWN: Duration = Duration::from_millis(1000);

/// Rules a [`QuizSession`](super::QuizSession) runs under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRules {
    pub time_limit_secs: u32,
    pub violation_threshold: u32,
    pub violation_cooldown: Duration,
    /// Shuffle question and option order on start
    pub shuffle: bool,
}

impl Default for SessionRules {
    fn default() -> Self {
        Self {
            time_limit_secs: DEFAULT_TIME_LIMIT_SECS,
            violation_threshold: DEFAULT_VIOLATION_THRESHOLD,
            violation_cooldown: DEFAULT_VIOLATION_COOLDOWN,
            shuffle: true,
        }
    }
}

impl SessionRules {
    pub fn with_time_limit(mut self, secs: u32) -> Self {
        self.time_limit_secs = secs;
        self
    }

    pub fn with_violation_threshold(mut self, threshold: u32) -> Self {
        self.violation_threshold = threshold;
        self
    }

    pub fn with_violation_cooldown(mut self, cooldown: Duration) -> Self {
        self.violation_cooldown = cooldown;
        self
    }

    pub fn without_shuffle(mut self) -> Self {
        self.shuffle = false;
        self
    }
}
