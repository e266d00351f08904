//! Quiz session configuration from TOML (`[session]` section)
//!
//! ```toml
//! [session]
//! time_limit_seconds = 300
//! violation_threshold = 3
//! violation_cooldown_ms = 1000
//! shuffle = true
//! ```

use quiz_domain::SessionRules;
use quiz_domain::session::rules::{
    DEFAULT_TIME_LIMIT_SECS, DEFAULT_VIOLATION_COOLDOWN, DEFAULT_VIOLATION_THRESHOLD,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw session configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSessionConfig {
    pub time_limit_seconds: u32,
    pub violation_threshold: u32,
    pub violation_cooldown_ms: u64,
    pub shuffle: bool,
}

impl Default for FileSessionConfig {
    fn default() -> Self {
        Self {
            time_limit_seconds: DEFAULT_TIME_LIMIT_SECS,
            violation_threshold: DEFAULT_VIOLATION_THRESHOLD,
            violation_cooldown_ms: DEFAULT_VIOLATION_COOLDOWN.as_millis() as u64,
            shuffle: true,
        }
    }
}

impl FileSessionConfig {
    /// Convert to domain [`SessionRules`].
    pub fn to_session_rules(&self) -> SessionRules {
        let rules = SessionRules::default()
            .with_time_limit(self.time_limit_seconds)
            .with_violation_threshold(self.violation_threshold)
            .with_violation_cooldown(Duration::from_millis(self.violation_cooldown_ms));
        if self.shuffle { rules } else { rules.without_shuffle() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_domain_rules() {
        assert_eq!(
            FileSessionConfig::default().to_session_rules(),
            SessionRules::default()
        );
    }

    #[test]
    fn test_to_session_rules() {
        let config = FileSessionConfig {
            time_limit_seconds: 60,
            violation_threshold: 5,
            violation_cooldown_ms: 250,
            shuffle: false,
        };
        let rules = config.to_session_rules();
        assert_eq!(rules.time_limit_secs, 60);
        assert_eq!(rules.violation_threshold, 5);
        assert_eq!(rules.violation_cooldown, Duration::from_millis(250));
        assert!(!rules.shuffle);
    }
}
