//! Counter configuration types
//!
//! This module defines the creation-time parameters of a counter. The
//! engine accepts any representable integers here - a zero or negative
//! trigger simply produces a counter whose callback never fires.

use serde::{Deserialize, Serialize};

/// Creation-time configuration for a single counter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterConfig {
    /// Initial counter value
    #[serde(default)]
    pub start: i64,

    /// Trigger period: the callback fires when the counter value lands on a
    /// whole multiple of this. Zero or negative disables the trigger.
    #[serde(default)]
    pub trigger: i64,
}

impl CounterConfig {
    /// Create a new counter configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the initial counter value
    pub fn with_start(mut self, start: i64) -> Self {
        self.start = start;
        self
    }

    /// Builder method: set the trigger period
    pub fn with_trigger(mut self, trigger: i64) -> Self {
        self.trigger = trigger;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_config_builder() {
        let config = CounterConfig::new().with_start(-5).with_trigger(3);

        assert_eq!(config.start, -5);
        assert_eq!(config.trigger, 3);
    }

    #[test]
    fn test_counter_config_defaults() {
        let config = CounterConfig::new();

        assert_eq!(config.start, 0);
        assert_eq!(config.trigger, 0);
    }
}
