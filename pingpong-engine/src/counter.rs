//! Counter state and trigger evaluation
//!
//! A `Counter` is one independent value/trigger/callback unit. It holds
//! plain mutable state - all locking lives in the engine's registry, which
//! never hands out a counter without its own lock held.

use crate::config::CounterConfig;
use crate::types::PongCallback;

/// Trigger predicate: fires when `value` lands on a whole multiple of
/// `trigger`. Non-positive triggers never fire.
///
/// This is the single place the firing rule is defined; swapping the rule
/// touches only this function.
pub(crate) fn trigger_fires(value: i64, trigger: i64) -> bool {
    trigger > 0 && value % trigger == 0
}

/// One counter/trigger/callback unit
pub(crate) struct Counter {
    value: i64,
    trigger: i64,
    callback: Option<Box<dyn PongCallback>>,
}

impl Counter {
    /// Create a counter from its configuration, with no callback registered
    pub(crate) fn new(config: CounterConfig) -> Self {
        Self {
            value: config.start,
            trigger: config.trigger,
            callback: None,
        }
    }

    /// Increment the value by exactly 1, then invoke the callback with the
    /// new value if the trigger condition holds.
    pub(crate) fn ping(&mut self) {
        self.value += 1;
        if trigger_fires(self.value, self.trigger) {
            log::debug!("trigger hit at value {}", self.value);
            if let Some(callback) = self.callback.as_mut() {
                callback.call(self.value);
            }
        }
    }

    /// Replace the registered callback. Last write wins; `None` clears.
    /// The previous callback (if any) is dropped here.
    pub(crate) fn set_callback(&mut self, callback: Option<Box<dyn PongCallback>>) {
        self.callback = callback;
    }

    /// Current counter value, without mutation
    pub(crate) fn value(&self) -> i64 {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn recording_callback() -> (Arc<Mutex<Vec<i64>>>, Box<dyn PongCallback>) {
        let hits: Arc<Mutex<Vec<i64>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&hits);
        let callback = Box::new(move |value: i64| {
            sink.lock().unwrap().push(value);
        });
        (hits, callback)
    }

    #[test]
    fn test_trigger_predicate() {
        assert!(trigger_fires(3, 3));
        assert!(trigger_fires(6, 3));
        assert!(trigger_fires(0, 3));
        assert!(trigger_fires(-6, 3));
        assert!(!trigger_fires(4, 3));
        assert!(!trigger_fires(5, 3));

        // Degenerate triggers never fire
        assert!(!trigger_fires(0, 0));
        assert!(!trigger_fires(10, 0));
        assert!(!trigger_fires(6, -3));
    }

    #[test]
    fn test_ping_increments_by_one() {
        let mut counter = Counter::new(CounterConfig::new().with_start(5));
        for expected in 6..=15 {
            counter.ping();
            assert_eq!(counter.value(), expected);
        }
    }

    #[test]
    fn test_demo_scenario_triggers() {
        // start=0, trigger=3, 11 pings -> callback fires at 3, 6, 9
        let mut counter = Counter::new(CounterConfig::new().with_start(0).with_trigger(3));
        let (hits, callback) = recording_callback();
        counter.set_callback(Some(callback));

        for _ in 0..11 {
            counter.ping();
        }

        assert_eq!(counter.value(), 11);
        assert_eq!(*hits.lock().unwrap(), vec![3, 6, 9]);
    }

    #[test]
    fn test_no_callback_pings_silently() {
        let mut counter = Counter::new(CounterConfig::new().with_trigger(2));
        counter.ping();
        counter.ping();
        assert_eq!(counter.value(), 2);
    }

    #[test]
    fn test_callback_replacement_is_last_write_wins() {
        let mut counter = Counter::new(CounterConfig::new().with_trigger(2));
        let (old_hits, old_callback) = recording_callback();
        let (new_hits, new_callback) = recording_callback();

        counter.set_callback(Some(old_callback));
        counter.ping();
        counter.ping(); // fires old callback at 2

        counter.set_callback(Some(new_callback));
        counter.ping();
        counter.ping(); // fires new callback at 4

        counter.set_callback(None);
        counter.ping();
        counter.ping(); // value 6 is a trigger hit, but no callback remains

        assert_eq!(counter.value(), 6);
        assert_eq!(*old_hits.lock().unwrap(), vec![2]);
        assert_eq!(*new_hits.lock().unwrap(), vec![4]);
    }

    #[test]
    fn test_negative_start_crosses_zero() {
        // Values pass -2, -1, 0, 1, 2: multiples of 2 are -2, 0, 2
        let mut counter = Counter::new(CounterConfig::new().with_start(-3).with_trigger(2));
        let (hits, callback) = recording_callback();
        counter.set_callback(Some(callback));

        for _ in 0..5 {
            counter.ping();
        }

        assert_eq!(counter.value(), 2);
        assert_eq!(*hits.lock().unwrap(), vec![-2, 0, 2]);
    }
}
