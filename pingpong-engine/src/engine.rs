//! Main engine API
//!
//! This module provides the primary interface for the counter engine. The
//! `Engine` struct owns every live counter and hands out opaque ids instead
//! of raw pointers, so destroying a counter invalidates its id without any
//! dangling-pointer risk.
//!
//! Locking discipline: the registry lock is held only long enough to look a
//! counter up, insert it, or remove it. Each counter carries its own lock,
//! which serializes `ping` and `set_callback` on that counter and is held
//! across the callback invocation. Independent counters share no lock.

use crate::config::CounterConfig;
use crate::counter::Counter;
use crate::types::{CounterId, EngineError, PongCallback, Result};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Next handle value, shared across engines so ids are process-unique.
/// Starts at 1 so zero never names a live counter.
static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Acquire a mutex, ignoring poisoning: a panicking callback leaves the
/// counter state consistent (the increment is already applied), so later
/// operations on the same counter must keep working.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// The counter engine - entry point for all counter operations
///
/// An `Engine` is a registry of independent counters. All operations take
/// `&self` and are safe to call from multiple threads holding the same
/// [`CounterId`].
pub struct Engine {
    /// Live counters, keyed by raw handle value
    counters: Mutex<HashMap<u64, Arc<Mutex<Counter>>>>,
}

impl Engine {
    /// Create a new engine with no counters
    pub fn new() -> Self {
        Self {
            counters: Mutex::new(HashMap::new()),
        }
    }

    /// Create a fresh counter and return its handle
    ///
    /// The counter starts at `config.start` with no callback registered.
    /// No side effects beyond allocation.
    ///
    /// # Example
    /// ```
    /// use pingpong_engine::{CounterConfig, Engine};
    ///
    /// let engine = Engine::new();
    /// let id = engine.create(CounterConfig::new().with_start(0).with_trigger(3));
    /// assert_eq!(engine.value(id), Ok(0));
    /// ```
    pub fn create(&self, config: CounterConfig) -> CounterId {
        let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        let counter = Arc::new(Mutex::new(Counter::new(config)));
        lock(&self.counters).insert(id, counter);

        log::debug!(
            "created counter #{} (start={}, trigger={})",
            id,
            config.start,
            config.trigger
        );
        CounterId(id)
    }

    /// Destroy a counter, releasing its state and registered callback
    ///
    /// The id becomes invalid: every later operation on it reports
    /// [`EngineError::InvalidHandle`], including a second `destroy`. A ping
    /// already in flight on another thread completes safely against the
    /// counter it looked up before the removal.
    pub fn destroy(&self, id: CounterId) -> Result<()> {
        match lock(&self.counters).remove(&id.0) {
            Some(_) => {
                log::debug!("destroyed counter {}", id);
                Ok(())
            }
            None => Err(EngineError::InvalidHandle(id)),
        }
    }

    /// Increment a counter by exactly 1, firing its callback if the new
    /// value satisfies the trigger condition
    ///
    /// The callback runs synchronously on the calling thread, before `ping`
    /// returns, while the counter's lock is held. That lock gives the
    /// ordering guarantee: the callback for ping *n* happens-before ping
    /// *n+1* on the same counter. A callback must return promptly and must
    /// not call back into the same counter.
    pub fn ping(&self, id: CounterId) -> Result<()> {
        let counter = self.get(id)?;
        lock(&counter).ping();
        Ok(())
    }

    /// Replace a counter's callback. Last write wins; `None` clears.
    ///
    /// No immediate invocation - only future pings observe the new callback.
    /// The previous callback is dropped here.
    pub fn set_callback(
        &self,
        id: CounterId,
        callback: Option<Box<dyn PongCallback>>,
    ) -> Result<()> {
        let counter = self.get(id)?;
        lock(&counter).set_callback(callback);
        log::debug!("replaced callback on counter {}", id);
        Ok(())
    }

    /// Current value of a counter, without mutation
    pub fn value(&self, id: CounterId) -> Result<i64> {
        let counter = self.get(id)?;
        let value = lock(&counter).value();
        Ok(value)
    }

    /// Get statistics about the live counters owned by this engine
    pub fn stats(&self) -> EngineStats {
        EngineStats {
            live_counters: lock(&self.counters).len(),
        }
    }

    /// Look up a counter by id, cloning it out of the registry so the
    /// registry lock is released before the counter's own lock is taken
    fn get(&self, id: CounterId) -> Result<Arc<Mutex<Counter>>> {
        lock(&self.counters)
            .get(&id.0)
            .cloned()
            .ok_or(EngineError::InvalidHandle(id))
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

/// Statistics about the live counters owned by an engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineStats {
    /// Number of counters created and not yet destroyed
    pub live_counters: usize,
}
