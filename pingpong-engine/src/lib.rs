//! Ping-Pong Counter Engine
//!
//! A passive, in-memory library for counter/trigger/callback units. Each
//! counter increments on `ping` and invokes a registered callback exactly
//! when its new value satisfies the trigger condition.
//!
//! # Architecture
//!
//! This library is intentionally minimal and focused on counting:
//! - Owns counter state behind opaque ids instead of raw pointers
//! - Serializes pings and callback replacement per counter
//! - Invokes callbacks synchronously on the pinging thread
//!
//! The library does NOT:
//! - Spawn threads or schedule anything (callers drive all activity)
//! - Perform I/O or persist state
//! - Bridge to foreign runtimes
//!
//! All higher-level functionality (scenario runs, reports) is in the
//! application layer (pingpong-cli).
//!
//! # Example Usage
//!
//! ```
//! use pingpong_engine::{CounterConfig, Engine};
//! use std::sync::{Arc, Mutex};
//!
//! let engine = Engine::new();
//! let id = engine.create(CounterConfig::new().with_start(0).with_trigger(3));
//!
//! // Record every value that produces a trigger
//! let hits = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&hits);
//! engine
//!     .set_callback(id, Some(Box::new(move |value: i64| {
//!         sink.lock().unwrap().push(value);
//!     })))
//!     .unwrap();
//!
//! for _ in 0..11 {
//!     engine.ping(id).unwrap();
//! }
//! engine.destroy(id).unwrap();
//!
//! assert_eq!(*hits.lock().unwrap(), vec![3, 6, 9]);
//! ```

// Public modules
pub mod config;
pub mod engine;
pub mod types;

// Re-export main types for convenience
pub use config::CounterConfig;
pub use engine::{Engine, EngineStats};
pub use types::{CounterId, EngineError, PongCallback, Result};

// Internal modules (not exposed in public API)
mod counter;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_basics() {
        // Smoke test: ensure we can create an engine
        let engine = Engine::new();
        let stats = engine.stats();
        assert_eq!(stats.live_counters, 0);
    }
}
