//! Core types for the ping-pong counter engine
//!
//! This module defines the opaque counter handle, the callback capability,
//! and the errors the engine can report. The engine is purely in-memory and
//! handle-scoped - every error is synchronous and local to the call that
//! caused it.

use std::fmt;

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

/// Opaque handle identifying one live counter owned by an engine.
///
/// Handles are allocated from a monotonically increasing sequence starting
/// at 1 and are never reused, so the zero value never names a live counter.
/// Glue layers that represent "no counter" as zero stay compatible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CounterId(pub(crate) u64);

impl fmt::Display for CounterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Errors that can occur during engine operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("Invalid counter handle: {0}")]
    InvalidHandle(CounterId),
}

/// Callback capability invoked when a counter's trigger condition holds.
///
/// The engine calls [`PongCallback::call`] synchronously on the thread that
/// performed the ping, with the counter value that satisfied the trigger
/// condition. The callback is owned by its counter: it is dropped when it is
/// replaced or when the counter is destroyed.
///
/// Any `FnMut(i64)` closure that is `Send` is a valid callback, so most
/// callers can pass a plain closure instead of implementing the trait.
pub trait PongCallback: Send {
    /// Called with the counter value that produced the trigger
    fn call(&mut self, value: i64);
}

impl<F> PongCallback for F
where
    F: FnMut(i64) + Send,
{
    fn call(&mut self, value: i64) {
        self(value)
    }
}
