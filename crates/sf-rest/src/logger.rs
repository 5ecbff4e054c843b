//! The logger collaborator.
//!
//! The client reports every status failure as a `(category, message)` pair.
//! Nothing about the logger's outcome flows back into the client.

use std::sync::Mutex;

/// Event categories emitted by [`SalesforceClient`](crate::SalesforceClient).
pub mod categories {
    /// Token endpoint answered with a status other than 200.
    pub const LOGIN_ERROR: &str = "Salesforce Login Error";
    /// GET answered with a status other than 200.
    pub const GET_ERROR: &str = "Salesforce Get Error";
    /// POST answered with a status other than 201.
    pub const POST_ERROR: &str = "Salesforce Post Error";
}

/// Receives failure events from the client.
pub trait Logger: Send + Sync {
    /// Record one event.
    fn log(&self, category: &str, message: &str);
}

impl<F> Logger for F
where
    F: Fn(&str, &str) + Send + Sync,
{
    fn log(&self, category: &str, message: &str) {
        self(category, message)
    }
}

/// Default logger: forwards events to `tracing` at error level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, category: &str, message: &str) {
        tracing::error!(category, "{message}");
    }
}

/// One recorded event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEvent {
    pub category: String,
    pub message: String,
}

/// Logger that keeps every event in memory.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    events: Mutex<Vec<LogEvent>>,
}

impl MemoryLogger {
    /// Create an empty logger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all events recorded so far, oldest first.
    pub fn events(&self) -> Vec<LogEvent> {
        self.lock().clone()
    }

    /// Number of events recorded under `category`.
    pub fn count(&self, category: &str) -> usize {
        self.lock().iter().filter(|e| e.category == category).count()
    }

    /// Drop all recorded events.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<LogEvent>> {
        // A panic while holding the lock cannot leave the Vec half-written.
        self.events.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Logger for MemoryLogger {
    fn log(&self, category: &str, message: &str) {
        self.lock().push(LogEvent {
            category: category.to_string(),
            message: message.to_string(),
        });
    }
}
