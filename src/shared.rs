//! A logger handle that can be cloned across threads.

use std::{
    fmt,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use crate::{level::Severity, logger::Logger};

/// Thread-safe handle to a [`Logger`].
///
/// Each call formats, records and prints under a single lock, so concurrent
/// callers never interleave lines or lose history entries.
#[derive(Debug, Clone)]
pub struct SharedLogger {
    inner: Arc<Mutex<Logger>>,
}

impl SharedLogger {
    pub fn new(logger: Logger) -> Self {
        Self {
            inner: Arc::new(Mutex::new(logger)),
        }
    }

    /// Runs `f` with exclusive access to the underlying logger.
    pub fn with<R>(&self, f: impl FnOnce(&mut Logger) -> R) -> R {
        f(&mut self.lock())
    }

    pub fn emit(&self, severity: Severity, topic: &str, detail: impl fmt::Display) {
        self.lock().emit(severity, topic, detail)
    }

    pub fn debug(&self, topic: &str, detail: impl fmt::Display) {
        self.emit(Severity::Debug, topic, detail)
    }

    pub fn info(&self, topic: &str, detail: impl fmt::Display) {
        self.emit(Severity::Info, topic, detail)
    }

    pub fn warn(&self, topic: &str, detail: impl fmt::Display) {
        self.emit(Severity::Warn, topic, detail)
    }

    pub fn error(&self, topic: &str, detail: impl fmt::Display) {
        self.emit(Severity::Error, topic, detail)
    }

    pub fn abort_with(&self, topic: &str, detail: impl fmt::Display) -> ! {
        self.lock().abort_with(topic, detail)
    }

    /// Snapshot of the recorded history.
    pub fn messages(&self) -> Vec<String> {
        self.lock().messages().to_vec()
    }

    // A panic while printing leaves the logger usable; history is append-only.
    fn lock(&self) -> MutexGuard<'_, Logger> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<Logger> for SharedLogger {
    fn from(logger: Logger) -> Self {
        Self::new(logger)
    }
}
