//! Test doubles for backends and sinks
//!
//! Only available in tests or when the `test-support` feature is enabled.

use crate::{Backend, LogMessage, Loggable, Sink};
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A single call to `Backend::log`
#[derive(Debug, Clone)]
pub struct Submission {
    /// Whether asynchronous delivery was requested
    pub asynchronous: bool,
    /// The submitted message
    pub message: Arc<dyn Loggable>,
}

/// Backend that records every submission instead of delivering it
#[derive(Debug, Clone, Default)]
pub struct RecordingBackend {
    submissions: Arc<Mutex<Vec<Submission>>>,
    flushes: Arc<AtomicUsize>,
}

impl RecordingBackend {
    /// Create an empty recording backend
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every submission so far, in order
    #[must_use]
    pub fn submissions(&self) -> Vec<Submission> {
        self.submissions.lock().clone()
    }

    /// Submitted messages, downcast to `T`; other types are skipped
    #[must_use]
    pub fn messages<T: Loggable + Clone>(&self) -> Vec<T> {
        self.submissions
            .lock()
            .iter()
            .filter_map(|submission| submission.message.downcast_ref::<T>().cloned())
            .collect()
    }

    /// Number of `flush` calls
    #[must_use]
    pub fn flush_count(&self) -> usize {
        self.flushes.load(Ordering::SeqCst)
    }

    /// Forget everything recorded so far
    pub fn clear(&self) {
        self.submissions.lock().clear();
        self.flushes.store(0, Ordering::SeqCst);
    }
}

impl Backend for RecordingBackend {
    fn log(&self, asynchronous: bool, message: Arc<dyn Loggable>) {
        self.submissions.lock().push(Submission {
            asynchronous,
            message,
        });
    }

    fn flush(&self) {
        self.flushes.fetch_add(1, Ordering::SeqCst);
    }
}

/// Sink that records the base message and the writing thread's name
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    written: Arc<Mutex<Vec<(LogMessage, Option<String>)>>>,
}

impl RecordingSink {
    /// Create an empty recording sink
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Base messages written so far, in order
    #[must_use]
    pub fn messages(&self) -> Vec<LogMessage> {
        self.written
            .lock()
            .iter()
            .map(|(message, _)| message.clone())
            .collect()
    }

    /// Names of the threads that performed each write
    #[must_use]
    pub fn thread_names(&self) -> Vec<Option<String>> {
        self.written
            .lock()
            .iter()
            .map(|(_, thread)| thread.clone())
            .collect()
    }
}

impl Sink for RecordingSink {
    fn write(&self, message: &dyn Loggable) {
        let thread = std::thread::current().name().map(ToString::to_string);
        self.written.lock().push((message.base().clone(), thread));
    }
}
