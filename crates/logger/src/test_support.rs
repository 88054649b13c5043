//! Test support utilities
//!
//! This module provides a handler that captures records in memory.
//! It's only available in tests or when the `test-support` feature is enabled.

use crate::{Level, LogHandler, Metadata, OwnedRecord, Record};
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A record captured by `CaptureHandler`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedRecord {
    /// Label of the handler that captured the record
    pub label: String,
    /// Logger-scoped metadata at the time of the call
    pub logger_metadata: Metadata,
    /// The record itself
    pub record: OwnedRecord,
}

/// A handler that captures all records in memory for testing.
///
/// Clones share the captured records but keep their own level and metadata.
#[derive(Debug, Clone)]
pub struct CaptureHandler {
    records: Arc<Mutex<Vec<CapturedRecord>>>,
    flushes: Arc<AtomicUsize>,
    label: String,
    log_level: Level,
    metadata: Metadata,
}

impl CaptureHandler {
    /// Create a new capture handler at `Trace`
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
            flushes: Arc::new(AtomicUsize::new(0)),
            label: "test".to_string(),
            log_level: Level::Trace,
            metadata: Metadata::new(),
        }
    }

    /// Create with a specific level
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.log_level = level;
        self
    }

    /// Create with a specific label
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Get all captured records
    #[must_use]
    pub fn records(&self) -> Vec<CapturedRecord> {
        self.records.lock().clone()
    }

    /// Number of `flush` calls, across clones
    #[must_use]
    pub fn flush_count(&self) -> usize {
        self.flushes.load(Ordering::SeqCst)
    }

    /// Clear captured records
    pub fn clear(&self) {
        self.records.lock().clear();
    }

    /// Check if any captured message contains a specific string
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.records
            .lock()
            .iter()
            .any(|captured| captured.record.message.contains(text))
    }
}

impl Default for CaptureHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl LogHandler for CaptureHandler {
    fn log(&self, record: Record<'_>) {
        let captured = CapturedRecord {
            label: self.label.clone(),
            logger_metadata: self.metadata.clone(),
            record: record.into_owned(),
        };

        self.records.lock().push(captured);
    }

    fn flush(&self) {
        self.flushes.fetch_add(1, Ordering::SeqCst);
    }

    fn log_level(&self) -> Level {
        self.log_level
    }

    fn set_log_level(&mut self, level: Level) {
        self.log_level = level;
    }

    fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Location, Logger, info};

    #[test]
    fn test_clones_share_records() {
        let capture = CaptureHandler::new().with_label("worker");
        let logger = Logger::with_handler("worker", capture.clone());

        info!(logger, "job {} done", 7);

        assert!(capture.contains("job 7"));
        assert!(!capture.contains("job 8"));
        assert_eq!(capture.records()[0].label, "worker");

        capture.clear();
        assert!(capture.records().is_empty());
        assert!(!capture.contains("job 7"));
    }

    #[test]
    fn test_flush_counted() {
        let capture = CaptureHandler::new();
        let logger = Logger::with_handler("flush", capture.clone());

        logger.flush();
        capture.log(Record::new(Level::Info, "direct", "s", Location::new("f.rs", "f", 1)));
        logger.flush();

        assert_eq!(capture.flush_count(), 2);
        assert_eq!(capture.records().len(), 1);
    }
}
