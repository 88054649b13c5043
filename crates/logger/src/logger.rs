//! User-facing logger value

use crate::{Level, Location, LogHandler, Metadata, MetadataValue, Record, StdoutHandler};
use std::borrow::Cow;
use std::fmt;

/// A labelled logger backed by a `LogHandler`.
///
/// Records below the handler's level are dropped here, before the handler
/// ever sees them.
pub struct Logger {
    label: String,
    handler: Box<dyn LogHandler>,
}

impl Logger {
    /// Create a logger using the bootstrapped handler factory.
    ///
    /// Falls back to `StdoutHandler` when nothing was bootstrapped.
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        let handler = crate::make_handler(&label)
            .unwrap_or_else(|| Box::new(StdoutHandler::new(label.clone())));

        Self { label, handler }
    }

    /// Create a logger with an explicit handler
    pub fn with_handler(label: impl Into<String>, handler: impl LogHandler) -> Self {
        Self {
            label: label.into(),
            handler: Box::new(handler),
        }
    }

    /// The label this logger was created with
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Check if a level is enabled
    #[inline(always)]
    #[must_use]
    pub fn is_enabled(&self, level: Level) -> bool {
        level >= self.handler.log_level()
    }

    /// Log a message at the given level
    pub fn log<'a>(
        &self,
        level: Level,
        message: impl Into<Cow<'a, str>>,
        metadata: Option<&'a Metadata>,
        source: &'a str,
        location: Location,
    ) {
        if !self.is_enabled(level) {
            return;
        }

        let mut record = Record::new(level, message, source, location);
        if let Some(metadata) = metadata {
            record = record.with_metadata(metadata);
        }

        self.handler.log(record);
    }

    /// Flush the handler
    pub fn flush(&self) {
        self.handler.flush();
    }

    /// Current minimum level
    #[must_use]
    pub fn log_level(&self) -> Level {
        self.handler.log_level()
    }

    /// Change the minimum level
    pub fn set_log_level(&mut self, level: Level) {
        self.handler.set_log_level(level);
    }

    /// Logger-scoped metadata
    #[must_use]
    pub fn metadata(&self) -> &Metadata {
        self.handler.metadata()
    }

    /// Replace all logger-scoped metadata
    pub fn set_metadata(&mut self, metadata: Metadata) {
        self.handler.set_metadata(metadata);
    }

    /// Look up a single metadata entry
    #[must_use]
    pub fn metadata_value(&self, key: &str) -> Option<&MetadataValue> {
        self.handler.metadata_value(key)
    }

    /// Set a single metadata entry; `None` removes the key
    pub fn set_metadata_value(&mut self, key: &str, value: Option<MetadataValue>) {
        self.handler.set_metadata_value(key, value);
    }

    /// The underlying handler
    #[must_use]
    pub fn handler(&self) -> &dyn LogHandler {
        self.handler.as_ref()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("label", &self.label)
            .field("log_level", &self.handler.log_level())
            .field("metadata", self.handler.metadata())
            .finish_non_exhaustive()
    }
}
