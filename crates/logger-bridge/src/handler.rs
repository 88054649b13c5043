//! `LogHandler` that forwards to a dispatch backend

use crate::{BridgeConfig, BridgedLogMessage};
use proven_logger::{Level, LogHandler, Metadata, Record};
use std::sync::Arc;

/// Handler bridging one facade logger to the configured backend.
///
/// The label is fixed at creation; level and metadata change through the
/// `LogHandler` setters.
#[derive(Debug, Clone)]
pub struct BridgeHandler {
    config: Arc<BridgeConfig>,
    label: String,
    log_level: Level,
    metadata: Metadata,
}

impl BridgeHandler {
    /// Create a handler starting at the configured level with no metadata
    pub fn new(label: impl Into<String>, config: Arc<BridgeConfig>) -> Self {
        Self {
            label: label.into(),
            log_level: config.log_level(),
            metadata: Metadata::new(),
            config,
        }
    }

    /// The logger label
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Shared configuration
    #[must_use]
    pub fn config(&self) -> &Arc<BridgeConfig> {
        &self.config
    }

    /// Whether a record at `level` is delivered asynchronously
    #[must_use]
    pub fn is_asynchronous(&self, level: Level) -> bool {
        level < self.config.synchronous_log_level()
    }
}

impl LogHandler for BridgeHandler {
    fn log(&self, record: Record<'_>) {
        let asynchronous = self.is_asynchronous(record.level);
        let message = BridgedLogMessage::new(&self.label, self.metadata.clone(), &record, None);

        self.config.backend().log(asynchronous, Arc::new(message));
    }

    fn flush(&self) {
        self.config.backend().flush();
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
