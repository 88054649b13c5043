//! Handler contract that logging backends implement

use crate::{Level, Metadata, MetadataValue, Record};

/// A logging backend attached to one `Logger`.
///
/// Handlers own their level and metadata. Mutation goes through `&mut self`,
/// so a handler shared across threads must be synchronized by its owner.
pub trait LogHandler: Send + Sync + 'static {
    /// Handle a record that already passed the level check
    fn log(&self, record: Record<'_>);

    /// Block until buffered records are written
    fn flush(&self) {}

    /// Current minimum level
    fn log_level(&self) -> Level;

    /// Change the minimum level
    fn set_log_level(&mut self, level: Level);

    /// Logger-scoped metadata
    fn metadata(&self) -> &Metadata;

    /// Mutable logger-scoped metadata
    fn metadata_mut(&mut self) -> &mut Metadata;

    /// Replace all logger-scoped metadata
    fn set_metadata(&mut self, metadata: Metadata) {
        *self.metadata_mut() = metadata;
    }

    /// Look up a single metadata entry
    fn metadata_value(&self, key: &str) -> Option<&MetadataValue> {
        self.metadata().get(key)
    }

    /// Set a single metadata entry; `None` removes the key
    fn set_metadata_value(&mut self, key: &str, value: Option<MetadataValue>) {
        match value {
            Some(value) => {
                self.metadata_mut().insert(key.to_string(), value);
            }
            None => {
                self.metadata_mut().remove(key);
            }
        }
    }
}

/// Handler that discards every record
#[derive(Debug, Clone, Default)]
pub struct NoOpHandler {
    metadata: Metadata,
}

impl LogHandler for NoOpHandler {
    #[inline(always)]
    fn log(&self, _record: Record<'_>) {}

    fn log_level(&self) -> Level {
        Level::Critical
    }

    fn set_log_level(&mut self, _level: Level) {}

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

    #[test]
    fn test_metadata_value_roundtrip() {
        let mut handler = NoOpHandler::default();

        handler.set_metadata_value("k", Some("v".into()));
        assert_eq!(handler.metadata_value("k"), Some(&MetadataValue::from("v")));

        handler.set_metadata_value("k", None);
        assert_eq!(handler.metadata_value("k"), None);
        assert!(handler.metadata().is_empty());
    }

    #[test]
    fn test_removing_absent_key_is_noop() {
        let mut handler = NoOpHandler::default();
        handler.set_metadata_value("other", Some("1".into()));

        handler.set_metadata_value("missing", None);

        assert_eq!(handler.metadata().len(), 1);
    }
}
