//! Backend message carrying the original facade fields

use crate::map_level;
use chrono::{DateTime, Utc};
use proven_logger::{Level, Location, Metadata, Record};
use proven_logger_dispatch::{LogMessage, Loggable, dyn_eq_by_type};
use std::any::Any;

/// The facade-side view of a log call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin {
    /// Label of the logger that emitted the call
    pub label: String,
    /// Logger-scoped metadata, as it was when the call was made
    pub logger_metadata: Metadata,
    /// The message as given to the facade
    pub message: String,
    /// Fine-grained facade level
    pub level: Level,
    /// Call-scoped metadata; `None` is distinct from empty
    pub metadata: Option<Metadata>,
    /// Subsystem that emitted the call
    pub source: String,
    /// Call site
    pub location: Location,
}

/// A backend `LogMessage` extended with the facade fields it was built from.
///
/// Immutable after construction. Two messages are equal only if both the
/// base record and the origin match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgedLogMessage {
    base: LogMessage,
    origin: Origin,
}

impl BridgedLogMessage {
    /// Build from a facade record.
    ///
    /// `logger_metadata` is taken by value so later changes to the logger
    /// don't reach this message. A `None` timestamp lets the backend stamp
    /// the message when it is constructed.
    #[must_use]
    pub fn new(
        label: impl Into<String>,
        logger_metadata: Metadata,
        record: &Record<'_>,
        timestamp: Option<DateTime<Utc>>,
    ) -> Self {
        let (level, flag) = map_level(record.level);
        let location = record.location;

        let base = LogMessage::new(record.message.as_ref(), level, flag)
            .with_context(0)
            .with_location(location.file, location.function, location.line)
            .with_timestamp(timestamp);

        let origin = Origin {
            label: label.into(),
            logger_metadata,
            message: record.message.clone().into_owned(),
            level: record.level,
            metadata: record.metadata.cloned(),
            source: record.source.to_string(),
            location,
        };

        Self { base, origin }
    }

    /// The backend record
    #[must_use]
    pub const fn log_message(&self) -> &LogMessage {
        &self.base
    }

    /// The facade fields
    #[must_use]
    pub const fn origin(&self) -> &Origin {
        &self.origin
    }
}

impl Loggable for BridgedLogMessage {
    fn base(&self) -> &LogMessage {
        &self.base
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn dyn_eq(&self, other: &dyn Loggable) -> bool {
        dyn_eq_by_type(self, other)
    }
}
