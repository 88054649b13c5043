//! Log record type handed to handlers

use crate::{Level, Metadata};
use std::borrow::Cow;

/// Where a log call was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    /// Source file
    pub file: &'static str,
    /// Enclosing function path
    pub function: &'static str,
    /// Line number
    pub line: u32,
}

impl Location {
    /// Create a new call-site location
    #[must_use]
    pub const fn new(file: &'static str, function: &'static str, line: u32) -> Self {
        Self {
            file,
            function,
            line,
        }
    }
}

/// A single log call, borrowed for the duration of `LogHandler::log`.
#[derive(Debug, Clone)]
pub struct Record<'a> {
    /// Log level
    pub level: Level,
    /// The log message
    pub message: Cow<'a, str>,
    /// Call-scoped metadata; `None` is distinct from an empty map
    pub metadata: Option<&'a Metadata>,
    /// Subsystem that emitted the record
    pub source: &'a str,
    /// Call site
    pub location: Location,
}

impl<'a> Record<'a> {
    /// Create a record with no call-scoped metadata
    #[inline]
    pub fn new(
        level: Level,
        message: impl Into<Cow<'a, str>>,
        source: &'a str,
        location: Location,
    ) -> Self {
        Self {
            level,
            message: message.into(),
            metadata: None,
            source,
            location,
        }
    }

    /// Builder-style method for attaching call-scoped metadata
    #[inline]
    #[must_use]
    pub fn with_metadata(mut self, metadata: &'a Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Convert to owned version (for retaining past the call)
    #[must_use]
    pub fn into_owned(self) -> OwnedRecord {
        OwnedRecord {
            level: self.level,
            message: self.message.into_owned(),
            metadata: self.metadata.cloned(),
            source: self.source.to_string(),
            location: self.location,
        }
    }
}

/// Owned version of `Record`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedRecord {
    /// Log level
    pub level: Level,
    /// The log message
    pub message: String,
    /// Call-scoped metadata
    pub metadata: Option<Metadata>,
    /// Subsystem that emitted the record
    pub source: String,
    /// Call site
    pub location: Location,
}
