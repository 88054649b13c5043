//! Messages handed to the backend

use crate::{BackendLevel, LogFlag};
use chrono::{DateTime, Utc};
use std::any::Any;
use std::fmt;

/// The backend's base log record.
///
/// Immutable once built. The timestamp defaults to the moment of
/// construction, so callers normally leave it unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogMessage {
    message: String,
    level: BackendLevel,
    flag: LogFlag,
    context: i32,
    file: String,
    function: String,
    line: u32,
    timestamp: DateTime<Utc>,
    thread_id: String,
    thread_name: Option<String>,
}

impl LogMessage {
    /// Create a message stamped with the current time and thread
    pub fn new(message: impl Into<String>, level: BackendLevel, flag: LogFlag) -> Self {
        let thread = std::thread::current();

        Self {
            message: message.into(),
            level,
            flag,
            context: 0,
            file: String::new(),
            function: String::new(),
            line: 0,
            timestamp: Utc::now(),
            thread_id: format!("{:?}", thread.id()),
            thread_name: thread.name().map(ToString::to_string),
        }
    }

    /// Builder-style method for setting the context tag
    #[must_use]
    pub fn with_context(mut self, context: i32) -> Self {
        self.context = context;
        self
    }

    /// Builder-style method for setting the call site
    #[must_use]
    pub fn with_location(
        mut self,
        file: impl Into<String>,
        function: impl Into<String>,
        line: u32,
    ) -> Self {
        self.file = file.into();
        self.function = function.into();
        self.line = line;
        self
    }

    /// Builder-style method for overriding the timestamp; `None` keeps the
    /// construction time
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: Option<DateTime<Utc>>) -> Self {
        if let Some(timestamp) = timestamp {
            self.timestamp = timestamp;
        }
        self
    }

    /// The log message
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Filter level the message was logged with
    #[must_use]
    pub const fn level(&self) -> BackendLevel {
        self.level
    }

    /// Severity flag
    #[must_use]
    pub const fn flag(&self) -> LogFlag {
        self.flag
    }

    /// Context tag
    #[must_use]
    pub const fn context(&self) -> i32 {
        self.context
    }

    /// Source file
    #[must_use]
    pub fn file(&self) -> &str {
        &self.file
    }

    /// File name without directories
    #[must_use]
    pub fn file_name(&self) -> &str {
        self.file
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(&self.file)
    }

    /// Enclosing function
    #[must_use]
    pub fn function(&self) -> &str {
        &self.function
    }

    /// Line number
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// When the message was created
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Debug representation of the creating thread's id
    #[must_use]
    pub fn thread_id(&self) -> &str {
        &self.thread_id
    }

    /// Name of the creating thread, if it had one
    #[must_use]
    pub fn thread_name(&self) -> Option<&str> {
        self.thread_name.as_deref()
    }
}

/// Anything the backend can log: a `LogMessage` or an extension wrapping one.
pub trait Loggable: Any + fmt::Debug + Send + Sync {
    /// The base record
    fn base(&self) -> &LogMessage;

    /// Access to the concrete type, for downcasting
    fn as_any(&self) -> &dyn Any;

    /// Equality across the trait object; false when concrete types differ
    fn dyn_eq(&self, other: &dyn Loggable) -> bool;
}

impl dyn Loggable {
    /// Downcast to a concrete message type
    #[must_use]
    pub fn downcast_ref<T: Loggable>(&self) -> Option<&T> {
        self.as_any().downcast_ref()
    }
}

impl PartialEq for dyn Loggable {
    fn eq(&self, other: &Self) -> bool {
        self.dyn_eq(other)
    }
}

/// `dyn_eq` for any `Loggable` that implements `PartialEq`
pub fn dyn_eq_by_type<T: Loggable + PartialEq>(this: &T, other: &dyn Loggable) -> bool {
    other
        .as_any()
        .downcast_ref::<T>()
        .is_some_and(|other| this == other)
}

impl Loggable for LogMessage {
    fn base(&self) -> &LogMessage {
        self
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn dyn_eq(&self, other: &dyn Loggable) -> bool {
        dyn_eq_by_type(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::sync::Arc;

    fn fixed() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn message(text: &str) -> LogMessage {
        LogMessage::new(text, BackendLevel::Info, LogFlag::INFO)
            .with_location("src/node.rs", "node::start", 7)
            .with_timestamp(Some(fixed()))
    }

    #[test]
    fn test_unset_timestamp_is_construction_time() {
        let before = Utc::now();
        let message =
            LogMessage::new("now", BackendLevel::Info, LogFlag::INFO).with_timestamp(None);
        let after = Utc::now();

        assert!(message.timestamp() >= before && message.timestamp() <= after);
    }

    #[test]
    fn test_equality_through_trait_object() {
        let a: Arc<dyn Loggable> = Arc::new(message("same"));
        let b: Arc<dyn Loggable> = Arc::new(message("same"));
        let c: Arc<dyn Loggable> = Arc::new(message("different"));

        assert!(*a == *b);
        assert!(*a != *c);
    }

    #[test]
    fn test_file_name() {
        assert_eq!(message("x").file_name(), "node.rs");
        assert_eq!(
            LogMessage::new("x", BackendLevel::Info, LogFlag::INFO).file_name(),
            ""
        );
    }

    #[test]
    fn test_captures_thread() {
        let message = std::thread::Builder::new()
            .name("worker-7".to_string())
            .spawn(|| LogMessage::new("x", BackendLevel::Debug, LogFlag::DEBUG))
            .unwrap()
            .join()
            .unwrap();

        assert_eq!(message.thread_name(), Some("worker-7"));
        assert!(message.thread_id().starts_with("ThreadId("));
    }
}
