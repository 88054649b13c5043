//! Destinations the dispatcher hands messages to

use crate::{LogFlag, Loggable};

/// Receives messages from a `Dispatcher`.
///
/// Writes happen on the dispatcher's worker thread. They are inline on the
/// submitting thread only when that thread is the worker itself, or when the
/// worker could not be spawned.
pub trait Sink: Send + Sync + 'static {
    /// Write one message
    fn write(&self, message: &dyn Loggable);
}

/// Sink that re-emits every message as a `tracing` event.
///
/// Events carry `proven_logger_dispatch` targets. If `tracing`'s `log`
/// feature forwards them into the `log` crate, `proven_logger::compat::LogBridge`
/// drops them rather than feeding them back into the facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

macro_rules! emit {
    ($level:expr, $message:expr) => {{
        let message = $message;
        tracing::event!(
            $level,
            file = message.file_name(),
            function = message.function(),
            line = message.line(),
            context = message.context(),
            "{}",
            message.message()
        );
    }};
}

impl Sink for TracingSink {
    fn write(&self, message: &dyn Loggable) {
        let base = message.base();
        let flag = base.flag();

        if flag.contains(LogFlag::ERROR) {
            emit!(tracing::Level::ERROR, base);
        } else if flag.contains(LogFlag::WARNING) {
            emit!(tracing::Level::WARN, base);
        } else if flag.contains(LogFlag::INFO) {
            emit!(tracing::Level::INFO, base);
        } else if flag.contains(LogFlag::DEBUG) {
            emit!(tracing::Level::DEBUG, base);
        } else {
            emit!(tracing::Level::TRACE, base);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BackendLevel, LogMessage};
    use tracing_test::traced_test;

    #[test]
    #[traced_test]
    fn test_emits_at_mapped_level() {
        let sink = TracingSink;

        sink.write(
            &LogMessage::new("disk nearly full", BackendLevel::Warning, LogFlag::WARNING)
                .with_location("src/storage/disk.rs", "storage::disk::check", 42),
        );
        sink.write(&LogMessage::new("cache miss", BackendLevel::Verbose, LogFlag::VERBOSE));

        assert!(logs_contain("WARN"));
        assert!(logs_contain("disk nearly full"));
        assert!(logs_contain("file=\"disk.rs\""));
        assert!(logs_contain("line=42"));
        assert!(logs_contain("TRACE"));
        assert!(logs_contain("cache miss"));
    }
}
