//! Simple stdout handler, used when nothing was bootstrapped

use crate::{Level, LogHandler, Metadata, Record, metadata::render};
use chrono::{DateTime, SecondsFormat, Utc};
use parking_lot::Mutex;
use std::io::Write;
use std::sync::{Arc, LazyLock};

/// Shared so that lines from different handlers never interleave.
static STDOUT: LazyLock<Arc<Mutex<std::io::Stdout>>> =
    LazyLock::new(|| Arc::new(Mutex::new(std::io::stdout())));

/// Handler that writes one line per record to stdout
#[derive(Debug, Clone)]
pub struct StdoutHandler {
    label: String,
    /// Minimum log level
    log_level: Level,
    metadata: Metadata,
    /// Lock for stdout (to prevent interleaving)
    stdout: Arc<Mutex<std::io::Stdout>>,
}

impl StdoutHandler {
    /// Create a new stdout handler at `Info`
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            log_level: Level::Info,
            metadata: Metadata::new(),
            stdout: STDOUT.clone(),
        }
    }

    /// Create with a specific minimum level
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.log_level = level;
        self
    }

    fn format_line(&self, record: &Record<'_>, timestamp: DateTime<Utc>) -> String {
        let merged = match record.metadata {
            Some(call_metadata) if !call_metadata.is_empty() => {
                let mut merged = self.metadata.clone();
                merged.extend(call_metadata.iter().map(|(k, v)| (k.clone(), v.clone())));
                render(&merged)
            }
            _ => render(&self.metadata),
        };

        let metadata = if merged.is_empty() {
            String::new()
        } else {
            format!(" {merged}")
        };

        format!(
            "{} {} {}:{} [{}] {}\n",
            timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            record.level,
            self.label,
            metadata,
            record.source,
            record.message
        )
    }
}

impl LogHandler for StdoutHandler {
    fn log(&self, record: Record<'_>) {
        let line = self.format_line(&record, Utc::now());

        let mut stdout = self.stdout.lock();
        let _ = stdout.write_all(line.as_bytes());
        let _ = stdout.flush();
    }

    fn flush(&self) {
        let _ = self.stdout.lock().flush();
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
    use crate::{Location, metadata};
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap()
    }

    #[test]
    fn test_format_without_metadata() {
        let handler = StdoutHandler::new("engine");
        let record = Record::new(
            Level::Notice,
            "started",
            "proven_engine",
            Location::new("engine.rs", "proven_engine::start", 10),
        );

        assert_eq!(
            handler.format_line(&record, at()),
            "2025-01-02T03:04:05.000Z notice engine: [proven_engine] started\n"
        );
    }

    #[test]
    fn test_call_metadata_overrides_logger_metadata() {
        let mut handler = StdoutHandler::new("engine");
        handler.set_metadata(metadata! { "node" => "n1", "zone" => "eu" });

        let call = metadata! { "zone" => "us" };
        let record = Record::new(
            Level::Info,
            "moved",
            "proven_engine",
            Location::new("engine.rs", "proven_engine::migrate", 20),
        )
        .with_metadata(&call);

        assert_eq!(
            handler.format_line(&record, at()),
            "2025-01-02T03:04:05.000Z info engine: node=n1 zone=us [proven_engine] moved\n"
        );
    }

    #[test]
    fn test_with_level() {
        let handler = StdoutHandler::new("engine").with_level(Level::Debug);
        assert_eq!(handler.log_level(), Level::Debug);
    }
}
