//! Bridge from the `log` crate to proven-logger

use crate::{Level, Location, Logger, Metadata, MetadataValue};
use log::kv::{self, Key, Source, Value, VisitSource};
use log::{Log, Metadata as LogMetadata, Record as LogRecord};

/// Wrapper to implement the log crate's Log trait
#[derive(Debug)]
pub struct LogBridge {
    logger: Logger,
}

impl LogBridge {
    /// Create a new log bridge
    #[must_use]
    pub fn new(logger: Logger) -> Self {
        Self { logger }
    }
}

impl Log for LogBridge {
    fn enabled(&self, metadata: &LogMetadata) -> bool {
        !is_own_target(metadata.target()) && self.logger.is_enabled(map_level(metadata.level()))
    }

    fn log(&self, record: &LogRecord) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let mut collector = MetadataCollector::default();
        let _ = record.key_values().visit(&mut collector);
        let metadata = (!collector.0.is_empty()).then_some(&collector.0);

        let location = Location::new(
            record.file_static().unwrap_or("<unknown>"),
            record.module_path_static().unwrap_or_default(),
            record.line().unwrap_or_default(),
        );

        self.logger.log(
            map_level(record.level()),
            record.args().to_string(),
            metadata,
            record.target(),
            location,
        );
    }

    fn flush(&self) {
        self.logger.flush();
    }
}

/// Collects `log` key-values into facade metadata
#[derive(Default)]
struct MetadataCollector(Metadata);

impl<'kvs> VisitSource<'kvs> for MetadataCollector {
    fn visit_pair(&mut self, key: Key<'kvs>, value: Value<'kvs>) -> Result<(), kv::Error> {
        self.0
            .insert(key.as_str().to_string(), MetadataValue::String(value.to_string()));
        Ok(())
    }
}

/// Events from the logging crates themselves, e.g. `TracingSink` output
/// re-emitted through `tracing`'s `log` feature. Forwarding them would loop.
fn is_own_target(target: &str) -> bool {
    target.starts_with(OWN_TARGET_PREFIX)
}

const OWN_TARGET_PREFIX: &str = "proven_logger";

/// Map log levels to our levels
const fn map_level(level: log::Level) -> Level {
    match level {
        log::Level::Error => Level::Error,
        log::Level::Warn => Level::Warning,
        log::Level::Info => Level::Info,
        log::Level::Debug => Level::Debug,
        log::Level::Trace => Level::Trace,
    }
}

/// Most verbose `log` filter that still reaches the logger
const fn max_level_filter(level: Level) -> log::LevelFilter {
    match level {
        Level::Trace => log::LevelFilter::Trace,
        Level::Debug => log::LevelFilter::Debug,
        Level::Info | Level::Notice => log::LevelFilter::Info,
        Level::Warning => log::LevelFilter::Warn,
        Level::Error | Level::Critical => log::LevelFilter::Error,
    }
}

/// Initialize the log crate to forward into a proven-logger `Logger`
///
/// This will capture all logs from crates using the `log` crate macros,
/// except those targeted at the `proven_logger*` crates.
///
/// # Example
/// ```no_run
/// use proven_logger::{Logger, compat::init_log_bridge};
///
/// init_log_bridge(Logger::new("deps")).expect("Failed to set log bridge");
/// ```
///
/// # Errors
///
/// Returns an error if another `log` logger was already installed.
pub fn init_log_bridge(logger: Logger) -> Result<(), log::SetLoggerError> {
    let max_level = max_level_filter(logger.log_level());

    // We need to leak the bridge because log::set_logger requires 'static
    let bridge = Box::leak(Box::new(LogBridge::new(logger)));

    log::set_logger(bridge)?;
    log::set_max_level(max_level);

    Ok(())
}
