//! Mapping from facade levels to backend levels

use proven_logger::Level;
use proven_logger_dispatch::{BackendLevel, LogFlag};

/// Collapse a facade level into the backend's level and flag.
///
/// Lossy: `Notice` shares `Info`, and `Critical` shares `Error`. The original
/// level travels separately on `BridgedLogMessage`.
#[must_use]
pub const fn map_level(level: Level) -> (BackendLevel, LogFlag) {
    match level {
        Level::Trace => (BackendLevel::Verbose, LogFlag::VERBOSE),
        Level::Debug => (BackendLevel::Debug, LogFlag::DEBUG),
        Level::Info | Level::Notice => (BackendLevel::Info, LogFlag::INFO),
        Level::Warning => (BackendLevel::Warning, LogFlag::WARNING),
        Level::Error | Level::Critical => (BackendLevel::Error, LogFlag::ERROR),
    }
}
