//! Bridges the `proven-logger` facade to a `proven-logger-dispatch` backend.
//!
//! Each facade record becomes a [`BridgedLogMessage`]: a backend
//! `LogMessage` at the mapped coarse level and flag, carrying the original
//! facade fields alongside. Records below the configured synchronous level
//! are delivered asynchronously; the rest block until written.
//!
//! ```no_run
//! use proven_logger::{Logger, warning};
//!
//! proven_logger_bridge::bootstrap_default().unwrap();
//!
//! let logger = Logger::new("engine");
//! warning!(logger, "disk at {}%", 91);
//! ```
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod config;
mod handler;
mod level;
mod message;

pub use config::{BridgeConfig, BridgeSettings};
pub use handler::BridgeHandler;
pub use level::map_level;
pub use message::{BridgedLogMessage, Origin};

use std::sync::Arc;
use tracing::debug;

/// Build a handler factory sharing `config` between every handler it makes.
pub fn factory(
    config: BridgeConfig,
) -> impl Fn(&str) -> BridgeHandler + Send + Sync + Clone + 'static {
    let config = Arc::new(config);

    move |label: &str| BridgeHandler::new(label, Arc::clone(&config))
}

/// Install the bridge as the process-wide facade handler.
///
/// # Errors
///
/// Returns `proven_logger::Error::AlreadyBootstrapped` if a handler factory
/// was already installed.
pub fn bootstrap(config: BridgeConfig) -> proven_logger::Result<()> {
    debug!(
        log_level = %config.log_level(),
        synchronous_log_level = %config.synchronous_log_level(),
        "installing logger bridge"
    );

    proven_logger::bootstrap(factory(config))
}

/// Install the bridge with the default configuration: the shared dispatcher,
/// handlers at `info`, synchronous delivery from `error`.
///
/// # Errors
///
/// Returns `proven_logger::Error::AlreadyBootstrapped` if a handler factory
/// was already installed.
pub fn bootstrap_default() -> proven_logger::Result<()> {
    bootstrap(BridgeConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proven_logger::{Level, LogHandler};
    use proven_logger_dispatch::test_support::RecordingBackend;

    #[test]
    fn test_factory_shares_config() {
        let config = BridgeConfig::default()
            .with_backend(Arc::new(RecordingBackend::new()))
            .with_log_level(Level::Debug);
        let make = factory(config);

        let a = make("a");
        let b = make("b");

        assert_eq!(a.label(), "a");
        assert_eq!(b.label(), "b");
        assert_eq!(a.log_level(), Level::Debug);
        assert!(Arc::ptr_eq(a.config(), b.config()));
    }
}
