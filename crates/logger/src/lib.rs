//! Structured logging facade.
//!
//! Code logs through a [`Logger`], which forwards records at or above its
//! level to a pluggable [`LogHandler`]. A process picks its handler once, at
//! start-up, with [`bootstrap`]; loggers created afterwards use it.
//!
//! ```
//! use proven_logger::{Logger, info, metadata};
//!
//! let logger = Logger::new("engine");
//! info!(logger, metadata: metadata! { "node" => "n1" }; "started in {}ms", 12);
//! ```
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod error;
mod handler;
mod level;
mod logger;
mod macros;
mod metadata;
mod record;
mod stdout;

pub mod compat;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use error::{Error, Result};
pub use handler::{LogHandler, NoOpHandler};
pub use level::Level;
pub use logger::Logger;
pub use metadata::{Metadata, MetadataValue};
pub use record::{Location, OwnedRecord, Record};
pub use stdout::StdoutHandler;

use std::sync::OnceLock;

type BoxedFactory = Box<dyn Fn(&str) -> Box<dyn LogHandler> + Send + Sync>;

static FACTORY: OnceLock<BoxedFactory> = OnceLock::new();

/// Install the process-wide handler factory.
///
/// Every `Logger::new` after this call builds its handler with `factory`.
///
/// # Errors
///
/// Returns `Error::AlreadyBootstrapped` if a factory was already installed.
/// The existing factory stays in place.
pub fn bootstrap<F, H>(factory: F) -> Result<()>
where
    F: Fn(&str) -> H + Send + Sync + 'static,
    H: LogHandler,
{
    FACTORY
        .set(Box::new(move |label: &str| -> Box<dyn LogHandler> {
            Box::new(factory(label))
        }))
        .map_err(|_| Error::AlreadyBootstrapped)
}

/// Whether `bootstrap` has installed a factory
#[must_use]
pub fn is_bootstrapped() -> bool {
    FACTORY.get().is_some()
}

pub(crate) fn make_handler(label: &str) -> Option<Box<dyn LogHandler>> {
    FACTORY.get().map(|factory| factory(label))
}

/// Crate name portion of a module path; used by the `source!` macro.
#[doc(hidden)]
#[must_use]
pub fn source_from_module_path(module_path: &'static str) -> &'static str {
    module_path
        .split_once("::")
        .map_or(module_path, |(krate, _)| krate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_from_module_path() {
        assert_eq!(source_from_module_path("proven_engine::node::start"), "proven_engine");
        assert_eq!(source_from_module_path("proven_engine"), "proven_engine");
        assert_eq!(source!(), "proven_logger");
    }
}
