//! Asynchronous-capable log dispatch backend.
//!
//! Messages are submitted to a [`Backend`] together with a flag choosing
//! asynchronous (enqueue and return) or synchronous (wait until written)
//! delivery. The process-wide [`Dispatcher::shared`] instance writes to
//! `tracing` from a single worker thread.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod dispatcher;
mod error;
mod level;
mod message;
mod sink;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use dispatcher::Dispatcher;
pub use error::{Error, Result};
pub use level::{BackendLevel, LogFlag};
pub use message::{LogMessage, Loggable, dyn_eq_by_type};
pub use sink::{Sink, TracingSink};

use std::sync::Arc;

/// A logging backend accepting messages for delivery.
pub trait Backend: Send + Sync + 'static {
    /// Submit a message. Never fails; delivery problems stay inside the
    /// backend.
    fn log(&self, asynchronous: bool, message: Arc<dyn Loggable>);

    /// Block until every message submitted so far has been written
    fn flush(&self);
}
