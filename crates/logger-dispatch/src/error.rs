use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the dispatcher
#[derive(Debug, Error)]
pub enum Error {
    /// The delivery worker thread could not be started
    #[error("failed to spawn dispatch worker: {0}")]
    Spawn(#[source] std::io::Error),
}
