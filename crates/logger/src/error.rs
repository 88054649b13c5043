use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the logging facade
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A handler factory was already installed for this process
    #[error("logging system already bootstrapped")]
    AlreadyBootstrapped,

    /// A level name could not be parsed
    #[error("invalid log level: {0}")]
    InvalidLevel(String),
}
