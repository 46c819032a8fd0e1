use thiserror::Error;

/// Result type for code generation.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// First write failure recorded by the output sink. Later writes in the
    /// same pass are no-ops; the pass reports this error once.
    #[error("failed to write generated code")]
    Io(#[from] std::io::Error),
}
