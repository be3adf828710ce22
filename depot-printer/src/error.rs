//! Error types for profile management and dispatch

use thiserror::Error;

/// Printer dispatch error taxonomy.
///
/// One variant per caller-distinguishable failure; the dispatcher never
/// retries and never switches transports on failure, so every error here
/// describes exactly one attempt.
#[derive(Debug, Error)]
pub enum PrintError {
    /// Malformed or missing required profile fields
    #[error("invalid printer configuration: {0}")]
    Validation(String),

    /// Unknown profile id
    #[error("printer not found: {0}")]
    NotFound(String),

    /// Profile exists but is disabled
    #[error("printer is disabled: {0}")]
    Disabled(String),

    /// TCP connect did not complete within the configured timeout
    #[error("connection timeout: {0}")]
    ConnectionTimeout(String),

    /// Device actively refused the connection
    #[error("connection refused: {0}")]
    ConnectionRefused(String),

    /// Generic transport failure, carries the underlying message
    #[error("transport error: {0}")]
    Transport(String),

    /// The spooler copy command exited non-zero
    #[error("spooler copy failed with exit code {code}")]
    SpoolerExit { code: i32 },

    /// Unrecognized output mode or a transport unavailable on this platform
    #[error("unsupported output mode: {0}")]
    UnsupportedMode(String),

    /// Filesystem error (config persistence, file transport)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for printer operations
pub type PrintResult<T> = Result<T, PrintError>;
