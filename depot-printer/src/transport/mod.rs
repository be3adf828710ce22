//! Transport backends
//!
//! One implementation per output path. Every transport makes exactly one
//! attempt per call (retry policy belongs to the caller) and blocks until
//! the OS-level operation completes or times out.

mod file;
mod network;
mod spooler;

pub use file::FileTransport;
pub use network::NetworkTransport;
pub use spooler::SpoolerTransport;

use crate::error::PrintResult;

/// A resolved output path for one rendered document.
pub trait Transport {
    /// Send the document bytes. One attempt, no fallback.
    fn send(&self, document: &[u8]) -> PrintResult<()>;

    /// Cheap reachability check without sending a document.
    ///
    /// `Ok(false)` means the device did not answer; errors are reserved for
    /// checks that cannot be performed at all.
    fn check(&self) -> PrintResult<bool>;
}
