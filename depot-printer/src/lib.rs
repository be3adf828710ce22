//! # depot-printer
//!
//! Printer profiles and document dispatch - low-level output capabilities
//! only.
//!
//! ## Scope
//!
//! This crate handles WHERE a rendered document goes:
//! - Typed printer profiles persisted in one JSON file
//! - Raw TCP transport (port 9100)
//! - Windows spooler transport (optional, `copy /B` to a print share)
//! - Filesystem transport for dry runs
//! - Connectivity diagnostics with an optional self-test print
//!
//! Label content (WHAT to print) lives in `depot-zpl`; documents arrive
//! here as opaque byte blobs.
//!
//! ## Example
//!
//! ```ignore
//! use depot_printer::{OutputTarget, PrinterProfileStore, TransportDispatcher};
//!
//! let store = PrinterProfileStore::load("config/printer_config.json");
//! let dispatcher = TransportDispatcher::new(&store);
//!
//! let document = depot_zpl::render(&request, &defaults);
//! let target = OutputTarget::Configured { printer_id: "dock".into() };
//! dispatcher.dispatch(&target, document.as_bytes())?;
//! ```

mod dispatch;
mod error;
mod probe;
mod profile;
mod store;
mod transport;

// Re-exports
pub use dispatch::{LEGACY_TIMEOUT_SECS, OutputTarget, TransportDispatcher};
pub use error::{PrintError, PrintResult};
pub use probe::ConnectivityProbe;
pub use profile::{
    Connection, DEFAULT_PORT, DEFAULT_TIMEOUT_SECS, PrintSettings, PrinterKind, PrinterProfile,
};
pub use store::PrinterProfileStore;
pub use transport::{FileTransport, NetworkTransport, SpoolerTransport, Transport};
