//! # depot-zpl
//!
//! ZPL label rendering for warehouse thermal printers - pure document
//! generation only.
//!
//! ## Scope
//!
//! This crate handles WHAT a label looks like:
//! - Millimeter/dot geometry (203 DPI Zebra stock)
//! - ZPL command emission with consistent `^FO/^FD/^FS` field blocks
//! - The six warehouse layouts (simple, batch, consolidator, floor grid,
//!   single vertical, block grid)
//! - Cargo condition indicator overlay
//! - The printer self-test pattern
//!
//! Getting bytes to a device is `depot-printer`'s job; rendered documents
//! are opaque UTF-8 blobs to every other layer.
//!
//! ## Example
//!
//! ```ignore
//! use depot_zpl::{render, LabelDefaults, LabelRequest};
//!
//! let defaults = LabelDefaults::load("config/printer_config.json");
//! let request = LabelRequest::BatchRange { start_code: 1, quantity: 3 };
//! let document = render(&request, &defaults);
//! assert!(document.starts_with("^XA"));
//! ```

mod defaults;
mod geometry;
mod layout;
mod request;
mod writer;

// Re-exports
pub use defaults::{BarcodeSpec, LabelDefaults, TextFieldSpec};
pub use geometry::{LabelGeometry, mm_to_dots};
pub use layout::{pad_to, pad8, render, render_test_pattern};
pub use request::{
    AddressEntry, BlockEntry, CargoFlags, ConsolidatorSummary, LabelRequest,
};
pub use writer::{Orientation, TextStyle, ZplWriter};
