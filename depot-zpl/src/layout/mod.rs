//! Label layout renderers
//!
//! One module per layout kind. Every renderer is a pure function from a
//! request plus [`LabelDefaults`] to a complete `^XA...^XZ` document; batch
//! rendering concatenates complete documents into one dispatch unit.

mod batch;
mod block_grid;
mod consolidator;
mod floor_grid;
mod grid;
mod indicators;
mod simple;
mod test_pattern;
mod vertical;

pub use test_pattern::render_test_pattern;

use crate::defaults::LabelDefaults;
use crate::request::LabelRequest;

/// Render one request into its ZPL document.
pub fn render(request: &LabelRequest, defaults: &LabelDefaults) -> String {
    match request {
        LabelRequest::Simple { code, cargo_flags } => {
            simple::render(code, cargo_flags.as_ref(), defaults)
        }
        LabelRequest::BatchRange { start_code, quantity } => {
            batch::render(*start_code, *quantity, defaults)
        }
        LabelRequest::Consolidator { code, summary } => {
            consolidator::render(code, summary, defaults)
        }
        LabelRequest::FloorGrid {
            warehouse_code,
            warehouse_name,
            building_name,
            floor_name,
            addresses,
        } => floor_grid::render(
            warehouse_code,
            warehouse_name,
            building_name,
            floor_name,
            addresses,
            defaults,
        ),
        LabelRequest::SingleVertical { full_address, pallet_name, building_name, floor_name } => {
            vertical::render(full_address, pallet_name, building_name, floor_name, defaults)
        }
        LabelRequest::BlockGrid { warehouse_code, warehouse_name, building_name, addresses } => {
            block_grid::render(warehouse_code, warehouse_name, building_name, addresses, defaults)
        }
    }
}

/// Left-pad a code to `width` decimal digits. Values that already exceed the
/// width pass through unpadded: sequences past the 8-digit range print as
/// longer codes rather than truncating.
pub fn pad_to(n: u64, width: usize) -> String {
    format!("{:0>width$}", n, width = width)
}

/// The standard 8-digit cargo code form.
pub fn pad8(n: u64) -> String {
    pad_to(n, 8)
}
