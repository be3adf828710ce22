//! Floor address label
//!
//! One label covering a warehouse floor: up to 8 pallet positions in a
//! 2-column grid filled left-to-right, top-to-bottom. The caller paginates
//! floors with more than 8 pallets into multiple requests.

use super::grid;
use crate::defaults::LabelDefaults;
use crate::request::AddressEntry;
use crate::writer::ZplWriter;

pub fn render(
    warehouse_code: &str,
    warehouse_name: &str,
    building_name: &str,
    floor_name: &str,
    addresses: &[AddressEntry],
    defaults: &LabelDefaults,
) -> String {
    let mut w = ZplWriter::begin(&defaults.address_geometry());

    let title =
        format!("{} ({}) - {} - {}", warehouse_name, warehouse_code, building_name, floor_name);
    grid::render_title(&mut w, &title);

    for (idx, entry) in addresses.iter().take(grid::CAPACITY).enumerate() {
        let col = (idx as u32) % grid::COLUMNS;
        let row = (idx as u32) / grid::COLUMNS;
        grid::render_cell(
            &mut w,
            col,
            row,
            defaults.qr_magnification,
            &entry.full_address,
            Some(&entry.name),
        );
    }

    w.finish()
}
