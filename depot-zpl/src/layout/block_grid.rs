//! Vertical block address label
//!
//! Covers one vertical stack of positions across floors. The physical rack
//! is read top-down, so position 0 (the highest floor) lands in the
//! top-right cell and subsequent floors alternate right/left descending.
//! The input list must already be ordered highest floor first; the renderer
//! trusts the caller and never sorts.

use super::grid;
use crate::defaults::LabelDefaults;
use crate::request::BlockEntry;
use crate::writer::ZplWriter;

/// index -> (column, row), highest floor top-right, descending.
pub const CELL_MAP: [(u32, u32); grid::CAPACITY] =
    [(1, 0), (0, 0), (1, 1), (0, 1), (1, 2), (0, 2), (1, 3), (0, 3)];

pub fn render(
    warehouse_code: &str,
    warehouse_name: &str,
    building_name: &str,
    addresses: &[BlockEntry],
    defaults: &LabelDefaults,
) -> String {
    let mut w = ZplWriter::begin(&defaults.address_geometry());

    let title = format!("{} ({}) - {}", warehouse_name, warehouse_code, building_name);
    grid::render_title(&mut w, &title);

    for (idx, entry) in addresses.iter().take(grid::CAPACITY).enumerate() {
        let (col, row) = CELL_MAP[idx];
        grid::render_cell(
            &mut w,
            col,
            row,
            defaults.qr_magnification,
            &entry.full_address,
            Some(&entry.floor_name),
        );
    }

    w.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(n: usize) -> Vec<BlockEntry> {
        // highest floor first, as the caller contract requires
        (0..n)
            .map(|i| BlockEntry {
                full_address: format!("COT001-A-{:02}-01", n - i - 1),
                floor_name: format!("Floor {}", n - i - 1),
            })
            .collect()
    }

    #[test]
    fn test_index_zero_lands_top_right() {
        let zpl = render("COT001", "Cotia 1", "Building A", &entries(4), &LabelDefaults::default());
        // index 0 -> (col 1, row 0) = origin (400, 70)
        assert!(zpl.contains("^FO400,70\n^BQN,2,8\n^FDQA,COT001-A-03-01^FS"));
        // index 1 -> (col 0, row 0)
        assert!(zpl.contains("^FO20,70\n^BQN,2,8\n^FDQA,COT001-A-02-01^FS"));
    }

    #[test]
    fn test_index_seven_lands_bottom_left() {
        let zpl = render("COT001", "Cotia 1", "Building A", &entries(8), &LabelDefaults::default());
        // index 7 -> (col 0, row 3) = origin (20, 910)
        assert!(zpl.contains("^FO20,910\n^BQN,2,8\n^FDQA,COT001-A-00-01^FS"));
    }

    #[test]
    fn test_input_order_is_trusted_not_sorted() {
        // Feed entries in an arbitrary (wrong) order: the renderer must place
        // them by list index regardless.
        let scrambled = vec![
            BlockEntry { full_address: "X-00".into(), floor_name: "Ground".into() },
            BlockEntry { full_address: "X-03".into(), floor_name: "Floor 3".into() },
        ];
        let zpl =
            render("COT001", "Cotia 1", "Building A", &scrambled, &LabelDefaults::default());
        // first list entry still lands at (col 1, row 0)
        assert!(zpl.contains("^FO400,70\n^BQN,2,8\n^FDQA,X-00^FS"));
        assert!(zpl.contains("^FO20,70\n^BQN,2,8\n^FDQA,X-03^FS"));
    }

    #[test]
    fn test_floor_names_print_beneath_addresses() {
        let zpl = render("COT001", "Cotia 1", "Building A", &entries(2), &LabelDefaults::default());
        assert!(zpl.contains("^FDFloor 1^FS"));
        assert!(zpl.contains("^FDFloor 0^FS"));
    }

    #[test]
    fn test_capacity_capped_at_eight() {
        let zpl = render("COT001", "Cotia 1", "Building A", &entries(12), &LabelDefaults::default());
        assert_eq!(zpl.matches("^FDQA,").count(), 8);
    }

    #[test]
    fn test_title_has_no_floor_component() {
        let zpl = render("COT001", "Cotia 1", "Building A", &entries(1), &LabelDefaults::default());
        assert!(zpl.contains("^FDCotia 1 (COT001) - Building A^FS"));
    }
}
