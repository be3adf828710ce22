//! Single pallet position label, rotated
//!
//! Printed for one storage position and applied to racked stock sideways,
//! so the whole label renders with bottom-up field orientation (`^FWB`) and
//! each text field rotated (`^A0R`). One large QR plus the address, pallet,
//! building and floor names.

use crate::defaults::LabelDefaults;
use crate::writer::{TextStyle, ZplWriter};

const QR_POS: (u32, u32) = (80, 120);
const QR_MAGNIFICATION: u32 = 10;

const ADDRESS_POS: (u32, u32) = (420, 120);
const ADDRESS_FONT: u32 = 48;
const PALLET_POS: (u32, u32) = (500, 120);
const PALLET_FONT: u32 = 36;
const BUILDING_POS: (u32, u32) = (560, 120);
const BUILDING_FONT: u32 = 28;
const FLOOR_POS: (u32, u32) = (610, 120);
const FLOOR_FONT: u32 = 28;

pub fn render(
    full_address: &str,
    pallet_name: &str,
    building_name: &str,
    floor_name: &str,
    defaults: &LabelDefaults,
) -> String {
    let mut w = ZplWriter::begin(&defaults.address_geometry());
    w.field_rotation_bottom();

    w.qr(QR_POS.0, QR_POS.1, QR_MAGNIFICATION, full_address);

    w.text(
        ADDRESS_POS.0,
        ADDRESS_POS.1,
        TextStyle::scalable_rotated(ADDRESS_FONT, ADDRESS_FONT),
        full_address,
    );
    w.text(
        PALLET_POS.0,
        PALLET_POS.1,
        TextStyle::scalable_rotated(PALLET_FONT, PALLET_FONT),
        pallet_name,
    );
    w.text(
        BUILDING_POS.0,
        BUILDING_POS.1,
        TextStyle::scalable_rotated(BUILDING_FONT, BUILDING_FONT),
        building_name,
    );
    w.text(
        FLOOR_POS.0,
        FLOOR_POS.1,
        TextStyle::scalable_rotated(FLOOR_FONT, FLOOR_FONT),
        floor_name,
    );

    w.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> String {
        render(
            "COT001-A-01-03-01",
            "Pallet 03",
            "Building A",
            "Ground",
            &LabelDefaults::default(),
        )
    }

    #[test]
    fn test_label_rotation_is_set() {
        let zpl = sample();
        assert!(zpl.contains("^FWB\n"));
    }

    #[test]
    fn test_all_four_text_fields_rotated() {
        let zpl = sample();
        assert_eq!(zpl.matches("^A0R,").count(), 4);
        assert!(zpl.contains("^FDCOT001-A-01-03-01^FS"));
        assert!(zpl.contains("^FDPallet 03^FS"));
        assert!(zpl.contains("^FDBuilding A^FS"));
        assert!(zpl.contains("^FDGround^FS"));
    }

    #[test]
    fn test_large_qr() {
        let zpl = sample();
        assert!(zpl.contains("^BQN,2,10\n^FDQA,COT001-A-01-03-01^FS"));
    }
}
