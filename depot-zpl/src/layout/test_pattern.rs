//! Printer self-test document
//!
//! A fixed diagnostic label: calibration arrow graphic, title, the current
//! timestamp, the printer's display name, two instructional lines and a
//! Code-128 with a known value. Sent by the connectivity probe so an
//! operator can confirm the full path from host to print head.

use chrono::Local;

use crate::writer::{TextStyle, ZplWriter};

/// Value of the diagnostic barcode; scanning it verifies the print quality.
pub const TEST_BARCODE: &str = "123456789";

/// Compressed-hex arrow glyph, 15 bytes per row.
const ARROW_GRAPHIC: &str = ",:::::P03FC,O01FFFE,N07FFFF8,M01FFFFFC,M07FFFFF,M0FFFFFF8,L01FFFFFFC,L03FFFFFFE,L07FFFFFFE,L0FFFFFFFF,L1FFFFFFFF,L3FFFFFFFF,L7FFFFFFFF,LFFFFFFFF8,M7FFFFFFF,M3FFFFFFC,M1FFFFFF8,M07FFFFF,N01FFFFE,N007FFC,P01F8,::::";

pub fn render_test_pattern(printer_name: &str) -> String {
    let timestamp = Local::now().format("%d/%m/%Y %H:%M:%S").to_string();

    let mut w = ZplWriter::begin_bare();
    w.graphic(50, 50, 300, 15, ARROW_GRAPHIC);
    w.text(50, 130, TextStyle::scalable(25, 25), "Printer self test");
    w.text(50, 170, TextStyle::scalable(20, 20), &format!("Date/time: {}", timestamp));
    w.text(50, 200, TextStyle::scalable(20, 20), &format!("Printer: {}", printer_name));
    w.text(50, 230, TextStyle::scalable(15, 15), "If you can read this,");
    w.text(50, 250, TextStyle::scalable(15, 15), "the printer is working!");
    w.code128_with_text(50, 280, 60, TEST_BARCODE);
    w.finish()
}
