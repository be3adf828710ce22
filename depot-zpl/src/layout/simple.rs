//! Simple cargo label
//!
//! The workhorse layout: the cargo code three times over, a vertical
//! Code-128 along the left edge, the code in plain text, and a horizontal
//! Code-128 below, so the label scans from any angle. Cargo condition
//! flags add the indicator overlay on top.

use super::indicators;
use crate::defaults::LabelDefaults;
use crate::request::CargoFlags;
use crate::writer::ZplWriter;

pub fn render(code: &str, cargo_flags: Option<&CargoFlags>, defaults: &LabelDefaults) -> String {
    let mut w = ZplWriter::begin(&defaults.cargo_geometry());

    let bv = &defaults.barcode_vertical;
    w.code128(
        bv.x,
        bv.y,
        defaults.vertical_module_width(),
        defaults.vertical_ratio(),
        bv.zpl_orientation(),
        bv.height,
        code,
    );

    let text = &defaults.text;
    w.text(text.x, text.y, text.style(), code);

    let bh = &defaults.barcode_horizontal;
    w.code128(
        bh.x,
        bh.y,
        defaults.horizontal_module_width(),
        defaults.horizontal_ratio(),
        bh.zpl_orientation(),
        bh.height,
        code,
    );

    if let Some(flags) = cargo_flags {
        indicators::render(&mut w, flags);
    }

    w.finish()
}
