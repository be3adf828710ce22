//! Consolidated-shipment label
//!
//! One QR code carrying the consolidator code, the code again in large
//! text, then the shipment aggregates: cargo count, total weight, total
//! volume, and a footer with the warehouse name and free text. Every
//! aggregate line is optional and simply left off the label when absent.

use crate::defaults::LabelDefaults;
use crate::request::ConsolidatorSummary;
use crate::writer::{TextStyle, ZplWriter};

const QR_POS: (u32, u32) = (40, 60);
const CODE_POS: (u32, u32) = (260, 80);
const CODE_FONT: u32 = 60;

const INFO_X: u32 = 260;
const INFO_TOP: u32 = 180;
const INFO_STEP: u32 = 50;
const INFO_FONT: u32 = 28;

const FOOTER_X: u32 = 40;
const WAREHOUSE_Y: u32 = 420;
const WAREHOUSE_FONT: u32 = 30;
const NOTES_Y: u32 = 470;
const NOTES_FONT: u32 = 24;

pub fn render(code: &str, summary: &ConsolidatorSummary, defaults: &LabelDefaults) -> String {
    let mut w = ZplWriter::begin(&defaults.cargo_geometry());

    w.qr(QR_POS.0, QR_POS.1, defaults.qr_magnification, code);
    w.text(CODE_POS.0, CODE_POS.1, TextStyle::scalable(CODE_FONT, CODE_FONT), code);

    let mut info_y = INFO_TOP;
    let mut info_line = |w: &mut ZplWriter, line: String| {
        w.text(INFO_X, info_y, TextStyle::scalable(INFO_FONT, INFO_FONT), &line);
        info_y += INFO_STEP;
    };

    if let Some(count) = summary.cargo_count {
        info_line(&mut w, format!("Cargo count: {}", count));
    }
    if let Some(weight) = summary.total_weight {
        info_line(&mut w, format!("Weight: {:.2} kg", weight));
    }
    if let Some(volume) = summary.total_volume {
        info_line(&mut w, format!("Volume: {:.3} m3", volume));
    }

    if let Some(name) = summary.warehouse_name.as_deref()
        && !name.is_empty()
    {
        w.text(FOOTER_X, WAREHOUSE_Y, TextStyle::scalable(WAREHOUSE_FONT, WAREHOUSE_FONT), name);
    }
    if let Some(notes) = summary.additional_text.as_deref()
        && !notes.is_empty()
    {
        w.text(FOOTER_X, NOTES_Y, TextStyle::scalable(NOTES_FONT, NOTES_FONT), notes);
    }

    w.finish()
}
