//! Shared 2x4 grid mechanics for the address label layouts
//!
//! Floor and block labels print on 100x150mm stock divided into two columns
//! of four rows. A cell holds a QR code with the full storage address and up
//! to two caption lines beneath it.

use crate::writer::{TextStyle, ZplWriter};

pub const COLUMNS: u32 = 2;
pub const ROWS: u32 = 4;
/// Maximum entries per label; callers paginate longer lists.
pub const CAPACITY: usize = (COLUMNS * ROWS) as usize;

const GRID_LEFT: u32 = 20;
const GRID_TOP: u32 = 70;
const CELL_WIDTH: u32 = 380;
const CELL_HEIGHT: u32 = 280;

const ADDRESS_OFFSET: u32 = 190;
const ADDRESS_FONT: u32 = 24;
const CAPTION_OFFSET: u32 = 225;
const CAPTION_FONT: u32 = 20;

const TITLE_POS: (u32, u32) = (20, 20);
const TITLE_FONT: u32 = 28;

/// Top-left dot position of a grid cell.
pub fn cell_origin(col: u32, row: u32) -> (u32, u32) {
    (GRID_LEFT + col * CELL_WIDTH, GRID_TOP + row * CELL_HEIGHT)
}

/// The single title line across the top of the label.
pub fn render_title(writer: &mut ZplWriter, title: &str) {
    writer.text(TITLE_POS.0, TITLE_POS.1, TextStyle::scalable(TITLE_FONT, TITLE_FONT), title);
}

/// One grid cell: QR code, the address text, and an optional caption line.
pub fn render_cell(
    writer: &mut ZplWriter,
    col: u32,
    row: u32,
    magnification: u32,
    full_address: &str,
    caption: Option<&str>,
) {
    let (x, y) = cell_origin(col, row);
    writer.qr(x, y, magnification, full_address);
    writer.text(
        x,
        y + ADDRESS_OFFSET,
        TextStyle::scalable(ADDRESS_FONT, ADDRESS_FONT),
        full_address,
    );
    if let Some(caption) = caption
        && !caption.is_empty()
    {
        writer.text(
            x,
            y + CAPTION_OFFSET,
            TextStyle::scalable(CAPTION_FONT, CAPTION_FONT),
            caption,
        );
    }
}
