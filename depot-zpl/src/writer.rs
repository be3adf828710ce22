//! ZPL command writer
//!
//! Emits ZPL command sequences with a fluent API. Every printable element
//! goes through one of the field helpers so the `^FO` origin, the content
//! directive, and the `^FD...^FS` data block always appear as a consistent
//! triplet. Layout code never concatenates raw command fragments.

use crate::geometry::LabelGeometry;

/// Barcode/field orientation codes (`^BC` / `^A` second parameter).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Normal.
    N,
    /// Rotated 90 degrees clockwise.
    R,
    /// Inverted 180 degrees.
    I,
    /// Read from bottom up, 270 degrees.
    B,
}

impl Orientation {
    fn code(self) -> char {
        match self {
            Orientation::N => 'N',
            Orientation::R => 'R',
            Orientation::I => 'I',
            Orientation::B => 'B',
        }
    }
}

/// A `^A` font directive: font identifier, optional orientation, cell size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    pub font: char,
    pub orientation: Option<Orientation>,
    pub height: u32,
    pub width: u32,
}

impl TextStyle {
    /// The scalable `0` font in normal orientation.
    pub fn scalable(height: u32, width: u32) -> Self {
        Self {
            font: '0',
            orientation: Some(Orientation::N),
            height,
            width,
        }
    }

    /// The scalable `0` font rotated 90 degrees.
    pub fn scalable_rotated(height: u32, width: u32) -> Self {
        Self {
            font: '0',
            orientation: Some(Orientation::R),
            height,
            width,
        }
    }
}

/// ZPL document writer.
///
/// `begin` emits the document preamble, the field helpers append one element
/// each, `finish` terminates the document and yields the final string.
/// Commands are newline-separated; printers ignore the whitespace and it
/// keeps captured documents diffable.
pub struct ZplWriter {
    buf: String,
}

impl ZplWriter {
    /// Start a document: format start, UTF-8 mode, print width/length from
    /// geometry, fine-tuning offsets, label home and gap media tracking.
    pub fn begin(geometry: &LabelGeometry) -> Self {
        let mut buf = String::with_capacity(1024);
        buf.push_str("^XA\n");
        buf.push_str("^CI28\n");
        buf.push_str(&format!("^PW{}\n", geometry.width_dots()));
        buf.push_str(&format!("^LL{}\n", geometry.height_dots()));
        buf.push_str(&format!("^LT{}\n", geometry.top_offset_dots));
        buf.push_str("^LH0,0\n");
        buf.push_str(&format!("^LS{}\n", geometry.left_shift_dots));
        buf.push_str("^MNW\n");
        Self { buf }
    }

    /// Start a document with no preamble beyond `^XA`, used for the
    /// self-test pattern, which runs on whatever stock is loaded.
    pub fn begin_bare() -> Self {
        Self { buf: String::from("^XA\n") }
    }

    fn field_origin(&mut self, x: u32, y: u32) {
        self.buf.push_str(&format!("^FO{},{}\n", x, y));
    }

    fn field_data(&mut self, data: &str) {
        self.buf.push_str(&format!("^FD{}^FS\n", data));
    }

    /// Rotate every subsequent field to read bottom-up (`^FWB`).
    pub fn field_rotation_bottom(&mut self) -> &mut Self {
        self.buf.push_str("^FWB\n");
        self
    }

    /// A text field: origin, font directive, data.
    pub fn text(&mut self, x: u32, y: u32, style: TextStyle, data: &str) -> &mut Self {
        self.field_origin(x, y);
        match style.orientation {
            Some(o) => self
                .buf
                .push_str(&format!("^A{}{},{},{}\n", style.font, o.code(), style.height, style.width)),
            None => self
                .buf
                .push_str(&format!("^A{},{},{}\n", style.font, style.height, style.width)),
        }
        self.field_data(data);
        self
    }

    /// A Code-128 barcode: origin, module width/ratio, `^BC`, data.
    ///
    /// Interpretation line is always suppressed here; the layouts print the
    /// code as a separate text field where needed.
    pub fn code128(
        &mut self,
        x: u32,
        y: u32,
        module_width: u32,
        ratio: u32,
        orientation: Orientation,
        height: u32,
        data: &str,
    ) -> &mut Self {
        self.field_origin(x, y);
        self.buf.push_str(&format!("^BY{},{}\n", module_width, ratio));
        self.buf
            .push_str(&format!("^BC{},{},N,N,N\n", orientation.code(), height));
        self.field_data(data);
        self
    }

    /// A Code-128 barcode with the human-readable interpretation line.
    pub fn code128_with_text(&mut self, x: u32, y: u32, height: u32, data: &str) -> &mut Self {
        self.field_origin(x, y);
        self.buf.push_str(&format!("^BCN,{},Y,N,N\n", height));
        self.field_data(data);
        self
    }

    /// A model-2 QR code. Data is prefixed `QA,` (high error correction,
    /// automatic input mode), which is what the warehouse scanners expect.
    pub fn qr(&mut self, x: u32, y: u32, magnification: u32, data: &str) -> &mut Self {
        self.field_origin(x, y);
        self.buf.push_str(&format!("^BQN,2,{}\n", magnification));
        self.field_data(&format!("QA,{}", data));
        self
    }

    /// A `^GFA` compressed-hex graphic field.
    pub fn graphic(&mut self, x: u32, y: u32, total: u32, row_bytes: u32, data: &str) -> &mut Self {
        self.field_origin(x, y);
        self.buf
            .push_str(&format!("^GFA,{},{},{},{}^FS\n", total, total, row_bytes, data));
        self
    }

    /// Terminate the document and return the ZPL string.
    pub fn finish(mut self) -> String {
        self.buf.push_str("^XZ\n");
        self.buf
    }
}
