//! Calibrated layout defaults
//!
//! The rendering constants that operators occasionally retune per site
//! (label dimensions, barcode module widths, the position of the simple
//! layout's three fields) live in one typed struct instead of a free-form
//! dictionary. Values are calibrated for 203 DPI Zebra GK-series stock.
//!
//! `LabelDefaults::load` reads the optional `label_defaults` object from the
//! shared JSON config file; anything missing falls back to the built-ins and
//! a malformed file is only worth a warning, never an error.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::geometry::LabelGeometry;
use crate::writer::{Orientation, TextStyle};

/// Placement and size of a plain text field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TextFieldSpec {
    pub font: char,
    pub height: u32,
    pub width: u32,
    pub x: u32,
    pub y: u32,
}

impl Default for TextFieldSpec {
    fn default() -> Self {
        Self { font: 'A', height: 30, width: 30, x: 200, y: 250 }
    }
}

impl TextFieldSpec {
    pub fn style(&self) -> TextStyle {
        TextStyle { font: self.font, orientation: None, height: self.height, width: self.width }
    }
}

/// Placement of one Code-128 instance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BarcodeSpec {
    pub orientation: char,
    pub height: u32,
    pub x: u32,
    pub y: u32,
}

impl BarcodeSpec {
    fn horizontal() -> Self {
        Self { orientation: 'N', height: 90, x: 220, y: 430 }
    }

    fn vertical() -> Self {
        Self { orientation: 'R', height: 120, x: 42, y: 250 }
    }

    pub fn zpl_orientation(&self) -> Orientation {
        match self.orientation {
            'R' => Orientation::R,
            'I' => Orientation::I,
            'B' => Orientation::B,
            _ => Orientation::N,
        }
    }
}

impl Default for BarcodeSpec {
    fn default() -> Self {
        Self::horizontal()
    }
}

/// The full calibration set for label rendering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LabelDefaults {
    // Cargo label stock
    pub width_mm: f64,
    pub height_mm: f64,
    pub dpi: u32,

    // Fine-tuning for stock that feeds off-center
    pub top_offset_dots: i32,
    pub left_shift_dots: i32,

    // Code-128 module width and wide-to-narrow ratio. The vertical and
    // horizontal instances can be tuned independently; unset overrides fall
    // back to the global pair.
    pub barcode_module_width: u32,
    pub barcode_ratio: u32,
    pub barcode_vertical_module_width: Option<u32>,
    pub barcode_vertical_ratio: Option<u32>,
    pub barcode_horizontal_module_width: Option<u32>,
    pub barcode_horizontal_ratio: Option<u32>,

    pub pad_length: u32,
    pub qr_magnification: u32,

    pub text: TextFieldSpec,
    pub barcode_horizontal: BarcodeSpec,
    pub barcode_vertical: BarcodeSpec,
}

impl Default for LabelDefaults {
    fn default() -> Self {
        Self {
            width_mm: 90.0,
            height_mm: 70.0,
            dpi: 203,
            top_offset_dots: 0,
            left_shift_dots: 0,
            barcode_module_width: 3,
            barcode_ratio: 2,
            barcode_vertical_module_width: Some(2),
            barcode_vertical_ratio: Some(2),
            barcode_horizontal_module_width: None,
            barcode_horizontal_ratio: None,
            pad_length: 8,
            qr_magnification: 8,
            text: TextFieldSpec::default(),
            barcode_horizontal: BarcodeSpec::horizontal(),
            barcode_vertical: BarcodeSpec::vertical(),
        }
    }
}

impl LabelDefaults {
    /// Read the `label_defaults` object from a JSON config file.
    ///
    /// Missing file, missing key, or a parse failure all yield the
    /// built-ins.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(_) => return Self::default(),
        };

        match serde_json::from_str::<serde_json::Value>(&raw) {
            Ok(root) => match root.get("label_defaults") {
                Some(section) => match serde_json::from_value(section.clone()) {
                    Ok(defaults) => defaults,
                    Err(e) => {
                        warn!(path = %path.display(), error = %e, "malformed label_defaults, using built-ins");
                        Self::default()
                    }
                },
                None => Self::default(),
            },
            Err(e) => {
                warn!(path = %path.display(), error = %e, "unreadable config file, using built-in label defaults");
                Self::default()
            }
        }
    }

    /// Cargo label geometry (simple/batch/consolidator layouts).
    pub fn cargo_geometry(&self) -> LabelGeometry {
        LabelGeometry {
            width_mm: self.width_mm,
            height_mm: self.height_mm,
            dpi: self.dpi,
            top_offset_dots: self.top_offset_dots,
            left_shift_dots: self.left_shift_dots,
        }
    }

    /// Address label geometry (grid/vertical layouts).
    pub fn address_geometry(&self) -> LabelGeometry {
        LabelGeometry::address(self.dpi)
    }

    pub fn vertical_module_width(&self) -> u32 {
        self.barcode_vertical_module_width.unwrap_or(self.barcode_module_width)
    }

    pub fn vertical_ratio(&self) -> u32 {
        self.barcode_vertical_ratio.unwrap_or(self.barcode_ratio)
    }

    pub fn horizontal_module_width(&self) -> u32 {
        self.barcode_horizontal_module_width.unwrap_or(self.barcode_module_width)
    }

    pub fn horizontal_ratio(&self) -> u32 {
        self.barcode_horizontal_ratio.unwrap_or(self.barcode_ratio)
    }
}
