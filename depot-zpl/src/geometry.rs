//! Millimeter/dot geometry for thermal label stock
//!
//! ZPL coordinates are device dots. Physical label dimensions come in
//! millimeters, so every absolute coordinate is either a fixed dot constant
//! (calibrated for 203 DPI) or derived through [`mm_to_dots`].

/// Convert millimeters to device dots at the given resolution.
///
/// Rounds half away from zero, matching what the printer firmware does with
/// fractional positions.
pub fn mm_to_dots(mm: f64, dpi: u32) -> u32 {
    (mm * dpi as f64 / 25.4).round() as u32
}

/// Physical geometry of one label.
///
/// `top_offset_dots` and `left_shift_dots` are the fine-tuning knobs exposed
/// to operators whose stock feeds slightly off-center (`^LT` / `^LS`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelGeometry {
    pub width_mm: f64,
    pub height_mm: f64,
    pub dpi: u32,
    pub top_offset_dots: i32,
    pub left_shift_dots: i32,
}

impl LabelGeometry {
    /// 90 x 70 mm cargo label stock.
    pub fn cargo(dpi: u32) -> Self {
        Self {
            width_mm: 90.0,
            height_mm: 70.0,
            dpi,
            top_offset_dots: 0,
            left_shift_dots: 0,
        }
    }

    /// 100 x 150 mm address label stock used by the grid and vertical
    /// layouts.
    pub fn address(dpi: u32) -> Self {
        Self {
            width_mm: 100.0,
            height_mm: 150.0,
            dpi,
            top_offset_dots: 0,
            left_shift_dots: 0,
        }
    }

    /// Printable width in dots (`^PW`).
    #[inline]
    pub fn width_dots(&self) -> u32 {
        mm_to_dots(self.width_mm, self.dpi)
    }

    /// Label length in dots (`^LL`).
    #[inline]
    pub fn height_dots(&self) -> u32 {
        mm_to_dots(self.height_mm, self.dpi)
    }

    /// Convert a millimeter measure within this label to dots.
    #[inline]
    pub fn mm_to_dots(&self, mm: f64) -> u32 {
        mm_to_dots(mm, self.dpi)
    }
}

impl Default for LabelGeometry {
    fn default() -> Self {
        Self::cargo(203)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mm_to_dots_cargo_stock() {
        // 90mm x 70mm at 203 DPI
        assert_eq!(mm_to_dots(90.0, 203), 719);
        assert_eq!(mm_to_dots(70.0, 203), 559);
    }

    #[test]
    fn test_mm_to_dots_rounds_half_away_from_zero() {
        // 25.4mm at 100 DPI is exactly 100 dots; 25.527mm is 100.5
        assert_eq!(mm_to_dots(25.4, 100), 100);
        assert_eq!(mm_to_dots(25.527, 100), 101);
    }

    #[test]
    fn test_default_geometry_dots() {
        let geom = LabelGeometry::default();
        assert_eq!(geom.width_dots(), 719);
        assert_eq!(geom.height_dots(), 559);
    }

    #[test]
    fn test_address_stock_dots() {
        let geom = LabelGeometry::address(203);
        assert_eq!(geom.width_dots(), 799);
        assert_eq!(geom.height_dots(), 1199);
    }
}
