//! Sequential batch rendering
//!
//! Renders a run of consecutive cargo codes as independent `^XA...^XZ`
//! documents concatenated into one byte stream, so the whole batch travels
//! to the printer as a single dispatch unit.

use super::{pad_to, simple};
use crate::defaults::LabelDefaults;

pub fn render(start_code: u64, quantity: u32, defaults: &LabelDefaults) -> String {
    let width = defaults.pad_length as usize;
    let mut all = String::new();
    for n in start_code..start_code + quantity as u64 {
        all.push_str(&simple::render(&pad_to(n, width), None, defaults));
    }
    all
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_labels_three_blocks() {
        let zpl = render(1, 3, &LabelDefaults::default());
        assert_eq!(zpl.matches("^XA").count(), 3);
        assert_eq!(zpl.matches("^XZ").count(), 3);
        // each code appears three times within its own block
        assert_eq!(zpl.matches("^FD00000001^FS").count(), 3);
        assert_eq!(zpl.matches("^FD00000002^FS").count(), 3);
        assert_eq!(zpl.matches("^FD00000003^FS").count(), 3);
        assert!(!zpl.contains("00000004"));
    }

    #[test]
    fn test_range_is_inclusive_of_both_ends() {
        let zpl = render(99999998, 3, &LabelDefaults::default());
        assert!(zpl.contains("99999998"));
        assert!(zpl.contains("99999999"));
        // accepted overflow past 8 digits
        assert!(zpl.contains("100000000"));
    }

    #[test]
    fn test_zero_quantity_renders_nothing() {
        assert_eq!(render(1, 0, &LabelDefaults::default()), "");
    }
}
