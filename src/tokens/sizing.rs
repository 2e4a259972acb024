// Sizing Token System
// Ring widths, minimum hit targets, and letter spacing.

use indexmap::IndexMap;

pub fn ring_width() -> IndexMap<String, String> {
    let mut rings = IndexMap::new();
    rings.insert("3".into(), "3px".into());
    rings
}

pub fn min_width() -> IndexMap<String, String> {
    let mut widths = IndexMap::new();
    widths.insert("touch".into(), "44px".into());
    widths
}

pub fn min_height() -> IndexMap<String, String> {
    let mut heights = IndexMap::new();
    heights.insert("field".into(), "40px".into());
    heights.insert("touch".into(), "44px".into()); // WCAG hit target
    heights
}

pub fn letter_spacing() -> IndexMap<String, String> {
    let mut tracking = IndexMap::new();
    tracking.insert("tight".into(), "-0.01em".into());
    tracking.insert("wide".into(), "0.02em".into());
    tracking.insert("wider".into(), "0.04em".into());
    tracking
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touch_targets_meet_the_44px_minimum() {
        let widths = min_width();
        let heights = min_height();
        assert_eq!(widths.get("touch").unwrap(), "44px");
        assert_eq!(heights.get("touch").unwrap(), "44px");
    }

    #[test]
    fn test_letter_spacing_uses_em_units() {
        for (name, value) in letter_spacing() {
            assert!(value.ends_with("em"), "{name} = {value}");
        }
    }
}
