// Spacing Token System
// Half-step and wide-layout additions to the consumer's default scale.
// Keys are numeric strings; values are strictly increasing with the key.

use indexmap::IndexMap;

pub fn spacing() -> IndexMap<String, String> {
    let mut spacing = IndexMap::new();
    spacing.insert("4.5".into(), "1.125rem".into());
    spacing.insert("13".into(), "3.25rem".into());
    spacing.insert("15".into(), "3.75rem".into());
    spacing.insert("18".into(), "4.5rem".into());
    spacing.insert("22".into(), "5.5rem".into());
    spacing.insert("26".into(), "6.5rem".into());
    spacing.insert("30".into(), "7.5rem".into());
    spacing
}

/// Parse a rem length into its numeric part.
pub fn parse_rem(value: &str) -> Option<f64> {
    value.strip_suffix("rem")?.parse().ok()
}
