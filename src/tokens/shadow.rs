// Shadow Token System
// Elevation ramp tinted with the slate-900 text color rather than pure
// black, so shadows read as the same hue as borders and text.

use indexmap::IndexMap;

pub fn box_shadow() -> IndexMap<String, String> {
    let mut shadows = IndexMap::new();
    shadows.insert(
        "card".into(),
        "0 1px 3px rgba(15, 23, 42, 0.08), 0 1px 2px rgba(15, 23, 42, 0.04)".into(),
    );
    shadows.insert(
        "card-hover".into(),
        "0 4px 12px rgba(15, 23, 42, 0.12), 0 2px 4px rgba(15, 23, 42, 0.06)".into(),
    );
    shadows.insert("dropdown".into(), "0 8px 24px rgba(15, 23, 42, 0.14)".into());
    shadows.insert("modal".into(), "0 20px 50px rgba(15, 23, 42, 0.25)".into());
    shadows.insert(
        "focus-ring".into(),
        "0 0 0 3px rgba(79, 70, 229, 0.35)".into(),
    );
    shadows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_shadow_carries_a_color() {
        for (name, value) in box_shadow() {
            assert!(value.contains("rgba("), "{name} = {value}");
        }
    }
}
