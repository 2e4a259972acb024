// Border Radius Token System

use indexmap::IndexMap;

pub fn border_radius() -> IndexMap<String, String> {
    let mut radius = IndexMap::new();
    radius.insert("field".into(), "0.375rem".into()); // inputs, selects
    radius.insert("card".into(), "0.75rem".into());
    radius.insert("modal".into(), "1rem".into());
    radius.insert("pill".into(), "9999px".into()); // badges, avatars
    radius
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radii_are_rem_or_px_lengths() {
        for (name, value) in border_radius() {
            assert!(
                value.ends_with("rem") || value.ends_with("px"),
                "{name} = {value}"
            );
        }
    }
}
