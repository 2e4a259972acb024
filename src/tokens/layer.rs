// Z-Index Layer System
// Overlay surfaces in stacking order. Declaration order doubles as the
// ordering contract: each layer sits above the one declared before it.

use indexmap::IndexMap;

pub fn z_index() -> IndexMap<String, i32> {
    let mut layers = IndexMap::new();
    layers.insert("dropdown".into(), 1000);
    layers.insert("sticky".into(), 1020);
    layers.insert("overlay".into(), 1030);
    layers.insert("modal".into(), 1040);
    layers.insert("popover".into(), 1050);
    layers.insert("toast".into(), 1060);
    layers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layers_are_strictly_ordered() {
        let layers = z_index();
        let values: Vec<i32> = layers.values().copied().collect();
        for window in values.windows(2) {
            assert!(window[0] < window[1], "{:?}", layers);
        }
    }
}
