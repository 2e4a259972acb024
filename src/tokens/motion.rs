// Motion Token System
// Durations in milliseconds and named easing curves. The transition
// utility classes are built from these scales; see `plugin`.

use indexmap::IndexMap;

pub const DURATION_FAST: &str = "150ms";
pub const DURATION_BASE: &str = "200ms";
pub const DURATION_SLOW: &str = "300ms";
pub const DURATION_SLOWER: &str = "500ms";

/// The standard deceleration curve used by every transition utility.
pub const EASE_SMOOTH: &str = "cubic-bezier(0.4, 0, 0.2, 1)";

pub fn transition_duration() -> IndexMap<String, String> {
    let mut durations = IndexMap::new();
    durations.insert("fast".into(), DURATION_FAST.into());
    durations.insert("base".into(), DURATION_BASE.into());
    durations.insert("slow".into(), DURATION_SLOW.into());
    durations.insert("slower".into(), DURATION_SLOWER.into());
    durations
}

pub fn transition_timing_function() -> IndexMap<String, String> {
    let mut easings = IndexMap::new();
    easings.insert("smooth".into(), EASE_SMOOTH.into());
    easings.insert("snappy".into(), "cubic-bezier(0.2, 0, 0, 1)".into());
    easings.insert("enter".into(), "cubic-bezier(0, 0, 0.2, 1)".into());
    easings.insert("exit".into(), "cubic-bezier(0.4, 0, 1, 1)".into());
    easings
}
