//! Utility-class registration hook.
//!
//! A plugin is handed a registration sink exactly once per build and
//! adds its class definitions in a single call; there is no other
//! executable surface. The transitions plugin is the only one Dayflow
//! ships: three shorthand classes over the motion scales.

use std::fmt;

use indexmap::IndexMap;

use crate::css::{declaration, Declarations};
use crate::tokens::{DURATION_BASE, DURATION_FAST, DURATION_SLOW, EASE_SMOOTH};

/// Registration function handed to a plugin.
pub trait UtilitySink {
    fn add_utilities(&mut self, utilities: IndexMap<String, Declarations>);
}

/// A named registration callback, invoked once per build invocation.
#[derive(Clone, Copy)]
pub struct Plugin {
    name: &'static str,
    register: fn(&mut dyn UtilitySink),
}

impl Plugin {
    pub const fn new(name: &'static str, register: fn(&mut dyn UtilitySink)) -> Self {
        Plugin { name, register }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn register(&self, sink: &mut dyn UtilitySink) {
        log::debug!("plugin `{}` registering utilities", self.name);
        (self.register)(sink);
    }
}

impl fmt::Debug for Plugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Plugin").field("name", &self.name).finish()
    }
}

/// Collects registered classes in registration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectedUtilities {
    pub classes: IndexMap<String, Declarations>,
}

impl UtilitySink for CollectedUtilities {
    fn add_utilities(&mut self, utilities: IndexMap<String, Declarations>) {
        log::debug!("registering {} utility classes", utilities.len());
        self.classes.extend(utilities);
    }
}

/// The three transition shorthands. Each resolves to a single
/// `transition` declaration whose duration comes from the duration
/// scale and whose curve is the standard `smooth` easing.
pub fn transitions_plugin() -> Plugin {
    Plugin::new("transitions", register_transitions)
}

fn register_transitions(sink: &mut dyn UtilitySink) {
    let mut classes = IndexMap::new();
    classes.insert(
        "transition-base".to_string(),
        declaration("transition", &format!("all {DURATION_BASE} {EASE_SMOOTH}")),
    );
    classes.insert(
        "transition-fast".to_string(),
        declaration("transition", &format!("all {DURATION_FAST} {EASE_SMOOTH}")),
    );
    classes.insert(
        "transition-slow".to_string(),
        declaration("transition", &format!("all {DURATION_SLOW} {EASE_SMOOTH}")),
    );
    sink.add_utilities(classes);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::transition_duration;

    fn collect(plugin: Plugin) -> CollectedUtilities {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut collected = CollectedUtilities::default();
        plugin.register(&mut collected);
        collected
    }

    #[test]
    fn test_transitions_plugin_registers_exactly_three_classes() {
        let collected = collect(transitions_plugin());
        let names: Vec<&String> = collected.classes.keys().collect();
        assert_eq!(names, vec!["transition-base", "transition-fast", "transition-slow"]);
    }

    #[test]
    fn test_each_class_is_a_single_transition_declaration() {
        let collected = collect(transitions_plugin());
        for (class, declarations) in &collected.classes {
            assert_eq!(declarations.len(), 1, "{class}");
            assert!(declarations.contains_key("transition"), "{class}");
        }
    }

    #[test]
    fn test_durations_come_from_the_duration_scale() {
        let durations = transition_duration();
        let collected = collect(transitions_plugin());
        for (class, declarations) in &collected.classes {
            let value = declarations.get("transition").unwrap();
            let duration = value
                .split_whitespace()
                .find(|part| part.ends_with("ms"))
                .unwrap();
            assert!(
                durations.values().any(|known| known == duration),
                "{class} uses `{duration}`"
            );
        }
    }

    #[test]
    fn test_registering_twice_is_idempotent() {
        let mut collected = collect(transitions_plugin());
        transitions_plugin().register(&mut collected);
        assert_eq!(collected.classes.len(), 3);
    }
}
