//! Generator configuration surface.
//!
//! This is the object the class generator reads at build time: the file
//! globs to scan for class usage, the dark-mode strategy, the theme
//! extension, and the plugin list. Everything except the plugins is
//! plain data and round-trips through serde; plugins are function
//! pointers and are never configurable from documents.

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;
use crate::plugin::{transitions_plugin, CollectedUtilities, Plugin};
use crate::theme::ThemeExtension;

/// How dark mode activates. `Class` means an external toggle adds or
/// removes a marker class on the document root; `Media` follows the
/// OS-level preference query instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DarkMode {
    #[default]
    Class,
    Media,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeSection {
    #[serde(default)]
    pub extend: ThemeExtension,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GeneratorConfig {
    #[serde(default)]
    pub content: Vec<String>,
    #[serde(default)]
    pub dark_mode: DarkMode,
    #[serde(default)]
    pub theme: ThemeSection,
    #[serde(skip)]
    pub plugins: Vec<Plugin>,
}

impl GeneratorConfig {
    /// The canonical Dayflow configuration.
    pub fn dayflow() -> Self {
        GeneratorConfig {
            content: vec![
                "pages/**/*.{html,js}".into(),
                "components/**/*.{html,js}".into(),
                "index.html".into(),
                "*.html".into(),
            ],
            dark_mode: DarkMode::Class,
            theme: ThemeSection {
                extend: ThemeExtension::dayflow(),
            },
            plugins: vec![transitions_plugin()],
        }
    }

    /// Apply a partial TOML override document on top of the Dayflow
    /// defaults. Theme tokens merge key-wise; content globs, when
    /// present, replace the default list wholesale. Unknown keys are
    /// rejected.
    pub fn from_toml_str(document: &str) -> Result<Self, ThemeError> {
        let overrides: GeneratorConfig = toml::from_str(document)?;
        let mut config = Self::dayflow();
        if !overrides.content.is_empty() {
            config.content = overrides.content;
        }
        config.dark_mode = overrides.dark_mode;
        config.theme.extend.merge(overrides.theme.extend);
        log::debug!(
            "loaded theme overrides; {} content globs, dark mode {:?}",
            config.content.len(),
            config.dark_mode
        );
        Ok(config)
    }

    /// Run every plugin against a fresh sink and return the collected
    /// classes in registration order.
    pub fn utilities(&self) -> CollectedUtilities {
        let mut collected = CollectedUtilities::default();
        for plugin in &self.plugins {
            plugin.register(&mut collected);
        }
        collected
    }

    /// Data-integrity pass over the whole configuration: the token
    /// table, the content globs, and every registered utility class.
    pub fn validate(&self) -> Result<(), ThemeError> {
        if self.content.is_empty() || self.content.iter().any(String::is_empty) {
            return Err(ThemeError::EmptyContentGlob);
        }
        self.theme.extend.validate()?;

        let durations = &self.theme.extend.transition_duration;
        let utilities = self.utilities();
        for (class, declarations) in &utilities.classes {
            let Some(value) = declarations.get("transition") else {
                continue;
            };
            let Some(duration) = value.split_whitespace().find(|part| {
                part.ends_with("ms") && part.trim_end_matches("ms").parse::<u32>().is_ok()
            }) else {
                continue;
            };
            if !durations.values().any(|known| known == duration) {
                return Err(ThemeError::UnknownDuration {
                    class: class.clone(),
                    duration: duration.to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dayflow_config_validates() {
        GeneratorConfig::dayflow().validate().unwrap();
    }

    #[test]
    fn test_content_globs_cover_the_root_page() {
        let config = GeneratorConfig::dayflow();
        assert!(config.content.iter().any(|glob| glob == "index.html"));
        assert_eq!(config.content.len(), 4);
    }

    #[test]
    fn test_dark_mode_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&DarkMode::Class).unwrap(), "\"class\"");
        assert_eq!(serde_json::to_string(&DarkMode::Media).unwrap(), "\"media\"");
    }

    #[test]
    fn test_config_serialization_is_reproducible() {
        let first = serde_json::to_string(&GeneratorConfig::dayflow()).unwrap();
        let second = serde_json::to_string(&GeneratorConfig::dayflow()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_toml_overrides_merge_over_defaults() {
        let document = r##"
            darkMode = "media"

            [theme.extend.colors]
            surface = "#fafafa"

            [theme.extend.spacing]
            "34" = "8.5rem"
        "##;
        let config = GeneratorConfig::from_toml_str(document).unwrap();
        assert_eq!(config.dark_mode, DarkMode::Media);
        assert_eq!(config.content.len(), 4);
        assert_eq!(
            config.theme.extend.colors.get("surface"),
            Some(&crate::tokens::ColorValue::Flat("#fafafa".into()))
        );
        assert_eq!(config.theme.extend.spacing.get("34").unwrap(), "8.5rem");
        // Untouched categories keep the full default table.
        assert_eq!(config.theme.extend.z_index.len(), 6);
        config.validate().unwrap();
    }

    #[test]
    fn test_toml_rejects_unknown_keys() {
        assert!(matches!(
            GeneratorConfig::from_toml_str("purge = true"),
            Err(ThemeError::Toml(_))
        ));
    }

    #[test]
    fn test_toml_rejects_unknown_token_category() {
        // A typo'd category must fail loudly, not vanish in the merge.
        let document = r##"
            [theme.extend.colours]
            surface = "#fafafa"
        "##;
        assert!(matches!(
            GeneratorConfig::from_toml_str(document),
            Err(ThemeError::Toml(_))
        ));
    }

    #[test]
    fn test_empty_content_glob_is_rejected() {
        let mut config = GeneratorConfig::dayflow();
        config.content.push(String::new());
        assert!(matches!(config.validate(), Err(ThemeError::EmptyContentGlob)));
    }

    #[test]
    fn test_validate_catches_unknown_transition_duration() {
        let mut config = GeneratorConfig::dayflow();
        config.theme.extend.transition_duration.clear();
        assert!(matches!(
            config.validate(),
            Err(ThemeError::UnknownDuration { .. })
        ));
    }
}
