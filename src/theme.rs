//! The assembled token table and its merge semantics.
//!
//! The table is built once per process and read many times; nothing
//! mutates it after assembly. Merging is the crate-side half of the
//! consumer's theme-extension mechanism: token categories extend the
//! consumer's defaults, later declarations win key-wise, and the
//! position of a key is fixed by its first declaration.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::ThemeError;
use crate::tokens::{self, ColorValue, FontSize, FontStack, GENERIC_FAMILIES};

/// The complete theme-extension mapping, one field per token category.
/// Field names serialize to the camelCase keys the class generator reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ThemeExtension {
    pub colors: IndexMap<String, ColorValue>,
    pub font_family: IndexMap<String, FontStack>,
    pub font_size: IndexMap<String, FontSize>,
    pub spacing: IndexMap<String, String>,
    pub border_radius: IndexMap<String, String>,
    pub box_shadow: IndexMap<String, String>,
    pub transition_duration: IndexMap<String, String>,
    pub transition_timing_function: IndexMap<String, String>,
    pub z_index: IndexMap<String, i32>,
    pub ring_width: IndexMap<String, String>,
    pub min_width: IndexMap<String, String>,
    pub min_height: IndexMap<String, String>,
    pub letter_spacing: IndexMap<String, String>,
}

impl ThemeExtension {
    /// The canonical Dayflow table.
    pub fn dayflow() -> Self {
        ThemeExtension {
            colors: tokens::colors(),
            font_family: tokens::font_family(),
            font_size: tokens::font_size(),
            spacing: tokens::spacing(),
            border_radius: tokens::border_radius(),
            box_shadow: tokens::box_shadow(),
            transition_duration: tokens::transition_duration(),
            transition_timing_function: tokens::transition_timing_function(),
            z_index: tokens::z_index(),
            ring_width: tokens::ring_width(),
            min_width: tokens::min_width(),
            min_height: tokens::min_height(),
            letter_spacing: tokens::letter_spacing(),
        }
    }

    /// Key-wise override. Existing keys keep their position and take the
    /// incoming value; new keys append in declaration order.
    pub fn merge(&mut self, other: ThemeExtension) {
        let categories = other.colors.len()
            + other.font_family.len()
            + other.font_size.len()
            + other.spacing.len()
            + other.border_radius.len()
            + other.box_shadow.len()
            + other.transition_duration.len()
            + other.transition_timing_function.len()
            + other.z_index.len()
            + other.ring_width.len()
            + other.min_width.len()
            + other.min_height.len()
            + other.letter_spacing.len();
        log::debug!("merging theme extension with {categories} token overrides");

        self.colors.extend(other.colors);
        self.font_family.extend(other.font_family);
        self.font_size.extend(other.font_size);
        self.spacing.extend(other.spacing);
        self.border_radius.extend(other.border_radius);
        self.box_shadow.extend(other.box_shadow);
        self.transition_duration.extend(other.transition_duration);
        self.transition_timing_function
            .extend(other.transition_timing_function);
        self.z_index.extend(other.z_index);
        self.ring_width.extend(other.ring_width);
        self.min_width.extend(other.min_width);
        self.min_height.extend(other.min_height);
        self.letter_spacing.extend(other.letter_spacing);
    }

    /// Data-integrity pass over the table. Returns the first violation.
    pub fn validate(&self) -> Result<(), ThemeError> {
        for (name, value) in &self.colors {
            match value {
                ColorValue::Family(family) => {
                    for (label, color) in family.entries() {
                        if !tokens::is_valid_color(color) {
                            return Err(ThemeError::InvalidColor {
                                token: format!("{name}.{label}"),
                                value: color.to_string(),
                            });
                        }
                    }
                }
                ColorValue::Flat(color) => {
                    if !tokens::is_valid_color(color) {
                        return Err(ThemeError::InvalidColor {
                            token: name.clone(),
                            value: color.clone(),
                        });
                    }
                }
            }
        }

        for (role, stack) in &self.font_family {
            if stack.0.is_empty() {
                return Err(ThemeError::BadFontStack {
                    role: role.clone(),
                    reason: "stack is empty".into(),
                });
            }
            match stack.generic() {
                Some(generic) if GENERIC_FAMILIES.contains(&generic) => {}
                _ => {
                    return Err(ThemeError::BadFontStack {
                        role: role.clone(),
                        reason: "stack does not end in a generic family".into(),
                    });
                }
            }
        }

        for (name, entry) in &self.font_size {
            let ratio = entry.line_height().parse::<f64>().ok();
            if !matches!(ratio, Some(ratio) if ratio > 0.0) {
                return Err(ThemeError::BadLineHeight {
                    name: name.clone(),
                    value: entry.line_height().to_string(),
                });
            }
        }

        let mut ordered: Vec<(f64, f64, &String, &String)> = Vec::new();
        for (key, value) in &self.spacing {
            let numeric_key = key.parse::<f64>().ok();
            let rem = tokens::parse_rem(value);
            match (numeric_key, rem) {
                (Some(numeric_key), Some(rem)) => ordered.push((numeric_key, rem, key, value)),
                _ => {
                    return Err(ThemeError::NonMonotonicSpacing {
                        key: key.clone(),
                        value: value.clone(),
                    });
                }
            }
        }
        ordered.sort_by(|a, b| a.0.total_cmp(&b.0));
        let mut previous = f64::NEG_INFINITY;
        for (_, rem, key, value) in ordered {
            if rem <= previous {
                return Err(ThemeError::NonMonotonicSpacing {
                    key: key.clone(),
                    value: value.clone(),
                });
            }
            previous = rem;
        }

        let mut previous_layer = i32::MIN;
        for (name, value) in &self.z_index {
            if *value <= previous_layer {
                return Err(ThemeError::MisorderedLayer { name: name.clone() });
            }
            previous_layer = *value;
        }

        Ok(())
    }
}

static DAYFLOW: Lazy<ThemeExtension> = Lazy::new(ThemeExtension::dayflow);

/// Shared read-only handle to the Dayflow table.
pub fn dayflow_theme() -> &'static ThemeExtension {
    &DAYFLOW
}
