// Color Token System
// Family scales plus flat semantic tokens, keyed the way the class
// generator expects them (`bg-primary-600`, `text-text-secondary`, ...).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A ten-shade color scale with a contrast foreground.
///
/// The field set is fixed on purpose: the generator derives class names
/// directly from these keys, so a family always exposes exactly
/// `DEFAULT`, `50`..`900` and `foreground`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorFamily {
    #[serde(rename = "DEFAULT")]
    pub base: String,
    #[serde(rename = "50")]
    pub shade_50: String,
    #[serde(rename = "100")]
    pub shade_100: String,
    #[serde(rename = "200")]
    pub shade_200: String,
    #[serde(rename = "300")]
    pub shade_300: String,
    #[serde(rename = "400")]
    pub shade_400: String,
    #[serde(rename = "500")]
    pub shade_500: String,
    #[serde(rename = "600")]
    pub shade_600: String,
    #[serde(rename = "700")]
    pub shade_700: String,
    #[serde(rename = "800")]
    pub shade_800: String,
    #[serde(rename = "900")]
    pub shade_900: String,
    pub foreground: String,
}

impl ColorFamily {
    /// Shades in ascending key order, without `DEFAULT` and `foreground`.
    pub fn shades(&self) -> [(u16, &str); 10] {
        [
            (50, self.shade_50.as_str()),
            (100, self.shade_100.as_str()),
            (200, self.shade_200.as_str()),
            (300, self.shade_300.as_str()),
            (400, self.shade_400.as_str()),
            (500, self.shade_500.as_str()),
            (600, self.shade_600.as_str()),
            (700, self.shade_700.as_str()),
            (800, self.shade_800.as_str()),
            (900, self.shade_900.as_str()),
        ]
    }

    /// Every value in the family, labeled for diagnostics.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("DEFAULT", self.base.as_str()),
            ("50", self.shade_50.as_str()),
            ("100", self.shade_100.as_str()),
            ("200", self.shade_200.as_str()),
            ("300", self.shade_300.as_str()),
            ("400", self.shade_400.as_str()),
            ("500", self.shade_500.as_str()),
            ("600", self.shade_600.as_str()),
            ("700", self.shade_700.as_str()),
            ("800", self.shade_800.as_str()),
            ("900", self.shade_900.as_str()),
            ("foreground", self.foreground.as_str()),
        ]
    }
}

/// A color entry is either a full family or a single flat value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    Family(ColorFamily),
    Flat(String),
}

// Brand scale - indigo. DEFAULT tracks the 600 shade so `bg-primary`
// and `bg-primary-600` render identically.
pub fn primary() -> ColorFamily {
    ColorFamily {
        base: "#4f46e5".into(),
        shade_50: "#eef2ff".into(),
        shade_100: "#e0e7ff".into(),
        shade_200: "#c7d2fe".into(),
        shade_300: "#a5b4fc".into(),
        shade_400: "#818cf8".into(),
        shade_500: "#6366f1".into(),
        shade_600: "#4f46e5".into(),
        shade_700: "#4338ca".into(),
        shade_800: "#3730a3".into(),
        shade_900: "#312e81".into(),
        foreground: "#ffffff".into(),
    }
}

pub fn success() -> ColorFamily {
    ColorFamily {
        base: "#059669".into(),
        shade_50: "#ecfdf5".into(),
        shade_100: "#d1fae5".into(),
        shade_200: "#a7f3d0".into(),
        shade_300: "#6ee7b9".into(),
        shade_400: "#34d399".into(),
        shade_500: "#10b981".into(),
        shade_600: "#059669".into(),
        shade_700: "#047857".into(),
        shade_800: "#065f46".into(),
        shade_900: "#064e3b".into(),
        foreground: "#ffffff".into(),
    }
}

pub fn warning() -> ColorFamily {
    ColorFamily {
        base: "#d97706".into(),
        shade_50: "#fffbeb".into(),
        shade_100: "#fef3c7".into(),
        shade_200: "#fde68a".into(),
        shade_300: "#fcd34d".into(),
        shade_400: "#fbbf24".into(),
        shade_500: "#f59e0b".into(),
        shade_600: "#d97706".into(),
        shade_700: "#b45309".into(),
        shade_800: "#92400e".into(),
        shade_900: "#78350f".into(),
        foreground: "#ffffff".into(),
    }
}

pub fn error() -> ColorFamily {
    ColorFamily {
        base: "#e11d48".into(),
        shade_50: "#fff1f2".into(),
        shade_100: "#ffe4e6".into(),
        shade_200: "#fecdd3".into(),
        shade_300: "#fda4af".into(),
        shade_400: "#fb7185".into(),
        shade_500: "#f43f5e".into(),
        shade_600: "#e11d48".into(),
        shade_700: "#be123c".into(),
        shade_800: "#9f1239".into(),
        shade_900: "#881337".into(),
        foreground: "#ffffff".into(),
    }
}

pub fn info() -> ColorFamily {
    ColorFamily {
        base: "#0284c7".into(),
        shade_50: "#f0f9ff".into(),
        shade_100: "#e0f2fe".into(),
        shade_200: "#bae6fd".into(),
        shade_300: "#7dd3fc".into(),
        shade_400: "#38bdf8".into(),
        shade_500: "#0ea5e9".into(),
        shade_600: "#0284c7".into(),
        shade_700: "#0369a1".into(),
        shade_800: "#075985".into(),
        shade_900: "#0c4a6e".into(),
        foreground: "#ffffff".into(),
    }
}

/// The complete color table: five families followed by the flat
/// semantic tokens (slate-derived surfaces and text colors).
pub fn colors() -> IndexMap<String, ColorValue> {
    let mut colors = IndexMap::new();
    colors.insert("primary".into(), ColorValue::Family(primary()));
    colors.insert("success".into(), ColorValue::Family(success()));
    colors.insert("warning".into(), ColorValue::Family(warning()));
    colors.insert("error".into(), ColorValue::Family(error()));
    colors.insert("info".into(), ColorValue::Family(info()));

    let flats = [
        ("background", "#f8fafc"),
        ("surface", "#ffffff"),
        ("surface-muted", "#f1f5f9"),
        ("border", "#e2e8f0"),
        ("border-strong", "#cbd5e1"),
        ("text-primary", "#0f172a"),
        ("text-secondary", "#475569"),
        ("text-muted", "#94a3b8"),
        ("text-inverse", "#f8fafc"),
        ("overlay", "rgba(15, 23, 42, 0.6)"),
    ];
    for (name, value) in flats {
        colors.insert(name.into(), ColorValue::Flat(value.into()));
    }
    colors
}

/// Syntactic check used by validation and tests. The table itself never
/// validates at declaration time; values stay opaque until a build asks.
pub fn is_valid_color(value: &str) -> bool {
    if let Some(digits) = value.strip_prefix('#') {
        return matches!(digits.len(), 3 | 6 | 8)
            && digits.chars().all(|c| c.is_ascii_hexdigit());
    }
    let body = value
        .strip_prefix("rgba(")
        .or_else(|| value.strip_prefix("rgb("))
        .and_then(|rest| rest.strip_suffix(')'));
    let Some(body) = body else {
        return false;
    };
    let components: Vec<&str> = body.split(',').map(str::trim).collect();
    matches!(components.len(), 3 | 4)
        && components
            .iter()
            .all(|part| part.trim_end_matches('%').parse::<f64>().is_ok())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn test_family_serializes_with_fixed_key_set() {
        let json = serde_json::to_value(primary()).unwrap();
        let keys: BTreeSet<&str> = json.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        let expected: BTreeSet<&str> = [
            "DEFAULT", "50", "100", "200", "300", "400", "500", "600", "700", "800", "900",
            "foreground",
        ]
        .into_iter()
        .collect();
        assert_eq!(keys, expected);
    }

    #[test]
    fn test_every_color_value_is_syntactically_valid() {
        for (name, value) in colors() {
            match value {
                ColorValue::Family(family) => {
                    for (label, color) in family.entries() {
                        assert!(is_valid_color(color), "{name}.{label} = {color}");
                    }
                }
                ColorValue::Flat(color) => {
                    assert!(is_valid_color(&color), "{name} = {color}");
                }
            }
        }
    }

    #[test]
    fn test_default_tracks_the_600_shade() {
        for family in [primary(), success(), warning(), error(), info()] {
            assert_eq!(family.base, family.shade_600);
        }
    }

    #[test]
    fn test_color_value_distinguishes_flat_from_family() {
        let flat: ColorValue = serde_json::from_str("\"#ffffff\"").unwrap();
        assert_eq!(flat, ColorValue::Flat("#ffffff".into()));

        let family = serde_json::to_string(&ColorValue::Family(info())).unwrap();
        let roundtrip: ColorValue = serde_json::from_str(&family).unwrap();
        assert_eq!(roundtrip, ColorValue::Family(info()));
    }

    #[test]
    fn test_color_syntax_check_rejects_garbage() {
        assert!(is_valid_color("#fff"));
        assert!(is_valid_color("#4f46e5"));
        assert!(is_valid_color("#0f172a99"));
        assert!(is_valid_color("rgba(15, 23, 42, 0.6)"));
        assert!(!is_valid_color("#4f46e"));
        assert!(!is_valid_color("#gggggg"));
        assert!(!is_valid_color("blurple"));
        assert!(!is_valid_color("rgb(1, 2, 3"));
    }

    #[test]
    fn test_functional_colors_need_numeric_components() {
        assert!(is_valid_color("rgb(79, 70, 229)"));
        assert!(is_valid_color("rgb(50%, 20%, 10%)"));
        assert!(!is_valid_color("rgb()"));
        assert!(!is_valid_color("rgba(junk)"));
        assert!(!is_valid_color("rgba(15, 23, 42)rgba"));
        assert!(!is_valid_color("rgba(15, 23, 42, 0.6, 1)"));
    }
}
