// Typography Token System
// Font stacks per semantic role plus a rem type scale with unitless
// line-height ratios.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Generic CSS families a stack is allowed to end in.
pub const GENERIC_FAMILIES: &[&str] = &["serif", "sans-serif", "monospace"];

/// Ordered font fallback list. The first entry is the primary face and
/// the last entry must be one of [`GENERIC_FAMILIES`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontStack(pub Vec<String>);

impl FontStack {
    pub fn new<const N: usize>(faces: [&str; N]) -> Self {
        FontStack(faces.iter().map(|face| face.to_string()).collect())
    }

    pub fn primary(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn generic(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineHeight {
    #[serde(rename = "lineHeight")]
    pub line_height: String,
}

/// A type-scale entry. Serializes as `["0.875rem", {"lineHeight": "1.5"}]`,
/// the two-element form the class generator consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSize(pub String, pub LineHeight);

impl FontSize {
    pub fn new(size: &str, ratio: &str) -> Self {
        FontSize(
            size.into(),
            LineHeight {
                line_height: ratio.into(),
            },
        )
    }

    pub fn size(&self) -> &str {
        &self.0
    }

    pub fn line_height(&self) -> &str {
        &self.1.line_height
    }
}

pub fn font_family() -> IndexMap<String, FontStack> {
    let mut family = IndexMap::new();
    family.insert(
        "heading".into(),
        FontStack::new(["Lexend", "Inter", "system-ui", "sans-serif"]),
    );
    family.insert(
        "body".into(),
        FontStack::new(["Inter", "system-ui", "Segoe UI", "sans-serif"]),
    );
    family.insert(
        "caption".into(),
        FontStack::new(["Inter", "system-ui", "sans-serif"]),
    );
    family.insert(
        "mono".into(),
        FontStack::new(["JetBrains Mono", "SFMono-Regular", "Menlo", "monospace"]),
    );
    family
}

// Sizes shrink line height as they grow; headings sit tighter than body copy.
pub fn font_size() -> IndexMap<String, FontSize> {
    let mut sizes = IndexMap::new();
    sizes.insert("xs".into(), FontSize::new("0.75rem", "1.5"));
    sizes.insert("sm".into(), FontSize::new("0.875rem", "1.5"));
    sizes.insert("base".into(), FontSize::new("1rem", "1.6"));
    sizes.insert("lg".into(), FontSize::new("1.125rem", "1.6"));
    sizes.insert("xl".into(), FontSize::new("1.25rem", "1.4"));
    sizes.insert("2xl".into(), FontSize::new("1.5rem", "1.3"));
    sizes.insert("3xl".into(), FontSize::new("1.875rem", "1.25"));
    sizes.insert("4xl".into(), FontSize::new("2.25rem", "1.2"));
    sizes
}
