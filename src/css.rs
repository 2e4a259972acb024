//! CSS declaration maps and text rendering.
//!
//! The class generator consumes the token table structurally; these
//! renderers exist for pipelines that want the same table as plain CSS
//! (custom properties for hand-written stylesheets, plus the registered
//! utility classes). Both renderers are pure: identical input produces
//! byte-identical output.

use std::fmt::Write as _;

use indexmap::IndexMap;

use crate::theme::ThemeExtension;
use crate::tokens::ColorValue;

/// Ordered property -> value map for a single rule body.
pub type Declarations = IndexMap<String, String>;

/// Build a single-declaration body.
pub fn declaration(property: &str, value: &str) -> Declarations {
    let mut declarations = IndexMap::new();
    declarations.insert(property.into(), value.into());
    declarations
}

/// Render the token table as a `:root` custom-property block.
///
/// Families flatten to `--color-{family}-{shade}` with the bare
/// `--color-{family}` carrying the DEFAULT shade.
pub fn render_custom_properties(theme: &ThemeExtension) -> String {
    let mut out = String::from(":root {\n");

    for (name, value) in &theme.colors {
        match value {
            ColorValue::Flat(color) => {
                let _ = writeln!(out, "  --color-{name}: {color};");
            }
            ColorValue::Family(family) => {
                let _ = writeln!(out, "  --color-{name}: {};", family.base);
                for (shade, color) in family.shades() {
                    let _ = writeln!(out, "  --color-{name}-{shade}: {color};");
                }
                let _ = writeln!(out, "  --color-{name}-foreground: {};", family.foreground);
            }
        }
    }

    for (role, stack) in &theme.font_family {
        let faces: Vec<String> = stack.0.iter().map(|face| quote_face(face)).collect();
        let _ = writeln!(out, "  --font-{role}: {};", faces.join(", "));
    }

    for (name, entry) in &theme.font_size {
        let _ = writeln!(out, "  --text-{name}: {};", entry.size());
        let _ = writeln!(out, "  --text-{name}--line-height: {};", entry.line_height());
    }

    for (key, value) in &theme.spacing {
        let _ = writeln!(out, "  --spacing-{key}: {value};");
    }
    for (name, value) in &theme.border_radius {
        let _ = writeln!(out, "  --radius-{name}: {value};");
    }
    for (name, value) in &theme.box_shadow {
        let _ = writeln!(out, "  --shadow-{name}: {value};");
    }
    for (name, value) in &theme.transition_duration {
        let _ = writeln!(out, "  --duration-{name}: {value};");
    }
    for (name, value) in &theme.transition_timing_function {
        let _ = writeln!(out, "  --ease-{name}: {value};");
    }
    for (name, value) in &theme.z_index {
        let _ = writeln!(out, "  --z-{name}: {value};");
    }
    for (name, value) in &theme.ring_width {
        let _ = writeln!(out, "  --ring-{name}: {value};");
    }
    for (name, value) in &theme.min_width {
        let _ = writeln!(out, "  --min-width-{name}: {value};");
    }
    for (name, value) in &theme.min_height {
        let _ = writeln!(out, "  --min-height-{name}: {value};");
    }
    for (name, value) in &theme.letter_spacing {
        let _ = writeln!(out, "  --tracking-{name}: {value};");
    }

    out.push_str("}\n");
    out
}

/// Render registered utility classes as CSS rules, one per class, in
/// registration order.
pub fn render_utilities(classes: &IndexMap<String, Declarations>) -> String {
    let mut out = String::new();
    for (class, declarations) in classes {
        let _ = writeln!(out, ".{class} {{");
        for (property, value) in declarations {
            let _ = writeln!(out, "  {property}: {value};");
        }
        out.push_str("}\n");
    }
    out
}

// Face names with spaces need quoting; generic families never do.
fn quote_face(face: &str) -> String {
    if face.contains(' ') {
        format!("\"{face}\"")
    } else {
        face.to_string()
    }
}
