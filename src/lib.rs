//! Design token table for the Dayflow HRMS styling pipeline.
//!
//! A declarative, internally consistent set of named design values
//! (colors, typography, spacing, shadows, radii, motion, z-index
//! layers, sizing) plus three transition utility classes, packaged as
//! the theme-extension input of a utility-class CSS generator. The
//! generator owns file scanning and class emission; this crate owns the
//! table.
//!
//! The table is assembled once ([`dayflow_theme`]) and read many times.
//! [`GeneratorConfig::dayflow`] bundles it with the content globs, the
//! class-based dark-mode flag, and the plugin list the generator
//! consumes wholesale.

pub mod config;
pub mod css;
pub mod error;
pub mod plugin;
pub mod theme;
pub mod tokens;

pub use config::{DarkMode, GeneratorConfig, ThemeSection};
pub use css::{render_custom_properties, render_utilities, Declarations};
pub use error::ThemeError;
pub use plugin::{transitions_plugin, CollectedUtilities, Plugin, UtilitySink};
pub use theme::{dayflow_theme, ThemeExtension};
